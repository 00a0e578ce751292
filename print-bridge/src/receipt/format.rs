//! Number and date formatting for receipts (nb/de conventions)

use chrono::{DateTime, TimeZone};
use rust_decimal::prelude::*;

/// Decimal places printed for monetary values
const DECIMAL_PLACES: u32 = 2;

/// Format a monetary value with two decimals and a comma separator
///
/// This is the only place values are rounded (half away from zero).
pub fn format_number(value: Decimal) -> String {
    let rounded =
        value.round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero);
    format!("{:.2}", rounded).replace('.', ",")
}

/// Format a timestamp as `d.m.yyyy HH:MM`
pub fn format_date<Tz: TimeZone>(date: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    date.format("%-d.%-m.%Y %H:%M").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, Utc};
    use rust_decimal_macros::dec;

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(dec!(1234.5)), "1234,50");
        assert_eq!(format_number(Decimal::ZERO), "0,00");
        assert_eq!(format_number(dec!(50)), "50,00");
    }

    #[test]
    fn test_format_number_rounds_half_away_from_zero() {
        assert_eq!(format_number(dec!(1.005)), "1,01");
        assert_eq!(format_number(dec!(2.344)), "2,34");
        assert_eq!(format_number(dec!(-3.505)), "-3,51");
    }

    #[test]
    fn test_format_number_negative() {
        assert_eq!(format_number(dec!(-3.5)), "-3,50");
    }

    #[test]
    fn test_format_number_full_precision_input() {
        // 8.5 * 1.15
        assert_eq!(format_number(dec!(9.775)), "9,78");
    }

    #[test]
    fn test_format_date() {
        let date = Utc.with_ymd_and_hms(2024, 3, 7, 9, 5, 0).unwrap();
        assert_eq!(format_date(&date), "7.3.2024 09:05");
    }

    #[test]
    fn test_format_date_uses_timestamp_zone() {
        let oslo = FixedOffset::east_opt(2 * 3600).unwrap();
        let date = Utc
            .with_ymd_and_hms(2024, 12, 31, 23, 30, 0)
            .unwrap()
            .with_timezone(&oslo);
        assert_eq!(format_date(&date), "1.1.2025 01:30");
    }
}
