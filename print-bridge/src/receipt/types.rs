//! Receipt model types

use rust_decimal::Decimal;

/// Extra as printed under its parent item
#[derive(Debug, Clone, PartialEq)]
pub struct ReceiptExtraItem {
    pub name: String,
    /// Extra quantity multiplied by the parent quantity
    pub quantity: u32,
    /// Unit price including VAT
    pub price: Decimal,
}

/// One printed item row group
#[derive(Debug, Clone, PartialEq)]
pub struct ReceiptLineItem {
    pub name: String,
    pub quantity: u32,
    /// Unit price including VAT
    pub price: Decimal,
    pub extras: Vec<ReceiptExtraItem>,
}

/// `value * percent / 100`, saturating
pub(crate) fn percent_of(value: Decimal, percent: Decimal) -> Decimal {
    value.saturating_mul(percent) / Decimal::ONE_HUNDRED
}

/// Totals accumulated over every line and extra of an order
///
/// Kept at full precision; rounding happens only in `format_number`.
/// Arithmetic saturates at the `Decimal` range, so out-of-range input
/// yields clamped totals instead of a panic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RunningTotals {
    /// Sum of pre-tax line values
    pub subtotal: Decimal,
    pub vat_total: Decimal,
    pub discount_total: Decimal,
}

impl RunningTotals {
    /// Fold one priced quantity into the totals
    pub fn add(
        &mut self,
        unit_price_ex_vat: Decimal,
        quantity: u32,
        vat_percent: Decimal,
        discount_percent: Decimal,
    ) {
        let line_value = unit_price_ex_vat.saturating_mul(Decimal::from(quantity));
        self.subtotal = self.subtotal.saturating_add(line_value);
        self.vat_total = self
            .vat_total
            .saturating_add(percent_of(line_value, vat_percent));
        self.discount_total = self
            .discount_total
            .saturating_add(percent_of(line_value, discount_percent));
    }

    /// Amount charged: subtotal plus VAT
    pub fn gross_total(&self) -> Decimal {
        self.subtotal.saturating_add(self.vat_total)
    }

    /// True if any total was clamped at the `Decimal` range
    pub fn is_saturated(&self) -> bool {
        [self.subtotal, self.vat_total, self.discount_total, self.gross_total()]
            .iter()
            .any(|v| *v == Decimal::MAX || *v == Decimal::MIN)
    }
}

impl std::ops::Add for RunningTotals {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self {
            subtotal: self.subtotal.saturating_add(rhs.subtotal),
            vat_total: self.vat_total.saturating_add(rhs.vat_total),
            discount_total: self.discount_total.saturating_add(rhs.discount_total),
        }
    }
}
