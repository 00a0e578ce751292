//! Order Model
//!
//! Raw order lines as posted by the web page. Monetary fields are
//! [`Decimal`] so no precision is lost before the receipt is formatted.

use std::fmt;

use rust_decimal::Decimal;
use serde::de::{self, Deserializer, Unexpected, Visitor};
use serde::{Deserialize, Serialize};

/// Quantities arrive as JSON numbers; whole floats like `2.0` are accepted
fn deserialize_quantity<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    deserializer.deserialize_any(QuantityVisitor)
}

struct QuantityVisitor;

impl<'de> Visitor<'de> for QuantityVisitor {
    type Value = u32;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a non-negative whole quantity")
    }

    fn visit_u64<E: de::Error>(self, value: u64) -> Result<u32, E> {
        u32::try_from(value).map_err(|_| E::invalid_value(Unexpected::Unsigned(value), &self))
    }

    fn visit_i64<E: de::Error>(self, value: i64) -> Result<u32, E> {
        u32::try_from(value).map_err(|_| E::invalid_value(Unexpected::Signed(value), &self))
    }

    fn visit_f64<E: de::Error>(self, value: f64) -> Result<u32, E> {
        if value.fract() == 0.0 && (0.0..=u32::MAX as f64).contains(&value) {
            Ok(value as u32)
        } else {
            Err(E::invalid_value(Unexpected::Float(value), &self))
        }
    }
}

/// Add-on attached to an order line (e.g. extra shot, topping)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderLineExtra {
    pub name: String,
    /// Unit price excluding VAT
    pub unit_price_ex_vat: Decimal,
    pub vat_percent: Decimal,
    /// Quantity per unit of the parent line
    #[serde(deserialize_with = "deserialize_quantity")]
    pub quantity: u32,
    #[serde(default)]
    pub discount_percent: Decimal,
}

/// Order line (one product entry on the receipt)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderLine {
    pub name: String,
    /// Unit price excluding VAT
    pub unit_price_ex_vat: Decimal,
    pub vat_percent: Decimal,
    #[serde(deserialize_with = "deserialize_quantity")]
    pub quantity: u32,
    #[serde(default)]
    pub discount_percent: Decimal,
    #[serde(default)]
    pub extras: Vec<OrderLineExtra>,
}

impl OrderLineExtra {
    /// True if any monetary field is negative
    pub fn has_negative_amounts(&self) -> bool {
        self.unit_price_ex_vat.is_sign_negative()
            || self.vat_percent.is_sign_negative()
            || self.discount_percent.is_sign_negative()
    }
}

impl OrderLine {
    /// True if this line or any of its extras carries a negative monetary field
    pub fn has_negative_amounts(&self) -> bool {
        self.unit_price_ex_vat.is_sign_negative()
            || self.vat_percent.is_sign_negative()
            || self.discount_percent.is_sign_negative()
            || self.extras.iter().any(OrderLineExtra::has_negative_amounts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_deserialize_web_payload() {
        let json = r#"{
            "orderProductId": 11,
            "orderId": 4,
            "name": "Burger",
            "unitPriceExVat": 120,
            "vatPercent": 15,
            "vatCode": "3",
            "quantity": 2,
            "discountPercent": 0,
            "comment": "",
            "extras": [
                {
                    "orderProductExtraId": 1,
                    "name": "Cheese",
                    "unitPriceExVat": 8.5,
                    "vatPercent": 15,
                    "quantity": 1,
                    "discountPercent": 10,
                    "extraType": "addon"
                }
            ]
        }"#;

        let line: OrderLine = serde_json::from_str(json).unwrap();
        assert_eq!(line.name, "Burger");
        assert_eq!(line.unit_price_ex_vat, dec!(120));
        assert_eq!(line.quantity, 2);
        assert_eq!(line.extras.len(), 1);
        assert_eq!(line.extras[0].unit_price_ex_vat, dec!(8.5));
        assert_eq!(line.extras[0].discount_percent, dec!(10));
    }

    #[test]
    fn test_extras_default_to_empty() {
        let json = r#"{"name":"Tea","unitPriceExVat":20,"vatPercent":25,"quantity":1}"#;
        let line: OrderLine = serde_json::from_str(json).unwrap();
        assert!(line.extras.is_empty());
        assert_eq!(line.discount_percent, Decimal::ZERO);
    }

    #[test]
    fn test_whole_float_quantity_accepted() {
        let json = r#"{"name":"Tea","unitPriceExVat":20,"vatPercent":25,"quantity":3.0,
            "extras":[{"name":"Lemon","unitPriceExVat":2,"vatPercent":25,"quantity":1.0}]}"#;
        let line: OrderLine = serde_json::from_str(json).unwrap();
        assert_eq!(line.quantity, 3);
        assert_eq!(line.extras[0].quantity, 1);
    }

    #[test]
    fn test_invalid_quantities_rejected() {
        for quantity in ["2.5", "-1", "4294967296", "\"2\""] {
            let json = format!(
                r#"{{"name":"Tea","unitPriceExVat":20,"vatPercent":25,"quantity":{}}}"#,
                quantity
            );
            assert!(serde_json::from_str::<OrderLine>(&json).is_err(), "{}", quantity);
        }
    }

    #[test]
    fn test_negative_amounts_detected_in_extras() {
        let line = OrderLine {
            name: "Soup".to_string(),
            unit_price_ex_vat: dec!(50),
            vat_percent: dec!(15),
            quantity: 1,
            discount_percent: Decimal::ZERO,
            extras: vec![OrderLineExtra {
                name: "Bread".to_string(),
                unit_price_ex_vat: dec!(-5),
                vat_percent: dec!(15),
                quantity: 1,
                discount_percent: Decimal::ZERO,
            }],
        };
        assert!(line.has_negative_amounts());
        assert!(line.extras[0].has_negative_amounts());
    }
}
