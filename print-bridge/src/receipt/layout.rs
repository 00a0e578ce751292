//! Fixed-width receipt layout
//!
//! Item table (font B, 64 columns on 80mm paper):
//!
//! ```text
//! |<------------- 39 ------------->|<- 6 ->|<-- 10 -->|<- 8 ->|
//! Coffee                                2      x      50,00
//!   Oat milk                            2      x       6,25
//! ```
//!
//! Names longer than the product column are hard-split every 39
//! characters; only the first row of an item carries quantity and price.

use receipt_printer::{char_width, pad, truncate};
use rust_decimal::Decimal;

use super::format::format_number;
use super::types::ReceiptLineItem;

pub const PRODUCT_COLUMN_WIDTH: usize = 39;
pub const QUANTITY_COLUMN_WIDTH: usize = 6;
pub const PRICE_COLUMN_WIDTH: usize = 18;

/// Separator between the quantity and price columns
pub const MULTIPLY_GLYPH: &str = "      x   ";

/// Indent of extras under their item
const EXTRA_INDENT: &str = "  ";

/// Width of the totals label column
const SUMMARY_LABEL_WIDTH: usize = 45;

/// Width of the totals value column
const SUMMARY_VALUE_WIDTH: usize = 18;

/// Width of the separator lines around the totals
const SEPARATOR_WIDTH: usize = 64;

/// Split a name into product-column chunks
///
/// Every remainder after a cut is prefixed with `indent` before it is
/// chunked again, so indented names stay indented on continuation rows.
fn wrap_name(name: String, indent: &str) -> Vec<String> {
    let mut rows = Vec::new();
    let mut rest = name;
    while char_width(&rest) > PRODUCT_COLUMN_WIDTH {
        let head = truncate(&rest, PRODUCT_COLUMN_WIDTH);
        let tail: String = rest.chars().skip(PRODUCT_COLUMN_WIDTH).collect();
        rows.push(head);
        rest = format!("{}{}", indent, tail);
    }
    rows.push(rest);
    rows
}

/// Render the rows of one item or extra
fn layout_rows(chunks: Vec<String>, quantity: u32, price: Decimal, out: &mut Vec<String>) {
    let quantity_str = pad(&quantity.to_string(), QUANTITY_COLUMN_WIDTH, true);
    let price_str = pad(
        &format_number(price),
        PRICE_COLUMN_WIDTH - MULTIPLY_GLYPH.len(),
        true,
    );

    for (index, chunk) in chunks.iter().enumerate() {
        let name = pad(chunk, PRODUCT_COLUMN_WIDTH, false);
        if index == 0 {
            out.push(format!("{}{}{}{}", name, quantity_str, MULTIPLY_GLYPH, price_str));
        } else {
            out.push(name);
        }
    }
}

/// Render the item table
///
/// Rows are joined with `\n` (no trailing newline): each item's rows,
/// then the rows of its extras in order, then the next item.
pub fn format_receipt_items(items: &[ReceiptLineItem]) -> String {
    let mut rows = Vec::new();

    for item in items {
        layout_rows(wrap_name(item.name.clone(), ""), item.quantity, item.price, &mut rows);

        for extra in &item.extras {
            let chunks = wrap_name(format!("{}{}", EXTRA_INDENT, extra.name), EXTRA_INDENT);
            layout_rows(chunks, extra.quantity, extra.price, &mut rows);
        }
    }

    rows.join("\n")
}

fn summary_row(label: &str, value: Decimal) -> String {
    format!(
        "{}{}",
        pad(label, SUMMARY_LABEL_WIDTH, true),
        pad(&format_number(value), SUMMARY_VALUE_WIDTH, true)
    )
}

/// Render the totals block
///
/// Starts with two newlines so one empty row separates it from the item
/// table printed right before it.
pub fn format_subtotal_block(subtotal: Decimal, vat_total: Decimal, discount: Decimal) -> String {
    let separator = "-".repeat(SEPARATOR_WIDTH);

    [
        "\n".to_string(),
        separator.clone(),
        summary_row("Subtotal:", subtotal),
        summary_row("Herav MVA:", vat_total),
        summary_row("Discount:", discount),
        separator,
    ]
    .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::receipt::types::ReceiptExtraItem;
    use rust_decimal_macros::dec;

    fn item(name: &str, quantity: u32, price: Decimal) -> ReceiptLineItem {
        ReceiptLineItem {
            name: name.to_string(),
            quantity,
            price,
            extras: vec![],
        }
    }

    fn extra(name: &str, quantity: u32, price: Decimal) -> ReceiptExtraItem {
        ReceiptExtraItem {
            name: name.to_string(),
            quantity,
            price,
        }
    }

    #[test]
    fn test_single_item_row() {
        let out = format_receipt_items(&[item("Coffee", 2, dec!(50))]);
        let expected = format!("{:<39}{}{}{}", "Coffee", "     2", "      x   ", "   50,00");
        assert_eq!(out, expected);
        assert_eq!(char_width(&out), 63);
    }

    #[test]
    fn test_long_name_wraps_into_two_rows() {
        let name = "A".repeat(39) + "BCDEFG";
        assert_eq!(char_width(&name), 45);

        let out = format_receipt_items(&[item(&name, 1, dec!(10))]);
        let rows: Vec<&str> = out.split('\n').collect();
        assert_eq!(rows.len(), 2);
        assert!(rows[0].starts_with(&"A".repeat(39)));
        assert!(rows[0].ends_with("   10,00"));
        assert_eq!(rows[1], format!("{:<39}", "BCDEFG"));
    }

    #[test]
    fn test_name_of_exactly_column_width_does_not_wrap() {
        let name = "N".repeat(39);
        let out = format_receipt_items(&[item(&name, 1, dec!(1))]);
        assert_eq!(out.split('\n').count(), 1);
    }

    #[test]
    fn test_very_long_name_wraps_many_times() {
        let name = "x".repeat(100);
        let out = format_receipt_items(&[item(&name, 1, dec!(1))]);
        let rows: Vec<&str> = out.split('\n').collect();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[2], format!("{:<39}", "x".repeat(22)));
    }

    #[test]
    fn test_extras_are_indented() {
        let mut coffee = item("Coffee", 2, dec!(50));
        coffee.extras.push(extra("Oat milk", 2, dec!(6.25)));

        let out = format_receipt_items(&[coffee]);
        let rows: Vec<&str> = out.split('\n').collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(
            rows[1],
            format!("{:<39}{}{}{}", "  Oat milk", "     2", MULTIPLY_GLYPH, "    6,25")
        );
    }

    #[test]
    fn test_wrapped_extra_keeps_indent_on_every_row() {
        // 2 + 80 characters: cut at 39, remainder re-indented twice
        let name = "e".repeat(80);
        let mut base = item("Pizza", 1, dec!(100));
        base.extras.push(extra(&name, 1, dec!(5)));

        let out = format_receipt_items(&[base]);
        let rows: Vec<&str> = out.split('\n').collect();
        assert_eq!(rows.len(), 4);
        assert_eq!(&rows[1][..39], format!("  {}", "e".repeat(37)));
        assert!(rows[1].ends_with("    5,00"));
        assert_eq!(rows[2], format!("  {}", "e".repeat(37)));
        assert_eq!(rows[3], format!("{:<39}", format!("  {}", "e".repeat(6))));
    }

    #[test]
    fn test_item_order_is_preserved() {
        let mut first = item("First", 1, dec!(1));
        first.extras.push(extra("First extra", 1, dec!(1)));
        let second = item("Second", 1, dec!(1));

        let out = format_receipt_items(&[first, second]);
        let names: Vec<String> = out
            .split('\n')
            .map(|row| row.chars().take(PRODUCT_COLUMN_WIDTH).collect::<String>().trim().to_string())
            .collect();
        assert_eq!(names, vec!["First", "First extra", "Second"]);
    }

    #[test]
    fn test_non_ascii_names_are_measured_in_characters() {
        let out = format_receipt_items(&[item("Rømmegrøt", 1, dec!(89))]);
        assert_eq!(char_width(&out), 63);
    }

    #[test]
    fn test_empty_items() {
        assert_eq!(format_receipt_items(&[]), "");
    }

    #[test]
    fn test_formatting_is_idempotent() {
        let mut coffee = item("Coffee with a rather long descriptive name", 3, dec!(45.5));
        coffee.extras.push(extra("Extra shot", 6, dec!(12.5)));
        let items = vec![coffee, item("Bun", 1, dec!(35))];

        assert_eq!(format_receipt_items(&items), format_receipt_items(&items));
    }

    #[test]
    fn test_subtotal_block() {
        let out = format_subtotal_block(dec!(100), dec!(20), dec!(0));
        let rows: Vec<&str> = out.split('\n').collect();

        assert_eq!(rows.len(), 7);
        assert_eq!(rows[0], "");
        assert_eq!(rows[1], "");
        assert_eq!(rows[2], "-".repeat(64));
        assert_eq!(rows[3], format!("{:>45}{:>18}", "Subtotal:", "100,00"));
        assert_eq!(rows[4], format!("{:>45}{:>18}", "Herav MVA:", "20,00"));
        assert_eq!(rows[5], format!("{:>45}{:>18}", "Discount:", "0,00"));
        assert_eq!(rows[6], "-".repeat(64));
    }
}
