//! Order Aggregation
//!
//! Turns raw order lines into printable items and accumulates the
//! subtotal, VAT and discount totals in a single pass.
//!
//! Uses rust_decimal throughout; nothing is rounded here. Amounts beyond
//! the `Decimal` range saturate rather than panic.

use rust_decimal::Decimal;
use shared::models::{OrderLine, OrderLineExtra};

use super::types::{ReceiptExtraItem, ReceiptLineItem, RunningTotals, percent_of};

/// Printable items plus the order totals
#[derive(Debug, Clone, PartialEq)]
pub struct AggregatedOrder {
    pub items: Vec<ReceiptLineItem>,
    pub totals: RunningTotals,
}

/// Unit price including VAT
fn display_price(unit_price_ex_vat: Decimal, vat_percent: Decimal) -> Decimal {
    unit_price_ex_vat.saturating_add(percent_of(unit_price_ex_vat, vat_percent))
}

fn aggregate_extra(
    extra: &OrderLineExtra,
    parent_quantity: u32,
    totals: &mut RunningTotals,
) -> ReceiptExtraItem {
    totals.add(
        extra.unit_price_ex_vat,
        extra.quantity,
        extra.vat_percent,
        extra.discount_percent,
    );

    ReceiptExtraItem {
        name: extra.name.clone(),
        quantity: extra.quantity.saturating_mul(parent_quantity),
        price: display_price(extra.unit_price_ex_vat, extra.vat_percent),
    }
}

/// Aggregate an order
///
/// Extras are folded into the same totals as their line, valued at their
/// own quantity. On the receipt their quantity is scaled by the parent
/// line's quantity (an extra is per unit of the base item).
pub fn aggregate_order(lines: &[OrderLine]) -> AggregatedOrder {
    let mut totals = RunningTotals::default();

    let items = lines
        .iter()
        .map(|line| {
            totals.add(
                line.unit_price_ex_vat,
                line.quantity,
                line.vat_percent,
                line.discount_percent,
            );

            let extras = line
                .extras
                .iter()
                .map(|extra| aggregate_extra(extra, line.quantity, &mut totals))
                .collect();

            ReceiptLineItem {
                name: line.name.clone(),
                quantity: line.quantity,
                price: display_price(line.unit_price_ex_vat, line.vat_percent),
                extras,
            }
        })
        .collect();

    AggregatedOrder { items, totals }
}
