//! Receipt Module
//!
//! Pure formatting and aggregation of order receipts:
//! - `aggregate`: order lines -> receipt items + running totals
//! - `layout`: fixed-width item table and subtotal block
//! - `format`: number and date helpers
//! - `document`: receipt documents (blocks, styles, actions)
//! - `renderer`: document -> ESC/POS bytes

pub mod aggregate;
pub mod document;
pub mod format;
pub mod layout;
pub mod renderer;
pub mod types;

pub use aggregate::{AggregatedOrder, aggregate_order};
pub use document::{Alignment, Block, CutKind, ReceiptDocument, ReceiptHeader, Style};
pub use format::{format_date, format_number};
pub use layout::{format_receipt_items, format_subtotal_block};
pub use renderer::render_escpos;
pub use types::*;
