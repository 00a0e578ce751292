//! Receipt documents
//!
//! A document is plain data: styled text blocks and printer actions.
//! It is built here and turned into printer bytes by `renderer`.

use std::path::PathBuf;

use chrono::{DateTime, TimeZone};
use receipt_printer::{Font, pad};

use super::aggregate::AggregatedOrder;
use super::format::{format_date, format_number};
use super::layout::{format_receipt_items, format_subtotal_block};

/// Column header above the item table
const ITEM_TABLE_HEADER: &str = "Product                         Qty      Unit pr\n";

/// Printed width of the logo in dots
pub const LOGO_WIDTH: u32 = 250;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Alignment {
    #[default]
    Left,
    Center,
}

/// Text style applied to one block
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Style {
    pub alignment: Alignment,
    pub bold: bool,
    pub font: Font,
    /// Width and height multipliers, 1..=8
    pub magnification: (u8, u8),
}

impl Default for Style {
    fn default() -> Self {
        Self {
            alignment: Alignment::Left,
            bold: false,
            font: Font::A,
            magnification: (1, 1),
        }
    }
}

impl Style {
    pub fn centered() -> Self {
        Self {
            alignment: Alignment::Center,
            ..Self::default()
        }
    }

    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub fn font(mut self, font: Font) -> Self {
        self.font = font;
        self
    }

    pub fn magnified(mut self, width: u8, height: u8) -> Self {
        self.magnification = (width, height);
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CutKind {
    Full,
    Partial,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Block {
    /// Text printed as-is (it carries its own newlines)
    Text { text: String, style: Style },
    /// Centered raster logo loaded from an image file
    Logo { path: PathBuf },
    Cut(CutKind),
    OpenDrawer,
}

/// Store details printed at the top of an order receipt
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReceiptHeader {
    pub logo: Option<PathBuf>,
    pub lines: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReceiptDocument {
    pub blocks: Vec<Block>,
}

impl ReceiptDocument {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(mut self, text: impl Into<String>, style: Style) -> Self {
        self.blocks.push(Block::Text {
            text: text.into(),
            style,
        });
        self
    }

    pub fn logo(mut self, path: impl Into<PathBuf>) -> Self {
        self.blocks.push(Block::Logo { path: path.into() });
        self
    }

    pub fn cut(mut self, kind: CutKind) -> Self {
        self.blocks.push(Block::Cut(kind));
        self
    }

    pub fn open_drawer(mut self) -> Self {
        self.blocks.push(Block::OpenDrawer);
        self
    }

    /// Customer receipt for an aggregated order
    pub fn order_receipt<Tz: TimeZone>(
        order: &AggregatedOrder,
        header: &ReceiptHeader,
        printed_at: &DateTime<Tz>,
    ) -> Self
    where
        Tz::Offset: std::fmt::Display,
    {
        let mut doc = Self::new();

        if let Some(logo) = &header.logo {
            doc = doc.logo(logo.clone());
        }

        let mut heading = String::new();
        for line in &header.lines {
            heading.push('\n');
            heading.push_str(line);
        }
        heading.push('\n');
        heading.push_str(&format_date(printed_at));
        heading.push('\n');

        let gross = order.totals.gross_total();
        let summary = format!(
            "{}{}",
            format_receipt_items(&order.items),
            format_subtotal_block(gross, order.totals.vat_total, order.totals.discount_total)
        );

        doc.text(heading, Style::centered())
            .text(ITEM_TABLE_HEADER, Style::default().bold())
            .text(summary, Style::default().font(Font::B))
            .text(pad("\nTotal", 28, false), Style::default())
            .text(
                format!("{}\n", pad(&format_number(gross), 10, true)),
                Style::default().magnified(2, 2),
            )
            .cut(CutKind::Partial)
    }

    /// Printer test page
    pub fn test_page() -> Self {
        Self::new()
            .text("Hello World\n", Style::centered())
            .cut(CutKind::Partial)
    }

    /// Cash drawer kick, nothing printed
    pub fn drawer_kick() -> Self {
        Self::new().open_drawer()
    }
}
