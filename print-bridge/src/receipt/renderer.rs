//! ESC/POS rendering of receipt documents

use receipt_printer::EscPosBuilder;
use tracing::warn;

use super::document::{Alignment, Block, CutKind, ReceiptDocument, Style};

/// Lines fed before cutting so the last row clears the cutter
const CUT_FEED_LINES: u8 = 3;

fn apply_style(b: &mut EscPosBuilder, style: &Style) {
    match style.alignment {
        Alignment::Left => b.left(),
        Alignment::Center => b.center(),
    };
    if style.bold {
        b.bold();
    } else {
        b.bold_off();
    }
    b.font(style.font);
    let (w, h) = style.magnification;
    if (w, h) == (1, 1) {
        b.reset_size();
    } else {
        b.magnify(w, h);
    }
}

#[cfg(feature = "logo")]
fn render_logo(b: &mut EscPosBuilder, path: &std::path::Path) {
    let Some(path_str) = path.to_str() else {
        warn!(path = ?path, "logo path is not valid UTF-8, skipping");
        return;
    };
    match receipt_printer::process_logo(path_str, super::document::LOGO_WIDTH) {
        Some(raster) => {
            b.center();
            b.raw(&raster);
        }
        None => warn!(path = path_str, "logo could not be loaded, skipping"),
    }
}

#[cfg(not(feature = "logo"))]
fn render_logo(_b: &mut EscPosBuilder, path: &std::path::Path) {
    warn!(path = ?path, "built without logo support, skipping");
}

/// Render a document to ESC/POS bytes
///
/// Every text block sets its full style, so blocks never inherit the
/// style of the block before them.
pub fn render_escpos(doc: &ReceiptDocument) -> Vec<u8> {
    let mut b = EscPosBuilder::new();

    for block in &doc.blocks {
        match block {
            Block::Text { text, style } => {
                apply_style(&mut b, style);
                b.text(text);
            }
            Block::Logo { path } => render_logo(&mut b, path),
            Block::Cut(kind) => {
                b.feed(CUT_FEED_LINES);
                match kind {
                    CutKind::Full => b.cut(),
                    CutKind::Partial => b.cut_partial(),
                };
            }
            Block::OpenDrawer => {
                b.open_drawer();
            }
        }
    }

    b.build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use receipt_printer::Font;

    fn contains(data: &[u8], seq: &[u8]) -> bool {
        data.windows(seq.len()).any(|w| w == seq)
    }

    fn position(data: &[u8], seq: &[u8]) -> Option<usize> {
        data.windows(seq.len()).position(|w| w == seq)
    }

    #[test]
    fn test_render_test_page() {
        let data = render_escpos(&ReceiptDocument::test_page());

        assert!(data.starts_with(&[0x1B, 0x40]));
        let center = position(&data, &[0x1B, 0x61, 0x01]).unwrap();
        let text = position(&data, b"Hello World\n").unwrap();
        let cut = position(&data, &[0x1D, 0x56, 0x01]).unwrap();
        assert!(center < text && text < cut);
        assert!(contains(&data, &[0x1B, 0x64, CUT_FEED_LINES]));
    }

    #[test]
    fn test_render_drawer_kick_prints_nothing() {
        let data = render_escpos(&ReceiptDocument::drawer_kick());
        assert!(contains(&data, &[0x1B, 0x70, 0x00, 25, 250]));
        assert!(!contains(&data, &[0x1D, 0x56]));
        assert!(!data.contains(&b'\n'));
    }

    #[test]
    fn test_style_is_reset_between_blocks() {
        let doc = ReceiptDocument::new()
            .text("BIG", Style::default().magnified(2, 2).bold())
            .text("small", Style::default().font(Font::B));
        let data = render_escpos(&doc);

        let big = position(&data, b"BIG").unwrap();
        let small = position(&data, b"small").unwrap();
        let between = &data[big..small];
        assert!(contains(between, &[0x1B, 0x45, 0x00]));
        assert!(contains(between, &[0x1D, 0x21, 0x00]));
        assert!(contains(between, &[0x1B, 0x4D, 0x01]));
    }

    #[test]
    fn test_text_is_encoded_for_printer() {
        let doc = ReceiptDocument::new().text("Klæbuveien 122\n", Style::centered());
        let data = render_escpos(&doc);
        assert!(contains(&data, &[b'K', b'l', 0xE6, b'b']));
    }

    #[test]
    fn test_missing_logo_is_skipped() {
        let doc = ReceiptDocument::new()
            .logo("/nonexistent/logo.png")
            .text("after\n", Style::default());
        let data = render_escpos(&doc);
        assert!(contains(&data, b"after\n"));
        assert!(!contains(&data, &[0x1D, 0x76, 0x30]));
    }
}
