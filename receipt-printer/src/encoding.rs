//! Windows-1252 encoding for Latin thermal printers
//!
//! Receipt text (Norwegian `æøå`, `€`) is sent in code page WPC1252.
//! Text is encoded when it is written, so command and raster bytes are
//! never passed through the converter.

use std::borrow::Cow;

/// ESC/POS code page number of WPC1252 (`ESC t 16`)
pub(crate) const CODE_PAGE_WPC1252: u8 = 16;

/// Encode text for the printer
///
/// ASCII passes through borrowed. Characters outside Windows-1252 are
/// replaced by numeric character references by the encoder.
pub(crate) fn encode_text(s: &str) -> Cow<'_, [u8]> {
    if s.is_ascii() {
        return Cow::Borrowed(s.as_bytes());
    }
    let (bytes, _, had_unmappable) = encoding_rs::WINDOWS_1252.encode(s);
    if had_unmappable {
        tracing::warn!(text = s, "text contains characters outside WPC1252");
    }
    bytes
}

/// `ESC t n` - select the character code table
pub(crate) fn select_code_page(page: u8) -> [u8; 3] {
    [0x1B, 0x74, page]
}
