//! ESC/POS command builder
//!
//! Provides a fluent API for building ESC/POS print data.

use crate::encoding::{CODE_PAGE_WPC1252, encode_text, select_code_page};
#[cfg(feature = "image")]
use tracing::instrument;

/// Printer font
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Font {
    /// 12x24, 48 columns on 80mm paper
    #[default]
    A,
    /// 9x17, 64 columns on 80mm paper
    B,
}

/// ESC/POS command builder
///
/// Builds ESC/POS byte sequences for thermal printers.
/// Text is encoded to WPC1252 as it is written.
pub struct EscPosBuilder {
    buf: Vec<u8>,
}

impl EscPosBuilder {
    /// Create a builder that initializes the printer and selects WPC1252
    pub fn new() -> Self {
        let mut buf = Vec::with_capacity(4096);
        // Initialize printer (ESC @)
        buf.extend_from_slice(&[0x1B, 0x40]);
        buf.extend_from_slice(&select_code_page(CODE_PAGE_WPC1252));
        Self { buf }
    }

    // === Text Output ===

    /// Write text
    pub fn text(&mut self, s: &str) -> &mut Self {
        self.buf.extend_from_slice(&encode_text(s));
        self
    }

    /// Print and feed n lines
    pub fn feed(&mut self, lines: u8) -> &mut Self {
        // ESC d n
        self.buf.extend_from_slice(&[0x1B, 0x64, lines]);
        self
    }

    // === Alignment ===

    /// Align text to center
    pub fn center(&mut self) -> &mut Self {
        self.buf.extend_from_slice(&[0x1B, 0x61, 0x01]);
        self
    }

    /// Align text to left (default)
    pub fn left(&mut self) -> &mut Self {
        self.buf.extend_from_slice(&[0x1B, 0x61, 0x00]);
        self
    }

    // === Text Style ===

    /// Enable bold text
    pub fn bold(&mut self) -> &mut Self {
        self.buf.extend_from_slice(&[0x1B, 0x45, 0x01]);
        self
    }

    /// Disable bold text
    pub fn bold_off(&mut self) -> &mut Self {
        self.buf.extend_from_slice(&[0x1B, 0x45, 0x00]);
        self
    }

    /// Select character font
    pub fn font(&mut self, font: Font) -> &mut Self {
        // ESC M n
        let n = match font {
            Font::A => 0x00,
            Font::B => 0x01,
        };
        self.buf.extend_from_slice(&[0x1B, 0x4D, n]);
        self
    }

    /// Character magnification, 1..=8 in each direction
    pub fn magnify(&mut self, width: u8, height: u8) -> &mut Self {
        let w = width.clamp(1, 8) - 1;
        let h = height.clamp(1, 8) - 1;
        // GS ! n
        self.buf.extend_from_slice(&[0x1D, 0x21, (w << 4) | h]);
        self
    }

    /// Reset to normal size
    pub fn reset_size(&mut self) -> &mut Self {
        self.buf.extend_from_slice(&[0x1D, 0x21, 0x00]);
        self
    }

    // === Paper Control ===

    /// Cut paper (full cut)
    pub fn cut(&mut self) -> &mut Self {
        // GS V 0 - Full cut
        self.buf.extend_from_slice(&[0x1D, 0x56, 0x00]);
        self
    }

    /// Partial cut (leave a small connection)
    pub fn cut_partial(&mut self) -> &mut Self {
        // GS V 1 - Partial cut
        self.buf.extend_from_slice(&[0x1D, 0x56, 0x01]);
        self
    }

    // === Cash Drawer ===

    /// Open cash drawer (pin 2)
    pub fn open_drawer(&mut self) -> &mut Self {
        // ESC p m t1 t2 - Generate pulse on pin m
        self.buf.extend_from_slice(&[0x1B, 0x70, 0x00, 25, 250]);
        self
    }

    // === Raw Commands ===

    /// Write raw bytes directly (raster data, vendor commands)
    pub fn raw(&mut self, bytes: &[u8]) -> &mut Self {
        self.buf.extend_from_slice(bytes);
        self
    }

    // === Build ===

    /// Build the final byte buffer
    pub fn build(self) -> Vec<u8> {
        self.buf
    }
}

impl Default for EscPosBuilder {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Image Processing
// ============================================================================

/// Process an image file and return ESC/POS raster data
///
/// The image will be:
/// - Resized to fit `max_width` dots
/// - Converted to 1-bit monochrome
/// - Encoded as GS v 0 raster graphics
#[cfg(feature = "image")]
#[instrument]
pub fn process_logo(path: &str, max_width: u32) -> Option<Vec<u8>> {
    use image::GenericImageView;
    use tracing::{error, info};

    info!(path = path, "processing logo");

    let img = match image::open(path) {
        Ok(i) => {
            info!(dimensions = ?i.dimensions(), "logo image opened");
            i
        }
        Err(e) => {
            error!(error = %e, "open logo failed");
            return None;
        }
    };

    let (w, h) = img.dimensions();

    let (new_w, new_h) = if w > max_width {
        let ratio = max_width as f64 / w as f64;
        (max_width, (h as f64 * ratio) as u32)
    } else {
        (w, h)
    };

    let resized = img.resize(new_w, new_h, image::imageops::FilterType::Nearest);

    // Raster bit image command GS v 0
    let x_bytes = new_w.div_ceil(8);

    let mut data = Vec::new();

    // GS v 0 m xL xH yL yH
    data.extend_from_slice(&[0x1D, 0x76, 0x30, 0x00]);
    data.push(x_bytes as u8);
    data.push((x_bytes >> 8) as u8);
    data.push(new_h as u8);
    data.push((new_h >> 8) as u8);

    // Convert to RGBA for transparency handling
    let rgba = resized.to_rgba8();

    for y in 0..new_h {
        for x_byte in 0..x_bytes {
            let mut byte = 0u8;
            for bit in 0..8 {
                let x = x_byte * 8 + bit;
                if x < new_w {
                    let pixel = rgba.get_pixel(x, y);

                    // Transparent pixels stay white
                    if pixel[3] >= 128 {
                        let luma = (0.299 * pixel[0] as f32
                            + 0.587 * pixel[1] as f32
                            + 0.114 * pixel[2] as f32) as u8;

                        if luma < 128 {
                            byte |= 1 << (7 - bit);
                        }
                    }
                }
            }
            data.push(byte);
        }
    }

    data.push(0x0A);

    Some(data)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contains(data: &[u8], seq: &[u8]) -> bool {
        data.windows(seq.len()).any(|w| w == seq)
    }

    #[test]
    fn test_init_and_code_page() {
        let data = EscPosBuilder::new().build();
        assert_eq!(data, vec![0x1B, 0x40, 0x1B, 0x74, 16]);
    }

    #[test]
    fn test_builder_basic() {
        let mut b = EscPosBuilder::new();
        b.center().bold().text("Kvittering\n").bold_off().left().text("Innhold\n");

        let data = b.build();
        assert!(contains(&data, &[0x1B, 0x61, 0x01]));
        assert!(contains(&data, b"Kvittering\n"));
        assert!(contains(&data, b"Innhold\n"));
    }

    #[test]
    fn test_text_is_encoded() {
        let mut b = EscPosBuilder::new();
        b.text("Blåbær");
        let data = b.build();
        assert!(contains(&data, &[b'B', b'l', 0xE5, b'b', 0xE6, b'r']));
    }

    #[test]
    fn test_font_and_magnify() {
        let mut b = EscPosBuilder::new();
        b.font(Font::B).magnify(2, 2).reset_size().font(Font::A);
        let data = b.build();
        assert!(contains(&data, &[0x1B, 0x4D, 0x01]));
        assert!(contains(&data, &[0x1D, 0x21, 0x11]));
        assert!(contains(&data, &[0x1D, 0x21, 0x00]));
        assert!(contains(&data, &[0x1B, 0x4D, 0x00]));
    }

    #[test]
    fn test_magnify_clamps() {
        let mut b = EscPosBuilder::new();
        b.magnify(0, 20);
        assert!(contains(&b.build(), &[0x1D, 0x21, 0x07]));
    }

    #[test]
    fn test_cut_and_drawer() {
        let mut b = EscPosBuilder::new();
        b.feed(3).cut_partial().open_drawer().cut();
        let data = b.build();
        assert!(contains(&data, &[0x1B, 0x64, 3]));
        assert!(contains(&data, &[0x1D, 0x56, 0x01]));
        assert!(contains(&data, &[0x1B, 0x70, 0x00, 25, 250]));
        assert!(contains(&data, &[0x1D, 0x56, 0x00]));
    }

    #[test]
    fn test_raw_bytes_not_encoded() {
        let mut b = EscPosBuilder::new();
        b.raw(&[0xFF, 0x80, 0x00]);
        assert!(contains(&b.build(), &[0xFF, 0x80, 0x00]));
    }
}
