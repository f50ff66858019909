//! Decoding of the supported UTF-8 subset into glyphs, and line width measurement.
//!
//! This is not a UTF-8 decoder. Printable ASCII maps to its own glyph and a handful of two-byte
//! sequences with lead byte 0xC3 map to accented letters. Every other two-byte 0xC3 sequence is
//! swallowed whole as one placeholder, and every other single byte is one placeholder, which
//! keeps the stream aligned on UTF-8 boundaries for Latin-1 range text.
//!
//! A string ends at the end of the slice or at the first NUL byte.

use crate::font::{Accent, Glyph, GLYPH_FOOTPRINT};

/// Lead byte of the two-byte sequences that encode U+00C0..U+00FF.
pub const LEAD_BYTE: u8 = 0xC3;

fn accent_for(trail: u8) -> Option<Accent> {
    match trail {
        0xA9 => Some(Accent::EAcute),
        0xA8 | 0x88 => Some(Accent::EGrave),
        0xA0 | 0x80 => Some(Accent::AGrave),
        0xB4 | 0x94 => Some(Accent::OCircumflex),
        0xB9 | 0x99 => Some(Accent::UGrave),
        0xA7 => Some(Accent::CCedilla),
        _ => None,
    }
}

/// Decode the character at the start of `s` into its glyph and the number of bytes it occupies
/// (1 or 2). Returns `None` at the end of the string.
pub fn next_glyph(s: &[u8]) -> Option<(Glyph, usize)> {
    let first = *s.first()?;
    if first == 0 {
        return None;
    }
    if first == LEAD_BYTE {
        match s.get(1) {
            Some(&trail) if trail != 0 => {
                let glyph = accent_for(trail).map_or(Glyph::PLACEHOLDER, Glyph::accent);
                return Some((glyph, 2));
            }
            // A lead byte with nothing after it is just another unprintable byte.
            _ => {}
        }
    }
    Some((Glyph::from_byte(first), 1))
}

/// Iterator over the glyphs of a string, yielding each glyph with the bytes it consumed.
#[derive(Clone, Debug)]
pub struct Glyphs<'s> {
    rest: &'s [u8],
}

impl<'s> Glyphs<'s> {
    pub fn new(s: &'s [u8]) -> Self {
        Glyphs { rest: s }
    }

    /// The bytes not yet decoded.
    pub fn remainder(&self) -> &'s [u8] {
        self.rest
    }
}

impl<'s> Iterator for Glyphs<'s> {
    type Item = (Glyph, usize);

    fn next(&mut self) -> Option<Self::Item> {
        let (glyph, consumed) = next_glyph(self.rest)?;
        self.rest = &self.rest[consumed..];
        Some((glyph, consumed))
    }
}

/// Width in pixels, spacing included, of the text from the start of `s` up to the first newline
/// or the end of the string, drawn on a single line.
pub fn measure(s: &[u8]) -> u16 {
    let mut rest = s;
    let mut width: u16 = 0;
    while rest.first() != Some(&b'\n') {
        match next_glyph(rest) {
            Some((_, consumed)) => {
                width = width.saturating_add(GLYPH_FOOTPRINT as u16);
                rest = &rest[consumed..];
            }
            None => break,
        }
    }
    width
}
