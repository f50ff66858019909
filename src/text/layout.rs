//! The layout routine behind every `Text::print*` method.

use super::decode::{measure, next_glyph};
use super::{draw_glyph, PrintOptions, Window};
use crate::display::Display;
use crate::font::GLYPH_FOOTPRINT;
use crate::interface;

const FOOTPRINT: u16 = GLYPH_FOOTPRINT as u16;

/// Lay out and draw `s` according to `options`.
///
/// Walks the string once, keeping the page, column and unspent scroll distance. Per character:
/// a newline moves to the start of the next page; while at least one glyph's width of scroll is
/// unspent, glyphs are skipped without moving the column; a glyph that would cross the right
/// edge of the window moves to the start of the next page first; when centering, the first
/// glyph drawn on each line shifts the column right by half of the space the rest of the line
/// leaves free. Drawing stops at the end of the string or when it runs out of pages.
pub(crate) fn render<DI>(
    display: &mut Display<DI>,
    s: &[u8],
    options: PrintOptions,
) -> Result<(), DI::Error>
where
    DI: interface::DisplayInterface,
{
    let pages = display.pages();
    if options.page >= pages || next_glyph(s).is_none() {
        return Ok(());
    }

    let window = Window::new(options.column, options.max_width, display.width());
    let mut page = options.page;
    let mut col = window.left;
    let mut scroll = options.scroll;
    let mut rest = s;

    display.set_cursor(page, col as u8)?;

    while let Some(&byte) = rest.first() {
        if byte == b'\n' {
            page += 1;
            if page >= pages {
                trace!("out of pages at newline");
                break;
            }
            col = window.left;
            display.set_cursor(page, col as u8)?;
            rest = &rest[1..];
            continue;
        }

        let (glyph, consumed) = match next_glyph(rest) {
            Some(decoded) => decoded,
            None => break,
        };

        if scroll >= FOOTPRINT {
            scroll -= FOOTPRINT;
            rest = &rest[consumed..];
            continue;
        }

        if col + FOOTPRINT > window.right {
            page += 1;
            if page >= pages {
                trace!("out of pages at wrap");
                break;
            }
            col = window.left;
            display.set_cursor(page, col as u8)?;
        }

        // Only once per line: after the first glyph the column has left the window edge.
        if options.center && scroll == 0 && col == window.left {
            let line_width = measure(rest).min(window.width());
            col += (window.width() - line_width) / 2;
            display.set_cursor(page, col as u8)?;
        }

        draw_glyph(display, glyph)?;
        col += FOOTPRINT;
        rest = &rest[consumed..];
    }
    Ok(())
}
