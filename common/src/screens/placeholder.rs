//! Placeholder pages (Logs, Modules, Camera).
//!
//! Each shows a centred title and one explanatory line. They exist so page
//! switching can be exercised before the real views are built.

use core::fmt::Write;

use embedded_graphics::prelude::*;
use heapless::String;

use crate::canvas::Canvas;
use crate::config::{PLACEHOLDER_BODY_Y, PLACEHOLDER_TITLE_Y};
use crate::pages::PageId;
use crate::styles::{Anchor, Ink, TextSize};

/// Explanation line for a placeholder page.
pub fn placeholder_text(page: PageId) -> String<48> {
    let mut text = String::new();
    let _ = write!(text, "Here the {} UI will be implemented.", page.name());
    text
}

/// Draw the title and placeholder line for `page`. Does not clear.
pub fn draw_placeholder_page<C>(
    canvas: &mut C,
    page: PageId,
) where
    C: Canvas,
{
    let center_x = canvas.center().x;

    canvas.draw_string(
        page.title(),
        Point::new(center_x, PLACEHOLDER_TITLE_Y),
        Anchor::TopCenter,
        TextSize::Large,
        Ink::NORMAL,
    );
    canvas.draw_string(
        &placeholder_text(page),
        Point::new(center_x, PLACEHOLDER_BODY_Y),
        Anchor::TopCenter,
        TextSize::Small,
        Ink::NORMAL,
    );
}
