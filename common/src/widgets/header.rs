//! Main page header.
//!
//! Title and subtitle on the left, active profile on the right:
//!
//! ```text
//! Main                                          Profile P3
//! Environment Controller - Profile overview
//! ```

use core::fmt::Write;

use embedded_graphics::prelude::*;
use heapless::String;

use crate::canvas::Canvas;
use crate::config::{HEADER_MARGIN_X, HEADER_MARGIN_Y, HEADER_PROFILE_OFFSET_Y, HEADER_SUBTITLE_OFFSET_Y, MAIN_SUBTITLE};
use crate::pages::PageId;
use crate::profiles::ProfileId;
use crate::styles::{Anchor, Ink, TextSize};

const TITLE_POS: Point = Point::new(HEADER_MARGIN_X, HEADER_MARGIN_Y);
const SUBTITLE_POS: Point = Point::new(HEADER_MARGIN_X, HEADER_MARGIN_Y + HEADER_SUBTITLE_OFFSET_Y);

/// Header label for the active profile, e.g. `"Profile P3"`.
pub fn profile_label(active: ProfileId) -> String<16> {
    let mut label = String::new();
    let _ = write!(label, "Profile {}", active.label());
    label
}

/// Draw the header block for the main page.
pub fn draw_main_header<C>(
    canvas: &mut C,
    active: ProfileId,
) where
    C: Canvas,
{
    canvas.draw_string(PageId::Main.title(), TITLE_POS, Anchor::TopLeft, TextSize::Large, Ink::NORMAL);
    canvas.draw_string(MAIN_SUBTITLE, SUBTITLE_POS, Anchor::TopLeft, TextSize::Large, Ink::NORMAL);

    let right = canvas.surface_size().width as i32 - HEADER_MARGIN_X;
    canvas.draw_string(
        &profile_label(active),
        Point::new(right, HEADER_MARGIN_Y + HEADER_PROFILE_OFFSET_Y),
        Anchor::TopRight,
        TextSize::Large,
        Ink::NORMAL,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::RecordingCanvas;

    #[test]
    fn test_profile_label() {
        assert_eq!(profile_label(ProfileId::P1).as_str(), "Profile P1");
        assert_eq!(profile_label(ProfileId::P5).as_str(), "Profile P5");
    }

    #[test]
    fn test_header_positions() {
        let mut canvas = RecordingCanvas::new(800, 480);
        draw_main_header(&mut canvas, ProfileId::P2);

        let title = canvas.text("Main").unwrap();
        assert_eq!(title.position, Point::new(16, 12));
        assert_eq!(title.anchor, Anchor::TopLeft);

        let subtitle = canvas.text(MAIN_SUBTITLE).unwrap();
        assert_eq!(subtitle.position, Point::new(16, 40));

        let label = canvas.text("Profile P2").unwrap();
        assert_eq!(label.position, Point::new(784, 20));
        assert_eq!(label.anchor, Anchor::TopRight);
    }
}
