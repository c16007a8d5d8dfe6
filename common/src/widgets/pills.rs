//! Profile selector pill row.
//!
//! One rounded pill per profile, evenly spread across the surface width:
//!
//! ```text
//! |m| P1 |s| P2 |s| P3 |s| P4 |s| P5 |m|
//! ```
//!
//! The active profile's pill is filled with an inverted label; the others are
//! outlined.

use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;

use crate::canvas::Canvas;
use crate::colors::FOREGROUND;
use crate::config::{PILL_AREA_TOP, PILL_HEIGHT, PILL_MARGIN_X, PILL_RADIUS, PILL_SPACING};
use crate::profiles::ProfileId;
use crate::styles::{Anchor, Ink, TextSize};

/// Width of each pill when `count` pills share `surface_width`.
///
/// Saturates to 0 when margins and gaps alone exceed the surface.
pub const fn pill_width(
    surface_width: u32,
    margin: u32,
    spacing: u32,
    count: u32,
) -> u32 {
    if count == 0 {
        return 0;
    }

    let gaps = spacing.saturating_mul(count - 1);
    surface_width.saturating_sub(margin.saturating_mul(2)).saturating_sub(gaps) / count
}

/// A laid-out pill.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Pill {
    pub profile: ProfileId,
    pub area: Rectangle,
}

impl Pill {
    /// Anchor point of the pill label: `(x + w/2, y + h/2)`.
    pub fn label_position(&self) -> Point {
        let Rectangle { top_left, size } = self.area;
        top_left + Point::new((size.width / 2) as i32, (size.height / 2) as i32)
    }
}

/// Pill geometry for every profile, left to right in profile order.
pub fn pill_layout(surface_width: u32) -> [Pill; ProfileId::COUNT] {
    let width = pill_width(surface_width, PILL_MARGIN_X, PILL_SPACING, ProfileId::COUNT as u32);

    ProfileId::ALL.map(|profile| {
        let x = PILL_MARGIN_X + profile.index() as u32 * (width + PILL_SPACING);
        Pill {
            profile,
            area: Rectangle::new(Point::new(x as i32, PILL_AREA_TOP), Size::new(width, PILL_HEIGHT)),
        }
    })
}

/// Draw the pill row, highlighting `active`.
pub fn draw_profile_pills<C>(
    canvas: &mut C,
    active: ProfileId,
) where
    C: Canvas,
{
    for pill in pill_layout(canvas.surface_size().width) {
        let ink = if pill.profile == active {
            canvas.fill_round_rect(pill.area, PILL_RADIUS, FOREGROUND);
            Ink::INVERTED
        } else {
            canvas.stroke_round_rect(pill.area, PILL_RADIUS, FOREGROUND);
            Ink::NORMAL
        };

        canvas.draw_string(
            &pill.profile.label(),
            pill.label_position(),
            Anchor::MiddleCenter,
            TextSize::Small,
            ink,
        );
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::testing::RecordingCanvas;

    #[test]
    fn test_reference_width() {
        // (800 - 32 - 32) / 5
        assert_eq!(pill_width(800, 16, 8, 5), 147);
    }

    #[test]
    fn test_degenerate_widths() {
        assert_eq!(pill_width(800, 16, 8, 0), 0);
        assert_eq!(pill_width(40, 16, 8, 5), 0);
        assert_eq!(pill_width(0, 16, 8, 1), 0);
    }

    #[test]
    fn test_reference_layout() {
        let pills = pill_layout(800);
        assert_eq!(pills[0].area, Rectangle::new(Point::new(16, 56), Size::new(147, 40)));
        assert_eq!(pills[1].area.top_left, Point::new(171, 56));
        assert_eq!(pills[4].area.top_left, Point::new(604, 56));
        assert_eq!(pills[0].label_position(), Point::new(89, 76));
    }

    #[test]
    fn test_exactly_one_pill_filled() {
        for active in ProfileId::ALL {
            let mut canvas = RecordingCanvas::reference();
            draw_profile_pills(&mut canvas, active);

            assert_eq!(canvas.round_rect_count(), ProfileId::COUNT);
            assert_eq!(canvas.filled_pill_labels(), [active.label().as_str()]);
            assert_eq!(canvas.text(&active.label()).unwrap().ink, Ink::INVERTED);
        }
    }

    #[test]
    fn test_outlined_labels_use_normal_ink() {
        let mut canvas = RecordingCanvas::reference();
        draw_profile_pills(&mut canvas, ProfileId::P1);
        for label in ["P2", "P3", "P4", "P5"] {
            assert_eq!(canvas.text(label).unwrap().ink, Ink::NORMAL);
        }
    }

    proptest! {
        #[test]
        fn prop_pills_fit_and_do_not_overlap(width in 0u32..4000) {
            let pills = pill_layout(width);
            for pair in pills.windows(2) {
                let left = pair[0].area;
                let right = pair[1].area;
                prop_assert!(left.top_left.x + left.size.width as i32 <= right.top_left.x);
            }
            if width >= 2 * PILL_MARGIN_X + 4 * PILL_SPACING {
                let last = pills[ProfileId::COUNT - 1].area;
                prop_assert!(last.top_left.x as u32 + last.size.width <= width - PILL_MARGIN_X);
            }
        }

        #[test]
        fn prop_width_formula(width in 0u32..4000, count in 1u32..8) {
            let w = pill_width(width, PILL_MARGIN_X, PILL_SPACING, count);
            let used = 2 * PILL_MARGIN_X + (count - 1) * PILL_SPACING;
            if width >= used {
                prop_assert_eq!(w, (width - used) / count);
            } else {
                prop_assert_eq!(w, 0);
            }
        }
    }
}
