//! Text sizes, anchors and ink pairs.
//!
//! Screens describe text in terms of a [`TextSize`], an [`Anchor`] (which
//! point of the text box sits on the given position) and an [`Ink`]
//! (foreground + background). The [`Canvas`](crate::canvas::Canvas)
//! implementation turns these into embedded-graphics styles.
//!
//! Alignment styles are `const` so they live in read-only data instead of
//! being rebuilt for every string.

use embedded_graphics::mono_font::MonoFont;
use embedded_graphics::mono_font::ascii::{FONT_6X10, FONT_9X15};
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::text::{Alignment, Baseline, TextStyle, TextStyleBuilder};
use profont::PROFONT_24_POINT;

use crate::colors::{BACKGROUND, FOREGROUND};

// =============================================================================
// Text Sizes
// =============================================================================

/// Text size selector.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TextSize {
    /// 6x10 glyphs. Status lines, placeholder text, pill labels.
    Small,
    /// 9x15 glyphs. Page titles and the main header.
    Large,
    /// `ProFont` 24pt. Boot banner title.
    Banner,
}

impl TextSize {
    /// Font backing this size.
    pub const fn font(self) -> &'static MonoFont<'static> {
        match self {
            Self::Small => &FONT_6X10,
            Self::Large => &FONT_9X15,
            Self::Banner => &PROFONT_24_POINT,
        }
    }
}

// =============================================================================
// Anchors
// =============================================================================

const TOP_LEFT: TextStyle = TextStyleBuilder::new()
    .alignment(Alignment::Left)
    .baseline(Baseline::Top)
    .build();

const TOP_CENTER: TextStyle = TextStyleBuilder::new()
    .alignment(Alignment::Center)
    .baseline(Baseline::Top)
    .build();

const TOP_RIGHT: TextStyle = TextStyleBuilder::new()
    .alignment(Alignment::Right)
    .baseline(Baseline::Top)
    .build();

const MIDDLE_CENTER: TextStyle = TextStyleBuilder::new()
    .alignment(Alignment::Center)
    .baseline(Baseline::Middle)
    .build();

/// Point of the text bounding box that is placed on the draw position.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Anchor {
    TopLeft,
    TopCenter,
    TopRight,
    MiddleCenter,
}

impl Anchor {
    /// embedded-graphics text style for this anchor.
    pub const fn text_style(self) -> TextStyle {
        match self {
            Self::TopLeft => TOP_LEFT,
            Self::TopCenter => TOP_CENTER,
            Self::TopRight => TOP_RIGHT,
            Self::MiddleCenter => MIDDLE_CENTER,
        }
    }
}

// =============================================================================
// Ink
// =============================================================================

/// Foreground/background color pair for text.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Ink {
    pub fg: Rgb565,
    pub bg: Rgb565,
}

impl Ink {
    /// White text on the black page background.
    pub const NORMAL: Self = Self {
        fg: FOREGROUND,
        bg: BACKGROUND,
    };

    /// Black text on a white fill (active pill).
    pub const INVERTED: Self = Self {
        fg: BACKGROUND,
        bg: FOREGROUND,
    };
}
