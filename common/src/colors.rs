//! Color constants for the display node.
//!
//! The UI is monochrome: white content on a black background, with the active
//! profile pill inverted (black text on a white fill). Colors come from the
//! `RgbColor` trait constants so they map exactly onto the panel's Rgb565 format.

use embedded_graphics::pixelcolor::{Rgb565, RgbColor};

/// Pure black (0, 0, 0). Screen background and inverted text.
pub const BLACK: Rgb565 = Rgb565::BLACK;

/// Pure white (31, 63, 31). Text, pill outlines and the active pill fill.
pub const WHITE: Rgb565 = Rgb565::WHITE;

/// Background every page is cleared to before drawing.
pub const BACKGROUND: Rgb565 = BLACK;

/// Foreground for text and outlines.
pub const FOREGROUND: Rgb565 = WHITE;
