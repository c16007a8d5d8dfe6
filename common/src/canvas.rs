//! Drawing surface capability.
//!
//! Screens never talk to a display driver directly. They draw through
//! [`Canvas`], which covers exactly what the pages need: clear, rounded
//! rectangles, anchored text and the surface size.
//!
//! Every embedded-graphics `DrawTarget<Color = Rgb565>` with a fixed origin
//! (the simulator framebuffer, `mipidsi` panels) is a `Canvas` through the
//! blanket implementation below. Draw errors are discarded: once boot has
//! brought the panel up, rendering is treated as infallible.

use embedded_graphics::mono_font::MonoTextStyleBuilder;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyle, Rectangle, RoundedRectangle};
use embedded_graphics::text::Text;

use crate::styles::{Anchor, Ink, TextSize};

/// Minimal drawing surface used by the page renderer.
pub trait Canvas {
    /// Surface size in pixels.
    fn surface_size(&self) -> Size;

    /// Fill the whole surface with `color`.
    fn fill_screen(
        &mut self,
        color: Rgb565,
    );

    /// Draw a filled rounded rectangle.
    fn fill_round_rect(
        &mut self,
        area: Rectangle,
        radius: u32,
        color: Rgb565,
    );

    /// Draw a 1px rounded rectangle outline.
    fn stroke_round_rect(
        &mut self,
        area: Rectangle,
        radius: u32,
        color: Rgb565,
    );

    /// Draw `text` with its `anchor` point on `position`.
    fn draw_string(
        &mut self,
        text: &str,
        position: Point,
        anchor: Anchor,
        size: TextSize,
        ink: Ink,
    );

    /// Surface centre, rounded towards the top-left.
    fn center(&self) -> Point {
        let size = self.surface_size();
        Point::new((size.width / 2) as i32, (size.height / 2) as i32)
    }
}

impl<D> Canvas for D
where
    D: DrawTarget<Color = Rgb565> + OriginDimensions,
{
    fn surface_size(&self) -> Size { OriginDimensions::size(self) }

    fn fill_screen(
        &mut self,
        color: Rgb565,
    ) {
        DrawTarget::clear(self, color).ok();
    }

    fn fill_round_rect(
        &mut self,
        area: Rectangle,
        radius: u32,
        color: Rgb565,
    ) {
        RoundedRectangle::with_equal_corners(area, Size::new(radius, radius))
            .into_styled(PrimitiveStyle::with_fill(color))
            .draw(self)
            .ok();
    }

    fn stroke_round_rect(
        &mut self,
        area: Rectangle,
        radius: u32,
        color: Rgb565,
    ) {
        RoundedRectangle::with_equal_corners(area, Size::new(radius, radius))
            .into_styled(PrimitiveStyle::with_stroke(color, 1))
            .draw(self)
            .ok();
    }

    fn draw_string(
        &mut self,
        text: &str,
        position: Point,
        anchor: Anchor,
        size: TextSize,
        ink: Ink,
    ) {
        let style = MonoTextStyleBuilder::new()
            .font(size.font())
            .text_color(ink.fg)
            .background_color(ink.bg)
            .build();

        Text::with_text_style(text, position, style, anchor.text_style())
            .draw(self)
            .ok();
    }
}
