//! Test doubles for the renderer.
//!
//! [`RecordingCanvas`] keeps every draw call in order so tests can assert on
//! what a screen drew (and how often the surface was cleared) without
//! comparing pixels.

use std::string::{String, ToString};
use std::vec::Vec;

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{ContainsPoint, Rectangle};

use crate::canvas::Canvas;
use crate::config::{SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::styles::{Anchor, Ink, TextSize};

/// A recorded string draw.
#[derive(Clone, PartialEq, Debug)]
pub struct TextRecord {
    pub text: String,
    pub position: Point,
    pub anchor: Anchor,
    pub size: TextSize,
    pub ink: Ink,
}

/// One recorded canvas call.
#[derive(Clone, PartialEq, Debug)]
pub enum DrawCommand {
    FillScreen(Rgb565),
    FillRoundRect {
        area: Rectangle,
        radius: u32,
        color: Rgb565,
    },
    StrokeRoundRect {
        area: Rectangle,
        radius: u32,
        color: Rgb565,
    },
    Text(TextRecord),
}

/// Canvas that records draw calls instead of rendering them.
pub struct RecordingCanvas {
    size: Size,
    commands: Vec<DrawCommand>,
}

impl RecordingCanvas {
    pub fn new(
        width: u32,
        height: u32,
    ) -> Self {
        Self {
            size: Size::new(width, height),
            commands: Vec::new(),
        }
    }

    /// Canvas matching the 800x480 reference panel.
    pub fn reference() -> Self { Self::new(SCREEN_WIDTH, SCREEN_HEIGHT) }

    pub fn commands(&self) -> &[DrawCommand] { &self.commands }

    /// Forget everything recorded so far.
    pub fn reset(&mut self) { self.commands.clear(); }

    /// Number of full-surface clears, i.e. full page redraws.
    pub fn clear_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|cmd| matches!(cmd, DrawCommand::FillScreen(_)))
            .count()
    }

    /// First recorded string equal to `text`.
    pub fn text(
        &self,
        text: &str,
    ) -> Option<&TextRecord> {
        self.texts().find(|record| record.text == text)
    }

    pub fn has_text(
        &self,
        text: &str,
    ) -> bool {
        self.text(text).is_some()
    }

    pub fn texts(&self) -> impl Iterator<Item = &TextRecord> {
        self.commands.iter().filter_map(|cmd| match cmd {
            DrawCommand::Text(record) => Some(record),
            _ => None,
        })
    }

    /// Filled plus outlined rounded rectangles.
    pub fn round_rect_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|cmd| matches!(cmd, DrawCommand::FillRoundRect { .. } | DrawCommand::StrokeRoundRect { .. }))
            .count()
    }

    /// Labels drawn inside a filled rounded rectangle.
    pub fn filled_pill_labels(&self) -> Vec<&str> {
        let filled: Vec<Rectangle> = self
            .commands
            .iter()
            .filter_map(|cmd| match cmd {
                DrawCommand::FillRoundRect { area, .. } => Some(*area),
                _ => None,
            })
            .collect();

        self.texts()
            .filter(|record| filled.iter().any(|area| area.contains(record.position)))
            .map(|record| record.text.as_str())
            .collect()
    }
}

impl Canvas for RecordingCanvas {
    fn surface_size(&self) -> Size { self.size }

    fn fill_screen(
        &mut self,
        color: Rgb565,
    ) {
        self.commands.push(DrawCommand::FillScreen(color));
    }

    fn fill_round_rect(
        &mut self,
        area: Rectangle,
        radius: u32,
        color: Rgb565,
    ) {
        self.commands.push(DrawCommand::FillRoundRect { area, radius, color });
    }

    fn stroke_round_rect(
        &mut self,
        area: Rectangle,
        radius: u32,
        color: Rgb565,
    ) {
        self.commands.push(DrawCommand::StrokeRoundRect { area, radius, color });
    }

    fn draw_string(
        &mut self,
        text: &str,
        position: Point,
        anchor: Anchor,
        size: TextSize,
        ink: Ink,
    ) {
        self.commands.push(DrawCommand::Text(TextRecord {
            text: text.to_string(),
            position,
            anchor,
            size,
            ink,
        }));
    }
}
