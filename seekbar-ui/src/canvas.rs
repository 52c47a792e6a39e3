//! The draw sink widgets paint into.
//!
//! A [`Canvas`] exposes the three primitives the seek bars need. Hosts wrap
//! their native canvas in it; [`RecordingCanvas`] keeps the calls as
//! [`DrawCommand`]s so they can be inspected, replayed or printed.

use crate::{Color, Drawable, DrawableState, Px, PxPosition, PxRect, TextStyle};

/// Destination for draw calls.
pub trait Canvas {
    /// Fills a rounded rectangle.
    fn draw_round_rect(&mut self, rect: PxRect, corner_radius: Px, color: Color);

    /// Draws `text` with its baseline starting at `origin`.
    fn draw_text(&mut self, text: &str, origin: PxPosition, style: TextStyle);

    /// Paints `drawable` stretched into `rect`.
    fn draw_drawable(
        &mut self,
        drawable: &Drawable,
        rect: PxRect,
        state: DrawableState,
        opacity: f32,
    );
}

/// One recorded draw call.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// A filled rounded rectangle.
    RoundRect {
        /// Area to fill.
        rect: PxRect,
        /// Corner radius.
        corner_radius: Px,
        /// Fill color.
        color: Color,
    },
    /// A run of text.
    Text {
        /// The string drawn.
        text: String,
        /// Baseline origin.
        origin: PxPosition,
        /// Size and color.
        style: TextStyle,
    },
    /// An asset.
    Drawable {
        /// Asset name.
        name: String,
        /// Target rectangle.
        rect: PxRect,
        /// Visual state.
        state: DrawableState,
        /// Opacity in `[0, 1]`.
        opacity: f32,
    },
}

/// A [`Canvas`] that records every call in order.
#[derive(Debug, Default, Clone)]
pub struct RecordingCanvas {
    commands: Vec<DrawCommand>,
}

impl RecordingCanvas {
    /// Creates an empty recording.
    pub fn new() -> Self {
        Self::default()
    }

    /// The recorded commands, oldest first.
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Takes the recorded commands, leaving the canvas empty.
    pub fn take(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }

    /// Forgets everything recorded so far.
    pub fn clear(&mut self) {
        self.commands.clear();
    }

    /// Texts drawn, in order.
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.commands.iter().filter_map(|command| match command {
            DrawCommand::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }
}

impl Canvas for RecordingCanvas {
    fn draw_round_rect(&mut self, rect: PxRect, corner_radius: Px, color: Color) {
        self.commands.push(DrawCommand::RoundRect {
            rect,
            corner_radius,
            color,
        });
    }

    fn draw_text(&mut self, text: &str, origin: PxPosition, style: TextStyle) {
        self.commands.push(DrawCommand::Text {
            text: text.to_owned(),
            origin,
            style,
        });
    }

    fn draw_drawable(
        &mut self,
        drawable: &Drawable,
        rect: PxRect,
        state: DrawableState,
        opacity: f32,
    ) {
        self.commands.push(DrawCommand::Drawable {
            name: drawable.name().to_owned(),
            rect,
            state,
            opacity,
        });
    }
}
