//! Foundation types for the seek bar widgets.
//!
//! This crate holds everything a widget needs from its host but that is not
//! widget-specific: density-independent units and pixel geometry, colors,
//! comparable callback handles, pointer input, the [`Canvas`] draw sink, the
//! text measurement seam and drawable assets.
//!
//! # Units
//!
//! Configuration is expressed in [`Dp`]; everything the widget computes is in
//! [`Px`]. The conversion uses one global scale factor set by the host:
//!
//! ```
//! use seekbar_ui::{Dp, Px, PxPosition, PxRect};
//!
//! let track_height: Px = Dp(3.0).to_px();
//! let track = PxRect::new(Px(30), Px(48), Px(300), track_height);
//! assert!(track.within_bounds(PxPosition::new(Px(100), Px(49)), Dp(4.0).to_px()));
//! ```
//!
//! # Drawing
//!
//! Widgets issue draw calls against a [`Canvas`]. [`RecordingCanvas`] keeps
//! them for inspection:
//!
//! ```
//! use seekbar_ui::{Canvas, Color, DrawCommand, Px, PxRect, RecordingCanvas};
//!
//! let mut canvas = RecordingCanvas::new();
//! canvas.draw_round_rect(PxRect::new(Px(0), Px(0), Px(10), Px(2)), Px(1), Color::BLACK);
//! assert!(matches!(canvas.commands()[0], DrawCommand::RoundRect { .. }));
//! ```
#![deny(missing_docs, clippy::unwrap_used)]

pub mod canvas;
pub mod color;
pub mod dp;
pub mod drawable;
pub mod input;
pub mod prop;
pub mod px;
pub mod text;

pub use crate::{
    canvas::{Canvas, DrawCommand, RecordingCanvas},
    color::Color,
    dp::{Dp, dp_to_px, scale_factor, set_scale_factor},
    drawable::{Drawable, DrawableState},
    input::{HostRequests, InputResponse, PointerEvent, PointerEventContent, PointerId},
    prop::{CallbackWith, Slot},
    px::{Px, PxPosition, PxRect, PxSize},
    text::{MonospaceMeasurer, TextMeasurer, TextStyle},
};
