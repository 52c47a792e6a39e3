//! Seek bar widgets built on `seekbar-ui`.
//!
//! The [`seekbar`] module provides a single-handle [`Seekbar`] and a
//! two-handle [`RangeSeekbar`]. They are host-driven: the host reports bounds
//! and pointer events and hands over a [`Canvas`](seekbar_ui::Canvas) to draw
//! into.
#![deny(missing_docs, clippy::unwrap_used)]

pub mod error;
pub mod seekbar;

pub use error::ConfigError;
pub use seekbar::{
    RangeCommit, RangeSeekbar, RangeSeekbarArgs, Seekbar, SeekbarArgs, SeekbarStyle,
    ValueFormatter,
};
