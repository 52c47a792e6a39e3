//! Text styling and the text measurement seam.
//!
//! Layout needs the pixel extent of label and value strings before anything
//! is drawn. Hosts with a real font stack implement [`TextMeasurer`]; the
//! [`MonospaceMeasurer`] gives deterministic metrics for headless use and
//! tests.

use std::fmt::Debug;

use crate::{Color, Px, PxSize};

/// How a run of text is painted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle {
    /// Font size in pixels.
    pub size: Px,
    /// Fill color.
    pub color: Color,
}

/// Measures the pixel bounds of a string at a given font size.
pub trait TextMeasurer: Debug + Send + Sync {
    /// Returns the tight bounds of `text` rendered at `size` pixels.
    fn measure(&self, text: &str, size: Px) -> PxSize;
}

/// A measurer where every character has the same advance.
///
/// Width is `chars * size * advance_ratio`, rounded up; height is the font
/// size itself.
///
/// ```
/// use seekbar_ui::{MonospaceMeasurer, Px, PxSize, TextMeasurer};
///
/// let measurer = MonospaceMeasurer::default();
/// assert_eq!(measurer.measure("Min", Px(10)), PxSize::new(Px(18), Px(10)));
/// assert_eq!(measurer.measure("", Px(10)).width, Px(0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MonospaceMeasurer {
    /// Advance of one character as a fraction of the font size.
    pub advance_ratio: f32,
}

impl Default for MonospaceMeasurer {
    fn default() -> Self {
        Self { advance_ratio: 0.6 }
    }
}

impl TextMeasurer for MonospaceMeasurer {
    fn measure(&self, text: &str, size: Px) -> PxSize {
        let chars = text.chars().count() as f32;
        let width = (chars * size.to_f32() * self.advance_ratio).ceil();
        PxSize::new(Px::saturating_from_f32(width), size)
    }
}
