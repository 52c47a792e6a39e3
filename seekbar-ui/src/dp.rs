//! # Density-Independent Pixels (Dp)
//!
//! This module provides the [`Dp`] type for representing density-independent
//! pixels, the unit in which every seek bar dimension (track height, paddings,
//! text sizes, thumb assets) is configured.
//!
//! ## Scale Factor
//!
//! The conversion between dp and physical pixels is controlled by a global
//! scale factor stored in [`SCALE_FACTOR`]. The host sets it once from the
//! display density; when it has never been set, one dp is one pixel.
//!
//! ## Usage
//!
//! ```
//! use seekbar_ui::{Dp, Px};
//!
//! let padding = Dp(4.0);
//! let pixels: Px = padding.to_px();
//! assert_eq!(pixels, Px(4));
//! ```

use std::sync::OnceLock;

use parking_lot::RwLock;

use crate::Px;

/// Global scale factor for converting between density-independent pixels and
/// physical pixels.
///
/// The scale factor represents how many physical pixels correspond to one dp
/// unit:
/// - Scale factor of 1.0: 1 dp = 1 pixel (mdpi)
/// - Scale factor of 2.0: 1 dp = 2 pixels (xhdpi)
/// - Scale factor of 0.75: 1 dp = 0.75 pixels (ldpi)
///
/// Use [`set_scale_factor`] instead of touching the lock directly.
pub static SCALE_FACTOR: OnceLock<RwLock<f64>> = OnceLock::new();

/// Sets the global dp → px scale factor.
///
/// Non-finite or non-positive factors are ignored, the previous value stays.
pub fn set_scale_factor(factor: f64) {
    if !factor.is_finite() || factor <= 0.0 {
        tracing::warn!("Ignoring invalid scale factor {factor}");
        return;
    }
    let lock = SCALE_FACTOR.get_or_init(|| RwLock::new(1.0));
    *lock.write() = factor;
}

/// Returns the current global scale factor, `1.0` when never set.
pub fn scale_factor() -> f64 {
    SCALE_FACTOR.get().map(|lock| *lock.read()).unwrap_or(1.0)
}

/// Converts a dp value to device pixels using the global scale factor.
///
/// This is the free-function form of [`Dp::to_pixels_f32`], kept for hosts
/// that deal in raw floats.
pub fn dp_to_px(dp: f32) -> f32 {
    Dp(dp as f64).to_pixels_f32()
}

/// Density-independent pixels (dp).
///
/// `Dp` represents a length that stays visually consistent across screen
/// densities. A `Dp(3.0)` track is three pixels tall on a standard density
/// screen and six on a 2x screen.
///
/// ## Examples
///
/// ```
/// use seekbar_ui::Dp;
///
/// let track_height = Dp(3.0);
/// let label_padding = Dp::new(4.0);
/// let doubled = Dp(label_padding.0 * 2.0);
/// assert_eq!(doubled, Dp(8.0));
/// # let _ = track_height;
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, PartialOrd)]
pub struct Dp(pub f64);

impl Dp {
    /// Creates a new `Dp` instance with the specified value.
    ///
    /// ```
    /// use seekbar_ui::Dp;
    ///
    /// const THUMB: Dp = Dp::new(20.0);
    /// # let _ = THUMB;
    /// ```
    pub const fn new(value: f64) -> Self {
        Dp(value)
    }

    /// Converts this dp value to physical pixels as an `f32`.
    pub fn to_pixels_f32(&self) -> f32 {
        (self.0 * scale_factor()) as f32
    }

    /// Converts this `Dp` value to a [`Px`] value.
    ///
    /// The fractional part is truncated, matching how integer pixel
    /// dimensions are usually resolved from dp resources.
    pub fn to_px(&self) -> Px {
        Px::from_f32(self.to_pixels_f32())
    }
}
