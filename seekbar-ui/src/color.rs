//! RGBA colors used for tracks, fills and text.

/// A color with an alpha component.
///
/// Values are stored as `f32`s, typically in the range `[0.0, 1.0]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    /// Red channel.
    pub r: f32,
    /// Green channel.
    pub g: f32,
    /// Blue channel.
    pub b: f32,
    /// Alpha channel.
    pub a: f32,
}

impl Color {
    /// Opaque black.
    pub const BLACK: Color = Color::new(0.0, 0.0, 0.0, 1.0);
    /// Opaque cyan.
    pub const CYAN: Color = Color::new(0.0, 1.0, 1.0, 1.0);

    /// Creates a new `Color` from four `f32` values (red, green, blue, alpha).
    #[inline]
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Creates a new `Color` from four `u8` values (red, green, blue, alpha).
    #[inline]
    pub fn from_rgba_u8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self {
            r: r as f32 / 255.0,
            g: g as f32 / 255.0,
            b: b as f32 / 255.0,
            a: a as f32 / 255.0,
        }
    }

    /// Creates a new `Color` from alpha-first `u8` channels, the order
    /// platform color resources are usually written in.
    ///
    /// ```
    /// use seekbar_ui::Color;
    ///
    /// let scrim = Color::from_argb_u8(102, 0, 0, 0);
    /// assert!((scrim.a - 0.4).abs() < 1e-6);
    /// assert_eq!(scrim.r, 0.0);
    /// ```
    #[inline]
    pub fn from_argb_u8(a: u8, r: u8, g: u8, b: u8) -> Self {
        Self::from_rgba_u8(r, g, b, a)
    }

    /// Returns the color with its alpha multiplied by `opacity`.
    ///
    /// `opacity` is clamped to `[0.0, 1.0]`.
    #[inline]
    pub fn multiply_alpha(self, opacity: f32) -> Self {
        Self {
            a: self.a * opacity.clamp(0.0, 1.0),
            ..self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_multiply_alpha_clamps() {
        let color = Color::new(0.2, 0.4, 0.6, 0.8);
        assert_eq!(color.multiply_alpha(0.5).a, 0.4);
        assert_eq!(color.multiply_alpha(2.0).a, 0.8);
        assert_eq!(color.multiply_alpha(-1.0).a, 0.0);
        assert_eq!(color.multiply_alpha(0.5).r, 0.2);
    }
}
