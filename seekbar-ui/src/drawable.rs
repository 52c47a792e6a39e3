//! Host-provided visual assets, such as thumb images.
//!
//! The widgets never decode or rasterize anything themselves. A [`Drawable`]
//! is an opaque handle plus the intrinsic size the host resolved for it, and
//! the [`Canvas`](crate::Canvas) is asked to paint it into a rectangle.

use std::sync::Arc;

use crate::{Dp, Px};

/// The visual state an asset is drawn in.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DrawableState {
    /// Resting appearance.
    #[default]
    Default,
    /// Appearance while the user holds it.
    Pressed,
}

/// A named asset with an intrinsic size in dp.
///
/// ```
/// use seekbar_ui::{Dp, Drawable, Px};
///
/// let thumb = Drawable::new("thumb", Dp(24.0), Dp(18.0));
/// assert_eq!(thumb.size(), Px(24));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Drawable {
    name: Arc<str>,
    intrinsic_width: Dp,
    intrinsic_height: Dp,
}

impl Drawable {
    /// Creates a drawable handle with the given intrinsic size.
    pub fn new(name: impl Into<Arc<str>>, intrinsic_width: Dp, intrinsic_height: Dp) -> Self {
        Self {
            name: name.into(),
            intrinsic_width,
            intrinsic_height,
        }
    }

    /// Creates a square drawable handle.
    pub fn square(name: impl Into<Arc<str>>, side: Dp) -> Self {
        Self::new(name, side, side)
    }

    /// The name the host uses to look the asset up.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Intrinsic width.
    pub fn intrinsic_width(&self) -> Dp {
        self.intrinsic_width
    }

    /// Intrinsic height.
    pub fn intrinsic_height(&self) -> Dp {
        self.intrinsic_height
    }

    /// Side of the square this asset occupies, in pixels: the larger of the
    /// two intrinsic dimensions.
    pub fn size(&self) -> Px {
        let side = if self.intrinsic_width.0 >= self.intrinsic_height.0 {
            self.intrinsic_width
        } else {
            self.intrinsic_height
        };
        side.to_px()
    }
}
