//! Physical pixel coordinate system.
//!
//! This module provides the integer pixel types every seek bar geometry is
//! expressed in: track, thumb and label rectangles, pointer positions and the
//! widget's outer bounds.
//!
//! # Key Types
//!
//! - [`Px`] - A single physical pixel coordinate value
//! - [`PxPosition`] - A 2D position (x, y)
//! - [`PxSize`] - A 2D size (width, height)
//! - [`PxRect`] - An axis-aligned rectangle (top-left corner + size)
//!
//! # Coordinate System
//!
//! - Origin (0, 0) at the widget's top-left corner
//! - X-axis increases to the right
//! - Y-axis increases downward
//! - Negative coordinates are allowed (pointers dragged off the widget)
//!
//! # Example
//!
//! ```
//! use seekbar_ui::px::{Px, PxPosition, PxRect};
//!
//! let thumb = PxRect::new(Px(90), Px(40), Px(20), Px(20));
//! assert_eq!(thumb.center_x(), Px(100));
//! assert!(thumb.within_bounds(PxPosition::new(Px(88), Px(50)), Px(4)));
//! ```

/// A physical pixel coordinate value.
///
/// # Examples
///
/// ```
/// use seekbar_ui::px::Px;
///
/// let a = Px::new(100);
/// let b = Px::new(-50);
/// assert_eq!(a + b, Px(50));
/// assert_eq!(a / 2, Px(50));
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, PartialOrd, Eq, Ord, Hash)]
pub struct Px(pub i32);

impl Px {
    /// A constant representing zero pixels.
    pub const ZERO: Self = Self(0);

    /// Creates a new `Px` instance from an i32 value.
    pub const fn new(value: i32) -> Self {
        Px(value)
    }

    /// Returns the absolute value as a u32.
    pub fn abs(self) -> u32 {
        self.0.unsigned_abs()
    }

    /// Converts the pixel value to f32.
    pub fn to_f32(self) -> f32 {
        self.0 as f32
    }

    /// Creates a `Px` from an f32 value, truncating toward zero.
    ///
    /// ```
    /// use seekbar_ui::px::Px;
    ///
    /// assert_eq!(Px::from_f32(42.7), Px(42));
    /// ```
    pub fn from_f32(value: f32) -> Self {
        Px(value as i32)
    }

    /// Creates a `Px` from an f32 value, saturating at the numeric bounds
    /// instead of overflowing.
    ///
    /// ```
    /// use seekbar_ui::px::Px;
    ///
    /// assert_eq!(Px::saturating_from_f32(f32::MAX), Px(i32::MAX));
    /// assert_eq!(Px::saturating_from_f32(f32::MIN), Px(i32::MIN));
    /// ```
    pub fn saturating_from_f32(value: f32) -> Self {
        let clamped_value = value.clamp(i32::MIN as f32, i32::MAX as f32);
        Px(clamped_value as i32)
    }
}

/// A 2D position in physical pixel space.
///
/// Pointer events are delivered in this type, in the widget's local
/// coordinate space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct PxPosition {
    /// The x-coordinate in physical pixels
    pub x: Px,
    /// The y-coordinate in physical pixels
    pub y: Px,
}

impl PxPosition {
    /// A constant representing the zero position (0, 0).
    pub const ZERO: Self = Self { x: Px(0), y: Px(0) };

    /// Creates a new position from x and y coordinates.
    pub const fn new(x: Px, y: Px) -> Self {
        Self { x, y }
    }
}

/// A 2D size in physical pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct PxSize {
    /// The width in physical pixels
    pub width: Px,
    /// The height in physical pixels
    pub height: Px,
}

impl PxSize {
    /// A constant representing zero size (0×0).
    pub const ZERO: Self = Self {
        width: Px(0),
        height: Px(0),
    };

    /// Creates a new size from width and height.
    pub const fn new(width: Px, height: Px) -> Self {
        Self { width, height }
    }
}

/// A 2D rectangle in physical pixel space.
///
/// The rectangle is stored as its top-left corner and its size. The edge
/// accessors ([`right`](Self::right), [`bottom`](Self::bottom)) are exclusive
/// ends, the same convention host canvases use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct PxRect {
    /// The x-coordinate of the top-left corner
    pub x: Px,
    /// The y-coordinate of the top-left corner
    pub y: Px,
    /// The width of the rectangle
    pub width: Px,
    /// The height of the rectangle
    pub height: Px,
}

impl PxRect {
    /// A constant representing a zero rectangle (0×0 at position (0, 0)).
    pub const ZERO: Self = Self {
        x: Px::ZERO,
        y: Px::ZERO,
        width: Px::ZERO,
        height: Px::ZERO,
    };

    /// Creates a new rectangle from position and size.
    pub const fn new(x: Px, y: Px, width: Px, height: Px) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Creates a new rectangle from a position and size.
    pub fn from_position_size(position: PxPosition, size: PxSize) -> Self {
        Self {
            x: position.x,
            y: position.y,
            width: size.width,
            height: size.height,
        }
    }

    /// Creates a new rectangle from its four edges.
    ///
    /// ```
    /// use seekbar_ui::px::{Px, PxRect};
    ///
    /// let rect = PxRect::from_ltrb(Px(10), Px(20), Px(110), Px(23));
    /// assert_eq!(rect.width, Px(100));
    /// assert_eq!(rect.height, Px(3));
    /// ```
    pub fn from_ltrb(left: Px, top: Px, right: Px, bottom: Px) -> Self {
        Self {
            x: left,
            y: top,
            width: right - left,
            height: bottom - top,
        }
    }

    /// Creates a square of side `size` centered on `center`.
    ///
    /// For odd sizes the extra pixel lands on the right/bottom side, so the
    /// left edge is always `center.x - size / 2`.
    pub fn square_centered_at(center: PxPosition, size: Px) -> Self {
        let radius = size / 2;
        Self {
            x: center.x - radius,
            y: center.y - radius,
            width: size,
            height: size,
        }
    }

    /// The left edge.
    pub fn left(&self) -> Px {
        self.x
    }

    /// The top edge.
    pub fn top(&self) -> Px {
        self.y
    }

    /// The (exclusive) right edge.
    pub fn right(&self) -> Px {
        self.x + self.width
    }

    /// The (exclusive) bottom edge.
    pub fn bottom(&self) -> Px {
        self.y + self.height
    }

    /// The horizontal center, rounded toward the left edge.
    pub fn center_x(&self) -> Px {
        self.x + self.width / 2
    }

    /// The vertical center, rounded toward the top edge.
    pub fn center_y(&self) -> Px {
        self.y + self.height / 2
    }

    /// Returns the rectangle moved so that its top edge is at `y`.
    pub fn with_y(self, y: Px) -> Self {
        Self { y, ..self }
    }

    /// Returns the rectangle moved vertically so that its center is at `y`.
    pub fn with_center_y(self, y: Px) -> Self {
        self.with_y(y - self.height / 2)
    }

    /// Returns the rectangle grown by `margin` on every side.
    ///
    /// A negative margin shrinks the rectangle.
    ///
    /// ```
    /// use seekbar_ui::px::{Px, PxRect};
    ///
    /// let rect = PxRect::new(Px(10), Px(10), Px(20), Px(20));
    /// assert_eq!(rect.expand(Px(4)), PxRect::new(Px(6), Px(6), Px(28), Px(28)));
    /// ```
    pub fn expand(&self, margin: Px) -> Self {
        Self {
            x: self.x - margin,
            y: self.y - margin,
            width: self.width + margin * 2,
            height: self.height + margin * 2,
        }
    }

    /// Check if a point lies strictly inside the rectangle grown by `padding`.
    ///
    /// Every edge is exclusive. This is the hit test used for touch targets,
    /// where `padding` enlarges a small visual into a comfortable target.
    pub fn within_bounds(&self, point: PxPosition, padding: Px) -> bool {
        let padded = self.expand(padding);
        point.x > padded.left()
            && point.x < padded.right()
            && point.y > padded.top()
            && point.y < padded.bottom()
    }
}

impl std::ops::Add for Px {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Px(self.0 + rhs.0)
    }
}

impl std::ops::Sub for Px {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Px(self.0 - rhs.0)
    }
}

impl std::ops::Mul<i32> for Px {
    type Output = Self;

    fn mul(self, rhs: i32) -> Self::Output {
        Px(self.0 * rhs)
    }
}

impl std::ops::Div<i32> for Px {
    type Output = Self;

    fn div(self, rhs: i32) -> Self::Output {
        Px(self.0 / rhs)
    }
}
