//! Pointer input delivered by the host, and the requests a widget can make
//! back to it while handling that input.
//!
//! # Example
//!
//! ```
//! use seekbar_ui::{PointerEvent, PointerEventContent, Px, PxPosition};
//!
//! let press = PointerEvent::pressed(0, PxPosition::new(Px(20), Px(30)));
//! assert_eq!(press.content, PointerEventContent::Pressed);
//! assert_eq!(press.position.x, Px(20));
//! ```

use crate::PxPosition;

/// Identifier the host assigns to one finger or mouse button for the lifetime
/// of a gesture.
pub type PointerId = u64;

/// A single pointer event in the widget's local coordinate space.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointerEvent {
    /// The pointer that produced this event.
    pub pointer_id: PointerId,
    /// Position relative to the widget's top-left corner.
    pub position: PxPosition,
    /// What happened.
    pub content: PointerEventContent,
}

/// The phase of a pointer gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerEventContent {
    /// The pointer went down.
    Pressed,
    /// The pointer moved while down.
    Moved,
    /// The pointer went up.
    Released,
    /// The host took the gesture away (parent intercepted, window lost
    /// focus). The position is the last known one and carries no meaning.
    Cancelled,
}

impl PointerEvent {
    /// Creates a press event.
    pub fn pressed(pointer_id: PointerId, position: PxPosition) -> Self {
        Self {
            pointer_id,
            position,
            content: PointerEventContent::Pressed,
        }
    }

    /// Creates a move event.
    pub fn moved(pointer_id: PointerId, position: PxPosition) -> Self {
        Self {
            pointer_id,
            position,
            content: PointerEventContent::Moved,
        }
    }

    /// Creates a release event.
    pub fn released(pointer_id: PointerId, position: PxPosition) -> Self {
        Self {
            pointer_id,
            position,
            content: PointerEventContent::Released,
        }
    }

    /// Creates a cancel event.
    pub fn cancelled(pointer_id: PointerId) -> Self {
        Self {
            pointer_id,
            position: PxPosition::ZERO,
            content: PointerEventContent::Cancelled,
        }
    }
}

/// Requests a widget makes to its host while handling one event.
///
/// The host applies them after the handler returns.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub struct HostRequests {
    /// The widget's visual state changed and it must be drawn again.
    pub redraw: bool,
    /// Ancestors must not steal the rest of this gesture (for example a
    /// scrolling parent turning a horizontal drag into a scroll).
    pub disallow_intercept: bool,
}

/// The outcome of handling one [`PointerEvent`].
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputResponse {
    /// Whether the widget used the event. Unconsumed events keep propagating.
    pub consumed: bool,
    /// Requests for the host.
    pub requests: HostRequests,
}

impl InputResponse {
    /// The event was not for this widget.
    pub const IGNORED: Self = Self {
        consumed: false,
        requests: HostRequests {
            redraw: false,
            disallow_intercept: false,
        },
    };

    /// The event was consumed and the widget must be redrawn.
    pub fn consumed_with_redraw() -> Self {
        Self {
            consumed: true,
            requests: HostRequests {
                redraw: true,
                disallow_intercept: false,
            },
        }
    }

    /// Adds a request that ancestors stop intercepting the gesture.
    pub fn disallowing_intercept(mut self) -> Self {
        self.requests.disallow_intercept = true;
        self
    }
}
