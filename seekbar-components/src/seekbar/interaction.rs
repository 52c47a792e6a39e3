use seekbar_ui::{
    InputResponse, PointerEvent, PointerEventContent, PointerId, Px, PxPosition, PxRect,
};
use tracing::{debug, trace};

use super::{
    Variant,
    layout::{SeekbarLayout, thumb_rect},
    mapping::pixel_to_value,
};

/// Where the touch state machine is.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum DragState<H, V> {
    Idle,
    Dragging {
        handle: H,
        pointer_id: PointerId,
        /// Values at press time, restored when the drag ends without a commit.
        snapshot: V,
        /// Set while the press is undecided between two equally close thumbs.
        tie: Option<Tie<H>>,
    },
}

impl<H: Copy, V: Copy> DragState<H, V> {
    pub fn active_handle(&self) -> Option<H> {
        match self {
            DragState::Idle => None,
            DragState::Dragging { handle, .. } => Some(*handle),
        }
    }

    /// Ends the drag without a commit and puts back the values from press
    /// time.
    pub fn abandon(&mut self, values: &mut V) {
        if let DragState::Dragging { snapshot, .. } = *self {
            *values = snapshot;
        }
        *self = DragState::Idle;
    }
}

/// Two thumbs at the same distance from a press. The first horizontal move
/// away from `press_x` picks `left` or `right`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Tie<H> {
    pub left: H,
    pub right: H,
    pub press_x: Px,
}

/// Result of a hit test.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Hit<H> {
    /// The thumb that takes the press for now.
    pub handle: H,
    /// The leftmost and rightmost thumbs when more than one is nearest.
    pub tied: Option<(H, H)>,
}

/// Everything one pointer event is resolved against.
pub(crate) struct GestureInput<'a, V: Variant> {
    pub args: &'a V::Args,
    pub layout: &'a SeekbarLayout,
    pub touch_padding: Px,
}

/// Finds the thumb under `position`.
///
/// Each thumb's rectangle is grown by `padding`. Among the hit thumbs the one
/// whose center is horizontally nearest wins. Equally near thumbs are
/// reported as tied, with the variant's preference holding the press until
/// the pointer moves.
pub(crate) fn hit_test<V: Variant>(
    args: &V::Args,
    values: &V::Values,
    track: PxRect,
    position: PxPosition,
    padding: Px,
) -> Option<Hit<V::Handle>> {
    let prefer_later = V::prefers_later_handle(values);
    let mut best: Option<(Hit<V::Handle>, u32)> = None;

    for &handle in V::HANDLES {
        let size = V::thumb(args, handle).size();
        let rect = thumb_rect(track, V::value(values, handle), size);
        if !rect.within_bounds(position, padding) {
            continue;
        }
        let distance = (position.x - rect.center_x()).abs();
        best = match best {
            Some((hit, best_distance)) if distance == best_distance => {
                let left = hit.tied.map_or(hit.handle, |(left, _)| left);
                let chosen = if prefer_later { handle } else { hit.handle };
                Some((
                    Hit {
                        handle: chosen,
                        tied: Some((left, handle)),
                    },
                    distance,
                ))
            }
            Some((_, best_distance)) if distance > best_distance => best,
            _ => Some((Hit { handle, tied: None }, distance)),
        };
    }

    best.map(|(hit, _)| hit)
}

/// Runs one pointer event through the state machine.
///
/// `values` is only written while a drag is in progress; the commit observer
/// is invoked at most once, on release.
pub(crate) fn handle_pointer_event<V: Variant>(
    drag: &mut DragState<V::Handle, V::Values>,
    values: &mut V::Values,
    input: GestureInput<'_, V>,
    event: PointerEvent,
) -> InputResponse {
    match (event.content, *drag) {
        (PointerEventContent::Pressed, DragState::Dragging { pointer_id, .. })
            if pointer_id != event.pointer_id =>
        {
            trace!("Ignoring press from pointer {} mid-drag", event.pointer_id);
            InputResponse::IGNORED
        }
        (PointerEventContent::Pressed, _) => {
            // A press from the dragging pointer means its release was lost.
            drag.abandon(values);
            press::<V>(drag, values, &input, event)
        }
        (_, DragState::Idle) => InputResponse::IGNORED,
        (_, DragState::Dragging { pointer_id, .. }) if pointer_id != event.pointer_id => {
            trace!("Ignoring event from foreign pointer {}", event.pointer_id);
            InputResponse::IGNORED
        }
        (
            PointerEventContent::Moved,
            DragState::Dragging {
                handle,
                pointer_id,
                snapshot,
                tie,
            },
        ) => {
            let x = event.position.x;
            let handle = match tie {
                Some(tie) if x != tie.press_x => {
                    let picked = if x < tie.press_x { tie.left } else { tie.right };
                    debug!(
                        "Tie between {:?} and {:?} settled on {:?}",
                        tie.left, tie.right, picked
                    );
                    *drag = DragState::Dragging {
                        handle: picked,
                        pointer_id,
                        snapshot,
                        tie: None,
                    };
                    picked
                }
                _ => handle,
            };
            let value = pixel_to_value(x, input.layout.track);
            *values = V::with_value(*values, handle, value);
            trace!("Dragged {:?} to {:?}", handle, values);
            InputResponse::consumed_with_redraw()
        }
        (PointerEventContent::Released, DragState::Dragging { handle, .. }) => {
            *drag = DragState::Idle;
            let commit = V::commit(values, handle);
            debug!("Released {:?}, committing {:?}", handle, commit);
            if let Some(observer) = V::observer(input.args) {
                observer.call(commit);
            }
            InputResponse::consumed_with_redraw()
        }
        (PointerEventContent::Cancelled, DragState::Dragging { handle, .. }) => {
            drag.abandon(values);
            debug!("Drag of {:?} cancelled, restored {:?}", handle, values);
            InputResponse::consumed_with_redraw()
        }
    }
}

fn press<V: Variant>(
    drag: &mut DragState<V::Handle, V::Values>,
    values: &V::Values,
    input: &GestureInput<'_, V>,
    event: PointerEvent,
) -> InputResponse {
    let Some(hit) = hit_test::<V>(
        input.args,
        values,
        input.layout.track,
        event.position,
        input.touch_padding,
    ) else {
        trace!("Press at {:?} missed every thumb", event.position);
        return InputResponse::IGNORED;
    };

    debug!("Pressed {:?} with pointer {}", hit.handle, event.pointer_id);
    *drag = DragState::Dragging {
        handle: hit.handle,
        pointer_id: event.pointer_id,
        snapshot: *values,
        tie: hit.tied.map(|(left, right)| Tie {
            left,
            right,
            press_x: event.position.x,
        }),
    };
    InputResponse::consumed_with_redraw().disallowing_intercept()
}
