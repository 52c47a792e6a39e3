use std::fmt::Debug;

use seekbar_ui::{CallbackWith, Drawable};

use super::{RangeSeekbarArgs, SeekbarArgs, SeekbarStyle, mapping::clamp_unit};

/// What differs between the single-handle and the range seek bar.
///
/// [`SeekbarWidget`](super::SeekbarWidget) holds the shared geometry and
/// gesture handling; a `Variant` supplies its handles, how values are stored
/// and constrained, and what a committed gesture reports.
pub trait Variant: Sized + 'static {
    /// Configuration type.
    type Args: Clone;
    /// The durable value state.
    type Values: Copy + PartialEq + Debug;
    /// Identifies one thumb.
    type Handle: Copy + Eq + Debug + 'static;
    /// Payload delivered to the observer when a drag is released.
    type Commit: Copy + PartialEq + Debug;

    /// Every handle, left to right.
    const HANDLES: &'static [Self::Handle];

    /// Values a freshly constructed widget starts with.
    fn initial_values() -> Self::Values;

    /// Styling shared by every variant.
    fn style(args: &Self::Args) -> &SeekbarStyle;

    /// Mutable access to the shared styling.
    fn style_mut(args: &mut Self::Args) -> &mut SeekbarStyle;

    /// The asset drawn for `handle`.
    fn thumb(args: &Self::Args, handle: Self::Handle) -> &Drawable;

    /// The registered commit observer, if any.
    fn observer(args: &Self::Args) -> Option<&CallbackWith<Self::Commit>>;

    /// Current value of `handle`.
    fn value(values: &Self::Values, handle: Self::Handle) -> f32;

    /// Returns `values` with `handle` moved to `value`, keeping every
    /// ordering constraint between handles.
    fn with_value(values: Self::Values, handle: Self::Handle, value: f32) -> Self::Values;

    /// Start and end of the filled part of the track, in value space.
    fn fill_span(values: &Self::Values) -> (f32, f32);

    /// When two thumbs are hit at the same distance, whether the rightmost
    /// one wins.
    fn prefers_later_handle(values: &Self::Values) -> bool;

    /// The observer payload for a released drag of `handle`.
    fn commit(values: &Self::Values, handle: Self::Handle) -> Self::Commit;
}

/// Marker for the single-handle seek bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SingleVariant;

/// The only thumb of a single-handle seek bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct SingleThumb;

impl Variant for SingleVariant {
    type Args = SeekbarArgs;
    type Values = f32;
    type Handle = SingleThumb;
    type Commit = f32;

    const HANDLES: &'static [SingleThumb] = &[SingleThumb];

    fn initial_values() -> f32 {
        0.0
    }

    fn style(args: &SeekbarArgs) -> &SeekbarStyle {
        &args.style
    }

    fn style_mut(args: &mut SeekbarArgs) -> &mut SeekbarStyle {
        &mut args.style
    }

    fn thumb(args: &SeekbarArgs, _handle: SingleThumb) -> &Drawable {
        &args.thumb
    }

    fn observer(args: &SeekbarArgs) -> Option<&CallbackWith<f32>> {
        args.on_value_set.as_ref()
    }

    fn value(values: &f32, _handle: SingleThumb) -> f32 {
        *values
    }

    fn with_value(_values: f32, _handle: SingleThumb, value: f32) -> f32 {
        clamp_unit(value)
    }

    fn fill_span(values: &f32) -> (f32, f32) {
        (0.0, *values)
    }

    fn prefers_later_handle(_values: &f32) -> bool {
        false
    }

    fn commit(values: &f32, _handle: SingleThumb) -> f32 {
        *values
    }
}

/// Marker for the two-handle range seek bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RangeVariant;

/// One of the two thumbs of a range seek bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RangeThumb {
    /// The left thumb, holding the lower value.
    Min,
    /// The right thumb, holding the upper value.
    Max,
}

/// The selected interval of a range seek bar. `min <= max` always holds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RangeValues {
    /// Lower end, in `[0, 1]`.
    pub min: f32,
    /// Upper end, in `[0, 1]`.
    pub max: f32,
}

impl Default for RangeValues {
    fn default() -> Self {
        Self { min: 0.0, max: 1.0 }
    }
}

/// What a released drag on a range seek bar committed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RangeCommit {
    /// The min thumb was released at this value.
    Min(f32),
    /// The max thumb was released at this value.
    Max(f32),
}

impl RangeCommit {
    /// The committed value, whichever thumb moved.
    pub fn value(self) -> f32 {
        match self {
            RangeCommit::Min(value) | RangeCommit::Max(value) => value,
        }
    }
}

impl Variant for RangeVariant {
    type Args = RangeSeekbarArgs;
    type Values = RangeValues;
    type Handle = RangeThumb;
    type Commit = RangeCommit;

    const HANDLES: &'static [RangeThumb] = &[RangeThumb::Min, RangeThumb::Max];

    fn initial_values() -> RangeValues {
        RangeValues::default()
    }

    fn style(args: &RangeSeekbarArgs) -> &SeekbarStyle {
        &args.style
    }

    fn style_mut(args: &mut RangeSeekbarArgs) -> &mut SeekbarStyle {
        &mut args.style
    }

    fn thumb(args: &RangeSeekbarArgs, handle: RangeThumb) -> &Drawable {
        match handle {
            RangeThumb::Min => &args.min_thumb,
            RangeThumb::Max => &args.max_thumb,
        }
    }

    fn observer(args: &RangeSeekbarArgs) -> Option<&CallbackWith<RangeCommit>> {
        args.on_value_set.as_ref()
    }

    fn value(values: &RangeValues, handle: RangeThumb) -> f32 {
        match handle {
            RangeThumb::Min => values.min,
            RangeThumb::Max => values.max,
        }
    }

    fn with_value(values: RangeValues, handle: RangeThumb, value: f32) -> RangeValues {
        let value = clamp_unit(value);
        // A thumb that would reach or pass its partner stops on top of it.
        match handle {
            RangeThumb::Min => RangeValues {
                min: value.min(values.max),
                ..values
            },
            RangeThumb::Max => RangeValues {
                max: value.max(values.min),
                ..values
            },
        }
    }

    fn fill_span(values: &RangeValues) -> (f32, f32) {
        (values.min, values.max)
    }

    fn prefers_later_handle(values: &RangeValues) -> bool {
        // Coincident thumbs parked at the right end can only separate leftward.
        values.max < 1.0
    }

    fn commit(values: &RangeValues, handle: RangeThumb) -> RangeCommit {
        match handle {
            RangeThumb::Min => RangeCommit::Min(values.min),
            RangeThumb::Max => RangeCommit::Max(values.max),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_min_stops_on_max() {
        let values = RangeValues { min: 0.2, max: 0.8 };
        let moved = RangeVariant::with_value(values, RangeThumb::Min, 0.9);
        assert_eq!(moved, RangeValues { min: 0.8, max: 0.8 });

        let moved = RangeVariant::with_value(values, RangeThumb::Min, 0.5);
        assert_eq!(moved, RangeValues { min: 0.5, max: 0.8 });
    }

    #[test]
    fn test_range_max_stops_on_min() {
        let values = RangeValues { min: 0.2, max: 0.8 };
        let moved = RangeVariant::with_value(values, RangeThumb::Max, -3.0);
        assert_eq!(moved, RangeValues { min: 0.2, max: 0.2 });
    }

    #[test]
    fn test_tie_break_prefers_max_until_right_end() {
        assert!(RangeVariant::prefers_later_handle(&RangeValues {
            min: 0.5,
            max: 0.5
        }));
        assert!(!RangeVariant::prefers_later_handle(&RangeValues {
            min: 1.0,
            max: 1.0
        }));
    }

    #[test]
    fn test_commit_tags_the_moved_thumb() {
        let values = RangeValues { min: 0.25, max: 0.75 };
        assert_eq!(
            RangeVariant::commit(&values, RangeThumb::Min),
            RangeCommit::Min(0.25)
        );
        assert_eq!(
            RangeVariant::commit(&values, RangeThumb::Max),
            RangeCommit::Max(0.75)
        );
        assert_eq!(RangeCommit::Max(0.75).value(), 0.75);
    }

    #[test]
    fn test_single_clamps() {
        assert_eq!(SingleVariant::with_value(0.3, SingleThumb, 1.7), 1.0);
        assert_eq!(SingleVariant::fill_span(&0.4), (0.0, 0.4));
    }
}
