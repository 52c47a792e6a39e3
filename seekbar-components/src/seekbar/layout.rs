use seekbar_ui::{Px, PxPosition, PxRect, PxSize, TextMeasurer};
use tracing::{debug, warn};

use super::mapping::value_to_position;

/// Rectangles derived from the widget bounds on a layout pass.
///
/// Thumb rectangles are not stored here: they follow the values and are
/// derived on demand with [`thumb_rect`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SeekbarLayout {
    /// Size of the whole widget.
    pub bounds: PxSize,
    /// The rail thumbs travel along.
    pub track: PxRect,
    /// Bounds of the min label text.
    pub min_label: PxRect,
    /// Bounds of the max label text.
    pub max_label: PxRect,
}

/// Everything a layout pass depends on, resolved to pixels.
pub(crate) struct LayoutInput<'a> {
    pub size: PxSize,
    pub min_label: &'a str,
    pub max_label: &'a str,
    pub label_text_size: Px,
    pub label_text_padding: Px,
    pub track_height: Px,
    /// Extra inset on the left of the track, half the leftmost thumb.
    pub left_offset: Px,
    /// Extra inset on the right of the track, half the rightmost thumb.
    pub right_offset: Px,
    pub measurer: &'a dyn TextMeasurer,
}

pub(crate) fn compute_layout(input: &LayoutInput<'_>) -> SeekbarLayout {
    let width = input.size.width;
    let height = input.size.height;

    let track_top = height / 2 - input.track_height / 2;
    let track_center_y = track_top + input.track_height / 2;

    let min_label_size = input
        .measurer
        .measure(input.min_label, input.label_text_size);
    let max_label_size = input
        .measurer
        .measure(input.max_label, input.label_text_size);

    let min_label = PxRect::from_position_size(
        PxPosition::new(input.label_text_padding, Px::ZERO),
        min_label_size,
    )
    .with_center_y(track_center_y);
    let max_label = PxRect::from_position_size(
        PxPosition::new(
            width - max_label_size.width - input.label_text_padding,
            Px::ZERO,
        ),
        max_label_size,
    )
    .with_center_y(track_center_y);

    let track_left = min_label.right() + input.label_text_padding + input.left_offset;
    let track_right = max_label.left() - input.label_text_padding - input.right_offset;
    let track_width = if track_right < track_left {
        warn!(
            "Seek bar too narrow for its labels and thumbs: {}px wide, track collapsed at x={}",
            width.0, track_left.0
        );
        Px::ZERO
    } else {
        track_right - track_left
    };

    let track = PxRect::new(track_left, track_top, track_width, input.track_height);
    debug!(
        "Seek bar layout for {}x{}: track {:?}",
        width.0, height.0, track
    );

    SeekbarLayout {
        bounds: input.size,
        track,
        min_label,
        max_label,
    }
}

/// Square thumb rectangle of side `size` centered on the track at `value`.
pub(crate) fn thumb_rect(track: PxRect, value: f32, size: Px) -> PxRect {
    let center = PxPosition::new(value_to_position(value, track), track.center_y());
    PxRect::square_centered_at(center, size)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use seekbar_ui::MonospaceMeasurer;

    fn input<'a>(size: PxSize, measurer: &'a MonospaceMeasurer) -> LayoutInput<'a> {
        LayoutInput {
            size,
            min_label: "Min",
            max_label: "Max",
            label_text_size: Px(10),
            label_text_padding: Px(4),
            track_height: Px(4),
            left_offset: Px(10),
            right_offset: Px(10),
            measurer,
        }
    }

    #[test]
    fn test_labels_flank_the_track() {
        let measurer = MonospaceMeasurer::default();
        // "Min" at 10px is 18px wide
        let layout = compute_layout(&input(PxSize::new(Px(400), Px(100)), &measurer));

        assert_eq!(layout.min_label, PxRect::new(Px(4), Px(45), Px(18), Px(10)));
        assert_eq!(layout.max_label, PxRect::new(Px(378), Px(45), Px(18), Px(10)));
        // 4 + 18 + 4 + 10
        assert_eq!(layout.track.left(), Px(36));
        // 378 - 4 - 10
        assert_eq!(layout.track.right(), Px(364));
        assert_eq!(layout.track.top(), Px(48));
        assert_eq!(layout.track.height, Px(4));
        assert_eq!(layout.track.center_y(), Px(50));
    }

    #[test]
    fn test_narrow_bounds_collapse_track() {
        let measurer = MonospaceMeasurer::default();
        let layout = compute_layout(&input(PxSize::new(Px(40), Px(100)), &measurer));
        assert_eq!(layout.track.width, Px::ZERO);
        assert_eq!(layout.track.left(), Px(36));
    }

    #[test]
    fn test_thumb_rect_follows_value() {
        let track = PxRect::new(Px(40), Px(48), Px(300), Px(4));
        let rect = thumb_rect(track, 0.5, Px(20));
        assert_eq!(rect, PxRect::new(Px(180), Px(40), Px(20), Px(20)));
        assert_eq!(rect.center_x(), Px(190));

        let start = thumb_rect(track, 0.0, Px(20));
        assert_eq!(start.center_x(), track.left());
        let end = thumb_rect(track, 1.0, Px(20));
        assert_eq!(end.center_x(), track.right());
    }

    proptest! {
        #[test]
        fn prop_layout_is_idempotent(
            width in 0i32..2000,
            height in 0i32..400,
            padding in 0i32..20,
        ) {
            let measurer = MonospaceMeasurer::default();
            let mut layout_input = input(PxSize::new(Px(width), Px(height)), &measurer);
            layout_input.label_text_padding = Px(padding);
            let first = compute_layout(&layout_input);
            let second = compute_layout(&layout_input);
            prop_assert_eq!(first, second);
            prop_assert!(first.track.width >= Px::ZERO);
        }
    }
}
