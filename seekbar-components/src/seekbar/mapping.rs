use seekbar_ui::{Px, PxRect};

/// Maps a pixel offset from the track's left edge to a value in `[0, 1]`.
///
/// Offsets left of the track give `0.0`, offsets past its right edge give
/// `1.0`. The track must be laid out before any position query; a zero-width
/// track yields `0.0`.
pub(crate) fn position_to_value(offset: Px, track: PxRect) -> f32 {
    if track.width.0 <= 0 || offset.0 < 0 {
        return 0.0;
    }
    if offset > track.width {
        return 1.0;
    }
    offset.to_f32() / track.width.to_f32()
}

/// Maps a value to the absolute pixel x it occupies on the track, rounded to
/// the nearest pixel. The value is clamped to `[0, 1]` first.
pub(crate) fn value_to_position(value: f32, track: PxRect) -> Px {
    let offset = (clamp_unit(value) * track.width.to_f32()).round();
    track.left() + Px::saturating_from_f32(offset)
}

/// Clamps a value to `[0, 1]`, mapping NaN to `0.0`.
pub(crate) fn clamp_unit(value: f32) -> f32 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 1.0)
    }
}

/// Clamps an absolute pixel x onto the track and returns its value.
pub(crate) fn pixel_to_value(x: Px, track: PxRect) -> f32 {
    let clamped = x.max(track.left()).min(track.right());
    position_to_value(clamped - track.left(), track)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn track(left: i32, width: i32) -> PxRect {
        PxRect::new(Px(left), Px(50), Px(width), Px(3))
    }

    #[test]
    fn test_position_to_value_clamps() {
        let track = track(40, 300);
        assert_eq!(position_to_value(Px(-1), track), 0.0);
        assert_eq!(position_to_value(Px(0), track), 0.0);
        assert_eq!(position_to_value(Px(150), track), 0.5);
        assert_eq!(position_to_value(Px(300), track), 1.0);
        assert_eq!(position_to_value(Px(301), track), 1.0);
    }

    #[test]
    fn test_zero_width_track_maps_to_zero() {
        let track = track(40, 0);
        assert_eq!(position_to_value(Px(0), track), 0.0);
        assert_eq!(position_to_value(Px(10), track), 0.0);
        assert_eq!(value_to_position(0.7, track), Px(40));
        assert_eq!(pixel_to_value(Px(500), track), 0.0);
    }

    #[test]
    fn test_value_to_position_rounds_and_clamps() {
        let track = track(40, 300);
        assert_eq!(value_to_position(0.0, track), Px(40));
        assert_eq!(value_to_position(0.5, track), Px(190));
        assert_eq!(value_to_position(1.0, track), Px(340));
        assert_eq!(value_to_position(1.5, track), Px(340));
        assert_eq!(value_to_position(-0.5, track), Px(40));
        assert_eq!(value_to_position(f32::NAN, track), Px(40));
        // 0.333 * 300 = 99.9
        assert_eq!(value_to_position(0.333, track), Px(140));
    }

    #[test]
    fn test_pixel_to_value_clamps_to_track() {
        let track = track(40, 300);
        assert_eq!(pixel_to_value(Px(-10_000), track), 0.0);
        assert_eq!(pixel_to_value(Px(10_000), track), 1.0);
        assert_eq!(pixel_to_value(Px(100), track), 0.2);
    }

    proptest! {
        #[test]
        fn prop_round_trip(left in -500i32..500, width in 1i32..4000, frac in 0.0f64..=1.0) {
            let track = track(left, width);
            let offset = Px((frac * width as f64).round() as i32);
            let value = position_to_value(offset, track);
            prop_assert_eq!(value_to_position(value, track), track.left() + offset);
        }

        #[test]
        fn prop_monotonic(width in 1i32..4000, a in -5000i32..5000, b in -5000i32..5000) {
            let track = track(0, width);
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            prop_assert!(position_to_value(Px(lo), track) <= position_to_value(Px(hi), track));
        }

        #[test]
        fn prop_value_in_unit_range(width in 0i32..4000, x in any::<i32>()) {
            let track = track(10, width);
            let value = pixel_to_value(Px(x), track);
            prop_assert!((0.0..=1.0).contains(&value));
        }
    }
}
