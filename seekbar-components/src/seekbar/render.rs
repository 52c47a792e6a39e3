use seekbar_ui::{Canvas, DrawableState, PxPosition, PxRect, TextStyle};

use super::{
    SeekbarStyle, Variant,
    layout::{SeekbarLayout, thumb_rect},
    mapping::value_to_position,
};

const DISABLED_OPACITY: f32 = 0.5;

/// Read-only view of a widget for one draw pass.
pub(crate) struct RenderInput<'a, V: Variant> {
    pub args: &'a V::Args,
    pub values: &'a V::Values,
    pub layout: &'a SeekbarLayout,
    pub pressed: Option<V::Handle>,
    pub enabled: bool,
}

pub(crate) fn render_seekbar<V: Variant>(canvas: &mut dyn Canvas, input: &RenderInput<'_, V>) {
    let opacity = if input.enabled { 1.0 } else { DISABLED_OPACITY };
    let style = V::style(input.args);

    render_track(canvas, input.layout, style, opacity);
    render_fill::<V>(canvas, input, style, opacity);
    for &handle in V::HANDLES {
        render_thumb::<V>(canvas, input, handle, opacity);
    }
    render_labels(canvas, input.layout, style, opacity);
    for &handle in V::HANDLES {
        render_value_text::<V>(canvas, input, handle, style, opacity);
    }
}

fn render_track(
    canvas: &mut dyn Canvas,
    layout: &SeekbarLayout,
    style: &SeekbarStyle,
    opacity: f32,
) {
    let track = layout.track;
    canvas.draw_round_rect(
        track,
        track.height / 2,
        style.track_color.multiply_alpha(opacity),
    );
}

fn render_fill<V: Variant>(
    canvas: &mut dyn Canvas,
    input: &RenderInput<'_, V>,
    style: &SeekbarStyle,
    opacity: f32,
) {
    let track = input.layout.track;
    let (start, end) = V::fill_span(input.values);
    let left = value_to_position(start, track);
    let right = value_to_position(end, track);
    if right <= left {
        return;
    }
    canvas.draw_round_rect(
        PxRect::from_ltrb(left, track.top(), right, track.bottom()),
        track.height / 2,
        style.track_fill_color.multiply_alpha(opacity),
    );
}

fn render_thumb<V: Variant>(
    canvas: &mut dyn Canvas,
    input: &RenderInput<'_, V>,
    handle: V::Handle,
    opacity: f32,
) {
    let drawable = V::thumb(input.args, handle);
    let rect = thumb_rect(
        input.layout.track,
        V::value(input.values, handle),
        drawable.size(),
    );
    let state = if input.pressed == Some(handle) {
        DrawableState::Pressed
    } else {
        DrawableState::Default
    };
    canvas.draw_drawable(drawable, rect, state, opacity);
}

fn render_labels(
    canvas: &mut dyn Canvas,
    layout: &SeekbarLayout,
    style: &SeekbarStyle,
    opacity: f32,
) {
    let text_style = TextStyle {
        size: style.label_text_size.to_px(),
        color: style.label_text_color.multiply_alpha(opacity),
    };
    for (text, bounds) in [
        (&style.min_label, layout.min_label),
        (&style.max_label, layout.max_label),
    ] {
        canvas.draw_text(text, PxPosition::new(bounds.left(), bounds.bottom()), text_style);
    }
}

fn render_value_text<V: Variant>(
    canvas: &mut dyn Canvas,
    input: &RenderInput<'_, V>,
    handle: V::Handle,
    style: &SeekbarStyle,
    opacity: f32,
) {
    let value = V::value(input.values, handle);
    let text = style.formatter.format_value(value);
    let size = style.value_text_size.to_px();
    let text_size = style.measurer.measure(&text, size);

    let thumb = thumb_rect(
        input.layout.track,
        value,
        V::thumb(input.args, handle).size(),
    );
    let bounds = PxRect::from_position_size(
        PxPosition::new(
            thumb.center_x() - text_size.width / 2,
            thumb.bottom() + style.value_text_padding.to_px(),
        ),
        text_size,
    );

    canvas.draw_text(
        &text,
        PxPosition::new(bounds.left(), bounds.bottom()),
        TextStyle {
            size,
            color: style.value_text_color.multiply_alpha(opacity),
        },
    );
}
