//! Horizontal seek bars with one or two draggable thumbs.
//!
//! ## Usage
//!
//! Use [`Seekbar`] to pick a single value and [`RangeSeekbar`] to pick an
//! interval. Both take normalized values in `[0, 1]`, report a committed
//! value once per drag on release, and draw labels at both ends of the track
//! plus the formatted value under each thumb.
//!
//! The host drives the widget: it forwards bounds changes with
//! [`SeekbarWidget::on_bounds_changed`], pointer events with
//! [`SeekbarWidget::handle_pointer`], and asks it to paint with
//! [`SeekbarWidget::draw`].
//!
//! ```
//! use std::sync::{Arc, Mutex};
//!
//! use seekbar_components::seekbar::{Seekbar, SeekbarArgs};
//! use seekbar_ui::{PointerEvent, Px, PxPosition, PxSize};
//!
//! let committed = Arc::new(Mutex::new(None));
//! let sink = committed.clone();
//! let mut seekbar = Seekbar::new(
//!     SeekbarArgs::default().on_value_set(move |value| *sink.lock().unwrap() = Some(value)),
//! )?;
//! seekbar.on_bounds_changed(PxSize::new(Px(380), Px(60)));
//!
//! let track = seekbar.track_bounds();
//! let y = track.center_y();
//! seekbar.handle_pointer(PointerEvent::pressed(0, PxPosition::new(track.left(), y)));
//! seekbar.handle_pointer(PointerEvent::moved(0, PxPosition::new(track.center_x(), y)));
//! seekbar.handle_pointer(PointerEvent::released(0, PxPosition::new(track.center_x(), y)));
//!
//! assert_eq!(seekbar.value(), 0.5);
//! assert_eq!(*committed.lock().unwrap(), Some(0.5));
//! # Ok::<(), seekbar_components::ConfigError>(())
//! ```
use std::sync::Arc;

use derive_setters::Setters;
use seekbar_ui::{
    CallbackWith, Canvas, Color, Dp, Drawable, InputResponse, MonospaceMeasurer, PointerEvent,
    PxRect, PxSize, TextMeasurer,
};
use tracing::{debug, trace};

use crate::ConfigError;

use interaction::{DragState, GestureInput, handle_pointer_event};
use layout::{LayoutInput, compute_layout, thumb_rect};
use render::{RenderInput, render_seekbar};

pub use layout::SeekbarLayout;
pub use variant::{
    RangeCommit, RangeThumb, RangeValues, RangeVariant, SingleThumb, SingleVariant, Variant,
};

mod interaction;
mod layout;
mod mapping;
mod render;
mod variant;

/// Enlarges every thumb's touch target on each side.
const TOUCH_PADDING: Dp = Dp(4.0);
const DEFAULT_THUMB_SIZE: Dp = Dp(20.0);

/// Turns a value in `[0, 1]` into the text shown under a thumb.
///
/// Any `Fn(f32) -> String` closure is a formatter:
///
/// ```
/// use seekbar_components::seekbar::ValueFormatter;
///
/// let percent = |value: f32| format!("{:.0}%", value * 100.0);
/// assert_eq!(percent.format_value(0.25), "25%");
/// ```
pub trait ValueFormatter: Send + Sync {
    /// Formats `value` for display.
    fn format_value(&self, value: f32) -> String;
}

impl<F> ValueFormatter for F
where
    F: Fn(f32) -> String + Send + Sync,
{
    fn format_value(&self, value: f32) -> String {
        self(value)
    }
}

/// Shortest decimal that reads back as the same `f32`: `0.5`, `0.0`, `1.0`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DecimalFormatter;

impl ValueFormatter for DecimalFormatter {
    fn format_value(&self, value: f32) -> String {
        format!("{value:?}")
    }
}

/// Styling shared by the single and range seek bars.
#[derive(Clone, Setters)]
pub struct SeekbarStyle {
    /// Text at the left end of the track.
    #[setters(into)]
    pub min_label: String,
    /// Text at the right end of the track.
    #[setters(into)]
    pub max_label: String,
    /// Font size of the end labels.
    pub label_text_size: Dp,
    /// Gap between a label and the widget edge, and between a label and the
    /// track.
    pub label_text_padding: Dp,
    /// Color of the end labels.
    pub label_text_color: Color,
    /// Thickness of the track.
    pub track_height: Dp,
    /// Color of the unfilled track.
    pub track_color: Color,
    /// Color of the filled part of the track.
    pub track_fill_color: Color,
    /// Font size of the value text under each thumb.
    pub value_text_size: Dp,
    /// Gap between a thumb's bottom edge and its value text.
    pub value_text_padding: Dp,
    /// Color of the value text.
    pub value_text_color: Color,
    /// Produces the value text.
    #[setters(skip)]
    pub formatter: Arc<dyn ValueFormatter>,
    /// Measures label and value text for layout.
    #[setters(skip)]
    pub measurer: Arc<dyn TextMeasurer>,
}

impl Default for SeekbarStyle {
    fn default() -> Self {
        Self {
            min_label: "Min".to_string(),
            max_label: "Max".to_string(),
            label_text_size: Dp(12.0),
            label_text_padding: Dp(4.0),
            label_text_color: Color::BLACK,
            track_height: Dp(3.0),
            track_color: Color::BLACK,
            track_fill_color: Color::BLACK,
            value_text_size: Dp(14.0),
            value_text_padding: Dp(4.0),
            value_text_color: Color::BLACK,
            formatter: Arc::new(DecimalFormatter),
            measurer: Arc::new(MonospaceMeasurer::default()),
        }
    }
}

impl SeekbarStyle {
    /// Sets the value formatter.
    pub fn formatter(mut self, formatter: impl ValueFormatter + 'static) -> Self {
        self.formatter = Arc::new(formatter);
        self
    }

    /// Sets the text measurer.
    pub fn measurer(mut self, measurer: impl TextMeasurer + 'static) -> Self {
        self.measurer = Arc::new(measurer);
        self
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let dimensions = [
            ("label_text_size", self.label_text_size),
            ("label_text_padding", self.label_text_padding),
            ("track_height", self.track_height),
            ("value_text_size", self.value_text_size),
            ("value_text_padding", self.value_text_padding),
        ];
        for (name, value) in dimensions {
            if value.0.is_nan() || value.0 < 0.0 {
                return Err(ConfigError::NegativeDimension {
                    name,
                    value: value.0,
                });
            }
        }
        Ok(())
    }
}

/// Arguments for the single-handle [`Seekbar`].
#[derive(Clone, Setters)]
pub struct SeekbarArgs {
    /// Shared styling.
    pub style: SeekbarStyle,
    /// Thumb asset.
    pub thumb: Drawable,
    /// Called once per drag, on release, with the committed value.
    #[setters(skip)]
    pub on_value_set: Option<CallbackWith<f32>>,
}

impl Default for SeekbarArgs {
    fn default() -> Self {
        Self {
            style: SeekbarStyle::default(),
            thumb: Drawable::square("thumb", DEFAULT_THUMB_SIZE),
            on_value_set: None,
        }
    }
}

impl SeekbarArgs {
    /// Edits the style in place.
    pub fn map_style(mut self, f: impl FnOnce(SeekbarStyle) -> SeekbarStyle) -> Self {
        self.style = f(self.style);
        self
    }

    /// Sets the commit observer.
    pub fn on_value_set<F>(mut self, on_value_set: F) -> Self
    where
        F: Fn(f32) + Send + Sync + 'static,
    {
        self.on_value_set = Some(CallbackWith::new(on_value_set));
        self
    }
}

/// Arguments for the two-handle [`RangeSeekbar`].
#[derive(Clone, Setters)]
pub struct RangeSeekbarArgs {
    /// Shared styling.
    pub style: SeekbarStyle,
    /// Asset of the min (left) thumb.
    pub min_thumb: Drawable,
    /// Asset of the max (right) thumb.
    pub max_thumb: Drawable,
    /// Called once per drag, on release, tagged with the thumb that moved.
    #[setters(skip)]
    pub on_value_set: Option<CallbackWith<RangeCommit>>,
}

impl Default for RangeSeekbarArgs {
    fn default() -> Self {
        let thumb = Drawable::square("thumb", DEFAULT_THUMB_SIZE);
        Self {
            style: SeekbarStyle::default().value_text_size(Dp(12.0)),
            min_thumb: thumb.clone(),
            max_thumb: thumb,
            on_value_set: None,
        }
    }
}

impl RangeSeekbarArgs {
    /// Edits the style in place.
    pub fn map_style(mut self, f: impl FnOnce(SeekbarStyle) -> SeekbarStyle) -> Self {
        self.style = f(self.style);
        self
    }

    /// Uses the same asset for both thumbs.
    pub fn thumb(mut self, thumb: Drawable) -> Self {
        self.min_thumb = thumb.clone();
        self.max_thumb = thumb;
        self
    }

    /// Sets the commit observer.
    pub fn on_value_set<F>(mut self, on_value_set: F) -> Self
    where
        F: Fn(RangeCommit) + Send + Sync + 'static,
    {
        self.on_value_set = Some(CallbackWith::new(on_value_set));
        self
    }
}

fn validate<V: Variant>(args: &V::Args) -> Result<(), ConfigError> {
    V::style(args).validate()?;
    for &handle in V::HANDLES {
        let thumb = V::thumb(args, handle);
        if thumb.size().0 <= 0 {
            return Err(ConfigError::EmptyThumb {
                name: thumb.name().to_string(),
            });
        }
    }
    Ok(())
}

/// A seek bar widget; see [`Seekbar`] and [`RangeSeekbar`].
///
/// Values are the durable state. Every rectangle is derived from them and
/// from the last bounds the host reported.
pub struct SeekbarWidget<V: Variant> {
    args: V::Args,
    values: V::Values,
    enabled: bool,
    drag: DragState<V::Handle, V::Values>,
    layout: Option<SeekbarLayout>,
}

/// Single-handle seek bar.
pub type Seekbar = SeekbarWidget<SingleVariant>;

/// Two-handle seek bar selecting an interval.
pub type RangeSeekbar = SeekbarWidget<RangeVariant>;

impl<V: Variant> SeekbarWidget<V> {
    /// Creates an enabled widget at its initial values.
    ///
    /// The widget has no geometry until the first
    /// [`on_bounds_changed`](Self::on_bounds_changed).
    pub fn new(args: V::Args) -> Result<Self, ConfigError> {
        validate::<V>(&args)?;
        Ok(Self {
            args,
            values: V::initial_values(),
            enabled: true,
            drag: DragState::Idle,
            layout: None,
        })
    }

    /// Current configuration.
    pub fn args(&self) -> &V::Args {
        &self.args
    }

    /// Changes the configuration and re-runs layout.
    ///
    /// On error the previous configuration is kept.
    pub fn update_args(&mut self, update: impl FnOnce(&mut V::Args)) -> Result<(), ConfigError> {
        let mut next = self.args.clone();
        update(&mut next);
        validate::<V>(&next)?;
        self.args = next;
        if let Some(layout) = self.layout {
            self.on_bounds_changed(layout.bounds);
        }
        Ok(())
    }

    /// Replaces the value formatter.
    pub fn set_formatter(&mut self, formatter: impl ValueFormatter + 'static) {
        V::style_mut(&mut self.args).formatter = Arc::new(formatter);
    }

    /// Recomputes the track and label geometry for new widget bounds.
    pub fn on_bounds_changed(&mut self, size: PxSize) {
        let style = V::style(&self.args);
        let (first, last) = match (V::HANDLES.first(), V::HANDLES.last()) {
            (Some(&first), Some(&last)) => (first, last),
            _ => return,
        };
        let layout = compute_layout(&LayoutInput {
            size,
            min_label: &style.min_label,
            max_label: &style.max_label,
            label_text_size: style.label_text_size.to_px(),
            label_text_padding: style.label_text_padding.to_px(),
            track_height: style.track_height.to_px(),
            left_offset: V::thumb(&self.args, first).size() / 2,
            right_offset: V::thumb(&self.args, last).size() / 2,
            measurer: style.measurer.as_ref(),
        });
        self.layout = Some(layout);
    }

    /// Geometry of the last layout pass, `None` before the first one.
    pub fn layout(&self) -> Option<&SeekbarLayout> {
        self.layout.as_ref()
    }

    /// The track rectangle; empty before the first layout pass.
    pub fn track_bounds(&self) -> PxRect {
        self.layout.map(|layout| layout.track).unwrap_or_default()
    }

    /// The rectangle `handle`'s thumb currently occupies.
    pub fn thumb_rect(&self, handle: V::Handle) -> PxRect {
        thumb_rect(
            self.track_bounds(),
            V::value(&self.values, handle),
            V::thumb(&self.args, handle).size(),
        )
    }

    /// The thumb being dragged, if any.
    pub fn active_handle(&self) -> Option<V::Handle> {
        self.drag.active_handle()
    }

    /// Whether a drag is in progress.
    pub fn is_dragging(&self) -> bool {
        self.drag.active_handle().is_some()
    }

    /// Whether the widget reacts to input.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Enables or disables the widget.
    ///
    /// A disabled widget ignores every pointer event and draws at half
    /// opacity. Disabling it mid-drag abandons the drag without a commit and
    /// restores the values it had when the drag started.
    pub fn set_enabled(&mut self, enabled: bool) {
        if !enabled && self.is_dragging() {
            debug!("Seek bar disabled mid-drag, abandoning the drag");
            self.drag.abandon(&mut self.values);
        }
        self.enabled = enabled;
    }

    /// Feeds one pointer event to the widget.
    pub fn handle_pointer(&mut self, event: PointerEvent) -> InputResponse {
        if !self.enabled {
            trace!("Seek bar disabled, ignoring {:?}", event.content);
            return InputResponse::IGNORED;
        }
        let Some(layout) = self.layout.as_ref() else {
            trace!("Seek bar not laid out yet, ignoring {:?}", event.content);
            return InputResponse::IGNORED;
        };
        handle_pointer_event::<V>(
            &mut self.drag,
            &mut self.values,
            GestureInput {
                args: &self.args,
                layout,
                touch_padding: TOUCH_PADDING.to_px(),
            },
            event,
        )
    }

    /// Paints the widget. Does nothing before the first layout pass.
    pub fn draw(&self, canvas: &mut dyn Canvas) {
        let Some(layout) = self.layout.as_ref() else {
            return;
        };
        render_seekbar::<V>(
            canvas,
            &RenderInput {
                args: &self.args,
                values: &self.values,
                layout,
                pressed: self.drag.active_handle(),
                enabled: self.enabled,
            },
        );
    }

    fn replace_values(&mut self, values: V::Values) {
        if self.is_dragging() {
            debug!("Values set mid-drag, abandoning the drag");
            self.drag = DragState::Idle;
        }
        self.values = values;
    }
}

impl SeekbarWidget<SingleVariant> {
    /// Current value.
    pub fn value(&self) -> f32 {
        self.values
    }

    /// Moves the thumb to `value`, clamped to `[0, 1]`, without notifying
    /// the observer.
    pub fn set_value(&mut self, value: f32) {
        self.replace_values(SingleVariant::with_value(self.values, SingleThumb, value));
    }

    /// Replaces the commit observer; `None` removes it.
    pub fn set_on_value_set(&mut self, on_value_set: Option<CallbackWith<f32>>) {
        self.args.on_value_set = on_value_set;
    }

    /// The thumb's current rectangle.
    pub fn thumb_bounds(&self) -> PxRect {
        self.thumb_rect(SingleThumb)
    }
}

impl SeekbarWidget<RangeVariant> {
    /// Lower end of the selected interval.
    pub fn min_value(&self) -> f32 {
        self.values.min
    }

    /// Upper end of the selected interval.
    pub fn max_value(&self) -> f32 {
        self.values.max
    }

    /// Both ends of the selected interval.
    pub fn values(&self) -> RangeValues {
        self.values
    }

    /// Moves both thumbs without notifying the observer.
    ///
    /// Both values are clamped to `[0, 1]`, then `max` is raised to `min` if
    /// it is smaller.
    pub fn set_range(&mut self, min: f32, max: f32) {
        let min = mapping::clamp_unit(min);
        let max = mapping::clamp_unit(max).max(min);
        self.replace_values(RangeValues { min, max });
    }

    /// Replaces the commit observer; `None` removes it.
    pub fn set_on_value_set(&mut self, on_value_set: Option<CallbackWith<RangeCommit>>) {
        self.args.on_value_set = on_value_set;
    }

    /// The min thumb's current rectangle.
    pub fn min_thumb_bounds(&self) -> PxRect {
        self.thumb_rect(RangeThumb::Min)
    }

    /// The max thumb's current rectangle.
    pub fn max_thumb_bounds(&self) -> PxRect {
        self.thumb_rect(RangeThumb::Max)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{
        Arc,
        atomic::{AtomicUsize, Ordering},
    };

    use seekbar_ui::{
        DrawCommand, DrawableState, PointerEvent, Px, PxPosition, RecordingCanvas,
    };

    use super::*;

    fn laid_out_seekbar() -> Seekbar {
        let mut seekbar = Seekbar::new(SeekbarArgs::default()).expect("default args are valid");
        seekbar.on_bounds_changed(PxSize::new(Px(380), Px(60)));
        seekbar
    }

    fn on_track(seekbar: &Seekbar, offset: i32) -> PxPosition {
        let track = seekbar.track_bounds();
        PxPosition::new(track.left() + Px(offset), track.center_y())
    }

    #[test]
    fn test_default_formatter_matches_float_display() {
        assert_eq!(DecimalFormatter.format_value(0.5), "0.5");
        assert_eq!(DecimalFormatter.format_value(0.0), "0.0");
        assert_eq!(DecimalFormatter.format_value(1.0), "1.0");
    }

    #[test]
    fn test_negative_dimensions_rejected() {
        let args = SeekbarArgs::default().map_style(|style| style.track_height(Dp(-1.0)));
        assert_eq!(
            Seekbar::new(args).err(),
            Some(ConfigError::NegativeDimension {
                name: "track_height",
                value: -1.0
            })
        );

        let args =
            SeekbarArgs::default().map_style(|style| style.label_text_padding(Dp(f64::NAN)));
        assert!(matches!(
            Seekbar::new(args),
            Err(ConfigError::NegativeDimension {
                name: "label_text_padding",
                ..
            })
        ));
    }

    #[test]
    fn test_empty_thumb_rejected() {
        let args = RangeSeekbarArgs::default().max_thumb(Drawable::square("blank", Dp(0.0)));
        assert_eq!(
            RangeSeekbar::new(args).err(),
            Some(ConfigError::EmptyThumb {
                name: "blank".to_string()
            })
        );
    }

    #[test]
    fn test_rejected_update_keeps_previous_args() {
        let mut seekbar = laid_out_seekbar();
        let result = seekbar.update_args(|args| args.style.value_text_size = Dp(-2.0));
        assert!(result.is_err());
        assert_eq!(seekbar.args().style.value_text_size, Dp(14.0));
    }

    #[test]
    fn test_update_args_relayouts() {
        let mut seekbar = laid_out_seekbar();
        let before = seekbar.track_bounds();
        seekbar
            .update_args(|args| args.thumb = Drawable::square("big", Dp(40.0)))
            .expect("valid thumb");
        let after = seekbar.track_bounds();
        assert_eq!(after.left(), before.left() + Px(10));
        assert_eq!(after.right(), before.right() - Px(10));
    }

    #[test]
    fn test_range_defaults() {
        let seekbar = RangeSeekbar::new(RangeSeekbarArgs::default()).expect("valid");
        assert_eq!(seekbar.min_value(), 0.0);
        assert_eq!(seekbar.max_value(), 1.0);
        assert_eq!(seekbar.args().style.value_text_size, Dp(12.0));
        assert_eq!(seekbar.track_bounds(), PxRect::ZERO);
    }

    #[test]
    fn test_set_value_clamps() {
        let mut seekbar = laid_out_seekbar();
        seekbar.set_value(3.0);
        assert_eq!(seekbar.value(), 1.0);
        seekbar.set_value(-0.5);
        assert_eq!(seekbar.value(), 0.0);
        seekbar.set_value(f32::NAN);
        assert_eq!(seekbar.value(), 0.0);
    }

    #[test]
    fn test_set_range_orders_values() {
        let mut seekbar = RangeSeekbar::new(RangeSeekbarArgs::default()).expect("valid");
        seekbar.set_range(0.7, 0.2);
        assert_eq!(seekbar.values(), RangeValues { min: 0.7, max: 0.7 });
        seekbar.set_range(-1.0, 2.0);
        assert_eq!(seekbar.values(), RangeValues { min: 0.0, max: 1.0 });
    }

    #[test]
    fn test_press_before_layout_is_ignored() {
        let mut seekbar = Seekbar::new(SeekbarArgs::default()).expect("valid");
        let response = seekbar.handle_pointer(PointerEvent::pressed(0, PxPosition::ZERO));
        assert!(!response.consumed);
        assert!(!seekbar.is_dragging());

        let mut canvas = RecordingCanvas::new();
        seekbar.draw(&mut canvas);
        assert!(canvas.commands().is_empty());
    }

    #[test]
    fn test_set_value_mid_drag_abandons_drag() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = calls.clone();
        let mut seekbar = laid_out_seekbar();
        seekbar.set_on_value_set(Some(CallbackWith::new(move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        })));

        seekbar.handle_pointer(PointerEvent::pressed(0, on_track(&seekbar, 0)));
        seekbar.handle_pointer(PointerEvent::moved(0, on_track(&seekbar, 60)));
        seekbar.set_value(0.9);
        assert!(!seekbar.is_dragging());

        let response = seekbar.handle_pointer(PointerEvent::released(0, on_track(&seekbar, 60)));
        assert!(!response.consumed);
        assert_eq!(seekbar.value(), 0.9);
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_disable_mid_drag_abandons_drag() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = calls.clone();
        let mut seekbar = laid_out_seekbar();
        seekbar.set_on_value_set(Some(CallbackWith::new(move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        })));
        seekbar.handle_pointer(PointerEvent::pressed(0, on_track(&seekbar, 0)));
        seekbar.handle_pointer(PointerEvent::moved(0, on_track(&seekbar, 240)));
        assert!(seekbar.is_dragging());
        assert_eq!(seekbar.value(), 0.8);

        seekbar.set_enabled(false);
        assert!(!seekbar.is_dragging());
        assert_eq!(seekbar.value(), 0.0);
        assert_eq!(calls.load(Ordering::SeqCst), 0);
        let response = seekbar.handle_pointer(PointerEvent::moved(0, on_track(&seekbar, 100)));
        assert!(!response.consumed);

        seekbar.set_enabled(true);
        let response = seekbar.handle_pointer(PointerEvent::moved(0, on_track(&seekbar, 100)));
        assert!(!response.consumed);
        assert_eq!(seekbar.value(), 0.0);
    }

    #[test]
    fn test_cancel_restores_values_silently() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = calls.clone();
        let mut seekbar = laid_out_seekbar();
        seekbar.set_value(0.25);
        seekbar.set_on_value_set(Some(CallbackWith::new(move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        })));

        seekbar.handle_pointer(PointerEvent::pressed(0, on_track(&seekbar, 75)));
        seekbar.handle_pointer(PointerEvent::moved(0, on_track(&seekbar, 270)));
        assert_eq!(seekbar.value(), 0.9);

        let response = seekbar.handle_pointer(PointerEvent::cancelled(0));
        assert!(response.consumed);
        assert_eq!(seekbar.value(), 0.25);
        assert!(!seekbar.is_dragging());
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_draw_order_and_pressed_state() {
        let mut seekbar = laid_out_seekbar();
        seekbar.set_value(0.5);
        seekbar.handle_pointer(PointerEvent::pressed(0, on_track(&seekbar, 150)));

        let mut canvas = RecordingCanvas::new();
        seekbar.draw(&mut canvas);
        let commands = canvas.commands();
        assert_eq!(commands.len(), 6);

        let track = seekbar.track_bounds();
        assert!(matches!(
            commands[0],
            DrawCommand::RoundRect { rect, .. } if rect == track
        ));
        assert!(matches!(
            commands[1],
            DrawCommand::RoundRect { rect, .. }
                if rect.left() == track.left() && rect.right() == track.center_x()
        ));
        assert!(matches!(
            commands[2],
            DrawCommand::Drawable { state: DrawableState::Pressed, .. }
        ));
        assert_eq!(canvas.texts().collect::<Vec<_>>(), vec!["Min", "Max", "0.5"]);
    }

    #[test]
    fn test_value_text_centered_under_thumb() {
        let mut seekbar = laid_out_seekbar();
        seekbar.set_value(0.5);
        let mut canvas = RecordingCanvas::new();
        seekbar.draw(&mut canvas);

        let thumb = seekbar.thumb_bounds();
        // "0.5" at 14px is ceil(3 * 14 * 0.6) = 26px wide
        let Some(DrawCommand::Text { origin, .. }) = canvas.commands().last() else {
            panic!("value text must be drawn last");
        };
        assert_eq!(origin.x, thumb.center_x() - Px(13));
        assert_eq!(origin.y, thumb.bottom() + Px(4) + Px(14));
    }

    #[test]
    fn test_disabled_draws_at_half_opacity() {
        let mut seekbar = laid_out_seekbar();
        seekbar.set_enabled(false);
        let mut canvas = RecordingCanvas::new();
        seekbar.draw(&mut canvas);

        for command in canvas.commands() {
            match command {
                DrawCommand::RoundRect { color, .. } => assert_eq!(color.a, 0.5),
                DrawCommand::Text { style, .. } => assert_eq!(style.color.a, 0.5),
                DrawCommand::Drawable { opacity, .. } => assert_eq!(*opacity, 0.5),
            }
        }
    }

    #[test]
    fn test_custom_formatter() {
        let mut seekbar = laid_out_seekbar();
        seekbar.set_formatter(|value: f32| format!("{:.0}%", value * 100.0));
        seekbar.set_value(0.42);
        let mut canvas = RecordingCanvas::new();
        seekbar.draw(&mut canvas);
        assert_eq!(canvas.texts().last(), Some("42%"));
    }
}
