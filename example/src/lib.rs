//! Headless seek bar demo.
//!
//! Builds an hour-of-day range picker, drives it with a scripted gesture
//! sequence and prints the draw commands it produces.

use seekbar_components::{ConfigError, RangeCommit, RangeSeekbar, RangeSeekbarArgs};
use seekbar_ui::{
    Color, DrawCommand, PointerEvent, Px, PxPosition, PxRect, PxSize, RecordingCanvas,
    set_scale_factor,
};
use tracing::info;

const SCALE_FACTOR: f64 = 2.0;
const BOUNDS: PxSize = PxSize::new(Px(720), Px(160));

/// Formats a value in `[0, 1]` as a 12-hour clock hour between 12AM and 11PM.
pub fn hour_label(value: f32) -> String {
    let mut hour = (value * 23.0) as i32;
    let suffix = if hour >= 12 { "PM" } else { "AM" };
    if hour > 12 {
        hour -= 12;
    }
    if hour == 0 {
        hour = 12;
    }
    format!("{hour}{suffix}")
}

fn init_tracing() {
    let filter = match tracing_subscriber::EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => match tracing_subscriber::EnvFilter::try_new("error,seekbar_components=info") {
            Ok(filter) => filter,
            Err(_) => tracing_subscriber::EnvFilter::new("error"),
        },
    };

    let _ = tracing_subscriber::fmt()
        .pretty()
        .with_env_filter(filter)
        .with_span_events(tracing_subscriber::fmt::format::FmtSpan::CLOSE)
        .try_init();
}

fn opening_hours() -> Result<RangeSeekbar, ConfigError> {
    let args = RangeSeekbarArgs::default()
        .map_style(|style| {
            style
                .track_fill_color(Color::CYAN)
                .track_color(Color::from_argb_u8(102, 0, 0, 0))
                .min_label("AM")
                .max_label("PM")
                .formatter(hour_label)
        })
        .on_value_set(|commit| match commit {
            RangeCommit::Min(value) => info!("Opening hour set to {}", hour_label(value)),
            RangeCommit::Max(value) => info!("Closing hour set to {}", hour_label(value)),
        });
    RangeSeekbar::new(args)
}

fn drag(seekbar: &mut RangeSeekbar, pointer_id: u64, from: PxRect, to_x: Px) {
    let y = from.center_y();
    let start = PxPosition::new(from.center_x(), y);
    let end = PxPosition::new(to_x, y);
    seekbar.handle_pointer(PointerEvent::pressed(pointer_id, start));
    seekbar.handle_pointer(PointerEvent::moved(pointer_id, end));
    seekbar.handle_pointer(PointerEvent::released(pointer_id, end));
}

fn print_frame(title: &str, seekbar: &RangeSeekbar) {
    let mut canvas = RecordingCanvas::new();
    seekbar.draw(&mut canvas);
    println!(
        "== {title}: {} - {}",
        hour_label(seekbar.min_value()),
        hour_label(seekbar.max_value())
    );
    for command in canvas.commands() {
        match command {
            DrawCommand::RoundRect { rect, color, .. } => println!(
                "  rect   {rect:?} rgba({}, {}, {}, {})",
                color.r, color.g, color.b, color.a
            ),
            DrawCommand::Text { text, origin, .. } => {
                println!("  text   {text:?} at ({}, {})", origin.x.0, origin.y.0)
            }
            DrawCommand::Drawable {
                name, rect, state, ..
            } => println!("  image  {name} {state:?} {rect:?}"),
        }
    }
}

/// Runs the demo.
pub fn desktop_main() -> Result<(), ConfigError> {
    init_tracing();
    set_scale_factor(SCALE_FACTOR);

    let mut seekbar = opening_hours()?;
    seekbar.on_bounds_changed(BOUNDS);
    seekbar.set_range(9.5 / 23.0, 17.5 / 23.0);
    print_frame("initial", &seekbar);

    let track = seekbar.track_bounds();
    let quarter = track.left() + track.width / 4;
    let opening = seekbar.min_thumb_bounds();
    drag(&mut seekbar, 0, opening, quarter);
    print_frame("opening moved earlier", &seekbar);

    // The closing thumb stops on the opening one
    let closing = seekbar.max_thumb_bounds();
    drag(&mut seekbar, 1, closing, track.left());
    print_frame("closing pushed into opening", &seekbar);

    seekbar.set_enabled(false);
    print_frame("disabled", &seekbar);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hour_label() {
        assert_eq!(hour_label(0.0), "12AM");
        assert_eq!(hour_label(1.5 / 23.0), "1AM");
        assert_eq!(hour_label(11.5 / 23.0), "11AM");
        assert_eq!(hour_label(12.5 / 23.0), "12PM");
        assert_eq!(hour_label(13.5 / 23.0), "1PM");
        assert_eq!(hour_label(1.0), "11PM");
    }
}
