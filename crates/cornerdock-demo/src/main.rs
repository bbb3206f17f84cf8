//! Headless CornerDock demo.
//!
//! Docks a widget in a portrait container, drags it toward the top-right
//! quadrant with simulated pointer input, lets it snap, then rotates the
//! container and lets it re-pin. Pass a JSON config path to override the
//! widget settings; `RUST_LOG` controls verbosity.

use cornerdock_core::{ConfigResult, Corner, DraggableWidget, Padding, PanRecognizer, WidgetConfig};
use kurbo::{Point, Size};

const FRAME: f64 = 1.0 / 60.0;
/// Frames after which an unsettled snap is reported and abandoned.
const MAX_FRAMES: usize = 600;

const PORTRAIT: Size = Size::new(300.0, 600.0);
const LANDSCAPE: Size = Size::new(600.0, 300.0);

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("Starting CornerDock demo");

    if let Err(e) = run() {
        log::error!("Demo failed: {}", e);
        std::process::exit(1);
    }
}

fn run() -> ConfigResult<()> {
    let config = match std::env::args().nth(1) {
        Some(path) => WidgetConfig::load(path)?,
        None => WidgetConfig {
            corner: Corner::BottomLeft,
            padding: Padding::uniform(10.0),
            ..WidgetConfig::default()
        },
    };

    let mut widget = config.build_widget();
    let mut pan = config.build_recognizer();

    widget.attach(PORTRAIT);
    log::info!("Docked at {:?} {}", widget.corner(), fmt_point(widget.center()));

    drag(&mut widget, &mut pan, Point::new(250.0, 50.0), 12);
    let frames = settle(&mut widget);
    log::info!(
        "Snapped to {:?} {} after {} frames",
        widget.corner(),
        fmt_point(widget.center()),
        frames
    );

    widget.layout(LANDSCAPE);
    let frames = settle(&mut widget);
    log::info!(
        "Rotated to {}x{}: re-pinned to {:?} {} after {} frames",
        LANDSCAPE.width,
        LANDSCAPE.height,
        widget.corner(),
        fmt_point(widget.center()),
        frames
    );

    Ok(())
}

/// Press on the widget, move to `release` in `steps` moves, and let go.
fn drag(widget: &mut DraggableWidget, pan: &mut PanRecognizer, release: Point, steps: usize) {
    let start = widget.center();
    let mut events = pan.pointer_down(start);
    for i in 1..=steps {
        let t = i as f64 / steps as f64;
        events.extend(pan.pointer_move(start.lerp(release, t)));
    }
    events.extend(pan.pointer_up(release));

    for event in events {
        log::debug!("{:?}", event);
        widget.handle_drag(event);
    }
    log::info!("Released at {}", fmt_point(release));
}

/// Tick until the snap settles. Returns the number of frames taken.
fn settle(widget: &mut DraggableWidget) -> usize {
    let mut frames = 0;
    while widget.tick(FRAME) {
        frames += 1;
        if frames % 10 == 0 {
            log::debug!("frame {}: {}", frames, fmt_point(widget.center()));
        }
        if frames >= MAX_FRAMES {
            log::warn!("Snap did not settle within {} frames", MAX_FRAMES);
            break;
        }
    }
    frames
}

fn fmt_point(point: Point) -> String {
    format!("({:.1}, {:.1})", point.x, point.y)
}
