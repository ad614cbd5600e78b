use std::time::{Duration, Instant};

use clap::{Args, ValueEnum};

use edgedock_core::sim::{SimDesktop, SimWindow};
use edgedock_core::{DockController, DockSettings, DockWindow, Point, Rect, WindowEvent};

/// Step between simulated ticks.
const TICK: Duration = Duration::from_millis(10);

const SCREEN: Rect = Rect {
    x: 0,
    y: 0,
    width: 1920,
    height: 1080,
};

/// Arguments for the `debug simulate` subcommand.
#[derive(Args)]
pub struct SimulateArgs {
    /// Edge to dock against
    #[arg(long, value_enum, default_value_t = Edge::Right)]
    edge: Edge,
    /// Window width in pixels
    #[arg(long, default_value_t = 320)]
    width: i32,
    /// Window height in pixels
    #[arg(long, default_value_t = 290)]
    height: i32,
}

#[derive(Clone, Copy, ValueEnum)]
enum Edge {
    Left,
    Right,
    Top,
}

type SimController = DockController<SimWindow, SimDesktop>;

/// Runs a scripted session on a simulated 1920x1080 desktop and prints
/// the dock state after each step: drop the window at an edge, blur it,
/// hover the pull-tab, then move the cursor away.
pub fn execute(args: &SimulateArgs) {
    let settings = DockSettings::default();
    let mut dock = SimController::new(SimDesktop::full_hd(), settings);
    let window = SimWindow::new(start_bounds(args));
    let start = Instant::now();
    let mut now = start;

    dock.attach(window);
    report(&dock, start, now, "attached");

    dock.handle_event(WindowEvent::Moved, now);
    run_for(&mut dock, &mut now, settings.move_debounce + TICK);
    report(&dock, start, now, "dropped at edge");

    dock.handle_event(WindowEvent::Blurred, now);
    run_for(
        &mut dock,
        &mut now,
        settings.blur_hide_delay + settings.animation.duration + TICK * 2,
    );
    report(&dock, start, now, "blurred");

    let sliver = visible_center(&dock);
    dock.desktop_mut().set_cursor(sliver);
    run_for(
        &mut dock,
        &mut now,
        settings.poll.interval + settings.animation.duration + TICK * 2,
    );
    report(&dock, start, now, "hovered pull-tab");

    dock.desktop_mut().set_cursor(Point::new(960, 540));
    run_for(
        &mut dock,
        &mut now,
        settings.poll.interval * 2
            + settings.poll.leave_delay
            + settings.animation.duration
            + TICK * 2,
    );
    report(&dock, start, now, "cursor left");
}

fn start_bounds(args: &SimulateArgs) -> Rect {
    let (w, h) = (args.width, args.height);
    match args.edge {
        Edge::Left => Rect::new(0, 200, w, h),
        Edge::Right => Rect::new(SCREEN.right() - w, 200, w, h),
        Edge::Top => Rect::new(800, 0, w, h),
    }
}

fn run_for(dock: &mut SimController, now: &mut Instant, duration: Duration) {
    let end = *now + duration;
    while *now < end {
        *now += TICK;
        dock.tick(*now);
    }
}

/// Center of the part of the window still on screen.
fn visible_center(dock: &SimController) -> Point {
    let Some(b) = dock.window().map(|w| w.bounds()) else {
        return Point::default();
    };
    let left = b.x.max(SCREEN.x);
    let right = b.right().min(SCREEN.right());
    let top = b.y.max(SCREEN.y);
    let bottom = b.bottom().min(SCREEN.bottom());
    Point::new((left + right) / 2, (top + bottom) / 2)
}

fn report(dock: &SimController, start: Instant, now: Instant, step: &str) {
    let state = dock.state();
    let bounds = dock.window().map(|w| w.bounds()).unwrap_or_default();
    let edge = state
        .last_edge_direction
        .map_or("none", |d| d.as_str());
    println!(
        "{:>5}ms  {step:<17} at ({:>5}, {:>5})  hidden={:<5}  edge={edge}",
        now.duration_since(start).as_millis(),
        bounds.x,
        bounds.y,
        state.is_window_hidden,
    );
}
