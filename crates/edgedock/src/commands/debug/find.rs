use edgedock_core::display::combined_bounds;
use edgedock_core::edge::{EdgeParams, classify};
use edgedock_core::{Desktop, DockWindow, Error, config};
use edgedock_windows::{Win32Desktop, dpi, find_window};

/// Finds the window the daemon would dock and prints where it is and
/// how its current position classifies.
pub fn execute(title: Option<&str>) {
    dpi::enable_dpi_awareness();

    let config = config::load();
    let title = title.unwrap_or(&config.window.title);

    let window = match find_window(title) {
        Ok(w) => w,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    let desktop = Win32Desktop;
    let bounds = window.bounds();
    println!("Window 0x{:X} {:?}", window.handle(), window.title());
    println!(
        "  bounds   ({}, {}) {}x{}",
        bounds.x, bounds.y, bounds.width, bounds.height
    );
    println!("  visible  {}", window.is_visible());
    println!("  on top   {}", window.is_always_on_top());

    let Some(combined) = combined_bounds(&desktop.displays()) else {
        eprintln!("Error: {}", Error::NoDisplays);
        std::process::exit(1);
    };
    let status_bar = config
        .dock
        .status_bar_height
        .unwrap_or_else(|| desktop.status_bar_height());
    let params = EdgeParams {
        near_edge_threshold: config.dock.near_edge_threshold,
        pull_tab: config.dock.pull_tab,
    };
    let status = classify(bounds, &combined, status_bar, &params);

    match serde_json::to_string_pretty(&status) {
        Ok(json) => println!("{json}"),
        Err(e) => eprintln!("Error: {e}"),
    }
}
