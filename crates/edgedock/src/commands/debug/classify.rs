use clap::Args;

use edgedock_core::{Error, Rect};
use edgedock_core::display::combined_bounds;
use edgedock_core::edge::{EdgeParams, classify};

/// Arguments for the `debug classify` subcommand.
#[derive(Args)]
pub struct ClassifyArgs {
    /// Window rectangle as x,y,width,height
    #[arg(allow_hyphen_values = true)]
    window: Rect,
    /// Display rectangle as x,y,width,height (repeat for several displays)
    #[arg(long = "display", allow_hyphen_values = true, default_value = "0,0,1920,1080")]
    displays: Vec<Rect>,
    /// Height of the bottom taskbar in pixels
    #[arg(long, default_value_t = 35)]
    status_bar: i32,
    /// Distance within which a window counts as near an edge
    #[arg(long, default_value_t = EdgeParams::default().near_edge_threshold)]
    threshold: i32,
    /// Pixels left on screen when hidden
    #[arg(long, default_value_t = EdgeParams::default().pull_tab)]
    pull_tab: i32,
}

/// Prints the classification of a window rectangle as JSON.
pub fn execute(args: &ClassifyArgs) {
    let Some(bounds) = combined_bounds(&args.displays) else {
        eprintln!("Error: {}", Error::NoDisplays);
        std::process::exit(1);
    };

    let params = EdgeParams {
        near_edge_threshold: args.threshold,
        pull_tab: args.pull_tab,
    };
    let status = classify(args.window, &bounds, args.status_bar, &params);

    match serde_json::to_string_pretty(&status) {
        Ok(json) => println!("{json}"),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}
