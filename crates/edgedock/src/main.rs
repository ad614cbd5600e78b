mod commands;

use clap::{Parser, Subcommand};

use edgedock_core::Action;

#[derive(Parser)]
#[command(
    name = "edgedock",
    version,
    about = "Edge-docking for a desktop panel window"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create the default configuration file
    Init,
    /// Start the docking daemon
    Start,
    /// Stop the docking daemon
    Stop,
    /// Show whether the daemon is running and the dock state
    Status,
    /// Send an action to the running daemon
    Action {
        #[command(subcommand)]
        action: ActionCommands,
    },
    /// Debugging and inspection tools
    Debug {
        #[command(subcommand)]
        command: DebugCommands,
    },
    /// Run the daemon (internal, not for direct use)
    #[command(hide = true)]
    Daemon,
}

#[derive(Subcommand)]
enum ActionCommands {
    /// Reveal the window, sliding it in if it is docked
    Show,
    /// Hide the window, sliding it out if it is near an edge
    Hide,
    /// Show when hidden, hide otherwise
    Toggle,
    /// Toggle always-on-top
    TogglePin,
    /// Move the window back to the top-right corner
    ResetPosition,
    /// Set window opacity (0.1 to 1.0)
    Opacity {
        /// Opacity value
        value: f64,
    },
}

#[derive(Subcommand)]
enum DebugCommands {
    /// Classify a window rectangle against a display layout
    Classify(commands::debug::classify::ClassifyArgs),
    /// Run a scripted dock session on a simulated desktop
    Simulate(commands::debug::simulate::SimulateArgs),
    /// Find the configured window and classify its live position
    Find {
        /// Title substring (defaults to the configured title)
        #[arg(long)]
        title: Option<String>,
    },
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Init => commands::init::execute(),
        Commands::Start => commands::start::execute(),
        Commands::Stop => commands::stop::execute(),
        Commands::Status => commands::status::execute(),
        Commands::Daemon => commands::daemon::execute(),
        Commands::Action { action } => {
            let action = match action {
                ActionCommands::Show => Action::Show,
                ActionCommands::Hide => Action::Hide,
                ActionCommands::Toggle => Action::Toggle,
                ActionCommands::TogglePin => Action::TogglePin,
                ActionCommands::ResetPosition => Action::ResetPosition,
                ActionCommands::Opacity { value } => Action::SetOpacity(value),
            };
            commands::action::execute(action);
        }
        Commands::Debug { command } => match command {
            DebugCommands::Classify(args) => commands::debug::classify::execute(&args),
            DebugCommands::Simulate(args) => commands::debug::simulate::execute(&args),
            DebugCommands::Find { title } => commands::debug::find::execute(title.as_deref()),
        },
    }
}
