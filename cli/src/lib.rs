pub mod app;
pub mod args;
pub mod colors;
pub mod display;
pub mod json_output;
pub mod render;
pub mod utils;
pub mod view;

// Re-export commonly used items
pub use app::{load_maze, run_app};
pub use args::{Args, View, parse_cell};
pub use colors::ColorScheme;
pub use render::{Renderer, describe_event};
pub use utils::format_number;
pub use view::{CellMark, Style, ViewState};

use tracing_subscriber::{EnvFilter, fmt};

/// Logs go to stderr so frames and JSON on stdout stay clean.
/// `RUST_LOG` wins over the `verbose` default.
pub fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
