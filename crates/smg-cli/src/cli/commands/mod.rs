//! CLI command handlers, one file per command.

mod completions;
mod config;
mod download;
mod generate;
mod stats;

pub use completions::run_completions;
pub use config::run_config;
pub use download::run_download;
pub use generate::{build_sitemap, run_generate};
pub use stats::run_stats;
