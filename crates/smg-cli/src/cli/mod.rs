//! CLI for the smg sitemap generator.

mod commands;
mod input;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;
use smg_core::config::{self, SmgConfig};
use smg_core::model::{parse_last_mod, NaiveDate};
use smg_core::{ChangeFreq, Priority};
use std::path::PathBuf;

use commands::{run_completions, run_config, run_download, run_generate, run_stats};

/// Top-level CLI for the smg sitemap generator.
#[derive(Debug, Parser)]
#[command(name = "smg")]
#[command(about = "smg: build a sitemaps.org XML sitemap from a list of URLs and paths", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

/// Per-run overrides of the defaults in `config.toml`.
#[derive(Debug, Clone, Default, Args)]
pub struct SettingsArgs {
    /// Origin that relative paths are resolved against, e.g. https://example.com.
    #[arg(long, value_name = "URL")]
    pub base_url: Option<String>,

    /// Default <priority> between 0.0 and 1.0.
    #[arg(long, value_name = "P")]
    pub priority: Option<Priority>,

    /// Default <changefreq>: always, hourly, daily, weekly, monthly, yearly or never.
    #[arg(long, value_name = "FREQ")]
    pub changefreq: Option<ChangeFreq>,

    /// Default <lastmod> as YYYY-MM-DD (defaults to today).
    #[arg(long, value_name = "DATE", value_parser = parse_last_mod)]
    pub lastmod: Option<NaiveDate>,
}

impl SettingsArgs {
    /// Layers the flags that were given on top of the file config.
    pub fn apply(&self, cfg: &SmgConfig) -> SmgConfig {
        let mut out = cfg.clone();
        if let Some(base_url) = &self.base_url {
            out.base_url = base_url.clone();
        }
        if let Some(priority) = self.priority {
            out.priority = priority;
        }
        if let Some(changefreq) = self.changefreq {
            out.changefreq = changefreq;
        }
        if let Some(lastmod) = self.lastmod {
            out.lastmod = Some(lastmod);
        }
        out
    }
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Generate the sitemap and print it (or write it with --output).
    Generate {
        /// File with one URL or path per line; reads stdin when omitted or "-".
        #[arg(long, short, value_name = "FILE")]
        input: Option<PathBuf>,

        /// Write the document here instead of stdout.
        #[arg(long, short, value_name = "FILE")]
        output: Option<PathBuf>,

        #[command(flatten)]
        settings: SettingsArgs,
    },

    /// Generate the sitemap and save it as sitemap.xml.
    Download {
        /// File with one URL or path per line; reads stdin when omitted or "-".
        #[arg(long, short, value_name = "FILE")]
        input: Option<PathBuf>,

        /// Directory to save sitemap.xml in (defaults to the current directory).
        #[arg(long, value_name = "DIR")]
        dir: Option<PathBuf>,

        #[command(flatten)]
        settings: SettingsArgs,
    },

    /// Show line and duplicate counts without generating.
    Stats {
        /// File with one URL or path per line; reads stdin when omitted or "-".
        #[arg(long, short, value_name = "FILE")]
        input: Option<PathBuf>,

        /// Print the counts as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Show the config file location and effective defaults.
    Config,

    /// Print a shell completion script.
    Completions {
        /// Target shell.
        shell: Shell,
    },
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Generate {
                input,
                output,
                settings,
            } => run_generate(&settings.apply(&cfg), input.as_deref(), output.as_deref())?,
            CliCommand::Download {
                input,
                dir,
                settings,
            } => {
                let dir = match dir {
                    Some(d) => d,
                    None => std::env::current_dir()?,
                };
                run_download(&settings.apply(&cfg), input.as_deref(), &dir)?;
            }
            CliCommand::Stats { input, json } => run_stats(input.as_deref(), json)?,
            CliCommand::Config => run_config(&cfg)?,
            CliCommand::Completions { shell } => run_completions(shell),
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
