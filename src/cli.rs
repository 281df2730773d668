use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::Level;

#[derive(Parser, Debug)]
#[command(name = "chord-chart")]
#[command(author, version, about = "Render chord diagrams of weighted relationships")]
#[command(long_about = "Render a chord diagram from a square weight matrix to SVG, \
    or export it as PNG.\n\n\
    Exit codes:\n  \
    0 - Success\n  \
    2 - Configuration or runtime error")]
pub struct Cli {
    /// Increase output verbosity (-v, -vv for more)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Log level selected by `--quiet` and `--verbose`.
    #[must_use]
    pub const fn log_level(&self) -> Level {
        if self.quiet {
            return Level::ERROR;
        }
        match self.verbose {
            0 => Level::WARN,
            1 => Level::INFO,
            _ => Level::DEBUG,
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render a chart configuration to SVG
    Render(RenderArgs),

    /// Render a chart configuration and export it as PNG
    Export(ExportArgs),

    /// Check a chart configuration without rendering
    Validate(ValidateArgs),

    /// Generate an example chart configuration file
    Init(InitArgs),
}

#[derive(Parser, Debug)]
pub struct RenderArgs {
    /// Chart configuration file (.toml or .json)
    pub input: PathBuf,

    /// Write SVG to file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[derive(Parser, Debug)]
pub struct ExportArgs {
    /// Chart configuration file (.toml or .json)
    pub input: PathBuf,

    /// Image name without extension (overrides config)
    #[arg(short, long)]
    pub name: Option<String>,

    /// Directory to save the PNG in
    #[arg(short = 'd', long, default_value = ".")]
    pub out_dir: PathBuf,

    /// Raster width in pixels (overrides config)
    #[arg(long)]
    pub width: Option<u32>,

    /// Raster height in pixels (overrides config)
    #[arg(long)]
    pub height: Option<u32>,

    /// Background color, e.g. "#ffffff" (overrides config)
    #[arg(long)]
    pub background: Option<String>,
}

#[derive(Parser, Debug)]
pub struct ValidateArgs {
    /// Chart configuration file (.toml or .json)
    pub input: PathBuf,
}

#[derive(Parser, Debug)]
pub struct InitArgs {
    /// Output path for the configuration file
    #[arg(short, long, default_value = "chord-chart.toml")]
    pub output: PathBuf,

    /// Overwrite existing file
    #[arg(long)]
    pub force: bool,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
