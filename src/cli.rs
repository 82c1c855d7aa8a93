//! Command-line argument definitions for the `gemcad` tool.

use std::path::PathBuf;

use clap::{Args as ClapArgs, Parser, Subcommand};
use gemcad::GridType;

/// Headless driver for the GemCAD design canvas
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to configuration file (TOML or JSON)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "warn", global = true)]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Import SVG files into one layer and export it as a single document
    Export {
        /// SVG files to import, in order
        #[arg(required = true)]
        inputs: Vec<PathBuf>,

        /// Path to the output SVG file
        #[arg(short, long, default_value = "out.svg")]
        output: PathBuf,
    },

    /// Fill a circular region of a design with stones
    Fill(FillArgs),
}

#[derive(ClapArgs, Debug)]
pub struct FillArgs {
    /// SVG file to start from
    pub input: PathBuf,

    /// Region center x
    #[arg(long, allow_hyphen_values = true)]
    pub cx: f64,

    /// Region center y
    #[arg(long, allow_hyphen_values = true)]
    pub cy: f64,

    /// Region radius (defaults to the configured quick-select radius)
    #[arg(long)]
    pub radius: Option<f64>,

    /// Stone layout: hex, pave or channel
    #[arg(long)]
    pub grid: Option<GridType>,

    /// Stone diameter
    #[arg(long)]
    pub stone_size: Option<f64>,

    /// Gap between stones
    #[arg(long)]
    pub spacing: Option<f64>,

    /// Gap between stones and the region boundary
    #[arg(long)]
    pub padding: Option<f64>,

    /// Use the remote packing service from the configuration
    #[arg(long)]
    pub remote: bool,

    /// Path to the output SVG file
    #[arg(short, long, default_value = "out.svg")]
    pub output: PathBuf,
}
