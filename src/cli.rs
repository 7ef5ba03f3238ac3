//! Command-line interface definitions.
//!
//! Defines all CLI arguments and subcommands using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Generate archive, category and tag pages from markdown front matter
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Project root directory (default: current directory)
    #[arg(short, long)]
    pub root: Option<PathBuf>,

    /// Documents directory path (relative to project root)
    #[arg(short, long)]
    pub content: Option<PathBuf>,

    /// Output directory path (relative to project root)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Config file name (default: taxa.toml)
    #[arg(short = 'C', long, default_value = "taxa.toml")]
    pub config: PathBuf,

    /// Log every filter decision and index update
    #[arg(short, long, global = true)]
    pub debug: bool,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Aggregate front matter and write the archive, index and term pages
    Build {
        /// Remove term page directories before writing
        #[arg(long)]
        clean: bool,
    },

    /// Aggregate front matter and report generated pages that are out of date
    Check {
        /// Print term and year counts as JSON instead of comparing pages
        #[arg(long)]
        json: bool,
    },
}
