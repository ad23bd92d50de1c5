use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Main CLI parser structure
#[derive(Parser)]
#[command(name = "docpage")]
#[command(about = "Table of contents and copy buttons for documentation pages", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Directory searched for docpage.yml / docpage.toml (defaults to ./)
    #[arg(short, long, value_name = "DIR")]
    pub source: Option<PathBuf>,

    /// Custom configuration file, may be given more than once
    #[arg(short, long, value_name = "CONFIG_FILE")]
    pub config: Option<Vec<PathBuf>>,

    /// Show the full backtrace when an error occurs
    #[arg(short, long, default_value_t = false)]
    pub trace: bool,

    /// Enable verbose debugging
    #[arg(short = 'g', long, default_value_t = false)]
    pub debug: bool,
}

/// Subcommands for the CLI
#[derive(Subcommand)]
pub enum Commands {
    /// Print the table of contents of a markdown or HTML page
    Toc {
        /// Page to read, `-` for stdin
        file: PathBuf,

        /// Heading level to include, e.g. `#` or `h2` (repeatable)
        #[arg(short, long = "level", value_name = "LEVEL")]
        levels: Vec<String>,

        /// How deeply nested a heading may sit
        #[arg(long, value_name = "N")]
        depth: Option<usize>,
    },

    /// Render a markdown page body with heading ids and copy buttons
    #[command(alias = "r")]
    Render {
        /// Markdown page to read, `-` for stdin
        file: PathBuf,

        /// Put the table of contents above the body
        #[arg(long, default_value_t = false)]
        toc: bool,

        /// Leave code blocks without copy buttons
        #[arg(long, default_value_t = false)]
        no_copy: bool,
    },

    /// Add copy buttons to the code blocks of an HTML page
    Copy {
        /// HTML page to read, `-` for stdin
        file: PathBuf,

        /// Behave as if no clipboard were available
        #[arg(long, default_value_t = false)]
        no_clipboard: bool,

        /// Press button N (counted from 0) and print the copied text instead of the page
        #[arg(short, long, value_name = "N")]
        activate: Option<usize>,
    },

    /// Inspect the effective configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Config subcommands
#[derive(Subcommand)]
pub enum ConfigAction {
    /// Print one value, e.g. `toc.levels`
    Get { key: String },
    /// Print the whole configuration
    List {},
}
