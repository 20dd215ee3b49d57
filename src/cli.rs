use std::path::PathBuf;
use clap::{Parser, Subcommand, ValueEnum};

#[derive(Debug, Parser, Clone)]
#[clap(author, version, about, long_about = None)]
pub struct CLI {
    #[command(subcommand)]
    pub(crate) command: BrewgenCommand,
}

#[derive(Debug, Subcommand, Clone, PartialEq)]
pub enum BrewgenCommand {
    /// Renders a release descriptor (`.json` or `.toml`) into formula text
    Render {
        /// Path to the descriptor file
        descriptor: PathBuf,
        /// Output flavor to render
        #[clap(long, value_enum, default_value = "homebrew")]
        format: RenderFormat,
        /// Write the rendered text to this file instead of stdout
        #[clap(short, long)]
        output: Option<PathBuf>,
    },
    /// Loads and validates a release descriptor without rendering it
    Check {
        /// Path to the descriptor file
        descriptor: PathBuf,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum RenderFormat {
    /// Homebrew-style Ruby formula
    Homebrew,
    /// Plain-text descriptor summary
    Text,
}
