//! Command line argument parsing for the miniparse CLI using clap.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

/// miniparse - tokenize text and extract entities
#[derive(Parser, Debug, Clone)]
#[command(name = "miniparse")]
#[command(about = "Tokenize text, extract entities and run preprocessing pipelines")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct MiniparseArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Configuration file (JSON)
    #[arg(short, long, value_name = "CONFIG_FILE", env = "MINIPARSE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl MiniparseArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Split text into typed tokens
    Tokenize(TokenizeArgs),

    /// Extract emails, phone numbers, URLs and numbers
    Extract(InputArgs),

    /// Run the configured pipeline
    Process(ProcessArgs),

    /// Remove or report speech disfluencies
    Speech(SpeechArgs),
}

/// Text input shared by all commands
#[derive(Args, Debug, Clone)]
pub struct InputArgs {
    /// Input text; read from stdin when omitted
    #[arg(value_name = "TEXT")]
    pub text: Option<String>,
}

/// Arguments for tokenization
#[derive(Args, Debug, Clone)]
pub struct TokenizeArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Keep the original casing of words
    #[arg(long)]
    pub no_lowercase: bool,

    /// Merge adjacent symbol characters into one token
    #[arg(long)]
    pub merge_symbols: bool,

    /// Hide whitespace tokens in the output
    #[arg(long)]
    pub skip_whitespace: bool,
}

/// Arguments for a full pipeline run
#[derive(Args, Debug, Clone)]
pub struct ProcessArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Preprocess the text as transcribed speech first
    #[arg(long)]
    pub speech: bool,
}

/// Arguments for speech preprocessing
#[derive(Args, Debug, Clone)]
pub struct SpeechArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Report disfluencies instead of removing them
    #[arg(long)]
    pub analyze: bool,
}

/// Output formats for CLI
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}
