use std::path::PathBuf;

use clap::{Parser, ValueEnum};

#[derive(Debug, Parser)]
#[command(
    name = "gguf-keys",
    version,
    about = "List GGUF metadata keys containing any of the given substrings"
)]
pub struct Cli {
    /// Path to a GGUF model file.
    pub model: PathBuf,

    /// Case-sensitive substrings to look for (default: rope, bias).
    pub filters: Vec<String>,

    /// Print the full scan result as JSON instead of one key per line.
    #[arg(long, env = "GGUF_KEYS_JSON")]
    pub json: bool,

    /// Log output format (logs go to stderr; level via RUST_LOG).
    #[arg(
        long,
        value_enum,
        default_value_t = LogFormat::Text,
        env = "GGUF_KEYS_LOG_FORMAT"
    )]
    pub log_format: LogFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    Text,
    Json,
}
