mod cli;

use anyhow::Context;
use clap::Parser;
use gguf_keyscan::{KeyFilter, scan_file};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use crate::cli::{Cli, LogFormat};

fn main() -> anyhow::Result<()> {
    let args = Cli::parse();

    //  Logging
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr);
    match args.log_format {
        LogFormat::Text => subscriber.init(),
        LogFormat::Json => subscriber.json().init(),
    }

    let filter = KeyFilter::new(args.filters);
    debug!(model = %args.model.display(), filters = ?filter.substrings(), "scanning");

    let result = scan_file(&args.model, &filter)
        .with_context(|| format!("failed to read metadata from {}", args.model.display()))?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        for key in result.keys() {
            println!("{key}");
        }
    }
    Ok(())
}
