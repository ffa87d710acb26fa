//! txt2rtf - Convert a plain-text file to a minimal RTF document
//!
//! This is the command line entry point. It reads a UTF-8 text file,
//! converts it with the encoder crate, and writes the resulting ASCII
//! RTF document atomically to the destination path.

use anyhow::Context;
use clap::Parser;
use encoder::{convert_file, RtfConfig};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(name = "txt2rtf", version, about = "Convert a plain-text file to a minimal RTF document")]
struct Args {
    /// UTF-8 text file to convert
    input: PathBuf,

    /// Destination RTF file
    output: PathBuf,

    /// Load the preamble configuration from a JSON file
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Override the body text language id (e.g. 1033 for en-US)
    #[arg(long, value_name = "ID")]
    lang: Option<u32>,

    /// Override the default font size, in half-points
    #[arg(long, value_name = "HALF_POINTS")]
    font_size: Option<u32>,
}

fn load_config(args: &Args) -> anyhow::Result<RtfConfig> {
    let mut config = match &args.config {
        Some(path) => {
            let json = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config file {}", path.display()))?;
            serde_json::from_str(&json)
                .with_context(|| format!("Invalid config file {}", path.display()))?
        }
        None => RtfConfig::default(),
    };

    if let Some(lang) = args.lang {
        config = config.with_text_language(lang);
    }
    if let Some(size) = args.font_size {
        config = config.with_font_size(size);
    }

    Ok(config)
}

fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    let config = load_config(&args)?;

    let stats = convert_file(&args.input, &args.output, &config)
        .with_context(|| format!("Failed to convert {}", args.input.display()))?;

    tracing::info!(
        chars = stats.input_chars,
        paragraphs = stats.paragraph_breaks,
        unicode_escapes = stats.unicode_escapes,
        bytes = stats.output_bytes,
        "conversion complete"
    );
    println!("Converted to {}", args.output.display());

    Ok(())
}
