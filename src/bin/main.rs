//! Regenerates the character -> pinyin JSON dictionary.
//!
//! ```bash
//! # Fetch the upstream table and write ./pinyinDict.json
//! pinyin_dict_gen
//!
//! # Different destination, lower completeness threshold
//! pinyin_dict_gen --output data/pinyin.json --expected-min 40000
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use pinyin_core::{DictGenerator, GeneratorConfig};
use tracing::{error, Level};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser, Debug)]
#[command(name = "pinyin_dict_gen")]
#[command(version)]
#[command(about = "Builds a character -> pinyin JSON dictionary", long_about = None)]
struct Args {
    /// JSON config file; flags below override its values
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Source table URL
    #[arg(long)]
    url: Option<String>,

    /// Output file
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Character count below which the dictionary is reported as incomplete
    #[arg(long)]
    expected_min: Option<usize>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(&args.log_level);

    let config = match resolve_config(&args) {
        Ok(config) => config,
        Err(e) => {
            error!("{:#}", e);
            return ExitCode::FAILURE;
        }
    };

    // The generator logs its own fatal errors.
    match DictGenerator::new(config).run().await {
        Ok(_) => ExitCode::SUCCESS,
        Err(_) => ExitCode::FAILURE,
    }
}

fn init_logging(log_level: &str) {
    let level = match log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();

    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("[ERROR] Could not install logger: {}", e);
    }
}

fn resolve_config(args: &Args) -> anyhow::Result<GeneratorConfig> {
    let mut config = match &args.config {
        Some(path) => GeneratorConfig::from_file(path)
            .with_context(|| format!("Could not load config {}", path.display()))?,
        None => GeneratorConfig::default(),
    };

    if let Some(url) = &args.url {
        config.source_url = url.clone();
    }
    if let Some(output) = &args.output {
        config.output_path = output.clone();
    }
    if let Some(expected_min) = args.expected_min {
        config.expected_min_characters = expected_min;
    }
    Ok(config)
}
