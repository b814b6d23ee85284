use anyhow::Result;
use clap::Parser;
use confpack::EmbeddedAssets;
use std::path::PathBuf;
use tracing::{info, Level};
use tracing_subscriber::{fmt, EnvFilter};

/// Layered configuration bootstrap
///
/// Loads packaged defaults, merges the overlay selected by APP_ENV, and
/// prints the resolved database settings.
#[derive(Parser, Debug)]
#[command(name = "confpack")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, default_value = "info")]
    log_level: String,

    /// Log to file instead of stderr
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn setup_logging(log_level: &str, log_file: Option<PathBuf>) -> Result<()> {
    let level = match log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let filter = EnvFilter::from_default_env()
        .add_directive(level.into());

    let subscriber = fmt()
        .with_env_filter(filter)
        .with_target(true);

    if let Some(log_path) = log_file {
        let file = std::fs::File::create(log_path)?;
        subscriber.with_writer(file).init();
    } else {
        subscriber.with_writer(std::io::stderr).init();
    }

    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();

    setup_logging(&args.log_level, args.log_file)?;

    info!("Starting confpack v{}", env!("CARGO_PKG_VERSION"));

    // Populate the registry once, before any configuration read. A partially
    // initialized registry is unsafe to run with, so any error is fatal.
    let settings = match confpack::load_from_env(&EmbeddedAssets) {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    info!("Configuration loaded successfully");

    println!("{}", settings.get_string("db.uri"));
    println!("{}", settings.get_string("db.poolSize"));

    Ok(())
}
