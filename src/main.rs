use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser as _;
use proxy_list_updater::console::{self, OutputFormat};
use proxy_list_updater::{Config, ProxyListUpdater, Result, RunSummary};
use tokio::sync::broadcast::error::RecvError;
use tracing::{error, warn};
use tracing_subscriber::EnvFilter;

#[derive(clap::Parser)]
#[command(name = "proxy-list-updater", version, about = "Fetch the latest public proxy lists and regenerate README.md")]
struct Opts {
    /// JSON configuration file (defaults to the built-in TheSpeedX/PROXY-List targets)
    #[arg(short = 'c', long = "config")]
    config_path: Option<PathBuf>,

    /// Directory receiving the lists and the report (overrides the config file)
    #[arg(short = 'o', long = "output-dir")]
    output_dir: Option<PathBuf>,

    /// Print progress events as JSON lines
    #[arg(long)]
    json: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    verbose: u8,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let opts = Opts::parse();

    let default_level = match opts.verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match run(opts).await {
        Ok(summary) => ExitCode::from(summary.exit_code()),
        Err(e) => {
            error!(error = %e, "update aborted");
            eprintln!("✗ {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(opts: Opts) -> Result<RunSummary> {
    let mut config = match &opts.config_path {
        Some(path) => Config::load(path).await?,
        None => Config::default(),
    };
    if let Some(dir) = opts.output_dir {
        config.output.output_dir = dir;
    }

    let format = if opts.json { OutputFormat::Json } else { OutputFormat::Human };
    let updater = ProxyListUpdater::new(config)?;

    let mut events = updater.subscribe();
    let printer = tokio::spawn(async move {
        loop {
            match events.recv().await {
                Ok(event) => match console::format_event(&event, format) {
                    Ok(text) => println!("{text}"),
                    Err(e) => warn!(error = %e, "failed to render event"),
                },
                Err(RecvError::Lagged(skipped)) => warn!(skipped, "console fell behind, events dropped"),
                Err(RecvError::Closed) => break,
            }
        }
    });

    let summary = updater.run().await;

    // Dropping the updater closes the channel so the printer drains and exits
    drop(updater);
    if let Err(e) = printer.await {
        warn!(error = %e, "console task failed");
    }

    Ok(summary)
}
