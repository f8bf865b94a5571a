mod platform;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use platform::config;
use platform::logging::{self, LogDestination};

const DEFAULT_LOG_FILE: &str = "./qrpage.log";

/// Type text, watch its QR code update live, save it as a PNG.
#[derive(Debug, Parser)]
#[command(name = "qrpage", version)]
struct Cli {
    /// RON config file (defaults to ./qrpage.ron when present).
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Initial text instead of the configured default.
    #[arg(long)]
    text: Option<String>,
    /// Log file used while the page is open.
    #[arg(long)]
    log_file: Option<PathBuf>,
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Encode TEXT once with the configured options.
    Render {
        text: String,
        /// Output PNG path; defaults to a timestamped file in the download dir.
        #[arg(long, conflicts_with = "data_uri")]
        out: Option<PathBuf>,
        /// Print a data URI to stdout instead of writing a file.
        #[arg(long)]
        data_uri: bool,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Command::Render {
            text,
            out,
            data_uri,
        }) => {
            logging::initialize(LogDestination::Terminal);
            let config = config::load_config(cli.config.as_deref());
            let mut stdout = std::io::stdout().lock();
            platform::export::render_once(&config, &text, out.as_deref(), data_uri, &mut stdout)
        }
        None => {
            let log_file = cli
                .log_file
                .unwrap_or_else(|| PathBuf::from(DEFAULT_LOG_FILE));
            logging::initialize(LogDestination::File(log_file));
            let config = config::load_config(cli.config.as_deref());
            platform::run_app(&config, cli.text)
        }
    }
}
