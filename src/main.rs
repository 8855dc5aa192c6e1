use clap::Parser;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;

use nvc_cards::core::config;
use nvc_cards::tui;

#[derive(Parser)]
#[command(
    name = "nvc-cards",
    about = "Feelings and needs cards for Nonviolent Communication",
    version
)]
struct Args {
    /// Directory holding the session snapshot
    #[arg(long)]
    state_dir: Option<String>,

    /// Log verbosity: off, error, warn, info, debug, trace
    #[arg(long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();

    let file_config = config::load_config().unwrap_or_else(|err| {
        // The TUI isn't up yet, so stderr is still visible.
        eprintln!("ignoring config file: {err}");
        Default::default()
    });
    let resolved = config::resolve(
        &file_config,
        args.state_dir.as_deref(),
        args.log_level.as_deref(),
    );

    // File logger: stdout belongs to the TUI.
    let level = resolved
        .log_level
        .parse::<LevelFilter>()
        .unwrap_or(LevelFilter::Info);
    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();
    if let Ok(log_file) = File::create(&resolved.log_file) {
        let _ = WriteLogger::init(level, log_config, log_file);
    }

    log::info!(
        "nvc-cards starting (state dir: {})",
        resolved.state_dir.display()
    );

    tui::run(resolved)
}
