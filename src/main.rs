use clap::Parser;
use lista::core::config::{self, CliOverrides};
use lista::core::filter::Filter;
use lista::tui;
use log::Level;
use simplelog::{ConfigBuilder, WriteLogger};
use std::fs::File;

#[derive(Parser)]
#[command(name = "lista", about = "Terminal shopping list")]
struct Args {
    /// Filter to start with
    #[arg(short, long, value_enum)]
    filter: Option<Filter>,

    /// Start with an empty list instead of the seed items
    #[arg(long)]
    empty: bool,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Config is read before the logger exists, so anything it reports is
    // held in the startup log and replayed once logging is up.
    let mut startup_log = config::StartupLog::new();
    let file_config = match config::load_config(&mut startup_log) {
        Ok(c) => c,
        Err(e) => {
            startup_log.push(Level::Warn, format!("Using default config: {e}"));
            config::ListaConfig::default()
        }
    };
    let cli = CliOverrides {
        filter: args.filter,
        empty: args.empty,
    };
    let resolved = config::resolve(&file_config, &cli, &mut startup_log);

    // The terminal belongs to the UI, so logs go to a file
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create(&resolved.log_file) {
        let _ = WriteLogger::init(resolved.log_level, log_config, log_file);
    }
    startup_log.replay();

    log::info!(
        "Lista starting up (filter: {:?}, {} seed items)",
        resolved.filter,
        resolved.seed_items.len()
    );

    tui::run(resolved)
}
