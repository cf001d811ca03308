use std::fs::File;
use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};

use tbdui::core::UiLog;
use tbdui::core::config::{self, CliOverrides, StartupParams};
use tbdui::store::HttpRecordStore;
use tbdui::tui;

#[derive(Parser)]
#[command(name = "tbdui", about = "Terminal dashboard for browsing store records")]
struct Args {
    /// Record store endpoint (overrides config and TBDUI_STORE_ENDPOINT)
    #[arg(long)]
    endpoint: Option<String>,

    /// Collection to scan, prefixed with ENVIRONMENT
    #[arg(long)]
    collection: Option<String>,

    /// Don't record every key press in the UI log
    #[arg(long)]
    no_debug_log: bool,

    /// File the process log is written to (overrides config and TBDUI_LOG_FILE)
    #[arg(long)]
    log_file: Option<String>,
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();
    dotenv::dotenv().ok();

    let file_config = match config::load_config() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("failed to load config: {e}");
            return ExitCode::FAILURE;
        }
    };
    let cli = CliOverrides {
        endpoint: args.endpoint,
        collection: args.collection,
        no_debug_log: args.no_debug_log,
        log_file: args.log_file,
    };
    let resolved = match config::resolve(&file_config, &cli) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("invalid config: {e}");
            return ExitCode::FAILURE;
        }
    };

    // Initialize file logger - the terminal belongs to the UI
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create(&resolved.log_file) {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    log::info!("tbdui starting up");

    let params = match StartupParams::from_env() {
        Ok(p) => p,
        Err(e) => {
            log::error!("Missing connection parameters: {}", e);
            eprintln!("failed to setup connection to the record store: {e}");
            return ExitCode::FAILURE;
        }
    };
    log::info!("Connecting with {:?}", params);

    let store = Arc::new(HttpRecordStore::new(
        resolved.store_endpoint.clone(),
        &resolved.collection,
        params,
    ));

    match tui::run(&resolved, store, UiLog::new()).await {
        Ok(()) => {
            log::info!("tbdui exited normally");
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("tbdui exited with error: {}", e);
            eprintln!("tbdui: {e}");
            ExitCode::FAILURE
        }
    }
}
