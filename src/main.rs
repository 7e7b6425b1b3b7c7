// src/main.rs
mod cli;
mod commands;
mod logging;
mod version;

use clap::Parser;
use cli::{Args, is_config_operation};
use namesort::app;
use namesort::error::AppError;
use tracing::debug;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    let args = Args::parse();

    if args.version {
        return commands::handle_version_command().await;
    }

    let (log_file_path, _guard) = logging::setup_logging(&args).await?;
    debug!("Logging to {log_file_path}");

    if is_config_operation(&args) {
        if args.list_config {
            return commands::handle_list_config_command().await;
        }
        return commands::handle_config_update_command(&args).await;
    }

    app::run_sort(args.input.as_deref(), args.output.as_deref()).await
}
