use crate::cli::Args;
use crate::version;
use namesort::config::Config;
use namesort::error::AppError;
use semver::Version;

/// Handles the --version command.
///
/// Prints the running version and checks crates.io for a newer release.
/// Network failure degrades to printing the local version only.
pub async fn handle_version_command() -> Result<(), AppError> {
    println!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

    if let Some(latest_version) = version::check_latest_version().await {
        let current = Version::parse(env!("CARGO_PKG_VERSION"))?;
        let latest = Version::parse(&latest_version)?;

        if latest > current {
            version::print_version_info(&latest_version);
        } else {
            println!("You're running the latest version!");
        }
    }

    Ok(())
}

/// Handles the --list-config command.
pub async fn handle_list_config_command() -> Result<(), AppError> {
    Config::display().await
}

/// Handles configuration update commands
/// (--set-output-file, --set-log-file, --clear-log-file).
///
/// Updates configuration based on the provided arguments and saves changes.
pub async fn handle_config_update_command(args: &Args) -> Result<(), AppError> {
    let mut config = Config::load().await.unwrap_or_default();

    if let Some(new_output_path) = &args.new_output_file_path {
        config.output_file_path = new_output_path.clone();
    }

    if let Some(new_log_path) = &args.new_log_file_path {
        config.log_file_path = Some(new_log_path.clone());
    } else if args.clear_log_file_path {
        config.log_file_path = None;
        println!("Custom log file path cleared. Using default location.");
    }

    config.validate()?;
    config.save().await?;
    println!("Config updated successfully!");

    Ok(())
}
