use clap::Parser;
use clap::builder::styling::{AnsiColor, Effects, Styles};

fn get_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .usage(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::Yellow.on_default())
        .error(AnsiColor::Red.on_default().effects(Effects::BOLD))
        .valid(AnsiColor::Green.on_default())
        .invalid(AnsiColor::Red.on_default())
}

/// Determines if the invocation is a configuration operation.
/// Config operations update or inspect persistent settings and exit without
/// running the sorting pipeline:
/// - --set-output-file updates the stored output path
/// - --set-log-file / --clear-log-file manage the stored log path
/// - --list-config prints the current settings
pub fn is_config_operation(args: &Args) -> bool {
    args.new_output_file_path.is_some()
        || args.new_log_file_path.is_some()
        || args.clear_log_file_path
        || args.list_config
}

/// Name List Sorter
///
/// Reads a list of personal names from a text file (one full name per line),
/// sorts them by last name and then by given names (case-insensitive), prints
/// the sorted list and writes it to an output file.
///
/// Each name must consist of a last name preceded by one to three given
/// names. Lines failing that rule abort the run; nothing is written.
#[derive(Parser, Debug)]
#[command(about, long_about = None)]
#[command(disable_version_flag = true)]
#[command(styles = get_styles())]
pub struct Args {
    /// Path to the input file containing one full name per line.
    pub input: Option<String>,

    /// Write the sorted names to this file for this run only,
    /// instead of the configured output path.
    #[arg(short = 'o', long = "output", help_heading = "Output Options")]
    pub output: Option<String>,

    /// Update the output file path in config. This sets a persistent output location.
    #[arg(long = "set-output-file", help_heading = "Configuration")]
    pub new_output_file_path: Option<String>,

    /// Update log file path in config. This sets a persistent custom log file location.
    #[arg(long = "set-log-file", help_heading = "Configuration")]
    pub new_log_file_path: Option<String>,

    /// Clear the custom log file path from config. This reverts to using the default log location.
    #[arg(long = "clear-log-file", help_heading = "Configuration")]
    pub clear_log_file_path: bool,

    /// List current configuration settings
    #[arg(long = "list-config", short = 'l', help_heading = "Configuration")]
    pub list_config: bool,

    /// Show version information and check for updates
    #[arg(short = 'V', long = "version", help_heading = "Info")]
    pub version: bool,

    /// Mirror log output to stderr in addition to the log file.
    /// stdout is never used for logs; it is reserved for the sorted names.
    #[arg(long = "debug", help_heading = "Debug")]
    pub debug: bool,

    /// Specify a custom log file path. If not provided, logs will be written to the default location.
    #[arg(long = "log-file", help_heading = "Debug")]
    pub log_file: Option<String>,
}
