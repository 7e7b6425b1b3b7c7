use crossterm::{
    execute,
    style::{Color, Print, ResetColor, SetForegroundColor},
};
use semver::Version;
use std::io::stdout;

use namesort::constants::VERSION_CHECK_TIMEOUT_SECONDS;

const CURRENT_VERSION: &str = env!("CARGO_PKG_VERSION");
const CRATE_NAME: &str = env!("CARGO_PKG_NAME");

/// Checks for the latest version of this crate on crates.io.
///
/// Returns `Some(version_string)` if the query succeeded,
/// or `None` if there was an error checking.
pub async fn check_latest_version() -> Option<String> {
    let crates_io_url = format!("https://crates.io/api/v1/crates/{CRATE_NAME}");

    let client = reqwest::Client::builder()
        .timeout(std::time::Duration::from_secs(VERSION_CHECK_TIMEOUT_SECONDS))
        .build()
        .unwrap_or_else(|_| reqwest::Client::new()); // Fallback to default client if builder fails

    let user_agent = format!("{CRATE_NAME}/{CURRENT_VERSION}");
    let response = match client
        .get(&crates_io_url)
        .header("User-Agent", user_agent)
        .send()
        .await
    {
        Ok(resp) => resp,
        Err(e) => {
            eprintln!("Failed to check for updates: {e}");
            return None;
        }
    };

    let json: serde_json::Value = match response.json::<serde_json::Value>().await {
        Ok(json) => json,
        Err(e) => {
            eprintln!("Failed to parse update response: {e}");
            return None;
        }
    };

    json.get("crate")
        .and_then(|c| c.get("max_stable_version"))
        .and_then(|v| v.as_str())
        .map(String::from)
}

/// Prints an update notice when `latest_version` is newer than the running
/// binary. Unparseable versions degrade to a plain message or silence.
pub fn print_version_info(latest_version: &str) {
    let current = match Version::parse(CURRENT_VERSION) {
        Ok(v) => v,
        Err(_) => {
            println!("Update available! Latest version: {latest_version}");
            return;
        }
    };
    let latest = match Version::parse(latest_version) {
        Ok(v) => v,
        Err(_) => return,
    };

    if latest > current {
        println!();
        print_colored_line("Update available!", Color::Yellow);
        print_colored_line(&format!("Current version: {CURRENT_VERSION}"), Color::White);
        print_colored_line(&format!("Latest version:  {latest_version}"), Color::Cyan);
        print_colored_line(&format!("Run: cargo install {CRATE_NAME}"), Color::Green);
    }
}

fn print_colored_line(text: &str, color: Color) {
    execute!(
        stdout(),
        SetForegroundColor(color),
        Print(text),
        ResetColor,
        Print("\n")
    )
    .ok();
}
