//! The read → validate → sanitize → sort → print → write pipeline.

use tracing::info;

use crate::config::Config;
use crate::error::AppError;
use crate::name_list;
use crate::sorting::NameSorter;

/// Runs the whole sorting pipeline once.
///
/// With no input path this prints the missing-argument notice and returns
/// `Ok(())` without touching any name file; it is the only soft exit. The
/// output path is resolved from the override argument first, then from the
/// configuration (which defaults to `sorted-names-list.txt` in the current
/// working directory).
///
/// # Errors
/// * `AppError::FileRead` - input file cannot be read
/// * `AppError::TooFewNameParts` / `AppError::TooManyNameParts` - a line
///   failed validation; the whole batch is aborted
/// * `AppError::FileWrite` - output file cannot be written
pub async fn run_sort(input: Option<&str>, output_override: Option<&str>) -> Result<(), AppError> {
    let Some(input_path) = input else {
        println!("Please provide the input file path as a command-line argument.");
        return Ok(());
    };

    let output_path = match output_override {
        Some(path) => path.to_string(),
        None => {
            Config::load()
                .await
                .unwrap_or_default()
                .output_file_path
        }
    };

    let names = name_list::read_names_from_file(input_path).await?;
    info!("Read {} names from {input_path}", names.len());

    let sorter = NameSorter::by_last_name_then_given_names();
    let sorted = sorter.sort(&names);

    for name in &sorted {
        println!("{name}");
    }

    name_list::write_names_to_file(&sorted, &output_path).await?;
    info!("Wrote {} sorted names to {output_path}", sorted.len());

    Ok(())
}
