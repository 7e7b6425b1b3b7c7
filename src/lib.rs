//! Name List Sorter Library
//!
//! This library reads lists of personal names (one full name per line), sorts
//! them by last name and then by given names (both case-insensitive), and
//! writes the sorted list back out.
//!
//! # Examples
//!
//! ```rust,no_run
//! use namesort::error::AppError;
//! use namesort::name_list;
//! use namesort::sorting::NameSorter;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), AppError> {
//!     let names = name_list::read_names_from_file("unsorted-names-list.txt").await?;
//!
//!     let sorter = NameSorter::by_last_name_then_given_names();
//!     let sorted = sorter.sort(&names);
//!
//!     for name in &sorted {
//!         println!("{name}");
//!     }
//!
//!     name_list::write_names_to_file(&sorted, "sorted-names-list.txt").await?;
//!     Ok(())
//! }
//! ```

pub mod app;
pub mod config;
pub mod constants;
pub mod error;
pub mod name_list;
pub mod sorting;

// Re-export commonly used types for convenience
pub use config::Config;
pub use error::AppError;
pub use name_list::{read_names_from_file, validate_names, write_names_to_file};
pub use sorting::{NameSorter, ParsedName, compare_by_last_name_then_given_names, parse_full_name};

/// Current version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
