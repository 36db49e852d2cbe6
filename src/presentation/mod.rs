pub mod cli;
pub mod config;
pub mod console;
pub mod job_list;

pub use cli::Cli;
pub use config::Settings;
pub use console::ConsoleReport;
pub use job_list::{load_listing, parse_listing};
