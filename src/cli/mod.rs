mod handlers;
pub mod parse;

use clap::Parser;
pub use parse::Cli;

use crate::core::error::SparkError;

pub fn run() -> Result<(), SparkError> {
    let cli = parse::Cli::parse();
    handlers::spark(&cli)
}
