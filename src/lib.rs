/// Issue Address
///
/// Pulls the public address out of an issue body (the `### Public Address`
/// section of an issue form) and renders it as a CI step output binding.
pub mod cli;
pub mod error;
pub mod extractor;
pub mod logging;
pub mod output;

pub use extractor::{extract_address, AddressExtractor, Extraction, NOT_FOUND};
pub use output::{OutputFormatter, StepOutput};
