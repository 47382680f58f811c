mod formatter;
mod record;

pub use formatter::OutputFormatter;
pub use record::{validate_key, StepOutput};
