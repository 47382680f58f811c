use anyhow::{Context as AnyhowContext, Result};
use clap::Parser;
use issue_address::cli;
use issue_address::logging::{self, Verbosity};
use issue_address::{AddressExtractor, OutputFormatter, StepOutput};

fn main() -> Result<()> {
    let args = cli::Args::parse();
    logging::init(Verbosity::from_flags(args.verbose, args.quiet));
    args.validate().context("Invalid arguments")?;

    let extraction = AddressExtractor::new().extract(&args.issue_body);
    if !extraction.is_found() {
        tracing::info!("issue body has no public address");
    }

    let output = StepOutput::new(&args.key, &extraction).context("Invalid output key")?;
    let line = OutputFormatter::format(&output, args.format)
        .with_context(|| format!("Failed to render {} output", args.format.as_str()))?;

    OutputFormatter::emit(&line, args.output_file.as_deref()).context("Failed to emit output")?;

    Ok(())
}
