use anyhow::Context;
use clap::Parser;
use period_integrator::cli::{Args, setup_logging};
use period_integrator::processor::{IntegrationProcessor, print_summary};
use std::process;

fn main() {
    let args = Args::parse();
    setup_logging(&args);

    match run(&args) {
        Ok(()) => process::exit(0),
        Err(error) => {
            eprintln!("Error: {:#}", error);
            process::exit(1);
        }
    }
}

fn run(args: &Args) -> anyhow::Result<()> {
    let config = args.to_config();
    let base_dir = config.base_dir.clone();

    let processor =
        IntegrationProcessor::new(config).context("Invalid integration configuration")?;
    let stats = processor
        .process()
        .with_context(|| format!("Failed to integrate folders under {}", base_dir.display()))?;

    if !args.quiet {
        print_summary(&stats);
    }

    Ok(())
}
