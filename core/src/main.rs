use biopsycat_core::cli::report::{json_summary, TextReport};
use biopsycat_core::cli::{Cli, OutputFormat};
use biopsycat_core::{BiopsyPipeline, CatalogOptions, PhaseOutcome};
use clap::Parser;
use log::{error, info};
use std::process;

fn main() {
    let cli = Cli::parse();

    setup_logging(cli.verbose);

    info!(
        "Running phase {} ({}) on {}",
        cli.part.number(),
        cli.part,
        cli.root_path.display()
    );

    let options = CatalogOptions {
        spacing: cli.spacing,
        ..CatalogOptions::default()
    };
    let pipeline = BiopsyPipeline::with_options(&cli.root_path, options);

    let outcome = match pipeline.run(cli.part) {
        Ok(outcome) => outcome,
        Err(e) => {
            error!("Phase {} failed: {}", cli.part, e);
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };

    output_outcome(&outcome, cli.format);
}

fn setup_logging(verbose: bool) {
    let level = if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };
    env_logger::Builder::from_default_env()
        .filter_level(level)
        .init();
}

fn output_outcome(outcome: &PhaseOutcome, format: OutputFormat) {
    match format {
        OutputFormat::Text => println!("{}", TextReport::new(outcome)),
        OutputFormat::Json => match json_summary(outcome) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                error!("Failed to serialize to JSON: {}", e);
                eprintln!("Error: Failed to serialize to JSON: {}", e);
                process::exit(1);
            }
        },
    }
}
