use clap::Parser;
use code_aggregator::aggregate::{Aggregator, BasicAggregator};
use code_aggregator::cli::CliArgs;
use code_aggregator::errors::AggregatorError;
use code_aggregator::logger::initialize_logger;
use code_aggregator::reporting::{count_section_tokens, render_stats};
use code_aggregator::selector::Selector;
use std::process::ExitCode;
use tracing::{error, info};

fn run(args: &CliArgs) -> Result<(), AggregatorError> {
    let files = Selector::new(&args.selector_config()).select()?;
    info!("Selected {} files", files.len());

    let document = BasicAggregator::new(args.destination()).aggregate(&files)?;

    if args.stats {
        let token_counts = count_section_tokens(&document, &args.model)?;
        for line in render_stats(&args.directory, &token_counts) {
            eprintln!("{}", line);
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    let args = CliArgs::parse();
    if let Err(e) = initialize_logger(args.info) {
        eprintln!("{}", e);
    }

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
