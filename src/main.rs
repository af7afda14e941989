mod cli;

use clap::Parser;
use cli::OutputFormat;
use log::error;
use namikoda::{IpsForDataSource, JsonState, Result};
use std::process::ExitCode;

/*-------------------------------------------------------------------------------------------------
  Main
-------------------------------------------------------------------------------------------------*/

fn main() -> ExitCode {
    let args = cli::Args::parse();

    // Initialize logging
    if let Err(error) = stderrlog::new()
        .module(module_path!())
        .verbosity(args.verbose.log_level_filter())
        .init()
    {
        eprintln!("Failed to initialize logging: {error}");
    }

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            error!("{error}");
            ExitCode::FAILURE
        }
    }
}

/*-------------------------------------------------------------------------------------------------
  Read and Output the IP Set
-------------------------------------------------------------------------------------------------*/

fn run(args: &cli::Args) -> Result<()> {
    let data_source = IpsForDataSource::new(cli::build_client(args));
    let mut state = JsonState::new();
    let ip_set = data_source.read(&cli::build_config(args), &mut state)?;

    cli::log::ip_set(&ip_set);

    match args.output {
        OutputFormat::Table => cli::output::prefix_table(&ip_set)?,
        OutputFormat::Cidr => cli::output::prefixes_in_cidr_format(&ip_set),
        OutputFormat::Netmask => cli::output::prefixes_in_netmask_format(&ip_set)?,
        OutputFormat::Json => cli::output::json(&ip_set)?,
        OutputFormat::State => cli::output::state(&state)?,
    }

    if let Some(csv_file) = &args.csv_file {
        cli::csv::save(&ip_set, csv_file)?;
    }

    Ok(())
}
