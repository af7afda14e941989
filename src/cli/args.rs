use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/*-------------------------------------------------------------------------------------------------
  Command Line Interface (CLI) Arguments
-------------------------------------------------------------------------------------------------*/

#[derive(Parser, Debug)]
#[command(author, version, about="Look up a Namikoda IP set.", long_about = None)]
pub struct Args {
    /// Namikoda API key
    #[arg(short = 'k', long)]
    pub apikey: String,

    /// Owner scope of the IP set [default: public]
    #[arg(short = 'o', long)]
    pub owner: Option<String>,

    /// Base URL of the Namikoda API; overrides NAMIKODA_URL
    #[arg(long)]
    pub url: Option<String>,

    /// Output format
    #[arg(short = 'O', long, value_enum, default_value_t = OutputFormat::Table)]
    pub output: OutputFormat,

    /// Save the prefixes to a CSV file
    #[arg(long = "csv")]
    pub csv_file: Option<PathBuf>,

    /// Logging verbosity
    #[command(flatten)]
    pub verbose: clap_verbosity_flag::Verbosity,

    /// Id of the IP set
    pub id: String,
}

/*--------------------------------------------------------------------------------------
  Output Format
--------------------------------------------------------------------------------------*/

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    /// Table of prefixes with a summary
    Table,
    /// List of (RFC4632) CIDR-format prefixes
    Cidr,
    /// List of IP networks in network mask format (n.n.n.n m.m.m.m)
    Netmask,
    /// The IP set as returned by the service
    Json,
    /// The data-source outputs and identity
    State,
}
