//! CLI argument definitions for the IPFIX IANA generator.

use std::path::PathBuf;

use clap::{ArgGroup, Parser, Subcommand};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "ipfix-iana-gen",
    version,
    about = "Generate C constant definitions for IANA IPFIX Information Elements",
    long_about = "Translate the IANA IPFIX registries into C constant definitions.\n\n\
                  Produces a macro header (ipfix_iana.h) and a struct-table source\n\
                  file (ipfix_iana.c) for the flow collector."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,
}

#[derive(Subcommand)]
pub enum Command {
    /// Compile the two registry CSVs into the C artifacts.
    Generate(GenerateArgs),

    /// List the static primitive-type vocabulary.
    Types,
}

#[derive(Parser)]
#[command(group = ArgGroup::new("source").required(true).args(["ie_file", "update"]))]
pub struct GenerateArgs {
    /// CSV file containing the IANA IPFIX Information Elements registry.
    #[arg(
        short = 'i',
        long = "ie-file",
        value_name = "IE_CSV",
        requires = "type_file",
        conflicts_with = "update"
    )]
    pub ie_file: Option<PathBuf>,

    /// CSV file containing the IANA IPFIX data-type registry.
    #[arg(
        short = 't',
        long = "type-file",
        value_name = "DATA_TYPES_CSV",
        requires = "ie_file",
        conflicts_with = "update"
    )]
    pub type_file: Option<PathBuf>,

    /// Download both registries from the IANA website instead.
    #[arg(short = 'u', long = "update")]
    pub update: bool,

    /// Write ipfix_iana.h and ipfix_iana.c into DIR instead of stdout.
    #[arg(short = 'd', long = "directory", value_name = "DIR")]
    pub directory: Option<PathBuf>,
}
