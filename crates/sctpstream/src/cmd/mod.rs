use clap::{Args, Subcommand};
use std::path::PathBuf;

use crate::exit::CliResult;
use crate::output::OutputFormat;

pub mod demux;
pub mod encode;
pub mod inspect;
pub mod version;

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Build a capture file from JSON lines.
    Encode(EncodeArgs),
    /// List the messages in a capture file.
    Inspect(InspectArgs),
    /// Convert one stream of a capture into a byte stream.
    Demux(DemuxArgs),
    /// Show version information.
    Version(VersionArgs),
}

pub fn run(command: Command, format: OutputFormat) -> CliResult<i32> {
    match command {
        Command::Encode(args) => encode::run(args, format),
        Command::Inspect(args) => inspect::run(args, format),
        Command::Demux(args) => demux::run(args, format),
        Command::Version(args) => version::run(args),
    }
}

#[derive(Args, Debug)]
pub struct EncodeArgs {
    /// JSON lines input, one message per line.
    pub input: PathBuf,
    /// Capture file to write.
    pub output: PathBuf,
}

#[derive(Args, Debug)]
pub struct InspectArgs {
    /// Capture file to read.
    pub capture: PathBuf,
    /// Only list messages on these streams (comma-separated).
    #[arg(long, value_delimiter = ',')]
    pub streams: Option<Vec<u16>>,
}

#[derive(Args, Debug)]
pub struct DemuxArgs {
    /// Capture file to read.
    pub capture: PathBuf,
    /// Payload protocol identifier to extract.
    #[arg(long, short = 'p', env = "SCTPSTREAM_PROTOCOL")]
    pub protocol: u32,
    /// Stream identifier to extract.
    #[arg(long, short = 's', env = "SCTPSTREAM_STREAM")]
    pub stream: u16,
    /// Write the extracted byte stream to this file.
    #[arg(long, short = 'o', value_name = "FILE")]
    pub output: Option<PathBuf>,
    /// Log incomplete messages and keep going instead of stopping.
    #[arg(long)]
    pub continue_on_error: bool,
}

#[derive(Args, Debug)]
pub struct VersionArgs {
    /// Show extended build provenance.
    #[arg(long)]
    pub extended: bool,
}
