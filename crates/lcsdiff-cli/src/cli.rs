use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "lcsdiff",
    about = "Insert/delete edit scripts anchored on the longest common subsequence",
    version,
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// TOML configuration file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[arg(long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Hex,
}

#[derive(Subcommand)]
pub enum Command {
    /// Compute the edit script from OLD to NEW
    Diff(DiffArgs),
    /// Apply a JSON edit script to a file
    Apply(ApplyArgs),
    /// Undo a JSON edit script against the new file
    Revert(RevertArgs),
    /// Encode a JSON edit script as a hex update payload
    Encode(EncodeArgs),
    /// Decode a hex update payload (text or json output)
    Decode(DecodeArgs),
}

#[derive(Args)]
pub struct DiffArgs {
    pub old: PathBuf,
    pub new: PathBuf,
    /// Compare whole lines instead of chars
    #[arg(long)]
    pub lines: bool,
    /// Version the payload depends on (hex output)
    #[arg(long, default_value_t = 0)]
    pub dependency: u32,
}

#[derive(Args)]
pub struct ApplyArgs {
    pub base: PathBuf,
    pub script: PathBuf,
}

#[derive(Args)]
pub struct RevertArgs {
    pub new: PathBuf,
    pub script: PathBuf,
}

#[derive(Args)]
pub struct EncodeArgs {
    pub script: PathBuf,
    #[arg(long, default_value_t = 0)]
    pub dependency: u32,
}

#[derive(Args)]
pub struct DecodeArgs {
    pub hex: String,
}
