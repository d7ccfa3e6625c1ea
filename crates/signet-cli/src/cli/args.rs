use clap::{Parser, Subcommand};
use std::path::PathBuf;

use signet_format::ArtifactKind;

#[derive(Parser)]
#[command(
    name = "signet",
    version,
    about = "Inspect signify-style secret keys, public keys and detached signatures"
)]
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Decode an artifact and print its fields
    Inspect(InspectArgs),
    /// Print the binary layout of each record type
    Layout(LayoutArgs),
    /// Check that artifacts share one key fingerprint
    #[command(name = "match")]
    Match(MatchArgs),
    Version,
}

#[derive(clap::ValueEnum, Clone, Copy, Debug, Default, PartialEq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(clap::Args, Debug, Clone)]
pub struct DecodeFlags {
    /// Reject algorithm tags other than Ed/BK (also: SIGNET_STRICT=1)
    #[arg(long)]
    pub strict: bool,
}

#[derive(clap::Args, Debug)]
pub struct InspectArgs {
    /// Artifact file (.sec/.key, .pub, .sig)
    pub file: PathBuf,

    /// Record type, when the file extension does not tell
    #[arg(long)]
    pub kind: Option<ArtifactKind>,

    #[command(flatten)]
    pub decode: DecodeFlags,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Also print private key material (ciphertext unless kdf_rounds is 0)
    #[arg(long)]
    pub reveal: bool,
}

#[derive(clap::Args, Debug)]
pub struct LayoutArgs {
    /// Only this record type
    pub kind: Option<ArtifactKind>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

#[derive(clap::Args, Debug)]
pub struct MatchArgs {
    /// Artifact files; the record type comes from each extension
    #[arg(required = true, num_args = 2..)]
    pub files: Vec<PathBuf>,

    #[command(flatten)]
    pub decode: DecodeFlags,

    /// Quiet mode - only exit code, no output
    #[arg(long, short)]
    pub quiet: bool,
}
