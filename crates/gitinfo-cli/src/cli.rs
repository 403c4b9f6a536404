use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use serde::{Deserialize, Serialize};

#[derive(Parser)]
#[command(
    name = "gitinfo",
    about = "Normalize CI git references and scrub repository URLs",
    version,
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format; overrides the config file
    #[arg(long, global = true)]
    pub format: Option<OutputFormat>,

    /// Path to a TOML config file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Subcommand)]
pub enum Command {
    /// Print the normalized tag name of a reference
    Tag(RefArgs),
    /// Print the normalized branch name of a reference
    Branch(RefArgs),
    /// Print a URL with its user-info removed
    Scrub(ScrubArgs),
    /// Print the git metadata reported for a CI run
    Describe(DescribeArgs),
}

#[derive(Args)]
pub struct RefArgs {
    pub reference: String,
}

#[derive(Args)]
pub struct ScrubArgs {
    pub url: String,
}

#[derive(Args)]
pub struct DescribeArgs {
    /// Raw branch or tag reference
    #[arg(long = "ref", env = "GIT_BRANCH")]
    pub reference: Option<String>,
    /// Raw repository URL
    #[arg(long, env = "GIT_URL")]
    pub url: Option<String>,
}
