use std::path::PathBuf;

use clap::{ArgGroup, Parser, Subcommand};

/// Default number of chunks a single estimate is split into.
pub const DEFAULT_CHUNKS: usize = 8;

/// Birthday-collision probability estimator.
#[derive(Parser)]
#[command(
    name = "birthday",
    version,
    about = "Parallel Monte Carlo estimation of birthday-collision probabilities"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Estimate the collision probability for one room size.
    Estimate(EstimateArgs),
    /// Estimate the probability curve over room sizes 1..=N.
    Curve(CurveArgs),
    /// Generate or check cloud batch configuration documents.
    ClusterConfig(ClusterConfigArgs),
}

/// Arguments for the `estimate` subcommand.
#[derive(clap::Args)]
pub struct EstimateArgs {
    /// Number of people in the room.
    #[arg(short, long, allow_negative_numbers = true)]
    pub room_size: i64,

    /// Number of simulated rooms.
    #[arg(short, long, default_value_t = 100_000, allow_negative_numbers = true)]
    pub trials: i64,

    /// Use a uniform 365-day calendar without February 29.
    #[arg(long)]
    pub no_leap_day: bool,

    /// Master RNG seed (random if omitted).
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Worker threads (defaults to available parallelism; 1 runs sequentially).
    #[arg(short, long)]
    pub workers: Option<usize>,

    /// Number of chunks the trials are split into.
    #[arg(short, long, default_value_t = DEFAULT_CHUNKS)]
    pub chunks: usize,
}

/// Arguments for the `curve` subcommand.
#[derive(clap::Args)]
pub struct CurveArgs {
    /// Path to TOML configuration file (defaults are used if omitted).
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Override the largest room size from config.
    #[arg(short, long)]
    pub max_room_size: Option<i64>,

    /// Override the output path from config (stdout if neither is set).
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Override the output format from config: csv or json.
    #[arg(short, long)]
    pub format: Option<String>,

    /// Override the worker count from config.
    #[arg(short, long)]
    pub workers: Option<usize>,

    /// Override the global RNG seed from config.
    #[arg(short, long)]
    pub seed: Option<u64>,
}

/// Arguments for the `cluster-config` subcommand.
#[derive(clap::Args)]
#[command(group(ArgGroup::new("mode").required(true).args(["dir", "check"])))]
pub struct ClusterConfigArgs {
    /// Directory to write template `credentials.json` and `cluster.json` into.
    #[arg(short, long)]
    pub dir: Option<PathBuf>,

    /// Overwrite existing documents.
    #[arg(long, requires = "dir")]
    pub force: bool,

    /// Validate the documents in an existing directory instead.
    #[arg(long)]
    pub check: Option<PathBuf>,
}
