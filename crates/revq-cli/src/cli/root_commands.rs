use clap::{Args, Subcommand};

/// Top-level commands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Fetch pending to-dos and print them by review priority
    Rank(RankArgs),
    /// Print the effective configuration (token redacted)
    Config,
    /// Print the JSON Schema of one ranked row
    Schema,
}

/// Arguments for `revq rank`.
#[derive(Clone, Debug, Default, Args)]
pub struct RankArgs {
    /// Rank for this username instead of the configured one
    #[arg(short, long)]
    pub user: Option<String>,

    /// Priority file extension, repeatable (replaces the configured list)
    #[arg(short, long = "ext", value_name = "EXT")]
    pub extensions: Vec<String>,

    /// Add one column per scoring signal
    #[arg(long)]
    pub explain: bool,

    /// Maximum concurrent commit/diff fetches
    #[arg(long)]
    pub concurrency: Option<usize>,
}
