use revq_config::RevqConfig;

use crate::cli::{Commands, GlobalFlags};

pub mod config;
pub mod rank;
pub mod schema;

/// Dispatch a parsed command that needs configuration.
pub async fn dispatch(
    command: &Commands,
    config: &RevqConfig,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match command {
        Commands::Rank(args) => rank::handle(args, config, flags).await,
        Commands::Config => config::handle(config, flags),
        Commands::Schema => schema::handle(flags),
    }
}
