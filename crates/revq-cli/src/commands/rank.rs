use anyhow::Context;
use revq_config::RevqConfig;
use revq_gitlab::GitLabClient;
use revq_score::{Scorer, ScoringOptions};

use crate::cli::{GlobalFlags, RankArgs};
use crate::output::render_rows;
use crate::progress::Spinner;
use crate::row::ranked_rows;

/// Handle `revq rank`.
pub async fn handle(
    args: &RankArgs,
    config: &RevqConfig,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let config = apply_overrides(config, args);
    config.validate()?;
    config.require_gitlab().context(
        "set GITLAB_HOST, GITLAB_TOKEN and GITLAB_USER_NAME, or add a [gitlab] section to revq.toml",
    )?;

    let client = GitLabClient::new(&config.gitlab).context("failed to build GitLab client")?;
    let scorer = Scorer::new(scoring_options(&config));
    tracing::debug!(
        base_url = client.base_url(),
        user = %scorer.options().username,
        "ranking pending to-dos"
    );

    let spinner = Spinner::start("Ranking pending to-dos");
    let ranking = match scorer.run(&client).await {
        Ok(ranking) => {
            spinner.succeed();
            ranking
        }
        Err(error) => {
            spinner.fail("ranking failed");
            return Err(error).context("failed to rank pending to-dos");
        }
    };

    let rows = ranked_rows(&ranking, args.explain, flags.limit);
    println!("{}", render_rows(&rows, flags.format, args.explain)?.trim_end());
    Ok(())
}

/// Fold command-line overrides into the loaded configuration.
fn apply_overrides(config: &RevqConfig, args: &RankArgs) -> RevqConfig {
    let mut config = config.clone();
    if let Some(user) = &args.user {
        config.gitlab.user_name.clone_from(user);
    }
    if !args.extensions.is_empty() {
        config.scoring.priority_extensions.clone_from(&args.extensions);
    }
    if let Some(concurrency) = args.concurrency {
        config.scoring.concurrency = concurrency;
    }
    config
}

fn scoring_options(config: &RevqConfig) -> ScoringOptions {
    ScoringOptions {
        username: config.gitlab.user_name.clone(),
        priority_extensions: config.scoring.priority_extensions.clone(),
        urgent_keywords: config.scoring.urgent_keywords.clone(),
        lookback_days: config.scoring.lookback_days,
        concurrency: config.scoring.concurrency,
    }
}
