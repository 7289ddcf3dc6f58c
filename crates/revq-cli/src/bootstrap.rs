use anyhow::Context;
use revq_config::RevqConfig;

/// Load `.env`, then the layered configuration.
pub fn load_config() -> anyhow::Result<RevqConfig> {
    let config = RevqConfig::load_with_dotenv().context("failed to load revq configuration")?;
    tracing::debug!(
        host = %config.gitlab.host,
        user = %config.gitlab.user_name,
        configured = config.gitlab.is_configured(),
        "loaded configuration"
    );
    Ok(config)
}
