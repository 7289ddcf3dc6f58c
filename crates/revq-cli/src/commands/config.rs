use revq_config::RevqConfig;

use crate::cli::GlobalFlags;
use crate::output::output;

/// Handle `revq config`.
pub fn handle(config: &RevqConfig, flags: &GlobalFlags) -> anyhow::Result<()> {
    if !config.gitlab.is_configured() {
        tracing::warn!(
            missing = ?config.gitlab.missing_fields(),
            "gitlab section is incomplete; `revq rank` will fail"
        );
    }
    output(&config.redacted(), flags.format)
}
