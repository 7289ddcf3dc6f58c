//! `.env` loading. Kept in its own test binary because dotenvy writes to the
//! real process environment.

use figment::Jail;
use revq_config::RevqConfig;

#[test]
fn dotenv_file_feeds_the_chain_but_process_env_wins() {
    Jail::expect_with(|jail| {
        let dir = jail.directory().join("xdg");
        jail.set_env("XDG_CONFIG_HOME", dir.display());
        jail.set_env("REVQ_GITLAB__HOST", "gitlab.process.example");
        jail.create_file(
            ".env",
            "REVQ_GITLAB__HOST=gitlab.dotenv.example\nREVQ_GITLAB__USER_NAME=dotenv-user\n",
        )?;

        let config = RevqConfig::load_with_dotenv().expect("config loads");
        assert_eq!(config.gitlab.host, "gitlab.process.example");
        assert_eq!(config.gitlab.user_name, "dotenv-user");
        Ok(())
    });
}
