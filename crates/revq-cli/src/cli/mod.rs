use clap::Parser;

pub mod global;
pub mod root_commands;

pub use global::{ColorMode, GlobalFlags, OutputFormat};
pub use root_commands::{Commands, RankArgs};

/// Top-level CLI parser for the `revq` binary.
#[derive(Debug, Parser)]
#[command(
    name = "revq",
    version,
    about = "revq - rank pending GitLab to-dos by review priority"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: json, table, raw
    #[arg(short, long, global = true, default_value = "table")]
    pub format: OutputFormat,

    /// Max rows to print
    #[arg(short, long, global = true)]
    pub limit: Option<u32>,

    /// Quiet mode (errors only, no spinner)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Table coloring: auto, always, never
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorMode,
}

impl Cli {
    /// Extract ergonomic global flags struct for command handlers.
    #[must_use]
    pub const fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            format: self.format,
            limit: self.limit,
            quiet: self.quiet,
            verbose: self.verbose,
            color: self.color,
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::{CommandFactory, Parser};
    use pretty_assertions::assert_eq;

    use super::{Cli, ColorMode, Commands, OutputFormat};

    #[test]
    fn clap_command_tree_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn defaults_to_table_and_auto_color() {
        let cli = Cli::try_parse_from(["revq", "rank"]).expect("cli should parse");
        assert_eq!(cli.format, OutputFormat::Table);
        assert_eq!(cli.color, ColorMode::Auto);
        assert_eq!(cli.limit, None);
    }

    #[test]
    fn global_flags_parse_before_subcommand() {
        let cli = Cli::try_parse_from([
            "revq", "--format", "json", "--limit", "10", "--verbose", "rank",
        ])
        .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Json);
        assert_eq!(cli.limit, Some(10));
        assert!(cli.verbose);
        assert!(matches!(cli.command, Commands::Rank(_)));
    }

    #[test]
    fn global_flags_parse_after_subcommand() {
        let cli = Cli::try_parse_from(["revq", "config", "--format", "raw", "--quiet"])
            .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Raw);
        assert!(cli.quiet);
        assert!(matches!(cli.command, Commands::Config));
    }

    #[test]
    fn rank_arguments_parse() {
        let cli = Cli::try_parse_from([
            "revq",
            "rank",
            "--user",
            "hiromu",
            "--ext",
            ".rs",
            "--ext",
            ".toml",
            "--explain",
            "--concurrency",
            "8",
        ])
        .expect("cli should parse");

        let Commands::Rank(args) = cli.command else {
            panic!("expected rank command");
        };
        assert_eq!(args.user.as_deref(), Some("hiromu"));
        assert_eq!(args.extensions, vec![".rs", ".toml"]);
        assert!(args.explain);
        assert_eq!(args.concurrency, Some(8));
    }

    #[test]
    fn output_format_rejects_invalid_value() {
        let parsed = Cli::try_parse_from(["revq", "--format", "xml", "rank"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn color_mode_accepts_all_supported_values() {
        for (value, expected) in [
            ("auto", ColorMode::Auto),
            ("always", ColorMode::Always),
            ("never", ColorMode::Never),
        ] {
            let cli = Cli::try_parse_from(["revq", "--color", value, "schema"])
                .expect("cli should parse");
            assert_eq!(cli.color, expected);
        }
    }

    #[test]
    fn global_flags_extraction_copies_values() {
        let cli = Cli::try_parse_from(["revq", "--limit", "3", "--color", "never", "schema"])
            .expect("cli should parse");
        let flags = cli.global_flags();
        assert_eq!(flags.limit, Some(3));
        assert_eq!(flags.color, ColorMode::Never);
        assert_eq!(flags.format, OutputFormat::Table);
    }
}
