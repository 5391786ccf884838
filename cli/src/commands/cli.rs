use std::path::PathBuf;

use chartops_core::api::{ChartStatus, StatusError};
use clap::{Args as ClapArgs, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "chartops",
    version,
    about = "Generate, track and validate political-finance charts"
)]
pub struct Args {
    /// Configuration file (defaults: ~/.chartops/config.toml, then ./chartops.toml).
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run every configured chart-generation script and report the outcome.
    Generate(GenerateArgs),
    /// Show or update per-category chart status files.
    Status(StatusArgs),
    /// Check generated chart files for required markers.
    Validate,
}

#[derive(ClapArgs, Debug, Clone, Default)]
pub struct GenerateArgs {
    /// Print each job's command line instead of running it.
    #[arg(long)]
    pub dry_run: bool,
}

#[derive(ClapArgs, Debug, Clone, Default)]
pub struct StatusArgs {
    /// Show current status of all chart categories.
    #[arg(long)]
    pub show: bool,

    /// Chart file path.
    #[arg(long)]
    pub chart: Option<PathBuf>,

    /// New status (production, review, development, planned).
    #[arg(long, value_parser = parse_status)]
    pub status: Option<ChartStatus>,
}

fn parse_status(s: &str) -> Result<ChartStatus, String> {
    s.parse().map_err(|e: StatusError| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_status_update() {
        let args = Args::try_parse_from([
            "chartops",
            "status",
            "--chart",
            "charts/sankey/unified_flow.html",
            "--status",
            "review",
        ])
        .unwrap();

        match args.command {
            Commands::Status(s) => {
                assert!(!s.show);
                assert_eq!(s.status, Some(ChartStatus::Review));
                assert_eq!(
                    s.chart,
                    Some(PathBuf::from("charts/sankey/unified_flow.html"))
                );
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn rejects_unknown_status_value() {
        let err = Args::try_parse_from(["chartops", "status", "--chart", "a.html", "--status", "done"])
            .unwrap_err();
        assert!(err.to_string().contains("Invalid status 'done'"));
    }

    #[test]
    fn global_config_flag_after_subcommand() {
        let args = Args::try_parse_from(["chartops", "validate", "--config", "ops.toml"]).unwrap();
        assert!(matches!(args.command, Commands::Validate));
        assert_eq!(args.config, Some(PathBuf::from("ops.toml")));
    }

    #[test]
    fn generate_accepts_dry_run() {
        let args = Args::try_parse_from(["chartops", "generate", "--dry-run"]).unwrap();
        assert!(matches!(
            args.command,
            Commands::Generate(GenerateArgs { dry_run: true })
        ));
    }

    #[test]
    fn bare_status_parses_for_usage_output() {
        let args = Args::try_parse_from(["chartops", "status"]).unwrap();
        assert!(matches!(
            args.command,
            Commands::Status(StatusArgs {
                show: false,
                chart: None,
                status: None
            })
        ));
    }
}
