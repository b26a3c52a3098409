//! Command-line argument definitions.

use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand};

use crate::logging::LogFormat;

/// Render course JSON documents into standalone landing pages.
#[derive(Parser, Debug)]
#[command(name = "course-landing", author, version, about)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output.
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Log line format.
    #[arg(long, value_enum, default_value = "human", global = true)]
    pub log_format: LogFormat,

    /// Settings file (defaults to ./course-landing.json).
    #[arg(long, global = true, env = "COURSE_LANDING_CONFIG")]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render a course document to HTML.
    Render(RenderArgs),

    /// Check a course document without rendering it.
    Validate(ValidateArgs),

    /// List the available page designs.
    Templates,
}

#[derive(Args, Debug)]
pub struct RenderArgs {
    /// Course JSON file, or `-` for stdin.
    pub input: PathBuf,

    /// Page design identifier; unknown ids fall back to the default design.
    #[arg(short, long)]
    pub template: Option<String>,

    /// Output file or directory. Without it the page goes to stdout unless
    /// the settings name an output directory.
    #[arg(short, long)]
    pub out: Option<PathBuf>,

    /// Skip the `.provenance.json` sidecar.
    #[arg(long)]
    pub no_provenance: bool,
}

#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Course JSON file, or `-` for stdin.
    pub input: PathBuf,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_render_with_flags() {
        let cli = Cli::try_parse_from([
            "course-landing",
            "-vv",
            "render",
            "course.json",
            "--template",
            "databaseJose",
            "--out",
            "site",
        ])
        .expect("parse");
        assert_eq!(cli.verbose, 2);
        match cli.command {
            Commands::Render(args) => {
                assert_eq!(args.input, PathBuf::from("course.json"));
                assert_eq!(args.template.as_deref(), Some("databaseJose"));
                assert_eq!(args.out, Some(PathBuf::from("site")));
                assert!(!args.no_provenance);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn log_format_accepts_json() {
        let cli = Cli::try_parse_from(["course-landing", "--log-format", "json", "templates"])
            .expect("parse");
        assert_eq!(cli.log_format, LogFormat::Json);
        assert!(matches!(cli.command, Commands::Templates));
    }
}
