//! CLI module - Command-line interface definitions and handlers

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use crate::actions::Action;
use crate::catalog::Catalog;
use crate::core::clock::{Clock, FixedClock, SystemClock};
use crate::core::model::DEFAULT_ICON_DIR;
use crate::core::render::{OutputFormat, RenderConfig};

/// fa-workflow - search Font Awesome icons from the Alfred launcher.
#[derive(Parser, Debug)]
#[command(name = "fa-workflow")]
#[command(
    author,
    version,
    about,
    long_about = r#"fa-workflow looks up Font Awesome 4.2 icons for the Alfred launcher.

The `filter` command is the script filter: it prints one feedback item per icon whose
id contains every keyword. The other commands receive the selected item's argument
("<id>|||<unicode>") and print the string the workflow should paste or open.

Output formats for `filter`:
- xml: Alfred script filter XML (default)
- json: Alfred script filter JSON

Examples:
    fa-workflow filter arr left
    fa-workflow --format json filter bookmark
    fa-workflow class 'apple|||f179'
    fa-workflow char 'apple|||f179'
    fa-workflow url 'apple|||f179'
    fa-workflow info star-half-empty
"#
)]
pub struct Cli {
    /// Feedback format (xml/json).
    #[arg(
        long,
        global = true,
        env = "FA_FORMAT",
        default_value = "xml",
        value_name = "FORMAT",
        long_help = "Select the feedback format printed by `filter`.\n\n\
Supported values:\n\
- xml (default)\n\
- json"
    )]
    pub format: String,

    /// Indent XML/JSON output.
    #[arg(
        long,
        global = true,
        long_help = "Indent XML and JSON output for human readability.\n\n\
The launcher does not need this; it is meant for inspecting results by hand."
    )]
    pub pretty: bool,

    /// Directory holding the fa-<id>.png previews.
    #[arg(
        long,
        global = true,
        env = "FA_ICON_DIR",
        default_value = DEFAULT_ICON_DIR,
        value_name = "DIR",
        long_help = "Directory holding the fa-<id>.png preview images, relative to the\n\
workflow directory unless absolute. Only the path string is emitted; the files are\n\
never read."
    )]
    pub icon_dir: String,

    /// Freeze the uid timestamp (unix seconds).
    #[arg(
        long,
        global = true,
        env = "FA_TIMESTAMP",
        value_name = "SECS",
        long_help = "Use this unix timestamp instead of the current time when building item\n\
uids (\"<timestamp>-<id>\"). Useful for reproducible output."
    )]
    pub timestamp: Option<i64>,

    /// Quiet mode (errors only on stderr).
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug diagnostics on stderr).
    #[arg(
        short,
        long,
        global = true,
        long_help = "Enable debug diagnostics on stderr. RUST_LOG overrides this when set."
    )]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print launcher feedback for icons matching all keywords.
    #[command(
        long_about = r#"Print one feedback item per icon whose id contains every KEYWORD
(case-sensitive substring match). Items keep the Font Awesome listing order.

With no keywords every icon is listed. Keywords that match nothing produce an empty
feedback document, not an error.

Examples:
    fa-workflow filter hdd
    fa-workflow filter "arr left"
"#
    )]
    Filter {
        /// Keywords (whitespace inside an argument also separates keywords).
        #[arg(value_name = "KEYWORD", num_args = 0..)]
        keywords: Vec<String>,
    },

    /// Print the CSS class name of the selected icon.
    Class {
        /// Selected item argument ("<id>|||<unicode>").
        #[arg(value_name = "ARG")]
        arg: String,
    },

    /// Print the glyph of the selected icon (empty if it does not render).
    Char {
        /// Selected item argument ("<id>|||<unicode>").
        #[arg(value_name = "ARG")]
        arg: String,
    },

    /// Print the documentation URL of the selected icon.
    Url {
        /// Selected item argument ("<id>|||<unicode>").
        #[arg(value_name = "ARG")]
        arg: String,
    },

    /// Describe one icon as JSON.
    #[command(
        long_about = "Print the resolved record for an icon id (canonical or alias) as JSON:\n\
id, unicode, the canonical id for aliases, known aliases, class name and URL.\n\n\
Example:\n\
  fa-workflow info star-half-empty\n"
    )]
    Info {
        /// Icon id.
        #[arg(value_name = "ID")]
        id: String,
    },
}

/// Run the CLI with parsed arguments
pub fn run(cli: Cli) -> Result<()> {
    let format: OutputFormat = cli.format.parse().unwrap_or_else(|err: String| {
        tracing::warn!("{}, falling back to xml", err);
        OutputFormat::default()
    });
    let render_config = RenderConfig::with_pretty(format, cli.pretty);

    match cli.command {
        Commands::Filter { keywords } => {
            let catalog = Catalog::load().context("Icon tables are inconsistent")?;
            let clock: Box<dyn Clock> = match cli.timestamp {
                Some(secs) => Box::new(FixedClock(secs)),
                None => Box::new(SystemClock),
            };
            crate::search::run_filter(
                &catalog,
                &keywords,
                &cli.icon_dir,
                clock.as_ref(),
                render_config,
            )
        }

        Commands::Class { arg } => crate::actions::run_action(Action::ClassName, &arg),

        Commands::Char { arg } => crate::actions::run_action(Action::Character, &arg),

        Commands::Url { arg } => crate::actions::run_action(Action::Url, &arg),

        Commands::Info { id } => {
            let catalog = Catalog::load().context("Icon tables are inconsistent")?;
            crate::actions::run_info(&catalog, &id, cli.pretty)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_filter_keywords() {
        let cli = Cli::parse_from(["fa-workflow", "filter", "left", "arr"]);
        match cli.command {
            Commands::Filter { keywords } => assert_eq!(keywords, vec!["left", "arr"]),
            other => panic!("unexpected command: {:?}", other),
        }
        assert_eq!(cli.icon_dir, "./icons");
    }

    #[test]
    fn test_parse_filter_without_keywords() {
        let cli = Cli::parse_from(["fa-workflow", "filter"]);
        assert!(matches!(cli.command, Commands::Filter { keywords } if keywords.is_empty()));
    }

    #[test]
    fn test_parse_global_options_after_subcommand() {
        let cli = Cli::parse_from([
            "fa-workflow",
            "filter",
            "apple",
            "--timestamp",
            "100",
            "--format",
            "json",
        ]);
        assert_eq!(cli.timestamp, Some(100));
        assert_eq!(cli.format, "json");
    }
}
