//! CLI command definitions

use clap::{Parser, Subcommand, ValueEnum};
use echoq_domain::Filter;
use std::path::PathBuf;

/// Output format for one-shot commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human readable question cards
    Plain,
    /// JSON, as delivered by the backend
    Json,
}

impl From<OutputFormat> for echoq_domain::OutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Plain => Self::Plain,
            OutputFormat::Json => Self::Json,
        }
    }
}

/// Question subset selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FilterArg {
    Answered,
    Unanswered,
}

impl From<FilterArg> for Filter {
    fn from(arg: FilterArg) -> Self {
        match arg {
            FilterArg::Answered => Filter::Answered,
            FilterArg::Unanswered => Filter::Unanswered,
        }
    }
}

/// CLI arguments for echoq
#[derive(Parser, Debug)]
#[command(name = "echoq")]
#[command(author, version, about = "Moderate the anonymous questions posted to your profile")]
#[command(long_about = r#"
echoq lists, searches and answers the anonymous questions posted to your
profile. Without a subcommand it opens the interactive feed.

Configuration files are loaded from (in priority order):
1. ECHOQ_* environment variables (e.g. ECHOQ_API__BASE_URL)
2. --config <path>     Explicit config file
3. ./echoq.toml        Project-level config
4. ~/.config/echoq/config.toml   Global config

Example:
  echoq token set 3f9c...
  echoq list --filter answered
  echoq search "favourite book"
  echoq answer 42 "Dune, every time" --show
"#)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Output format (defaults to the [output] config section)
    #[arg(short, long, value_enum, global = true)]
    pub output: Option<OutputFormat>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long, global = true)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// List questions
    List {
        #[arg(short, long, value_enum, default_value = "unanswered")]
        filter: FilterArg,
    },
    /// Search questions by text
    Search {
        term: String,
        #[arg(short, long, value_enum, default_value = "unanswered")]
        filter: FilterArg,
    },
    /// Answer a question (replaces an existing answer)
    Answer {
        id: i64,
        response: String,
        /// Make the answer publicly visible
        #[arg(long)]
        show: bool,
    },
    /// Set whether a response is publicly visible
    Visibility {
        id: i64,
        #[arg(action = clap::ArgAction::Set, value_parser = clap::builder::BoolishValueParser::new())]
        show: bool,
    },
    /// Delete a question and its response
    Delete { id: i64 },
    /// Manage the stored session token
    Token {
        #[command(subcommand)]
        action: TokenCommand,
    },
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum TokenCommand {
    /// Store a session token
    Set { token: String },
    /// Print the stored token (masked unless --reveal)
    Show {
        #[arg(long)]
        reveal: bool,
    },
    /// Remove the stored token
    Clear,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_subcommand_opens_feed() {
        let cli = Cli::try_parse_from(["echoq"]).unwrap();
        assert!(cli.command.is_none());
        assert!(cli.output.is_none());
    }

    #[test]
    fn test_list_defaults_to_unanswered() {
        let cli = Cli::try_parse_from(["echoq", "list"]).unwrap();
        assert_eq!(
            cli.command,
            Some(Command::List {
                filter: FilterArg::Unanswered
            })
        );
    }

    #[test]
    fn test_search_with_filter_and_global_flags() {
        let cli =
            Cli::try_parse_from(["echoq", "search", "cats", "-f", "answered", "-o", "json", "-vv"])
                .unwrap();
        assert_eq!(
            cli.command,
            Some(Command::Search {
                term: "cats".to_string(),
                filter: FilterArg::Answered,
            })
        );
        assert_eq!(cli.output, Some(OutputFormat::Json));
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn test_visibility_parses_boolish() {
        let cli = Cli::try_parse_from(["echoq", "visibility", "42", "true"]).unwrap();
        assert_eq!(cli.command, Some(Command::Visibility { id: 42, show: true }));

        let cli = Cli::try_parse_from(["echoq", "visibility", "42", "off"]).unwrap();
        assert_eq!(cli.command, Some(Command::Visibility { id: 42, show: false }));
    }

    #[test]
    fn test_answer_requires_text() {
        assert!(Cli::try_parse_from(["echoq", "answer", "7"]).is_err());
        let cli = Cli::try_parse_from(["echoq", "answer", "7", "hi", "--show"]).unwrap();
        assert_eq!(
            cli.command,
            Some(Command::Answer {
                id: 7,
                response: "hi".to_string(),
                show: true,
            })
        );
    }

    #[test]
    fn test_token_subcommands() {
        let cli = Cli::try_parse_from(["echoq", "token", "show", "--reveal"]).unwrap();
        assert_eq!(
            cli.command,
            Some(Command::Token {
                action: TokenCommand::Show { reveal: true }
            })
        );
    }

    #[test]
    fn test_filter_arg_converts() {
        assert_eq!(Filter::from(FilterArg::Answered), Filter::Answered);
        assert_eq!(
            echoq_domain::OutputFormat::from(OutputFormat::Json),
            echoq_domain::OutputFormat::Json
        );
    }
}
