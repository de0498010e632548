//! Command-line interface argument parsing and definitions
//!
//! This module defines the CLI structure using clap's derive API,
//! providing a type-safe and well-documented command interface.

use clap::{Parser, Subcommand, ValueEnum};
use std::io::IsTerminal;
use std::path::PathBuf;

/// Textmorph CLI - rewrite text into alternate representations
///
/// Applies one strategy from a fixed catalog of encodings, escapes, script
/// substitutions, random insertions and LLM acrostic poems to the input text.
#[derive(Parser, Debug)]
#[command(
    name = "textmorph",
    version,
    author,
    about,
    long_about = None,
    propagate_version = true,
    arg_required_else_help = true
)]
pub struct Cli {
    /// Enable verbose output (can be used multiple times for increased verbosity)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all non-essential output
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(short, long, global = true, env = "TEXTMORPH_CONFIG")]
    pub config: Option<PathBuf>,

    /// Output format for results
    #[arg(short, long, value_enum, global = true, default_value = "human")]
    pub output: OutputFormat,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// The subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Transform input text with a strategy
    Apply(ApplyArgs),

    /// Check whether a strategy accepts the input, without transforming it
    Check(CheckArgs),

    /// List every available strategy
    List(ListArgs),

    /// Manage the configuration file
    Config(ConfigArgs),

    /// Generate shell completions for the specified shell
    Completions(CompletionsArgs),
}

/// Arguments for the apply command
#[derive(Parser, Debug)]
pub struct ApplyArgs {
    /// Strategy name, e.g. base64 or insert-special-characters
    #[arg(value_name = "STRATEGY")]
    pub strategy: String,

    /// Text to transform (read from stdin if omitted)
    #[arg(value_name = "INPUT")]
    pub input: Option<String>,

    /// Seed for the random source, for reproducible output
    #[arg(long)]
    pub seed: Option<u64>,

    /// Also write the result to a file
    #[arg(long = "save-to", value_name = "OUTPUT_FILE")]
    pub save_to: Option<PathBuf>,
}

/// Arguments for the check command
#[derive(Parser, Debug)]
pub struct CheckArgs {
    /// Strategy name
    #[arg(value_name = "STRATEGY")]
    pub strategy: String,

    /// Text to check (read from stdin if omitted)
    #[arg(value_name = "INPUT")]
    pub input: Option<String>,
}

/// Arguments for the list command
#[derive(Parser, Debug)]
pub struct ListArgs {
    /// Only show strategies of this family
    #[arg(long, value_enum)]
    pub family: Option<FamilyFilter>,
}

/// Arguments for the config command
#[derive(Parser, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub action: ConfigAction,
}

/// Configuration management actions
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Show the effective configuration
    Show(ConfigShowArgs),

    /// Write a configuration file with default values
    Init(ConfigInitArgs),

    /// Show which configuration file is in use and where files are searched
    Path,
}

/// Arguments for config show
#[derive(Parser, Debug)]
pub struct ConfigShowArgs {
    /// Include the API key instead of masking it
    #[arg(long)]
    pub show_secrets: bool,
}

/// Arguments for config init
#[derive(Parser, Debug)]
pub struct ConfigInitArgs {
    /// Where to write the file (defaults to ./.textmorph.yaml)
    #[arg(long, value_name = "FILE")]
    pub path: Option<PathBuf>,

    /// Write to the user config directory instead of the current directory
    #[arg(long, conflicts_with = "path")]
    pub user: bool,

    /// Force overwrite of an existing file
    #[arg(long)]
    pub force: bool,
}

/// Arguments for generating shell completions
#[derive(Parser, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

/// Output format options
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable formatted output
    Human,
    /// JSON output
    Json,
    /// YAML output
    Yaml,
    /// Pretty-printed JSON output
    JsonPretty,
}

/// Strategy families selectable in `list --family`
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum FamilyFilter {
    Numeral,
    Encoding,
    Script,
    Randomized,
    Generative,
}

/// Supported shells for completion generation
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum Shell {
    /// Bash shell
    Bash,
    /// Zsh shell
    Zsh,
    /// Fish shell
    Fish,
    /// PowerShell
    PowerShell,
    /// Elvish shell
    Elvish,
}

impl Cli {
    /// Parse command-line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Get the effective verbosity level (considering quiet flag)
    pub fn verbosity_level(&self) -> u8 {
        if self.quiet {
            0
        } else {
            self.verbose
        }
    }

    /// Check if colored output should be used
    pub fn use_color(&self) -> bool {
        !self.no_color && std::io::stdout().is_terminal()
    }
}

impl From<FamilyFilter> for textmorph_core::TransformFamily {
    fn from(filter: FamilyFilter) -> Self {
        use textmorph_core::TransformFamily;
        match filter {
            FamilyFilter::Numeral => TransformFamily::Numeral,
            FamilyFilter::Encoding => TransformFamily::Encoding,
            FamilyFilter::Script => TransformFamily::Script,
            FamilyFilter::Randomized => TransformFamily::Randomized,
            FamilyFilter::Generative => TransformFamily::Generative,
        }
    }
}

impl Shell {
    /// Convert to clap_complete shell type
    pub fn to_clap_shell(self) -> clap_complete::Shell {
        match self {
            Shell::Bash => clap_complete::Shell::Bash,
            Shell::Zsh => clap_complete::Shell::Zsh,
            Shell::Fish => clap_complete::Shell::Fish,
            Shell::PowerShell => clap_complete::Shell::PowerShell,
            Shell::Elvish => clap_complete::Shell::Elvish,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_verbosity_level() {
        let cli = Cli {
            verbose: 2,
            quiet: false,
            config: None,
            output: OutputFormat::Human,
            no_color: false,
            command: Commands::List(ListArgs { family: None }),
        };
        assert_eq!(cli.verbosity_level(), 2);

        let quiet_cli = Cli {
            verbose: 2,
            quiet: true,
            ..cli
        };
        assert_eq!(quiet_cli.verbosity_level(), 0);
    }

    #[test]
    fn test_apply_arguments() {
        let cli = Cli::parse_from([
            "textmorph", "-o", "json", "apply", "binary", "123", "--seed", "7", "--save-to", "out.json",
        ]);
        assert_eq!(cli.output, OutputFormat::Json);
        match cli.command {
            Commands::Apply(args) => {
                assert_eq!(args.strategy, "binary");
                assert_eq!(args.input.as_deref(), Some("123"));
                assert_eq!(args.seed, Some(7));
                assert_eq!(args.save_to, Some(PathBuf::from("out.json")));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_input_is_optional() {
        let cli = Cli::parse_from(["textmorph", "check", "morse"]);
        match cli.command {
            Commands::Check(args) => assert!(args.input.is_none()),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_config_init_path_conflicts_with_user() {
        let result = Cli::try_parse_from(["textmorph", "config", "init", "--user", "--path", "x.yaml"]);
        assert!(result.is_err());
    }
}
