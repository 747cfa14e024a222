use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Command line interface for tgmd
#[derive(Parser, Debug)]
#[command(
  author,
  version,
  about = "tgmd: Markdown to Telegram MarkdownV2"
)]
pub struct Cli {
  /// Subcommand to execute (see [`Commands`])
  #[command(subcommand)]
  pub command: Option<Commands>,

  /// Markdown file to convert. Reads standard input when omitted.
  pub input: Option<PathBuf>,

  /// Write the MarkdownV2 text here instead of standard output.
  #[arg(short, long)]
  pub output: Option<PathBuf>,

  /// Path to a TOML configuration file with heading wrappers and bullets.
  #[arg(short = 'c', long = "config-file")]
  pub config_file: Option<PathBuf>,

  /// Enable verbose debug logging
  #[arg(short, long)]
  pub verbose: bool,
}

/// All supported subcommands for the tgmd CLI.
#[derive(Subcommand, Debug)]
pub enum Commands {
  /// Print the default configuration as TOML.
  DefaultConfig,
}

impl Cli {
  /// Parse command line arguments into a [`Cli`] struct.
  #[must_use]
  pub fn parse_args() -> Self {
    Self::parse()
  }
}

#[cfg(test)]
mod tests {
  #![allow(clippy::unwrap_used, reason = "Fine in tests")]
  use clap::CommandFactory;

  use super::*;

  #[test]
  fn cli_definition_is_consistent() {
    Cli::command().debug_assert();
  }

  #[test]
  fn parses_conversion_arguments() {
    let cli = Cli::try_parse_from([
      "tgmd",
      "notes.md",
      "-o",
      "out.txt",
      "-c",
      "tgmd.toml",
      "-v",
    ])
    .unwrap();
    assert!(cli.command.is_none());
    assert_eq!(cli.input, Some(PathBuf::from("notes.md")));
    assert_eq!(cli.output, Some(PathBuf::from("out.txt")));
    assert_eq!(cli.config_file, Some(PathBuf::from("tgmd.toml")));
    assert!(cli.verbose);
  }

  #[test]
  fn parses_default_config_subcommand() {
    let cli = Cli::try_parse_from(["tgmd", "default-config"]).unwrap();
    assert!(matches!(cli.command, Some(Commands::DefaultConfig)));
  }
}
