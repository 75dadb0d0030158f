//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `resolve`: Print the message for a key, with locale fallback
//! - `translate`: Like `resolve`, then fill in `{name}` placeholders
//! - `keys`: List the messages of a locale
//! - `init`: Initialize lingo configuration file

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }

    /// Get the verbose flag from the command's common args.
    pub fn verbose(&self) -> bool {
        match &self.command {
            Some(Command::Resolve(cmd)) => cmd.common.verbose,
            Some(Command::Translate(cmd)) => cmd.common.verbose,
            Some(Command::Keys(cmd)) => cmd.common.verbose,
            Some(Command::Init) | None => false,
        }
    }
}

/// Common arguments shared by all commands.
#[derive(Debug, Clone, Args)]
pub struct CommonArgs {
    /// Fallback locale (overrides config file)
    #[arg(long, env = "LINGO_FALLBACK_LOCALE")]
    pub fallback_locale: Option<String>,

    /// Messages directory path (overrides config file)
    #[arg(long, env = "LINGO_MESSAGES_ROOT")]
    pub messages_root: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Args)]
pub struct ResolveCommand {
    /// Message key, e.g. `welcome.title`
    pub key: String,

    /// Requested locale
    #[arg(short, long)]
    pub locale: String,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct TranslateCommand {
    /// Message key, e.g. `welcome.title`
    pub key: String,

    /// Requested locale
    #[arg(short, long)]
    pub locale: String,

    /// Placeholder value as `name=value`
    /// Can be specified multiple times: -p name=John -p count=3
    #[arg(short = 'p', long = "param", value_parser = parse_placeholder)]
    pub params: Vec<(String, String)>,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct KeysCommand {
    /// Locale to list (default: the fallback locale)
    #[arg(short, long)]
    pub locale: Option<String>,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print the message for a key, falling back to the fallback locale
    Resolve(ResolveCommand),
    /// Print the message for a key with its placeholders filled in
    Translate(TranslateCommand),
    /// List every message of a locale
    Keys(KeysCommand),
    /// Initialize a new .lingorc.json configuration file
    Init,
}

fn parse_placeholder(raw: &str) -> Result<(String, String), String> {
    match raw.split_once('=') {
        Some((name, value)) if !name.is_empty() => Ok((name.to_string(), value.to_string())),
        _ => Err(format!("expected `name=value`, got `{raw}`")),
    }
}
