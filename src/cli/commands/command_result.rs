use std::path::PathBuf;

use super::super::exit_status::ExitStatus;

#[derive(Debug)]
pub enum CommandSummary {
    Message(MessageSummary),
    Keys(KeysSummary),
    Init(InitSummary),
}

/// Output of `resolve` and `translate`.
#[derive(Debug)]
pub struct MessageSummary {
    pub key: String,
    pub locale: String,
    pub fallback_locale: String,
    /// Empty when no translation exists.
    pub message: String,
    /// Placeholders still present after substitution (`translate` only).
    pub unreplaced: Vec<String>,
}

#[derive(Debug)]
pub struct KeysSummary {
    pub locale: String,
    pub entries: Vec<(String, String)>,
}

#[derive(Debug)]
pub struct InitSummary {
    pub path: PathBuf,
}

/// Result of running lingo commands
#[derive(Debug)]
pub struct CommandResult {
    pub summary: CommandSummary,
}

impl CommandResult {
    pub fn exit_status(&self) -> ExitStatus {
        match &self.summary {
            CommandSummary::Message(summary) => {
                ExitStatus::from_found(!summary.message.is_empty())
            }
            CommandSummary::Keys(summary) => ExitStatus::from_found(!summary.entries.is_empty()),
            CommandSummary::Init(_) => ExitStatus::Success,
        }
    }
}

impl From<CommandSummary> for CommandResult {
    fn from(summary: CommandSummary) -> Self {
        Self { summary }
    }
}
