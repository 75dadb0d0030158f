use anyhow::Result;

use super::super::args::KeysCommand;
use super::{CommandResult, CommandSummary, KeysSummary, context::CommandContext};

pub fn keys(cmd: KeysCommand) -> Result<CommandResult> {
    let ctx = CommandContext::new(&cmd.common)?;
    let locale = cmd
        .locale
        .unwrap_or_else(|| ctx.translator.fallback_locale().to_string());

    let entries: Vec<(String, String)> = ctx
        .translator
        .store()
        .messages(&locale)
        .into_iter()
        .map(|(key, message)| (key.to_string(), message.to_string()))
        .collect();
    tracing::debug!(
        locale = %locale,
        root = %ctx.messages_root.display(),
        count = entries.len(),
        "Listed messages"
    );

    Ok(CommandSummary::Keys(KeysSummary { locale, entries }).into())
}
