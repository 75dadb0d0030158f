use anyhow::Result;

use super::super::args::{ResolveCommand, TranslateCommand};
use super::{CommandResult, CommandSummary, MessageSummary, context::CommandContext};
use crate::core::placeholder::placeholder_names;

pub fn resolve(cmd: ResolveCommand) -> Result<CommandResult> {
    let ctx = CommandContext::new(&cmd.common)?;
    let message = ctx.translator.resolve(&cmd.locale, &cmd.key);

    Ok(CommandSummary::Message(MessageSummary {
        fallback_locale: ctx.translator.fallback_locale().to_string(),
        key: cmd.key,
        locale: cmd.locale,
        message,
        unreplaced: Vec::new(),
    })
    .into())
}

pub fn translate(cmd: TranslateCommand) -> Result<CommandResult> {
    let ctx = CommandContext::new(&cmd.common)?;
    let placeholders = cmd
        .params
        .iter()
        .map(|(name, value)| (name.as_str(), value.as_str()));
    let message = ctx.translator.translate(&cmd.locale, &cmd.key, placeholders);
    let template = ctx.translator.resolve(&cmd.locale, &cmd.key);
    let unreplaced = unreplaced_placeholders(&template, &cmd.params);

    Ok(CommandSummary::Message(MessageSummary {
        fallback_locale: ctx.translator.fallback_locale().to_string(),
        key: cmd.key,
        locale: cmd.locale,
        message,
        unreplaced,
    })
    .into())
}

/// Placeholders of `template` that no parameter supplies a value for.
///
/// Taken from the template, so braces inside supplied values are not reported.
fn unreplaced_placeholders(template: &str, params: &[(String, String)]) -> Vec<String> {
    placeholder_names(template)
        .into_iter()
        .filter(|name| !params.iter().any(|(param, _)| param == name))
        .collect()
}
