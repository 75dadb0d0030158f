//! Shared setup for commands that need loaded translations.

use std::{env, path::PathBuf};

use anyhow::{Context, Result};

use super::super::args::CommonArgs;
use crate::{
    config::load_config,
    core::{JsonTranslator, Translator},
};

pub struct CommandContext {
    pub translator: JsonTranslator,
    pub messages_root: PathBuf,
}

impl CommandContext {
    /// Load config from the working directory, apply CLI overrides and
    /// load the messages directory.
    pub fn new(common: &CommonArgs) -> Result<Self> {
        let cwd = env::current_dir().context("Failed to get current directory")?;
        let mut loaded = load_config(&cwd)?;

        if let Some(locale) = &common.fallback_locale {
            loaded.config.fallback_locale = locale.clone();
        }
        loaded.config.validate()?;

        let messages_root = match &common.messages_root {
            Some(root) => cwd.join(root),
            None => loaded.messages_root(),
        };

        let translator = Translator::from_dir(&loaded.config.fallback_locale, &messages_root)
            .with_context(|| {
                format!(
                    "Failed to load translations from '{}'",
                    messages_root.display()
                )
            })?;

        Ok(Self {
            translator,
            messages_root,
        })
    }
}
