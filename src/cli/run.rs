use anyhow::Result;

use super::{
    args::{Arguments, Command},
    commands::{
        CommandResult,
        init::init,
        keys::keys,
        resolve::{resolve, translate},
    },
};

/// Dispatch to the handler of the parsed command.
pub fn run(Arguments { command }: Arguments) -> Result<CommandResult> {
    match command {
        Some(Command::Resolve(cmd)) => resolve(cmd),
        Some(Command::Translate(cmd)) => translate(cmd),
        Some(Command::Keys(cmd)) => keys(cmd),
        Some(Command::Init) => init(),
        None => {
            anyhow::bail!("No command provided. Use --help to see available commands.")
        }
    }
}
