use clap::CommandFactory;

use crate::{
    cli::{Cli, Commands},
    clipboard::ClipboardSink,
    config,
    error::Result,
    handler::Handler,
    prompt::Prompt,
    storage::{LoadStatus, Storage},
};

/// Runs the single command named by `cli`.
pub fn run(cli: Cli, prompt: &mut dyn Prompt, clipboard: &mut dyn ClipboardSink) -> Result<()> {
    if cli.command.is_none() && cli.key.is_none() {
        prompt.say(&Cli::command().render_help().to_string());
        return Ok(());
    }

    let storage = Storage::new(config::data_file_path(cli.file)?);
    let (mut handler, status) = Handler::open(storage)?;

    if let LoadStatus::RecoveredEmpty { reason } = &status {
        let path = handler.storage().path().display();
        eprintln!("Warning: {path} could not be read ({reason}). Starting with an empty store.");
        match handler.storage().quarantine() {
            Ok(backup) => eprintln!("The unreadable file was copied to {}.", backup.display()),
            Err(e) => {
                log::warn!("could not back up {path}: {e}");
                eprintln!("The unreadable file could not be backed up: {e}");
            }
        }
    }

    match cli.command {
        Some(Commands::Add) => {
            handler.add(prompt)?;
        }
        Some(Commands::List) => handler.list(prompt),
        Some(Commands::Delete { key: Some(key) }) => {
            handler.delete(&key, prompt)?;
        }
        Some(Commands::Delete { key: None }) => {
            prompt.say("Please specify the key to delete.");
        }
        None => {
            if let Some(key) = cli.key {
                handler.copy(&key, clipboard, prompt)?;
            }
        }
    }

    Ok(())
}
