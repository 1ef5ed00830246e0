pub mod gear;
pub mod new;
pub mod shop;
pub mod show;
pub mod slots;
pub mod turn;

use colored::Colorize;
use mr_core::{Choice, LogEntry, LogKind};
use mr_engine::{EngineConfig, FileStore, Session};

/// Open the save directory.
fn open_store(config: &EngineConfig) -> Result<FileStore, String> {
    FileStore::new(&config.save_dir)
        .map_err(|e| format!("cannot open save directory {}: {e}", config.save_dir.display()))
}

/// Resume the game saved in `slot`.
fn resume(config: &EngineConfig, slot: &str) -> Result<Session, String> {
    let store = open_store(config)?;
    Session::resume(slot, config, Box::new(store)).map_err(|e| e.to_string())
}

/// Print log entries, styled by kind.
fn print_entries(entries: &[LogEntry]) {
    for entry in entries {
        match entry.kind {
            LogKind::Player => println!("  {} {}", ">".bold(), entry.text.bold()),
            LogKind::Combat => println!("  {} {}", "⚔".red(), entry.text.bold()),
            LogKind::Narration => println!("  {}", entry.text),
            LogKind::LevelUp => println!("  {}", entry.text.green().bold()),
            LogKind::Error => println!("  {}", entry.text.yellow()),
        }
    }
}

/// Print the choices on offer.
fn print_choices(choices: &[Choice]) {
    if choices.is_empty() {
        return;
    }
    println!();
    for choice in choices {
        println!("  [{}] {}", choice.id.cyan(), choice.label);
    }
}
