use colored::Colorize;
use mr_engine::{EngineConfig, Session};
use mr_mechanics::CharacterDraft;

pub fn run(
    config: &EngineConfig,
    slot: &str,
    name: String,
    race: String,
    class: String,
    background: String,
    concept: String,
) -> Result<(), String> {
    let store = super::open_store(config)?;
    let draft = CharacterDraft {
        name,
        race,
        class,
        background,
        concept,
        ..CharacterDraft::default()
    };
    let session = Session::create(slot, draft, config, Box::new(store)).map_err(|e| e.to_string())?;
    let player = &session.state().player;

    println!(
        "  Created {} the {} {} in {slot}",
        player.name.bold(),
        player.race,
        player.class
    );
    println!();
    super::print_entries(&session.state().log);
    super::print_choices(&session.state().choices);
    Ok(())
}
