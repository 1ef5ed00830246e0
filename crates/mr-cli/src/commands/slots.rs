use comfy_table::{ContentArrangement, Table};
use mr_engine::{EngineConfig, SaveStore};

pub fn run(config: &EngineConfig) -> Result<(), String> {
    let store = super::open_store(config)?;

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Slot", "Hero", "Level", "Day"]);

    for summary in store.summaries(config.slots) {
        if summary.exists {
            table.add_row(vec![
                summary.slot_id,
                summary.player_name,
                summary.player_level.to_string(),
                summary.world_day.to_string(),
            ]);
        } else {
            table.add_row(vec![
                summary.slot_id,
                "(empty)".to_string(),
                String::new(),
                String::new(),
            ]);
        }
    }

    println!("{table}");
    Ok(())
}

pub fn delete(config: &EngineConfig, slot: &str) -> Result<(), String> {
    if !config.is_valid_slot(slot) {
        return Err(format!("unknown save slot: {slot}"));
    }
    let mut store = super::open_store(config)?;
    if store.delete(slot).map_err(|e| e.to_string())? {
        println!("  Deleted {slot}");
    } else {
        println!("  {slot} is already empty");
    }
    Ok(())
}
