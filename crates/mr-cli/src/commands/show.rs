use colored::Colorize;
use comfy_table::{ContentArrangement, Table};
use mr_core::Item;
use mr_core::stats::{format_currency, xp_to_next_level};
use mr_engine::EngineConfig;
use mr_mechanics::economy::sale_price;

pub fn run(config: &EngineConfig, slot: &str, log_lines: usize) -> Result<(), String> {
    let session = super::resume(config, slot)?;
    let state = session.state();
    let p = &state.player;
    let w = &state.world;

    println!(
        "  {} [{} {}, {}]  level {}",
        p.name.bold(),
        p.race,
        p.class,
        p.background,
        p.level
    );
    println!(
        "  HP {}  MP {}  SP {}  AC {}  XP {}/{}",
        p.health,
        p.mana,
        p.stamina,
        p.armor_class,
        p.xp,
        xp_to_next_level(p.level)
    );
    println!("  purse:      {}", format_currency(p.currency));
    println!(
        "  day {}, {:02}:00  {}  ({})",
        w.day,
        w.hour,
        w.weather,
        state.view().to_string().dimmed()
    );
    if p.exhaustion > 0 {
        println!("  exhaustion: {}", p.exhaustion.to_string().red());
    }
    println!();

    if let Some(enemy) = state.enemy() {
        println!(
            "  {} {}  HP {}  AC {}  damage {}",
            "Enemy:".red().bold(),
            enemy.name,
            enemy.health,
            enemy.armor_class,
            enemy.damage
        );
        println!();
    }

    if let Some(shop) = state.shop() {
        println!("  {} {}", "Shop:".bold(), shop.name);
        if shop.stock.is_empty() {
            println!("  Sold out!");
        } else {
            let mut table = item_table(&["#", "Item", "Type", "Price"]);
            for (i, item) in shop.stock.iter().enumerate() {
                table.add_row(vec![
                    i.to_string(),
                    item.name.clone(),
                    item.kind.clone(),
                    format_currency(item.value),
                ]);
            }
            println!("{table}");
        }
        println!();
    }

    if !p.equipment.is_empty() {
        println!("  {}", "Equipment".bold());
        for (slot, item) in p.equipment.iter() {
            println!("    {:<9} {}", slot.as_str(), item.name);
        }
        println!();
    }

    println!("  {}", "Inventory".bold());
    if p.inventory.is_empty() {
        println!("    (empty)");
    } else {
        let mut table = item_table(&["#", "Item", "Type", "Slot", "Sells for"]);
        for (i, item) in p.inventory.iter().enumerate() {
            table.add_row(vec![
                i.to_string(),
                item.name.clone(),
                item.kind.clone(),
                slot_label(item),
                format_currency(sale_price(item)),
            ]);
        }
        println!("{table}");
    }

    let active = p.quests.active();
    if !active.is_empty() {
        println!();
        println!("  {}", "Quests".bold());
        for quest in active {
            println!("    {} - {}", quest.title, quest.description.dimmed());
        }
    }

    if log_lines > 0 {
        println!();
        super::print_entries(state.recent_log(log_lines));
    }
    super::print_choices(&state.choices);
    Ok(())
}

fn item_table(header: &[&str]) -> Table {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(header.to_vec());
    table
}

fn slot_label(item: &Item) -> String {
    match item.slot {
        Some(slot) if item.two_handed => format!("{slot} (2h)"),
        Some(slot) => slot.to_string(),
        None => String::new(),
    }
}
