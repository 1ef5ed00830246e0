use colored::Colorize;
use mr_core::Slot;
use mr_engine::EngineConfig;
use mr_mechanics::EquipOutcome;

pub fn equip(config: &EngineConfig, slot: &str, index: usize) -> Result<(), String> {
    let mut session = super::resume(config, slot)?;
    let name = session
        .state()
        .player
        .inventory
        .get(index)
        .map(|i| i.name.clone())
        .unwrap_or_default();

    match session.equip(index).map_err(|e| e.to_string())? {
        EquipOutcome::Equipped { slot } => {
            println!("  Equipped {} ({slot})", name.bold());
            println!("  AC {}", session.state().player.armor_class);
            Ok(())
        }
        EquipOutcome::Blocked => Err(format!(
            "cannot equip {name}: the main-hand weapon needs both hands"
        )),
        EquipOutcome::NotEquippable => Err(format!("{name} cannot be equipped")),
        EquipOutcome::NotInInventory => Err(format!("{name} is not in the inventory")),
    }
}

pub fn unequip(config: &EngineConfig, slot: &str, equipment_slot: &str) -> Result<(), String> {
    let target: Slot = equipment_slot.parse().map_err(|e| format!("{e}"))?;
    let mut session = super::resume(config, slot)?;

    if session.unequip(target).map_err(|e| e.to_string())? {
        println!("  Unequipped {target}");
        println!("  AC {}", session.state().player.armor_class);
    } else {
        println!("  Nothing is equipped in {target}");
    }
    Ok(())
}
