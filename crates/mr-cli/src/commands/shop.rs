use colored::Colorize;
use mr_core::stats::format_currency;
use mr_engine::EngineConfig;

pub fn buy(config: &EngineConfig, slot: &str, index: usize) -> Result<(), String> {
    let mut session = super::resume(config, slot)?;
    let item = session.buy(index).map_err(|e| e.to_string())?;
    println!(
        "  Bought {} for {}",
        item.name.bold(),
        format_currency(item.value)
    );
    println!(
        "  Purse: {}",
        format_currency(session.state().player.currency)
    );
    Ok(())
}

pub fn sell(config: &EngineConfig, slot: &str, index: usize) -> Result<(), String> {
    let mut session = super::resume(config, slot)?;
    let name = session
        .state()
        .player
        .inventory
        .get(index)
        .map(|i| i.name.clone())
        .unwrap_or_default();
    let price = session.sell(index).map_err(|e| e.to_string())?;
    println!("  Sold {} for {}", name.bold(), format_currency(price));
    println!(
        "  Purse: {}",
        format_currency(session.state().player.currency)
    );
    Ok(())
}

pub fn leave(config: &EngineConfig, slot: &str) -> Result<(), String> {
    let mut session = super::resume(config, slot)?;
    if session.close_shop().map_err(|e| e.to_string())? {
        println!("  You leave the shop.");
    } else {
        println!("  No shop is open.");
    }
    Ok(())
}
