//! Buying and selling against a shop's stock.

use mr_core::{Catalog, Item, Player};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{MechError, MechResult};

/// A shop's transient stock, separate from the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shop {
    /// Shop name.
    pub name: String,
    /// Items for sale.
    pub stock: Vec<Item>,
}

impl Shop {
    /// Open a shop whose stock is resolved from catalog ids.
    ///
    /// Ids that are not in the catalog are dropped.
    pub fn from_ids<S: AsRef<str>>(name: impl Into<String>, ids: &[S], catalog: &Catalog) -> Self {
        let name = name.into();
        let stock = ids
            .iter()
            .filter_map(|id| {
                let id = id.as_ref();
                let item = catalog.item(id);
                if item.is_none() {
                    warn!(shop = %name, id, "dropping unknown shop item");
                }
                item
            })
            .collect();
        Self { name, stock }
    }
}

/// Price paid to the player for an item.
pub fn sale_price(item: &Item) -> u64 {
    item.value / 2
}

/// Buy the first stock entry matching `item`.
///
/// Fails without changing anything if the item is not in stock or the
/// player cannot afford it.
pub fn buy(player: &mut Player, shop: &mut Shop, item: &Item) -> MechResult<()> {
    let index = shop
        .stock
        .iter()
        .position(|i| i.same_identity(item))
        .ok_or_else(|| MechError::NotInStock(item.name.clone()))?;
    let cost = shop.stock[index].value;
    if player.currency < cost {
        return Err(MechError::Unaffordable {
            item: item.name.clone(),
            cost,
            available: player.currency,
        });
    }
    player.currency -= cost;
    let bought = shop.stock.remove(index);
    debug!(item = %bought.name, cost, "bought");
    player.inventory.push(bought);
    Ok(())
}

/// Sell the inventory item at `index`. Returns the price received.
pub fn sell(player: &mut Player, shop: &mut Shop, index: usize) -> MechResult<u64> {
    if index >= player.inventory.len() {
        return Err(MechError::InventoryIndex {
            index,
            len: player.inventory.len(),
        });
    }
    let item = player.inventory.remove(index);
    let price = sale_price(&item);
    player.currency = player.currency.saturating_add(price);
    debug!(item = %item.name, price, "sold");
    shop.stock.push(item);
    Ok(price)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup(currency: u64) -> (Player, Shop, Catalog) {
        let catalog = Catalog::standard();
        let mut p = Player::new("Aria", "Human", "Fighter", "Soldier");
        p.currency = currency;
        let shop = Shop::from_ids("Smithy", &["sword_iron", "helmet_iron", "sword_iron"], &catalog);
        (p, shop, catalog)
    }

    #[test]
    fn unknown_ids_dropped() {
        let c = Catalog::standard();
        let shop = Shop::from_ids("Stall", &["ration", "dragon_egg"], &c);
        assert_eq!(shop.stock.len(), 1);
    }

    #[test]
    fn buy_moves_item_and_charges() {
        let (mut p, mut shop, c) = setup(1500);
        buy(&mut p, &mut shop, &c.item("sword_iron").unwrap()).unwrap();
        assert_eq!(p.currency, 500);
        assert_eq!(p.inventory.len(), 1);
        assert_eq!(shop.stock.len(), 2);
    }

    #[test]
    fn buy_exact_funds() {
        let (mut p, mut shop, c) = setup(750);
        buy(&mut p, &mut shop, &c.item("helmet_iron").unwrap()).unwrap();
        assert_eq!(p.currency, 0);
    }

    #[test]
    fn unaffordable_is_rejected() {
        let (mut p, mut shop, c) = setup(999);
        let err = buy(&mut p, &mut shop, &c.item("sword_iron").unwrap()).unwrap_err();
        assert!(matches!(err, MechError::Unaffordable { cost: 1000, .. }));
        assert_eq!(p.currency, 999);
        assert!(p.inventory.is_empty());
        assert_eq!(shop.stock.len(), 3);
    }

    #[test]
    fn not_in_stock_is_rejected() {
        let (mut p, mut shop, c) = setup(100_000);
        let err = buy(&mut p, &mut shop, &c.item("armor_plate").unwrap()).unwrap_err();
        assert!(matches!(err, MechError::NotInStock(_)));
        assert_eq!(p.currency, 100_000);
    }

    #[test]
    fn sell_pays_half_rounded_down() {
        let (mut p, mut shop, c) = setup(0);
        p.inventory.push(c.item("pot_heal").unwrap());
        p.inventory.push(Item {
            value: 15,
            ..Item::new("Trinket", "gear")
        });
        assert_eq!(sell(&mut p, &mut shop, 1).unwrap(), 7);
        assert_eq!(p.currency, 7);
        assert_eq!(p.inventory.len(), 1);
        assert_eq!(shop.stock.last().unwrap().name, "Trinket");
    }

    #[test]
    fn shop_survives_json() {
        let (_, shop, _) = setup(0);
        let json = serde_json::to_value(&shop).unwrap();
        assert_eq!(json["name"], "Smithy");
        assert_eq!(json["stock"][1]["type"], "armor");
        let back: Shop = serde_json::from_value(json).unwrap();
        assert_eq!(back, shop);
    }

    #[test]
    fn sell_bad_index() {
        let (mut p, mut shop, _) = setup(0);
        assert!(matches!(
            sell(&mut p, &mut shop, 0),
            Err(MechError::InventoryIndex { index: 0, len: 0 })
        ));
    }
}
