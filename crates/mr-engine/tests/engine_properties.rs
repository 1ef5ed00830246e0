//! Property tests for the engine patch/apply pipeline.
use mr_core::{Catalog, Item, Player};
use mr_engine::{ApplyContext, GameState, NarrativeResponse, NoArtist, Patch, SaveRecord, apply};
use mr_mechanics::{CharacterDraft, EquipOutcome, create_character, equip};
use proptest::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;

fn opening(class: &str) -> GameState {
    let draft = CharacterDraft {
        name: "Prop".to_string(),
        race: "Elf".to_string(),
        class: class.to_string(),
        background: "Sage".to_string(),
        ..CharacterDraft::default()
    };
    GameState::from_opening(create_character(draft, &Catalog::standard()).expect("opening"))
}

fn step(state: &GameState, patch: Patch, seed: u64) -> GameState {
    let catalog = Catalog::standard();
    let mut rng = StdRng::seed_from_u64(seed);
    let mut artist = NoArtist;
    let mut ctx = ApplyContext {
        catalog: &catalog,
        rng: &mut rng,
        artist: &mut artist,
    };
    let response = NarrativeResponse {
        narration: "...".to_string(),
        choices: None,
        patch,
    };
    apply(state, &response, &mut ctx)
}

fn equippable() -> Vec<Item> {
    Catalog::standard()
        .items()
        .iter()
        .filter(|i| i.slot.is_some())
        .cloned()
        .collect()
}

fn item_count(p: &Player) -> usize {
    p.inventory.len() + p.equipment.len()
}

#[test]
fn xp_at_threshold_levels_once() {
    let mut s = opening("Wizard");
    s.player.xp = 200;
    let n = step(
        &s,
        Patch {
            xp_delta: Some(50),
            ..Patch::default()
        },
        3,
    );
    assert_eq!(n.player.level, 2);
    assert_eq!(n.player.xp, 0);
    assert!(n.player.health.is_full());
    assert!(n.player.mana.is_full());
    assert!(n.player.stamina.is_full());
}

#[test]
fn same_seed_same_level_up() {
    let mut s = opening("Barbarian");
    s.player.xp = 249;
    let patch = Patch {
        xp_delta: Some(1),
        ..Patch::default()
    };
    let a = step(&s, patch.clone(), 99);
    let b = step(&s, patch, 99);
    assert_eq!(a.player.health.max, b.player.health.max);
}

#[test]
fn hunger_past_grace_exhausts() {
    let mut s = opening("Rogue");
    s.world.hour = 23;
    s.player.hunger_days = 3;
    s.player.inventory.retain(|i| !i.is_ration());
    let n = step(&s, Patch::default(), 1);
    assert_eq!(n.player.hunger_days, 4);
    assert_eq!(n.player.exhaustion, s.player.exhaustion + 1);
}

proptest! {
    #[test]
    fn resources_stay_in_bounds(deltas in prop::collection::vec((-60_i64..60, -60_i64..60), 1..12)) {
        let mut s = opening("Cleric");
        for (hp, mp) in deltas {
            s = step(&s, Patch { hp_delta: Some(hp), mp_delta: Some(mp), ..Patch::default() }, 7);
            prop_assert!(s.player.health.in_bounds());
            prop_assert!(s.player.mana.in_bounds());
            prop_assert!(s.player.health.current >= 0);
            prop_assert!(s.player.mana.current >= 0);
        }
    }

    #[test]
    fn currency_never_overdrawn(start in 0_u64..500, deltas in prop::collection::vec(-400_i64..400, 1..12)) {
        let mut s = opening("Bard");
        s.player.currency = start;
        for delta in deltas {
            let before = s.player.currency;
            s = step(&s, Patch { currency_delta: Some(delta), ..Patch::default() }, 7);
            if delta < 0 && delta.unsigned_abs() > before {
                prop_assert_eq!(s.player.currency, before);
            } else {
                prop_assert_eq!(i128::from(s.player.currency), i128::from(before) + i128::from(delta));
            }
        }
    }

    #[test]
    fn equip_conserves_items(picks in prop::collection::vec(0_usize..64, 1..10)) {
        let pool = equippable();
        let mut s = opening("Fighter");
        s.player.inventory.extend(pool.iter().cloned());
        let total = item_count(&s.player);
        for pick in picks {
            if s.player.inventory.is_empty() {
                break;
            }
            let item = s.player.inventory[pick % s.player.inventory.len()].clone();
            let before = s.player.clone();
            match equip(&mut s.player, &item) {
                EquipOutcome::Equipped { slot } => {
                    let worn = s.player.equipment.get(slot);
                    prop_assert!(worn.is_some_and(|w| w.same_identity(&item)));
                }
                EquipOutcome::Blocked => {
                    prop_assert_eq!(&s.player.inventory, &before.inventory);
                    prop_assert_eq!(&s.player.equipment, &before.equipment);
                }
                EquipOutcome::NotEquippable | EquipOutcome::NotInInventory => {
                    prop_assert_eq!(&s.player, &before);
                }
            }
            prop_assert_eq!(item_count(&s.player), total);
            if s.player.equipment.main_hand_is_two_handed() {
                prop_assert!(!s.player.equipment.is_occupied(mr_core::Slot::OffHand));
            }
        }
    }

    #[test]
    fn save_record_round_trips(hours in 0_i64..200, xp in 0_i64..240, hp in -20_i64..5) {
        let s = step(
            &opening("Paladin"),
            Patch {
                time_delta: Some(hours),
                xp_delta: Some(xp),
                hp_delta: Some(hp),
                add_fact: Some("Crossed the river".to_string()),
                ..Patch::default()
            },
            11,
        );
        let record = SaveRecord::from_state(&s);
        let json = serde_json::to_string(&record).expect("serialize");
        let back: SaveRecord = serde_json::from_str(&json).expect("deserialize");
        prop_assert_eq!(&back, &record);
        prop_assert_eq!(back.into_state(), s);
    }
}
