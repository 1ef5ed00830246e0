//! Character creation.

use mr_core::{
    Abilities, Ability, AbilityBonus, Catalog, Choice, Intent, Item, LogEntry, LogKind,
    Personality, Player, Pool, World,
};
use tracing::info;

use crate::error::MechResult;

/// Scores handed out by the standard array, best first.
pub const STANDARD_ARRAY: [i32; 6] = [15, 14, 13, 12, 10, 8];

/// Name of the starting town.
pub const STARTING_TOWN: &str = "Oakhaven";

/// Everything the player picks before the game starts.
#[derive(Debug, Clone, Default)]
pub struct CharacterDraft {
    /// Character name.
    pub name: String,
    /// Race key.
    pub race: String,
    /// Class key.
    pub class: String,
    /// Background key.
    pub background: String,
    /// One-line concept.
    pub concept: String,
    /// Personality notes.
    pub personality: Personality,
    /// Explicit ability scores; [`default_abilities`] is used when absent.
    pub abilities: Option<Abilities>,
}

/// The opening state of a new game.
#[derive(Debug, Clone)]
pub struct Opening {
    /// The new character.
    pub player: Player,
    /// The starting world.
    pub world: World,
    /// The welcome log.
    pub log: Vec<LogEntry>,
    /// The first choices.
    pub choices: Vec<Choice>,
}

/// Standard-array scores for a race and class.
///
/// The class's primary abilities get the highest scores, the rest follow
/// in canonical order, then racial bonuses apply. Unknown race or class
/// yields all 10s.
pub fn default_abilities(race: &str, class: &str, catalog: &Catalog) -> Abilities {
    let (Ok(race), Ok(class)) = (catalog.race(race), catalog.class(class)) else {
        return Abilities::default();
    };

    let mut order: Vec<Ability> = Vec::with_capacity(6);
    for ability in class.primary.iter().chain(Ability::ALL.iter()) {
        if !order.contains(ability) {
            order.push(*ability);
        }
    }

    let mut scores = Abilities::uniform(0);
    for (ability, score) in order.into_iter().zip(STANDARD_ARRAY) {
        *scores.get_mut(ability) = score;
    }
    for bonus in &race.bonuses {
        match *bonus {
            AbilityBonus::All(n) => Ability::ALL
                .iter()
                .for_each(|a| *scores.get_mut(*a) += n),
            AbilityBonus::One(a, n) => *scores.get_mut(a) += n,
        }
    }
    scores
}

fn gear_items(gear: &str, catalog: &Catalog) -> impl Iterator<Item = Item> {
    gear.split(", ")
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(|name| catalog.item_by_name(name).unwrap_or_else(|| Item::ad_hoc_gear(name)))
}

/// Build a level-1 character and the opening world.
pub fn create_character(draft: CharacterDraft, catalog: &Catalog) -> MechResult<Opening> {
    let class = catalog.class(&draft.class)?;
    let background = catalog.background(&draft.background)?;

    let abilities = draft
        .abilities
        .unwrap_or_else(|| default_abilities(&draft.race, &draft.class, catalog));

    let mut player = Player::new(&draft.name, &draft.race, &draft.class, &draft.background);
    player.concept = draft.concept;
    player.personality = draft.personality;
    player.abilities = abilities;

    let hp = i32::try_from(class.hit_die)
        .unwrap_or(i32::MAX)
        .saturating_add(player.modifier(Ability::Con));
    player.health = Pool::new(hp);
    player.mana = Pool::new(class.mana);
    player.stamina = Pool::new(class.stamina);

    player.proficiencies.saving_throws = class.saving_throws.clone();
    for skill in class.skills.iter().chain(&background.skills) {
        if !player.proficiencies.skills.contains(skill) {
            player.proficiencies.skills.push(skill.clone());
        }
    }

    player
        .inventory
        .extend(["ration", "waterskin"].iter().filter_map(|id| catalog.item(id)));
    player.inventory.extend(gear_items(&class.gear, catalog));
    player.inventory.extend(gear_items(&background.gear, catalog));
    player.spells = class
        .spells
        .iter()
        .filter_map(|id| catalog.spell(id).cloned())
        .collect();
    player.recompute_armor_class();

    let mut world = World::new(1, 8, "Clear");
    world.add_fact(format!("Arrived at {STARTING_TOWN}"));

    info!(name = %player.name, class = %player.class, "character created");
    let log = vec![LogEntry::new(
        LogKind::Narration,
        format!(
            "Welcome, {}. You stand at the gates of {STARTING_TOWN}.",
            player.name
        ),
    )];
    let choices = vec![Choice::new("enter", "Enter Town", Intent::Travel)];

    Ok(Opening {
        player,
        world,
        log,
        choices,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MechError;
    use mr_core::CoreError;

    fn draft(race: &str, class: &str, background: &str) -> CharacterDraft {
        CharacterDraft {
            name: "Aria".to_string(),
            race: race.to_string(),
            class: class.to_string(),
            background: background.to_string(),
            ..CharacterDraft::default()
        }
    }

    #[test]
    fn standard_array_follows_primaries() {
        let c = Catalog::standard();
        let a = default_abilities("Elf", "Rogue", &c);
        assert_eq!(a.dexterity, 15);
        assert_eq!(a.charisma, 14);
        assert_eq!(a.strength, 13);
        assert_eq!(a.constitution, 12);
        assert_eq!(a.intelligence, 10);
        assert_eq!(a.wisdom, 8);
    }

    #[test]
    fn human_bonus_applies_everywhere() {
        let c = Catalog::standard();
        let a = default_abilities("Human", "Fighter", &c);
        assert_eq!(a.strength, 16);
        assert_eq!(a.constitution, 15);
        assert_eq!(a.dexterity, 14);
        assert_eq!(a.charisma, 9);
    }

    #[test]
    fn unknown_race_gives_tens() {
        let c = Catalog::standard();
        assert_eq!(default_abilities("Slime", "Fighter", &c), Abilities::default());
    }

    #[test]
    fn fighter_opening() {
        let c = Catalog::standard();
        let o = create_character(draft("Human", "Fighter", "Soldier"), &c).unwrap();
        let p = &o.player;
        // d10 + con 15 modifier
        assert_eq!(p.health.max, 12);
        assert!(p.health.is_full());
        assert_eq!(p.stamina.max, 15);
        let names: Vec<_> = p.inventory.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(
            names,
            [
                "Ration (Day)",
                "Waterskin (Full)",
                "Chain Mail",
                "Iron Longsword",
                "Wooden Shield",
                "Insignia of Rank",
                "Trophy",
            ]
        );
        let trophy = &p.inventory[6];
        assert!(trophy.id.is_none());
        assert_eq!(trophy.kind, "gear");
        // dex 14 unarmored
        assert_eq!(p.armor_class, 12);
        assert!(p.spells.is_empty());
        assert_eq!(p.proficiencies.skills, ["Acrobatics", "Athletics", "Intimidation"]);
    }

    #[test]
    fn opening_world_and_log() {
        let c = Catalog::standard();
        let o = create_character(draft("Elf", "Wizard", "Sage"), &c).unwrap();
        assert_eq!((o.world.day, o.world.hour), (1, 8));
        assert_eq!(o.world.weather, "Clear");
        assert_eq!(o.world.facts, ["Arrived at Oakhaven"]);
        assert_eq!(o.log[0].text, "Welcome, Aria. You stand at the gates of Oakhaven.");
        assert_eq!(o.choices[0].id, "enter");
        assert_eq!(o.choices[0].intent, Intent::Travel);
        let spells: Vec<_> = o.player.spells.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(spells, ["firebolt", "shield"]);
    }

    #[test]
    fn explicit_scores_win() {
        let c = Catalog::standard();
        let mut d = draft("Human", "Barbarian", "Folk Hero");
        d.abilities = Some(Abilities::uniform(14));
        let o = create_character(d, &c).unwrap();
        assert_eq!(o.player.abilities, Abilities::uniform(14));
        assert_eq!(o.player.health.max, 14);
    }

    #[test]
    fn unknown_class_is_error() {
        let c = Catalog::standard();
        let err = create_character(draft("Human", "Chef", "Sage"), &c).unwrap_err();
        assert!(matches!(err, MechError::Core(CoreError::UnknownClass(_))));
    }
}
