//! The sparse state patch returned by the narrator.
//!
//! Every field is optional and an absent field changes nothing. Field names
//! on the wire are camelCase. Numeric fields and flags are decoded leniently
//! (see [`crate::lenient`]) so a sloppy value drops that one effect instead
//! of the whole turn.

use mr_core::{Choice, QuestStatus};
use serde::{Deserialize, Serialize};

use crate::lenient;

/// A quest to add.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestDraft {
    /// Title.
    pub title: String,
    /// Description.
    #[serde(default)]
    pub description: String,
}

/// A quest status change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestStatusUpdate {
    /// Title of the quest to change.
    pub title: String,
    /// Status to set.
    pub new_status: QuestStatus,
}

/// A shop to open.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShopDirective {
    /// Shop name.
    pub name: String,
    /// Catalog ids of the stock.
    #[serde(default, deserialize_with = "lenient::strings")]
    pub inventory: Vec<String>,
}

/// An enemy to fight.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CombatStart {
    /// Enemy name.
    pub name: String,
    /// Starting (and maximum) health.
    #[serde(default, deserialize_with = "lenient::int")]
    pub hp: Option<i64>,
    /// Armor class.
    #[serde(default, deserialize_with = "lenient::int")]
    pub ac: Option<i64>,
    /// Damage descriptor.
    #[serde(default)]
    pub damage: String,
}

/// Narrated effects to apply to the game state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Patch {
    /// Hours to advance; 1 when absent, zero or negative.
    #[serde(default, deserialize_with = "lenient::int", skip_serializing_if = "Option::is_none")]
    pub time_delta: Option<i64>,
    /// Currency change in copper.
    #[serde(default, deserialize_with = "lenient::int", skip_serializing_if = "Option::is_none")]
    pub currency_delta: Option<i64>,
    /// Player health change.
    #[serde(default, deserialize_with = "lenient::int", skip_serializing_if = "Option::is_none")]
    pub hp_delta: Option<i64>,
    /// Enemy health change.
    #[serde(default, deserialize_with = "lenient::int", skip_serializing_if = "Option::is_none")]
    pub enemy_hp_delta: Option<i64>,
    /// Mana change.
    #[serde(default, deserialize_with = "lenient::int", skip_serializing_if = "Option::is_none")]
    pub mp_delta: Option<i64>,
    /// Catalog id of an item to give the player.
    #[serde(default, deserialize_with = "lenient::text", skip_serializing_if = "Option::is_none")]
    pub add_item_id: Option<String>,
    /// Fact to record.
    #[serde(default, deserialize_with = "lenient::text", skip_serializing_if = "Option::is_none")]
    pub add_fact: Option<String>,
    /// Experience gained. Non-positive values are ignored.
    #[serde(default, deserialize_with = "lenient::int", skip_serializing_if = "Option::is_none")]
    pub xp_delta: Option<i64>,
    /// Quest to add.
    #[serde(default, deserialize_with = "lenient::object", skip_serializing_if = "Option::is_none")]
    pub add_quest: Option<QuestDraft>,
    /// Quest status change.
    #[serde(default, deserialize_with = "lenient::object", skip_serializing_if = "Option::is_none")]
    pub update_quest_status: Option<QuestStatusUpdate>,
    /// Title of quests to remove.
    #[serde(default, deserialize_with = "lenient::text", skip_serializing_if = "Option::is_none")]
    pub remove_quest: Option<String>,
    /// Shop to open.
    #[serde(default, deserialize_with = "lenient::object", skip_serializing_if = "Option::is_none")]
    pub shop: Option<ShopDirective>,
    /// Enemy to start fighting.
    #[serde(default, deserialize_with = "lenient::object", skip_serializing_if = "Option::is_none")]
    pub start_combat: Option<CombatStart>,
    /// End the current fight.
    #[serde(default, deserialize_with = "lenient::flag", skip_serializing_if = "Option::is_none")]
    pub end_combat: Option<bool>,
    /// Confiscate the inventory.
    #[serde(default, deserialize_with = "lenient::flag", skip_serializing_if = "Option::is_none")]
    pub clear_inventory: Option<bool>,
    /// Confiscate the equipment.
    #[serde(default, deserialize_with = "lenient::flag", skip_serializing_if = "Option::is_none")]
    pub clear_equipment: Option<bool>,
    /// Give confiscated items back.
    #[serde(default, deserialize_with = "lenient::flag", skip_serializing_if = "Option::is_none")]
    pub restore_inventory: Option<bool>,
    /// Prompt for a new scene image.
    #[serde(default, deserialize_with = "lenient::text", skip_serializing_if = "Option::is_none")]
    pub scene_prompt: Option<String>,
    /// Choices to present, used when the envelope has none.
    #[serde(default, deserialize_with = "lenient::list", skip_serializing_if = "Option::is_none")]
    pub choices: Option<Vec<Choice>>,
}

impl Patch {
    /// Whether a flag is set to true.
    pub fn is_set(flag: Option<bool>) -> bool {
        flag == Some(true)
    }

    /// Whether confiscation was requested.
    pub fn confiscates(&self) -> bool {
        Self::is_set(self.clear_inventory) || Self::is_set(self.clear_equipment)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_is_noop_patch() {
        let p: Patch = serde_json::from_str("{}").unwrap();
        assert_eq!(p, Patch::default());
    }

    #[test]
    fn wire_names_are_camel_case() {
        let p: Patch = serde_json::from_str(
            r#"{"timeDelta":2,"currencyDelta":"-40","enemyHpDelta":-3.7,
                "addItemId":"ration","endCombat":"true","removeQuest":"Wolves"}"#,
        )
        .unwrap();
        assert_eq!(p.time_delta, Some(2));
        assert_eq!(p.currency_delta, Some(-40));
        assert_eq!(p.enemy_hp_delta, Some(-4));
        assert_eq!(p.add_item_id.as_deref(), Some("ration"));
        assert_eq!(p.end_combat, Some(true));
        assert_eq!(p.remove_quest.as_deref(), Some("Wolves"));
    }

    #[test]
    fn malformed_fields_drop_individually() {
        let p: Patch = serde_json::from_str(
            r#"{"hpDelta":"ouch","mpDelta":4,"addQuest":"not an object",
                "startCombat":{"name":"Wolf","hp":"10","ac":12,"damage":"1d4"},
                "unknownField":true}"#,
        )
        .unwrap();
        assert_eq!(p.hp_delta, None);
        assert_eq!(p.mp_delta, Some(4));
        assert_eq!(p.add_quest, None);
        let wolf = p.start_combat.unwrap();
        assert_eq!(wolf.hp, Some(10));
        assert_eq!(wolf.ac, Some(12));
    }

    #[test]
    fn nested_directives() {
        let p: Patch = serde_json::from_str(
            r#"{"updateQuestStatus":{"title":"Wolves","newStatus":"completed"},
                "shop":{"name":"Smithy","inventory":["sword_iron",5]},
                "choices":[{"id":"a","label":"Go","intent":"travel"},{"bad":1}]}"#,
        )
        .unwrap();
        assert_eq!(
            p.update_quest_status.unwrap().new_status,
            QuestStatus::Completed
        );
        assert_eq!(p.shop.unwrap().inventory, ["sword_iron"]);
        assert_eq!(p.choices.unwrap().len(), 1);
    }

    #[test]
    fn either_clear_flag_confiscates() {
        let p = Patch {
            clear_equipment: Some(true),
            ..Patch::default()
        };
        assert!(p.confiscates());
        assert!(!Patch::default().confiscates());
    }
}
