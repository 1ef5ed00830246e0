//! The six ability scores.

use serde::{Deserialize, Serialize};

/// One of the six fixed ability keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Ability {
    /// Strength.
    Str,
    /// Dexterity.
    Dex,
    /// Constitution.
    Con,
    /// Intelligence.
    Int,
    /// Wisdom.
    Wis,
    /// Charisma.
    Cha,
}

impl Ability {
    /// All abilities in canonical order.
    pub const ALL: [Ability; 6] = [
        Ability::Str,
        Ability::Dex,
        Ability::Con,
        Ability::Int,
        Ability::Wis,
        Ability::Cha,
    ];
}

impl std::fmt::Display for Ability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Str => "str",
            Self::Dex => "dex",
            Self::Con => "con",
            Self::Int => "int",
            Self::Wis => "wis",
            Self::Cha => "cha",
        };
        write!(f, "{s}")
    }
}

/// A full set of ability scores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Abilities {
    /// Strength score.
    #[serde(rename = "str")]
    pub strength: i32,
    /// Dexterity score.
    #[serde(rename = "dex")]
    pub dexterity: i32,
    /// Constitution score.
    #[serde(rename = "con")]
    pub constitution: i32,
    /// Intelligence score.
    #[serde(rename = "int")]
    pub intelligence: i32,
    /// Wisdom score.
    #[serde(rename = "wis")]
    pub wisdom: i32,
    /// Charisma score.
    #[serde(rename = "cha")]
    pub charisma: i32,
}

impl Abilities {
    /// Every score set to the same value.
    pub fn uniform(score: i32) -> Self {
        Self {
            strength: score,
            dexterity: score,
            constitution: score,
            intelligence: score,
            wisdom: score,
            charisma: score,
        }
    }

    /// Read one score.
    pub fn get(&self, ability: Ability) -> i32 {
        match ability {
            Ability::Str => self.strength,
            Ability::Dex => self.dexterity,
            Ability::Con => self.constitution,
            Ability::Int => self.intelligence,
            Ability::Wis => self.wisdom,
            Ability::Cha => self.charisma,
        }
    }

    /// Mutable access to one score.
    pub fn get_mut(&mut self, ability: Ability) -> &mut i32 {
        match ability {
            Ability::Str => &mut self.strength,
            Ability::Dex => &mut self.dexterity,
            Ability::Con => &mut self.constitution,
            Ability::Int => &mut self.intelligence,
            Ability::Wis => &mut self.wisdom,
            Ability::Cha => &mut self.charisma,
        }
    }
}

impl Default for Abilities {
    fn default() -> Self {
        Self::uniform(10)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_all_tens() {
        let a = Abilities::default();
        for ability in Ability::ALL {
            assert_eq!(a.get(ability), 10);
        }
    }

    #[test]
    fn get_mut_writes_through() {
        let mut a = Abilities::default();
        *a.get_mut(Ability::Wis) += 3;
        assert_eq!(a.wisdom, 13);
    }

    #[test]
    fn serializes_with_short_keys() {
        let json = serde_json::to_value(Abilities::uniform(12)).unwrap();
        assert_eq!(json["str"], 12);
        assert_eq!(json["cha"], 12);
    }
}
