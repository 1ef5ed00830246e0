//! World clock, facts, the turn log, and presented choices.

use serde::{Deserialize, Serialize};

/// Hours in an in-game day.
pub const HOURS_PER_DAY: u32 = 24;

/// A timestamped entry in the world's event log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorldEvent {
    /// Day the event happened on.
    pub day: u32,
    /// Hour the event happened at.
    pub hour: u32,
    /// What happened.
    pub text: String,
}

/// Shared world state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct World {
    /// Day counter, starting at 1.
    pub day: u32,
    /// Hour of day, `0..24`.
    pub hour: u32,
    /// Weather label.
    pub weather: String,
    /// Narrative facts, append-only.
    pub facts: Vec<String>,
    /// Timestamped engine events.
    #[serde(default)]
    pub event_log: Vec<WorldEvent>,
}

impl World {
    /// A world at the given day and hour with no facts.
    pub fn new(day: u32, hour: u32, weather: impl Into<String>) -> Self {
        Self {
            day,
            hour: hour % HOURS_PER_DAY,
            weather: weather.into(),
            facts: Vec::new(),
            event_log: Vec::new(),
        }
    }

    /// Advance the clock, wrapping the hour. At most one day passes per
    /// call, however large `hours` is. Returns whether the day rolled over.
    pub fn advance(&mut self, hours: u32) -> bool {
        let total = u64::from(self.hour) + u64::from(hours);
        self.hour = u32::try_from(total % u64::from(HOURS_PER_DAY)).unwrap_or(0);
        let rolled = total >= u64::from(HOURS_PER_DAY);
        if rolled {
            self.day = self.day.saturating_add(1);
        }
        rolled
    }

    /// Append a fact verbatim.
    pub fn add_fact(&mut self, fact: impl Into<String>) {
        self.facts.push(fact.into());
    }

    /// Record an event stamped with the current clock.
    pub fn record(&mut self, text: impl Into<String>) {
        self.event_log.push(WorldEvent {
            day: self.day,
            hour: self.hour,
            text: text.into(),
        });
    }
}

impl Default for World {
    fn default() -> Self {
        Self::new(1, 8, "Clear")
    }
}

/// The kind of a log entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogKind {
    /// Player's own words.
    Player,
    /// Narrator text.
    Narration,
    /// A failed turn.
    Error,
    /// A level-up announcement.
    #[serde(rename = "levelup")]
    LevelUp,
    /// Player's words during combat.
    Combat,
}

/// One line of turn history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntry {
    /// Entry kind.
    #[serde(rename = "type")]
    pub kind: LogKind,
    /// Text.
    pub text: String,
}

impl LogEntry {
    /// Build an entry.
    pub fn new(kind: LogKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }
}

/// Category of a presented choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Intent {
    /// Move somewhere.
    Travel,
    /// Fight.
    Combat,
    /// Talk.
    Social,
    /// Trade.
    Buy,
    /// Rest or retry.
    Rest,
    /// Handled locally, never sent to the narrator.
    System,
    /// Any unrecognised intent.
    #[serde(other)]
    Other,
}

/// A selectable option offered to the player.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Choice {
    /// Identifier.
    pub id: String,
    /// Label shown to the player and used as action text.
    pub label: String,
    /// Category.
    pub intent: Intent,
}

impl Choice {
    /// Build a choice.
    pub fn new(id: impl Into<String>, label: impl Into<String>, intent: Intent) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            intent,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advance_within_day() {
        let mut w = World::default();
        assert!(!w.advance(3));
        assert_eq!((w.day, w.hour), (1, 11));
    }

    #[test]
    fn advance_wraps_midnight() {
        let mut w = World::new(4, 23, "Rain");
        assert!(w.advance(1));
        assert_eq!((w.day, w.hour), (5, 0));
    }

    #[test]
    fn long_advance_passes_one_day() {
        let mut w = World::new(1, 20, "Clear");
        assert!(w.advance(52));
        assert_eq!((w.day, w.hour), (2, 0));
    }

    #[test]
    fn record_stamps_clock() {
        let mut w = World::new(2, 6, "Fog");
        w.record("Opened shop");
        assert_eq!(w.event_log[0].day, 2);
        assert_eq!(w.event_log[0].hour, 6);
    }

    #[test]
    fn log_kind_wire_names() {
        let e = LogEntry::new(LogKind::LevelUp, "ding");
        let json = serde_json::to_value(&e).unwrap();
        assert_eq!(json["type"], "levelup");
    }

    #[test]
    fn unknown_intent_is_other() {
        let c: Choice =
            serde_json::from_str(r#"{"id":"x","label":"Dance","intent":"party"}"#).unwrap();
        assert_eq!(c.intent, Intent::Other);
    }
}
