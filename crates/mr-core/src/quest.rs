//! Quest tracking.

use serde::{Deserialize, Serialize};

/// Progress of a quest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuestStatus {
    /// Still being pursued.
    Active,
    /// Finished.
    Completed,
}

impl std::fmt::Display for QuestStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Active => write!(f, "active"),
            Self::Completed => write!(f, "completed"),
        }
    }
}

/// A quest, identified by its title.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quest {
    /// Title; acts as the natural key.
    pub title: String,
    /// What the quest asks for.
    pub description: String,
    /// Current progress.
    pub status: QuestStatus,
}

/// Ordered list of quests. Titles are matched exactly.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuestLog {
    quests: Vec<Quest>,
}

impl QuestLog {
    /// Create an empty quest log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a new active quest. Duplicate titles are not guarded against.
    pub fn add(&mut self, title: impl Into<String>, description: impl Into<String>) {
        self.quests.push(Quest {
            title: title.into(),
            description: description.into(),
            status: QuestStatus::Active,
        });
    }

    /// Set the status of the first quest with this title. Returns true if found.
    pub fn set_status(&mut self, title: &str, status: QuestStatus) -> bool {
        match self.quests.iter_mut().find(|q| q.title == title) {
            Some(q) => {
                q.status = status;
                true
            }
            None => false,
        }
    }

    /// Remove every quest with this title. Returns how many were removed.
    pub fn remove(&mut self, title: &str) -> usize {
        let before = self.quests.len();
        self.quests.retain(|q| q.title != title);
        before - self.quests.len()
    }

    /// Quests still being pursued.
    pub fn active(&self) -> Vec<&Quest> {
        self.quests
            .iter()
            .filter(|q| q.status == QuestStatus::Active)
            .collect()
    }

    /// All quests in insertion order.
    pub fn all(&self) -> &[Quest] {
        &self.quests
    }

    /// Number of quests of any status.
    pub fn len(&self) -> usize {
        self.quests.len()
    }

    /// Whether there are no quests.
    pub fn is_empty(&self) -> bool {
        self.quests.is_empty()
    }
}
