//! The transcript — an append-only, ordered store of debate turns.
//!
//! Turn order is the order turns were produced: iteration-major, then
//! agent index within the iteration. Records are never mutated after
//! creation; the store is cleared only by an explicit session reset.

use serde::{Deserialize, Serialize};

use crate::config::Stance;

/// Kind tag carried by every turn record.
///
/// Single variant today; the tag is kept in the serialized form (as
/// `"type": "individual"`) so the JSON log matches the original app's
/// transcript dumps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TurnKind {
    Individual,
}

/// One agent's single response within one iteration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnRecord {
    /// Display label, e.g. "Agent 1 (PRO, Economics)".
    pub agent: String,
    /// The argument text (or an error placeholder for failed turns).
    pub argument: String,
    #[serde(rename = "type")]
    pub kind: TurnKind,
}

impl TurnRecord {
    pub fn individual(agent: impl Into<String>, argument: impl Into<String>) -> Self {
        Self {
            agent: agent.into(),
            argument: argument.into(),
            kind: TurnKind::Individual,
        }
    }
}

/// Build the display label for an agent from its 0-based position.
///
/// Labels are 1-based: `agent_label(0, Stance::Pro, "Economics")`
/// yields `"Agent 1 (PRO, Economics)"`.
pub fn agent_label(index: usize, stance: Stance, expertise: &str) -> String {
    format!("Agent {} ({}, {})", index + 1, stance.as_upper(), expertise)
}

/// Ordered, append-only sequence of [`TurnRecord`]s for one session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Transcript {
    turns: Vec<TurnRecord>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a turn. Position in the store is the only identity a
    /// record has.
    pub fn append(&mut self, turn: TurnRecord) {
        self.turns.push(turn);
    }

    /// Clear all turns. Only the explicit reset action calls this.
    pub fn clear(&mut self) {
        self.turns.clear();
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    pub fn turns(&self) -> &[TurnRecord] {
        &self.turns
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TurnRecord> {
        self.turns.iter()
    }

    /// Pretty-printed JSON dump of all turns — embedded into prompts
    /// and rendered by the shell's "show log" action.
    pub fn to_pretty_json(&self) -> String {
        // Vec<TurnRecord> serialization is infallible.
        serde_json::to_string_pretty(&self.turns).unwrap_or_else(|_| "[]".to_string())
    }
}

impl<'a> IntoIterator for &'a Transcript {
    type Item = &'a TurnRecord;
    type IntoIter = std::slice::Iter<'a, TurnRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.turns.iter()
    }
}
