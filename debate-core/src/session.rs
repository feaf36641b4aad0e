//! Session phase machine — explicit states and legal transition
//! guards for one debate session.
//!
//! ```text
//! Idle → Running    on the explicit start trigger
//! Running → Completed  when the loop finishes (per-turn failures included)
//! Completed → Idle  on explicit reset (clears the transcript)
//! ```
//!
//! There is no Running → Idle edge: the design has no mid-run
//! cancellation. The session owns the *committed* transcript; the
//! loop engine accumulates its own and hands it over on completion,
//! replacing whatever a previous run left behind.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::transcript::Transcript;

/// Phase of a debate session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DebatePhase {
    /// No debate in flight; transcript may hold a previous run's log.
    Idle,
    /// The loop is producing turns.
    Running,
    /// The loop finished; the committed transcript is current.
    Completed,
}

impl DebatePhase {
    /// Valid transitions from this phase.
    pub fn valid_transitions(self) -> &'static [DebatePhase] {
        match self {
            Self::Idle => &[Self::Running],
            Self::Running => &[Self::Completed],
            Self::Completed => &[Self::Idle],
        }
    }
}

impl fmt::Display for DebatePhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Idle => write!(f, "idle"),
            Self::Running => write!(f, "running"),
            Self::Completed => write!(f, "completed"),
        }
    }
}

/// A recorded phase transition.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PhaseTransition {
    pub from: DebatePhase,
    pub to: DebatePhase,
    pub timestamp: DateTime<Utc>,
    pub reason: String,
}

/// Error for illegal phase transitions.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid transition {from} → {to}")]
pub struct TransitionError {
    pub from: DebatePhase,
    pub to: DebatePhase,
}

/// Session-scoped state: current phase, committed transcript, and the
/// transition history.
///
/// Passed into and out of the shell explicitly rather than living as
/// ambient global state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionState {
    phase: DebatePhase,
    transcript: Transcript,
    transitions: Vec<PhaseTransition>,
    created_at: DateTime<Utc>,
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionState {
    pub fn new() -> Self {
        Self {
            phase: DebatePhase::Idle,
            transcript: Transcript::new(),
            transitions: Vec::new(),
            created_at: Utc::now(),
        }
    }

    pub fn phase(&self) -> DebatePhase {
        self.phase
    }

    /// The committed transcript (previous run's log until a new run
    /// completes).
    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    pub fn transitions(&self) -> &[PhaseTransition] {
        &self.transitions
    }

    fn transition(&mut self, to: DebatePhase, reason: &str) -> Result<(), TransitionError> {
        if !self.phase.valid_transitions().contains(&to) {
            return Err(TransitionError {
                from: self.phase,
                to,
            });
        }
        self.transitions.push(PhaseTransition {
            from: self.phase,
            to,
            timestamp: Utc::now(),
            reason: reason.to_string(),
        });
        self.phase = to;
        Ok(())
    }

    /// Explicit start trigger (Idle → Running). The previous
    /// transcript stays visible until the new run completes.
    pub fn start(&mut self) -> Result<(), TransitionError> {
        self.transition(DebatePhase::Running, "debate started")
    }

    /// Loop finished (Running → Completed). The freshly produced
    /// transcript replaces the committed one wholesale — no carryover.
    pub fn complete(&mut self, transcript: Transcript) -> Result<(), TransitionError> {
        self.transition(DebatePhase::Completed, "debate concluded")?;
        self.transcript = transcript;
        Ok(())
    }

    /// Explicit reset (Completed → Idle). Clears the transcript.
    pub fn reset(&mut self) -> Result<(), TransitionError> {
        self.transition(DebatePhase::Idle, "session cleared")?;
        self.transcript.clear();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transcript::TurnRecord;

    fn one_turn_transcript() -> Transcript {
        let mut t = Transcript::new();
        t.append(TurnRecord::individual("Agent 1 (PRO, X)", "arg"));
        t
    }

    #[test]
    fn test_full_cycle() {
        let mut session = SessionState::new();
        assert_eq!(session.phase(), DebatePhase::Idle);

        session.start().unwrap();
        assert_eq!(session.phase(), DebatePhase::Running);

        session.complete(one_turn_transcript()).unwrap();
        assert_eq!(session.phase(), DebatePhase::Completed);
        assert_eq!(session.transcript().len(), 1);

        session.reset().unwrap();
        assert_eq!(session.phase(), DebatePhase::Idle);
        assert!(session.transcript().is_empty());
    }

    #[test]
    fn test_completion_replaces_previous_transcript() {
        let mut session = SessionState::new();
        session.start().unwrap();
        session.complete(one_turn_transcript()).unwrap();
        session.reset().unwrap();

        // Second run commits only its own turns.
        session.start().unwrap();
        let mut second = Transcript::new();
        second.append(TurnRecord::individual("Agent 1 (PRO, X)", "new arg 1"));
        second.append(TurnRecord::individual("Agent 2 (CON, Y)", "new arg 2"));
        session.complete(second).unwrap();

        assert_eq!(session.transcript().len(), 2);
        assert_eq!(session.transcript().turns()[0].argument, "new arg 1");
    }

    #[test]
    fn test_no_start_while_running() {
        let mut session = SessionState::new();
        session.start().unwrap();
        let err = session.start().unwrap_err();
        assert_eq!(err.from, DebatePhase::Running);
        assert_eq!(err.to, DebatePhase::Running);
    }

    #[test]
    fn test_no_reset_mid_run() {
        let mut session = SessionState::new();
        session.start().unwrap();
        // No Running → Idle edge: cancellation does not exist.
        assert!(session.reset().is_err());
    }

    #[test]
    fn test_no_complete_from_idle() {
        let mut session = SessionState::new();
        assert!(session.complete(Transcript::new()).is_err());
    }

    #[test]
    fn test_transition_history() {
        let mut session = SessionState::new();
        session.start().unwrap();
        session.complete(Transcript::new()).unwrap();
        session.reset().unwrap();

        let transitions = session.transitions();
        assert_eq!(transitions.len(), 3);
        assert_eq!(transitions[0].from, DebatePhase::Idle);
        assert_eq!(transitions[0].to, DebatePhase::Running);
        assert_eq!(transitions[2].to, DebatePhase::Idle);
    }

    #[test]
    fn test_phase_display() {
        assert_eq!(DebatePhase::Idle.to_string(), "idle");
        assert_eq!(DebatePhase::Running.to_string(), "running");
        assert_eq!(DebatePhase::Completed.to_string(), "completed");
    }
}
