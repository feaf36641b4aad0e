//! Debate configuration — stances, agent descriptors, and bounds.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Minimum number of debate participants.
pub const MIN_AGENTS: usize = 2;
/// Maximum number of debate participants.
pub const MAX_AGENTS: usize = 5;
/// Minimum number of debate iterations.
pub const MIN_ITERATIONS: u32 = 1;
/// Maximum number of debate iterations.
pub const MAX_ITERATIONS: u32 = 5;

/// Which side of the topic an agent argues for the whole session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Stance {
    Pro,
    Con,
}

impl Stance {
    /// Uppercase form used in prompts and agent labels ("PRO"/"CON").
    pub fn as_upper(self) -> &'static str {
        match self {
            Self::Pro => "PRO",
            Self::Con => "CON",
        }
    }
}

impl fmt::Display for Stance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pro => write!(f, "pro"),
            Self::Con => write!(f, "con"),
        }
    }
}

impl FromStr for Stance {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "pro" => Ok(Self::Pro),
            "con" => Ok(Self::Con),
            other => Err(ConfigError::UnknownStance(other.to_string())),
        }
    }
}

/// One configured debate participant. Immutable for the session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentDescriptor {
    /// Free-text expertise label, e.g. "Economics".
    pub expertise: String,
    /// Fixed stance for the whole session.
    pub stance: Stance,
}

impl AgentDescriptor {
    pub fn new(expertise: impl Into<String>, stance: Stance) -> Self {
        Self {
            expertise: expertise.into(),
            stance,
        }
    }
}

/// Configuration for one debate invocation. Constructed once per run,
/// never mutated during it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DebateConfig {
    /// The topic under debate.
    pub topic: String,
    /// How many full rounds over all agents to run.
    pub iterations: u32,
    /// Ordered participants; turn order within an iteration follows
    /// this ordering.
    pub agents: Vec<AgentDescriptor>,
}

/// Validation failures for a [`DebateConfig`].
///
/// Validation is the session shell's concern — the loop engine trusts
/// its input and never re-validates.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("debate topic must not be empty")]
    EmptyTopic,
    #[error("agent count {0} out of bounds ({MIN_AGENTS}-{MAX_AGENTS})")]
    AgentCount(usize),
    #[error("iteration count {0} out of bounds ({MIN_ITERATIONS}-{MAX_ITERATIONS})")]
    IterationCount(u32),
    #[error("unknown stance `{0}` (expected `pro` or `con`)")]
    UnknownStance(String),
}

impl DebateConfig {
    pub fn new(topic: impl Into<String>, iterations: u32, agents: Vec<AgentDescriptor>) -> Self {
        Self {
            topic: topic.into(),
            iterations,
            agents,
        }
    }

    /// Check the bounds the original sidebar enforced: non-empty
    /// topic, 2-5 agents, 1-5 iterations.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.topic.trim().is_empty() {
            return Err(ConfigError::EmptyTopic);
        }
        if self.agents.len() < MIN_AGENTS || self.agents.len() > MAX_AGENTS {
            return Err(ConfigError::AgentCount(self.agents.len()));
        }
        if self.iterations < MIN_ITERATIONS || self.iterations > MAX_ITERATIONS {
            return Err(ConfigError::IterationCount(self.iterations));
        }
        Ok(())
    }

    /// Total turns a run of this config produces.
    pub fn total_turns(&self) -> usize {
        self.agents.len() * self.iterations as usize
    }
}
