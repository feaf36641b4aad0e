//! Debate Core — pure logic for the multi-agent debate loop.
//!
//! This crate holds everything that can run without a network or an
//! async runtime:
//! - [`config`]: stances, agent descriptors, and the per-debate
//!   configuration with its bounds validation.
//! - [`transcript`]: the append-only, ordered store of debate turns.
//! - [`prompt`]: the deterministic per-turn prompt builder.
//! - [`extract`]: the best-effort normalizer over provider response
//!   shapes.
//! - [`session`]: the Idle → Running → Completed phase machine that
//!   owns the committed transcript between runs.
//!
//! The LLM-backed loop driver lives in the `debate-agents` crate.

pub mod config;
pub mod extract;
pub mod prompt;
pub mod session;
pub mod transcript;

pub use config::{AgentDescriptor, ConfigError, DebateConfig, Stance};
pub use extract::extract_content;
pub use prompt::build_argument_prompt;
pub use session::{DebatePhase, PhaseTransition, SessionState, TransitionError};
pub use transcript::{agent_label, Transcript, TurnKind, TurnRecord};
