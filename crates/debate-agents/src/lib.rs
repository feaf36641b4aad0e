//! Debate Agents — the LLM-backed runtime for the debate loop.
//!
//! Pairs the pure logic in `debate-core` with an OpenAI-compatible
//! chat-completions provider:
//! - [`config`]: endpoint settings from the environment, one client
//!   per agent.
//! - [`generation`]: the `TextGeneration` trait and its reqwest-based
//!   implementation.
//! - [`engine`]: the strictly sequential iteration × agent loop.

pub mod config;
pub mod engine;
pub mod generation;

pub use config::{build_generators, ProviderConfig};
pub use engine::{DebateEngine, NoopObserver, TurnObserver};
pub use generation::{ChatCompletionsClient, GenerationError, TextGeneration};
