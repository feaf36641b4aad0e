//! The debate loop — strictly sequential iteration × agent turns.
//!
//! Each prompt depends on the full transcript of all prior turns,
//! including the immediately preceding agent's output within the same
//! iteration, so turns never run in parallel. The provider call is
//! the loop's only suspension point. Per-turn faults are recovered
//! locally with placeholder text; nothing short of completing all
//! `agents × iterations` turns ends a run.

use std::sync::Arc;
use std::time::Instant;

use thiserror::Error;
use tracing::{debug, error, info};

use debate_core::config::DebateConfig;
use debate_core::extract::extract_content;
use debate_core::prompt::{build_argument_prompt, PROMPT_VERSION};
use debate_core::transcript::{agent_label, Transcript, TurnRecord};

use crate::generation::TextGeneration;

/// Receives each committed turn, one at a time, in production order.
///
/// Invoked inline in the loop's own flow, so an implementation never
/// observes the transcript concurrently with the engine's writes.
pub trait TurnObserver: Send + Sync {
    fn on_turn(&self, turn: &TurnRecord);
}

/// Observer that discards turns.
pub struct NoopObserver;

impl TurnObserver for NoopObserver {
    fn on_turn(&self, _turn: &TurnRecord) {}
}

/// Engine construction error: the generator list must pair 1:1 with
/// the configured agent descriptors.
#[derive(Debug, Error)]
#[error("agent count mismatch: {generators} generators for {descriptors} descriptors")]
pub struct AgentCountMismatch {
    pub generators: usize,
    pub descriptors: usize,
}

/// Drives one debate run: `iterations × agents` sequential turns.
///
/// Holds no state beyond its configuration — every [`run`] starts
/// from a fresh empty transcript and returns the complete log. The
/// caller (the session shell) commits the result into its
/// `SessionState`.
///
/// [`run`]: DebateEngine::run
pub struct DebateEngine {
    config: DebateConfig,
    agents: Vec<Arc<dyn TextGeneration>>,
}

impl std::fmt::Debug for DebateEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DebateEngine")
            .field("config", &self.config)
            .field("agents", &self.agents.len())
            .finish()
    }
}

impl DebateEngine {
    pub fn new(
        config: DebateConfig,
        agents: Vec<Arc<dyn TextGeneration>>,
    ) -> Result<Self, AgentCountMismatch> {
        if agents.len() != config.agents.len() {
            return Err(AgentCountMismatch {
                generators: agents.len(),
                descriptors: config.agents.len(),
            });
        }
        Ok(Self { config, agents })
    }

    pub fn config(&self) -> &DebateConfig {
        &self.config
    }

    /// Run the full debate, forwarding each turn to `observer` as it
    /// is produced.
    ///
    /// Turn order is iteration-major, then agent index within the
    /// iteration. A failed provider call or an unrecognized response
    /// shape puts a placeholder at that turn's position; the loop
    /// always continues — no retry, no early termination.
    pub async fn run(&self, observer: &dyn TurnObserver) -> Transcript {
        let started = Instant::now();
        let mut transcript = Transcript::new();

        // Per-agent extraction placeholders are constant for the run;
        // build them once instead of on every successful turn.
        let extract_defaults: Vec<String> = (0..self.agents.len())
            .map(|i| format!("[Error: Unable to extract response for Agent {}]", i + 1))
            .collect();

        for iteration in 0..self.config.iterations {
            for (index, (agent, descriptor)) in
                self.agents.iter().zip(&self.config.agents).enumerate()
            {
                let label = agent_label(index, descriptor.stance, &descriptor.expertise);
                let prompt = build_argument_prompt(
                    &self.config.topic,
                    descriptor,
                    iteration,
                    &transcript,
                );
                debug!(
                    iteration = iteration + 1,
                    agent = %label,
                    prompt_version = PROMPT_VERSION,
                    "prompting agent"
                );

                let argument = match agent.generate(&prompt).await {
                    Ok(value) => extract_content(&value, &extract_defaults[index]),
                    Err(e) => {
                        error!(
                            agent = %label,
                            error = %e,
                            "generation call failed — substituting placeholder"
                        );
                        format!("[Error: Issue with Agent {}]", index + 1)
                    }
                };

                let turn = TurnRecord::individual(label, argument);
                observer.on_turn(&turn);
                transcript.append(turn);
            }
        }

        info!(
            turns = transcript.len(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "debate run complete"
        );
        transcript
    }
}
