//! Per-turn prompt assembly.
//!
//! Prompt versioning: bump `PROMPT_VERSION` whenever template content
//! changes, so a logged version identifies which template produced a
//! given agent response.

use crate::config::AgentDescriptor;
use crate::transcript::Transcript;

/// Prompt version. Bump on any template content change.
pub const PROMPT_VERSION: &str = "1.0.0";

/// Build the prompt for one agent turn.
///
/// Pure and deterministic: identical inputs always produce an
/// identical string. `iteration_index` is 0-based; the rendered
/// iteration number is 1-based. The full prior transcript — including
/// other agents' turns from the same iteration — is embedded as a
/// pretty-JSON dump, which is the only channel coupling the agents.
pub fn build_argument_prompt(
    topic: &str,
    agent: &AgentDescriptor,
    iteration_index: u32,
    transcript: &Transcript,
) -> String {
    let stance = agent.stance.as_upper();
    let mut prompt = String::new();

    prompt.push_str(&format!(
        "Iteration {}, {} argument for the topic: \"{}\"\n",
        iteration_index + 1,
        stance,
        topic
    ));
    prompt.push_str(&format!(
        "You are an expert in {expertise}. Provide a {stance} argument from your perspective as a {expertise}.\n",
        expertise = agent.expertise,
    ));
    prompt.push_str(
        "Keep your response concise, about 1-2 sentences. \
         Please respond as if you are addressing a technical postdoctoral audience. \
         Incorporate evidence and sources, if possible.\n\n",
    );
    prompt.push_str("Previous arguments (if any):\n");
    prompt.push_str(&transcript.to_pretty_json());
    prompt.push_str("\n\nYour response:\n");

    prompt
}
