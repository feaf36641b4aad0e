use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, warn};

use debate_agents::config::{build_generators, ProviderConfig};
use debate_agents::engine::{DebateEngine, TurnObserver};
use debate_core::config::{AgentDescriptor, DebateConfig};
use debate_core::session::SessionState;
use debate_core::transcript::TurnRecord;

/// Run a multi-agent pro/con debate against an OpenAI-compatible
/// endpoint, printing each turn as it is produced.
#[derive(Parser, Debug)]
#[command(name = "debate-agents", version)]
struct Cli {
    /// Debate topic.
    #[arg(long, default_value = "The impact of AI on society")]
    topic: String,

    /// Agent spec as `<stance>:<expertise>`, e.g. `pro:Economics`.
    /// Repeat for each participant (2-5). Defaults to one pro and
    /// one con generalist.
    #[arg(long = "agent", value_name = "STANCE:EXPERTISE")]
    agents: Vec<String>,

    /// Number of debate iterations (1-5).
    #[arg(long, default_value_t = 3)]
    iterations: u32,

    /// Override the provider base URL (default: $DEBATE_BASE_URL).
    #[arg(long)]
    base_url: Option<String>,

    /// Override the model name (default: $DEBATE_MODEL).
    #[arg(long)]
    model: Option<String>,

    /// Print the final transcript as pretty JSON after the run.
    #[arg(long)]
    json: bool,
}

/// Prints each turn the way the original app rendered them.
struct PrintObserver;

impl TurnObserver for PrintObserver {
    fn on_turn(&self, turn: &TurnRecord) {
        println!("{}: {}", turn.agent, turn.argument);
    }
}

fn parse_agent_spec(spec: &str) -> Result<AgentDescriptor> {
    let (stance, expertise) = spec
        .split_once(':')
        .with_context(|| format!("invalid agent spec `{spec}` (expected <stance>:<expertise>)"))?;
    Ok(AgentDescriptor::new(expertise.trim(), stance.trim().parse()?))
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let cli = Cli::parse();

    let agents = if cli.agents.is_empty() {
        vec![
            AgentDescriptor::new("Expert 1", "pro".parse()?),
            AgentDescriptor::new("Expert 2", "con".parse()?),
        ]
    } else {
        cli.agents
            .iter()
            .map(|spec| parse_agent_spec(spec))
            .collect::<Result<Vec<_>>>()?
    };

    let config = DebateConfig::new(cli.topic, cli.iterations, agents);
    config.validate()?;

    let mut provider = ProviderConfig::default();
    if let Some(base_url) = cli.base_url {
        provider.base_url = base_url;
    }
    if let Some(model) = cli.model {
        provider.model = model;
    }
    if provider.api_key.is_empty() {
        warn!("no API key set (DEBATE_API_KEY / OPENAI_API_KEY) — assuming keyless endpoint");
    }

    info!(
        topic = %config.topic,
        agents = config.agents.len(),
        iterations = config.iterations,
        model = %provider.model,
        "starting debate"
    );

    let generators = build_generators(&provider, config.agents.len());
    let engine = DebateEngine::new(config, generators)?;

    let mut session = SessionState::new();
    session.start()?;
    let transcript = engine.run(&PrintObserver).await;
    session.complete(transcript)?;

    info!(turns = session.transcript().len(), "debate concluded");

    if cli.json {
        println!("{}", session.transcript().to_pretty_json());
    }

    Ok(())
}
