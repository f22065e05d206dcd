use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use weather_agent::config::{AgentConfig, Backend, LoggingConfig};
use weather_agent::demo::{self, DEMO_QUERIES, SelfTestOutcome};
use weather_agent::{HfInferenceClient, OllamaClient, WeatherAgent, llm};

/// Rule-based weather agent over hosted and local LLM inference endpoints
#[derive(Parser, Debug)]
#[command(name = "weather-agent", author, version, about)]
struct Args {
    /// Config file (defaults to the user config dir)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Ask the weather agent; runs the built-in demo queries when none are given
    Agent {
        /// Backend for non-weather questions (overrides config)
        #[arg(short, long, value_enum)]
        backend: Option<Backend>,

        /// Questions to ask
        queries: Vec<String>,
    },

    /// Check the hosted Hugging Face inference setup
    HfCheck,

    /// Single and multi-turn chat against the local Ollama server
    OllamaDemo,
}

fn init_tracing(logging: &LoggingConfig, verbose: bool) {
    let level = if verbose { "debug" } else { logging.level.as_str() };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    if logging.format == "compact" {
        builder.compact().init();
    } else {
        builder.pretty().init();
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = AgentConfig::load_from_path(args.config.as_deref())
        .context("Failed to load configuration")?;
    init_tracing(&config.logging, args.verbose);
    match AgentConfig::resolve_config_file(args.config.as_deref()) {
        Ok(Some(path)) => {
            tracing::debug!(path = %path.display(), agent = ?config.agent, "Configuration loaded");
        }
        _ => tracing::debug!(agent = ?config.agent, "Configuration loaded from defaults"),
    }

    let mut stdout = std::io::stdout();

    match args.command {
        Command::Agent { backend, queries } => {
            if let Some(backend) = backend {
                config.agent.backend = backend;
            }
            let client = llm::from_config(&config)?;
            let agent = WeatherAgent::with_settings(client, &config.agent);

            let queries = if queries.is_empty() {
                DEMO_QUERIES.iter().map(|q| (*q).to_string()).collect()
            } else {
                queries
            };
            demo::run_weather_agent(&agent, &queries, &mut stdout).await?;
        }
        Command::HfCheck => {
            let client = HfInferenceClient::new(&config.hf)?;
            if let SelfTestOutcome::Failed(reason) = demo::hf_self_test(&client, &mut stdout).await? {
                tracing::warn!(%reason, "Hosted inference self-test failed");
            }
        }
        Command::OllamaDemo => {
            let client = OllamaClient::new(&config.ollama)?;
            tracing::info!(base_url = client.base_url(), "Using Ollama server");
            demo::run_chat_demo(&client, &mut stdout).await?;
        }
    }

    Ok(())
}
