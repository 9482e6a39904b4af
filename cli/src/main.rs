//! CLI entrypoint for souk
//!
//! This binary wires together all layers once at startup using explicit
//! constructor injection, then dispatches a single RPC method against the
//! in-memory store. The network transport the production deployment sits
//! behind shares exactly this dispatch path.

use anyhow::{Context, Result, bail};
use clap::Parser;
use serde_json::Value;
use souk_application::{ProfileService, ProposalService, SettingService, VoteService};
use souk_infrastructure::{
    ConfigLoader, InMemoryProfileRepository, InMemoryProposalRepository,
    InMemorySettingRepository, InMemoryVoteRepository, SeedFile,
};
use souk_presentation::{
    CommandRegistry, RpcParams, SettingGetCommand, SettingListCommand, SettingRemoveCommand,
    SettingSetCommand, VoteGetCommand,
};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// CLI arguments for souk
#[derive(Parser, Debug)]
#[command(name = "souk")]
#[command(author, version, about = "souk - marketplace RPC commands")]
#[command(long_about = r#"
Dispatches one RPC method against an in-memory marketplace store.

Configuration files are loaded from (in priority order):
1. --config <path>     Explicit config file
2. ./souk.toml         Project-level config
3. ~/.config/souk/config.toml   Global config

Example:
  souk --seed fixtures/demo.json vote.get 1 0xa1b2c3
  souk --seed fixtures/demo.json setting.set 1 2 currency PART
  souk --list
"#)]
struct Cli {
    /// RPC method to dispatch (e.g. vote.get, setting.set)
    method: Option<String>,

    /// Positional parameters for the method
    params: Vec<String>,

    /// JSON seed file applied before dispatch (overrides config)
    #[arg(long, value_name = "PATH")]
    seed: Option<PathBuf>,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    no_config: bool,

    /// List registered methods and exit
    #[arg(long)]
    list: bool,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

/// Raw CLI params become raw RPC values: JSON if they parse, strings if not.
fn to_rpc_params(params: &[String]) -> RpcParams {
    RpcParams::new(
        params
            .iter()
            .map(|p| serde_json::from_str(p).unwrap_or_else(|_| Value::String(p.clone()))),
    )
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref()).map_err(|e| anyhow::anyhow!(e))?
    };

    // CLI verbosity wins over the configured level
    let filter = match cli.verbose {
        0 => EnvFilter::new(config.logging.level.clone()),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    info!("Starting souk");

    // === Dependency Injection ===
    // Repositories, then services, then commands; wired once at startup.
    let profile_repo = Arc::new(InMemoryProfileRepository::new());
    let proposal_repo = Arc::new(InMemoryProposalRepository::new());
    let vote_repo = Arc::new(InMemoryVoteRepository::new());
    let setting_repo = Arc::new(InMemorySettingRepository::new());

    if let Some(seed_path) = cli.seed.as_ref().or(config.storage.seed.as_ref()) {
        let seed = SeedFile::load(seed_path)
            .with_context(|| format!("loading seed file {}", seed_path.display()))?;
        seed.apply(&profile_repo, &proposal_repo, &vote_repo, &setting_repo)
            .await
            .context("applying seed file")?;
    }

    let profile_service = Arc::new(ProfileService::new(profile_repo));
    let proposal_service = Arc::new(ProposalService::new(proposal_repo));
    let vote_service = Arc::new(VoteService::new(vote_repo));
    let setting_service = Arc::new(SettingService::new(setting_repo));

    let registry = CommandRegistry::new()
        .register(Arc::new(VoteGetCommand::new(
            vote_service,
            profile_service.clone(),
            proposal_service,
        )))
        .register(Arc::new(SettingGetCommand::new(
            setting_service.clone(),
            profile_service.clone(),
        )))
        .register(Arc::new(SettingSetCommand::new(
            setting_service.clone(),
            profile_service.clone(),
        )))
        .register(Arc::new(SettingRemoveCommand::new(
            setting_service.clone(),
            profile_service.clone(),
        )))
        .register(Arc::new(SettingListCommand::new(
            setting_service,
            profile_service,
        )));

    if cli.list {
        for command in registry.commands() {
            println!("{}", command.help());
            println!("    {}", command.description());
            println!("    e.g. {}", command.example());
        }
        return Ok(());
    }

    let method = match cli.method {
        Some(m) => m,
        None => bail!("Method is required. Use --list to see registered methods."),
    };

    match registry.dispatch(&method, to_rpc_params(&cli.params)).await {
        Ok(result) => {
            println!("{}", serde_json::to_string_pretty(&result)?);
            Ok(())
        }
        Err(e) => bail!("{e}"),
    }
}
