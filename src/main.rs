//! Nosh API server
//!
//! Run with: cargo run --bin nosh-api
//!
//! # Configuration
//!
//! Loaded from `config.toml` (see [`nosh::config`]) with environment
//! variable overrides:
//! - `NOSH_API_HOST` / `NOSH_API_PORT`: bind address (default 0.0.0.0:5000)
//! - `NOSH_LLM_BASE_URL` / `NOSH_LLM_MODEL`: chat-completion service
//! - `NOSH_LLM_API_KEY` (or `OPENAI_API_KEY`): service credential
//! - `NOSH_SEED_DEMO_DATA`: seed 7 days of demo entries (default true)
//! - `NOSH_SEED_RNG_SEED`: fixed seed for reproducible demo data
//! - `NOSH_LOG_LEVEL` / `NOSH_LOG_FORMAT`: logging (or `RUST_LOG`)

use std::sync::Arc;

use nosh::api::{serve, ApiConfig, AppState};
use nosh::config::Config;
use nosh::foodlog::{DemoSeeder, FoodLog};
use nosh::llm::{FoodParser, LlmClient, LlmConfig, NutritionEstimator};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::load_default();

    init_tracing(&config);

    tracing::info!("Starting Nosh API server v{}", env!("CARGO_PKG_VERSION"));

    // Chat-completion client shared by parser and estimator
    let llm_config = LlmConfig {
        base_url: config.llm.base_url.clone(),
        model: config.llm.model.clone(),
        api_key: config.llm.api_key.clone(),
        request_timeout_ms: config.llm.request_timeout_ms,
    };
    if llm_config.api_key.is_empty() {
        tracing::warn!("No LLM API key configured; food parsing will fail until one is set");
    }
    tracing::info!(
        base_url = %llm_config.base_url,
        model = %llm_config.model,
        "LLM service configured"
    );
    let model = Arc::new(LlmClient::new(llm_config)?);

    // Food log, optionally seeded with a week of demo entries
    let log = if config.seed.enabled {
        let mut seeder = match config.seed.rng_seed {
            Some(seed) => DemoSeeder::new(seed),
            None => DemoSeeder::from_entropy(),
        };
        let entries = seeder.generate();
        tracing::info!(entries = entries.len(), "Seeded demo data for the past 7 days");
        Arc::new(FoodLog::with_entries(entries))
    } else {
        Arc::new(FoodLog::new())
    };

    let api_config = ApiConfig {
        host: config.api.host.clone(),
        port: config.api.port,
        request_timeout_secs: config.api.request_timeout_secs,
    };

    let state = AppState::new(
        log,
        Arc::new(FoodParser::new(model.clone())),
        Arc::new(NutritionEstimator::new(model)),
        api_config.clone(),
    );

    tracing::info!("Starting server on {}:{}", api_config.host, api_config.port);
    serve(state, &api_config).await?;

    tracing::info!("Nosh API server stopped");
    Ok(())
}

fn init_tracing(config: &Config) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        tracing_subscriber::EnvFilter::new(format!(
            "nosh={},tower_http=debug",
            config.logging.level
        ))
    });

    if config.logging.format == "json" {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }
}
