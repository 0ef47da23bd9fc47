//! # Tolerant Intent — Servidor de Demonstração
//!
//! Carrega a configuração e os dicionários, monta o [`IntentEngine`] e
//! expõe o playground + API JSON via axum.
//!
//! ```text
//! main()
//!   ├── Configura tracing (RUST_LOG, padrão "info")
//!   ├── EngineConfig::load()         → $INTENT_CONFIG, config/engine.json ou padrão
//!   ├── load_dictionaries()          → data/dictionaries/*.json ou embutidos
//!   ├── IntentEngine::with_dictionaries()
//!   └── axum::serve(INTENT_ADDR)     → padrão 0.0.0.0:3000
//! ```
//!
//! ```bash
//! RUST_LOG=tolerant_intent=debug cargo run
//! curl -s localhost:3000/api/recognize -H 'content-type: application/json' \
//!      -d '{"text":"шо ти можеш"}'
//! ```

use std::path::Path;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

use tolerant_intent::persistence::{self, DICTIONARY_DIR};
use tolerant_intent::web::{self, state::AppState};
use tolerant_intent::{EngineConfig, IntentEngine};

/// Endereço padrão quando `INTENT_ADDR` não está definido.
const DEFAULT_ADDR: &str = "0.0.0.0:3000";

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    tracing::info!("Tolerant Intent — Starting...");

    let config = EngineConfig::load().context("Falha ao carregar configuração")?;
    let dictionaries = persistence::load_dictionaries(Path::new(DICTIONARY_DIR))?;
    let engine = IntentEngine::with_dictionaries(&config, dictionaries)
        .context("Falha ao montar o motor de intenções")?;

    for recognizer in engine.recognizers() {
        tracing::info!(
            domain = %recognizer.domain(),
            entries = recognizer.dictionary().len(),
            threshold = recognizer.config().threshold,
            "Domínio pronto"
        );
    }

    let app = web::create_router(AppState::new(engine));

    let addr = std::env::var("INTENT_ADDR").unwrap_or_else(|_| DEFAULT_ADDR.to_string());
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Falha ao abrir {addr}"))?;
    tracing::info!("Server running at http://{addr}");

    axum::serve(listener, app).await?;

    Ok(())
}
