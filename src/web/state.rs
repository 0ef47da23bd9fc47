//! # Estado da Aplicação Web
//!
//! O motor é imutável depois de construído, então o estado compartilhado
//! é só um `Arc` clonado para cada handler; nenhum lock é necessário.
//!
//! ```text
//! main()
//!   ├── EngineConfig::load()
//!   ├── persistence::load_dictionaries()
//!   └── IntentEngine::with_dictionaries() ──► Arc<IntentEngine>
//!                                              ├── handler /chat
//!                                              ├── handler /api/recognize
//!                                              └── spawn_blocking /api/batch
//! ```

use std::sync::Arc;
use std::time::Instant;

use crate::nlu::IntentEngine;

/// Estado compartilhado da aplicação Axum.
#[derive(Clone)]
pub struct AppState {
    /// Motor de reconhecimento (`Send + Sync`, sem locks).
    pub engine: Arc<IntentEngine>,
    /// Momento em que o servidor ficou pronto.
    pub started_at: Instant,
}

impl AppState {
    pub fn new(engine: IntentEngine) -> Self {
        Self {
            engine: Arc::new(engine),
            started_at: Instant::now(),
        }
    }
}
