//! # Módulo Web — Playground e API do Motor de Intenções
//!
//! Camada de demonstração construída com **Axum** + **HTMX** + **Maud**.
//! O motor em si ([`crate::nlu::IntentEngine`]) não depende deste módulo.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │ Browser (HTMX)                                          │
//! ├─────────────────────────────────────────────────────────┤
//! │ Axum Router (este módulo)                               │
//! │  ├── GET  /                    → playground (chat)      │
//! │  ├── GET  /status              → JSON: domínios, RAM    │
//! │  ├── POST /chat                → HTMX fragment          │
//! │  ├── POST /api/recognize       → JSON: Analysis         │
//! │  ├── POST /api/batch           → JSON: Vec<Analysis>    │
//! │  └── GET  /dictionary/{domain} → JSON: entradas         │
//! ├─────────────────────────────────────────────────────────┤
//! │ CorsLayer (permissivo) + TraceLayer (tracing por req.)  │
//! └─────────────────────────────────────────────────────────┘
//! ```
//!
//! | Módulo | Responsabilidade |
//! |--------|------------------|
//! | [`state`] | Estado compartilhado (`AppState`) |
//! | [`handlers`] | Handlers Axum para cada rota |
//! | [`templates`] | Templates Maud (HTML server-side) |

pub mod handlers;
pub mod state;
pub mod templates;

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use state::AppState;

/// Cria o router Axum com todas as rotas da aplicação.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // ── Páginas HTML ──────────────────────────────────────
        .route("/", get(handlers::index))
        // ── HTMX fragments ───────────────────────────────────
        .route("/chat", post(handlers::chat))
        // ── API JSON ──────────────────────────────────────────
        .route("/status", get(handlers::status))
        .route("/api/recognize", post(handlers::recognize))
        .route("/api/batch", post(handlers::batch))
        .route("/dictionary/{domain}", get(handlers::dictionary))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
