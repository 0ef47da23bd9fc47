//! # Handlers HTTP
//!
//! Cada função pública neste módulo é um handler Axum, mapeado a uma rota
//! em [`super::create_router()`].
//!
//! | Handler | Método | Retorno | Uso |
//! |---------|--------|---------|-----|
//! | `index` | GET | HTML completo | Playground (Maud) |
//! | `status` | GET | JSON | Domínios, thresholds, métricas |
//! | `recognize` | POST | JSON | Análise de um texto |
//! | `batch` | POST | JSON | Análise de vários textos (rayon) |
//! | `chat` | POST | HTMX fragment | Mensagem + intenção + métricas |
//! | `dictionary` | GET | JSON | Entradas de um domínio |
//!
//! O reconhecimento é síncrono e leva microssegundos, então `recognize` e
//! `chat` rodam direto no executor. Lotes usam `spawn_blocking`, pois o
//! `rayon` ocupa todos os cores.

use std::sync::Arc;
use std::time::Instant;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Html;
use axum::Json;
use serde::{Deserialize, Serialize};

use super::state::AppState;
use super::templates;
use crate::core::{Domain, KeywordEntry};
use crate::metrics::{self, ProcessMetrics};
use crate::nlu::Analysis;

/// Maior lote aceito por `/api/batch`.
const MAX_BATCH: usize = 1000;

/// Erro de API: status + mensagem em texto.
type ApiError = (StatusCode, String);

/// Converte Maud Markup em resposta Html<String> do Axum.
fn markup_to_html(m: maud::Markup) -> Html<String> {
    Html(m.into_string())
}

fn parse_domain(label: &str) -> Result<Domain, ApiError> {
    Domain::from_label(label).ok_or_else(|| {
        (
            StatusCode::BAD_REQUEST,
            format!("domínio desconhecido: '{}'", label),
        )
    })
}

/// GET `/` — Playground de reconhecimento.
pub async fn index() -> Html<String> {
    markup_to_html(templates::full_page())
}

// ─── /status ─────────────────────────────────────────────────────

#[derive(Serialize)]
pub struct DomainStatus {
    pub domain: Domain,
    pub entries: usize,
    pub threshold: f32,
}

#[derive(Serialize)]
pub struct StatusResponse {
    pub ready: bool,
    pub uptime_secs: u64,
    pub domains: Vec<DomainStatus>,
    pub metrics: ProcessMetrics,
}

/// GET `/status` — Domínios carregados, thresholds e métricas do processo.
pub async fn status(State(state): State<AppState>) -> Json<StatusResponse> {
    let domains = state
        .engine
        .recognizers()
        .iter()
        .map(|r| DomainStatus {
            domain: r.domain(),
            entries: r.dictionary().len(),
            threshold: r.config().threshold,
        })
        .collect();

    Json(StatusResponse {
        ready: true,
        uptime_secs: state.started_at.elapsed().as_secs(),
        domains,
        metrics: metrics::collect_metrics(&state.engine, None),
    })
}

// ─── /api/recognize ──────────────────────────────────────────────

#[derive(Deserialize)]
pub struct RecognizeRequest {
    pub text: String,
    /// Restringe a um domínio (sem resolver).
    #[serde(default)]
    pub domain: Option<String>,
}

/// POST `/api/recognize` — Analisa um texto.
///
/// Sem `domain`: todos os domínios + resolver. Com `domain`: apenas aquele
/// recognizer, e o vencedor é o próprio match (se houver).
pub async fn recognize(
    State(state): State<AppState>,
    Json(req): Json<RecognizeRequest>,
) -> Result<Json<Analysis>, ApiError> {
    let analysis = match req.domain.as_deref() {
        None => state.engine.analyze(&req.text),
        Some(label) => {
            let domain = parse_domain(label)?;
            let result = state.engine.recognize(domain, &req.text);
            Analysis {
                text: req.text.clone(),
                matches: result.iter().cloned().collect(),
                winner: result,
            }
        }
    };
    Ok(Json(analysis))
}

// ─── /api/batch ──────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct BatchRequest {
    pub texts: Vec<String>,
}

#[derive(Serialize)]
pub struct BatchResponse {
    pub results: Vec<Analysis>,
    pub elapsed_us: u64,
    /// Snapshot do processo com o throughput do lote.
    pub metrics: ProcessMetrics,
}

/// POST `/api/batch` — Analisa vários textos em paralelo.
pub async fn batch(
    State(state): State<AppState>,
    Json(req): Json<BatchRequest>,
) -> Result<Json<BatchResponse>, ApiError> {
    if req.texts.len() > MAX_BATCH {
        return Err((
            StatusCode::PAYLOAD_TOO_LARGE,
            format!("lote com {} textos (máximo {})", req.texts.len(), MAX_BATCH),
        ));
    }

    let engine = Arc::clone(&state.engine);
    let count = req.texts.len();
    let t0 = Instant::now();
    let results = tokio::task::spawn_blocking(move || engine.recognize_batch(&req.texts))
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "Falha na task de lote");
            (StatusCode::INTERNAL_SERVER_ERROR, "falha ao processar lote".to_string())
        })?;
    let elapsed_us = t0.elapsed().as_micros() as u64;

    tracing::info!(count, elapsed_us, "Lote processado");

    let throughput = metrics::throughput(count, elapsed_us);
    Ok(Json(BatchResponse {
        results,
        elapsed_us,
        metrics: metrics::collect_metrics(&state.engine, Some(throughput)),
    }))
}

// ─── /chat ───────────────────────────────────────────────────────

/// Dados do formulário de chat (campo `message` do form HTML).
#[derive(Deserialize)]
pub struct ChatForm {
    pub message: String,
}

/// POST `/chat` — Reconhece a mensagem e retorna um HTMX fragment.
///
/// ```text
/// 1. Lê o campo "message" do form
/// 2. engine.analyze() → Analysis
/// 3. Coleta métricas do processo
/// 4. Renderiza mensagem do usuário + intenção + linha de métricas
/// ```
pub async fn chat(
    State(state): State<AppState>,
    axum::Form(form): axum::Form<ChatForm>,
) -> Html<String> {
    let user_text = form.message.trim().to_string();
    if user_text.is_empty() {
        return markup_to_html(maud::html! {});
    }

    let t0 = Instant::now();
    let analysis = state.engine.analyze(&user_text);
    let elapsed_us = t0.elapsed().as_micros() as u64;

    tracing::info!(
        domain = ?analysis.domain(),
        confidence = analysis.confidence(),
        elapsed_us,
        "Mensagem de chat reconhecida"
    );

    let metrics_line = metrics::collect_metrics(&state.engine, None).summary_line(elapsed_us);
    markup_to_html(templates::analysis_fragment(&analysis, &metrics_line))
}

// ─── /dictionary/{domain} ────────────────────────────────────────

#[derive(Serialize)]
pub struct DictionaryResponse {
    pub domain: Domain,
    pub threshold: f32,
    pub entries: Vec<KeywordEntry>,
}

/// GET `/dictionary/{domain}` — Entradas carregadas para um domínio.
pub async fn dictionary(
    State(state): State<AppState>,
    Path(label): Path<String>,
) -> Result<Json<DictionaryResponse>, ApiError> {
    let domain = parse_domain(&label)?;
    let recognizer = state.engine.recognizer(domain).ok_or_else(|| {
        (
            StatusCode::NOT_FOUND,
            format!("domínio '{}' sem dicionário carregado", domain),
        )
    })?;

    Ok(Json(DictionaryResponse {
        domain,
        threshold: recognizer.config().threshold,
        entries: recognizer
            .dictionary()
            .entries()
            .iter()
            .map(|e| e.entry().clone())
            .collect(),
    }))
}
