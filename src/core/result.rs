//! # Resultados de Matching
//!
//! - [`MatchCandidate`] — melhor evidência de **uma entrada** do dicionário
//! - [`MatchResult`] — saída do motor para **um domínio** (no máximo um por domínio)
//!
//! ## Invariantes
//!
//! | Fonte | Confiança |
//! |-------|-----------|
//! | `Exact` | sempre `1.0` |
//! | `Variation` | `variation_confidence` do domínio (0.95) |
//! | `Typo` | `typo_confidence` do domínio (0.90) |
//! | `Fuzzy` | derivada, `< 1.0`, só exposta se `≥ threshold` |

use serde::Serialize;

use super::domain::{Domain, Language};
use super::entry::{Category, EntryTag};

/// Tipo de evidência que produziu o match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchSource {
    /// A forma canônica aparece literalmente no texto.
    Exact,
    /// Uma variação registrada aparece literalmente.
    Variation,
    /// Um typo registrado aparece literalmente.
    Typo,
    /// Similaridade por distância de edição.
    Fuzzy,
}

impl MatchSource {
    /// Evidência registrada (não fuzzy). Satisfaz o contexto trivialmente.
    pub fn is_registered(&self) -> bool {
        !matches!(self, MatchSource::Fuzzy)
    }

    pub fn label(&self) -> &'static str {
        match self {
            MatchSource::Exact => "exact",
            MatchSource::Variation => "variation",
            MatchSource::Typo => "typo",
            MatchSource::Fuzzy => "fuzzy",
        }
    }
}

/// Evidência de uma entrada do dicionário contra um texto.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct MatchCandidate {
    pub matched_canonical_form: String,
    pub confidence: f32,
    pub source: MatchSource,
}

/// Resultado estruturado entregue aos colaboradores (responders, dispatchers).
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct MatchResult {
    pub domain: Domain,
    /// Confiança em `[0, 1]`; `1.0` apenas para match exato.
    pub confidence: f32,
    /// Forma canônica da entrada vencedora.
    pub matched_keyword: String,
    pub source: MatchSource,
    pub category: Category,
    pub tag: EntryTag,
    /// Idioma do texto (ou da entrada, se o texto não tiver letras).
    pub language: Language,
    /// Cidade extraída (apenas weather/news).
    pub extracted_entity: Option<String>,
    pub original_text: String,
}
