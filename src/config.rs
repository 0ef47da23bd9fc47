//! # Configuração do Motor
//!
//! Todos os "números mágicos" do reconhecimento vivem aqui, agrupados por
//! componente. Ajustar um threshold é uma mudança de configuração, não de
//! código.
//!
//! ## Valores Padrão
//!
//! | Grupo | Campo | Padrão |
//! |-------|-------|--------|
//! | `scorer` | `approximation_cutoff` | 15 chars |
//! | `scorer` | `min_length_ratio` | 0.4 |
//! | `phrase` | `token_window` | 12 tokens |
//! | `phrase` | `min_word_len` | 3 chars |
//! | `phrase` | `word_accept` | 0.77 |
//! | `entity` | `fuzzy_threshold` | 0.85 |
//! | `resolver` | `near_tie_margin` | 0.10 |
//! | `domains.capability` | `threshold` | 0.70 |
//! | `domains.news/weather/subscribe/unsubscribe` | `threshold` | 0.60 |
//! | `domains.power_word` | `threshold` | 0.80 |
//!
//! ## Arquivo de Configuração
//!
//! [`EngineConfig::load()`] lê o JSON apontado por `INTENT_CONFIG` (ou
//! `config/engine.json`, se existir) e o **mescla** sobre os padrões;
//! basta escrever os campos que mudam:
//!
//! ```json
//! { "domains": { "news": { "threshold": 0.65 } } }
//! ```

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::core::Domain;

/// Caminho padrão do arquivo de configuração (relativo à raiz do projeto).
const DEFAULT_CONFIG_PATH: &str = "config/engine.json";

/// Variável de ambiente que aponta para um arquivo de configuração.
pub const CONFIG_ENV: &str = "INTENT_CONFIG";

/// Parâmetros do [`SimilarityScorer`](crate::nlu::similarity::SimilarityScorer).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScorerConfig {
    /// Tokens mais longos que isto usam a aproximação prefixo+sufixo.
    pub approximation_cutoff: usize,
    /// `menor/maior < min_length_ratio` → similaridade 0 sem calcular distância.
    pub min_length_ratio: f32,
}

impl Default for ScorerConfig {
    fn default() -> Self {
        Self {
            approximation_cutoff: 15,
            min_length_ratio: 0.4,
        }
    }
}

/// Parâmetros do [`PhraseMatcher`](crate::nlu::phrase::PhraseMatcher).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PhraseConfig {
    /// Quantos tokens do início da mensagem são examinados.
    pub token_window: usize,
    /// Palavras canônicas mais curtas são ignoradas no alinhamento.
    pub min_word_len: usize,
    /// Similaridade mínima para uma palavra contar como "casada".
    pub word_accept: f32,
    /// Similaridade a partir da qual a busca pela melhor palavra para.
    pub near_exact: f32,
    /// Teto para confiança fuzzy (1.0 é reservado a match exato).
    pub fuzzy_ceiling: f32,
}

impl Default for PhraseConfig {
    fn default() -> Self {
        Self {
            token_window: 12,
            min_word_len: 3,
            word_accept: 0.77,
            near_exact: 0.95,
            fuzzy_ceiling: 0.99,
        }
    }
}

/// Parâmetros do [`CityExtractor`](crate::nlu::extractor::CityExtractor).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EntityConfig {
    /// Threshold fuzzy para cidades (mais estrito que o de intenção).
    pub fuzzy_threshold: f32,
    /// Cidades com nome canônico mais curto só casam por contenção exata.
    pub min_fuzzy_chars: usize,
}

impl Default for EntityConfig {
    fn default() -> Self {
        Self {
            fuzzy_threshold: 0.85,
            min_fuzzy_chars: 4,
        }
    }
}

/// Parâmetros do [`PriorityResolver`](crate::nlu::resolver::PriorityResolver).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ResolverConfig {
    /// Diferença de confiança abaixo da qual vale a prioridade estática.
    pub near_tie_margin: f32,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            near_tie_margin: 0.1,
        }
    }
}

/// Política de um domínio, usada para instanciar o recognizer genérico.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DomainConfig {
    /// Confiança mínima para aceitar o melhor candidato.
    pub threshold: f32,
    /// Textos normalizados mais curtos são rejeitados de imediato.
    pub min_text_chars: usize,
    /// Confiança atribuída à contenção de uma variação registrada.
    pub variation_confidence: f32,
    /// Confiança atribuída à contenção de um typo registrado.
    pub typo_confidence: f32,
    /// Extrai cidade do texto quando o match é aceito.
    pub extract_city: bool,
    /// Colapsa letras repetidas ("вааау" → "вау") antes do matching.
    pub squeeze_repeats: bool,
    /// Radicais exigidos pelo resolver ("підп", "subscr"); vazio = sem re-check.
    pub relevant_keywords: Vec<String>,
    /// Radicais que invalidam o re-check ("відп" invalida subscribe).
    pub conflicting_keywords: Vec<String>,
}

impl DomainConfig {
    fn base(threshold: f32, min_text_chars: usize) -> Self {
        Self {
            threshold,
            min_text_chars,
            variation_confidence: 0.95,
            typo_confidence: 0.9,
            extract_city: false,
            squeeze_repeats: false,
            relevant_keywords: Vec::new(),
            conflicting_keywords: Vec::new(),
        }
    }

    /// Política padrão de cada domínio.
    pub fn for_domain(domain: Domain) -> Self {
        match domain {
            Domain::Capability => Self::base(0.7, 4),
            Domain::News | Domain::Weather => Self {
                extract_city: true,
                ..Self::base(0.6, 3)
            },
            Domain::Subscribe => Self {
                relevant_keywords: strings(&["підп", "подп", "subscr", "sign"]),
                conflicting_keywords: strings(&["відп", "отпис", "unsub", "скасу", "cancel"]),
                ..Self::base(0.6, 3)
            },
            Domain::Unsubscribe => Self {
                relevant_keywords: strings(&[
                    "відп", "отпис", "unsub", "скасу", "cancel", "stop", "припин",
                ]),
                ..Self::base(0.6, 3)
            },
            Domain::PowerWord => Self {
                squeeze_repeats: true,
                ..Self::base(0.8, 3)
            },
        }
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Políticas de todos os domínios.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DomainSettings {
    pub capability: DomainConfig,
    pub news: DomainConfig,
    pub weather: DomainConfig,
    pub subscribe: DomainConfig,
    pub unsubscribe: DomainConfig,
    pub power_word: DomainConfig,
}

impl Default for DomainSettings {
    fn default() -> Self {
        Self {
            capability: DomainConfig::for_domain(Domain::Capability),
            news: DomainConfig::for_domain(Domain::News),
            weather: DomainConfig::for_domain(Domain::Weather),
            subscribe: DomainConfig::for_domain(Domain::Subscribe),
            unsubscribe: DomainConfig::for_domain(Domain::Unsubscribe),
            power_word: DomainConfig::for_domain(Domain::PowerWord),
        }
    }
}

impl DomainSettings {
    pub fn get(&self, domain: Domain) -> &DomainConfig {
        match domain {
            Domain::Capability => &self.capability,
            Domain::News => &self.news,
            Domain::Weather => &self.weather,
            Domain::Subscribe => &self.subscribe,
            Domain::Unsubscribe => &self.unsubscribe,
            Domain::PowerWord => &self.power_word,
        }
    }

    pub fn get_mut(&mut self, domain: Domain) -> &mut DomainConfig {
        match domain {
            Domain::Capability => &mut self.capability,
            Domain::News => &mut self.news,
            Domain::Weather => &mut self.weather,
            Domain::Subscribe => &mut self.subscribe,
            Domain::Unsubscribe => &mut self.unsubscribe,
            Domain::PowerWord => &mut self.power_word,
        }
    }
}

/// Configuração completa do motor.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Entradas mais longas são truncadas antes da normalização.
    pub max_input_chars: usize,
    pub scorer: ScorerConfig,
    pub phrase: PhraseConfig,
    pub entity: EntityConfig,
    pub resolver: ResolverConfig,
    pub domains: DomainSettings,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_input_chars: 1024,
            scorer: ScorerConfig::default(),
            phrase: PhraseConfig::default(),
            entity: EntityConfig::default(),
            resolver: ResolverConfig::default(),
            domains: DomainSettings::default(),
        }
    }
}

impl EngineConfig {
    /// Carrega a configuração do disco, ou usa os padrões.
    ///
    /// Ordem de busca: `$INTENT_CONFIG` → `config/engine.json` → padrões.
    ///
    /// # Erros
    ///
    /// Retorna erro se o arquivo existir mas não puder ser lido, não for
    /// JSON válido, ou tiver campos com tipos incompatíveis.
    pub fn load() -> Result<Self> {
        let path = match std::env::var_os(CONFIG_ENV) {
            Some(p) => PathBuf::from(p),
            None => PathBuf::from(DEFAULT_CONFIG_PATH),
        };
        if !path.exists() {
            tracing::info!(path = %path.display(), "Arquivo de configuração ausente, usando padrões");
            return Ok(Self::default());
        }
        Self::from_file(&path)
    }

    /// Lê um arquivo JSON e mescla sobre os padrões.
    pub fn from_file(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Falha ao ler {}", path.display()))?;
        let config = Self::from_json(&json)
            .with_context(|| format!("Falha ao interpretar {}", path.display()))?;
        tracing::info!(path = %path.display(), "Configuração carregada");
        Ok(config)
    }

    /// Mescla um JSON parcial sobre os valores padrão.
    pub fn from_json(json: &str) -> Result<Self> {
        let overrides: serde_json::Value =
            serde_json::from_str(json).context("JSON de configuração inválido")?;
        let mut merged = serde_json::to_value(Self::default())
            .context("Falha ao serializar configuração padrão")?;
        merge_json(&mut merged, overrides);
        serde_json::from_value(merged).context("Configuração com campos incompatíveis")
    }
}

/// Mescla recursiva: objetos são combinados chave a chave, o resto é substituído.
fn merge_json(base: &mut serde_json::Value, overrides: serde_json::Value) {
    match (base, overrides) {
        (serde_json::Value::Object(base_map), serde_json::Value::Object(over_map)) => {
            for (key, value) in over_map {
                match base_map.get_mut(&key) {
                    Some(slot) => merge_json(slot, value),
                    None => {
                        base_map.insert(key, value);
                    }
                }
            }
        }
        (slot, value) => *slot = value,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thresholds_differ_per_domain() {
        let config = EngineConfig::default();
        assert_eq!(config.domains.get(Domain::Capability).threshold, 0.7);
        assert_eq!(config.domains.get(Domain::News).threshold, 0.6);
        assert_eq!(config.domains.get(Domain::PowerWord).threshold, 0.8);
        assert!(config.domains.get(Domain::Weather).extract_city);
        assert!(!config.domains.get(Domain::Capability).extract_city);
    }

    #[test]
    fn partial_json_keeps_domain_defaults() {
        let config =
            EngineConfig::from_json(r#"{ "domains": { "news": { "threshold": 0.65 } } }"#)
                .unwrap();
        let news = config.domains.get(Domain::News);
        assert_eq!(news.threshold, 0.65);
        // Campos não mencionados preservam o padrão do próprio domínio
        assert!(news.extract_city);
        assert_eq!(news.min_text_chars, 3);
        assert_eq!(config.phrase, PhraseConfig::default());
    }

    #[test]
    fn max_input_chars_override() {
        let config = EngineConfig::from_json(r#"{ "max_input_chars": 64 }"#).unwrap();
        assert_eq!(config.max_input_chars, 64);
    }

    #[test]
    fn invalid_json_is_an_error() {
        assert!(EngineConfig::from_json("{ threshold").is_err());
        assert!(EngineConfig::from_json(r#"{ "resolver": { "near_tie_margin": "wide" } }"#).is_err());
    }
}
