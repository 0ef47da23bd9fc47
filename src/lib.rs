#![allow(rustdoc::broken_intra_doc_links)]
//! # Tolerant Intent — Reconhecimento de Intenção Tolerante a Ruído
//!
//! Motor determinístico que reconhece a **intenção** do usuário em mensagens
//! curtas de chat, bilíngues (ucraniano/inglês), com erros de digitação,
//! transliteração e gírias.
//!
//! ## Arquitetura em Camadas
//!
//! ```text
//! Texto bruto
//!   ├── Utterance (NFC, lowercase, tokens, homóglifos)
//!   ├── ContextValidator (denylist → rejeição imediata)
//!   ├── IntentRecognizer × 6 domínios
//!   │   ├── Dictionary (entradas canônicas + variações + typos)
//!   │   ├── PhraseMatcher → SimilarityScorer (Levenshtein)
//!   │   └── CityExtractor (weather/news)
//!   └── PriorityResolver → vencedor único
//! ```
//!
//! ## Módulos
//!
//! | Módulo | Responsabilidade |
//! |--------|------------------|
//! | [`core`] | Tipos fundamentais: `Domain`, `KeywordEntry`, `MatchResult` |
//! | [`nlu`] | Motor de reconhecimento (scorer, matcher, recognizers, resolver) |
//! | [`config`] | Configuração do motor (thresholds por domínio, janelas, margens) |
//! | [`persistence`] | Carregamento de dicionários substitutos em JSON |
//! | [`metrics`] | Métricas de processo exibidas no chat |
//! | [`web`] | Servidor axum de demonstração (playground + API JSON) |

pub mod config;
pub mod core;
pub mod error;
pub mod metrics;
pub mod nlu;
pub mod persistence;
pub mod web;

pub use crate::config::EngineConfig;
pub use crate::core::{Domain, KeywordEntry, Language, MatchCandidate, MatchResult, MatchSource};
pub use crate::error::{DictionaryError, EngineError};
pub use crate::nlu::{Analysis, IntentEngine};
