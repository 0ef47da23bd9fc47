//! # Módulo Core — Tipos Fundamentais do Domínio
//!
//! Tipos compartilhados por todas as camadas do motor:
//!
//! - [`Domain`] — categoria de intenção (capability, news, weather, ...)
//! - [`Language`] — idioma detectado (`uk` / `en`)
//! - [`KeywordEntry`] — linha de dicionário (canônica + variações + typos)
//! - [`MatchCandidate`] — evidência de uma entrada contra um texto
//! - [`MatchResult`] — saída estruturada do motor
//!
//! ## Relações
//!
//! ```text
//! texto ──► 0..n MatchCandidate por domínio
//!        ──► 0..1 MatchResult por domínio
//!        ──► 0..1 MatchResult vencedor (PriorityResolver)
//! ```

pub mod domain;
pub mod entry;
pub mod result;

pub use domain::{Domain, Language};
pub use entry::{Category, EntryTag, Intensity, KeywordEntry, RawEntry};
pub use result::{MatchCandidate, MatchResult, MatchSource};
