//! # Erros do Motor
//!
//! O reconhecimento em si **nunca falha**: entradas degeneradas (vazias,
//! curtas demais, na denylist, abaixo do threshold) produzem "sem match".
//!
//! Os únicos erros possíveis acontecem na **construção** do motor:
//!
//! | Erro | Quando |
//! |------|--------|
//! | [`DictionaryError`] | Dicionário malformado (forma canônica vazia/duplicada, typos fora de power words) |
//! | [`EngineError`] | Regex inválida no validador, domínio duplicado, dicionário inválido |
//!
//! Esses erros são fatais e abortam a construção.

use thiserror::Error;

use crate::core::Domain;

/// Falha de validação de um dicionário de domínio.
#[derive(Debug, Error)]
pub enum DictionaryError {
    /// O dicionário não possui nenhuma entrada.
    #[error("dicionário '{domain}' está vazio")]
    Empty { domain: Domain },

    /// Uma entrada tem forma canônica vazia (após normalização).
    #[error("dicionário '{domain}': entrada #{index} tem forma canônica vazia")]
    EmptyCanonical { domain: Domain, index: usize },

    /// Duas entradas normalizam para a mesma forma canônica.
    #[error("dicionário '{domain}': forma canônica duplicada '{canonical}'")]
    DuplicateCanonical { domain: Domain, canonical: String },

    /// Uma variação ou typo normaliza para string vazia.
    #[error("dicionário '{domain}': variação vazia em '{canonical}'")]
    EmptyVariation { domain: Domain, canonical: String },

    /// Typos conhecidos só são aceitos no domínio de power words.
    #[error("dicionário '{domain}': typos não são permitidos neste domínio ('{canonical}')")]
    TyposNotAllowed { domain: Domain, canonical: String },

    /// JSON de dicionário inválido.
    #[error("dicionário '{domain}': JSON inválido: {source}")]
    Json {
        domain: Domain,
        #[source]
        source: serde_json::Error,
    },
}

/// Falha na construção do [`IntentEngine`](crate::nlu::IntentEngine).
#[derive(Debug, Error)]
pub enum EngineError {
    #[error(transparent)]
    Dictionary(#[from] DictionaryError),

    /// Padrão de denylist que não compila.
    #[error("padrão de contexto inválido: {0}")]
    Pattern(#[from] regex::Error),

    /// Dois dicionários fornecidos para o mesmo domínio.
    #[error("domínio '{0}' registrado mais de uma vez")]
    DuplicateDomain(Domain),
}
