//! # KeywordEntry — Linha de um Dicionário de Domínio
//!
//! Cada entrada associa uma **forma canônica** a variações registradas,
//! typos conhecidos (só power words) e metadados de domínio.
//!
//! ```text
//! KeywordEntry
//!   ├── canonical_form: "капець"
//!   ├── variations:     ["капєць", "капец", "капут"]
//!   ├── known_typos:    ["капкць", "капеуь", "капецб"]
//!   ├── category:       Negative
//!   └── tag:            Intensity(High)
//! ```
//!
//! Os dicionários embutidos são tabelas estáticas de [`RawEntry`]
//! (apenas `&'static str`), convertidas em [`KeywordEntry`] na construção
//! do motor. Dicionários externos chegam em JSON já como `KeywordEntry`.

use serde::{Deserialize, Serialize};

/// Categoria semântica de uma entrada.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// Pergunta sobre o que o assistente sabe fazer.
    Capabilities,
    /// Pedido de ajuda / lista de comandos.
    Help,
    /// Comando informativo (notícias, tempo, assinatura).
    Command,
    Positive,
    Negative,
    Surprise,
    Anger,
    Sadness,
}

/// Intensidade emocional de uma power word.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Intensity {
    Low,
    Medium,
    High,
}

/// Metadado específico do domínio.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntryTag {
    /// Sem metadado adicional.
    #[default]
    Plain,
    /// Intensidade (power words).
    Intensity(Intensity),
}

/// Entrada de dicionário, forma "dono" (strings alocadas).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct KeywordEntry {
    /// Grafia autoritativa, reportada como `matched_keyword`.
    pub canonical_form: String,
    /// Grafias/flexões alternativas tratadas como evidência quase certa.
    #[serde(default)]
    pub variations: Vec<String>,
    /// Erros comuns registrados (apenas no domínio de power words).
    #[serde(default)]
    pub known_typos: Vec<String>,
    pub category: Category,
    #[serde(default)]
    pub tag: EntryTag,
}

impl KeywordEntry {
    pub fn new(canonical_form: impl Into<String>, category: Category) -> Self {
        Self {
            canonical_form: canonical_form.into(),
            variations: Vec::new(),
            known_typos: Vec::new(),
            category,
            tag: EntryTag::Plain,
        }
    }

    pub fn with_variations(mut self, variations: &[&str]) -> Self {
        self.variations = variations.iter().map(|v| v.to_string()).collect();
        self
    }

    pub fn with_typos(mut self, typos: &[&str]) -> Self {
        self.known_typos = typos.iter().map(|v| v.to_string()).collect();
        self
    }

    pub fn with_tag(mut self, tag: EntryTag) -> Self {
        self.tag = tag;
        self
    }
}

/// Entrada estática usada nas tabelas embutidas (`nlu::lexicon`).
///
/// Só contém `&'static str` para poder viver em `const` arrays.
pub struct RawEntry {
    pub canonical: &'static str,
    pub variations: &'static [&'static str],
    pub typos: &'static [&'static str],
    pub category: Category,
    pub tag: EntryTag,
}

impl RawEntry {
    /// Converte para a forma alocada consumida pelo [`Dictionary`](crate::nlu::dictionary::Dictionary).
    pub fn to_entry(&self) -> KeywordEntry {
        KeywordEntry::new(self.canonical, self.category)
            .with_variations(self.variations)
            .with_typos(self.typos)
            .with_tag(self.tag)
    }
}
