//! # Dictionary — Tabela Imutável de um Domínio
//!
//! Um [`Dictionary`] é construído **uma vez** na inicialização do motor e
//! nunca mais muda. A construção normaliza todas as frases e valida as
//! invariantes; um dicionário inválido falha imediatamente.
//!
//! ## Invariantes Validadas
//!
//! | Regra | Erro |
//! |-------|------|
//! | Pelo menos uma entrada | [`DictionaryError::Empty`] |
//! | Forma canônica não vazia após normalização | [`DictionaryError::EmptyCanonical`] |
//! | Forma canônica única (após normalização) | [`DictionaryError::DuplicateCanonical`] |
//! | Variações e typos não vazios | [`DictionaryError::EmptyVariation`] |
//! | Typos apenas em `PowerWord` | [`DictionaryError::TyposNotAllowed`] |

use std::collections::HashSet;

use crate::core::{Domain, KeywordEntry, Language, RawEntry};
use crate::error::DictionaryError;

use super::lexicon;
use super::phrase::Phrase;

/// Entrada com todas as frases já normalizadas.
#[derive(Clone, Debug)]
pub struct PreparedEntry {
    entry: KeywordEntry,
    canonical: Phrase,
    variations: Vec<Phrase>,
    typos: Vec<Phrase>,
    language: Language,
}

impl PreparedEntry {
    /// Entrada original, como declarada.
    pub fn entry(&self) -> &KeywordEntry {
        &self.entry
    }

    /// Grafia reportada em `MatchResult::matched_keyword`.
    pub fn keyword(&self) -> &str {
        self.entry.canonical_form.trim()
    }

    pub fn canonical(&self) -> &Phrase {
        &self.canonical
    }

    pub fn variations(&self) -> &[Phrase] {
        &self.variations
    }

    pub fn typos(&self) -> &[Phrase] {
        &self.typos
    }

    /// Idioma da forma canônica.
    pub fn language(&self) -> Language {
        self.language
    }
}

/// Coleção ordenada e validada de entradas de um domínio.
#[derive(Clone, Debug)]
pub struct Dictionary {
    domain: Domain,
    entries: Vec<PreparedEntry>,
}

impl Dictionary {
    /// Valida e normaliza as entradas.
    pub fn new(domain: Domain, entries: Vec<KeywordEntry>) -> Result<Self, DictionaryError> {
        if entries.is_empty() {
            return Err(DictionaryError::Empty { domain });
        }

        let mut seen = HashSet::new();
        let mut prepared = Vec::with_capacity(entries.len());

        for (index, entry) in entries.into_iter().enumerate() {
            let canonical = Phrase::new(&entry.canonical_form);
            if canonical.is_empty() {
                return Err(DictionaryError::EmptyCanonical { domain, index });
            }
            if !seen.insert(canonical.text().to_string()) {
                return Err(DictionaryError::DuplicateCanonical {
                    domain,
                    canonical: entry.canonical_form.clone(),
                });
            }
            if !entry.known_typos.is_empty() && domain != Domain::PowerWord {
                return Err(DictionaryError::TyposNotAllowed {
                    domain,
                    canonical: entry.canonical_form.clone(),
                });
            }

            let variations = prepare_all(domain, &entry, &entry.variations)?;
            let typos = prepare_all(domain, &entry, &entry.known_typos)?;
            let language = Language::detect(canonical.text()).unwrap_or(Language::Uk);

            prepared.push(PreparedEntry {
                entry,
                canonical,
                variations,
                typos,
                language,
            });
        }

        tracing::debug!(domain = %domain, entries = prepared.len(), "Dicionário construído");
        Ok(Self {
            domain,
            entries: prepared,
        })
    }

    /// Constrói a partir de uma tabela estática.
    pub fn from_raw(domain: Domain, raw: &[RawEntry]) -> Result<Self, DictionaryError> {
        Self::new(domain, raw.iter().map(RawEntry::to_entry).collect())
    }

    /// Constrói a partir de um array JSON de [`KeywordEntry`].
    pub fn from_json(domain: Domain, json: &str) -> Result<Self, DictionaryError> {
        let entries: Vec<KeywordEntry> =
            serde_json::from_str(json).map_err(|source| DictionaryError::Json { domain, source })?;
        Self::new(domain, entries)
    }

    /// Dicionário embutido do domínio.
    pub fn builtin(domain: Domain) -> Result<Self, DictionaryError> {
        Self::from_raw(domain, lexicon::entries(domain))
    }

    pub fn domain(&self) -> Domain {
        self.domain
    }

    pub fn entries(&self) -> &[PreparedEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Formas canônicas, na ordem de declaração.
    pub fn canonical_forms(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(PreparedEntry::keyword)
    }
}

fn prepare_all(
    domain: Domain,
    entry: &KeywordEntry,
    raw: &[String],
) -> Result<Vec<Phrase>, DictionaryError> {
    raw.iter()
        .map(|text| {
            let phrase = Phrase::new(text);
            if phrase.is_empty() {
                Err(DictionaryError::EmptyVariation {
                    domain,
                    canonical: entry.canonical_form.clone(),
                })
            } else {
                Ok(phrase)
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Category;

    #[test]
    fn builtin_dictionaries_are_valid() {
        for domain in Domain::ALL {
            let dict = Dictionary::builtin(domain).unwrap();
            assert!(!dict.is_empty(), "{domain}");
            assert_eq!(dict.domain(), domain);
        }
    }

    #[test]
    fn normalizes_phrases() {
        let entry = KeywordEntry::new(" Погода ", Category::Command).with_variations(&["Яка ПОГОДА?"]);
        let dict = Dictionary::new(Domain::Weather, vec![entry]).unwrap();
        let prepared = &dict.entries()[0];
        assert_eq!(prepared.keyword(), "Погода");
        assert_eq!(prepared.canonical().text(), "погода");
        assert_eq!(prepared.variations()[0].text(), "яка погода");
        assert_eq!(prepared.language(), Language::Uk);
    }

    #[test]
    fn rejects_empty_dictionary() {
        let err = Dictionary::new(Domain::News, vec![]).unwrap_err();
        assert!(matches!(err, DictionaryError::Empty { .. }));
    }

    #[test]
    fn rejects_empty_canonical() {
        let entries = vec![
            KeywordEntry::new("новини", Category::Command),
            KeywordEntry::new("  ?! ", Category::Command),
        ];
        let err = Dictionary::new(Domain::News, entries).unwrap_err();
        assert!(matches!(err, DictionaryError::EmptyCanonical { index: 1, .. }));
    }

    #[test]
    fn rejects_duplicates_after_normalization() {
        let entries = vec![
            KeywordEntry::new("Новини", Category::Command),
            KeywordEntry::new("новини!", Category::Command),
        ];
        let err = Dictionary::new(Domain::News, entries).unwrap_err();
        assert!(matches!(err, DictionaryError::DuplicateCanonical { .. }));
    }

    #[test]
    fn rejects_empty_variation() {
        let entry = KeywordEntry::new("новини", Category::Command).with_variations(&["..."]);
        let err = Dictionary::new(Domain::News, vec![entry]).unwrap_err();
        assert!(matches!(err, DictionaryError::EmptyVariation { .. }));
    }

    #[test]
    fn typos_only_for_power_words() {
        let entry = KeywordEntry::new("новини", Category::Command).with_typos(&["нвоини"]);
        let err = Dictionary::new(Domain::News, vec![entry.clone()]).unwrap_err();
        assert!(matches!(err, DictionaryError::TyposNotAllowed { .. }));
        assert!(Dictionary::new(Domain::PowerWord, vec![entry]).is_ok());
    }

    #[test]
    fn json_errors_carry_domain() {
        let err = Dictionary::from_json(Domain::Weather, "[{").unwrap_err();
        assert!(err.to_string().contains("weather"));
        let dict = Dictionary::from_json(
            Domain::Weather,
            r#"[{ "canonical_form": "weather", "category": "command" }]"#,
        )
        .unwrap();
        assert_eq!(dict.canonical_forms().collect::<Vec<_>>(), vec!["weather"]);
        assert_eq!(dict.entries()[0].language(), Language::En);
    }
}
