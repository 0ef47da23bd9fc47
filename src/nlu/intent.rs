//! # Reconhecedor de Intenção por Domínio
//!
//! Um único [`IntentRecognizer`] genérico, instanciado uma vez por
//! [`Domain`] com o dicionário e a política ([`DomainConfig`]) daquele
//! domínio. Capability, news, weather, subscribe, unsubscribe e power words
//! diferem apenas em dados e configuração.
//!
//! ## Fluxo de `recognize()`
//!
//! ```text
//! Utterance
//!   ├── 0. (power words) colapsa letras repetidas: "вааау" → "вау"
//!   ├── 1. Curto demais (< min_text_chars)? → None
//!   ├── 2. Denylist? → None
//!   ├── 3. Para cada entrada do dicionário, a primeira evidência que valer:
//!   │   ├── canônica contida        → Exact     1.00
//!   │   ├── variação contida        → Variation 0.95
//!   │   ├── typo contido            → Typo      0.90
//!   │   └── PhraseMatcher (canônica + variações) → Fuzzy ≤ 0.99
//!   ├── 4. Melhor entrada global (empate → canônica mais longa → ordem)
//!   ├── 5. < threshold do domínio? → None
//!   ├── 6. ContextValidator pode vetar match fuzzy
//!   └── 7. (weather/news) CityExtractor → extracted_entity
//! ```

use std::sync::Arc;

use crate::config::DomainConfig;
use crate::core::{Domain, MatchCandidate, MatchResult, MatchSource};

use super::context::ContextValidator;
use super::dictionary::{Dictionary, PreparedEntry};
use super::extractor::CityExtractor;
use super::phrase::PhraseMatcher;
use super::text::Utterance;

/// Limite padrão de caracteres examinados por mensagem.
const DEFAULT_MAX_INPUT_CHARS: usize = 1024;

/// Reconhecedor genérico, parametrizado por dicionário + política.
///
/// Imutável após a construção; `Send + Sync`.
#[derive(Clone, Debug)]
pub struct IntentRecognizer {
    dictionary: Dictionary,
    config: DomainConfig,
    matcher: PhraseMatcher,
    validator: Arc<ContextValidator>,
    cities: Option<Arc<CityExtractor>>,
    max_input_chars: usize,
}

impl IntentRecognizer {
    pub fn new(
        dictionary: Dictionary,
        config: DomainConfig,
        matcher: PhraseMatcher,
        validator: Arc<ContextValidator>,
    ) -> Self {
        Self {
            dictionary,
            config,
            matcher,
            validator,
            cities: None,
            max_input_chars: DEFAULT_MAX_INPUT_CHARS,
        }
    }

    /// Habilita extração de cidade (só tem efeito se `extract_city` estiver ligado).
    pub fn with_cities(mut self, cities: Arc<CityExtractor>) -> Self {
        self.cities = Some(cities);
        self
    }

    pub fn with_max_input_chars(mut self, max_input_chars: usize) -> Self {
        self.max_input_chars = max_input_chars;
        self
    }

    pub fn domain(&self) -> Domain {
        self.dictionary.domain()
    }

    pub fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    pub fn config(&self) -> &DomainConfig {
        &self.config
    }

    /// Reconhece a intenção deste domínio em um texto bruto.
    pub fn recognize(&self, text: &str) -> Option<MatchResult> {
        self.recognize_utterance(&Utterance::new(text, self.max_input_chars))
    }

    /// Todos os candidatos com confiança > 0, do mais forte ao mais fraco.
    ///
    /// Não aplica threshold nem validador; útil para depuração de dicionários.
    pub fn candidates(&self, text: &str) -> Vec<MatchCandidate> {
        let utterance = Utterance::new(text, self.max_input_chars);
        let squeezed;
        let working = if self.config.squeeze_repeats {
            squeezed = utterance.squeezed();
            &squeezed
        } else {
            &utterance
        };

        let mut candidates: Vec<MatchCandidate> = self
            .dictionary
            .entries()
            .iter()
            .map(|entry| self.score_entry(entry, working))
            .filter(|c| c.confidence > 0.0)
            .collect();
        candidates.sort_by(|a, b| b.confidence.total_cmp(&a.confidence));
        candidates
    }

    /// Reconhece a intenção em uma mensagem já normalizada.
    pub fn recognize_utterance(&self, utterance: &Utterance) -> Option<MatchResult> {
        let domain = self.domain();
        let squeezed;
        let working = if self.config.squeeze_repeats {
            squeezed = utterance.squeezed();
            &squeezed
        } else {
            utterance
        };

        if working.char_len() < self.config.min_text_chars {
            tracing::debug!(%domain, chars = working.char_len(), "Texto curto demais");
            return None;
        }
        if self.validator.is_denied(working) {
            tracing::debug!(%domain, "Texto na denylist");
            return None;
        }

        let (entry, candidate) = self.best_entry(working)?;

        if candidate.confidence < self.config.threshold {
            tracing::debug!(
                %domain,
                keyword = %candidate.matched_canonical_form,
                confidence = candidate.confidence,
                threshold = self.config.threshold,
                "Abaixo do threshold"
            );
            return None;
        }
        if !self.validator.accepts(working, domain, &candidate) {
            tracing::debug!(
                %domain,
                keyword = %candidate.matched_canonical_form,
                "Match fuzzy vetado por falta de contexto"
            );
            return None;
        }

        let extracted_entity = match (&self.cities, self.config.extract_city) {
            (Some(cities), true) => cities.extract(utterance),
            _ => None,
        };

        tracing::debug!(
            %domain,
            keyword = %candidate.matched_canonical_form,
            confidence = candidate.confidence,
            source = ?candidate.source,
            entity = ?extracted_entity,
            "Intenção reconhecida"
        );

        Some(MatchResult {
            domain,
            confidence: candidate.confidence,
            matched_keyword: candidate.matched_canonical_form,
            source: candidate.source,
            category: entry.entry().category,
            tag: entry.entry().tag,
            language: utterance.language().unwrap_or_else(|| entry.language()),
            extracted_entity,
            original_text: utterance.original().to_string(),
        })
    }

    /// Melhor entrada do dicionário para a mensagem.
    fn best_entry<'a>(&'a self, utterance: &Utterance) -> Option<(&'a PreparedEntry, MatchCandidate)> {
        let mut best: Option<(&PreparedEntry, MatchCandidate)> = None;

        for entry in self.dictionary.entries() {
            let candidate = self.score_entry(entry, utterance);
            if candidate.confidence <= 0.0 {
                continue;
            }
            let better = match &best {
                None => true,
                Some((best_entry, best_candidate)) => {
                    outranks(&candidate, entry, best_candidate, best_entry)
                }
            };
            if better {
                best = Some((entry, candidate));
            }
        }
        best
    }

    /// Melhor evidência de uma entrada.
    fn score_entry(&self, entry: &PreparedEntry, utterance: &Utterance) -> MatchCandidate {
        let keyword = entry.keyword().to_string();

        if utterance.contains_phrase(entry.canonical().text()) {
            return MatchCandidate {
                matched_canonical_form: keyword,
                confidence: 1.0,
                source: MatchSource::Exact,
            };
        }

        let registered = if entry.variations().iter().any(|v| utterance.contains_phrase(v.text())) {
            Some((self.config.variation_confidence, MatchSource::Variation))
        } else if entry.typos().iter().any(|t| utterance.contains_phrase(t.text())) {
            Some((self.config.typo_confidence, MatchSource::Typo))
        } else {
            None
        };

        let (confidence, source) = registered.unwrap_or_else(|| {
            // Fuzzy sobre uma variação nunca vale mais que a própria variação.
            let via_variation = entry
                .variations()
                .iter()
                .map(|phrase| self.matcher.score(phrase, utterance))
                .fold(0.0f32, f32::max)
                .min(self.config.variation_confidence);
            let fuzzy = self.matcher.score(entry.canonical(), utterance).max(via_variation);
            (fuzzy, MatchSource::Fuzzy)
        });

        MatchCandidate {
            matched_canonical_form: keyword,
            confidence,
            source,
        }
    }
}

/// Ordem entre candidatos de entradas diferentes.
///
/// Maior confiança → evidência registrada → canônica mais longa.
/// Empate total mantém a entrada declarada primeiro.
fn outranks(
    candidate: &MatchCandidate,
    entry: &PreparedEntry,
    best: &MatchCandidate,
    best_entry: &PreparedEntry,
) -> bool {
    if candidate.confidence != best.confidence {
        return candidate.confidence > best.confidence;
    }
    let registered = candidate.source.is_registered();
    if registered != best.source.is_registered() {
        return registered;
    }
    entry.canonical().char_len() > best_entry.canonical().char_len()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{EngineConfig, PhraseConfig};
    use crate::core::{Category, EntryTag, Intensity, KeywordEntry, Language};
    use crate::nlu::similarity::SimilarityScorer;

    fn recognizer(domain: Domain) -> IntentRecognizer {
        let config = EngineConfig::default();
        let matcher = PhraseMatcher::new(SimilarityScorer::new(config.scorer.clone()), config.phrase.clone());
        let validator = Arc::new(ContextValidator::new().unwrap());
        let cities = Arc::new(CityExtractor::new(config.entity.clone(), matcher.scorer().clone()));
        IntentRecognizer::new(
            Dictionary::builtin(domain).unwrap(),
            config.domains.get(domain).clone(),
            matcher,
            validator,
        )
        .with_cities(cities)
    }

    #[test]
    fn canonical_containment_is_exact() {
        let result = recognizer(Domain::Capability).recognize("Що ти можеш?").unwrap();
        assert_eq!(result.confidence, 1.0);
        assert_eq!(result.source, MatchSource::Exact);
        assert_eq!(result.matched_keyword, "що ти можеш");
        assert_eq!(result.original_text, "Що ти можеш?");
    }

    #[test]
    fn variation_and_typo_confidences() {
        let news = recognizer(Domain::News).recognize("що нового?").unwrap();
        assert_eq!(news.source, MatchSource::Variation);
        assert_eq!(news.confidence, 0.95);
        assert_eq!(news.matched_keyword, "новини");

        let power = recognizer(Domain::PowerWord).recognize("капкць").unwrap();
        assert_eq!(power.source, MatchSource::Typo);
        assert_eq!(power.confidence, 0.9);
        assert_eq!(power.matched_keyword, "капець");
        assert_eq!(power.tag, EntryTag::Intensity(Intensity::High));
        assert_eq!(power.category, Category::Negative);
    }

    #[test]
    fn fuzzy_match_with_typos() {
        let result = recognizer(Domain::Capability).recognize("шо ти мозеш").unwrap();
        assert_eq!(result.source, MatchSource::Fuzzy);
        assert!(result.confidence >= 0.85 && result.confidence < 1.0);
        assert_eq!(result.matched_keyword, "що ти можеш");
        assert_eq!(result.language, Language::Uk);
    }

    #[test]
    fn short_and_blank_text_is_rejected() {
        let r = recognizer(Domain::Capability);
        assert!(r.recognize("").is_none());
        assert!(r.recognize("   ").is_none());
        assert!(r.recognize("ти").is_none());
    }

    #[test]
    fn repeated_letters_are_squeezed_for_power_words() {
        let result = recognizer(Domain::PowerWord).recognize("Вааау!!!").unwrap();
        assert_eq!(result.matched_keyword, "вау");
        assert_eq!(result.confidence, 1.0);
    }

    #[test]
    fn weather_extracts_city() {
        let result = recognizer(Domain::Weather).recognize("погода в киеві").unwrap();
        assert_eq!(result.extracted_entity.as_deref(), Some("Київ"));
        let capability = recognizer(Domain::Capability).recognize("що ти можеш у Києві").unwrap();
        assert_eq!(capability.extracted_entity, None);
    }

    #[test]
    fn fuzzy_without_context_is_vetoed() {
        // "команди" fuzzy sem nenhum radical de contexto
        let r = recognizer(Domain::Capability);
        assert!(r.recognize("комонди").is_none());
        assert!(r.recognize("комонди?").is_some());
    }

    #[test]
    fn fuzzy_via_variation_is_capped() {
        // Só "sign" de "sign up" é significativo
        let candidates = recognizer(Domain::Subscribe).candidates("sign the paper please");
        let top = &candidates[0];
        assert_eq!(top.source, MatchSource::Fuzzy);
        assert!(top.confidence <= 0.95, "confidence = {}", top.confidence);
    }

    #[test]
    fn command_verb_alone_is_not_context() {
        let r = recognizer(Domain::Subscribe);
        assert!(r.recognize("sign the paper please").is_none());
        assert!(r.recognize("підпишіть документ").is_none());
        assert!(r.recognize("підпіска на ранкові новини").is_some());
        let r = recognizer(Domain::Unsubscribe);
        assert!(r.recognize("відпишіть лист").is_none());
    }

    #[test]
    fn longer_canonical_wins_exact_ties() {
        let result = recognizer(Domain::Subscribe).recognize("підписка на новини").unwrap();
        assert_eq!(result.matched_keyword, "підписка на новини");
        assert_eq!(result.confidence, 1.0);
    }

    #[test]
    fn english_result_language() {
        let result = recognizer(Domain::Weather).recognize("weather in Kyiv please").unwrap();
        assert_eq!(result.language, Language::En);
        assert_eq!(result.extracted_entity.as_deref(), Some("Київ"));
    }

    #[test]
    fn candidates_are_sorted() {
        let candidates = recognizer(Domain::Subscribe).candidates("підпіска на ранкові новини");
        assert!(!candidates.is_empty());
        assert_eq!(candidates[0].matched_canonical_form, "підписка на новини");
        assert!(candidates.windows(2).all(|w| w[0].confidence >= w[1].confidence));
    }

    #[test]
    fn threshold_is_per_domain() {
        let scorer = SimilarityScorer::default();
        let matcher = PhraseMatcher::new(scorer, PhraseConfig::default());
        let dict = Dictionary::new(Domain::News, vec![KeywordEntry::new("новини", Category::Command)]).unwrap();
        let mut config = crate::config::DomainConfig::for_domain(Domain::News);
        let validator = Arc::new(ContextValidator::new().unwrap());

        // "новени": 1 troca em 6 → 0.833
        let lenient = IntentRecognizer::new(dict.clone(), config.clone(), matcher.clone(), validator.clone());
        assert!(lenient.recognize("новени").is_some());

        config.threshold = 0.9;
        let strict = IntentRecognizer::new(dict, config, matcher, validator);
        assert!(strict.recognize("новени").is_none());
    }
}
