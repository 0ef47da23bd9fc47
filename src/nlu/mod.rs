//! # Motor de Reconhecimento de Intenção
//!
//! Este módulo monta todas as peças do reconhecimento. O [`IntentEngine`]
//! é o ponto de entrada: recebe um texto bruto e devolve um resultado
//! estruturado, sem nunca falhar.
//!
//! ## Fluxo de Processamento
//!
//! ```text
//! Texto bruto
//!   ├── 1. Utterance (trunca, NFC, lowercase, tokens)
//!   ├── 2. IntentRecognizer × 6 domínios (mesma Utterance)
//!   │   ├── denylist / tamanho mínimo
//!   │   ├── Dictionary → exact / variation / typo / fuzzy
//!   │   ├── threshold do domínio + veto de contexto
//!   │   └── CityExtractor (weather/news)
//!   └── 3. PriorityResolver → vencedor único (ou nenhum)
//! ```
//!
//! ## Sub-módulos
//!
//! | Módulo | Responsabilidade |
//! |--------|-----------------|
//! | [`text`] | Normalização e tokenização (`Utterance`) |
//! | [`similarity`] | Levenshtein normalizado com podas de custo |
//! | [`phrase`] | Matching fuzzy de frases palavra a palavra |
//! | [`dictionary`] | Dicionários validados e imutáveis |
//! | [`lexicon`] | Tabelas estáticas embutidas |
//! | [`context`] | Denylist / allowlist (falsos positivos) |
//! | [`extractor`] | Extração de cidades |
//! | [`intent`] | Recognizer genérico por domínio |
//! | [`resolver`] | Desempate entre domínios |
//!
//! ## Concorrência
//!
//! O motor é imutável após a construção: `Send + Sync`, compartilhado via
//! `Arc<IntentEngine>` sem locks. [`IntentEngine::recognize_batch()`]
//! distribui textos entre threads com `rayon`.

pub mod context;
pub mod dictionary;
pub mod extractor;
pub mod intent;
pub mod lexicon;
pub mod phrase;
pub mod resolver;
pub mod similarity;
pub mod text;

use std::collections::HashSet;
use std::sync::Arc;

use rayon::prelude::*;
use serde::Serialize;

use crate::config::EngineConfig;
use crate::core::{Domain, MatchResult};
use crate::error::EngineError;

use context::ContextValidator;
use dictionary::Dictionary;
use extractor::CityExtractor;
use intent::IntentRecognizer;
use phrase::PhraseMatcher;
use resolver::PriorityResolver;
use similarity::SimilarityScorer;
use text::Utterance;

/// Resultado completo da análise de uma mensagem.
#[derive(Clone, Debug, Serialize)]
pub struct Analysis {
    /// Texto recebido, sem alterações.
    pub text: String,
    /// Resultados aceitos por domínio (no máximo um por domínio).
    pub matches: Vec<MatchResult>,
    /// Vencedor escolhido pelo resolver.
    pub winner: Option<MatchResult>,
}

impl Analysis {
    /// Confiança do vencedor; `0.0` quando não há match.
    pub fn confidence(&self) -> f32 {
        self.winner.as_ref().map_or(0.0, |w| w.confidence)
    }

    pub fn domain(&self) -> Option<Domain> {
        self.winner.as_ref().map(|w| w.domain)
    }

    pub fn is_match(&self) -> bool {
        self.winner.is_some()
    }
}

/// Motor completo: um recognizer por domínio + resolver.
#[derive(Debug)]
pub struct IntentEngine {
    recognizers: Vec<IntentRecognizer>,
    resolver: PriorityResolver,
    cities: Arc<CityExtractor>,
    max_input_chars: usize,
}

impl IntentEngine {
    /// Constrói o motor com os dicionários embutidos.
    pub fn new(config: &EngineConfig) -> Result<Self, EngineError> {
        let dictionaries = Domain::ALL
            .into_iter()
            .map(Dictionary::builtin)
            .collect::<Result<Vec<_>, _>>()?;
        Self::with_dictionaries(config, dictionaries)
    }

    /// Constrói o motor com dicionários fornecidos (um por domínio).
    ///
    /// Domínios ausentes simplesmente não são reconhecidos.
    ///
    /// # Erros
    ///
    /// - [`EngineError::DuplicateDomain`] se dois dicionários forem do mesmo domínio
    /// - [`EngineError::Pattern`] se a denylist não compilar
    pub fn with_dictionaries(
        config: &EngineConfig,
        dictionaries: Vec<Dictionary>,
    ) -> Result<Self, EngineError> {
        let mut seen = HashSet::new();
        for dictionary in &dictionaries {
            if !seen.insert(dictionary.domain()) {
                return Err(EngineError::DuplicateDomain(dictionary.domain()));
            }
        }

        let scorer = SimilarityScorer::new(config.scorer.clone());
        let matcher = PhraseMatcher::new(scorer.clone(), config.phrase.clone());
        let validator = Arc::new(ContextValidator::new()?);
        let cities = Arc::new(CityExtractor::new(config.entity.clone(), scorer));

        let mut recognizers: Vec<IntentRecognizer> = dictionaries
            .into_iter()
            .map(|dictionary| {
                let policy = config.domains.get(dictionary.domain()).clone();
                IntentRecognizer::new(dictionary, policy, matcher.clone(), validator.clone())
                    .with_cities(cities.clone())
                    .with_max_input_chars(config.max_input_chars)
            })
            .collect();
        recognizers.sort_by_key(|r| r.domain());

        tracing::info!(
            domains = recognizers.len(),
            entries = recognizers.iter().map(|r| r.dictionary().len()).sum::<usize>(),
            cities = cities.len(),
            "Motor de intenção construído"
        );

        Ok(Self {
            recognizers,
            resolver: PriorityResolver::new(config.resolver.clone(), config.domains.clone()),
            cities,
            max_input_chars: config.max_input_chars,
        })
    }

    /// Recognizer de um domínio (se houver dicionário para ele).
    pub fn recognizer(&self, domain: Domain) -> Option<&IntentRecognizer> {
        self.recognizers.iter().find(|r| r.domain() == domain)
    }

    /// Recognizers na ordem de [`Domain::ALL`].
    pub fn recognizers(&self) -> &[IntentRecognizer] {
        &self.recognizers
    }

    /// Reconhece um único domínio, sem resolver.
    pub fn recognize(&self, domain: Domain, text: &str) -> Option<MatchResult> {
        self.recognizer(domain)?.recognize(text)
    }

    /// Roda todos os domínios e resolve o vencedor.
    pub fn analyze(&self, text: &str) -> Analysis {
        let utterance = Utterance::new(text, self.max_input_chars);
        let matches: Vec<MatchResult> = self
            .recognizers
            .iter()
            .filter_map(|r| r.recognize_utterance(&utterance))
            .collect();
        let winner = self.resolver.resolve(&matches, &utterance);

        tracing::debug!(
            matches = matches.len(),
            winner = ?winner.as_ref().map(|w| w.domain),
            "Mensagem analisada"
        );

        Analysis {
            text: text.to_string(),
            matches,
            winner,
        }
    }

    /// Analisa vários textos em paralelo (rayon), preservando a ordem.
    pub fn recognize_batch(&self, texts: &[String]) -> Vec<Analysis> {
        texts.par_iter().map(|text| self.analyze(text)).collect()
    }

    /// Cidade mencionada no texto, independente de intenção.
    pub fn extract_city(&self, text: &str) -> Option<String> {
        self.cities.extract_city(text, self.max_input_chars)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Category, KeywordEntry, Language, MatchSource};

    fn engine() -> IntentEngine {
        IntentEngine::new(&EngineConfig::default()).unwrap()
    }

    // ─── Cenários de referência ──────────────────────────────

    #[test]
    fn scenario_exact_capability() {
        let analysis = engine().analyze("що ти можеш");
        let winner = analysis.winner.unwrap();
        assert_eq!(winner.domain, Domain::Capability);
        assert_eq!(winner.confidence, 1.0);
        assert_eq!(winner.matched_keyword, "що ти можеш");
    }

    #[test]
    fn scenario_capability_with_typos() {
        let winner = engine().analyze("шо ти мозеш").winner.unwrap();
        assert_eq!(winner.domain, Domain::Capability);
        assert!(winner.confidence >= 0.85, "confidence = {}", winner.confidence);
        assert_eq!(winner.language, Language::Uk);
    }

    #[test]
    fn scenario_subscribe_beats_news() {
        let analysis = engine().analyze("підпіска на ранкові новини");
        assert!(analysis.matches.iter().any(|m| m.domain == Domain::News));
        assert_eq!(analysis.domain(), Some(Domain::Subscribe));
    }

    #[test]
    fn scenario_gibberish_is_denied() {
        let analysis = engine().analyze("абракадабра хрінь можливості");
        assert!(analysis.matches.is_empty());
        assert!(!analysis.is_match());
    }

    #[test]
    fn scenario_weather_with_city() {
        let winner = engine().analyze("погода в киеві").winner.unwrap();
        assert_eq!(winner.domain, Domain::Weather);
        assert_eq!(winner.extracted_entity.as_deref(), Some("Київ"));
    }

    #[test]
    fn scenario_blank_input() {
        let e = engine();
        for text in ["", "  "] {
            let analysis = e.analyze(text);
            assert!(!analysis.is_match());
            assert_eq!(analysis.confidence(), 0.0);
        }
    }

    // ─── Propriedades ────────────────────────────────────────

    #[test]
    fn every_canonical_form_matches_itself() {
        let e = engine();
        for recognizer in e.recognizers() {
            for keyword in recognizer.dictionary().canonical_forms() {
                let result = e
                    .recognize(recognizer.domain(), keyword)
                    .unwrap_or_else(|| panic!("{} / {keyword}", recognizer.domain()));
                assert_eq!(result.confidence, 1.0, "{keyword}");
                assert_eq!(result.source, MatchSource::Exact);
            }
        }
    }

    #[test]
    fn denied_texts_never_match() {
        let e = engine();
        for text in ["привіт", "дякую!", "ok", "жарт", "...", "asdf новини", "lorem ipsum погода"] {
            assert!(e.analyze(text).matches.is_empty(), "{text}");
        }
    }

    #[test]
    fn raising_threshold_never_adds_matches() {
        let texts = ["шо ти мозеш", "пагода", "новени", "підпіска на новини", "капкць"];
        let lenient = engine();
        let mut config = EngineConfig::default();
        for domain in Domain::ALL {
            config.domains.get_mut(domain).threshold += 0.25;
        }
        let strict = IntentEngine::new(&config).unwrap();

        for text in texts {
            for domain in Domain::ALL {
                if strict.recognize(domain, text).is_some() {
                    assert!(lenient.recognize(domain, text).is_some(), "{domain} / {text}");
                }
            }
        }
        assert!(strict.recognize(Domain::Capability, "шо ти мозеш").is_none());
    }

    #[test]
    fn unsubscribe_is_not_taken_for_subscribe() {
        let e = engine();
        assert_eq!(e.analyze("відписатися").domain(), Some(Domain::Unsubscribe));
        assert_eq!(e.analyze("скасувати підписку на новини").domain(), Some(Domain::Unsubscribe));
        assert_eq!(e.analyze("unsubscribe from news").domain(), Some(Domain::Unsubscribe));
        assert_eq!(e.analyze("subscribe to news").domain(), Some(Domain::Subscribe));
    }

    #[test]
    fn signing_a_document_is_not_a_subscription() {
        let e = engine();
        for text in ["sign the paper please", "підпишіть документ"] {
            let analysis = e.analyze(text);
            assert!(
                analysis.matches.iter().all(|m| m.domain != Domain::Subscribe),
                "{text}: {:?}",
                analysis.matches
            );
        }
    }

    #[test]
    fn inflected_short_power_words_are_not_exact() {
        let e = engine();
        assert!(e.recognize(Domain::PowerWord, "класти речі").is_none());
        if let Some(result) = e.recognize(Domain::PowerWord, "бліни на сніданок") {
            assert_ne!(result.source, MatchSource::Exact);
            assert!(result.confidence < 1.0);
        }
    }

    #[test]
    fn confidence_stays_in_unit_interval() {
        let long_token = "погодааа".repeat(1_250);
        let mixed = "новиниnews🔥".repeat(900);
        let spaced = "а ".repeat(5_000);
        let corpus = [
            "",
            "🔥🔥🔥",
            "😀 👍 🎉",
            "?!?!...",
            "\u{0}\u{7}\t\n",
            "\u{301}\u{301}\u{301}",
            "שלום עולם",
            "ʼʼʼ '' ``",
            long_token.as_str(),
            mixed.as_str(),
            spaced.as_str(),
        ];
        let e = engine();
        for text in corpus {
            let analysis = e.analyze(text);
            for m in &analysis.matches {
                assert!((0.0..=1.0).contains(&m.confidence), "{}: {}", m.domain, m.confidence);
            }
            assert!((0.0..=1.0).contains(&analysis.confidence()));
        }
    }

    #[test]
    fn power_word_loses_to_command_in_near_tie() {
        let analysis = engine().analyze("новини супер");
        assert_eq!(analysis.matches.len(), 2);
        assert_eq!(analysis.domain(), Some(Domain::News));
    }

    #[test]
    fn power_word_alone() {
        let winner = engine().analyze("капець!!!").winner.unwrap();
        assert_eq!(winner.domain, Domain::PowerWord);
        assert_eq!(winner.category, Category::Negative);
    }

    #[test]
    fn extracts_city_without_intent() {
        assert_eq!(engine().extract_city("я зараз у Львові"), Some("Львів".to_string()));
    }

    #[test]
    fn batch_preserves_order() {
        let texts: Vec<String> = ["погода", "новини", "", "що ти можеш"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        let results = engine().recognize_batch(&texts);
        let domains: Vec<Option<Domain>> = results.iter().map(Analysis::domain).collect();
        assert_eq!(
            domains,
            vec![Some(Domain::Weather), Some(Domain::News), None, Some(Domain::Capability)]
        );
    }

    #[test]
    fn long_input_is_truncated_not_rejected() {
        let text = format!("погода {}", "а".repeat(10_000));
        let analysis = engine().analyze(&text);
        assert_eq!(analysis.domain(), Some(Domain::Weather));
    }

    #[test]
    fn duplicate_domains_are_rejected() {
        let news = || Dictionary::new(Domain::News, vec![KeywordEntry::new("новини", Category::Command)]).unwrap();
        let err = IntentEngine::with_dictionaries(&EngineConfig::default(), vec![news(), news()]).unwrap_err();
        assert!(matches!(err, EngineError::DuplicateDomain(Domain::News)));
    }

    #[test]
    fn missing_domains_are_skipped() {
        let news = Dictionary::new(Domain::News, vec![KeywordEntry::new("новини", Category::Command)]).unwrap();
        let e = IntentEngine::with_dictionaries(&EngineConfig::default(), vec![news]).unwrap();
        assert!(e.recognizer(Domain::Weather).is_none());
        assert!(e.recognize(Domain::Weather, "погода").is_none());
        assert_eq!(e.analyze("новини").domain(), Some(Domain::News));
    }

    #[test]
    fn engine_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<IntentEngine>();
    }
}
