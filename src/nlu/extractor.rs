//! # Extrator de Entidades — Cidades
//!
//! O [`CityExtractor`] encontra o nome de uma cidade ucraniana em pedidos
//! de tempo/notícias e devolve sempre a forma **canônica ucraniana**.
//!
//! ## Estratégia (2 etapas)
//!
//! | Etapa | Regra | Exemplo |
//! |-------|-------|---------|
//! | 1 | Contenção exata de qualquer variante (caso, russo, latim) | "киеві" → Київ |
//! | 2 | Fuzzy sobre janelas de tokens, só cidades com nome ≥ 4 chars | "харкві" → Харків |
//!
//! Na etapa 1 vence a variante que aparece **mais cedo** no texto (empate:
//! a mais longa). Na etapa 2 vence a maior similaridade, com threshold
//! mais estrito (0.85) que o das intenções, porque um falso positivo aqui
//! muda a resposta inteira ("погода в Дніпрі" vs "погода в Ірпені").

use crate::config::EntityConfig;

use super::lexicon::cities::CITIES;
use super::phrase::Phrase;
use super::similarity::SimilarityScorer;
use super::text::Utterance;

/// Cidade com variantes normalizadas.
#[derive(Clone, Debug)]
struct City {
    canonical: &'static str,
    variants: Vec<Phrase>,
    fuzzy_eligible: bool,
}

/// Extrator de nomes de cidades.
#[derive(Clone, Debug)]
pub struct CityExtractor {
    cities: Vec<City>,
    scorer: SimilarityScorer,
    config: EntityConfig,
}

impl CityExtractor {
    /// Constrói a partir da tabela embutida de cidades.
    pub fn new(config: EntityConfig, scorer: SimilarityScorer) -> Self {
        let cities = CITIES
            .iter()
            .map(|&(canonical, variants)| {
                let mut phrases = vec![Phrase::new(canonical)];
                phrases.extend(variants.iter().map(|v| Phrase::new(v)));
                phrases.retain(|p| !p.is_empty());
                City {
                    canonical,
                    variants: phrases,
                    fuzzy_eligible: canonical.chars().count() >= config.min_fuzzy_chars,
                }
            })
            .collect();
        Self {
            cities,
            scorer,
            config,
        }
    }

    /// Quantidade de cidades conhecidas.
    pub fn len(&self) -> usize {
        self.cities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }

    /// Extrai a cidade de um texto bruto.
    pub fn extract_city(&self, text: &str, max_chars: usize) -> Option<String> {
        self.extract(&Utterance::new(text, max_chars))
    }

    /// Extrai a cidade de uma mensagem já normalizada.
    pub fn extract(&self, utterance: &Utterance) -> Option<String> {
        if utterance.is_blank() {
            return None;
        }
        self.exact(utterance)
            .or_else(|| self.fuzzy(utterance))
            .map(str::to_string)
    }

    /// Etapa 1: variante contida no texto, a mais cedo primeiro.
    fn exact(&self, utterance: &Utterance) -> Option<&'static str> {
        let mut best: Option<(usize, usize, &'static str)> = None;
        for city in &self.cities {
            for variant in &city.variants {
                let Some(pos) = utterance.find_phrase(variant.text()) else {
                    continue;
                };
                let len = variant.char_len();
                let better = match best {
                    None => true,
                    Some((best_pos, best_len, _)) => pos < best_pos || (pos == best_pos && len > best_len),
                };
                if better {
                    best = Some((pos, len, city.canonical));
                }
            }
        }
        best.map(|(_, _, canonical)| canonical)
    }

    /// Etapa 2: janelas de tokens comparadas a cada variante.
    fn fuzzy(&self, utterance: &Utterance) -> Option<&'static str> {
        let tokens = utterance.tokens();
        let mut best: Option<(f32, &'static str)> = None;

        for city in self.cities.iter().filter(|c| c.fuzzy_eligible) {
            for variant in &city.variants {
                let size = variant.words().len();
                if size == 0 || size > tokens.len() {
                    continue;
                }
                for window in tokens.windows(size) {
                    let sim = self.scorer.similarity(variant.text(), &window.join(" "));
                    if sim >= self.config.fuzzy_threshold && best.map_or(true, |(s, _)| sim > s) {
                        best = Some((sim, city.canonical));
                    }
                }
            }
        }

        if let Some((score, city)) = best {
            tracing::debug!(city, score, "Cidade extraída por similaridade");
        }
        best.map(|(_, canonical)| canonical)
    }
}
