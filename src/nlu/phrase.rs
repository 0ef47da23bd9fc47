//! # Matcher Fuzzy de Frases
//!
//! Mede o quanto uma frase do dicionário ("підписка на новини") está
//! presente em uma mensagem ruidosa ("підпіска на ранкові новини").
//!
//! ## Algoritmo
//!
//! ```text
//! frase:    [підписка] [на] [новини]        (palavras ≥ 3 chars: 2)
//! mensagem: [підпіска] [на] [ранкові] [новини]  (só os 12 primeiros tokens)
//!
//! 1. Para cada palavra significativa, melhor token da mensagem
//!      підписка → підпіска 0.875
//!      новини   → новини   1.000 (≥ 0.95: para a busca)
//! 2. Palavra "casada" se melhor ≥ 0.77
//! 3. confiança = (casadas / significativas) × média(casadas)
//!              = 2/2 × 0.9375 = 0.9375
//! 4. Se todas casaram: compara a frase inteira com cada janela de
//!    tokens do mesmo tamanho e fica com o maior valor
//! 5. Teto em 0.99 (1.0 é exclusivo de match exato)
//! ```
//!
//! O passo 4 permite que palavras curtas ("шо", "ти") contribuam depois
//! que a cobertura já foi estabelecida, sem nunca criar um match que o
//! alinhamento por palavra rejeitou.

use crate::config::PhraseConfig;

use super::similarity::SimilarityScorer;
use super::text::{normalize, Utterance};

/// Frase normalizada e pré-tokenizada.
#[derive(Clone, Debug, PartialEq)]
pub struct Phrase {
    text: String,
    words: Vec<String>,
}

impl Phrase {
    pub fn new(raw: &str) -> Self {
        let text = normalize(raw);
        let words = text.split(' ').filter(|w| !w.is_empty()).map(str::to_string).collect();
        Self { text, words }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }
}

/// Pontua frases contra mensagens normalizadas.
#[derive(Clone, Debug, Default)]
pub struct PhraseMatcher {
    scorer: SimilarityScorer,
    config: PhraseConfig,
}

impl PhraseMatcher {
    pub fn new(scorer: SimilarityScorer, config: PhraseConfig) -> Self {
        Self { scorer, config }
    }

    pub fn scorer(&self) -> &SimilarityScorer {
        &self.scorer
    }

    /// Confiança fuzzy em `[0, fuzzy_ceiling]` de `phrase` dentro de `input`.
    pub fn score(&self, phrase: &Phrase, input: &Utterance) -> f32 {
        if phrase.is_empty() || input.is_blank() {
            return 0.0;
        }
        let window = &input.tokens()[..input.tokens().len().min(self.config.token_window)];

        let significant: Vec<&String> = phrase
            .words()
            .iter()
            .filter(|w| w.chars().count() >= self.config.min_word_len)
            .collect();

        // Frase só de palavras curtas ("ой"): apenas comparação inteira
        if significant.is_empty() {
            return self.best_window(phrase, window).min(self.config.fuzzy_ceiling);
        }

        let mut matched = 0usize;
        let mut total = 0.0f32;
        for word in &significant {
            let best = self.best_token(word, window);
            if best >= self.config.word_accept {
                matched += 1;
                total += best;
            }
        }
        if matched == 0 {
            return 0.0;
        }

        let coverage = matched as f32 / significant.len() as f32;
        let mut confidence = coverage * (total / matched as f32);
        if matched == significant.len() {
            confidence = confidence.max(self.best_window(phrase, window));
        }
        confidence.min(self.config.fuzzy_ceiling)
    }

    /// Melhor similaridade de `word` contra os tokens, parando em quase-exato.
    fn best_token(&self, word: &str, tokens: &[String]) -> f32 {
        let mut best = 0.0f32;
        for token in tokens {
            let sim = self.scorer.similarity(word, token);
            if sim > best {
                best = sim;
                if best >= self.config.near_exact {
                    break;
                }
            }
        }
        best
    }

    /// Similaridade da frase inteira contra janelas de mesmo número de tokens.
    fn best_window(&self, phrase: &Phrase, tokens: &[String]) -> f32 {
        let size = phrase.words().len().min(tokens.len());
        if size == 0 {
            return 0.0;
        }
        tokens
            .windows(size)
            .map(|w| self.scorer.similarity(phrase.text(), &w.join(" ")))
            .fold(0.0, f32::max)
    }
}
