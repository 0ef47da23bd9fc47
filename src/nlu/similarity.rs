//! # Similaridade por Distância de Edição
//!
//! Primitiva sobre a qual todo o matching fuzzy é construído.
//!
//! ## Fórmula
//!
//! ```text
//! similarity(a, b) = (max_len - levenshtein(a, b)) / max_len
//! ```
//!
//! Custos unitários (inserção, remoção, substituição), contados em `char`
//! (não bytes, importante para cirílico).
//!
//! ## Atalhos de Custo
//!
//! | Condição | Resultado |
//! |----------|-----------|
//! | `a == b` | `1.0` (inclui ambos vazios) |
//! | só um vazio | `0.0` |
//! | `menor / maior < min_length_ratio` | `0.0` sem calcular distância |
//! | `maior > approximation_cutoff` | aproximação prefixo + sufixo comum |
//!
//! A aproximação evita o custo O(m·n) em tokens longos (URLs, "ааааааа...").
//! Ela é simétrica e nunca passa de `1.0`.

use crate::config::ScorerConfig;

/// Calcula similaridade normalizada em `[0, 1]` entre dois tokens.
#[derive(Clone, Debug, Default)]
pub struct SimilarityScorer {
    config: ScorerConfig,
}

impl SimilarityScorer {
    pub fn new(config: ScorerConfig) -> Self {
        Self { config }
    }

    /// Similaridade entre `a` e `b` (já normalizados).
    pub fn similarity(&self, a: &str, b: &str) -> f32 {
        if a == b {
            return 1.0;
        }
        let a: Vec<char> = a.chars().collect();
        let b: Vec<char> = b.chars().collect();
        let (shorter, longer) = if a.len() <= b.len() {
            (a.len(), b.len())
        } else {
            (b.len(), a.len())
        };
        if shorter == 0 {
            return 0.0;
        }
        if (shorter as f32 / longer as f32) < self.config.min_length_ratio {
            return 0.0;
        }

        let distance = if longer > self.config.approximation_cutoff {
            approximate_distance(&a, &b)
        } else {
            levenshtein_chars(&a, &b)
        };
        ((longer - distance.min(longer)) as f32 / longer as f32).clamp(0.0, 1.0)
    }
}

/// Distância de Levenshtein entre duas strings (em chars).
pub fn levenshtein(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    levenshtein_chars(&a, &b)
}

/// Wagner-Fischer com duas linhas; a string menor fica no laço interno.
fn levenshtein_chars(a: &[char], b: &[char]) -> usize {
    let (short, long) = if a.len() <= b.len() { (a, b) } else { (b, a) };
    let mut prev: Vec<usize> = (0..=short.len()).collect();
    let mut curr = vec![0; short.len() + 1];

    for (j, lc) in long.iter().enumerate() {
        curr[0] = j + 1;
        for (i, sc) in short.iter().enumerate() {
            let cost = usize::from(sc != lc);
            curr[i + 1] = (prev[i + 1] + 1).min(curr[i] + 1).min(prev[i] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }
    prev[short.len()]
}

/// Distância estimada: tudo fora do prefixo e do sufixo comuns conta como edição.
fn approximate_distance(a: &[char], b: &[char]) -> usize {
    let longer = a.len().max(b.len());
    let shorter = a.len().min(b.len());

    let prefix = a.iter().zip(b).take_while(|(x, y)| x == y).count();
    let suffix = a
        .iter()
        .rev()
        .zip(b.iter().rev())
        .take(shorter - prefix)
        .take_while(|(x, y)| x == y)
        .count();

    longer - (prefix + suffix)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scorer() -> SimilarityScorer {
        SimilarityScorer::default()
    }

    #[test]
    fn levenshtein_known_values() {
        assert_eq!(levenshtein("kitten", "sitting"), 3);
        assert_eq!(levenshtein("можеш", "мозеш"), 1);
        assert_eq!(levenshtein("", "abc"), 3);
        assert_eq!(levenshtein("abc", "abc"), 0);
    }

    #[test]
    fn identical_and_empty() {
        let s = scorer();
        assert_eq!(s.similarity("новини", "новини"), 1.0);
        assert_eq!(s.similarity("", ""), 1.0);
        assert_eq!(s.similarity("", "новини"), 0.0);
        assert_eq!(s.similarity("новини", ""), 0.0);
    }

    #[test]
    fn counts_chars_not_bytes() {
        // 1 substituição em 5 chars cirílicos
        let sim = scorer().similarity("можеш", "мозеш");
        assert!((sim - 0.8).abs() < 1e-6, "sim = {sim}");
    }

    #[test]
    fn length_ratio_prunes() {
        // 1/6 < 0.4
        assert_eq!(scorer().similarity("в", "погода"), 0.0);
        // 2/5 == 0.4 não é podado
        assert!(scorer().similarity("ne", "news1") >= 0.0);
    }

    #[test]
    fn symmetric_and_bounded() {
        let s = scorer();
        let pairs = [
            ("погода", "пагода"),
            ("subscribe", "subscirbe"),
            ("неймовірно", "неимоверно"),
            ("internationalization", "internationalisation"),
            ("абвгдеєжзиіїйклмн", "абвгдеєжзиіїйклмм"),
        ];
        for (a, b) in pairs {
            let ab = s.similarity(a, b);
            let ba = s.similarity(b, a);
            assert_eq!(ab, ba, "{a} / {b}");
            assert!((0.0..=1.0).contains(&ab));
        }
    }

    #[test]
    fn long_tokens_use_approximation() {
        let s = scorer();
        // Prefixo 19 + sufixo 0 em 20 chars
        let sim = s.similarity("internationalization", "internationalizatioX");
        assert!((sim - 0.95).abs() < 1e-6, "sim = {sim}");
        // Diferença no meio: prefixo + sufixo cobrem 19 de 20
        let sim = s.similarity("internationalization", "internationalisation");
        assert!((sim - 0.95).abs() < 1e-6, "sim = {sim}");
    }

    #[test]
    fn approximation_never_overlaps_prefix_and_suffix() {
        let a: Vec<char> = "aaaaaaaaaaaaaaaaaaaa".chars().collect();
        let b: Vec<char> = "aaaaaaaaaaaaaaaaaa".chars().collect();
        assert_eq!(approximate_distance(&a, &b), 2);
    }
}
