//! # Resolvedor de Prioridade entre Domínios
//!
//! Quando vários recognizers aceitam a mesma mensagem, o
//! [`PriorityResolver`] escolhe **no máximo um** vencedor, de forma
//! determinística.
//!
//! ## Regras (em ordem)
//!
//! ```text
//! resultados por domínio
//!   ├── 1. Re-check de radicais: domínios com `relevant_keywords`
//!   │      (subscribe/unsubscribe) precisam de um token que comece com
//!   │      um radical relevante e de nenhum radical conflitante.
//!   │      Quem falha é descartado (o próximo sobe).
//!   ├── 2. Melhor confiança supera todos os outros por > margem (0.1)?
//!   │      → vence direto
//!   └── 3. Dentro da margem: prioridade estática
//!          subscribe > unsubscribe > weather > news > capability > power_word
//! ```
//!
//! ## Exemplo
//!
//! | Texto | news | subscribe | Vencedor |
//! |-------|------|-----------|----------|
//! | "підпіска на ранкові новини" | 1.00 | 0.94 | subscribe (margem + prioridade) |
//! | "покажи новини" | 1.00 | 0.50 (abaixo do threshold) | news |

use crate::config::{DomainSettings, ResolverConfig};
use crate::core::{Domain, MatchResult};

use super::text::Utterance;

/// Tolerância para comparar diferenças de confiança contra a margem.
const MARGIN_EPSILON: f32 = 1e-6;

/// Escolhe o vencedor entre resultados de domínios diferentes.
#[derive(Clone, Debug)]
pub struct PriorityResolver {
    config: ResolverConfig,
    domains: DomainSettings,
}

impl PriorityResolver {
    pub fn new(config: ResolverConfig, domains: DomainSettings) -> Self {
        Self { config, domains }
    }

    /// `true` se o domínio passa no re-check de radicais para esta mensagem.
    pub fn passes_recheck(&self, domain: Domain, utterance: &Utterance) -> bool {
        let policy = self.domains.get(domain);
        if policy.relevant_keywords.is_empty() {
            return true;
        }
        let has_stem = |stems: &[String]| {
            utterance
                .tokens()
                .iter()
                .any(|token| stems.iter().any(|stem| token.starts_with(stem.as_str())))
        };
        has_stem(&policy.relevant_keywords) && !has_stem(&policy.conflicting_keywords)
    }

    /// Vencedor entre `results` (no máximo um por domínio).
    pub fn resolve(&self, results: &[MatchResult], utterance: &Utterance) -> Option<MatchResult> {
        let survivors: Vec<&MatchResult> = results
            .iter()
            .filter(|r| {
                let ok = self.passes_recheck(r.domain, utterance);
                if !ok {
                    tracing::debug!(domain = %r.domain, "Descartado no re-check de radicais");
                }
                ok
            })
            .collect();

        let best = survivors
            .iter()
            .copied()
            .max_by(|a, b| {
                a.confidence
                    .total_cmp(&b.confidence)
                    .then_with(|| b.domain.priority().cmp(&a.domain.priority()))
            })?;

        let margin = self.config.near_tie_margin;
        let contenders = survivors
            .iter()
            .copied()
            .filter(|r| best.confidence - r.confidence <= margin + MARGIN_EPSILON);

        let winner = contenders.min_by_key(|r| r.domain.priority()).unwrap_or(best);

        if winner.domain != best.domain {
            tracing::debug!(
                winner = %winner.domain,
                best = %best.domain,
                "Quase-empate resolvido por prioridade"
            );
        }
        Some(winner.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EngineConfig;
    use crate::core::{Category, EntryTag, Language, MatchSource};

    fn resolver() -> PriorityResolver {
        let config = EngineConfig::default();
        PriorityResolver::new(config.resolver, config.domains)
    }

    fn result(domain: Domain, confidence: f32) -> MatchResult {
        MatchResult {
            domain,
            confidence,
            matched_keyword: domain.label().to_string(),
            source: MatchSource::Fuzzy,
            category: Category::Command,
            tag: EntryTag::Plain,
            language: Language::Uk,
            extracted_entity: None,
            original_text: String::new(),
        }
    }

    fn utt(text: &str) -> Utterance {
        Utterance::new(text, 1024)
    }

    #[test]
    fn clear_winner_beats_priority() {
        let results = [result(Domain::News, 1.0), result(Domain::Subscribe, 0.7)];
        let winner = resolver().resolve(&results, &utt("підписка новини")).unwrap();
        assert_eq!(winner.domain, Domain::News);
    }

    #[test]
    fn near_tie_uses_priority() {
        let results = [result(Domain::News, 1.0), result(Domain::Subscribe, 0.9375)];
        let winner = resolver().resolve(&results, &utt("підпіска на ранкові новини")).unwrap();
        assert_eq!(winner.domain, Domain::Subscribe);
    }

    #[test]
    fn margin_boundary_is_inclusive() {
        let results = [result(Domain::Capability, 0.8), result(Domain::Weather, 0.7)];
        let winner = resolver().resolve(&results, &utt("погода")).unwrap();
        assert_eq!(winner.domain, Domain::Weather);
    }

    #[test]
    fn failed_recheck_promotes_runner_up() {
        // "відписатися" tem radical conflitante para subscribe
        let results = [result(Domain::Subscribe, 0.95), result(Domain::Unsubscribe, 0.9)];
        let winner = resolver().resolve(&results, &utt("відписатися")).unwrap();
        assert_eq!(winner.domain, Domain::Unsubscribe);
    }

    #[test]
    fn all_dropped_means_no_winner() {
        let results = [result(Domain::Subscribe, 0.9)];
        assert!(resolver().resolve(&results, &utt("розсилка")).is_none());
        assert!(resolver().resolve(&[], &utt("розсилка")).is_none());
    }

    #[test]
    fn deterministic_for_equal_confidence() {
        let results = [
            result(Domain::PowerWord, 1.0),
            result(Domain::News, 1.0),
            result(Domain::Capability, 1.0),
        ];
        for _ in 0..3 {
            let winner = resolver().resolve(&results, &utt("новини")).unwrap();
            assert_eq!(winner.domain, Domain::News);
        }
    }

    #[test]
    fn recheck_only_for_configured_domains() {
        let r = resolver();
        assert!(r.passes_recheck(Domain::News, &utt("будь-що")));
        assert!(r.passes_recheck(Domain::Subscribe, &utt("sign me up")));
        assert!(!r.passes_recheck(Domain::Subscribe, &utt("скасувати підписку")));
        assert!(r.passes_recheck(Domain::Unsubscribe, &utt("скасувати підписку")));
    }
}
