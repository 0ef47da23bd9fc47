//! # Validador de Contexto — Supressão de Falsos Positivos
//!
//! Mensagens curtas de chat geram muitos "quase-matches" acidentais. O
//! [`ContextValidator`] aplica duas barreiras:
//!
//! ```text
//! Mensagem
//!   ├── 1. Denylist (RegexSet sobre o texto em lowercase)
//!   │      saudação isolada, agradecimento, despedida, "ok",
//!   │      "жарт"/"meme" isolados, marcadores de lixo, só pontuação
//!   │      → rejeita em TODOS os domínios
//!   └── 2. Allowlist (radicais de contexto do domínio)
//!          só consultada para matches fuzzy:
//!          - evidência registrada (exact/variation/typo) → aceita
//!          - fuzzy em substantivo forte ("погода", "news") → aceita
//!          - domínio sem allowlist (power words) → aceita
//!          - senão → exige pelo menos um radical presente
//! ```
//!
//! ## Regra dos Radicais
//!
//! | Item | Casa quando |
//! |------|-------------|
//! | < 3 chars ("ти") | token idêntico |
//! | ≥ 3 chars ("новин") | algum token começa com o item |
//! | sem letras ("?") | aparece no texto em lowercase |

use regex::RegexSet;

use crate::core::{Domain, MatchCandidate};
use crate::error::EngineError;

use super::lexicon::context::{allowlist, strong_nouns, DENY_PATTERNS};
use super::text::Utterance;

/// Radicais com menos chars que isto precisam casar o token inteiro.
const STEM_MIN_CHARS: usize = 3;

/// Denylist + allowlists + substantivos fortes.
#[derive(Clone, Debug)]
pub struct ContextValidator {
    deny: RegexSet,
}

impl ContextValidator {
    /// Compila a denylist embutida.
    pub fn new() -> Result<Self, EngineError> {
        Self::with_patterns(DENY_PATTERNS)
    }

    /// Compila uma denylist arbitrária.
    pub fn with_patterns(patterns: &[&str]) -> Result<Self, EngineError> {
        let deny = RegexSet::new(patterns)?;
        Ok(Self { deny })
    }

    /// `true` se a mensagem deve ser rejeitada em todos os domínios.
    pub fn is_denied(&self, utterance: &Utterance) -> bool {
        self.deny.is_match(utterance.lowered())
    }

    /// `true` se algum radical da allowlist do domínio está presente.
    ///
    /// Domínios sem allowlist sempre retornam `true`.
    pub fn has_context(&self, utterance: &Utterance, domain: Domain) -> bool {
        let items = allowlist(domain);
        items.is_empty() || items.iter().any(|item| stem_present(utterance, item))
    }

    /// Plausibilidade genérica: não está na denylist e tem contexto.
    pub fn is_plausible(&self, utterance: &Utterance, domain: Domain) -> bool {
        !self.is_denied(utterance) && self.has_context(utterance, domain)
    }

    /// Decide se um candidato aceito pelo threshold sobrevive ao veto.
    pub fn accepts(&self, utterance: &Utterance, domain: Domain, candidate: &MatchCandidate) -> bool {
        if self.is_denied(utterance) {
            return false;
        }
        if candidate.source.is_registered() {
            return true;
        }
        let canonical = super::text::normalize(&candidate.matched_canonical_form);
        if strong_nouns(domain).contains(&canonical.as_str()) {
            return true;
        }
        self.has_context(utterance, domain)
    }
}

fn stem_present(utterance: &Utterance, item: &str) -> bool {
    if !item.chars().any(char::is_alphanumeric) {
        return utterance.lowered().contains(item);
    }
    if item.chars().count() < STEM_MIN_CHARS {
        utterance.tokens().iter().any(|t| t == item)
    } else {
        utterance.tokens().iter().any(|t| t.starts_with(item))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::MatchSource;

    fn utt(text: &str) -> Utterance {
        Utterance::new(text, 1024)
    }

    fn fuzzy(canonical: &str) -> MatchCandidate {
        MatchCandidate {
            matched_canonical_form: canonical.to_string(),
            confidence: 0.8,
            source: MatchSource::Fuzzy,
        }
    }

    #[test]
    fn denies_bare_greetings_and_noise() {
        let v = ContextValidator::new().unwrap();
        for text in ["Привіт!", "thanks", "бувай 👋", "ок", "мем", "?!?", "абракадабра хрінь можливості", "asdf погода"] {
            assert!(v.is_denied(&utt(text)), "{text}");
        }
    }

    #[test]
    fn greeting_with_request_is_not_denied() {
        let v = ContextValidator::new().unwrap();
        assert!(!v.is_denied(&utt("привіт, що ти можеш?")));
        assert!(!v.is_denied(&utt("hello what can you do")));
        assert!(!v.is_denied(&utt("розкажи жарт про погоду")));
    }

    #[test]
    fn allowlist_stems_and_short_items() {
        let v = ContextValidator::new().unwrap();
        assert!(v.has_context(&utt("покажи свіжі новинки"), Domain::News));
        // "ти" só como token inteiro
        assert!(v.has_context(&utt("а ти"), Domain::Capability));
        assert!(!v.has_context(&utt("тихо"), Domain::Capability));
        // Item sem letras
        assert!(v.has_context(&utt("можна?"), Domain::Capability));
        // Power words não exigem contexto
        assert!(v.has_context(&utt("ніщо"), Domain::PowerWord));
    }

    #[test]
    fn fuzzy_needs_context_unless_strong_noun() {
        let v = ContextValidator::new().unwrap();
        let u = utt("пагода");
        assert!(v.accepts(&u, Domain::Weather, &fuzzy("погода")));
        assert!(!v.accepts(&u, Domain::Capability, &fuzzy("список команд")));
        assert!(v.is_plausible(&utt("покажи список команд"), Domain::Capability));
    }

    #[test]
    fn registered_evidence_skips_allowlist() {
        let v = ContextValidator::new().unwrap();
        let candidate = MatchCandidate {
            matched_canonical_form: "меню".to_string(),
            confidence: 0.95,
            source: MatchSource::Variation,
        };
        assert!(v.accepts(&utt("меню"), Domain::Capability, &candidate));
        assert!(!v.accepts(&utt("ок"), Domain::Capability, &candidate));
    }

    #[test]
    fn invalid_pattern_is_an_error() {
        assert!(matches!(
            ContextValidator::with_patterns(&["(unclosed"]),
            Err(EngineError::Pattern(_))
        ));
    }
}
