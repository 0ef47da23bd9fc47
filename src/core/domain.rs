//! # Domain e Language — Eixos de Classificação
//!
//! Um [`Domain`] é uma categoria de intenção configurada de forma
//! independente (thresholds, dicionário, regras de contexto).
//!
//! | Domain | Exemplo | Prioridade em empate |
//! |--------|---------|----------------------|
//! | `Subscribe` | "підписка на новини" | 0 (mais alta) |
//! | `Unsubscribe` | "відписатися" | 1 |
//! | `Weather` | "погода в Києві" | 2 |
//! | `News` | "новини" | 3 |
//! | `Capability` | "що ти можеш" | 4 |
//! | `PowerWord` | "капець" | 5 |
//!
//! A prioridade só é consultada pelo
//! [`PriorityResolver`](crate::nlu::resolver::PriorityResolver) quando dois
//! domínios empatam dentro da margem de quase-empate.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Categoria de intenção reconhecida pelo motor.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Domain {
    /// Pedido de capacidades ("o que você sabe fazer?").
    Capability,
    /// Comando de notícias.
    News,
    /// Comando de previsão do tempo.
    Weather,
    /// Assinatura de envios periódicos.
    Subscribe,
    /// Cancelamento de assinatura.
    Unsubscribe,
    /// Reação emocional ("power word").
    PowerWord,
}

impl Domain {
    /// Todos os domínios, na ordem em que os recognizers são construídos.
    pub const ALL: [Domain; 6] = [
        Domain::Capability,
        Domain::News,
        Domain::Weather,
        Domain::Subscribe,
        Domain::Unsubscribe,
        Domain::PowerWord,
    ];

    /// Nome estável usado em JSON, rotas e nomes de arquivo.
    pub fn label(&self) -> &'static str {
        match self {
            Domain::Capability => "capability",
            Domain::News => "news",
            Domain::Weather => "weather",
            Domain::Subscribe => "subscribe",
            Domain::Unsubscribe => "unsubscribe",
            Domain::PowerWord => "power_word",
        }
    }

    /// Inverso de [`label()`](Domain::label).
    pub fn from_label(label: &str) -> Option<Domain> {
        Domain::ALL
            .into_iter()
            .find(|d| d.label() == label.trim().to_lowercase())
    }

    /// Ordem estática de desempate: menor valor vence.
    pub fn priority(&self) -> u8 {
        match self {
            Domain::Subscribe => 0,
            Domain::Unsubscribe => 1,
            Domain::Weather => 2,
            Domain::News => 3,
            Domain::Capability => 4,
            Domain::PowerWord => 5,
        }
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Idioma da mensagem (o motor é bilíngue ucraniano/inglês).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// Ucraniano (qualquer texto majoritariamente cirílico).
    Uk,
    /// Inglês (texto majoritariamente latino).
    En,
}

impl Language {
    /// Detecta o idioma pela escrita dominante.
    ///
    /// Conta letras cirílicas vs. latinas; empate favorece `Uk`.
    /// Retorna `None` quando o texto não tem letras (emoji, números).
    pub fn detect(text: &str) -> Option<Language> {
        let (mut cyrillic, mut latin) = (0usize, 0usize);
        for c in text.chars().filter(|c| c.is_alphabetic()) {
            if is_cyrillic(c) {
                cyrillic += 1;
            } else if c.is_ascii_alphabetic() {
                latin += 1;
            }
        }
        match (cyrillic, latin) {
            (0, 0) => None,
            (c, l) if c >= l => Some(Language::Uk),
            _ => Some(Language::En),
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Language::Uk => "uk",
            Language::En => "en",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// `true` para caracteres do bloco Unicode cirílico básico.
pub fn is_cyrillic(c: char) -> bool {
    ('\u{0400}'..='\u{04FF}').contains(&c)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_round_trip() {
        for d in Domain::ALL {
            assert_eq!(Domain::from_label(d.label()), Some(d));
        }
        assert_eq!(Domain::from_label(" News "), Some(Domain::News));
        assert_eq!(Domain::from_label("jokes"), None);
    }

    #[test]
    fn priority_is_total_and_unique() {
        let mut priorities: Vec<u8> = Domain::ALL.iter().map(|d| d.priority()).collect();
        priorities.sort();
        priorities.dedup();
        assert_eq!(priorities.len(), Domain::ALL.len());
        assert!(Domain::Subscribe.priority() < Domain::News.priority());
    }

    #[test]
    fn detect_language() {
        assert_eq!(Language::detect("шо ти мозеш"), Some(Language::Uk));
        assert_eq!(Language::detect("what can you do"), Some(Language::En));
        assert_eq!(Language::detect("погода in Kyiv"), Some(Language::Uk));
        assert_eq!(Language::detect("🔥🔥 !!"), None);
    }
}
