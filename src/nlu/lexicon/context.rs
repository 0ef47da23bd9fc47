//! Dados do validador de contexto.
//!
//! - `DENY_PATTERNS`: regex aplicadas ao texto em lowercase (com pontuação)
//! - allowlists: radicais de contexto por domínio
//! - substantivos fortes: canônicas cujo match fuzzy dispensa contexto

use crate::core::Domain;

/// Padrões que rejeitam a mensagem em **todos** os domínios.
pub const DENY_PATTERNS: &[&str] = &[
    // Saudações, agradecimentos e despedidas sem mais nada
    r"^(привіт|привет|вітаю|здрастуйте|hi|hello|hey|добрий день|доброго ранку)[\s\p{P}\p{S}]*$",
    r"^(дякую|спасибі|спасибо|дяки|thanks|thank you|thx)[\s\p{P}\p{S}]*$",
    r"^(бувай|пока|до побачення|bye|goodbye|see you)[\s\p{P}\p{S}]*$",
    r"^(ok|ок|окей|okay|ага|угу|lol|лол|хаха|haha)[\s\p{P}\p{S}]*$",
    // "Жарт"/"мем" isolados
    r"^(жарт|жартик|анекдот|мем|joke|meme)[\s\p{P}\p{S}]*$",
    // Marcadores de texto sem sentido
    r"абракадабр|asdf|qwerty|йцукен|бла[\s-]*бла|хрін|lorem ipsum|фывап",
    // Só pontuação e símbolos
    r"^[\s\p{P}\p{S}]+$",
];

const CAPABILITY: &[&str] = &[
    "що", "шо", "что", "як", "ти", "тебе", "тобою", "можеш", "вмієш", "умієш", "можлив", "функц",
    "допомо", "команд", "what", "how", "can", "you", "your", "help", "command", "feature", "?",
];

const NEWS: &[&str] = &[
    "новин", "новост", "news", "що", "шо", "what", "головн", "свіж", "останн", "сьогодн", "today",
    "latest", "покаж", "дай", "розкаж", "show", "tell",
];

const WEATHER: &[&str] = &[
    "погод", "weather", "прогноз", "forecast", "температур", "temperature", "дощ", "rain",
    "сніг", "snow", "градус", "холодн", "тепл", "завтра", "сьогодн", "today", "tomorrow", "яка",
    "what",
];

// Só substantivos do que se assina; os radicais do próprio comando ("підп",
// "unsub") não contam como contexto.
const SUBSCRIBE: &[&str] = &[
    "розсил", "новин", "новост", "погод", "прогноз", "news", "weather", "forecast", "newsletter",
    "ранк", "щодня", "щоранку", "daily", "morning",
];

const UNSUBSCRIBE: &[&str] = &[
    "розсил", "новин", "новост", "погод", "прогноз", "news", "weather", "forecast", "newsletter",
    "повідомл", "сповіщ", "notification",
];

/// Allowlist do domínio; vazio significa "sem exigência de contexto".
pub fn allowlist(domain: Domain) -> &'static [&'static str] {
    match domain {
        Domain::Capability => CAPABILITY,
        Domain::News => NEWS,
        Domain::Weather => WEATHER,
        Domain::Subscribe => SUBSCRIBE,
        Domain::Unsubscribe => UNSUBSCRIBE,
        Domain::PowerWord => &[],
    }
}

/// Canônicas (já normalizadas) fortes o bastante para valerem sozinhas.
pub fn strong_nouns(domain: Domain) -> &'static [&'static str] {
    match domain {
        Domain::Capability => &["можливості", "функції", "допомога", "help"],
        Domain::News => &["новини", "news"],
        Domain::Weather => &["погода", "weather", "температура", "temperature"],
        Domain::Subscribe | Domain::Unsubscribe | Domain::PowerWord => &[],
    }
}
