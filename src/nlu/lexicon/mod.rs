//! # Léxico Embutido
//!
//! Tabelas estáticas (`const` arrays de `&'static str`) que alimentam os
//! dicionários e o validador de contexto. Nada aqui é mutável; o motor
//! copia e normaliza os dados na construção.
//!
//! | Submódulo | Conteúdo |
//! |-----------|----------|
//! | [`commands`] | capability, news, weather, subscribe, unsubscribe |
//! | [`power_words`] | reações emocionais com typos e intensidade |
//! | [`cities`] | cidades ucranianas e suas transliterações |
//! | [`context`] | denylist (regex), allowlists e substantivos fortes |

pub mod cities;
pub mod commands;
pub mod context;
pub mod power_words;

use crate::core::{Domain, RawEntry};

/// Tabela embutida de um domínio.
pub fn entries(domain: Domain) -> &'static [RawEntry] {
    match domain {
        Domain::Capability => commands::CAPABILITY,
        Domain::News => commands::NEWS,
        Domain::Weather => commands::WEATHER,
        Domain::Subscribe => commands::SUBSCRIBE,
        Domain::Unsubscribe => commands::UNSUBSCRIBE,
        Domain::PowerWord => power_words::POWER_WORDS,
    }
}
