//! # Templates Maud — Playground de Intenções
//!
//! HTML renderizado no servidor com [`maud`](https://maud.lambda.xyz/) e
//! injetado no DOM pelo HTMX. O servidor devolve **fragments**, não JSON.
//!
//! | Função | Tipo | Descrição |
//! |--------|------|-----------|
//! | [`full_page()`] | Página completa | Chat de teste + lista de domínios |
//! | [`analysis_fragment()`] | Fragment HTMX | Mensagem + intenção vencedora + métricas |
//!
//! ## Layout
//!
//! ```text
//! ┌──────────────── nav-bar ─────────────────────┐
//! │ TI │ Tolerant Intent          /status  JSON   │
//! ├──────────────────────────────────────────────┤
//! │  Você: "підпіска на ранкові новини"          │
//! │  subscribe · 0.94 · fuzzy · "підписка"       │
//! │    outros: news 1.00                          │
//! │  312µs | RAM 18.4 MB | ...                    │
//! ├──────────────────────────────────────────────┤
//! │ [______________________________] [Enviar]     │
//! └──────────────────────────────────────────────┘
//! ```

use maud::{html, Markup, PreEscaped, DOCTYPE};

use crate::core::{Domain, MatchResult};
use crate::nlu::Analysis;

const HTMX_SRC: &str = "https://unpkg.com/htmx.org@2.0.4";

const STYLE: &str = r#"
body { font-family: system-ui, sans-serif; margin: 0; background: #f6f5f1; color: #222; }
.nav-bar { display: flex; gap: 12px; align-items: center; padding: 10px 18px; background: #1f2a24; color: #eee; }
.nav-bar a { color: #9fd3b0; }
.chat-panel { max-width: 760px; margin: 0 auto; padding: 16px; }
.chat-messages { min-height: 320px; }
.message { margin: 8px 0; padding: 8px 12px; border-radius: 6px; background: #fff; }
.user-message { background: #e6efe9; }
.message-role { font-size: 12px; color: #667; }
.no-match { color: #a33; }
.runner-up { font-size: 12px; color: #667; }
.metrics-line { font-family: monospace; font-size: 12px; color: #889; }
.chat-form { display: flex; gap: 8px; }
.chat-form input { flex: 1; padding: 8px; }
"#;

// Limpa o input e rola o chat após cada resposta.
const SCRIPT: &str = r#"
document.body.addEventListener('htmx:afterRequest', function (evt) {
  if (evt.detail.elt.matches('.chat-form')) { evt.detail.elt.reset(); }
  var box = document.getElementById('chat-messages');
  box.scrollTop = box.scrollHeight;
});
"#;

/// Página principal: chat de teste do motor.
pub fn full_page() -> Markup {
    html! {
        (DOCTYPE)
        html lang="uk" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { "Tolerant Intent — Playground" }
                style { (PreEscaped(STYLE)) }
                script src=(HTMX_SRC) {}
            }
            body {
                nav class="nav-bar" {
                    strong { "TI" }
                    span { "Tolerant Intent" }
                    a href="/status" { "/status" }
                }
                div class="chat-panel" {
                    div id="chat-messages" class="chat-messages" {
                        div class="message system-message welcome" {
                            div class="message-role" { "Sistema" }
                            div class="message-content" {
                                "Escreva uma mensagem em ucraniano ou inglês. Domínios: "
                                @for (i, domain) in Domain::ALL.iter().enumerate() {
                                    @if i > 0 { ", " }
                                    code { (domain.label()) }
                                }
                                "."
                            }
                        }
                    }
                    form class="chat-form"
                        hx-post="/chat"
                        hx-target="#chat-messages"
                        hx-swap="beforeend" {
                        input type="text" name="message" placeholder="що ти вмієш?"
                            autocomplete="off" autofocus;
                        button type="submit" { "Enviar" }
                    }
                }
                script { (PreEscaped(SCRIPT)) }
            }
        }
    }
}

/// Fragment anexado ao chat após cada mensagem.
pub fn analysis_fragment(analysis: &Analysis, metrics_line: &str) -> Markup {
    html! {
        div class="message user-message" {
            div class="message-role" { "Você" }
            div class="message-content" { (analysis.text) }
        }
        div class="message system-message" {
            div class="message-role" { "Intenção" }
            div class="message-content" {
                @match &analysis.winner {
                    Some(winner) => {
                        (winner_line(winner))
                    }
                    None => {
                        span class="no-match" { "nenhuma intenção reconhecida" }
                    }
                }
                @let others: Vec<&MatchResult> = analysis
                    .matches
                    .iter()
                    .filter(|m| Some(m.domain) != analysis.domain())
                    .collect();
                @if !others.is_empty() {
                    div class="runner-up" {
                        "outros: "
                        @for (i, m) in others.iter().enumerate() {
                            @if i > 0 { ", " }
                            (m.domain.label()) " " (format!("{:.2}", m.confidence))
                        }
                    }
                }
            }
        }
        div class="message system-message metrics" {
            div class="message-content metrics-line" { (metrics_line) }
        }
    }
}

fn winner_line(winner: &MatchResult) -> Markup {
    html! {
        strong { (winner.domain.label()) }
        " · " (format!("{:.2}", winner.confidence))
        " · " (winner.source.label())
        " · \"" (winner.matched_keyword) "\""
        " · " (winner.language.code())
        @if let Some(city) = &winner.extracted_entity {
            " · cidade: " strong { (city) }
        }
    }
}
