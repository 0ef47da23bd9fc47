//! # Normalização de Texto — Utterance
//!
//! Toda comparação do motor acontece sobre texto **normalizado**. A
//! [`Utterance`] é construída uma vez por chamada e compartilhada por
//! todos os recognizers.
//!
//! ## Pipeline de Normalização
//!
//! ```text
//! "  Погода в КИЕВІ!!  "
//!   ├── 1. Trunca em max_input_chars
//!   ├── 2. NFC + lowercase + trim         → "погода в киеві!!"      (lowered)
//!   ├── 3. Separa em tokens alfanuméricos → ["погода", "в", "киеві"]
//!   │      (apóstrofos internos preservados: "what's", "п'ять")
//!   ├── 4. Homóglifos latinos em tokens cirílicos ("блiн" → "блін")
//!   └── 5. Junta com espaço simples       → "погода в киеві"        (joined)
//! ```
//!
//! ## Contenção de Frases
//!
//! [`Utterance::find_phrase()`] procura uma frase normalizada **em limite de
//! palavra**: a frase deve começar no início de um token. Frases com 5+
//! caracteres podem terminar no meio de um token se sobrar no máximo uma
//! terminação de 2 chars ("новин" casa "новини", "супер" não casa
//! "суперечка"). Frases curtas precisam casar o token inteiro ("клас" não
//! casa "класти", "ого" não casa "многого").

use unicode_normalization::UnicodeNormalization;

use crate::core::domain::is_cyrillic;
use crate::core::Language;

/// Frases com pelo menos esta quantidade de chars casam como prefixo de token.
const PREFIX_MATCH_MIN_CHARS: usize = 5;

/// Maior terminação flexional aceita após uma frase casada como prefixo.
const MAX_INFLECTION_TAIL: usize = 2;

/// Caracteres tratados como apóstrofo dentro de palavras.
const APOSTROPHES: &[char] = &['\'', '’', 'ʼ', '‘', '`'];

/// Pares (latino, cirílico) visualmente idênticos.
const HOMOGLYPHS: &[(char, char)] = &[
    ('a', 'а'),
    ('c', 'с'),
    ('e', 'е'),
    ('i', 'і'),
    ('o', 'о'),
    ('p', 'р'),
    ('x', 'х'),
    ('y', 'у'),
];

/// Texto de entrada normalizado e tokenizado.
#[derive(Clone, Debug)]
pub struct Utterance {
    /// Texto exatamente como recebido.
    original: String,
    /// NFC + lowercase + trim (mantém pontuação e emoji).
    lowered: String,
    /// Tokens alfanuméricos normalizados.
    tokens: Vec<String>,
    /// Tokens unidos por espaço simples.
    joined: String,
}

impl Utterance {
    /// Normaliza `text`, considerando no máximo `max_chars` caracteres.
    pub fn new(text: &str, max_chars: usize) -> Self {
        let truncated: String = text.chars().take(max_chars).collect();
        let lowered: String = truncated.nfc().collect::<String>().to_lowercase().trim().to_string();
        let tokens = tokenize(&lowered);
        let joined = tokens.join(" ");
        Self {
            original: text.to_string(),
            lowered,
            tokens,
            joined,
        }
    }

    pub fn original(&self) -> &str {
        &self.original
    }

    pub fn lowered(&self) -> &str {
        &self.lowered
    }

    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    pub fn joined(&self) -> &str {
        &self.joined
    }

    /// Comprimento em caracteres da forma normalizada.
    pub fn char_len(&self) -> usize {
        self.joined.chars().count()
    }

    /// `true` se não sobrou nenhum token (vazio, espaços, só emoji/pontuação).
    pub fn is_blank(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn language(&self) -> Option<Language> {
        Language::detect(&self.joined)
    }

    /// Cópia com sequências de 3+ letras iguais colapsadas ("вааау" → "вау").
    pub fn squeezed(&self) -> Utterance {
        let tokens: Vec<String> = self.tokens.iter().map(|t| squeeze_repeats(t)).collect();
        let joined = tokens.join(" ");
        Utterance {
            original: self.original.clone(),
            lowered: self.lowered.clone(),
            tokens,
            joined,
        }
    }

    /// Posição (em bytes de `joined`) da primeira ocorrência da frase em
    /// limite de palavra.
    pub fn find_phrase(&self, phrase: &str) -> Option<usize> {
        let first = phrase.chars().next()?;
        let whole_word = phrase.chars().count() < PREFIX_MATCH_MIN_CHARS;
        let hay = self.joined.as_str();

        let mut from = 0;
        while let Some(pos) = hay[from..].find(phrase) {
            let start = from + pos;
            let end = start + phrase.len();
            let starts_word = start == 0 || hay[..start].ends_with(' ');
            let tail = hay[end..].split(' ').next().unwrap_or("").chars().count();
            let ends_ok = tail == 0 || (!whole_word && tail <= MAX_INFLECTION_TAIL);
            if starts_word && ends_ok {
                return Some(start);
            }
            from = start + first.len_utf8();
        }
        None
    }

    pub fn contains_phrase(&self, phrase: &str) -> bool {
        self.find_phrase(phrase).is_some()
    }
}

/// Normaliza uma frase de dicionário para a mesma forma de `Utterance::joined`.
pub fn normalize(text: &str) -> String {
    let lowered = text.nfc().collect::<String>().to_lowercase();
    tokenize(&lowered).join(" ")
}

/// Divide texto já em lowercase em tokens alfanuméricos.
fn tokenize(lowered: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut current = String::new();

    for c in lowered.chars() {
        if c.is_alphanumeric() {
            current.push(if c == 'ё' { 'е' } else { c });
        } else if APOSTROPHES.contains(&c) && !current.is_empty() {
            current.push('\'');
        } else if !current.is_empty() {
            flush_token(&mut current, &mut tokens);
        }
    }
    if !current.is_empty() {
        flush_token(&mut current, &mut tokens);
    }
    tokens
}

fn flush_token(current: &mut String, tokens: &mut Vec<String>) {
    let token = current.trim_end_matches('\'');
    if !token.is_empty() {
        tokens.push(fold_homoglyphs(token));
    }
    current.clear();
}

/// Troca letras latinas "gêmeas" por cirílicas quando o token já é cirílico.
fn fold_homoglyphs(token: &str) -> String {
    if !token.chars().any(is_cyrillic) {
        return token.to_string();
    }
    token
        .chars()
        .map(|c| {
            HOMOGLYPHS
                .iter()
                .find(|(latin, _)| *latin == c)
                .map(|(_, cyrillic)| *cyrillic)
                .unwrap_or(c)
        })
        .collect()
}

/// Colapsa runs de 3+ caracteres idênticos em um só.
fn squeeze_repeats(token: &str) -> String {
    let chars: Vec<char> = token.chars().collect();
    let mut out = String::with_capacity(token.len());
    let mut i = 0;
    while i < chars.len() {
        let c = chars[i];
        let mut run = 1;
        while i + run < chars.len() && chars[i + run] == c {
            run += 1;
        }
        let keep = if run >= 3 { 1 } else { run };
        for _ in 0..keep {
            out.push(c);
        }
        i += run;
    }
    out
}
