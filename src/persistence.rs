//! # Persistência — Dicionários Substitutos em Disco
//!
//! Os dicionários embutidos podem ser substituídos, domínio a domínio, por
//! arquivos JSON em `data/dictionaries/<domínio>.json`:
//!
//! ```text
//! data/dictionaries/
//! ├── news.json          → substitui o dicionário de news
//! └── power_word.json    → substitui o dicionário de power words
//! ```
//!
//! Cada arquivo é um array de [`KeywordEntry`](crate::core::KeywordEntry)
//! e passa pela mesma validação dos embutidos.
//!
//! ## Falhas
//!
//! Um arquivo ilegível ou inválido **não derruba o servidor**: o erro é
//! logado com `warn!` e o dicionário embutido é mantido. Já um dicionário
//! embutido inválido é um bug e propaga erro.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::core::Domain;
use crate::nlu::dictionary::Dictionary;

/// Diretório dos dicionários substitutos (relativo à raiz do projeto).
pub const DICTIONARY_DIR: &str = "data/dictionaries";

/// Caminho do arquivo substituto de um domínio.
pub fn dictionary_path(dir: &Path, domain: Domain) -> PathBuf {
    dir.join(format!("{}.json", domain.label()))
}

/// Lê e valida um dicionário JSON.
///
/// # Erros
///
/// Retorna erro se o arquivo não puder ser lido ou não for um dicionário válido.
pub fn load_dictionary_file(domain: Domain, path: &Path) -> Result<Dictionary> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("Falha ao ler {}", path.display()))?;
    let dictionary = Dictionary::from_json(domain, &json)
        .with_context(|| format!("Dicionário inválido em {}", path.display()))?;
    Ok(dictionary)
}

/// Um dicionário por domínio: substituto do disco, ou o embutido.
///
/// # Erros
///
/// Só falha se um dicionário **embutido** for inválido.
pub fn load_dictionaries(dir: &Path) -> Result<Vec<Dictionary>> {
    let mut dictionaries = Vec::with_capacity(Domain::ALL.len());

    for domain in Domain::ALL {
        let path = dictionary_path(dir, domain);
        let loaded = if path.exists() {
            match load_dictionary_file(domain, &path) {
                Ok(dictionary) => {
                    tracing::info!(
                        %domain,
                        path = %path.display(),
                        entries = dictionary.len(),
                        "Dicionário substituto carregado"
                    );
                    Some(dictionary)
                }
                Err(e) => {
                    tracing::warn!(%domain, "Dicionário substituto ignorado: {:#}", e);
                    None
                }
            }
        } else {
            None
        };

        let dictionary = match loaded {
            Some(dictionary) => dictionary,
            None => Dictionary::builtin(domain)
                .with_context(|| format!("Dicionário embutido de '{domain}' inválido"))?,
        };
        dictionaries.push(dictionary);
    }

    Ok(dictionaries)
}
