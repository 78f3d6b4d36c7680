use clap::ValueEnum;
use include_dir::{include_dir, Dir};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use thiserror::Error;

static DECK_DIR: Dir = include_dir!("src/decks");

/// A source/target term pair, as loaded from the vocabulary file
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VocabPair {
    pub source: String,
    pub target: String,
}

impl VocabPair {
    pub fn new(source: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
        }
    }
}

#[derive(Debug, Error)]
pub enum VocabError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse vocabulary: {0}")]
    Csv(#[from] csv::Error),

    #[error("bundled deck not found: {0}")]
    DeckNotFound(String),
}

/// Parse `source,target` lines.
///
/// Fields are trimmed and only the first two are considered. Lines that do
/// not yield two non-empty fields are skipped, as are undecodable records.
/// Quotes are plain text, so a stray `"` never spills into later lines.
pub fn parse_vocabulary<R: Read>(reader: R) -> Result<Vec<VocabPair>, VocabError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .quoting(false)
        .from_reader(reader);

    let mut pairs = Vec::new();
    let mut skipped = 0usize;

    for record in csv_reader.records() {
        let record = match record {
            Ok(record) => record,
            Err(e) if e.is_io_error() => return Err(e.into()),
            Err(_) => {
                skipped += 1;
                continue;
            }
        };

        match (record.get(0), record.get(1)) {
            (Some(source), Some(target)) if !source.is_empty() && !target.is_empty() => {
                pairs.push(VocabPair::new(source, target));
            }
            _ => skipped += 1,
        }
    }

    if skipped > 0 {
        tracing::debug!("skipped {skipped} malformed vocabulary lines");
    }

    Ok(pairs)
}

pub fn parse_vocabulary_str(text: &str) -> Vec<VocabPair> {
    // Reading from a byte slice has no io failure path
    parse_vocabulary(text.as_bytes()).unwrap_or_default()
}

pub fn load_vocabulary_file<P: AsRef<Path>>(path: P) -> Result<Vec<VocabPair>, VocabError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| VocabError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let pairs = parse_vocabulary(file)?;

    tracing::info!("loaded {} pairs from {}", pairs.len(), path.display());
    Ok(pairs)
}

/// Decks compiled into the binary
#[derive(Debug, Copy, Clone, PartialEq, Eq, ValueEnum, strum_macros::Display)]
pub enum BuiltinDeck {
    Spanish,
    French,
    German,
}

impl BuiltinDeck {
    pub fn load(&self) -> Result<Vec<VocabPair>, VocabError> {
        let file_name = format!("{}.csv", self.to_string().to_lowercase());
        let file = DECK_DIR
            .get_file(&file_name)
            .ok_or_else(|| VocabError::DeckNotFound(file_name.clone()))?;

        parse_vocabulary(file.contents())
    }
}
