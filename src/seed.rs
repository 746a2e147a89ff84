use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::session::state::{RawWordPair, WordPair};

const DEFAULT_WORDS: &[(&str, &str)] = &[
    ("Hello", "Hallo"),
    ("World", "Welt"),
    ("Goodbye", "Auf Wiedersehen"),
];

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

pub fn default_vocabulary() -> Vec<WordPair> {
    DEFAULT_WORDS
        .iter()
        .filter_map(|(english, german)| WordPair::new(*english, *german).ok())
        .collect()
}

/// Entries with a blank side are skipped.
pub fn load_vocabulary(path: &Path) -> Result<Vec<WordPair>, SeedError> {
    let raw = std::fs::read_to_string(path).map_err(|source| SeedError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    parse_vocabulary(&raw).map_err(|source| SeedError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

fn parse_vocabulary(raw: &str) -> Result<Vec<WordPair>, serde_json::Error> {
    let entries: Vec<RawWordPair> = serde_json::from_str(raw)?;
    let total = entries.len();

    let pairs: Vec<WordPair> = entries
        .into_iter()
        .enumerate()
        .filter_map(|(index, entry)| match WordPair::try_from(entry) {
            Ok(pair) => Some(pair),
            Err(err) => {
                tracing::warn!(index, error = %err, "skipping vocabulary entry");
                None
            }
        })
        .collect();

    tracing::debug!(total, loaded = pairs.len(), "vocabulary parsed");
    Ok(pairs)
}

pub fn seed_vocabulary(words_file: Option<&Path>) -> Vec<WordPair> {
    let Some(path) = words_file else {
        return default_vocabulary();
    };

    match load_vocabulary(path) {
        Ok(pairs) => {
            tracing::info!(path = %path.display(), count = pairs.len(), "seeded vocabulary");
            pairs
        }
        Err(err) => {
            tracing::warn!(error = %err, "falling back to built-in vocabulary");
            default_vocabulary()
        }
    }
}
