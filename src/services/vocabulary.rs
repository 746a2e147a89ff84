use rand::seq::IndexedRandom;

use crate::services::word_source::{WordSource, WordSourceError};
use crate::session::state::WordPair;

#[derive(Debug, Clone, Default)]
pub struct VocabularyStore {
    pairs: Vec<WordPair>,
}

impl VocabularyStore {
    pub fn new(pairs: Vec<WordPair>) -> Self {
        Self { pairs }
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn pairs(&self) -> &[WordPair] {
        &self.pairs
    }

    /// Uniform random pick. `exclude` is skipped whenever another word exists.
    pub fn random_pair(&self, exclude: Option<&str>) -> Option<WordPair> {
        let mut rng = rand::rng();

        if let Some(english) = exclude {
            let others: Vec<&WordPair> = self
                .pairs
                .iter()
                .filter(|pair| pair.english() != english)
                .collect();
            if let Some(pair) = others.choose(&mut rng) {
                return Some((*pair).clone());
            }
        }

        self.pairs.choose(&mut rng).cloned()
    }
}

impl WordSource for VocabularyStore {
    async fn fetch_word(&self, exclude: Option<&str>) -> Result<WordPair, WordSourceError> {
        self.random_pair(exclude).ok_or(WordSourceError::EmptyResult)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pair(english: &str, german: &str) -> WordPair {
        WordPair::new(english, german).unwrap()
    }

    #[test]
    fn test_empty_store_has_no_pair() {
        let store = VocabularyStore::default();
        assert!(store.is_empty());
        assert_eq!(store.random_pair(None), None);
        assert_eq!(store.random_pair(Some("Hello")), None);
    }

    #[test]
    fn test_exclude_is_honoured_when_alternative_exists() {
        let store = VocabularyStore::new(vec![pair("Hello", "Hallo"), pair("World", "Welt")]);
        for _ in 0..50 {
            let picked = store.random_pair(Some("Hello")).unwrap();
            assert_eq!(picked.english(), "World");
        }
    }

    #[test]
    fn test_exclude_falls_back_to_only_word() {
        let store = VocabularyStore::new(vec![pair("Hello", "Hallo")]);
        assert_eq!(store.random_pair(Some("Hello")).unwrap().english(), "Hello");
    }

    #[tokio::test]
    async fn test_store_as_word_source() {
        let store = VocabularyStore::default();
        assert_eq!(store.fetch_word(None).await, Err(WordSourceError::EmptyResult));

        let store = VocabularyStore::new(vec![pair("Goodbye", "Auf Wiedersehen")]);
        let fetched = store.fetch_word(None).await.unwrap();
        assert_eq!(fetched.german(), "Auf Wiedersehen");
    }
}
