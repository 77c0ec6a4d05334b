//! Weighted substring vocabulary

use crate::error::VocabularyError;
use std::collections::HashMap;
#[cfg(feature = "serde")]
use std::fmt;

/// Mapping from substring to a non-negative preference weight.
///
/// Keys are unique and non-empty. Weights only rank segmentations of equal
/// length against each other; they are not normalized.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize),
    serde(into = "HashMap<String, f64>")
)]
pub struct Vocabulary {
    entries: HashMap<String, f64>,
    /// Length in chars of the longest key
    max_key_chars: usize,
}

impl Vocabulary {
    /// Create an empty vocabulary
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a vocabulary from `(key, weight)` pairs, rejecting malformed entries
    pub fn from_entries<I, K>(entries: I) -> Result<Self, VocabularyError>
    where
        I: IntoIterator<Item = (K, f64)>,
        K: Into<String>,
    {
        let mut vocabulary = Self::new();
        for (key, weight) in entries {
            vocabulary.insert(key, weight)?;
        }
        Ok(vocabulary)
    }

    /// Add one entry
    pub fn insert(&mut self, key: impl Into<String>, weight: f64) -> Result<(), VocabularyError> {
        let key = key.into();
        if key.is_empty() {
            return Err(VocabularyError::EmptyKey);
        }
        if !weight.is_finite() || weight < 0.0 {
            return Err(VocabularyError::InvalidWeight { key, weight });
        }
        if self.entries.contains_key(&key) {
            return Err(VocabularyError::DuplicateKey { key });
        }

        self.max_key_chars = self.max_key_chars.max(key.chars().count());
        self.entries.insert(key, weight);
        Ok(())
    }

    /// Weight of a key, if present
    #[inline]
    pub fn weight(&self, key: &str) -> Option<f64> {
        self.entries.get(key).copied()
    }

    /// Whether `key` is in the vocabulary
    #[inline]
    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Whether `ch` has a single-character entry
    #[inline]
    pub fn covers(&self, ch: char) -> bool {
        let mut buf = [0u8; 4];
        self.entries.contains_key(&*ch.encode_utf8(&mut buf))
    }

    /// Characters of `word` lacking a single-character entry, in order of first appearance
    pub fn missing_characters(&self, word: &str) -> Vec<char> {
        let mut missing: Vec<char> = Vec::new();
        for ch in word.chars() {
            if !self.covers(ch) && !missing.contains(&ch) {
                missing.push(ch);
            }
        }
        missing
    }

    /// Length in chars of the longest key (0 when empty)
    pub fn max_key_chars(&self) -> usize {
        self.max_key_chars
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the vocabulary has no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over `(key, weight)` pairs in arbitrary order
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> + '_ {
        self.entries.iter().map(|(k, &w)| (k.as_str(), w))
    }

    /// Derive a vocabulary holding only the entries `keep` accepts
    pub fn filtered<F>(&self, mut keep: F) -> Self
    where
        F: FnMut(&str, f64) -> bool,
    {
        let entries: HashMap<String, f64> = self
            .entries
            .iter()
            .filter(|(k, &w)| keep(k, w))
            .map(|(k, &w)| (k.clone(), w))
            .collect();
        let max_key_chars = entries.keys().map(|k| k.chars().count()).max().unwrap_or(0);
        Self {
            entries,
            max_key_chars,
        }
    }
}

impl TryFrom<HashMap<String, f64>> for Vocabulary {
    type Error = VocabularyError;

    fn try_from(entries: HashMap<String, f64>) -> Result<Self, Self::Error> {
        Self::from_entries(entries)
    }
}

impl From<Vocabulary> for HashMap<String, f64> {
    fn from(vocabulary: Vocabulary) -> Self {
        vocabulary.entries
    }
}

/// Entries are inserted one by one, so a repeated key in the input is
/// reported instead of overwriting the earlier weight.
#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Vocabulary {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        struct VocabularyVisitor;

        impl<'de> serde::de::Visitor<'de> for VocabularyVisitor {
            type Value = Vocabulary;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map from substring to non-negative weight")
            }

            fn visit_map<A>(self, mut map: A) -> Result<Vocabulary, A::Error>
            where
                A: serde::de::MapAccess<'de>,
            {
                let mut vocabulary = Vocabulary::new();
                while let Some((key, weight)) = map.next_entry::<String, f64>()? {
                    vocabulary
                        .insert(key, weight)
                        .map_err(serde::de::Error::custom)?;
                }
                Ok(vocabulary)
            }
        }

        deserializer.deserialize_map(VocabularyVisitor)
    }
}
