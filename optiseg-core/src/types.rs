//! Core types for word segmentation

use core::fmt;

/// An ordered partition of a word into vocabulary substrings
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Segmentation {
    pieces: Vec<String>,
    weight: f64,
}

impl Segmentation {
    /// Create a segmentation from its pieces and their summed weight
    pub fn new(pieces: Vec<String>, weight: f64) -> Self {
        Self { pieces, weight }
    }

    /// The pieces in word order
    pub fn pieces(&self) -> &[String] {
        &self.pieces
    }

    /// Sum of the pieces' vocabulary weights
    pub fn weight(&self) -> f64 {
        self.weight
    }

    /// Number of pieces
    pub fn len(&self) -> usize {
        self.pieces.len()
    }

    /// Whether there are no pieces
    pub fn is_empty(&self) -> bool {
        self.pieces.is_empty()
    }

    /// Iterate over the pieces
    pub fn iter(&self) -> impl Iterator<Item = &str> + '_ {
        self.pieces.iter().map(String::as_str)
    }

    /// Concatenation of the pieces; equals the segmented word
    pub fn concat(&self) -> String {
        self.pieces.concat()
    }
}

impl fmt::Display for Segmentation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.pieces.join(" "))
    }
}
