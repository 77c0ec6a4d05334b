//! Optimal subword segmentation
//!
//! Given a word and a weighted vocabulary of substrings, finds the
//! segmentation of the word into vocabulary substrings with the fewest
//! pieces, breaking ties by the highest summed weight. This crate holds
//! the deterministic algorithm layer only: no I/O, no caching, no text
//! splitting.
//!
//! # Example
//!
//! ```rust
//! use optiseg_core::{segment, Vocabulary};
//!
//! let vocab = Vocabulary::from_entries([
//!     ("a", 5.0), ("b", 9.0), ("c", 50.0),
//!     ("ab", 11.0), ("bc", 20.0), ("cb", 31.0),
//! ]).unwrap();
//!
//! let seg = segment("abccbaba", &vocab).unwrap();
//! assert_eq!(seg.pieces(), ["ab", "c", "cb", "ab", "a"]);
//! ```

#![warn(missing_docs)]

pub mod error;
pub mod segmenter;
pub mod types;
pub mod view;
pub mod vocab;

pub use error::{CoreError, Result, VocabularyError};
pub use segmenter::{segment, Segmenter};
pub use types::Segmentation;
pub use view::{Unperturbed, VocabularyView};
pub use vocab::Vocabulary;
