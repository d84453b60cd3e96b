//! Text analysis pipeline.
//!
//! This module provides the text processing components:
//! - **Alphabet**: Punctuation and word-character configuration
//! - **Normalizer**: Strips punctuation and filters out non-words
//! - **Tokenizer**: Splits a raw document into normalized words

pub mod alphabet;
pub mod normalizer;
pub mod tokenizer;

pub use alphabet::{Alphabet, CharClass};
pub use normalizer::Normalizer;
pub use tokenizer::Tokenizer;
