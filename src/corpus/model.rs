/*!
 * Sentence and document model shared by every corpus format.
 *
 * A `Document` is built fresh from a file for each verification run and is
 * never updated in place. A `Sentence` always holds at least one token.
 */

use std::fmt;
use std::str::FromStr;

use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};

/// Surface form taken verbatim from a token record
pub type Token = String;

/// Supported corpus formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CorpusFormat {
    /// Shakti Standard Format
    Ssf,
    /// CoNLL-U
    Conllu,
}

impl CorpusFormat {
    /// Human readable name used in reports
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Ssf => "SSF",
            Self::Conllu => "CoNLL-U",
        }
    }
}

impl fmt::Display for CorpusFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl FromStr for CorpusFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "ssf" => Ok(Self::Ssf),
            "conllu" | "conll-u" => Ok(Self::Conllu),
            _ => Err(anyhow!("Unknown corpus format: {}", s)),
        }
    }
}

/// Ordered, non-empty sequence of tokens
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sentence {
    id: Option<String>,
    tokens: Vec<Token>,
}

impl Sentence {
    /// Build a sentence, or `None` when no token was collected
    pub fn new(id: Option<String>, tokens: Vec<Token>) -> Option<Self> {
        if tokens.is_empty() {
            None
        } else {
            Some(Self { id, tokens })
        }
    }

    /// Build an unlabelled sentence from string slices
    pub fn from_words(words: &[&str]) -> Option<Self> {
        Self::new(None, words.iter().map(|w| w.to_string()).collect())
    }

    /// Sentence identifier found in the source file, if any.
    /// Only used for diagnostics.
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Always false; kept for API symmetry with `len`
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Whether both sentences carry the same tokens in the same order
    pub fn same_tokens(&self, other: &Sentence) -> bool {
        self.tokens == other.tokens
    }

    /// Tokens joined by single spaces
    pub fn joined(&self) -> String {
        self.tokens.join(" ")
    }
}

/// Ordered sequence of sentences extracted from one file in one format
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Document {
    sentences: Vec<Sentence>,
}

impl Document {
    pub fn new(sentences: Vec<Sentence>) -> Self {
        Self { sentences }
    }

    pub fn sentences(&self) -> &[Sentence] {
        &self.sentences
    }

    pub fn len(&self) -> usize {
        self.sentences.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sentences.is_empty()
    }

    /// Total number of tokens over all sentences
    pub fn token_count(&self) -> usize {
        self.sentences.iter().map(Sentence::len).sum()
    }

    /// Token sequences without sentence labels
    pub fn token_sequences(&self) -> Vec<Vec<Token>> {
        self.sentences.iter().map(|s| s.tokens.clone()).collect()
    }
}

/// Collects tokens for the sentence currently being read
#[derive(Debug, Default)]
pub(crate) struct SentenceAccumulator {
    id: Option<String>,
    tokens: Vec<Token>,
}

impl SentenceAccumulator {
    /// Drop whatever was collected and start a new sentence
    pub fn reset(&mut self, id: Option<String>) {
        self.id = id;
        self.tokens.clear();
    }

    pub fn set_id(&mut self, id: String) {
        self.id = Some(id);
    }

    pub fn push(&mut self, token: &str) {
        self.tokens.push(token.to_string());
    }

    /// Move the collected tokens into `sentences` if there are any,
    /// leaving the accumulator empty
    pub fn flush_into(&mut self, sentences: &mut Vec<Sentence>) {
        let id = self.id.take();
        let tokens = std::mem::take(&mut self.tokens);
        if let Some(sentence) = Sentence::new(id, tokens) {
            sentences.push(sentence);
        }
    }
}
