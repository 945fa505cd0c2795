/*!
 * Sentence-by-sentence token alignment between two documents.
 *
 * `verify` is a pure decision: sentence counts first, then each sentence
 * pair in order, stopping at the first pair whose tokens differ.
 */

use log::debug;

use crate::corpus::{Document, Sentence};

/// Why two documents failed to align
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mismatch {
    /// The documents hold a different number of sentences
    SentenceCount {
        reference: usize,
        candidate: usize,
    },
    /// The first sentence pair whose token sequences differ
    Tokens {
        /// 1-based sentence index
        sentence: usize,
        reference: Sentence,
        candidate: Sentence,
    },
}

impl Mismatch {
    /// 1-based index of the diverging sentence, if the mismatch has one
    pub fn sentence_index(&self) -> Option<usize> {
        match self {
            Self::SentenceCount { .. } => None,
            Self::Tokens { sentence, .. } => Some(*sentence),
        }
    }

    /// Short machine-friendly reason
    pub fn reason(&self) -> &'static str {
        match self {
            Self::SentenceCount { .. } => "count-mismatch",
            Self::Tokens { .. } => "token-mismatch",
        }
    }
}

/// Result of aligning a reference document with a candidate
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Every sentence pair carries identical tokens
    Aligned { sentences: usize },
    /// The documents diverge
    Misaligned(Mismatch),
}

impl Outcome {
    pub fn is_aligned(&self) -> bool {
        matches!(self, Self::Aligned { .. })
    }

    pub fn mismatch(&self) -> Option<&Mismatch> {
        match self {
            Self::Aligned { .. } => None,
            Self::Misaligned(mismatch) => Some(mismatch),
        }
    }

    pub fn into_mismatch(self) -> Option<Mismatch> {
        match self {
            Self::Aligned { .. } => None,
            Self::Misaligned(mismatch) => Some(mismatch),
        }
    }
}

/// Compare `candidate` against `reference` sentence by sentence
pub fn verify(reference: &Document, candidate: &Document) -> Outcome {
    if reference.len() != candidate.len() {
        debug!(
            "Sentence count differs: reference={} candidate={}",
            reference.len(),
            candidate.len()
        );
        return Outcome::Misaligned(Mismatch::SentenceCount {
            reference: reference.len(),
            candidate: candidate.len(),
        });
    }

    let pairs = reference.sentences().iter().zip(candidate.sentences());
    for (index, (ours, theirs)) in pairs.enumerate() {
        if !ours.same_tokens(theirs) {
            debug!("Tokens differ at sentence {}", index + 1);
            return Outcome::Misaligned(Mismatch::Tokens {
                sentence: index + 1,
                reference: ours.clone(),
                candidate: theirs.clone(),
            });
        }
    }

    Outcome::Aligned {
        sentences: reference.len(),
    }
}
