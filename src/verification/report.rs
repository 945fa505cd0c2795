/*!
 * Human readable rendering of verification outcomes.
 */

use std::fmt;

use crate::corpus::{CorpusFormat, Sentence};

use super::alignment::{Mismatch, Outcome};

/// Labels naming the reference and candidate side of a comparison
#[derive(Debug, Clone)]
pub struct ReportLabels {
    pub reference: String,
    pub candidate: String,
}

impl ReportLabels {
    pub fn new(reference: impl Into<String>, candidate: impl Into<String>) -> Self {
        Self {
            reference: reference.into(),
            candidate: candidate.into(),
        }
    }

    /// Labels derived from the two formats being compared
    pub fn for_formats(reference: CorpusFormat, candidate: CorpusFormat) -> Self {
        Self::new(reference.display_name(), candidate.display_name())
    }
}

impl Default for ReportLabels {
    fn default() -> Self {
        Self::for_formats(CorpusFormat::Ssf, CorpusFormat::Conllu)
    }
}

/// Renders an `Outcome` with labels via `Display`
pub struct Report<'a> {
    outcome: &'a Outcome,
    labels: &'a ReportLabels,
}

impl<'a> Report<'a> {
    pub fn new(outcome: &'a Outcome, labels: &'a ReportLabels) -> Self {
        Self { outcome, labels }
    }
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.outcome {
            Outcome::Aligned { sentences } => write!(
                f,
                "All sentences match between {} and {} ({} sentences).",
                self.labels.reference, self.labels.candidate, sentences
            ),
            Outcome::Misaligned(mismatch) => write!(f, "{}", MismatchReport::new(mismatch, self.labels)),
        }
    }
}

/// Renders a single `Mismatch`
pub struct MismatchReport<'a> {
    mismatch: &'a Mismatch,
    labels: &'a ReportLabels,
}

impl<'a> MismatchReport<'a> {
    pub fn new(mismatch: &'a Mismatch, labels: &'a ReportLabels) -> Self {
        Self { mismatch, labels }
    }
}

impl fmt::Display for MismatchReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.mismatch {
            Mismatch::SentenceCount { reference, candidate } => write!(
                f,
                "Mismatch in number of sentences: {}={}, {}={}",
                self.labels.reference, reference, self.labels.candidate, candidate
            ),
            Mismatch::Tokens { sentence, reference, candidate } => {
                let width = self.labels.reference.len().max(self.labels.candidate.len()) + 1;
                writeln!(f, "Sentence {} tokens mismatch:", sentence)?;
                write_side(f, &self.labels.reference, width, reference)?;
                writeln!(f)?;
                write_side(f, &self.labels.candidate, width, candidate)
            }
        }
    }
}

fn write_side(f: &mut fmt::Formatter<'_>, label: &str, width: usize, sentence: &Sentence) -> fmt::Result {
    let label = format!("{}:", label);
    write!(f, "  {:<width$} {}", label, sentence.joined(), width = width)?;
    if let Some(id) = sentence.id() {
        write!(f, "  [id {}]", id)?;
    }
    Ok(())
}
