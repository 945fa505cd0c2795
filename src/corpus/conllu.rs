/*!
 * Sentence extraction for CoNLL-U files.
 *
 * Sentences are blocks of ten-column, tab-separated token records separated
 * by blank lines. Lines starting with `#` are comments; `# sent_id = ...`
 * labels the sentence that follows. A final block is kept even when the file
 * does not end with a blank line.
 */

use log::trace;

use super::model::{CorpusFormat, Document, SentenceAccumulator};
use super::SentenceExtractor;

/// Number of columns in a CoNLL-U token record
pub const CONLLU_COLUMNS: usize = 10;

/// Index of the FORM column
const FORM_COLUMN: usize = 1;

const SENT_ID_PREFIX: &str = "sent_id";

/// Role of a single trimmed CoNLL-U line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConlluLine<'a> {
    /// Sentence boundary
    Blank,
    /// `# ...` comment; holds the sentence id when the comment is `sent_id`
    Comment(Option<&'a str>),
    /// Ten-column record; holds the FORM column
    Token(&'a str),
    /// Rows with any other column count
    Other,
}

impl<'a> ConlluLine<'a> {
    /// Classify a line that has already been trimmed
    pub fn classify(line: &'a str) -> Self {
        if line.is_empty() {
            return Self::Blank;
        }
        if let Some(comment) = line.strip_prefix('#') {
            return Self::Comment(parse_sent_id(comment));
        }
        let fields: Vec<&str> = line.split('\t').collect();
        if fields.len() == CONLLU_COLUMNS {
            Self::Token(fields[FORM_COLUMN])
        } else {
            trace!("Skipping CoNLL-U row with {} columns: {}", fields.len(), line);
            Self::Other
        }
    }
}

// "# sent_id = 12" -> Some("12")
fn parse_sent_id(comment: &str) -> Option<&str> {
    let (key, value) = comment.split_once('=')?;
    if key.trim() == SENT_ID_PREFIX {
        Some(value.trim())
    } else {
        None
    }
}

/// Extraction strategy for CoNLL-U files
#[derive(Debug, Default, Clone, Copy)]
pub struct ConlluExtractor;

impl SentenceExtractor for ConlluExtractor {
    fn format(&self) -> CorpusFormat {
        CorpusFormat::Conllu
    }

    fn extract_str(&self, content: &str) -> Document {
        let mut sentences = Vec::new();
        let mut current = SentenceAccumulator::default();

        for line in content.lines() {
            match ConlluLine::classify(line.trim()) {
                ConlluLine::Blank => current.flush_into(&mut sentences),
                ConlluLine::Comment(Some(id)) => current.set_id(id.to_string()),
                ConlluLine::Token(form) => current.push(form),
                ConlluLine::Comment(None) | ConlluLine::Other => {}
            }
        }

        current.flush_into(&mut sentences);
        Document::new(sentences)
    }
}
