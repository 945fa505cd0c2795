/*!
 * Sentence extraction for Shakti Standard Format (SSF) files.
 *
 * SSF brackets each sentence between `<Sentence ...>` and `</Sentence>`
 * lines. Inside, chunk lines (`1 (( NP <fs ...>`, `))`) are interleaved with
 * token records indexed `<chunk>.<token>`:
 *
 * ```text
 * <Sentence id='1'>
 * 1       ((      NP      <fs name='NP'>
 * 1.1     The     DT      <fs af='the,det,,,,,,'>
 * 1.2     cat     NN      <fs af='cat,n,,sg,,,,'>
 *         ))
 * </Sentence>
 * ```
 *
 * Only an explicit close marker completes a sentence. A sentence left open
 * at end of file is dropped.
 */

use log::trace;
use once_cell::sync::Lazy;
use regex::Regex;

use super::model::{CorpusFormat, Document, SentenceAccumulator};
use super::SentenceExtractor;

const SENTENCE_OPEN: &str = "<Sentence";
const SENTENCE_CLOSE: &str = "</Sentence>";

/// Regex for the hierarchical token index at the start of a record
static TOKEN_INDEX_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\d+\.\d+\s+").expect("Invalid SSF token index regex")
});

/// Regex for the `id` attribute of a sentence-open marker
static SENTENCE_ID_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"id\s*=\s*['"]([^'"]*)['"]"#).expect("Invalid SSF sentence id regex")
});

/// Role of a single trimmed SSF line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SsfLine<'a> {
    /// `<Sentence ...>` with its id attribute when present
    Open(Option<&'a str>),
    /// `</Sentence>`
    Close,
    /// Token record; holds the surface form (tab field 1)
    Token(&'a str),
    /// Chunk brackets, headers, malformed records and anything else
    Other,
}

impl<'a> SsfLine<'a> {
    /// Classify a line that has already been trimmed
    pub fn classify(line: &'a str) -> Self {
        if line.starts_with(SENTENCE_OPEN) {
            let id = SENTENCE_ID_REGEX
                .captures(line)
                .and_then(|caps| caps.get(1))
                .map(|m| m.as_str());
            return Self::Open(id);
        }
        if line.starts_with(SENTENCE_CLOSE) {
            return Self::Close;
        }
        if TOKEN_INDEX_REGEX.is_match(line) {
            if let Some(form) = line.split('\t').nth(1) {
                return Self::Token(form);
            }
            trace!("Skipping SSF record without a token field: {}", line);
        }
        Self::Other
    }
}

/// Extraction strategy for SSF files
#[derive(Debug, Default, Clone, Copy)]
pub struct SsfExtractor;

impl SentenceExtractor for SsfExtractor {
    fn format(&self) -> CorpusFormat {
        CorpusFormat::Ssf
    }

    fn extract_str(&self, content: &str) -> Document {
        let mut sentences = Vec::new();
        let mut current = SentenceAccumulator::default();

        for line in content.lines() {
            match SsfLine::classify(line.trim()) {
                SsfLine::Open(id) => current.reset(id.map(str::to_string)),
                SsfLine::Close => current.flush_into(&mut sentences),
                SsfLine::Token(form) => current.push(form),
                SsfLine::Other => {}
            }
        }

        // An unterminated trailing sentence is intentionally not flushed here.
        Document::new(sentences)
    }
}
