/*!
 * Corpus format extraction.
 *
 * Turns a structured annotation file into a `Document`: the ordered
 * sentences of the file, each reduced to its ordered surface tokens.
 * Everything else in the file (chunk structure, features, dependency
 * columns, comments) is ignored.
 *
 * # Architecture
 *
 * - `model`: `Sentence`, `Document` and `CorpusFormat`
 * - `ssf`: SSF strategy, sentences completed by explicit close markers
 * - `conllu`: CoNLL-U strategy, sentences completed by blank lines or EOF
 *
 * The two strategies stay separate on purpose: they disagree on whether an
 * unterminated final sentence counts.
 */

pub mod model;
pub mod ssf;
pub mod conllu;

use std::fs;
use std::path::Path;

use log::debug;

use crate::errors::CorpusError;

// Re-export main types
pub use model::{CorpusFormat, Document, Sentence, Token};
pub use ssf::SsfExtractor;
pub use conllu::ConlluExtractor;

/// A format-specific extraction strategy
pub trait SentenceExtractor {
    /// Format handled by this extractor
    fn format(&self) -> CorpusFormat;

    /// Extract sentences from in-memory file content
    fn extract_str(&self, content: &str) -> Document;

    /// Read a file to completion and extract its sentences
    fn extract_file(&self, path: &Path) -> Result<Document, CorpusError> {
        let content = fs::read_to_string(path).map_err(|source| CorpusError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let document = self.extract_str(&content);
        debug!(
            "Extracted {} sentences ({} tokens) from {} file {:?}",
            document.len(),
            document.token_count(),
            self.format(),
            path
        );

        Ok(document)
    }
}

/// Extractor for the given format
pub fn extractor_for(format: CorpusFormat) -> &'static dyn SentenceExtractor {
    match format {
        CorpusFormat::Ssf => &SsfExtractor,
        CorpusFormat::Conllu => &ConlluExtractor,
    }
}

/// Extract the document held by `path` in the given format
pub fn extract<P: AsRef<Path>>(path: P, format: CorpusFormat) -> Result<Document, CorpusError> {
    extractor_for(format).extract_file(path.as_ref())
}
