/*!
 * Alignment verification between a source corpus file and its conversion.
 *
 * # Architecture
 *
 * - `alignment`: the pure `verify` decision and its `Outcome`
 * - `report`: labelled, human readable rendering of an `Outcome`
 */

pub mod alignment;
pub mod report;

use std::path::Path;

use crate::corpus::{self, CorpusFormat};
use crate::errors::CorpusError;

// Re-export main types
pub use alignment::{verify, Mismatch, Outcome};
pub use report::{MismatchReport, Report, ReportLabels};

/// Extract an SSF file and its CoNLL-U conversion, then align them.
///
/// Both documents are fully built before any comparison starts. Only I/O
/// failures are errors; disagreement is reported through the `Outcome`.
pub fn verify_files<P1: AsRef<Path>, P2: AsRef<Path>>(
    ssf_path: P1,
    conllu_path: P2,
) -> Result<Outcome, CorpusError> {
    let reference = corpus::extract(ssf_path, CorpusFormat::Ssf)?;
    let candidate = corpus::extract(conllu_path, CorpusFormat::Conllu)?;
    Ok(verify(&reference, &candidate))
}
