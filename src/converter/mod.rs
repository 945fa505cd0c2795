/*!
 * Conversion backends that turn an SSF file into CoNLL-U.
 *
 * The converter itself is an independently versioned external program; this
 * module only launches it and reports whether it succeeded:
 * - `external`: runs the configured command
 * - `mock`: scripted converter for tests
 */

use async_trait::async_trait;
use std::fmt::Debug;
use std::path::Path;

use crate::errors::ConverterError;

/// Common trait for conversion backends
#[async_trait]
pub trait Converter: Send + Sync + Debug {
    /// Convert `input` into a CoNLL-U file at `output`
    ///
    /// # Returns
    /// * `Result<(), ConverterError>` - Ok if the converter reported success
    async fn convert(&self, input: &Path, output: &Path) -> Result<(), ConverterError>;

    /// Short name used in log messages
    fn name(&self) -> &str;
}

pub mod external;
pub mod mock;

pub use external::ExternalConverter;
pub use mock::{MockBehavior, MockConverter};
