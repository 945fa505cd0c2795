/*!
 * Mock converter for testing the pipeline without an external program.
 *
 * - `MockConverter::scripted(outputs)` - writes a prepared CoNLL-U text per input
 * - `MockConverter::failing()` - always fails with a non-zero exit
 * - `MockConverter::noisy()` - fails the way a converter writing to stderr does
 * - `MockConverter::silent()` - reports success without writing any output
 */

use async_trait::async_trait;
use std::collections::HashMap;
use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use crate::errors::ConverterError;

use super::Converter;

/// Behavior mode for the mock converter
#[derive(Debug, Clone, PartialEq)]
pub enum MockBehavior {
    /// Write the prepared output for the input's file name
    Scripted,
    /// Always fail with the given exit code
    Failing { code: i32 },
    /// Exit successfully but complain on stderr
    Noisy,
    /// Exit successfully without writing anything
    Silent,
}

/// Scripted converter
#[derive(Debug)]
pub struct MockConverter {
    behavior: MockBehavior,
    /// CoNLL-U text to write, keyed by input file name
    outputs: HashMap<String, String>,
    /// Number of conversions requested so far
    calls: Arc<AtomicUsize>,
}

impl MockConverter {
    pub fn new(behavior: MockBehavior) -> Self {
        Self {
            behavior,
            outputs: HashMap::new(),
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Converter that writes `outputs[file_name]` for each input
    pub fn scripted<I, K, V>(outputs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut mock = Self::new(MockBehavior::Scripted);
        mock.outputs = outputs
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        mock
    }

    pub fn failing() -> Self {
        Self::new(MockBehavior::Failing { code: 1 })
    }

    pub fn noisy() -> Self {
        Self::new(MockBehavior::Noisy)
    }

    pub fn silent() -> Self {
        Self::new(MockBehavior::Silent)
    }

    /// Number of times `convert` was called
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn output_for(&self, input: &Path) -> Result<&String, ConverterError> {
        let name = input
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();
        self.outputs.get(&name).ok_or_else(|| ConverterError::ExitStatus {
            code: Some(2),
            stderr: format!("no scripted output for {}", name),
        })
    }
}

#[async_trait]
impl Converter for MockConverter {
    async fn convert(&self, input: &Path, output: &Path) -> Result<(), ConverterError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        match &self.behavior {
            MockBehavior::Failing { code } => Err(ConverterError::ExitStatus {
                code: Some(*code),
                stderr: "conversion failed".to_string(),
            }),
            MockBehavior::Noisy => Err(ConverterError::Stderr("warning: something odd".to_string())),
            MockBehavior::Silent => Ok(()),
            MockBehavior::Scripted => {
                let text = self.output_for(input)?;
                tokio::fs::write(output, text)
                    .await
                    .map_err(|e| ConverterError::Launch {
                        program: "mock".to_string(),
                        message: e.to_string(),
                    })
            }
        }
    }

    fn name(&self) -> &str {
        "mock"
    }
}
