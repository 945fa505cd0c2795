/*!
 * Converter backed by an external process.
 */

use async_trait::async_trait;
use log::{debug, trace};
use std::path::Path;
use std::time::Duration;
use tokio::process::Command;

use crate::app_config::ConverterConfig;
use crate::errors::ConverterError;

use super::Converter;

/// Runs the configured converter command once per file
#[derive(Debug, Clone)]
pub struct ExternalConverter {
    config: ConverterConfig,
}

impl ExternalConverter {
    pub fn new(config: ConverterConfig) -> Self {
        Self { config }
    }
}

#[async_trait]
impl Converter for ExternalConverter {
    async fn convert(&self, input: &Path, output: &Path) -> Result<(), ConverterError> {
        let args = self.config.render_args(input, output);
        debug!("Running converter: {} {}", self.config.program, args.join(" "));

        let mut command = Command::new(&self.config.program);
        command.args(&args).kill_on_drop(true);

        let result = match self.config.timeout_secs {
            Some(secs) => tokio::time::timeout(Duration::from_secs(secs), command.output())
                .await
                .map_err(|_| ConverterError::Timeout(secs))?,
            None => command.output().await,
        };

        let output = result.map_err(|e| ConverterError::Launch {
            program: self.config.program.clone(),
            message: e.to_string(),
        })?;

        trace!("Converter stdout: {}", String::from_utf8_lossy(&output.stdout));
        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();

        if !output.status.success() {
            return Err(ConverterError::ExitStatus {
                code: output.status.code(),
                stderr,
            });
        }

        if self.config.fail_on_stderr && !stderr.is_empty() {
            return Err(ConverterError::Stderr(stderr));
        }

        Ok(())
    }

    fn name(&self) -> &str {
        &self.config.program
    }
}
