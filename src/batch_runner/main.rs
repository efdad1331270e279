use crate::batch_runner::cancel::CancelToken;
use crate::batch_runner::reporter::{BatchLine, BatchReporter, BatchSummary};
use crate::batch_runner::scan::list_qualifying_files;
use crate::inference_engine::InferenceEngine;
use crate::library::logger::interface::Logger;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BatchError {
    #[error("could not read folder {path}: {source}")]
    ReadDirectory {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Clone)]
pub struct BatchRunner {
    engine: InferenceEngine,
    extensions: Vec<String>,
    logger: Arc<dyn Logger + Send + Sync>,
}

impl BatchRunner {
    pub fn new(
        engine: InferenceEngine,
        extensions: Vec<String>,
        logger: Arc<dyn Logger + Send + Sync>,
    ) -> Self {
        Self {
            engine,
            extensions,
            logger: logger.with_namespace("batch_runner"),
        }
    }

    /// Classifies every qualifying file in `directory`, in file name order.
    ///
    /// Per file the reporter receives one line followed by one progress advance of
    /// `100 / total`. A file that fails to classify becomes a failed line and the
    /// run carries on. Completion is reported once, also for an empty folder and
    /// for a cancelled run. Only an unreadable folder is an error, in which case
    /// nothing is reported.
    pub fn run_batch(
        &self,
        directory: &Path,
        reporter: &dyn BatchReporter,
        cancel: &CancelToken,
    ) -> Result<BatchSummary, BatchError> {
        let files = list_qualifying_files(directory, &self.extensions).map_err(|source| {
            BatchError::ReadDirectory {
                path: directory.to_path_buf(),
                source,
            }
        })?;

        let mut summary = BatchSummary {
            total: files.len(),
            ..BatchSummary::default()
        };

        let _ = self.logger.info(&format!(
            "Classifying {} image(s) in {}",
            summary.total,
            directory.display()
        ));

        if files.is_empty() {
            reporter.report_done(summary);
            return Ok(summary);
        }

        let increment = 100.0 / summary.total as f32;

        for path in &files {
            if cancel.is_cancelled() {
                let _ = self.logger.info("Batch cancelled");
                summary.cancelled = true;
                break;
            }

            let file_name = path
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_else(|| path.display().to_string());

            let outcome = match self.engine.classify(path) {
                Ok(prediction) => {
                    summary.succeeded += 1;
                    Ok(prediction.confidence_percent)
                }
                Err(e) => {
                    let _ = self.logger.error(&format!("{}: {}", file_name, e));
                    summary.failed += 1;
                    Err(e.to_string())
                }
            };

            reporter.report_line(BatchLine { file_name, outcome });
            reporter.report_progress(increment);
        }

        let _ = self.logger.info(&format!(
            "Batch finished: {} succeeded, {} failed",
            summary.succeeded, summary.failed
        ));

        reporter.report_done(summary);

        Ok(summary)
    }
}
