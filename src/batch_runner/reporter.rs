use std::fmt;

/// One entry of the result log.
#[derive(Debug, Clone, PartialEq)]
pub struct BatchLine {
    pub file_name: String,
    /// Confidence percentage, or the reason the file could not be classified
    pub outcome: Result<f32, String>,
}

impl fmt::Display for BatchLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.outcome {
            Ok(confidence) => write!(f, "{}: {:.2}%", self.file_name, confidence),
            Err(reason) => write!(f, "{}: failed ({})", self.file_name, reason),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BatchSummary {
    pub total: usize,
    pub succeeded: usize,
    pub failed: usize,
    pub cancelled: bool,
}

/// Receives the incremental output of a batch run. Called from the worker thread.
pub trait BatchReporter: Send + Sync {
    /// Advance progress by `percent` (not an absolute value).
    fn report_progress(&self, percent: f32);
    fn report_line(&self, line: BatchLine);
    /// Called exactly once per successful run, after every line and progress report.
    fn report_done(&self, summary: BatchSummary);
}
