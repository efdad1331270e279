use crate::batch_runner::reporter::BatchSummary;
use crate::display::interface::DisplaySurface;
use crate::inference_engine::Prediction;
use image::RgbaImage;
use std::error::Error;

#[derive(Debug, Clone, PartialEq)]
pub enum DisplayCall {
    ShowSingleResult {
        file_name: String,
        prediction: Prediction,
        thumbnail_size: (u32, u32),
    },
    ShowMessage {
        title: String,
        text: String,
    },
    ResetProgress,
    AdvanceProgress(f32),
    ClearResultLines,
    AppendResultLine(String),
    NotifyBatchComplete(BatchSummary),
}

/// Records every call so tests can assert on what the user would have seen.
#[derive(Debug, Default)]
pub struct DisplaySurfaceFake {
    pub calls: Vec<DisplayCall>,
    pub progress: f32,
}

impl DisplaySurfaceFake {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn result_lines(&self) -> Vec<String> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                DisplayCall::AppendResultLine(line) => Some(line.clone()),
                _ => None,
            })
            .collect()
    }

    pub fn completions(&self) -> Vec<BatchSummary> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                DisplayCall::NotifyBatchComplete(summary) => Some(*summary),
                _ => None,
            })
            .collect()
    }
}

impl DisplaySurface for DisplaySurfaceFake {
    fn show_single_result(
        &mut self,
        file_name: &str,
        prediction: &Prediction,
        thumbnail: RgbaImage,
    ) -> Result<(), Box<dyn Error + Send + Sync>> {
        self.calls.push(DisplayCall::ShowSingleResult {
            file_name: file_name.to_string(),
            prediction: prediction.clone(),
            thumbnail_size: thumbnail.dimensions(),
        });
        Ok(())
    }

    fn show_message(&mut self, title: &str, text: &str) -> Result<(), Box<dyn Error + Send + Sync>> {
        self.calls.push(DisplayCall::ShowMessage {
            title: title.to_string(),
            text: text.to_string(),
        });
        Ok(())
    }

    fn reset_progress(&mut self) -> Result<(), Box<dyn Error + Send + Sync>> {
        self.progress = 0.0;
        self.calls.push(DisplayCall::ResetProgress);
        Ok(())
    }

    fn advance_progress(&mut self, percent: f32) -> Result<(), Box<dyn Error + Send + Sync>> {
        self.progress += percent;
        self.calls.push(DisplayCall::AdvanceProgress(percent));
        Ok(())
    }

    fn clear_result_lines(&mut self) -> Result<(), Box<dyn Error + Send + Sync>> {
        self.calls.push(DisplayCall::ClearResultLines);
        Ok(())
    }

    fn append_result_line(&mut self, text: &str) -> Result<(), Box<dyn Error + Send + Sync>> {
        self.calls.push(DisplayCall::AppendResultLine(text.to_string()));
        Ok(())
    }

    fn notify_batch_complete(
        &mut self,
        summary: &BatchSummary,
    ) -> Result<(), Box<dyn Error + Send + Sync>> {
        self.calls.push(DisplayCall::NotifyBatchComplete(*summary));
        Ok(())
    }
}
