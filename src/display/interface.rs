use crate::batch_runner::reporter::BatchSummary;
use crate::inference_engine::Prediction;
use image::RgbaImage;
use std::error::Error;

/// Whatever shows results to the user. Only ever called from the foreground,
/// background work reaches it through `App::pump`.
pub trait DisplaySurface {
    /// Result of a single image classification with its thumbnail
    fn show_single_result(
        &mut self,
        file_name: &str,
        prediction: &Prediction,
        thumbnail: RgbaImage,
    ) -> Result<(), Box<dyn Error + Send + Sync>>;

    /// Modal notification, also used for request failures
    fn show_message(&mut self, title: &str, text: &str) -> Result<(), Box<dyn Error + Send + Sync>>;

    fn reset_progress(&mut self) -> Result<(), Box<dyn Error + Send + Sync>>;

    /// Adds `percent` to the current progress
    fn advance_progress(&mut self, percent: f32) -> Result<(), Box<dyn Error + Send + Sync>>;

    fn clear_result_lines(&mut self) -> Result<(), Box<dyn Error + Send + Sync>>;

    fn append_result_line(&mut self, text: &str) -> Result<(), Box<dyn Error + Send + Sync>>;

    fn notify_batch_complete(
        &mut self,
        summary: &BatchSummary,
    ) -> Result<(), Box<dyn Error + Send + Sync>>;
}
