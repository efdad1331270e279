use crate::image_classifier::interface::{Classification, ClassifierError, ImageClassifier};
use crate::library::logger::interface::Logger;
use image::{DynamicImage, RgbaImage};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq)]
pub struct Prediction {
    /// Label of the highest scoring class
    pub label: String,
    /// Highest class score as a percentage, always within [0, 100]
    pub confidence_percent: f32,
}

#[derive(Debug, Error)]
pub enum InferenceError {
    #[error("could not decode {path}: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
    #[error(transparent)]
    Classifier(#[from] ClassifierError),
}

/// Turns image files into predictions using the injected model.
#[derive(Clone)]
pub struct InferenceEngine {
    classifier: Arc<dyn ImageClassifier + Send + Sync>,
    logger: Arc<dyn Logger + Send + Sync>,
}

impl InferenceEngine {
    pub fn new(
        classifier: Arc<dyn ImageClassifier + Send + Sync>,
        logger: Arc<dyn Logger + Send + Sync>,
    ) -> Self {
        Self {
            classifier,
            logger: logger.with_namespace("inference_engine"),
        }
    }

    pub fn classify(&self, path: &Path) -> Result<Prediction, InferenceError> {
        let image = decode(path)?;
        let prediction = self.classify_image(&image)?;
        self.log_prediction(path, &prediction);

        Ok(prediction)
    }

    /// Prediction plus a display thumbnail, from a single decode of the file.
    pub fn classify_with_thumbnail(
        &self,
        path: &Path,
        max_side: u32,
    ) -> Result<(Prediction, RgbaImage), InferenceError> {
        let image = decode(path)?;
        let prediction = self.classify_image(&image)?;
        self.log_prediction(path, &prediction);

        Ok((prediction, thumbnail(&image, max_side)))
    }

    pub fn classify_image(&self, image: &DynamicImage) -> Result<Prediction, InferenceError> {
        let classifications = self.classifier.classify(image)?;
        Ok(best_prediction(&classifications)?)
    }

    fn log_prediction(&self, path: &Path, prediction: &Prediction) {
        let _ = self.logger.info(&format!(
            "{}: {} ({:.2}%)",
            path.display(),
            prediction.label,
            prediction.confidence_percent
        ));
    }
}

/// Image scaled down to fit in a `max_side` square, aspect ratio kept.
/// Smaller images are returned at their original size.
fn thumbnail(image: &DynamicImage, max_side: u32) -> RgbaImage {
    if image.width() <= max_side && image.height() <= max_side {
        return image.to_rgba8();
    }

    image.thumbnail(max_side, max_side).to_rgba8()
}

fn decode(path: &Path) -> Result<DynamicImage, InferenceError> {
    image::open(path).map_err(|source| InferenceError::Decode {
        path: path.to_path_buf(),
        source,
    })
}

fn best_prediction(classifications: &[Classification]) -> Result<Prediction, ClassifierError> {
    let best = classifications
        .iter()
        .filter(|c| !c.confidence.is_nan())
        .max_by(|a, b| a.confidence.total_cmp(&b.confidence))
        .ok_or_else(|| ClassifierError::Inference("model returned no scores".to_string()))?;

    Ok(Prediction {
        label: best.label.clone(),
        confidence_percent: best.confidence.clamp(0.0, 1.0) * 100.0,
    })
}
