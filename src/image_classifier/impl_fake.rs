use crate::image_classifier::interface::{Classification, ClassifierError, ImageClassifier};
use image::DynamicImage;

/// Scores an image by its mean brightness: brighter images lean "Positive".
/// Deterministic, so tests can assert on exact confidences.
pub struct ImageClassifierFake {
    labels: Vec<String>,
    fail_with: Option<String>,
}

impl ImageClassifierFake {
    pub fn new() -> Self {
        Self {
            labels: vec!["Negative".to_string(), "Positive".to_string()],
            fail_with: None,
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            fail_with: Some(message.to_string()),
            ..Self::new()
        }
    }
}

impl ImageClassifier for ImageClassifierFake {
    fn classify(&self, image: &DynamicImage) -> Result<Vec<Classification>, ClassifierError> {
        if let Some(message) = &self.fail_with {
            return Err(ClassifierError::Inference(message.clone()));
        }

        let luma = image.to_luma8();
        let pixel_count = (luma.width() as u64 * luma.height() as u64).max(1);
        let sum: u64 = luma.pixels().map(|p| p[0] as u64).sum();
        let brightness = sum as f32 / pixel_count as f32 / 255.0;

        Ok(vec![
            Classification {
                label: self.labels[0].clone(),
                confidence: 1.0 - brightness,
            },
            Classification {
                label: self.labels[1].clone(),
                confidence: brightness,
            },
        ])
    }
}
