use crate::image_classifier::interface::{
    label_scores, Classification, ClassifierError, ImageClassifier,
};
use crate::image_classifier::models::model_config::ModelConfig;
use crate::image_classifier::tract::image::resize_image_to_tensor;
use image::DynamicImage;
use tract_onnx::prelude::*;

pub struct ImageClassifierTractOnnx {
    model: SimplePlan<TypedFact, Box<dyn TypedOp>, TypedModel>,
    config: ModelConfig,
}

impl ImageClassifierTractOnnx {
    pub fn new(config: ModelConfig) -> Result<Self, ClassifierError> {
        let (height, width) = config.input_shape;

        let model = tract_onnx::onnx()
            .model_for_path(&config.onnx_model_path)
            .and_then(|model| {
                model.with_input_fact(
                    0,
                    f32::fact([1, height as usize, width as usize, 3]).into(),
                )
            })
            .and_then(|model| model.into_optimized())
            .and_then(|model| model.into_runnable())
            .map_err(|e| ClassifierError::ModelLoad {
                path: config.onnx_model_path.display().to_string(),
                reason: e.to_string(),
            })?;

        Ok(Self { model, config })
    }
}

impl ImageClassifier for ImageClassifierTractOnnx {
    fn classify(&self, image: &DynamicImage) -> Result<Vec<Classification>, ClassifierError> {
        let (height, width) = self.config.input_shape;
        let input = resize_image_to_tensor(image, width, height);

        let outputs = self
            .model
            .run(tvec!(input.into_tvalue()))
            .map_err(|e| ClassifierError::Inference(e.to_string()))?;

        let output = outputs
            .first()
            .ok_or_else(|| ClassifierError::Inference("model produced no outputs".to_string()))?
            .to_array_view::<f32>()
            .map_err(|e| ClassifierError::Inference(e.to_string()))?;

        // [1, classes] for a batch of one
        let scores: Vec<f32> = output.iter().copied().collect();

        label_scores(&self.config.class_labels, &scores)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageBuffer, Rgb};
    use std::path::PathBuf;

    /// Scores [1 - mean, mean] of the input tensor, shape [1, 2].
    fn mean_brightness_model() -> ImageClassifierTractOnnx {
        let config = ModelConfig {
            onnx_model_path: PathBuf::from(concat!(
                env!("CARGO_MANIFEST_DIR"),
                "/src/image_classifier/models/mean_brightness.onnx"
            )),
            input_shape: (150, 150),
            class_labels: vec!["Negative".to_string(), "Positive".to_string()],
        };
        ImageClassifierTractOnnx::new(config).unwrap()
    }

    fn solid(width: u32, height: u32, value: u8) -> DynamicImage {
        DynamicImage::ImageRgb8(ImageBuffer::from_pixel(width, height, Rgb([value, value, value])))
    }

    fn assert_scores(classifications: &[Classification], negative: f32, positive: f32) {
        assert_eq!(classifications.len(), 2);
        assert_eq!(classifications[0].label, "Negative");
        assert_eq!(classifications[1].label, "Positive");
        assert!((classifications[0].confidence - negative).abs() < 1e-4);
        assert!((classifications[1].confidence - positive).abs() < 1e-4);
    }

    #[test]
    fn test_white_image_is_positive() {
        let classifier = mean_brightness_model();

        // not 150x150, gets stretched to the model input
        let classifications = classifier.classify(&solid(300, 100, 255)).unwrap();

        assert_scores(&classifications, 0.0, 1.0);
    }

    #[test]
    fn test_black_image_is_negative() {
        let classifier = mean_brightness_model();

        let classifications = classifier.classify(&solid(40, 40, 0)).unwrap();

        assert_scores(&classifications, 1.0, 0.0);
    }

    #[test]
    fn test_gray_image_scores_follow_pixel_values() {
        let classifier = mean_brightness_model();

        let classifications = classifier.classify(&solid(150, 150, 51)).unwrap();

        assert_scores(&classifications, 0.8, 0.2);
    }

    #[test]
    fn test_label_count_must_match_outputs() {
        let config = ModelConfig {
            onnx_model_path: PathBuf::from(concat!(
                env!("CARGO_MANIFEST_DIR"),
                "/src/image_classifier/models/mean_brightness.onnx"
            )),
            input_shape: (150, 150),
            class_labels: vec![
                "Negative".to_string(),
                "Positive".to_string(),
                "Unknown".to_string(),
            ],
        };
        let classifier = ImageClassifierTractOnnx::new(config).unwrap();

        let result = classifier.classify(&solid(10, 10, 0));

        assert!(matches!(
            result,
            Err(ClassifierError::UnexpectedOutput {
                expected: 3,
                actual: 2
            })
        ));
    }

    #[test]
    fn test_missing_model_is_a_load_error() {
        let config = ModelConfig {
            onnx_model_path: PathBuf::from("./does/not/exist.onnx"),
            input_shape: (150, 150),
            class_labels: vec!["Negative".to_string(), "Positive".to_string()],
        };

        let result = ImageClassifierTractOnnx::new(config);

        match result {
            Err(ClassifierError::ModelLoad { path, .. }) => {
                assert!(path.ends_with("exist.onnx"));
            }
            _ => panic!("expected a model load error"),
        }
    }
}
