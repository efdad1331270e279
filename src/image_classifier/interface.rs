use image::DynamicImage;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq)]
pub struct Classification {
    pub label: String,
    pub confidence: f32,
}

#[derive(Debug, Error)]
pub enum ClassifierError {
    #[error("failed to load model {path}: {reason}")]
    ModelLoad { path: String, reason: String },
    #[error("inference failed: {0}")]
    Inference(String),
    #[error("model returned {actual} scores but {expected} class labels are configured")]
    UnexpectedOutput { expected: usize, actual: usize },
}

/// A loaded model. Implementations are read-only after construction so a single
/// instance can be shared between the window and the batch worker.
pub trait ImageClassifier: Send + Sync {
    /// Returns one score per configured class label, in label order.
    fn classify(&self, image: &DynamicImage) -> Result<Vec<Classification>, ClassifierError>;
}

/// Pairs raw model scores with their positional labels.
pub fn label_scores(
    labels: &[String],
    scores: &[f32],
) -> Result<Vec<Classification>, ClassifierError> {
    if labels.len() != scores.len() {
        return Err(ClassifierError::UnexpectedOutput {
            expected: labels.len(),
            actual: scores.len(),
        });
    }

    Ok(labels
        .iter()
        .zip(scores)
        .map(|(label, &confidence)| Classification {
            label: label.clone(),
            confidence,
        })
        .collect())
}
