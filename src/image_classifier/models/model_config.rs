use crate::config::Config;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq)]
pub struct ModelConfig {
    pub onnx_model_path: PathBuf,
    /// (height, width)
    pub input_shape: (u32, u32),
    pub class_labels: Vec<String>,
}

impl From<&Config> for ModelConfig {
    fn from(config: &Config) -> Self {
        Self {
            onnx_model_path: config.model_path.clone(),
            input_shape: config.input_shape,
            class_labels: config.class_labels.clone(),
        }
    }
}
