use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct Config {
    pub model_path: PathBuf,
    /// (height, width) the model was trained on
    pub input_shape: (u32, u32),
    /// Positional: must match the class order the model was trained with
    pub class_labels: Vec<String>,
    pub supported_extensions: Vec<String>,
    pub thumbnail_size: u32,
    pub window_title: String,
    pub window_size: (f32, f32),
    pub repaint_interval: Duration,
    pub logger_timezone: chrono::FixedOffset,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            model_path: PathBuf::from("tuberculosis_model.onnx"),
            input_shape: (150, 150),
            class_labels: vec!["Negative".to_string(), "Positive".to_string()],
            supported_extensions: vec!["png".to_string(), "jpg".to_string(), "jpeg".to_string()],
            thumbnail_size: 150,
            window_title: "Tuberculosis X-ray Classifier".to_string(),
            window_size: (800.0, 600.0),
            repaint_interval: Duration::from_millis(100),
            logger_timezone: local_offset(),
        }
    }
}

fn local_offset() -> chrono::FixedOffset {
    *chrono::Local::now().offset()
}
