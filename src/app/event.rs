use crate::batch_runner::cancel::CancelToken;
use crate::batch_runner::reporter::{BatchLine, BatchSummary};
use crate::inference_engine::Prediction;
use image::RgbaImage;
use std::path::PathBuf;

#[derive(Debug)]
pub enum Event {
    SingleImageDone {
        path: PathBuf,
        result: Result<(Prediction, RgbaImage), String>,
    },
    BatchStarted {
        directory: PathBuf,
    },
    BatchProgress(f32),
    BatchLine(BatchLine),
    BatchDone(BatchSummary),
    BatchFailed(String),
}

impl Event {
    pub fn to_display_string(&self) -> String {
        match self {
            Event::SingleImageDone {
                path,
                result: Ok((prediction, _thumbnail)),
            } => format!(
                "SingleImageDone {{ path: {:?}, prediction: {:?} }}",
                path, prediction
            ),
            event => format!("{:?}", event),
        }
    }
}

#[derive(Clone, Debug)]
pub enum Effect {
    ClassifySingleImage { path: PathBuf },
    RunBatch { directory: PathBuf, cancel: CancelToken },
}
