use crate::app::event::Event;
use crate::app::render::render;
use crate::batch_runner::reporter::{BatchLine, BatchSummary};
use crate::display::impl_fake::{DisplayCall, DisplaySurfaceFake};
use crate::inference_engine::Prediction;
use image::RgbaImage;
use std::path::PathBuf;

#[test]
fn test_batch_events() {
    let mut display = DisplaySurfaceFake::new();

    render(
        Event::BatchStarted {
            directory: PathBuf::from("/scans"),
        },
        &mut display,
    )
    .unwrap();
    render(
        Event::BatchLine(BatchLine {
            file_name: "a.png".to_string(),
            outcome: Ok(12.5),
        }),
        &mut display,
    )
    .unwrap();
    render(Event::BatchProgress(100.0), &mut display).unwrap();
    render(Event::BatchDone(BatchSummary::default()), &mut display).unwrap();

    assert_eq!(
        display.calls,
        vec![
            DisplayCall::ResetProgress,
            DisplayCall::ClearResultLines,
            DisplayCall::AppendResultLine("a.png: 12.50%".to_string()),
            DisplayCall::AdvanceProgress(100.0),
            DisplayCall::NotifyBatchComplete(BatchSummary::default()),
        ]
    );
}

#[test]
fn test_single_image_uses_file_name() {
    let mut display = DisplaySurfaceFake::new();
    let prediction = Prediction {
        label: "Negative".to_string(),
        confidence_percent: 91.0,
    };

    render(
        Event::SingleImageDone {
            path: PathBuf::from("/scans/patient_7.jpeg"),
            result: Ok((prediction.clone(), RgbaImage::new(10, 20))),
        },
        &mut display,
    )
    .unwrap();

    assert_eq!(
        display.calls,
        vec![DisplayCall::ShowSingleResult {
            file_name: "patient_7.jpeg".to_string(),
            prediction,
            thumbnail_size: (10, 20),
        }]
    );
}

#[test]
fn test_failures_become_messages() {
    let mut display = DisplaySurfaceFake::new();

    render(Event::BatchFailed("no such folder".to_string()), &mut display).unwrap();

    assert_eq!(
        display.calls,
        vec![DisplayCall::ShowMessage {
            title: "Folder Error".to_string(),
            text: "no such folder".to_string(),
        }]
    );
}
