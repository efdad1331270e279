use crate::app::event::Event;
use crate::display::interface::DisplaySurface;
use std::error::Error;

/// Applies one event to the display. Must run on the thread that owns the surface.
pub fn render(event: Event, display: &mut dyn DisplaySurface) -> Result<(), Box<dyn Error + Send + Sync>> {
    match event {
        Event::SingleImageDone { path, result } => match result {
            Ok((prediction, thumbnail)) => {
                let file_name = path
                    .file_name()
                    .map(|name| name.to_string_lossy().into_owned())
                    .unwrap_or_else(|| path.display().to_string());
                display.show_single_result(&file_name, &prediction, thumbnail)?;
            }
            Err(message) => {
                display.show_message("Prediction Failed", &message)?;
            }
        },
        Event::BatchStarted { .. } => {
            display.reset_progress()?;
            display.clear_result_lines()?;
        }
        Event::BatchProgress(percent) => {
            display.advance_progress(percent)?;
        }
        Event::BatchLine(line) => {
            display.append_result_line(&line.to_string())?;
        }
        Event::BatchDone(summary) => {
            display.notify_batch_complete(&summary)?;
        }
        Event::BatchFailed(message) => {
            display.show_message("Folder Error", &message)?;
        }
    }

    Ok(())
}
