use crate::app::event::{Effect, Event};
use crate::batch_runner::main::BatchRunner;
use crate::batch_runner::reporter::{BatchLine, BatchReporter, BatchSummary};
use crate::inference_engine::InferenceEngine;
use crate::library::logger::interface::Logger;
use std::sync::mpsc::Sender;
use std::sync::Arc;

/// Forwards batch output to the foreground as events.
pub struct ChannelReporter {
    event_sender: Sender<Event>,
}

impl ChannelReporter {
    pub fn new(event_sender: Sender<Event>) -> Self {
        Self { event_sender }
    }

    fn send(&self, event: Event) {
        // the window may already be gone
        let _ = self.event_sender.send(event);
    }
}

impl BatchReporter for ChannelReporter {
    fn report_progress(&self, percent: f32) {
        self.send(Event::BatchProgress(percent));
    }

    fn report_line(&self, line: BatchLine) {
        self.send(Event::BatchLine(line));
    }

    fn report_done(&self, summary: BatchSummary) {
        self.send(Event::BatchDone(summary));
    }
}

#[derive(Clone)]
pub struct RunEffect {
    logger: Arc<dyn Logger + Send + Sync>,
    engine: InferenceEngine,
    batch_runner: BatchRunner,
    thumbnail_size: u32,
    event_sender: Sender<Event>,
}

impl RunEffect {
    pub fn new(
        logger: Arc<dyn Logger + Send + Sync>,
        engine: InferenceEngine,
        batch_runner: BatchRunner,
        thumbnail_size: u32,
        event_sender: Sender<Event>,
    ) -> Self {
        Self {
            logger,
            engine,
            batch_runner,
            thumbnail_size,
            event_sender,
        }
    }

    pub fn send(&self, event: Event) {
        let _ = self.event_sender.send(event);
    }

    /// Blocking, runs on a worker thread.
    pub fn run_effect(&self, effect: Effect) {
        let _ = self.logger.info(&format!("Running effect: {:?}", effect));

        match effect {
            Effect::ClassifySingleImage { path } => {
                let result = self
                    .engine
                    .classify_with_thumbnail(&path, self.thumbnail_size)
                    .map_err(|e| e.to_string());
                if let Err(e) = &result {
                    let _ = self.logger.error(e);
                }
                let _ = self
                    .event_sender
                    .send(Event::SingleImageDone { path, result });
            }
            Effect::RunBatch { directory, cancel } => {
                let reporter = ChannelReporter::new(self.event_sender.clone());
                if let Err(e) = self.batch_runner.run_batch(&directory, &reporter, &cancel) {
                    let _ = self.logger.error(&e.to_string());
                    let _ = self.event_sender.send(Event::BatchFailed(e.to_string()));
                }
            }
        }
    }
}
