use crate::app::event::{Effect, Event};
use crate::app::render::render;
use crate::app::run_effect::RunEffect;
use crate::batch_runner::cancel::CancelToken;
use crate::batch_runner::main::BatchRunner;
use crate::config::Config;
use crate::display::interface::DisplaySurface;
use crate::image_classifier::interface::ImageClassifier;
use crate::inference_engine::InferenceEngine;
use crate::library::logger::interface::Logger;
use std::path::PathBuf;
use std::sync::mpsc::{channel, Receiver, TryRecvError};
use std::sync::Arc;

/// Foreground coordinator. User requests become effects that run on worker
/// threads; their results come back as events that `pump` applies to the display.
pub struct App {
    config: Config,
    logger: Arc<dyn Logger + Send + Sync>,
    run_effect: RunEffect,
    event_receiver: Receiver<Event>,
    batch_cancel: Option<CancelToken>,
    pending_single_images: usize,
}

impl App {
    pub fn new(
        config: Config,
        logger: Arc<dyn Logger + Send + Sync>,
        image_classifier: Arc<dyn ImageClassifier + Send + Sync>,
    ) -> Self {
        let (event_sender, event_receiver) = channel();
        let engine = InferenceEngine::new(image_classifier, logger.clone());
        let batch_runner = BatchRunner::new(
            engine.clone(),
            config.supported_extensions.clone(),
            logger.clone(),
        );
        let run_effect = RunEffect::new(
            logger.clone(),
            engine,
            batch_runner,
            config.thumbnail_size,
            event_sender,
        );

        Self {
            config,
            logger: logger.with_namespace("app"),
            run_effect,
            event_receiver,
            batch_cancel: None,
            pending_single_images: 0,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn is_batch_running(&self) -> bool {
        self.batch_cancel.is_some()
    }

    pub fn is_classifying_single_image(&self) -> bool {
        self.pending_single_images > 0
    }

    pub fn is_busy(&self) -> bool {
        self.is_batch_running() || self.is_classifying_single_image()
    }

    pub fn select_single_image(&mut self, path: PathBuf) {
        self.pending_single_images += 1;
        self.spawn_effect(Effect::ClassifySingleImage { path });
    }

    /// Starts a batch over `directory`. Refused while another batch is running.
    pub fn select_folder(&mut self, directory: PathBuf) -> bool {
        if self.is_batch_running() {
            let _ = self.logger.info(&format!(
                "Ignoring {}, a batch is already running",
                directory.display()
            ));
            return false;
        }

        let cancel = CancelToken::new();
        self.batch_cancel = Some(cancel.clone());

        // queued before the worker exists so the reset is always applied first
        self.run_effect.send(Event::BatchStarted {
            directory: directory.clone(),
        });
        self.spawn_effect(Effect::RunBatch { directory, cancel });

        true
    }

    pub fn cancel_batch(&self) {
        if let Some(cancel) = &self.batch_cancel {
            let _ = self.logger.info("Cancelling batch");
            cancel.cancel();
        }
    }

    /// Applies every pending event to `display` without blocking. Returns how many
    /// events were applied.
    pub fn pump(
        &mut self,
        display: &mut dyn DisplaySurface,
    ) -> Result<usize, Box<dyn std::error::Error + Send + Sync>> {
        let mut applied = 0;

        loop {
            let event = match self.event_receiver.try_recv() {
                Ok(event) => event,
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => {
                    return Err("event channel disconnected".into());
                }
            };

            let _ = self
                .logger
                .info(&format!("Event: {}", event.to_display_string()));

            match &event {
                Event::BatchStarted { directory } => {
                    let _ = self
                        .logger
                        .info(&format!("Batch started for {}", directory.display()));
                }
                Event::SingleImageDone { .. } => {
                    self.pending_single_images = self.pending_single_images.saturating_sub(1);
                }
                Event::BatchDone(_) | Event::BatchFailed(_) => {
                    self.batch_cancel = None;
                }
                _ => {}
            }

            render(event, display)?;
            applied += 1;
        }

        Ok(applied)
    }

    fn spawn_effect(&self, effect: Effect) {
        let run_effect = self.run_effect.clone();
        std::thread::spawn(move || run_effect.run_effect(effect));
    }
}

impl Drop for App {
    fn drop(&mut self) {
        self.cancel_batch();
    }
}
