use crate::app::main::App;
use crate::batch_runner::reporter::BatchSummary;
use crate::display::dialog::{pick_folder, pick_image};
use crate::display::interface::DisplaySurface;
use crate::inference_engine::Prediction;
use crate::library::logger::interface::Logger;
use eframe::egui;
use image::RgbaImage;
use std::collections::VecDeque;
use std::error::Error;
use std::sync::Arc;

const LOG_HEADER: &str = "Image name: Chance of Tuberculosis";

/// What the window shows. Only mutated through `DisplaySurface`.
#[derive(Default)]
pub struct DisplayGui {
    result_text: String,
    pending_thumbnail: Option<RgbaImage>,
    thumbnail: Option<egui::TextureHandle>,
    progress: f32,
    show_log_header: bool,
    result_lines: Vec<String>,
    /// (title, text), shown one at a time in arrival order
    messages: VecDeque<(String, String)>,
}

impl DisplayGui {
    pub fn new() -> Self {
        Self::default()
    }

    fn upload_thumbnail(&mut self, ctx: &egui::Context) {
        if let Some(thumbnail) = self.pending_thumbnail.take() {
            let size = [thumbnail.width() as usize, thumbnail.height() as usize];
            let image = egui::ColorImage::from_rgba_unmultiplied(size, thumbnail.as_raw());
            self.thumbnail = Some(ctx.load_texture("thumbnail", image, egui::TextureOptions::default()));
        }
    }

    pub fn current_message(&self) -> Option<&(String, String)> {
        self.messages.front()
    }

    pub fn dismiss_message(&mut self) {
        self.messages.pop_front();
    }
}

impl DisplaySurface for DisplayGui {
    fn show_single_result(
        &mut self,
        file_name: &str,
        prediction: &Prediction,
        thumbnail: RgbaImage,
    ) -> Result<(), Box<dyn Error + Send + Sync>> {
        self.result_text = format!(
            "{}: Chance of Tuberculosis ({:.2}%, {})",
            file_name, prediction.confidence_percent, prediction.label
        );
        self.pending_thumbnail = Some(thumbnail);
        Ok(())
    }

    fn show_message(&mut self, title: &str, text: &str) -> Result<(), Box<dyn Error + Send + Sync>> {
        self.messages.push_back((title.to_string(), text.to_string()));
        Ok(())
    }

    fn reset_progress(&mut self) -> Result<(), Box<dyn Error + Send + Sync>> {
        self.progress = 0.0;
        Ok(())
    }

    fn advance_progress(&mut self, percent: f32) -> Result<(), Box<dyn Error + Send + Sync>> {
        self.progress = (self.progress + percent).min(100.0);
        Ok(())
    }

    fn clear_result_lines(&mut self) -> Result<(), Box<dyn Error + Send + Sync>> {
        self.result_lines.clear();
        self.show_log_header = true;
        Ok(())
    }

    fn append_result_line(&mut self, text: &str) -> Result<(), Box<dyn Error + Send + Sync>> {
        self.result_lines.push(text.to_string());
        Ok(())
    }

    fn notify_batch_complete(
        &mut self,
        summary: &BatchSummary,
    ) -> Result<(), Box<dyn Error + Send + Sync>> {
        let mut text = if summary.cancelled {
            format!(
                "Prediction cancelled after {} of {} images.",
                summary.succeeded + summary.failed,
                summary.total
            )
        } else if summary.total == 0 {
            "No PNG or JPEG images found in the selected folder.".to_string()
        } else {
            "Prediction of Chest X-ray images in the selected folder completed.".to_string()
        };
        if summary.failed > 0 {
            text.push_str(&format!(" {} image(s) could not be classified.", summary.failed));
        }

        self.messages
            .push_back(("Prediction Completed".to_string(), text));
        Ok(())
    }
}

pub struct ClassifierWindow {
    app: App,
    display: DisplayGui,
    logger: Arc<dyn Logger + Send + Sync>,
    last_image: Option<String>,
    last_folder: Option<String>,
}

impl ClassifierWindow {
    pub fn new(app: App, logger: Arc<dyn Logger + Send + Sync>) -> Self {
        Self {
            app,
            display: DisplayGui::new(),
            logger: logger.with_namespace("gui"),
            last_image: None,
            last_folder: None,
        }
    }

    pub fn native_options(&self) -> eframe::NativeOptions {
        let (width, height) = self.app.config().window_size;
        eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default().with_inner_size([width, height]),
            ..Default::default()
        }
    }

    fn controls(&mut self, ui: &mut egui::Ui) {
        ui.vertical_centered(|ui| {
            let enabled = !self.app.is_classifying_single_image();
            if ui
                .add_enabled(enabled, egui::Button::new("Select Single Image"))
                .clicked()
            {
                if let Some(path) = pick_image(&self.app.config().supported_extensions) {
                    let _ = self.logger.info(&format!("Selected image {}", path.display()));
                    self.last_image = Some(path.display().to_string());
                    self.app.select_single_image(path);
                }
            }
            if let Some(image) = &self.last_image {
                ui.small(image.as_str());
            }

            ui.add_space(10.0);

            let running = self.app.is_batch_running();
            ui.horizontal(|ui| {
                if ui
                    .add_enabled(!running, egui::Button::new("Select Folder"))
                    .clicked()
                {
                    if let Some(directory) = pick_folder() {
                        let _ = self
                            .logger
                            .info(&format!("Selected folder {}", directory.display()));
                        self.last_folder = Some(directory.display().to_string());
                        self.app.select_folder(directory);
                    }
                }
                if ui.add_enabled(running, egui::Button::new("Cancel")).clicked() {
                    self.app.cancel_batch();
                }
            });
            if let Some(folder) = &self.last_folder {
                ui.small(folder.as_str());
            }
        });
    }

    fn results(&self, ui: &mut egui::Ui) {
        if !self.display.result_text.is_empty() {
            ui.label(egui::RichText::new(&self.display.result_text).size(16.0));
        }

        if let Some(thumbnail) = &self.display.thumbnail {
            ui.image((thumbnail.id(), thumbnail.size_vec2()));
        }

        ui.separator();

        egui::ScrollArea::vertical()
            .max_height(260.0)
            .stick_to_bottom(true)
            .show(ui, |ui| {
                if self.display.show_log_header {
                    ui.label(egui::RichText::new(LOG_HEADER).strong());
                }
                for line in &self.display.result_lines {
                    ui.monospace(line);
                }
            });

        ui.add(egui::ProgressBar::new(self.display.progress / 100.0).show_percentage());
    }

    fn message(&mut self, ctx: &egui::Context) {
        let mut dismissed = false;

        if let Some((title, text)) = self.display.current_message() {
            egui::Window::new(title.as_str())
                .collapsible(false)
                .resizable(false)
                .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
                .show(ctx, |ui| {
                    ui.label(text.as_str());
                    if ui.button("OK").clicked() {
                        dismissed = true;
                    }
                });
        }

        if dismissed {
            self.display.dismiss_message();
        }
    }
}

impl eframe::App for ClassifierWindow {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if let Err(e) = self.app.pump(&mut self.display) {
            let _ = self.logger.error(&e.to_string());
        }
        self.display.upload_thumbnail(ctx);

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.heading(self.app.config().window_title.as_str());
            });
            ui.add_space(10.0);
            self.controls(ui);
            ui.add_space(10.0);
            self.results(ui);
        });

        self.message(ctx);

        if self.app.is_busy() {
            ctx.request_repaint_after(self.app.config().repaint_interval);
        }
    }
}
