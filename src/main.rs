use app::main::App;
use config::Config;
use display::dialog::show_startup_error;
use display::impl_gui::ClassifierWindow;
use image_classifier::impl_tract_onnx::ImageClassifierTractOnnx;
use image_classifier::models::model_config::ModelConfig;
use library::logger::impl_console::LoggerConsole;
use library::logger::interface::Logger;
use std::sync::Arc;

mod app;
mod batch_runner;
mod config;
mod display;
mod image_classifier;
mod inference_engine;
mod library;

fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let config = Config::default();

    let logger = Arc::new(LoggerConsole::new(config.logger_timezone));

    let _ = logger.info(&format!("Loading model {}", config.model_path.display()));

    // only the error dialog is shown when the model cannot be loaded
    let image_classifier = match ImageClassifierTractOnnx::new(ModelConfig::from(&config)) {
        Ok(image_classifier) => Arc::new(image_classifier),
        Err(e) => {
            let _ = logger.error(&e.to_string());
            show_startup_error(&config.model_path, &e);
            return Err(e.into());
        }
    };

    let app = App::new(config.clone(), logger.clone(), image_classifier);

    let window = ClassifierWindow::new(app, logger.clone());
    let options = window.native_options();

    eframe::run_native(
        &config.window_title,
        options,
        Box::new(|_cc| Box::new(window)),
    )
    .map_err(|e| e.to_string())?;

    Ok(())
}
