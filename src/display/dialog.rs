use std::path::{Path, PathBuf};

const IMAGE_FILTER_NAME: &str = "Chest X-ray images";

/// Native file picker limited to the supported extensions. Blocks until closed.
pub fn pick_image(extensions: &[String]) -> Option<PathBuf> {
    let filter = extension_filter(extensions);

    rfd::FileDialog::new()
        .set_title("Select Single Image")
        .add_filter(IMAGE_FILTER_NAME, filter.as_slice())
        .pick_file()
}

pub fn pick_folder() -> Option<PathBuf> {
    rfd::FileDialog::new()
        .set_title("Select Folder")
        .pick_folder()
}

/// Shown instead of the main window when the model cannot be loaded.
pub fn show_startup_error(model_path: &Path, error: &dyn std::error::Error) {
    let _ = rfd::MessageDialog::new()
        .set_level(rfd::MessageLevel::Error)
        .set_title("Model Loading Failed")
        .set_description(startup_error_text(model_path, error))
        .set_buttons(rfd::MessageButtons::Ok)
        .show();
}

fn startup_error_text(model_path: &Path, error: &dyn std::error::Error) -> String {
    format!(
        "The classification model at {} could not be loaded.\n\n{}",
        model_path.display(),
        error
    )
}

fn extension_filter(extensions: &[String]) -> Vec<&str> {
    extensions.iter().map(|e| e.trim_start_matches('.')).collect()
}
