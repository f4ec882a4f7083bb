use crate::display;
use crate::error::OcrError;
use crate::imaging;
use std::path::Path;

/// Title of the viewer window
pub const VIEWER_WINDOW_TITLE: &str = "Display window";

/// Load `path` and show it until a key is pressed
pub fn view(path: &Path) -> Result<(), OcrError> {
    let image = imaging::load(path)?;
    tracing::info!("Displaying {:?}", path);
    display::show_and_wait(VIEWER_WINDOW_TITLE, &image.into_rgb8())
}
