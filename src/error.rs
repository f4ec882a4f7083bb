use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum OcrError {
    #[error("Could not read image: {} ({source})", path.display())]
    ImageLoad {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("Could not initialize OCR engine: {0}")]
    InitializationError(String),

    #[error("Preprocessing failed: {0}")]
    PreprocessingError(String),

    #[error("Failed to process image: {0}")]
    ProcessingError(String),

    #[error("Could not save image to {}: {source}", path.display())]
    SaveError {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("Could not display image: {0}")]
    DisplayError(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl OcrError {
    /// Short machine-readable code, used in logs
    pub fn code(&self) -> &'static str {
        match self {
            OcrError::ImageLoad { .. } => "LOAD_ERROR",
            OcrError::InitializationError(_) => "INIT_ERROR",
            OcrError::PreprocessingError(_) => "PREPROCESSING_ERROR",
            OcrError::ProcessingError(_) => "PROCESSING_ERROR",
            OcrError::SaveError { .. } => "SAVE_ERROR",
            OcrError::DisplayError(_) => "DISPLAY_ERROR",
            OcrError::Io(_) => "IO_ERROR",
        }
    }
}
