//! OCR engine implementations
//!
//! Engines are conditionally compiled based on feature flags. The TSV line
//! assembly is engine-independent and always built.

#[cfg(feature = "engine-tesseract")]
pub mod tesseract;

pub mod tsv;

use crate::config::DetectConfig;
use crate::engine::TextRecognizer;
use crate::error::OcrError;

/// Names of the engines compiled into this build
pub fn available() -> Vec<&'static str> {
    #[allow(unused_mut)]
    let mut engines = Vec::new();

    #[cfg(feature = "engine-tesseract")]
    engines.push("tesseract");

    engines
}

/// Create the OCR engine for `config`
pub fn create(config: &DetectConfig) -> Result<Box<dyn TextRecognizer>, OcrError> {
    #[cfg(feature = "engine-tesseract")]
    {
        tracing::info!("Initializing tesseract engine...");
        let engine = tesseract::TesseractEngine::new(config)?;
        return Ok(Box::new(engine));
    }

    #[cfg(not(feature = "engine-tesseract"))]
    {
        let _ = config;
        Err(OcrError::InitializationError(
            "No OCR engines available. Build with --features engine-tesseract".to_string(),
        ))
    }
}
