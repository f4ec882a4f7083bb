//! Tesseract engine implementation
//!
//! Uses tesseract-static crate for static linking (no system dependencies).
//! Downloads tessdata (training data) automatically on first use when no
//! tessdata directory is configured.

use crate::config::DetectConfig;
use crate::engine::{PageSegmentation, TextLine, TextRecognizer};
use crate::error::OcrError;
use image::GrayImage;
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};
use tesseract_static::tesseract::{PageSegMode, Tesseract};

use super::tsv;

/// Tesseract OCR Engine
///
/// Owns an initialized Tesseract handle; dropping the engine releases it.
pub struct TesseractEngine {
    tess: Option<Tesseract>,
    language: String,
}

impl TesseractEngine {
    /// Initialize Tesseract for the configured language and page segmentation
    pub fn new(config: &DetectConfig) -> Result<Self, OcrError> {
        let language = config.language.clone();

        let tessdata_path = match &config.tessdata_path {
            Some(dir) => path_to_string(dir)?,
            None => ensure_tessdata_available(&language)?,
        };

        let mut tess = Tesseract::new(Some(&tessdata_path), Some(&language)).map_err(|e| {
            OcrError::InitializationError(format!(
                "Failed to initialize Tesseract (tessdata: {}, language: {}): {}",
                tessdata_path, language, e
            ))
        })?;

        tess.set_page_seg_mode(page_seg_mode(config.page_segmentation));

        tracing::info!(
            "Tesseract engine initialized (tessdata: {}, language: {}, psm: {:?})",
            tessdata_path,
            language,
            config.page_segmentation
        );

        Ok(Self {
            tess: Some(tess),
            language,
        })
    }
}

impl TextRecognizer for TesseractEngine {
    fn name(&self) -> &'static str {
        "tesseract"
    }

    fn recognize(&mut self, image: &GrayImage) -> Result<Vec<TextLine>, OcrError> {
        let tess = self.tess.take().ok_or_else(|| {
            OcrError::ProcessingError("Tesseract handle is no longer available".to_string())
        })?;

        let (width, height) = image.dimensions();
        let (w, h) = match (i32::try_from(width), i32::try_from(height)) {
            (Ok(w), Ok(h)) => (w, h),
            _ => {
                return Err(OcrError::ProcessingError(format!(
                    "Image too large for Tesseract: {}x{}",
                    width, height
                )))
            }
        };

        tracing::debug!(
            "Recognizing {}x{} grayscale frame ({})",
            width,
            height,
            self.language
        );

        // One byte per pixel, rows packed without padding
        let tess = tess.set_frame(image.as_raw(), w, h, 1, w).map_err(|e| {
            OcrError::ProcessingError(format!("Failed to set image ({}x{}): {}", width, height, e))
        })?;

        let mut tess = tess
            .recognize()
            .map_err(|e| OcrError::ProcessingError(format!("Failed to recognize text: {}", e)))?;

        let tsv_text = tess
            .get_tsv_text(0)
            .map_err(|e| OcrError::ProcessingError(format!("Failed to get results: {}", e)))?;

        self.tess = Some(tess);

        let lines = tsv::parse_text_lines(&tsv_text);
        tracing::debug!("Tesseract returned {} text lines", lines.len());
        Ok(lines)
    }
}

fn page_seg_mode(mode: PageSegmentation) -> PageSegMode {
    match mode {
        PageSegmentation::Auto => PageSegMode::PsmAuto,
        PageSegmentation::SingleColumn => PageSegMode::PsmSingleColumn,
        PageSegmentation::SingleBlock => PageSegMode::PsmSingleBlock,
        PageSegmentation::SingleLine => PageSegMode::PsmSingleLine,
        PageSegmentation::SparseText => PageSegMode::PsmSparseText,
    }
}

fn path_to_string(path: &Path) -> Result<String, OcrError> {
    path.to_str()
        .map(|s| s.to_string())
        .ok_or_else(|| OcrError::InitializationError("Invalid tessdata path".to_string()))
}

// ============================================================================
// Tessdata download helpers
// ============================================================================

fn tessdata_cache_dir() -> PathBuf {
    dirs::cache_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join("phone-text-detect")
        .join("tessdata")
}

/// Ensure tessdata is available, downloading if needed
fn ensure_tessdata_available(language: &str) -> Result<String, OcrError> {
    let cache_dir = tessdata_cache_dir();

    std::fs::create_dir_all(&cache_dir).map_err(|e| {
        OcrError::InitializationError(format!("Failed to create tessdata directory: {}", e))
    })?;

    let traineddata_path = cache_dir.join(format!("{}.traineddata", language));

    if !traineddata_path.exists() {
        let url = tessdata_url(language);
        tracing::info!(
            "Downloading tessdata for '{}' (this may take a moment)...",
            language
        );
        download_file(&url, &traineddata_path)?;
        tracing::info!("Downloaded tessdata to {:?}", traineddata_path);
    } else {
        tracing::debug!("Using cached tessdata from {:?}", cache_dir);
    }

    // Tesseract expects the directory, not the file
    path_to_string(&cache_dir)
}

/// Get tessdata download URL for a language
fn tessdata_url(language: &str) -> String {
    format!(
        "https://github.com/tesseract-ocr/tessdata_fast/raw/main/{}.traineddata",
        language
    )
}

/// Download a file from URL to path using ureq
fn download_file(url: &str, path: &Path) -> Result<(), OcrError> {
    let response = ureq::get(url)
        .call()
        .map_err(|e| OcrError::InitializationError(format!("Failed to download tessdata: {}", e)))?;

    let buffer = response.into_body().read_to_vec().map_err(|e| {
        OcrError::InitializationError(format!("Failed to read tessdata response: {}", e))
    })?;

    // Written next to the target and renamed once complete
    let partial = path.with_extension("traineddata.part");
    let mut file = File::create(&partial).map_err(|e| {
        OcrError::InitializationError(format!("Failed to create tessdata file: {}", e))
    })?;
    file.write_all(&buffer).map_err(|e| {
        OcrError::InitializationError(format!("Failed to write tessdata file: {}", e))
    })?;
    std::fs::rename(&partial, path).map_err(|e| {
        OcrError::InitializationError(format!("Failed to move tessdata into place: {}", e))
    })?;

    Ok(())
}
