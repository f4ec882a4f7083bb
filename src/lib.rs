//! Image viewer and text-line detector
//!
//! Two small programs share this library: `display_image` opens an image in
//! a window, and `text_detect` runs Tesseract over a grayscale, inverted copy
//! of an image, boxes every confident text line on the original and saves
//! the result.

pub mod annotate;
pub mod cli;
pub mod config;
pub mod detect;
pub mod display;
pub mod engine;
pub mod engines;
pub mod error;
pub mod imaging;
pub mod preprocessing;
pub mod viewer;

pub use config::DetectConfig;
pub use engine::{BoundingBox, PageSegmentation, TextLine, TextRecognizer};
pub use error::OcrError;
