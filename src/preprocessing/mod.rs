//! Image preprocessing for the OCR input
//!
//! The detector never feeds the loaded image to the engine directly; it
//! builds a separate grayscale, inverted buffer through this pipeline.

pub mod pipeline;
pub mod steps;

pub use pipeline::{Pipeline, PreprocessingResult, StepTiming};
