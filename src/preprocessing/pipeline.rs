use crate::error::OcrError;
use image::{DynamicImage, GrayImage};
use std::time::Instant;

use super::steps;

/// Timing information for a single preprocessing step
#[derive(Debug, Clone)]
pub struct StepTiming {
    pub name: &'static str,
    pub time_ms: u64,
}

/// Result of preprocessing including timing stats
#[derive(Debug, Clone)]
pub struct PreprocessingResult {
    /// 8-bit grayscale buffer handed to the OCR engine
    pub image: GrayImage,
    /// Total preprocessing time in milliseconds
    pub total_time_ms: u64,
    /// Individual step timings
    pub steps: Vec<StepTiming>,
}

type StepFn = fn(DynamicImage) -> Result<DynamicImage, OcrError>;

/// Builds the OCR input from a loaded image: grayscale, then invert.
///
/// Works on a copy; the caller's image is left untouched so it can be
/// annotated and saved in its original colors.
pub struct Pipeline {
    steps: Vec<(&'static str, StepFn)>,
}

impl Default for Pipeline {
    fn default() -> Self {
        Self {
            steps: vec![
                ("grayscale", steps::grayscale::apply as StepFn),
                ("invert", steps::invert::apply as StepFn),
            ],
        }
    }
}

impl Pipeline {
    pub fn new() -> Self {
        Self::default()
    }

    /// Names of the steps, in the order they run
    pub fn step_names(&self) -> Vec<&'static str> {
        self.steps.iter().map(|(name, _)| *name).collect()
    }

    /// Process a copy of `image` through every step
    pub fn process(&self, image: &DynamicImage) -> Result<PreprocessingResult, OcrError> {
        let start = Instant::now();
        let mut steps_timing = Vec::with_capacity(self.steps.len());

        let mut img = image.clone();
        for (name, step_fn) in &self.steps {
            img = self.run_step(*name, img, &mut steps_timing, *step_fn)?;
        }

        let gray = match img {
            DynamicImage::ImageLuma8(gray) => gray,
            other => {
                return Err(OcrError::PreprocessingError(format!(
                    "expected 8-bit grayscale output, got {:?}",
                    other.color()
                )))
            }
        };

        let total_time_ms = start.elapsed().as_millis() as u64;
        tracing::debug!(
            "Preprocessed {}x{} image in {}ms ({:?})",
            gray.width(),
            gray.height(),
            total_time_ms,
            steps_timing
        );

        Ok(PreprocessingResult {
            image: gray,
            total_time_ms,
            steps: steps_timing,
        })
    }

    fn run_step<F>(
        &self,
        name: &'static str,
        img: DynamicImage,
        timings: &mut Vec<StepTiming>,
        step_fn: F,
    ) -> Result<DynamicImage, OcrError>
    where
        F: FnOnce(DynamicImage) -> Result<DynamicImage, OcrError>,
    {
        let step_start = Instant::now();
        let result = step_fn(img)?;
        timings.push(StepTiming {
            name,
            time_ms: step_start.elapsed().as_millis() as u64,
        });
        Ok(result)
    }
}
