use crate::cli::DetectArgs;
use crate::engine::PageSegmentation;
use std::path::PathBuf;

/// Detector configuration
#[derive(Debug, Clone)]
pub struct DetectConfig {
    pub image_path: PathBuf,
    pub output_path: PathBuf,
    pub confidence_threshold: f32,
    pub page_segmentation: PageSegmentation,
    pub language: String,
    pub tessdata_path: Option<PathBuf>,
    pub text_output: Option<PathBuf>,
    pub display: bool,
}

impl DetectConfig {
    /// Configuration with the stock settings for `image_path`
    pub fn new(image_path: impl Into<PathBuf>) -> Self {
        Self {
            image_path: image_path.into(),
            output_path: PathBuf::from(crate::cli::DEFAULT_OUTPUT_IMAGE),
            confidence_threshold: 50.0,
            page_segmentation: PageSegmentation::Auto,
            language: "eng".to_string(),
            tessdata_path: None,
            text_output: None,
            display: true,
        }
    }
}

impl From<DetectArgs> for DetectConfig {
    fn from(args: DetectArgs) -> Self {
        Self {
            image_path: args.image_path,
            output_path: args.output,
            confidence_threshold: args.threshold,
            page_segmentation: args.psm,
            language: args.language,
            tessdata_path: args.tessdata_path,
            text_output: args.text_output,
            display: !args.no_display,
        }
    }
}
