use crate::engine::PageSegmentation;
use clap::Parser;
use std::path::PathBuf;

/// Image shown by the viewer when no path is given
pub const DEFAULT_VIEWER_IMAGE: &str = "demo_photo.jpg";

/// Annotated result written by the detector when no output is given
pub const DEFAULT_OUTPUT_IMAGE: &str = "phone_text_result.png";

#[derive(Parser, Debug)]
#[command(name = "display_image")]
#[command(about = "Open an image and display it until a key is pressed")]
#[command(version)]
pub struct ViewerArgs {
    /// Image file to display
    #[arg(default_value = DEFAULT_VIEWER_IMAGE)]
    pub path: PathBuf,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "RUST_LOG", default_value = "warn")]
    pub log_level: String,
}

#[derive(Parser, Debug)]
#[command(name = "text_detect")]
#[command(about = "Detect text lines in an image and draw boxes around them")]
#[command(version)]
pub struct DetectArgs {
    /// Image file to run OCR on
    pub image_path: PathBuf,

    /// Where to write the annotated image
    #[arg(short, long, env = "OCR_OUTPUT", default_value = DEFAULT_OUTPUT_IMAGE)]
    pub output: PathBuf,

    /// Lines at or below this confidence (0-100) are discarded
    #[arg(
        long,
        env = "OCR_CONFIDENCE_THRESHOLD",
        default_value_t = 50.0,
        value_parser = parse_threshold
    )]
    pub threshold: f32,

    /// Page segmentation mode
    #[arg(long, env = "OCR_PAGE_SEG_MODE", value_enum, default_value_t = PageSegmentation::Auto)]
    pub psm: PageSegmentation,

    /// OCR language (e.g., "eng", "deu", "fra")
    #[arg(long, env = "OCR_LANGUAGE", default_value = "eng")]
    pub language: String,

    /// Path to tessdata directory (downloaded to the user cache if not set)
    #[arg(long, env = "TESSDATA_PREFIX")]
    pub tessdata_path: Option<PathBuf>,

    /// Also write the text of every kept line to this file
    #[arg(long, env = "OCR_TEXT_OUTPUT")]
    pub text_output: Option<PathBuf>,

    /// Do not open a window for the result
    #[arg(long, env = "OCR_NO_DISPLAY")]
    pub no_display: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "RUST_LOG", default_value = "warn")]
    pub log_level: String,
}

fn parse_threshold(s: &str) -> Result<f32, String> {
    let value: f32 = s
        .parse()
        .map_err(|_| format!("`{}` is not a number", s))?;
    if !(0.0..=100.0).contains(&value) {
        return Err(format!("threshold must be between 0 and 100, got {}", value));
    }
    Ok(value)
}

/// Install the global tracing subscriber. Logs go to stderr so stdout only
/// carries program output.
pub fn init_tracing(log_level: &str) {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| log_level.to_string().into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
