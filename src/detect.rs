use crate::annotate;
use crate::config::DetectConfig;
use crate::engine::{TextLine, TextRecognizer};
use crate::error::OcrError;
use crate::imaging;
use crate::preprocessing::Pipeline;
use image::RgbImage;
use std::io::Write;
use std::path::Path;

/// Title of the result window
pub const RESULT_WINDOW_TITLE: &str = "Detected Text";

/// Outcome of one detection run
#[derive(Debug)]
pub struct Detection {
    /// Lines that passed the confidence threshold, in reading order
    pub lines: Vec<TextLine>,
    /// Original image with a box drawn around every kept line
    pub annotated: RgbImage,
}

/// Run the detection pipeline and save the annotated image.
///
/// `init_engine` is only called after the image has loaded and been
/// preprocessed. Each kept line is printed to `out` as it is drawn. The
/// engine is dropped before the output is written, on every path.
pub fn detect<F, W>(
    config: &DetectConfig,
    init_engine: F,
    out: &mut W,
) -> Result<Detection, OcrError>
where
    F: FnOnce(&DetectConfig) -> Result<Box<dyn TextRecognizer>, OcrError>,
    W: Write,
{
    let image = imaging::load(&config.image_path)?;

    let prepared = Pipeline::new().process(&image)?;

    let lines = {
        let mut engine = init_engine(config)?;
        tracing::info!("Running {} on {:?}", engine.name(), config.image_path);
        engine.recognize(&prepared.image)?
    };

    let mut annotated = image.into_rgb8();
    let kept = annotate_lines(&mut annotated, lines, config.confidence_threshold, out)?;

    imaging::save(&annotated, &config.output_path)?;
    tracing::info!("Saved {} boxes to {:?}", kept.len(), config.output_path);

    if let Some(path) = &config.text_output {
        write_text_output(path, &kept)?;
    }

    Ok(Detection {
        lines: kept,
        annotated,
    })
}

/// Draw and print every line above `threshold`; the rest are dropped
pub fn annotate_lines<W: Write>(
    image: &mut RgbImage,
    lines: Vec<TextLine>,
    threshold: f32,
    out: &mut W,
) -> Result<Vec<TextLine>, OcrError> {
    let total = lines.len();
    let mut kept = Vec::with_capacity(total);

    for line in lines {
        if !line.passes(threshold) {
            tracing::trace!("Discarding line {:?} (conf={})", line.text, line.confidence);
            continue;
        }
        annotate::draw_text_box(image, &line.bbox);
        writeln!(out, "{}", format_line(&line))?;
        kept.push(line);
    }

    tracing::debug!("Kept {} of {} lines (threshold {})", kept.len(), total, threshold);
    Ok(kept)
}

/// `Detected text: "<text>" (conf=<confidence>)`
pub fn format_line(line: &TextLine) -> String {
    format!(
        "Detected text: \"{}\" (conf={})",
        line.text,
        format_confidence(line.confidence)
    )
}

/// Six significant digits, trailing zeros dropped (`93.6667`, `75`)
pub fn format_confidence(confidence: f32) -> String {
    let value = f64::from(confidence);
    if value == 0.0 || !value.is_finite() {
        return format!("{}", value);
    }
    let exponent = value.abs().log10().floor() as i32;
    let decimals = (5 - exponent).max(0) as usize;
    let formatted = format!("{:.*}", decimals, value);
    if formatted.contains('.') {
        formatted
            .trim_end_matches('0')
            .trim_end_matches('.')
            .to_string()
    } else {
        formatted
    }
}

fn write_text_output(path: &Path, lines: &[TextLine]) -> Result<(), OcrError> {
    let mut file = std::fs::File::create(path)?;
    for line in lines {
        writeln!(file, "{}", line.text)?;
    }
    Ok(())
}
