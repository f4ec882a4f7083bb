//! End-to-end OCR through the real Tesseract engine.
//!
//! Uses `TESSDATA_PREFIX` when set, otherwise downloads `eng.traineddata`
//! into the user cache on first run.

#![cfg(feature = "engine-tesseract")]

use phone_text_detect::preprocessing::Pipeline;
use phone_text_detect::{engines, DetectConfig, PageSegmentation};
use std::process::Command;

const DETECT_BIN: &str = env!("CARGO_BIN_EXE_text_detect");

fn test_fixture_path(filename: &str) -> String {
    let manifest_dir = env!("CARGO_MANIFEST_DIR");
    format!("{}/tests/fixtures/{}", manifest_dir, filename)
}

fn recognize_fixture(psm: PageSegmentation) -> Vec<phone_text_detect::TextLine> {
    let mut config = DetectConfig::new(test_fixture_path("sample_text.png"));
    config.page_segmentation = psm;

    let image = image::open(&config.image_path).expect("Failed to open fixture");
    let prepared = Pipeline::new().process(&image).unwrap();

    let mut engine = engines::create(&config).expect("Failed to initialize tesseract");
    assert_eq!(engine.name(), "tesseract");
    engine.recognize(&prepared.image).expect("Recognition failed")
}

#[test]
fn test_recognize_sample_text_lines() {
    let lines = recognize_fixture(PageSegmentation::Auto);
    let all_text: Vec<&str> = lines.iter().map(|l| l.text.as_str()).collect();

    assert!(lines.len() >= 2, "lines: {:?}", all_text);

    let hello = lines
        .iter()
        .find(|l| l.text.contains("World"))
        .unwrap_or_else(|| panic!("no line with 'World' in {:?}", all_text));
    assert!(hello.text.contains("Hello"));
    assert!(hello.confidence > 50.0, "confidence {}", hello.confidence);

    // First fixture line is drawn between rows 36 and 70, from column 32
    assert!(hello.bbox.y1 >= 25 && hello.bbox.y2 <= 85, "bbox {:?}", hello.bbox);
    assert!(hello.bbox.x1 >= 20 && hello.bbox.x1 <= 45, "bbox {:?}", hello.bbox);

    assert!(lines.iter().any(|l| l.text.contains("12345")), "lines: {:?}", all_text);
}

#[test]
fn test_recognize_with_single_block_mode() {
    let lines = recognize_fixture(PageSegmentation::SingleBlock);
    assert!(
        lines.iter().any(|l| l.text.contains("World")),
        "lines: {:?}",
        lines
    );
}

#[test]
fn test_text_detect_binary_end_to_end() {
    let dir = tempfile::tempdir().unwrap();
    let output_path = dir.path().join("out.png");

    let output = Command::new(DETECT_BIN)
        .args(["--no-display", "-o"])
        .arg(&output_path)
        .arg(test_fixture_path("sample_text.png"))
        .current_dir(dir.path())
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to run text_detect");

    assert!(
        output.status.success(),
        "status {:?}, stderr: {}",
        output.status,
        String::from_utf8_lossy(&output.stderr)
    );

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.lines().all(|l| l.starts_with("Detected text: \"")));
    assert!(
        stdout.lines().any(|l| l.contains("World")),
        "stdout: {}",
        stdout
    );

    let input = image::open(test_fixture_path("sample_text.png")).unwrap();
    let saved = image::open(&output_path).expect("Output image was not written");
    assert_eq!(
        (saved.width(), saved.height()),
        (input.width(), input.height())
    );
    // Boxes were drawn on the original
    assert_ne!(saved.to_rgb8(), input.to_rgb8());
}
