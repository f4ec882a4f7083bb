use crate::error::OcrError;
use image::GrayImage;

/// Axis-aligned box in pixel coordinates; `x2` and `y2` are exclusive
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundingBox {
    pub x1: i32,
    pub y1: i32,
    pub x2: i32,
    pub y2: i32,
}

impl BoundingBox {
    pub fn new(x1: i32, y1: i32, x2: i32, y2: i32) -> Self {
        Self { x1, y1, x2, y2 }
    }

    pub fn width(&self) -> i32 {
        self.x2 - self.x1
    }

    pub fn height(&self) -> i32 {
        self.y2 - self.y1
    }

    /// Restrict the box to a `width` x `height` image
    pub fn clamp_to(&self, width: u32, height: u32) -> Self {
        let (w, h) = (width as i32, height as i32);
        Self {
            x1: self.x1.clamp(0, w),
            y1: self.y1.clamp(0, h),
            x2: self.x2.clamp(0, w),
            y2: self.y2.clamp(0, h),
        }
    }
}

/// A single recognized line of text
#[derive(Debug, Clone, PartialEq)]
pub struct TextLine {
    pub text: String,
    /// 0-100
    pub confidence: f32,
    pub bbox: BoundingBox,
}

impl TextLine {
    /// Whether the line has text and a confidence strictly above `threshold`
    pub fn passes(&self, threshold: f32) -> bool {
        !self.text.trim().is_empty() && self.confidence > threshold
    }
}

/// How the engine partitions the page into text regions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum PageSegmentation {
    /// Fully automatic, no assumption about layout
    #[default]
    Auto,
    /// A single column of text of variable sizes
    SingleColumn,
    /// A single uniform block of text
    SingleBlock,
    /// A single text line
    SingleLine,
    /// As much text as possible in no particular order
    SparseText,
}

/// Trait that all OCR engines must implement
pub trait TextRecognizer {
    /// Returns the engine identifier (e.g., "tesseract")
    fn name(&self) -> &'static str;

    /// Run recognition once over an 8-bit grayscale buffer and return its
    /// text lines in reading order
    fn recognize(&mut self, image: &GrayImage) -> Result<Vec<TextLine>, OcrError>;
}
