use crate::error::OcrError;
use image::DynamicImage;

/// Convert image to 8-bit grayscale
pub fn apply(image: DynamicImage) -> Result<DynamicImage, OcrError> {
    Ok(DynamicImage::ImageLuma8(image.to_luma8()))
}
