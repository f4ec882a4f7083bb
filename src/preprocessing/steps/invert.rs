use crate::error::OcrError;
use image::DynamicImage;

/// Invert intensities so dark-on-light text becomes light-on-dark
pub fn apply(mut image: DynamicImage) -> Result<DynamicImage, OcrError> {
    image.invert();
    Ok(image)
}
