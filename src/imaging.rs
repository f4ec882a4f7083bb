use crate::error::OcrError;
use image::{DynamicImage, ImageDecoder, RgbImage};
use std::path::Path;

/// Decode an image file; the format is guessed from its contents.
///
/// The EXIF orientation tag is applied, so phone photos come back upright.
pub fn load(path: &Path) -> Result<DynamicImage, OcrError> {
    let load_error = |source: image::ImageError| OcrError::ImageLoad {
        path: path.to_path_buf(),
        source,
    };

    let mut decoder = image::ImageReader::open(path)
        .and_then(|reader| reader.with_guessed_format())
        .map_err(|e| load_error(image::ImageError::IoError(e)))?
        .into_decoder()
        .map_err(load_error)?;

    let orientation = decoder.orientation().map_err(load_error)?;
    let mut image = DynamicImage::from_decoder(decoder).map_err(load_error)?;
    image.apply_orientation(orientation);

    tracing::debug!(
        "Loaded {:?}: {}x{} {:?} ({:?})",
        path,
        image.width(),
        image.height(),
        image.color(),
        orientation
    );
    Ok(image)
}

/// Encode `image` to `path`; the format follows the file extension
pub fn save(image: &RgbImage, path: &Path) -> Result<(), OcrError> {
    image.save(path).map_err(|source| OcrError::SaveError {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;

    #[test]
    fn test_missing_file_is_load_error() {
        let err = load(Path::new("definitely/not/here.jpg")).unwrap_err();
        assert!(matches!(err, OcrError::ImageLoad { .. }));
    }

    #[test]
    fn test_corrupt_file_is_load_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.png");
        std::fs::write(&path, b"this is not a png").unwrap();

        let err = load(&path).unwrap_err();
        assert!(matches!(err, OcrError::ImageLoad { .. }));
    }

    #[test]
    fn test_format_guessed_from_contents() {
        let dir = tempfile::tempdir().unwrap();
        let png = dir.path().join("photo.png");
        RgbImage::from_pixel(7, 3, Rgb([1, 2, 3])).save(&png).unwrap();
        let misnamed = dir.path().join("photo.jpg");
        std::fs::rename(&png, &misnamed).unwrap();

        let image = load(&misnamed).unwrap();
        assert_eq!((image.width(), image.height()), (7, 3));
    }

    /// Baseline JPEG of `width` x `height` with an EXIF APP1 segment
    /// carrying only the orientation tag
    fn jpeg_with_orientation(width: u32, height: u32, orientation: u16) -> Vec<u8> {
        let mut jpeg = Vec::new();
        RgbImage::from_pixel(width, height, Rgb([200, 40, 40]))
            .write_to(&mut std::io::Cursor::new(&mut jpeg), image::ImageFormat::Jpeg)
            .unwrap();

        let mut exif = b"Exif\0\0".to_vec();
        // Big-endian TIFF header, first IFD at offset 8
        exif.extend_from_slice(b"MM\0\x2a\0\0\0\x08");
        // One entry: tag 0x0112 (Orientation), SHORT, count 1
        exif.extend_from_slice(&1u16.to_be_bytes());
        exif.extend_from_slice(&[0x01, 0x12, 0x00, 0x03, 0x00, 0x00, 0x00, 0x01]);
        exif.extend_from_slice(&orientation.to_be_bytes());
        exif.extend_from_slice(&[0x00, 0x00]);
        // No next IFD
        exif.extend_from_slice(&[0x00, 0x00, 0x00, 0x00]);

        let mut segment = vec![0xFF, 0xE1];
        segment.extend_from_slice(&((exif.len() + 2) as u16).to_be_bytes());
        segment.extend_from_slice(&exif);

        // Right after SOI
        let mut out = jpeg[..2].to_vec();
        out.extend_from_slice(&segment);
        out.extend_from_slice(&jpeg[2..]);
        out
    }

    #[test]
    fn test_exif_rotation_is_applied() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("portrait.jpg");
        std::fs::write(&path, jpeg_with_orientation(40, 10, 6)).unwrap();

        let image = load(&path).unwrap();
        assert_eq!((image.width(), image.height()), (10, 40));
    }

    #[test]
    fn test_exif_upright_is_unchanged() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("landscape.jpg");
        std::fs::write(&path, jpeg_with_orientation(40, 10, 1)).unwrap();

        let image = load(&path).unwrap();
        assert_eq!((image.width(), image.height()), (40, 10));
    }

    #[test]
    fn test_save_unknown_extension_fails() {
        let dir = tempfile::tempdir().unwrap();
        let err = save(&RgbImage::new(2, 2), &dir.path().join("out.unknown")).unwrap_err();
        assert!(matches!(err, OcrError::SaveError { .. }));
    }
}
