use crate::engine::BoundingBox;
use image::{Rgb, RgbImage};
use imageproc::drawing::draw_hollow_rect_mut;
use imageproc::rect::Rect;

/// Box outline color
pub const BOX_COLOR: Rgb<u8> = Rgb([0, 255, 0]);

/// Box outline thickness in pixels
pub const BOX_STROKE: i32 = 2;

/// Draw a hollow rectangle around `bbox`, clipped to the image.
///
/// The stroke grows inward from the box edge, so a box on the image border
/// is still fully visible.
pub fn draw_text_box(image: &mut RgbImage, bbox: &BoundingBox) {
    let clamped = bbox.clamp_to(image.width(), image.height());

    for i in 0..BOX_STROKE {
        let w = clamped.width() - 2 * i;
        let h = clamped.height() - 2 * i;
        if w <= 0 || h <= 0 {
            break;
        }
        let rect = Rect::at(clamped.x1 + i, clamped.y1 + i).of_size(w as u32, h as u32);
        draw_hollow_rect_mut(image, rect, BOX_COLOR);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WHITE: Rgb<u8> = Rgb([255, 255, 255]);

    #[test]
    fn test_draws_two_pixel_outline() {
        let mut img = RgbImage::from_pixel(40, 30, WHITE);
        draw_text_box(&mut img, &BoundingBox::new(5, 5, 25, 20));

        // Outer and inner stroke
        assert_eq!(img.get_pixel(5, 5), &BOX_COLOR);
        assert_eq!(img.get_pixel(24, 19), &BOX_COLOR);
        assert_eq!(img.get_pixel(6, 10), &BOX_COLOR);
        assert_eq!(img.get_pixel(23, 10), &BOX_COLOR);
        // Interior and exterior untouched
        assert_eq!(img.get_pixel(15, 12), &WHITE);
        assert_eq!(img.get_pixel(4, 5), &WHITE);
        assert_eq!(img.get_pixel(25, 20), &WHITE);
    }

    #[test]
    fn test_box_past_edges_is_clamped() {
        let mut img = RgbImage::from_pixel(20, 20, WHITE);
        draw_text_box(&mut img, &BoundingBox::new(-10, -10, 50, 50));

        assert_eq!(img.get_pixel(0, 0), &BOX_COLOR);
        assert_eq!(img.get_pixel(19, 19), &BOX_COLOR);
        assert_eq!(img.get_pixel(10, 10), &WHITE);
    }

    #[test]
    fn test_box_outside_image_draws_nothing() {
        let mut img = RgbImage::from_pixel(20, 20, WHITE);
        draw_text_box(&mut img, &BoundingBox::new(30, 30, 40, 40));
        assert!(img.pixels().all(|p| *p == WHITE));
    }
}
