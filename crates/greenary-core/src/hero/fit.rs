use image::imageops::FilterType;
use image::{DynamicImage, GenericImageView};

/// Placement of a source image on a canvas. Offsets are negative when the
/// image overflows and gets cropped.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Scale `image` so it covers `canvas` completely, centred, preserving aspect ratio
pub fn cover_fit(image: (f64, f64), canvas: (f64, f64)) -> DrawRect {
    let (img_w, img_h) = image;
    let (canvas_w, canvas_h) = canvas;
    if img_w <= 0.0 || img_h <= 0.0 || canvas_h <= 0.0 {
        return DrawRect {
            x: 0.0,
            y: 0.0,
            width: canvas_w.max(0.0),
            height: canvas_h.max(0.0),
        };
    }

    let canvas_ratio = canvas_w / canvas_h;
    let img_ratio = img_w / img_h;

    if img_ratio > canvas_ratio {
        // Wider than the canvas: fill height, crop the sides
        let width = img_w * (canvas_h / img_h);
        DrawRect {
            x: (canvas_w - width) / 2.0,
            y: 0.0,
            width,
            height: canvas_h,
        }
    } else {
        let height = img_h * (canvas_w / img_w);
        DrawRect {
            x: 0.0,
            y: (canvas_h - height) / 2.0,
            width: canvas_w,
            height,
        }
    }
}

/// Produce exactly `width x height` pixels of `image` using cover-fit scaling
pub fn cover_crop(image: &DynamicImage, width: u32, height: u32) -> DynamicImage {
    if width == 0 || height == 0 {
        return DynamicImage::new_rgba8(width, height);
    }

    let (img_w, img_h) = image.dimensions();
    let rect = cover_fit(
        (img_w as f64, img_h as f64),
        (width as f64, height as f64),
    );

    let scaled_w = (rect.width.round() as u32).max(width);
    let scaled_h = (rect.height.round() as u32).max(height);
    let scaled = image.resize_exact(scaled_w, scaled_h, FilterType::Triangle);

    let crop_x = (scaled_w - width) / 2;
    let crop_y = (scaled_h - height) / 2;
    scaled.crop_imm(crop_x, crop_y, width, height)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wide_image_fills_height() {
        // 1920x1080 onto a square 1000x1000 canvas
        let rect = cover_fit((1920.0, 1080.0), (1000.0, 1000.0));
        assert_eq!(rect.height, 1000.0);
        assert!((rect.width - 1777.777).abs() < 0.01);
        assert!((rect.x - (1000.0 - rect.width) / 2.0).abs() < f64::EPSILON);
        assert_eq!(rect.y, 0.0);
    }

    #[test]
    fn test_tall_image_fills_width() {
        let rect = cover_fit((1080.0, 1920.0), (1600.0, 900.0));
        assert_eq!(rect.width, 1600.0);
        assert!(rect.height > 900.0);
        assert_eq!(rect.x, 0.0);
        assert!(rect.y < 0.0);
    }

    #[test]
    fn test_same_ratio_is_exact() {
        let rect = cover_fit((640.0, 360.0), (1280.0, 720.0));
        assert_eq!(
            rect,
            DrawRect {
                x: 0.0,
                y: 0.0,
                width: 1280.0,
                height: 720.0
            }
        );
    }

    #[test]
    fn test_cover_crop_dimensions() {
        let image = DynamicImage::new_rgba8(160, 90);
        let cropped = cover_crop(&image, 40, 40);
        assert_eq!(cropped.dimensions(), (40, 40));

        let cropped = cover_crop(&image, 80, 10);
        assert_eq!(cropped.dimensions(), (80, 10));
    }
}
