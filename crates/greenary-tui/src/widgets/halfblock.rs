use std::sync::Arc;

use greenary_core::hero::{cover_crop, Frame};
use image::RgbaImage;
use ratatui::{buffer::Buffer, layout::Rect, style::Color};

/// Cover-cropped pixels of the last drawn frame, reused until the frame or size changes
#[derive(Default)]
pub struct CanvasCache {
    key: Option<(usize, u16, u16)>,
    pixels: RgbaImage,
}

impl CanvasCache {
    /// Pixels for `frame` at `width` columns by `height` rows (two pixels per row)
    pub fn pixels(&mut self, frame: &Frame, width: u16, height: u16) -> &RgbaImage {
        let key = (Arc::as_ptr(frame) as usize, width, height);
        if self.key != Some(key) {
            self.pixels = cover_crop(frame, width as u32, height as u32 * 2).to_rgba8();
            self.key = Some(key);
        }
        &self.pixels
    }
}

/// Paint pixels into `area` using upper half blocks: top pixel as foreground,
/// bottom pixel as background. Pixels outside the image are left untouched.
pub fn paint(buf: &mut Buffer, area: Rect, pixels: &RgbaImage, opacity: f64, backdrop: Color) {
    let (width, height) = pixels.dimensions();
    for row in 0..area.height {
        let y = row as u32 * 2;
        if y >= height {
            break;
        }
        for col in 0..area.width {
            let x = col as u32;
            if x >= width {
                break;
            }
            let top = pixels.get_pixel(x, y);
            let bottom = if y + 1 < height {
                pixels.get_pixel(x, y + 1)
            } else {
                top
            };

            if let Some(cell) = buf.cell_mut((area.x + col, area.y + row)) {
                cell.set_symbol("▀")
                    .set_fg(fade(Color::Rgb(top[0], top[1], top[2]), backdrop, opacity))
                    .set_bg(fade(Color::Rgb(bottom[0], bottom[1], bottom[2]), backdrop, opacity));
            }
        }
    }
}

/// Blend `color` toward `backdrop`; `opacity` 1.0 keeps `color` as is.
/// Only RGB colours blend, others switch at half opacity.
pub fn fade(color: Color, backdrop: Color, opacity: f64) -> Color {
    let opacity = opacity.clamp(0.0, 1.0);
    match (color, backdrop) {
        (Color::Rgb(r, g, b), Color::Rgb(br, bg, bb)) => {
            let mix = |c: u8, k: u8| (k as f64 + (c as f64 - k as f64) * opacity).round() as u8;
            Color::Rgb(mix(r, br), mix(g, bg), mix(b, bb))
        }
        _ if opacity >= 0.5 => color,
        _ => backdrop,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::DynamicImage;

    #[test]
    fn test_fade_endpoints() {
        let red = Color::Rgb(200, 0, 0);
        let black = Color::Rgb(0, 0, 0);
        assert_eq!(fade(red, black, 1.0), red);
        assert_eq!(fade(red, black, 0.0), black);
        assert_eq!(fade(red, black, 0.5), Color::Rgb(100, 0, 0));
        assert_eq!(fade(Color::Red, black, 0.2), black);
    }

    #[test]
    fn test_cache_reuses_pixels() {
        let frame: Frame = Arc::new(DynamicImage::new_rgba8(32, 18));
        let mut cache = CanvasCache::default();
        assert_eq!(cache.pixels(&frame, 10, 5).dimensions(), (10, 10));
        assert_eq!(cache.key, Some((Arc::as_ptr(&frame) as usize, 10, 5)));
        assert_eq!(cache.pixels(&frame, 12, 3).dimensions(), (12, 6));
    }

    #[test]
    fn test_paint_fills_cells() {
        let pixels = RgbaImage::from_pixel(4, 4, image::Rgba([10, 20, 30, 255]));
        let area = Rect::new(0, 0, 4, 2);
        let mut buf = Buffer::empty(area);
        paint(&mut buf, area, &pixels, 1.0, Color::Black);

        let cell = buf.cell((3, 1)).unwrap();
        assert_eq!(cell.symbol(), "▀");
        assert_eq!(cell.fg, Color::Rgb(10, 20, 30));
    }
}
