//! Collaborators which supply pixel values for grid construction.

use std::path::Path;

use cgmath::Vector2;
use image::DynamicImage;

use crate::argb;

/// A source of pixel values, read exactly once per coordinate while a
/// [`Grid`](crate::Grid) is being built.
pub trait PixelSource {
    type Pixel;

    fn dimensions(&self) -> Vector2<u32>;

    /// Returns the pixel at `(x, y)`, with `0 <= x < width` and `0 <= y < height`.
    fn pixel(&self, x: u32, y: u32) -> Self::Pixel;
}

/// A decoded image supplies packed ARGB words.
impl PixelSource for image::RgbaImage {
    type Pixel = u32;

    fn dimensions(&self) -> Vector2<u32> {
        image::RgbaImage::dimensions(self).into()
    }

    fn pixel(&self, x: u32, y: u32) -> u32 {
        argb::pack(*self.get_pixel(x, y))
    }
}

/// A pixel source backed by an in-memory row-major buffer.
#[derive(Debug, Clone)]
pub struct BufferSource<T> {
    size: Vector2<u32>,
    pixels: Vec<T>,
}

impl<T> BufferSource<T> {
    pub fn new(width: u32, height: u32, pixels: Vec<T>) -> Self {
        assert_eq!(pixels.len(), (width * height) as usize);
        Self {
            size: Vector2::new(width, height),
            pixels,
        }
    }
}

impl<T: Clone> PixelSource for BufferSource<T> {
    type Pixel = T;

    fn dimensions(&self) -> Vector2<u32> {
        self.size
    }

    fn pixel(&self, x: u32, y: u32) -> T {
        self.pixels[(y * self.size.x + x) as usize].clone()
    }
}

/// Decodes an image file into an [`image::RgbaImage`], widening RGB8 sources to RGBA with full
/// opacity.
pub fn load_argb(path: impl AsRef<Path>) -> image::ImageResult<image::RgbaImage> {
    let dyn_image = image::io::Reader::open(path)?.decode()?;
    Ok(match dyn_image {
        DynamicImage::ImageRgba8(i) => i,
        other => other.into_rgba8(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rgba_image_packs_argb() {
        let mut img = image::RgbaImage::new(2, 1);
        img.put_pixel(0, 0, image::Rgba([0xFF, 0x00, 0x00, 0xFF]));
        img.put_pixel(1, 0, image::Rgba([0x00, 0x00, 0xFF, 0x80]));
        assert_eq!(PixelSource::dimensions(&img), Vector2::new(2, 1));
        assert_eq!(img.pixel(0, 0), 0xFFFF0000);
        assert_eq!(img.pixel(1, 0), 0x800000FF);
    }

    #[test]
    fn buffer_source_is_row_major() {
        let source = BufferSource::new(2, 2, vec![1u32, 2, 3, 4]);
        assert_eq!(source.pixel(0, 0), 1);
        assert_eq!(source.pixel(1, 0), 2);
        assert_eq!(source.pixel(0, 1), 3);
        assert_eq!(source.pixel(1, 1), 4);
    }
}
