/// Fixed-size pixel buffers for glyph (alpha) and icon/raster (RGBA) textures.
///
/// Pixels are stored row-major, tightly packed, `CHANNELS` bytes per pixel.
/// Two concrete types are provided:
///
/// - **AlphaImage**: 1 byte per pixel
/// - **RgbaImage**: 4 bytes per pixel (straight RGBA8)

use crate::engine::Engine;
use crate::error::{Error, Result};

const SOURCE: &str = "tilemap::Image";

/// Width and height in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Size {
    pub width: u32,
    pub height: u32,
}

impl Size {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// `true` if either dimension is 0
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }
}

/// Pixel coordinate (top-left origin)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Point {
    pub x: u32,
    pub y: u32,
}

impl Point {
    pub fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }
}

/// Pixel buffer with `CHANNELS` bytes per pixel
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Image<const CHANNELS: usize> {
    size: Size,
    data: Vec<u8>,
}

/// Single-channel image (glyph SDFs, masks)
pub type AlphaImage = Image<1>;

/// Four-channel RGBA8 image (icons, raster tiles)
pub type RgbaImage = Image<4>;

impl<const CHANNELS: usize> Image<CHANNELS> {
    /// Create an image of `size`, zero-filled or copied from `data`.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidDimensions` if `data` is provided and its
    /// length is not `width * height * CHANNELS`.
    pub fn new(size: Size, data: Option<&[u8]>) -> Result<Self> {
        let expected = size.pixel_count() * CHANNELS;
        let data = match data {
            None => vec![0; expected],
            Some(bytes) if bytes.len() == expected => bytes.to_vec(),
            Some(bytes) => {
                return Err(Engine::log_and_return_error(
                    SOURCE,
                    Error::InvalidDimensions(format!(
                        "{}x{}x{} image needs {} bytes, got {}",
                        size.width,
                        size.height,
                        CHANNELS,
                        expected,
                        bytes.len()
                    )),
                ));
            }
        };
        Ok(Self { size, data })
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn width(&self) -> u32 {
        self.size.width
    }

    pub fn height(&self) -> u32 {
        self.size.height
    }

    /// Raw bytes, row-major
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn data_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    /// Replace the pixel bytes, keeping the current size.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidDimensions` on a length mismatch; the image is
    /// left untouched.
    pub fn replace(&mut self, data: Vec<u8>) -> Result<()> {
        if data.len() != self.data.len() {
            return Err(Engine::log_and_return_error(
                SOURCE,
                Error::InvalidDimensions(format!(
                    "replacement has {} bytes, image holds {}",
                    data.len(),
                    self.data.len()
                )),
            ));
        }
        self.data = data;
        Ok(())
    }

    /// Set every byte to 0
    pub fn clear(&mut self) {
        self.data.fill(0);
    }

    /// Change the size, keeping the overlapping top-left region.
    ///
    /// Newly exposed pixels are zero.
    pub fn resize(&mut self, size: Size) {
        if size == self.size {
            return;
        }

        let mut resized = Self {
            size,
            data: vec![0; size.pixel_count() * CHANNELS],
        };
        let overlap = Size::new(
            self.size.width.min(size.width),
            self.size.height.min(size.height),
        );
        copy_rows(self, &mut resized, Point::default(), Point::default(), overlap);
        *self = resized;
    }

    /// Copy a `size` rectangle from `src` at `src_pt` into `dst` at `dst_pt`.
    ///
    /// A zero-sized rectangle is a no-op.
    ///
    /// # Errors
    ///
    /// Returns `Error::OutOfBounds` if the rectangle does not fit inside
    /// either image; `dst` is left untouched.
    pub fn copy(src: &Self, dst: &mut Self, src_pt: Point, dst_pt: Point, size: Size) -> Result<()> {
        if size.is_empty() {
            return Ok(());
        }
        if !fits(src.size, src_pt, size) {
            return Err(Engine::log_and_return_error(
                SOURCE,
                Error::OutOfBounds(format!(
                    "source rectangle {:?} at {:?} exceeds {}x{} image",
                    size, src_pt, src.size.width, src.size.height
                )),
            ));
        }
        if !fits(dst.size, dst_pt, size) {
            return Err(Engine::log_and_return_error(
                SOURCE,
                Error::OutOfBounds(format!(
                    "destination rectangle {:?} at {:?} exceeds {}x{} image",
                    size, dst_pt, dst.size.width, dst.size.height
                )),
            ));
        }

        copy_rows(src, dst, src_pt, dst_pt, size);
        Ok(())
    }
}

impl RgbaImage {
    /// Pixels as `[r, g, b, a]` quadruplets
    pub fn pixels(&self) -> &[[u8; 4]] {
        bytemuck::cast_slice(&self.data)
    }

    pub fn pixels_mut(&mut self) -> &mut [[u8; 4]] {
        bytemuck::cast_slice_mut(&mut self.data)
    }
}

/// `true` if the `size` rectangle at `origin` lies inside `bounds`
fn fits(bounds: Size, origin: Point, size: Size) -> bool {
    size.width <= bounds.width
        && size.height <= bounds.height
        && origin.x <= bounds.width - size.width
        && origin.y <= bounds.height - size.height
}

/// Row-by-row copy, bounds already checked
fn copy_rows<const CHANNELS: usize>(
    src: &Image<CHANNELS>,
    dst: &mut Image<CHANNELS>,
    src_pt: Point,
    dst_pt: Point,
    size: Size,
) {
    let row_len = size.width as usize * CHANNELS;
    let src_stride = src.size.width as usize * CHANNELS;
    let dst_stride = dst.size.width as usize * CHANNELS;

    for row in 0..size.height as usize {
        let src_offset = (src_pt.y as usize + row) * src_stride + src_pt.x as usize * CHANNELS;
        let dst_offset = (dst_pt.y as usize + row) * dst_stride + dst_pt.x as usize * CHANNELS;
        dst.data[dst_offset..dst_offset + row_len]
            .copy_from_slice(&src.data[src_offset..src_offset + row_len]);
    }
}

#[cfg(test)]
#[path = "image_tests.rs"]
mod tests;
