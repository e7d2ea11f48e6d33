use crate::error::{SubframeError, SubframeResult};

/// Bytes per RGBA8 pixel.
pub const BYTES_PER_PIXEL: usize = 4;

/// A composed subtitle image as a raw RGBA8 pixel buffer.
///
/// Row-major, top-left origin, straight (non-premultiplied) alpha.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    /// Raw pixel data.
    pub data: Vec<u8>,
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl FrameBuffer {
    /// Create a new frame buffer filled with zeros (transparent black).
    pub fn new(width: u32, height: u32) -> Self {
        let size = (width as usize) * (height as usize) * BYTES_PER_PIXEL;
        Self {
            data: vec![0u8; size],
            width,
            height,
        }
    }

    /// Like [`FrameBuffer::new`], but reports an allocation the process cannot
    /// satisfy as `ImageTooLarge` instead of aborting.
    pub fn try_new(width: u32, height: u32) -> SubframeResult<Self> {
        let too_large = || SubframeError::ImageTooLarge { width, height };
        let size = (width as usize)
            .checked_mul(height as usize)
            .and_then(|n| n.checked_mul(BYTES_PER_PIXEL))
            .ok_or_else(too_large)?;
        let mut data = Vec::new();
        data.try_reserve_exact(size).map_err(|_| too_large())?;
        data.resize(size, 0);
        Ok(Self {
            data,
            width,
            height,
        })
    }

    /// Total number of pixels.
    pub fn pixel_count(&self) -> usize {
        (self.width as usize) * (self.height as usize)
    }

    /// Total byte size of the pixel data.
    pub fn byte_size(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Get the RGBA value at a pixel coordinate. Returns None if out of bounds.
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let offset = self.offset(x, y);
        Some([
            self.data[offset],
            self.data[offset + 1],
            self.data[offset + 2],
            self.data[offset + 3],
        ])
    }

    /// Set the RGBA value at a pixel coordinate. No-op if out of bounds.
    pub fn set_pixel(&mut self, x: u32, y: u32, rgba: [u8; 4]) {
        if x >= self.width || y >= self.height {
            return;
        }
        let offset = self.offset(x, y);
        self.data[offset..offset + BYTES_PER_PIXEL].copy_from_slice(&rgba);
    }

    /// Number of pixels whose alpha is at least `threshold`.
    pub fn count_visible(&self, threshold: u8) -> usize {
        self.data
            .chunks_exact(BYTES_PER_PIXEL)
            .filter(|px| px[3] >= threshold && px[3] > 0)
            .count()
    }

    /// Convert into an `image::RgbaImage` for handoff to an encoder or display layer.
    pub fn into_rgba_image(self) -> Option<image::RgbaImage> {
        image::RgbaImage::from_raw(self.width, self.height, self.data)
    }

    /// Build a frame buffer from an `image::RgbaImage`.
    pub fn from_rgba_image(img: image::RgbaImage) -> Self {
        let (width, height) = img.dimensions();
        Self {
            data: img.into_raw(),
            width,
            height,
        }
    }

    fn offset(&self, x: u32, y: u32) -> usize {
        ((y as usize) * (self.width as usize) + (x as usize)) * BYTES_PER_PIXEL
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_buffer_new() {
        let fb = FrameBuffer::new(720, 576);
        assert_eq!(fb.width, 720);
        assert_eq!(fb.height, 576);
        assert_eq!(fb.byte_size(), 720 * 576 * 4);
        assert_eq!(fb.pixel_count(), 720 * 576);
        assert!(fb.data.iter().all(|&b| b == 0));
    }

    #[test]
    fn test_frame_buffer_zero_size() {
        let fb = FrameBuffer::new(0, 0);
        assert!(fb.is_empty());
        assert_eq!(fb.byte_size(), 0);
        assert_eq!(fb.get_pixel(0, 0), None);
    }

    #[test]
    fn test_try_new_matches_new() {
        assert_eq!(FrameBuffer::try_new(7, 3).unwrap(), FrameBuffer::new(7, 3));
    }

    #[test]
    fn test_try_new_rejects_unallocatable_size() {
        // 4e9 x 1e9 RGBA fits in usize arithmetic but exceeds isize::MAX bytes.
        let err = FrameBuffer::try_new(4_000_000_001, 1_000_000_000).unwrap_err();
        assert!(matches!(
            err,
            SubframeError::ImageTooLarge {
                width: 4_000_000_001,
                height: 1_000_000_000
            }
        ));
    }

    #[test]
    fn test_frame_buffer_get_set_pixel() {
        let mut fb = FrameBuffer::new(10, 10);
        fb.set_pixel(5, 5, [128, 64, 32, 255]);
        assert_eq!(fb.get_pixel(5, 5), Some([128, 64, 32, 255]));
    }

    #[test]
    fn test_frame_buffer_out_of_bounds() {
        let mut fb = FrameBuffer::new(10, 10);
        fb.set_pixel(10, 0, [1, 2, 3, 4]);
        assert_eq!(fb.get_pixel(10, 0), None);
        assert_eq!(fb.get_pixel(0, 10), None);
        assert!(fb.data.iter().all(|&b| b == 0));
    }

    #[test]
    fn test_count_visible() {
        let mut fb = FrameBuffer::new(3, 1);
        fb.set_pixel(0, 0, [255, 255, 255, 10]);
        fb.set_pixel(1, 0, [255, 255, 255, 200]);
        assert_eq!(fb.count_visible(1), 2);
        assert_eq!(fb.count_visible(128), 1);
        assert_eq!(fb.count_visible(0), 2);
    }

    #[test]
    fn test_rgba_image_handoff() {
        let mut fb = FrameBuffer::new(2, 1);
        fb.set_pixel(1, 0, [0, 255, 0, 255]);
        let img = fb.clone().into_rgba_image().unwrap();
        assert_eq!(img.dimensions(), (2, 1));
        assert_eq!(img.get_pixel(1, 0).0, [0, 255, 0, 255]);
        assert_eq!(FrameBuffer::from_rgba_image(img), fb);
    }
}
