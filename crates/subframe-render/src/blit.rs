//! Region blitting: palette resolution and coordinate-translated writes.

use subframe_core::{FrameBuffer, Palette, SubframeError, SubframeResult, SubtitleFrame, SubtitleRect};

/// How a rectangle's index bytes turn into RGBA.
///
/// Chosen once per rectangle so the pixel loop does not re-check the palette.
#[derive(Debug, Clone, Copy)]
pub enum PixelSource<'a> {
    /// Each byte selects an ARGB palette entry.
    Palette(&'a Palette),
    /// Each byte is the alpha of a white pixel.
    DirectAlpha,
}

impl<'a> PixelSource<'a> {
    pub fn for_rect(rect: &'a SubtitleRect) -> Self {
        match &rect.palette {
            Some(palette) => PixelSource::Palette(palette),
            None => PixelSource::DirectAlpha,
        }
    }

    /// Resolve one index byte to straight-alpha RGBA.
    #[inline]
    pub fn resolve(&self, value: u8) -> [u8; 4] {
        match self {
            PixelSource::Palette(palette) => palette.get(value).to_rgba8(),
            PixelSource::DirectAlpha => [255, 255, 255, value],
        }
    }
}

/// Render rectangle `index` of `frame` into `target`.
///
/// The rectangle lands at its own position minus `(origin_x, origin_y)`.
/// Pixels falling outside `target` are clipped. On error nothing is written.
pub fn blit_region(
    frame: &SubtitleFrame,
    index: usize,
    origin_x: i32,
    origin_y: i32,
    target: &mut FrameBuffer,
) -> SubframeResult<()> {
    let rect = frame.rect(index).ok_or(SubframeError::IndexOutOfRange {
        index,
        count: frame.rect_count(),
    })?;

    if !rect.kind.is_bitmap() {
        return Err(SubframeError::UnsupportedRectType {
            index,
            kind: rect.kind,
        });
    }

    rect.validate(index)?;
    if rect.width == 0 || rect.height == 0 {
        return Ok(());
    }

    let source = PixelSource::for_rect(rect);
    let dx = rect.x as i64 - origin_x as i64;
    let dy = rect.y as i64 - origin_y as i64;
    let target_width = target.width as i64;
    let target_height = target.height as i64;

    for py in 0..rect.height {
        let ty = dy + py as i64;
        if ty < 0 || ty >= target_height {
            continue;
        }
        for (px, &value) in rect.row(py).iter().enumerate() {
            let tx = dx + px as i64;
            if tx < 0 || tx >= target_width {
                continue;
            }
            target.set_pixel(tx as u32, ty as u32, source.resolve(value));
        }
    }

    Ok(())
}
