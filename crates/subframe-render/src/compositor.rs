//! Top-level composition of a subtitle frame into one RGBA image.

use subframe_core::{BoundingBox, FrameBuffer, SubframeResult, SubtitleFrame};

use crate::bbox::compute_bounding_box;
use crate::blit::blit_region;

/// A composed frame together with the box it was cut from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Composition {
    /// Position and size of `image` in subtitle coordinates.
    pub bounds: BoundingBox,
    pub image: FrameBuffer,
}

/// Compose every bitmap rectangle of `frame` into one image.
///
/// Non-bitmap rectangles are skipped but still count towards the bounds.
/// Overlapping rectangles are drawn in index order, so later ones win.
/// Any blit error aborts the whole composition.
pub fn compose(frame: &SubtitleFrame) -> SubframeResult<Composition> {
    let bounds = compute_bounding_box(frame);
    let mut image = FrameBuffer::try_new(bounds.width, bounds.height)?;

    let mut drawn = 0usize;
    for (index, rect) in frame.rects().iter().enumerate() {
        if !rect.kind.is_bitmap() {
            tracing::trace!("skipping {} rectangle {}", rect.kind, index);
            continue;
        }
        blit_region(frame, index, bounds.x, bounds.y, &mut image)?;
        drawn += 1;
    }

    tracing::debug!(
        "composed {} of {} rectangles into {}",
        drawn,
        frame.rect_count(),
        bounds
    );

    Ok(Composition { bounds, image })
}

/// Compose `frame` and return only the image. An empty frame yields a 0x0 image.
pub fn render_subtitle_image(frame: &SubtitleFrame) -> SubframeResult<FrameBuffer> {
    compose(frame).map(|composition| composition.image)
}
