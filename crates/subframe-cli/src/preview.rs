//! Terminal preview of a composed subtitle image.

use subframe_core::{FrameBuffer, PreviewConfig};

/// Render `image` as text, one line per pixel row.
///
/// Pixels with alpha at or above the threshold print as the opaque glyph.
pub fn ascii_preview(image: &FrameBuffer, config: &PreviewConfig) -> String {
    let mut out = String::with_capacity(image.pixel_count() + image.height as usize);
    for y in 0..image.height {
        for x in 0..image.width {
            let visible = image
                .get_pixel(x, y)
                .map(|px| px[3] > 0 && px[3] >= config.threshold)
                .unwrap_or(false);
            out.push(if visible { config.opaque } else { config.transparent });
        }
        out.push('\n');
    }
    out
}
