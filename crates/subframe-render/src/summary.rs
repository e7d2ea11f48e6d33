//! Human-readable diagnostics for subtitle frames.
//!
//! Pure formatting; callers decide where the text goes.

use subframe_core::{SubtitleFrame, SubtitleRect};

/// One-line summary: rectangle count, display window and its duration.
pub fn summarize(frame: Option<&SubtitleFrame>) -> String {
    match frame {
        None => "subtitles: nil".to_string(),
        Some(frame) => format!(
            "subtitles: num={} s:e={}:{} (d={})",
            frame.rect_count(),
            frame.start_display_time,
            frame.end_display_time,
            frame.duration_ms()
        ),
    }
}

/// One-line description of a single rectangle.
pub fn describe_rect(index: usize, rect: &SubtitleRect) -> String {
    let palette = if rect.palette.is_some() { "palette" } else { "no palette" };
    format!(
        "rect {}: {} {}x{} at ({}, {}) stride={} {}",
        index, rect.kind, rect.width, rect.height, rect.x, rect.y, rect.stride, palette
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use subframe_core::{Palette, RectKind};

    #[test]
    fn test_summarize_nil() {
        assert_eq!(summarize(None), "subtitles: nil");
    }

    #[test]
    fn test_summarize_frame() {
        let frame = SubtitleFrame::new()
            .with_rect(SubtitleRect::bitmap(0, 0, 1, 1, vec![0]))
            .with_rect(SubtitleRect::non_bitmap(RectKind::Text, 0, 0, 1, 1))
            .with_display_time(0, 2500);
        assert_eq!(summarize(Some(&frame)), "subtitles: num=2 s:e=0:2500 (d=2500)");
    }

    #[test]
    fn test_summarize_negative_duration() {
        let frame = SubtitleFrame::new().with_display_time(300, 100);
        assert_eq!(summarize(Some(&frame)), "subtitles: num=0 s:e=300:100 (d=-200)");
    }

    #[test]
    fn test_describe_rect() {
        let rect = SubtitleRect::bitmap(-4, 12, 2, 1, vec![0, 0])
            .with_stride(8)
            .with_palette(Palette::default());
        assert_eq!(
            describe_rect(3, &rect),
            "rect 3: bitmap 2x1 at (-4, 12) stride=8 palette"
        );
    }
}
