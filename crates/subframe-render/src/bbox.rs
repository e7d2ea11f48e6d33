//! Bounding-box reduction over the rectangles of a subtitle frame.

use subframe_core::{BoundingBox, SubtitleFrame};

/// Smallest box covering every rectangle of `frame`.
///
/// Every rectangle counts, whatever its kind, so non-bitmap regions can grow
/// the box without contributing pixels. A frame with no rectangles yields
/// the empty box at the origin.
pub fn compute_bounding_box(frame: &SubtitleFrame) -> BoundingBox {
    let edges = frame.rects().iter().fold(None::<(i32, i32, i64, i64)>, |acc, rect| {
        let right = rect.x as i64 + rect.width as i64;
        let bottom = rect.y as i64 + rect.height as i64;
        Some(match acc {
            None => (rect.x, rect.y, right, bottom),
            Some((min_x, min_y, max_x, max_y)) => (
                rect.x.min(min_x),
                rect.y.min(min_y),
                right.max(max_x),
                bottom.max(max_y),
            ),
        })
    });

    match edges {
        Some((min_x, min_y, max_x, max_y)) => BoundingBox::from_edges(min_x, min_y, max_x, max_y),
        None => BoundingBox::empty(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use subframe_core::{RectKind, SubtitleRect};

    fn bitmap(x: i32, y: i32, w: u32, h: u32) -> SubtitleRect {
        SubtitleRect::bitmap(x, y, w, h, vec![0; (w * h) as usize])
    }

    #[test]
    fn test_empty_frame() {
        let bb = compute_bounding_box(&SubtitleFrame::new());
        assert_eq!(bb, BoundingBox::new(0, 0, 0, 0));
    }

    #[test]
    fn test_single_rect() {
        let frame = SubtitleFrame::new().with_rect(bitmap(100, 400, 320, 48));
        assert_eq!(compute_bounding_box(&frame), BoundingBox::new(100, 400, 320, 48));
    }

    #[test]
    fn test_non_overlapping_rects() {
        let frame = SubtitleFrame::new()
            .with_rect(bitmap(10, 500, 200, 30))
            .with_rect(bitmap(50, 540, 300, 30));
        // min x 10, max x 350; min y 500, max y 570
        assert_eq!(compute_bounding_box(&frame), BoundingBox::new(10, 500, 340, 70));
    }

    #[test]
    fn test_overlapping_rects() {
        let frame = SubtitleFrame::new()
            .with_rect(bitmap(0, 0, 10, 10))
            .with_rect(bitmap(5, 5, 10, 10))
            .with_rect(bitmap(2, 2, 3, 3));
        assert_eq!(compute_bounding_box(&frame), BoundingBox::new(0, 0, 15, 15));
    }

    #[test]
    fn test_negative_coordinates() {
        let frame = SubtitleFrame::new()
            .with_rect(bitmap(-20, -5, 10, 10))
            .with_rect(bitmap(30, 0, 5, 5));
        assert_eq!(compute_bounding_box(&frame), BoundingBox::new(-20, -5, 55, 10));
    }

    #[test]
    fn test_coordinates_beyond_legacy_sentinel() {
        let frame = SubtitleFrame::new().with_rect(bitmap(12_000, 15_000, 4, 2));
        assert_eq!(compute_bounding_box(&frame), BoundingBox::new(12_000, 15_000, 4, 2));
    }

    #[test]
    fn test_non_bitmap_rects_grow_the_box() {
        let frame = SubtitleFrame::new()
            .with_rect(bitmap(10, 10, 5, 5))
            .with_rect(SubtitleRect::non_bitmap(RectKind::Text, 0, 0, 40, 2));
        assert_eq!(compute_bounding_box(&frame), BoundingBox::new(0, 0, 40, 15));
    }
}
