use serde::{Deserialize, Serialize};

/// An axis-aligned integer rectangle in subtitle coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct BoundingBox {
    /// Left edge (minimum x).
    pub x: i32,
    /// Top edge (minimum y).
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

impl BoundingBox {
    pub fn new(x: i32, y: i32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// The zero box used for frames without rectangles.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a box from its edges. Inverted edges collapse to zero size and
    /// spans wider than `u32::MAX` saturate.
    pub fn from_edges(min_x: i32, min_y: i32, max_x: i64, max_y: i64) -> Self {
        Self {
            x: min_x,
            y: min_y,
            width: span(min_x, max_x),
            height: span(min_y, max_y),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Exclusive right edge.
    pub fn right(&self) -> i64 {
        self.x as i64 + self.width as i64
    }

    /// Exclusive bottom edge.
    pub fn bottom(&self) -> i64 {
        self.y as i64 + self.height as i64
    }

    /// True if `other` lies entirely inside this box.
    pub fn contains(&self, other: &BoundingBox) -> bool {
        other.x >= self.x
            && other.y >= self.y
            && other.right() <= self.right()
            && other.bottom() <= self.bottom()
    }
}

impl std::fmt::Display for BoundingBox {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}+{}+{}", self.width, self.height, self.x, self.y)
    }
}

fn span(min: i32, max: i64) -> u32 {
    let len = (max - min as i64).max(0);
    u32::try_from(len).unwrap_or(u32::MAX)
}
