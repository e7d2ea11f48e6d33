use serde::{Deserialize, Serialize};

use crate::color::Palette;
use crate::error::{SubframeError, SubframeResult};

/// The kind of content a subtitle rectangle holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RectKind {
    /// Palette-indexed or direct-alpha bitmap. The only renderable kind.
    Bitmap,
    /// Plain text payload.
    Text,
    /// ASS/SSA event payload.
    Ass,
    /// Anything else a decoder may report.
    Other,
}

impl RectKind {
    pub fn is_bitmap(&self) -> bool {
        matches!(self, RectKind::Bitmap)
    }
}

impl std::fmt::Display for RectKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RectKind::Bitmap => write!(f, "bitmap"),
            RectKind::Text => write!(f, "text"),
            RectKind::Ass => write!(f, "ass"),
            RectKind::Other => write!(f, "other"),
        }
    }
}

/// One positioned region of a subtitle frame.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RectRepr")]
pub struct SubtitleRect {
    pub kind: RectKind,
    /// Left edge in subtitle coordinates.
    pub x: i32,
    /// Top edge in subtitle coordinates.
    pub y: i32,
    pub width: u32,
    pub height: u32,
    /// Row-major pixel bytes: palette indices, or alpha values when there is no palette.
    pub data: Vec<u8>,
    /// Bytes per row in `data`; may include padding past `width`.
    pub stride: usize,
    pub palette: Option<Palette>,
}

/// Serialized form of a rectangle. A missing stride means tightly packed rows.
#[derive(Deserialize)]
struct RectRepr {
    kind: RectKind,
    x: i32,
    y: i32,
    width: u32,
    height: u32,
    #[serde(default)]
    data: Vec<u8>,
    #[serde(default)]
    stride: Option<usize>,
    #[serde(default)]
    palette: Option<Palette>,
}

impl From<RectRepr> for SubtitleRect {
    fn from(repr: RectRepr) -> Self {
        Self {
            kind: repr.kind,
            x: repr.x,
            y: repr.y,
            width: repr.width,
            height: repr.height,
            data: repr.data,
            stride: repr.stride.unwrap_or(repr.width as usize),
            palette: repr.palette,
        }
    }
}

impl SubtitleRect {
    /// A bitmap region with tightly packed rows and no palette.
    pub fn bitmap(x: i32, y: i32, width: u32, height: u32, data: Vec<u8>) -> Self {
        Self {
            kind: RectKind::Bitmap,
            x,
            y,
            width,
            height,
            data,
            stride: width as usize,
            palette: None,
        }
    }

    /// A region of a non-bitmap kind. It carries extent only.
    pub fn non_bitmap(kind: RectKind, x: i32, y: i32, width: u32, height: u32) -> Self {
        Self {
            kind,
            x,
            y,
            width,
            height,
            data: Vec::new(),
            stride: 0,
            palette: None,
        }
    }

    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = Some(palette);
        self
    }

    pub fn with_stride(mut self, stride: usize) -> Self {
        self.stride = stride;
        self
    }

    /// Check that every pixel of the region can be read from `data`.
    ///
    /// `index` is only used to label the error.
    pub fn validate(&self, index: usize) -> SubframeResult<()> {
        let width = self.width as usize;
        let height = self.height as usize;
        if width == 0 || height == 0 {
            return Ok(());
        }
        if self.stride < width {
            return Err(SubframeError::invalid_rect(
                index,
                format!("stride {} is smaller than width {}", self.stride, width),
            ));
        }
        // The last row only needs `width` bytes, not a full stride.
        let required = (height - 1)
            .checked_mul(self.stride)
            .and_then(|n| n.checked_add(width))
            .ok_or_else(|| SubframeError::invalid_rect(index, "pixel buffer size overflows"))?;
        if self.data.len() < required {
            return Err(SubframeError::invalid_rect(
                index,
                format!(
                    "pixel buffer has {} bytes, {}x{} with stride {} needs {}",
                    self.data.len(),
                    width,
                    height,
                    self.stride,
                    required
                ),
            ));
        }
        Ok(())
    }

    /// The `width` visible bytes of row `row`. Only valid after `validate`.
    pub fn row(&self, row: u32) -> &[u8] {
        let start = row as usize * self.stride;
        &self.data[start..start + self.width as usize]
    }
}

/// One decoded subtitle: a set of independently positioned regions.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SubtitleFrame {
    #[serde(default)]
    pub rects: Vec<SubtitleRect>,
    /// Display start, in milliseconds relative to `pts`.
    #[serde(default)]
    pub start_display_time: u32,
    /// Display end, in milliseconds relative to `pts`.
    #[serde(default)]
    pub end_display_time: u32,
    #[serde(default)]
    pub pts: Option<i64>,
}

impl SubtitleFrame {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_rect(mut self, rect: SubtitleRect) -> Self {
        self.rects.push(rect);
        self
    }

    pub fn with_display_time(mut self, start: u32, end: u32) -> Self {
        self.start_display_time = start;
        self.end_display_time = end;
        self
    }

    pub fn rect_count(&self) -> usize {
        self.rects.len()
    }

    pub fn rect(&self, index: usize) -> Option<&SubtitleRect> {
        self.rects.get(index)
    }

    pub fn rects(&self) -> &[SubtitleRect] {
        &self.rects
    }

    /// End minus start display time. Negative if the decoder reported them swapped.
    pub fn duration_ms(&self) -> i64 {
        self.end_display_time as i64 - self.start_display_time as i64
    }

    /// Parse a frame from its JSON form.
    pub fn from_json(json: &str) -> SubframeResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
