use rayon::prelude::*;

use subframe_core::hash::{self, ContentHash};
use subframe_core::{FrameBuffer, SubframeResult, SubtitleFrame};

use crate::compositor::{compose, Composition};

/// Result of composing a whole subtitle track.
#[derive(Debug, Clone)]
pub struct RenderResult {
    /// One composition per input frame, in input order.
    pub compositions: Vec<Composition>,
}

impl RenderResult {
    pub fn len(&self) -> usize {
        self.compositions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.compositions.is_empty()
    }

    pub fn images(&self) -> impl ExactSizeIterator<Item = &FrameBuffer> {
        self.compositions.iter().map(|c| &c.image)
    }

    pub fn into_images(self) -> Vec<FrameBuffer> {
        self.compositions.into_iter().map(|c| c.image).collect()
    }

    /// Compute the content hash of every composed image, in order.
    ///
    /// The same track composed by the same engine version produces the same hash.
    pub fn content_hash(&self) -> ContentHash {
        hash::hash_images(self.images())
    }

    /// Compute the content hash of a single composed image by index.
    pub fn image_hash(&self, index: usize) -> Option<ContentHash> {
        self.compositions.get(index).map(|c| hash::hash_image(&c.image))
    }
}

/// Composes sequences of independent subtitle frames.
///
/// Each frame is composed by the sequential single-frame routine; only
/// whole frames are distributed across threads.
#[derive(Debug, Clone, Copy)]
pub struct TrackRenderer {
    parallel: bool,
}

impl TrackRenderer {
    pub fn new() -> Self {
        Self { parallel: true }
    }

    pub fn sequential() -> Self {
        Self { parallel: false }
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Compose every frame. The first failure aborts the track.
    pub fn render(&self, frames: &[SubtitleFrame]) -> SubframeResult<RenderResult> {
        let compositions: SubframeResult<Vec<Composition>> = if self.parallel {
            frames.par_iter().map(compose).collect()
        } else {
            frames.iter().map(compose).collect()
        };
        let compositions = compositions?;

        tracing::debug!(
            "composed {} subtitle frames ({})",
            compositions.len(),
            if self.parallel { "parallel" } else { "sequential" }
        );

        Ok(RenderResult { compositions })
    }
}

impl Default for TrackRenderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Compose every frame in parallel and return the images in input order.
pub fn render_all(frames: &[SubtitleFrame]) -> SubframeResult<Vec<FrameBuffer>> {
    TrackRenderer::new().render(frames).map(RenderResult::into_images)
}
