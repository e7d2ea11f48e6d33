//! # subframe-render
//!
//! The subtitle compositor. Takes a decoded subtitle frame made of
//! independently positioned bitmap regions and produces one RGBA image
//! covering all of them: bounding-box reduction first, then palette
//! resolution and blitting of each region in index order.

pub mod bbox;
pub mod blit;
pub mod compositor;
pub mod pipeline;
pub mod summary;

pub use bbox::compute_bounding_box;
pub use blit::{blit_region, PixelSource};
pub use compositor::{compose, render_subtitle_image, Composition};
pub use pipeline::{render_all, RenderResult, TrackRenderer};
pub use summary::{describe_rect, summarize};
