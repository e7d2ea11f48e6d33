//! # subframe-core
//!
//! Core types for the subframe subtitle compositor.
//! This crate holds the types shared by the compositor and its front ends:
//! subtitle frames and rectangles, palettes, RGBA image buffers, bounding
//! boxes, content hashes, configuration and error types.

pub mod color;
pub mod config;
pub mod error;
pub mod frame;
pub mod hash;
pub mod math;
pub mod types;

pub use config::*;

pub use color::{Argb, Palette, PALETTE_SIZE};
pub use error::{SubframeError, SubframeResult};
pub use frame::FrameBuffer;
pub use hash::ContentHash;
pub use math::BoundingBox;
pub use types::{RectKind, SubtitleFrame, SubtitleRect};
