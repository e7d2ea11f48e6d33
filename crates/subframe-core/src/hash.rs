//! Content hashing of composed subtitle images.
//!
//! A SHA-256 digest over dimensions and pixel bytes lets callers verify that
//! the same frame always composes to the same image.

use sha2::{Digest, Sha256};

use crate::frame::FrameBuffer;

/// A content hash digest (SHA-256, 32 bytes).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ContentHash {
    bytes: [u8; 32],
}

impl ContentHash {
    pub fn from_bytes(bytes: [u8; 32]) -> Self {
        Self { bytes }
    }

    /// Get the hash as a lowercase hex string.
    pub fn to_hex(&self) -> String {
        self.bytes.iter().map(|b| format!("{:02x}", b)).collect()
    }

    /// First 12 hex characters, for log lines.
    pub fn short(&self) -> String {
        self.to_hex()[..12].to_string()
    }
}

impl std::fmt::Display for ContentHash {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

fn update_with(hasher: &mut Sha256, image: &FrameBuffer) {
    // Dimensions first, so a 2x1 and a 1x2 image with equal bytes differ.
    hasher.update(image.width.to_le_bytes());
    hasher.update(image.height.to_le_bytes());
    hasher.update(&image.data);
}

fn finish(hasher: Sha256) -> ContentHash {
    let mut bytes = [0u8; 32];
    bytes.copy_from_slice(&hasher.finalize());
    ContentHash::from_bytes(bytes)
}

/// Compute the content hash of a single image.
pub fn hash_image(image: &FrameBuffer) -> ContentHash {
    let mut hasher = Sha256::new();
    update_with(&mut hasher, image);
    finish(hasher)
}

/// Compute the content hash of an ordered sequence of images (a composed track).
pub fn hash_images<'a, I>(images: I) -> ContentHash
where
    I: IntoIterator<Item = &'a FrameBuffer>,
    I::IntoIter: ExactSizeIterator,
{
    let images = images.into_iter();
    let mut hasher = Sha256::new();
    hasher.update((images.len() as u64).to_le_bytes());
    for image in images {
        update_with(&mut hasher, image);
    }
    finish(hasher)
}
