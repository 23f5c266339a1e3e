//! Asset loading
//!
//! Only the window icon is loaded from disk. Failures here are never fatal:
//! the caller logs them and carries on with the platform default.

pub mod image_loader;

pub use image_loader::IconImage;

/// Asset loading errors
#[derive(thiserror::Error, Debug)]
pub enum AssetError {
    /// The file could not be read or decoded
    #[error("Asset load failed: {0}")]
    LoadFailed(String),
}
