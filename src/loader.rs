//! Image loader - the file intake collaborator.
//!
//! Validates that a selected or dropped file is an image (its MIME type,
//! derived from the file extension, must start with `image/`), decodes it,
//! and hands back a [`LoadedImage`] with the content dimensions. Rejection
//! happens here; the transform engine never sees a non-image file.

use image::GenericImageView;
use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::types::LoadedImage;

/// Errors that can occur while taking in an image file
#[derive(Error, Debug)]
pub enum LoaderError {
    /// IO error from std::io
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// File is not an image (MIME type does not start with `image/`)
    #[error("Unsupported file type: {0}")]
    UnsupportedFormat(String),

    /// Decode error from the image crate
    #[error("Decode error: {0}")]
    Decode(#[from] image::ImageError),

    /// Generic error message
    #[error("{0}")]
    Other(String),
}

/// Result type alias for loader operations
pub type LoaderResult<T> = Result<T, LoaderError>;

impl From<String> for LoaderError {
    fn from(s: String) -> Self {
        LoaderError::Other(s)
    }
}

/// Extension -> MIME table for the formats the viewer accepts.
static MIME_BY_EXTENSION: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("png", "image/png"),
        ("jpg", "image/jpeg"),
        ("jpeg", "image/jpeg"),
        ("gif", "image/gif"),
        ("bmp", "image/bmp"),
        ("webp", "image/webp"),
        ("tif", "image/tiff"),
        ("tiff", "image/tiff"),
    ])
});

/// MIME type for a path, from its extension.
pub fn mime_for_path(path: &Path) -> Option<&'static str> {
    let extension = path.extension()?.to_str()?.to_ascii_lowercase();
    MIME_BY_EXTENSION.get(extension.as_str()).copied()
}

/// Intake rule: only `image/*` files are accepted.
pub fn is_image_mime(mime: &str) -> bool {
    mime.starts_with("image/")
}

/// Whether a path would pass intake validation, without touching the disk.
pub fn accepts_path(path: &Path) -> bool {
    mime_for_path(path).is_some_and(is_image_mime)
}

/// Load and decode an image file from disk.
pub fn load_from_path(path: &Path) -> LoaderResult<LoadedImage> {
    let mime = mime_for_path(path)
        .ok_or_else(|| LoaderError::UnsupportedFormat(path.display().to_string()))?;
    if !is_image_mime(mime) {
        return Err(LoaderError::UnsupportedFormat(path.display().to_string()));
    }

    let bytes = std::fs::read(path)?;
    decode(Some(path.to_path_buf()), &bytes)
}

/// Decode an image already held in memory (e.g. pasted or streamed intake).
pub fn load_from_bytes(source: Option<PathBuf>, bytes: &[u8]) -> LoaderResult<LoadedImage> {
    decode(source, bytes)
}

fn decode(path: Option<PathBuf>, bytes: &[u8]) -> LoaderResult<LoadedImage> {
    let decoded = image::load_from_memory(bytes)?;
    let (width, height) = decoded.dimensions();
    tracing::info!(width, height, ?path, "Image decoded");
    Ok(LoadedImage {
        path,
        width,
        height,
    })
}
