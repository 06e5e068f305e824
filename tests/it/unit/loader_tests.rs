//! Unit tests for the image loader collaborator.

use image::{DynamicImage, ImageFormat};
use std::io::Cursor;
use std::path::PathBuf;
use tempfile::tempdir;
use trackboard::loader::{self, LoaderError};

fn png_bytes(width: u32, height: u32) -> Vec<u8> {
    let image = DynamicImage::new_rgba8(width, height);
    let mut buffer = Cursor::new(Vec::new());
    image.write_to(&mut buffer, ImageFormat::Png).unwrap();
    buffer.into_inner()
}

#[test]
fn test_decode_from_bytes() {
    let loaded = loader::load_from_bytes(None, &png_bytes(4, 3)).unwrap();
    assert_eq!(loaded.width, 4);
    assert_eq!(loaded.height, 3);
    assert_eq!(loaded.path, None);
    assert_eq!(loaded.content_size(), (4.0, 3.0));
}

#[test]
fn test_garbage_bytes_fail_to_decode() {
    let err = loader::load_from_bytes(Some(PathBuf::from("junk.png")), b"not an image").unwrap_err();
    assert!(matches!(err, LoaderError::Decode(_)));
}

#[test]
fn test_load_from_disk() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("photo.png");
    std::fs::write(&path, png_bytes(16, 9)).unwrap();

    let loaded = loader::load_from_path(&path).unwrap();
    assert_eq!(loaded.width, 16);
    assert_eq!(loaded.height, 9);
    assert_eq!(loaded.path.as_deref(), Some(path.as_path()));
    assert_eq!(loaded.display_name(), "photo.png");
}

#[test]
fn test_non_image_extension_is_rejected_before_reading() {
    let dir = tempdir().unwrap();
    // Valid PNG bytes behind a non-image extension still fail intake
    let path = dir.path().join("photo.dat");
    std::fs::write(&path, png_bytes(2, 2)).unwrap();

    let err = loader::load_from_path(&path).unwrap_err();
    assert!(matches!(err, LoaderError::UnsupportedFormat(_)));
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = tempdir().unwrap();
    let err = loader::load_from_path(&dir.path().join("absent.png")).unwrap_err();
    assert!(matches!(err, LoaderError::Io(_)));
}
