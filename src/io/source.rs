use std::path::Path;

use image::{ImageReader, RgbaImage};
use tracing::debug;

use crate::error::Result;

/// Decode the logo at `path` (format sniffed from content) into RGBA8.
pub fn load_rgba(path: &Path) -> Result<RgbaImage> {
    let decoded = ImageReader::open(path)?.with_guessed_format()?.decode()?;
    debug!(
        "Loaded {:?}: {}x{} {:?}",
        path,
        decoded.width(),
        decoded.height(),
        decoded.color()
    );
    Ok(decoded.into_rgba8())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use image::{GrayImage, Luma};

    #[test]
    fn test_load_converts_gray_to_rgba() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("logo.png");
        GrayImage::from_pixel(6, 3, Luma([90])).save(&path).unwrap();

        let img = load_rgba(&path).unwrap();
        assert_eq!(img.dimensions(), (6, 3));
        assert_eq!(img.get_pixel(0, 0).0, [90, 90, 90, 255]);
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = load_rgba(&dir.path().join("nope.png"));
        assert!(matches!(result, Err(Error::Io(_))));
    }

    #[test]
    fn test_load_garbage_is_image_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("logo.png");
        std::fs::write(&path, b"\x89PNG\r\n\x1a\nthis is not a png").unwrap();

        assert!(matches!(load_rgba(&path), Err(Error::Image(_))));
    }
}
