//! Grayscale PNG encoding for density slices.

use std::path::Path;

use image::{GrayImage, ImageFormat};
use qjulia_core::PixelBuffer;

use crate::error::ExportError;

fn to_gray_image(buffer: PixelBuffer) -> Result<GrayImage, ExportError> {
    let (width, height) = (buffer.width(), buffer.height());
    let expected = width as usize * height as usize;
    let actual = buffer.pixels().len();
    // Row-major with y as the row, which is also the image crate's layout
    GrayImage::from_raw(width, height, buffer.into_pixels())
        .ok_or(ExportError::InvalidImageData { expected, actual })
}

/// Encodes a slice as an 8-bit single-channel PNG in memory.
pub fn encode_png(buffer: PixelBuffer) -> Result<Vec<u8>, ExportError> {
    let img = to_gray_image(buffer)?;

    let mut out = std::io::Cursor::new(Vec::new());
    img.write_to(&mut out, ImageFormat::Png)?;

    Ok(out.into_inner())
}

/// Encodes a slice as an 8-bit single-channel PNG file.
///
/// The parent directory must already exist.
pub fn save_png(path: impl AsRef<Path>, buffer: PixelBuffer) -> Result<(), ExportError> {
    let path = path.as_ref();
    let bytes = encode_png(buffer)?;
    std::fs::write(path, bytes)?;
    log::debug!("wrote {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use qjulia_core::SampleGrid;

    fn gradient(width: u32, height: u32) -> PixelBuffer {
        let values = (0..width * height).map(|i| i as f32 * 0.1).collect();
        SampleGrid::from_values(width, height, values)
            .unwrap()
            .pack(4.0)
    }

    #[test]
    fn test_encoded_png_decodes_to_same_pixels() {
        let buffer = gradient(5, 3);
        let bytes = encode_png(buffer.clone()).unwrap();
        assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");

        let decoded = image::load_from_memory(&bytes).unwrap();
        assert_eq!(decoded.color(), image::ColorType::L8);

        let gray = decoded.to_luma8();
        assert_eq!(gray.dimensions(), (5, 3));
        assert_eq!(gray.as_raw().as_slice(), buffer.pixels());
        assert_eq!(gray.get_pixel(4, 2).0[0], buffer.get(4, 2));
    }

    #[test]
    fn test_save_png_to_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("slice 0.png");
        let err = save_png(&path, gradient(2, 2)).unwrap_err();
        assert!(matches!(err, ExportError::IoError(_)));
    }

    #[test]
    fn test_save_png_writes_decodable_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("slice 0.png");
        let buffer = gradient(4, 6);
        save_png(&path, buffer.clone()).unwrap();

        let decoded = image::open(&path).unwrap().to_luma8();
        assert_eq!(decoded.dimensions(), (4, 6));
        assert_eq!(decoded.into_raw(), buffer.into_pixels());
    }
}
