use std::path::Path;

use egui::{ColorImage, Pos2, Rect, Vec2, pos2};
use image::{DynamicImage, ImageFormat, RgbaImage};

use crate::error::FileError;

/// Filters offered by the open dialog. The save dialog uses the same list minus "All files".
pub const IMAGE_FILTERS: [(&str, &[&str]); 4] = [
    ("PNG files", &["png"]),
    ("JPEG files", &["jpg", "jpeg"]),
    ("TIFF files", &["tiff"]),
    ("GIF files", &["gif"]),
];

/// Pick the encoder from the destination extension, case-insensitively.
pub fn export_format(path: &Path) -> Result<ImageFormat, FileError> {
    let ext = path
        .extension()
        .map(|ext| ext.to_string_lossy().to_lowercase())
        .unwrap_or_default();
    match ext.as_str() {
        "png" => Ok(ImageFormat::Png),
        "jpg" | "jpeg" => Ok(ImageFormat::Jpeg),
        "tiff" => Ok(ImageFormat::Tiff),
        "gif" => Ok(ImageFormat::Gif),
        _ => Err(FileError::UnsupportedFormat(ext)),
    }
}

/// Read and decode an image file into egui's pixel format.
pub fn load_image(path: &Path) -> Result<ColorImage, FileError> {
    let bytes = std::fs::read(path).map_err(|source| FileError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let decoded = image::load_from_memory(&bytes).map_err(|source| FileError::Decode {
        path: path.to_path_buf(),
        source,
    })?;
    log::debug!("Decoded image: {}x{}", decoded.width(), decoded.height());

    let rgba = decoded.to_rgba8();
    let size = [rgba.width() as usize, rgba.height() as usize];
    Ok(ColorImage::from_rgba_unmultiplied(size, rgba.as_raw()))
}

/// Encode captured pixels to `path`. The format is checked before anything is written.
pub fn save_image(path: &Path, pixels: &ColorImage) -> Result<(), FileError> {
    let format = export_format(path)?;
    let [width, height] = pixels.size;
    if width == 0 || height == 0 {
        return Err(FileError::EmptyCapture);
    }

    let raw: Vec<u8> = pixels
        .pixels
        .iter()
        .flat_map(|color| color.to_srgba_unmultiplied())
        .collect();
    let buffer =
        RgbaImage::from_raw(width as u32, height as u32, raw).ok_or(FileError::EmptyCapture)?;
    let image = DynamicImage::ImageRgba8(buffer);

    // JPEG has no alpha channel
    let image = match format {
        ImageFormat::Jpeg => DynamicImage::ImageRgb8(image.to_rgb8()),
        _ => image,
    };

    image
        .save_with_format(path, format)
        .map_err(|source| FileError::Encode {
            path: path.to_path_buf(),
            source,
        })?;
    log::info!("Saved {}x{} image to {}", width, height, path.display());
    Ok(())
}

/// Top-left corner that centers an image on the canvas, rounded down like integer division.
pub fn centered_position(canvas_size: Vec2, image_size: Vec2) -> Pos2 {
    pos2(
        ((canvas_size.x - image_size.x) / 2.0).floor(),
        ((canvas_size.y - image_size.y) / 2.0).floor(),
    )
}

/// Cut the canvas region out of a full-viewport screenshot.
pub fn crop_capture(screenshot: &ColorImage, canvas_rect: Rect, pixels_per_point: f32) -> ColorImage {
    screenshot.region(&canvas_rect, Some(pixels_per_point))
}
