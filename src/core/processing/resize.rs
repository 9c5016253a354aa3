use fast_image_resize::{FilterType, PixelType, ResizeAlg, ResizeOptions, Resizer, images::Image};
use image::RgbaImage;
use tracing::{debug, warn};

use crate::error::{Error, Result};

/// Fit `width`x`height` inside a `target_size` square, keeping the aspect ratio.
/// Never enlarges: a source that already fits keeps its dimensions.
pub fn calculate_thumbnail_dimensions(width: u32, height: u32, target_size: u32) -> (u32, u32) {
    let short_side = width.min(height);
    let long_side = width.max(height);

    if target_size >= long_side {
        if target_size > long_side {
            warn!(
                "Target size {} is larger than source long side {}. Keeping original dimensions {}x{}",
                target_size, long_side, width, height
            );
        }
        return (width, height);
    }

    let scale_factor = target_size as f64 / long_side as f64;
    let new_short_side = ((short_side as f64 * scale_factor).round() as u32).max(1);

    if width > height {
        (target_size, new_short_side)
    } else if height > width {
        (new_short_side, target_size)
    } else {
        (target_size, target_size)
    }
}

/// Lanczos3 resample of an RGBA8 image. Alpha is premultiplied during filtering.
pub fn resize_rgba_image(src: &RgbaImage, target_cols: u32, target_rows: u32) -> Result<RgbaImage> {
    let (cols, rows) = src.dimensions();
    if cols == 0 || rows == 0 || target_cols == 0 || target_rows == 0 {
        return Err(Error::Processing(format!(
            "cannot resize {}x{} image to {}x{}",
            cols, rows, target_cols, target_rows
        )));
    }
    if (cols, rows) == (target_cols, target_rows) {
        debug!("Source already {}x{}, skipping resample", cols, rows);
        return Ok(src.clone());
    }

    let resize_options =
        ResizeOptions::new().resize_alg(ResizeAlg::Convolution(FilterType::Lanczos3));
    let mut resizer = Resizer::new();

    let src_image = Image::from_vec_u8(cols, rows, src.as_raw().clone(), PixelType::U8x4)?;
    let mut dst_image = Image::new(target_cols, target_rows, PixelType::U8x4);
    resizer.resize(&src_image, &mut dst_image, &resize_options)?;

    RgbaImage::from_raw(target_cols, target_rows, dst_image.into_vec()).ok_or_else(|| {
        Error::Processing("resized buffer does not match target dimensions".to_string())
    })
}
