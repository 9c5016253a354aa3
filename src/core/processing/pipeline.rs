use image::RgbaImage;
use tracing::debug;

use crate::core::params::IconParams;
use crate::core::processing::padding::add_padding_to_square;
use crate::core::processing::resize::{calculate_thumbnail_dimensions, resize_rgba_image};
use crate::error::Result;

/// Turn a decoded RGBA logo into one square icon.
pub fn process_icon(source: &RgbaImage, params: &IconParams) -> Result<RgbaImage> {
    params.validate()?;
    let (cols, rows) = source.dimensions();

    if params.maintain_aspect {
        let (new_cols, new_rows) = calculate_thumbnail_dimensions(cols, rows, params.size);
        debug!(
            "Original size: {}x{}, New size: {}x{}, canvas {}",
            cols, rows, new_cols, new_rows, params.size
        );
        let resized = resize_rgba_image(source, new_cols, new_rows)?;
        add_padding_to_square(&resized, params.size)
    } else {
        resize_rgba_image(source, params.size, params.size)
    }
}
