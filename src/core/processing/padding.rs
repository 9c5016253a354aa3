use image::RgbaImage;
use tracing::debug;

use crate::error::{Error, Result};

/// Top-left offset that centers a `cols`x`rows` image on a `size` square.
pub fn centered_offsets(cols: u32, rows: u32, size: u32) -> (u32, u32) {
    ((size - cols) / 2, (size - rows) / 2)
}

/// Place `img` in the center of a fully transparent `size`x`size` canvas.
pub fn add_padding_to_square(img: &RgbaImage, size: u32) -> Result<RgbaImage> {
    let (cols, rows) = img.dimensions();
    if cols > size || rows > size {
        return Err(Error::Processing(format!(
            "image {}x{} does not fit in a {}x{} square",
            cols, rows, size, size
        )));
    }

    let (pad_cols, pad_rows) = centered_offsets(cols, rows, size);
    debug!(
        "Adding padding: cols={}, rows={}, pad_cols={}, pad_rows={}",
        cols, rows, pad_cols, pad_rows
    );

    let mut padded = RgbaImage::new(size, size);
    let src = img.as_raw();
    let dst: &mut [u8] = &mut padded;
    let row_bytes = cols as usize * 4;
    let stride = size as usize * 4;
    // Transparent canvas: compositing reduces to a straight row copy
    for row in 0..rows as usize {
        let src_offset = row * row_bytes;
        let dst_offset = (row + pad_rows as usize) * stride + pad_cols as usize * 4;
        dst[dst_offset..dst_offset + row_bytes]
            .copy_from_slice(&src[src_offset..src_offset + row_bytes]);
    }
    Ok(padded)
}
