use image::{DynamicImage, imageops::FilterType};
use tracing::debug;

use crate::error::{PicBoxError, Result};

/// Creates a thumbnail `height` pixels tall from `original`, deriving the
/// width from the source aspect ratio (f32 ratio, truncating cast).
pub fn create_thumbnail(original: &DynamicImage, height: u32) -> Result<DynamicImage> {
    let (sw, sh) = (original.width(), original.height());
    if sw == 0 || sh == 0 {
        return Err(PicBoxError::InvalidDimensions {
            width: sw,
            height: sh,
        });
    }
    if height == 0 {
        return Err(PicBoxError::InvalidInput(
            "thumbnail height must be greater than zero".into(),
        ));
    }

    let ratio = sw as f32 / sh as f32;
    // truncation can reach 0 for very tall sources
    let width = ((height as f32 * ratio) as u32).max(1);
    debug!(width, height, "resampling thumbnail");
    Ok(original.resize_exact(width, height, FilterType::Triangle))
}
