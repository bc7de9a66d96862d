use crate::error::{PicBoxError, Result};
use crate::model::{Rect, Size};

/// Computes the rectangle at which an image of `image` pixels should be
/// drawn inside `target`.
///
/// Two regimes:
/// - image strictly smaller than the target in both axes: keep the native
///   size and center it, or, with `stretch_to_fit`, upscale by the smaller
///   per-axis ratio and center the leftover axis;
/// - image at least as large as the target in one axis: shrink onto the
///   target, picking the binding axis by integer cross-multiplication.
///
/// The upscale path uses f32 ratios with truncating casts while the shrink
/// path stays in integer arithmetic. The two round differently and both
/// roundings are part of the visual contract, so they are kept separate.
///
/// Returns `InvalidDimensions` when either image dimension is zero; a
/// zero-size `target` yields a zero-size result without error.
pub fn scale_to_fit(image: Size, target: Rect, stretch_to_fit: bool) -> Result<Rect> {
    if image.is_empty() {
        return Err(PicBoxError::InvalidDimensions {
            width: image.w,
            height: image.h,
        });
    }

    let mut result;
    if image.w < target.w && image.h < target.h {
        if stretch_to_fit {
            let width_ratio = target.w as f32 / image.w as f32;
            let height_ratio = target.h as f32 / image.h as f32;
            let min_ratio = width_ratio.min(height_ratio);
            result = Rect::new(
                target.x,
                target.y,
                (image.w as f32 * min_ratio) as u32,
                (image.h as f32 * min_ratio) as u32,
            );
            if result.w < target.w {
                result.x += ((target.w - result.w) / 2) as i32;
            }
            if result.h < target.h {
                result.y += ((target.h - result.h) / 2) as i32;
            }
        } else {
            // native size, centered inside the larger target
            result = Rect::from_origin_size(target.x, target.y, image);
            result.x += ((target.w - result.w) / 2) as i32;
            result.y += ((target.h - result.h) / 2) as i32;
        }
    } else {
        result = target;
        // binding axis without float division: image.w/image.h vs result.w/result.h
        if image.w as u64 * result.h as u64 > image.h as u64 * result.w as u64 {
            // image relatively wider: width pins, height recomputed and centered
            result.h = (result.w as u64 * image.h as u64 / image.w as u64) as u32;
            result.y += ((target.h - result.h) / 2) as i32;
        } else {
            // image relatively taller (or same shape): height pins
            result.w = (result.h as u64 * image.w as u64 / image.h as u64) as u32;
            result.x += ((target.w - result.w) / 2) as i32;
        }
    }

    Ok(result)
}
