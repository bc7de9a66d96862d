use std::io::Cursor;
use std::path::{Path, PathBuf};

use image::{DynamicImage, ImageFormat, Rgba, RgbaImage};
use picbox_core::{
    CursorSource, PicBoxError, Size, create_cursor, create_thumbnail, decode_image, image_size,
};

fn png_bytes(w: u32, h: u32) -> Vec<u8> {
    let mut img = RgbaImage::new(w, h);
    img.put_pixel(0, 0, Rgba([255, 0, 0, 255]));
    let mut buf = Vec::new();
    DynamicImage::ImageRgba8(img)
        .write_to(&mut Cursor::new(&mut buf), ImageFormat::Png)
        .unwrap();
    buf
}

#[test]
fn decode_embedded_png_reports_dimensions() {
    let bytes = png_bytes(64, 32);
    let decoded = decode_image(&bytes).unwrap();
    assert_eq!(image_size(&decoded), Size::new(64, 32));
}

#[test]
fn decode_rejects_garbage_bytes() {
    let result = decode_image(b"definitely not an image");
    assert!(result.is_err());
}

#[test]
fn thumbnail_width_follows_aspect_ratio() {
    let src = DynamicImage::ImageRgba8(RgbaImage::new(200, 100));
    let thumb = create_thumbnail(&src, 50).unwrap();
    assert_eq!(image_size(&thumb), Size::new(100, 50));
}

#[test]
fn thumbnail_truncates_derived_width() {
    let src = DynamicImage::ImageRgba8(RgbaImage::new(100, 200));
    let thumb = create_thumbnail(&src, 50).unwrap();
    assert_eq!(image_size(&thumb), Size::new(25, 50));
}

/// Very tall sources truncate to a zero width; the thumbnail clamps to 1px.
#[test]
fn thumbnail_width_clamps_to_one_pixel() {
    let src = DynamicImage::ImageRgba8(RgbaImage::new(1, 100));
    let thumb = create_thumbnail(&src, 50).unwrap();
    assert_eq!(image_size(&thumb), Size::new(1, 50));
}

#[test]
fn thumbnail_rejects_zero_height() {
    let src = DynamicImage::ImageRgba8(RgbaImage::new(10, 10));
    let result = create_thumbnail(&src, 0);
    assert!(matches!(result, Err(PicBoxError::InvalidInput(_))));
}

#[test]
fn thumbnail_rejects_empty_source() {
    let src = DynamicImage::ImageRgba8(RgbaImage::new(0, 10));
    let result = create_thumbnail(&src, 50);
    assert!(matches!(
        result,
        Err(PicBoxError::InvalidDimensions { .. })
    ));
}

/// Fake platform backend: records the spool path and reads it back.
struct FakeCursorSource;

impl CursorSource for FakeCursorSource {
    type Handle = (Vec<u8>, PathBuf);

    fn load_cursor_from_file(&self, path: &Path) -> picbox_core::Result<Self::Handle> {
        Ok((std::fs::read(path)?, path.to_path_buf()))
    }
}

#[test]
fn cursor_bytes_are_spooled_then_cleaned_up() {
    let payload = b"RIFF fake cursor payload";
    let (bytes, spool_path) = create_cursor(&FakeCursorSource, payload).unwrap();
    assert_eq!(bytes, payload);
    // the temporary spool file must be gone once the handle is returned
    assert!(!spool_path.exists());
}

/// Backend errors surface unchanged through the spooling wrapper.
struct FailingCursorSource;

impl CursorSource for FailingCursorSource {
    type Handle = ();

    fn load_cursor_from_file(&self, _path: &Path) -> picbox_core::Result<Self::Handle> {
        Err(PicBoxError::InvalidInput("unsupported cursor format".into()))
    }
}

#[test]
fn cursor_backend_errors_propagate() {
    let result = create_cursor(&FailingCursorSource, b"payload");
    assert!(matches!(result, Err(PicBoxError::InvalidInput(_))));
}
