use std::io::{Cursor, Write};
use std::path::Path;

use image::{DynamicImage, ImageReader};
use tracing::debug;

use crate::error::Result;
use crate::model::Size;

/// Decodes an embedded resource (e.g. from `include_bytes!`) into an
/// in-memory image, guessing the format from the byte content.
pub fn decode_image(bytes: &[u8]) -> Result<DynamicImage> {
    let reader = ImageReader::new(Cursor::new(bytes)).with_guessed_format()?;
    let img = reader.decode()?;
    debug!(
        width = img.width(),
        height = img.height(),
        "decoded embedded image"
    );
    Ok(img)
}

/// Pixel dimensions of a decoded image.
pub fn image_size(image: &DynamicImage) -> Size {
    Size::new(image.width(), image.height())
}

/// Platform hook that turns a cursor file on disk into a native handle.
/// The windowing backend supplies the implementation; this crate only
/// manages getting the bytes onto disk and cleaning up afterwards.
pub trait CursorSource {
    type Handle;

    fn load_cursor_from_file(&self, path: &Path) -> Result<Self::Handle>;
}

/// Creates a cursor from embedded cursor bytes by spooling them to a
/// temporary file and handing the path to `source`. The temporary file is
/// removed before this returns.
pub fn create_cursor<S: CursorSource>(source: &S, bytes: &[u8]) -> Result<S::Handle> {
    let mut tmp = tempfile::NamedTempFile::new()?;
    tmp.write_all(bytes)?;
    tmp.flush()?;
    debug!(path = %tmp.path().display(), len = bytes.len(), "spooled cursor bytes");
    source.load_cursor_from_file(tmp.path())
}
