//! Core helpers for rendering images inside a picture-box style control.
//!
//! - `scale_to_fit` computes the destination rectangle for drawing an image
//!   inside a target area, optionally stretching smaller images to fill it.
//! - `create_thumbnail` resamples an image to a fixed height, keeping the
//!   source aspect ratio.
//! - `decode_image` / `create_cursor` turn embedded resource bytes into
//!   decoded images and platform cursor handles.
//!
//! Quick example:
//! ```ignore
//! use picbox_core::{Rect, Size, scale_to_fit};
//! # fn main() -> picbox_core::Result<()> {
//! let image = Size::new(300, 100);
//! let viewport = Rect::new(0, 0, 150, 150);
//! let dest = scale_to_fit(image, viewport, false)?;
//! assert_eq!(dest, Rect::new(0, 50, 150, 50));
//! # Ok(()) }
//! ```

pub mod error;
pub mod fit;
pub mod model;
pub mod resource;
pub mod thumbnail;

pub use error::*;
pub use fit::*;
pub use model::*;
pub use resource::*;
pub use thumbnail::*;

/// Convenience prelude for common types and functions.
pub mod prelude {
    pub use crate::error::{PicBoxError, Result};
    pub use crate::fit::scale_to_fit;
    pub use crate::model::{Rect, Size};
    pub use crate::resource::{CursorSource, create_cursor, decode_image, image_size};
    pub use crate::thumbnail::create_thumbnail;
}
