//! Placeholder image rendering.
//!
//! Produces a black canvas of the requested size with a white `"W x H"` label
//! centred on it, then encodes it. The label is omitted when it does not fit
//! strictly inside the canvas.

mod label;

pub use label::{CELL, measure};

use std::io::Cursor;

use bytes::Bytes;
use image::{ImageError, Rgb, RgbImage};
use thiserror::Error;
use tracing::debug;

use crate::domain::{ImageRequest, OutputFormat};

const BACKGROUND: Rgb<u8> = Rgb([0, 0, 0]);
const FOREGROUND: Rgb<u8> = Rgb([255, 255, 255]);

/// Errors raised while producing image bytes.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("failed to encode image: {0}")]
    Encode(#[from] ImageError),
}

/// Draws the placeholder canvas without encoding it.
pub fn render_canvas(request: &ImageRequest) -> RgbImage {
    let (width, height) = (request.width(), request.height());
    let mut canvas = RgbImage::from_pixel(width, height, BACKGROUND);

    let text = request.label();
    let (text_width, text_height) = measure(&text);

    if text_width < width && text_height < height {
        let left = (width - text_width) / 2;
        let top = (height - text_height) / 2;
        label::draw(&mut canvas, &text, left, top, FOREGROUND);
    } else {
        debug!("Label '{}' does not fit {}x{}, omitted", text, width, height);
    }

    canvas
}

/// Renders and encodes a placeholder image.
///
/// CPU bound; async callers should run it on the blocking pool.
///
/// # Errors
///
/// Returns [`RenderError::Encode`] if the encoder fails.
pub fn render_placeholder(request: &ImageRequest, format: OutputFormat) -> Result<Bytes, RenderError> {
    let canvas = render_canvas(request);

    let mut buffer = Cursor::new(Vec::new());
    canvas.write_to(&mut buffer, format.image_format())?;

    Ok(Bytes::from(buffer.into_inner()))
}
