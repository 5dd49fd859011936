//! PNG and data-URL serialization of composites.

use std::io::Cursor;

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use image::{ImageFormat, RgbaImage};

use crate::error::EncodeError;
use crate::surface::PixelBuffer;

const PNG_DATA_URL_PREFIX: &str = "data:image/png;base64,";

pub fn encode_png(buf: &PixelBuffer) -> Result<Vec<u8>, EncodeError> {
    let img = RgbaImage::from_raw(buf.width(), buf.height(), buf.as_rgba().to_vec()).ok_or(
        EncodeError::BadLength {
            width: buf.width(),
            height: buf.height(),
            len: buf.as_rgba().len(),
        },
    )?;
    let mut out = Cursor::new(Vec::new());
    img.write_to(&mut out, ImageFormat::Png)?;
    Ok(out.into_inner())
}

pub fn decode_png(bytes: &[u8]) -> Result<PixelBuffer, EncodeError> {
    let img = image::load_from_memory_with_format(bytes, ImageFormat::Png)?.to_rgba8();
    let (width, height) = img.dimensions();
    PixelBuffer::from_rgba(width, height, img.into_raw())
}

/// `data:image/png;base64,...`, usable as an `<img>` or anchor `href`.
pub fn png_data_url(png: &[u8]) -> String {
    let mut url = String::with_capacity(PNG_DATA_URL_PREFIX.len() + png.len() * 4 / 3 + 4);
    url.push_str(PNG_DATA_URL_PREFIX);
    STANDARD.encode_string(png, &mut url);
    url
}
