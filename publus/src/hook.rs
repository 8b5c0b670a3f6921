//! Intercepting downloaded page images and replacing them with their
//! unscrambled form.

use crate::error::Result;
use crate::fragment::TileFragment;
use image::codecs::jpeg::JpegEncoder;
use image::{DynamicImage, ImageFormat};
use publus_tiles::{Raster, unscramble};
use std::io::Cursor;

/// The encoding of a replaced response body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// JPEG with the given quality, from 1 to 100.
    Jpeg {
        /// The encoder quality.
        quality: u8,
    },
    /// Lossless PNG.
    Png,
}

impl OutputFormat {
    /// The MIME type of the format.
    pub fn content_type(&self) -> &'static str {
        match self {
            Self::Jpeg { .. } => "image/jpeg",
            Self::Png => "image/png",
        }
    }
}

/// Settings to apply when intercepting responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HookSettings {
    /// How to encode the unscrambled image.
    pub format: OutputFormat,
}

impl Default for HookSettings {
    fn default() -> Self {
        Self {
            format: OutputFormat::Jpeg { quality: 90 },
        }
    }
}

/// A replacement response body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageResponse {
    /// The MIME type of `body`.
    pub content_type: &'static str,
    /// The encoded image.
    pub body: Vec<u8>,
}

/// Unscramble the image downloaded from `url`, if the URL asks for it.
///
/// The body may be JPEG, PNG or WebP. Returns `Ok(None)` when the URL carries
/// no fragment or an empty one, in which case the response should be passed
/// through untouched.
pub fn intercept(url: &str, body: &[u8], settings: &HookSettings) -> Result<Option<ImageResponse>> {
    let token = match url.split_once('#') {
        Some((_, token)) if !token.is_empty() => token,
        _ => {
            ldebug!("passing through {}", url);
            return Ok(None);
        }
    };

    let fragment = TileFragment::decode(token)?;
    let image = image::load_from_memory(body)?;

    ldebug!(
        "unscrambling {} ({}x{})",
        fragment.page_id,
        image.width(),
        image.height()
    );

    let raster = unscramble(
        Raster::from_image(image),
        &fragment.page_id,
        &fragment.attributes,
        &fragment.keys,
    )?;

    let body = encode(raster.into_image()?, settings.format)?;

    Ok(Some(ImageResponse {
        content_type: settings.format.content_type(),
        body,
    }))
}

fn encode(image: DynamicImage, format: OutputFormat) -> Result<Vec<u8>> {
    let mut out = Vec::new();

    match format {
        OutputFormat::Jpeg { quality } => {
            // JPEG has no alpha channel.
            let image = match image {
                DynamicImage::ImageLuma8(_) | DynamicImage::ImageRgb8(_) => image,
                other => DynamicImage::ImageRgb8(other.to_rgb8()),
            };

            image.write_with_encoder(JpegEncoder::new_with_quality(
                &mut out,
                quality.clamp(1, 100),
            ))?;
        }
        OutputFormat::Png => image.write_to(&mut Cursor::new(&mut out), ImageFormat::Png)?,
    }

    Ok(out)
}
