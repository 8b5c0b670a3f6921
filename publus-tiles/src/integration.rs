//! Integration with the [image] crate

use crate::Raster;
use crate::error::{Error, Result};
use ::image::{DynamicImage, GrayAlphaImage, GrayImage, RgbImage, RgbaImage};

impl Raster {
    /// Convert a decoded image into an 8-bit raster. Images with more than
    /// 8 bits per sample are converted to RGB or RGBA first.
    pub fn from_image(image: DynamicImage) -> Self {
        let (width, height) = (image.width(), image.height());

        let (channels, data) = match image {
            DynamicImage::ImageLuma8(buf) => (1, buf.into_raw()),
            DynamicImage::ImageLumaA8(buf) => (2, buf.into_raw()),
            DynamicImage::ImageRgb8(buf) => (3, buf.into_raw()),
            DynamicImage::ImageRgba8(buf) => (4, buf.into_raw()),
            other if other.color().has_alpha() => (4, other.to_rgba8().into_raw()),
            other => (3, other.to_rgb8().into_raw()),
        };

        Self {
            width,
            height,
            channels,
            data,
        }
    }

    /// Convert the raster into an image.
    pub fn into_image(self) -> Result<DynamicImage> {
        let (width, height) = (self.width, self.height);

        let image = match self.channels {
            1 => GrayImage::from_raw(width, height, self.data).map(DynamicImage::ImageLuma8),
            2 => GrayAlphaImage::from_raw(width, height, self.data).map(DynamicImage::ImageLumaA8),
            3 => RgbImage::from_raw(width, height, self.data).map(DynamicImage::ImageRgb8),
            4 => RgbaImage::from_raw(width, height, self.data).map(DynamicImage::ImageRgba8),
            _ => None,
        };

        image.ok_or(Error::InvalidRaster)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_rgb() {
        let raster = Raster::new(2, 1, 3, vec![1, 2, 3, 4, 5, 6]).unwrap();
        let image = raster.clone().into_image().unwrap();

        assert_eq!(image.width(), 2);
        assert_eq!(Raster::from_image(image), raster);
    }

    #[test]
    fn converts_wide_samples() {
        let image = DynamicImage::new_rgb16(3, 2);
        let raster = Raster::from_image(image);

        assert_eq!(raster.channels(), 3);
        assert_eq!(raster.data().len(), 18);
    }
}
