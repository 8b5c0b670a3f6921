use crate::error::{Error, Result, bail};
use crate::moves::Move;

/// An interleaved 8-bit raster.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Raster {
    pub(crate) width: u32,
    pub(crate) height: u32,
    pub(crate) channels: u8,
    pub(crate) data: Vec<u8>,
}

impl Raster {
    /// Create a raster from row-major interleaved samples.
    ///
    /// Returns an error unless `channels` is between 1 and 4 and `data` holds
    /// exactly `width * height * channels` bytes.
    pub fn new(width: u32, height: u32, channels: u8, data: Vec<u8>) -> Result<Self> {
        if !(1..=4).contains(&channels)
            || data.len() != width as usize * height as usize * channels as usize
        {
            bail!(Error::InvalidRaster);
        }

        Ok(Self {
            width,
            height,
            channels,
            data,
        })
    }

    /// Create a raster with all samples set to zero.
    pub fn blank(width: u32, height: u32, channels: u8) -> Result<Self> {
        let len = width as usize * height as usize * channels as usize;
        Self::new(width, height, channels, vec![0; len])
    }

    /// The width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// The height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// The number of interleaved channels.
    pub fn channels(&self) -> u8 {
        self.channels
    }

    /// The raw samples.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Consume the raster, returning its samples.
    pub fn into_data(self) -> Vec<u8> {
        self.data
    }

    fn stride(&self) -> usize {
        self.width as usize * self.channels as usize
    }

    /// Copy the source rectangle of `mv` from `src` into the destination
    /// rectangle of `self`. Parts falling outside either raster are skipped.
    ///
    /// Fails with [`Error::InvalidRaster`] if the channel counts differ.
    pub fn blit(&mut self, src: &Self, mv: &Move) -> Result<()> {
        if self.channels != src.channels {
            bail!(Error::InvalidRaster);
        }

        let width = mv
            .width
            .min(src.width.saturating_sub(mv.src_x))
            .min(self.width.saturating_sub(mv.dest_x)) as usize;
        let height = mv
            .height
            .min(src.height.saturating_sub(mv.src_y))
            .min(self.height.saturating_sub(mv.dest_y)) as usize;

        if width == 0 || height == 0 {
            return Ok(());
        }

        let channels = self.channels as usize;
        let row_len = width * channels;
        let (src_stride, dest_stride) = (src.stride(), self.stride());

        for row in 0..height {
            let s = (mv.src_y as usize + row) * src_stride + mv.src_x as usize * channels;
            let d = (mv.dest_y as usize + row) * dest_stride + mv.dest_x as usize * channels;

            self.data[d..d + row_len].copy_from_slice(&src.data[s..s + row_len]);
        }

        Ok(())
    }

    /// Crop to the top-left `width` by `height` pixels. Sizes larger than the
    /// raster are clamped.
    pub fn crop(self, width: u32, height: u32) -> Self {
        let width = width.min(self.width);
        let height = height.min(self.height);

        if width == self.width && height == self.height {
            return self;
        }

        let row_len = width as usize * self.channels as usize;
        let stride = self.stride();
        let mut data = Vec::with_capacity(row_len * height as usize);

        for row in self.data.chunks_exact(stride.max(1)).take(height as usize) {
            data.extend_from_slice(&row[..row_len]);
        }

        Self {
            width,
            height,
            channels: self.channels,
            data,
        }
    }
}
