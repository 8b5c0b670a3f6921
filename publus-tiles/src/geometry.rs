use crate::error::{Error, Result, bail};
use crate::permutation::SeedWord;
use crate::shuffle::{ShuffleEngine, TRIPLES, Transition};
use publus_pack::Keys;

/// Per-page scrambling parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PageAttributes {
    /// The page number.
    pub number: i32,
    /// The first page seed.
    pub ns: i64,
    /// The second page seed.
    pub ps: i64,
    /// The third page seed.
    pub rs: i64,
    /// The width of a full tile.
    pub block_width: u32,
    /// The height of a full tile.
    pub block_height: u32,
    /// The width of the page content. Zero leaves the width uncropped.
    pub content_width: u32,
    /// The height of the page content. Zero leaves the height uncropped.
    pub content_height: u32,
}

/// How a raster divides into full tiles and a partial remainder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grid {
    /// The width of a full tile.
    pub block_width: u32,
    /// The height of a full tile.
    pub block_height: u32,
    /// The number of full tiles per row.
    pub columns: u32,
    /// The number of full tiles per column.
    pub rows: u32,
    /// The width of the partial column on the right.
    pub last_width: u32,
    /// The height of the partial row at the bottom.
    pub last_height: u32,
}

impl Grid {
    /// Divide a `width` by `height` raster into blocks.
    pub fn new(width: u32, height: u32, block_width: u32, block_height: u32) -> Result<Self> {
        if block_width == 0 || block_height == 0 {
            bail!(Error::InvalidBlockSize);
        }

        Ok(Self {
            block_width,
            block_height,
            columns: width / block_width,
            rows: height / block_height,
            last_width: width % block_width,
            last_height: height % block_height,
        })
    }

    /// The horizontal stride of a packed coordinate.
    pub(crate) fn stride_x(&self) -> usize {
        (self.columns as usize + 1) * 2
    }

    /// The vertical stride of a packed coordinate.
    pub(crate) fn stride_y(&self) -> usize {
        (self.rows as usize + 1) * 2
    }

    /// The pixel offset of horizontal slot `i`. Slots past the full columns
    /// follow the partial column.
    pub(crate) fn offset_x(&self, i: usize) -> u32 {
        offset(i, self.columns, self.block_width, self.last_width)
    }

    /// The pixel offset of vertical slot `i`.
    pub(crate) fn offset_y(&self, i: usize) -> u32 {
        offset(i, self.rows, self.block_height, self.last_height)
    }
}

fn offset(i: usize, count: u32, block: u32, last: u32) -> u32 {
    let i = i as u32;

    if i <= count {
        i * block
    } else {
        (i - count - 1) * block + last
    }
}

/// The seeds derived from a page and the keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Seeds {
    pub(crate) selector: u32,
    pub(crate) ns: u32,
    pub(crate) ps: u32,
    pub(crate) rs: u32,
}

impl Seeds {
    pub(crate) fn derive(page_id: &str, attributes: &PageAttributes, keys: &Keys) -> Self {
        let acc = page_id
            .encode_utf16()
            .chain(attributes.number.to_string().encode_utf16())
            .map(u32::from)
            .fold(47_u32, u32::wrapping_add)
            .wrapping_add(keys.byte_sum());

        let repeated = (acc & 0xFF) * 0x0101_0101;
        let selectors = (TRIPLES.len() * Transition::ALL.len()) as u32;

        // Only the low 32 bits of each page seed take part.
        Self {
            selector: acc % selectors,
            ns: repeated ^ word_xor(&keys.k1) ^ attributes.ns as u32,
            ps: repeated ^ word_xor(&keys.k2) ^ attributes.ps as u32,
            rs: repeated ^ word_xor(&keys.k3) ^ attributes.rs as u32,
        }
    }

    /// The four words that drive the coordinate sequence of `grid`.
    pub(crate) fn words(&self, grid: &Grid) -> [SeedWord; 4] {
        let mut engine = ShuffleEngine::new();
        engine.select(self.selector ^ grid.columns ^ grid.rows);
        engine.reseed(self.ns ^ self.ps ^ self.rs);

        let r1 = engine.next_below(1 << 16);
        let r2 = engine.next_below(1 << 16);
        let r3 = engine.next_below(512);

        [
            SeedWord::new(r3, r1 | (r2 << 16)),
            SeedWord::new(grid.columns, self.ns),
            SeedWord::new(grid.rows, self.ps),
            SeedWord::new(self.selector, self.rs),
        ]
    }
}

// XOR of the big-endian 32-bit words of a key.
fn word_xor(key: &[u8]) -> u32 {
    key.chunks_exact(4)
        .map(|w| u32::from_be_bytes([w[0], w[1], w[2], w[3]]))
        .fold(0, |acc, w| acc ^ w)
}
