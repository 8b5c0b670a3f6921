/*!
Reassembling Publus page images from scrambled tiles.

A protected page image is cut into a grid of equally sized blocks plus a partial column on the
right and a partial row at the bottom, and the pieces are shuffled. The shuffle is fully
determined by the page identifier, the page number, three per-page seeds and the keys of the
book's configuration pack (see `publus-pack`). This crate recomputes that shuffle with a seeded
xorshift generator and moves every piece back into place.

# Example
```rust,no_run
use publus_pack::Keys;
use publus_tiles::{PageAttributes, Raster, unscramble};

# fn keys() -> Keys { Keys::default() }
let image = image::open("page.jpeg").unwrap();
let attributes = PageAttributes {
    number: 1,
    ns: 1_234_567,
    ps: 7_654_321,
    rs: 42,
    block_width: 64,
    block_height: 64,
    content_width: 0,
    content_height: 0,
};

let page = unscramble(Raster::from_image(image), "item/xhtml/p-001.xhtml", &attributes, &keys())
    .unwrap();
page.into_image().unwrap().save("page.png").unwrap();
```

## Cargo features
- `image` (default): Conversions between [`Raster`] and `image::DynamicImage`.
- `logging`: Log grid geometry and crop decisions via the `log` crate.

## Safety
This crate forbids unsafe code via a crate-level attribute.
*/

#![forbid(unsafe_code)]

#[macro_use]
mod log;

pub mod error;
mod geometry;
#[cfg(feature = "image")]
mod integration;
mod moves;
pub mod permutation;
mod raster;
pub mod shuffle;

pub use error::{Error, Result};
pub use geometry::{Grid, PageAttributes};
pub use moves::{Move, plan_moves};
pub use raster::Raster;

use publus_pack::Keys;

/// Unscramble a page image.
///
/// The output has the size of the input, cropped to the content size of
/// `attributes` when both content dimensions are non-zero.
pub fn unscramble(
    raster: Raster,
    page_id: &str,
    attributes: &PageAttributes,
    keys: &Keys,
) -> Result<Raster> {
    let moves = plan_moves(raster.width(), raster.height(), page_id, attributes, keys)?;
    let mut out = Raster::blank(raster.width(), raster.height(), raster.channels())?;

    for mv in &moves {
        out.blit(&raster, mv)?;
    }

    let (width, height) = (attributes.content_width, attributes.content_height);

    if width == 0 || height == 0 || (width == out.width() && height == out.height()) {
        return Ok(out);
    }

    if width > out.width() || height > out.height() {
        lwarn!(
            "content size {}x{} exceeds image size {}x{}, clamping",
            width,
            height,
            out.width(),
            out.height()
        );
    }

    Ok(out.crop(width, height))
}
