/*!
Reading Publus-protected books.

This crate ties [`publus_pack`] and [`publus_tiles`] together. A session is created from a
decoded configuration pack, turns every page of the configuration into an image URL, and attaches
the unscrambling parameters of scrambled pages as a URL fragment. Once an image has been
downloaded, [`intercept`] reads the fragment back and returns the unscrambled image.

# Example
```rust,no_run
use publus::{HookSettings, decode, generate_pages, intercept};

let blob = std::fs::read_to_string("pack.txt").unwrap();
let pack = decode(&blob).unwrap();

for page in generate_pages(&pack, "https://example.com/book/").unwrap() {
    let body = std::fs::read(format!("page-{}.jpeg", page.index)).unwrap();

    if let Some(response) = intercept(&page.url, &body, &HookSettings::default()).unwrap() {
        std::fs::write(format!("page-{}.out.jpeg", page.index), response.body).unwrap();
    }
}
```

## Cargo features
- `logging`: Log page generation and interception via the `log` crate. Also enables logging
  in `publus-pack` and `publus-tiles`.

## Safety
This crate forbids unsafe code via a crate-level attribute.
*/

#![forbid(unsafe_code)]

#[macro_use]
mod log;

mod config;
pub mod error;
mod filename;
mod fragment;
mod hook;
mod page;
mod session;

pub use config::{DEFAULT_BLOCK_SIZE, read_pages};
pub use error::{ConfigError, Error, FragmentError, Result};
pub use filename::generate_filename;
pub use fragment::TileFragment;
pub use hook::{HookSettings, ImageResponse, OutputFormat, intercept};
pub use page::{PageRequest, PageSpec};
pub use session::{Session, generate_pages};

pub use publus_pack::{DecodeSettings, DecodedPack, Decoder, Keys};
pub use publus_tiles::PageAttributes;

/// Decode a configuration pack with the default settings.
pub fn decode(blob: &str) -> Result<DecodedPack> {
    Ok(publus_pack::decode(blob)?)
}
