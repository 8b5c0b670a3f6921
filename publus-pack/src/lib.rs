/*!
A decoder for Publus configuration packs.

A configuration pack is a base64 blob. Its first 128 characters hold three 32-byte keys and the
remainder is an encrypted UTF-8 JSON document describing the pages of a book. Decoding runs a fixed
pipeline of bit mixing, RC4-style keystream masking and key updates, and returns the JSON together
with the final keys. Those keys are needed afterwards to derive page filenames and to unscramble
page images.

# Example
```rust,no_run
use publus_pack::{DecodeSettings, Decoder};

let blob = std::fs::read_to_string("pack.txt").unwrap();
let pack = Decoder::new(DecodeSettings::default()).decode(&blob).unwrap();

println!("{}", pack.json);
```

## Cargo features
- `logging`: Trace every pipeline stage via the `log` crate.

## Safety
This crate forbids unsafe code via a crate-level attribute.
*/

#![forbid(unsafe_code)]

#[macro_use]
mod log;

pub mod error;
mod header;
mod keys;
pub mod keystream;
pub mod mixer;
mod pipeline;
mod state;

pub use error::{DecodeError, HeaderError, PayloadError, Result};
pub use keys::{KEY_LEN, Keys};

use crate::error::err;
use crate::pipeline::PIPELINE;
use crate::state::DecodeState;

/// The configuration filename the keys are bound to by default.
pub const DEFAULT_FILENAME: &str = "configuration_pack.json";

/// Settings to apply during decoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodeSettings {
    /// The name of the configuration file the pack was fetched as. Its UTF-8
    /// bytes take part in every keystream of the pipeline.
    pub filename: String,
}

impl Default for DecodeSettings {
    fn default() -> Self {
        Self {
            filename: DEFAULT_FILENAME.to_string(),
        }
    }
}

/// The result of decoding a configuration pack.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedPack {
    /// The decrypted JSON document.
    pub json: String,
    /// The final keys.
    pub keys: Keys,
}

/// A configuration pack decoder.
#[derive(Debug, Clone)]
pub struct Decoder {
    filename: Vec<u8>,
}

impl Decoder {
    /// Create a new decoder with the given settings.
    pub fn new(settings: DecodeSettings) -> Self {
        Self {
            filename: settings.filename.into_bytes(),
        }
    }

    /// Decode a packed blob.
    pub fn decode(&self, blob: &str) -> Result<DecodedPack> {
        let (keys, payload) = header::split(blob)?;
        ldebug!("decoding configuration pack with {} payload bytes", payload.len());

        let mut state = DecodeState::new(keys, payload);

        for stage in PIPELINE {
            ltrace!("running stage {:?}", stage);
            stage.apply(&mut state, &self.filename);
        }

        match String::from_utf8(state.payload) {
            Ok(json) => Ok(DecodedPack {
                json,
                keys: state.keys,
            }),
            Err(_) => err!(PayloadError::InvalidUtf8),
        }
    }
}

impl Default for Decoder {
    fn default() -> Self {
        Self::new(DecodeSettings::default())
    }
}

/// Decode a packed blob with the default settings.
pub fn decode(blob: &str) -> Result<DecodedPack> {
    Decoder::default().decode(blob)
}
