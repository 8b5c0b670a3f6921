//! The URL fragment that carries everything needed to unscramble a page.
//!
//! The fragment never reaches the server. It is read back by the response
//! hook once the image has been downloaded.

use crate::error::{FragmentError, Result};
use base64::Engine;
use base64::alphabet;
use base64::engine::general_purpose::URL_SAFE;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};
use publus_pack::Keys;
use publus_tiles::PageAttributes;
use serde::{Deserialize, Serialize};

const URL_SAFE_LENIENT: GeneralPurpose = GeneralPurpose::new(
    &alphabet::URL_SAFE,
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// The unscrambling parameters of a single page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileFragment {
    /// The page identifier.
    pub page_id: String,
    /// The scrambling parameters of the page.
    pub attributes: PageAttributes,
    /// The keys of the book.
    pub keys: Keys,
}

#[derive(Debug, Serialize, Deserialize)]
struct Wire {
    file: String,
    no: i32,
    ns: i64,
    ps: i64,
    rs: i64,
    bw: u32,
    bh: u32,
    cw: u32,
    ch: u32,
    k1: Vec<i32>,
    k2: Vec<i32>,
    k3: Vec<i32>,
}

impl TileFragment {
    /// Encode the fragment as padded URL-safe base64 of its JSON form.
    pub fn encode(&self) -> Result<String> {
        let attrs = &self.attributes;
        let wire = Wire {
            file: self.page_id.clone(),
            no: attrs.number,
            ns: attrs.ns,
            ps: attrs.ps,
            rs: attrs.rs,
            bw: attrs.block_width,
            bh: attrs.block_height,
            cw: attrs.content_width,
            ch: attrs.content_height,
            k1: self.keys.k1.iter().map(|b| i32::from(*b)).collect(),
            k2: self.keys.k2.iter().map(|b| i32::from(*b)).collect(),
            k3: self.keys.k3.iter().map(|b| i32::from(*b)).collect(),
        };

        let json = serde_json::to_string(&wire).map_err(|_| FragmentError::InvalidJson)?;

        Ok(URL_SAFE.encode(json))
    }

    /// Decode a fragment. Padding is optional.
    pub fn decode(token: &str) -> Result<Self> {
        let json = URL_SAFE_LENIENT
            .decode(token)
            .map_err(|_| FragmentError::InvalidBase64)?;
        let wire: Wire =
            serde_json::from_slice(&json).map_err(|_| FragmentError::InvalidJson)?;

        let keys = Keys::from_slices(&key(&wire.k1)?, &key(&wire.k2)?, &key(&wire.k3)?)
            .ok_or(FragmentError::InvalidKey)?;

        Ok(Self {
            page_id: wire.file,
            attributes: PageAttributes {
                number: wire.no,
                ns: wire.ns,
                ps: wire.ps,
                rs: wire.rs,
                block_width: wire.bw,
                block_height: wire.bh,
                content_width: wire.cw,
                content_height: wire.ch,
            },
            keys,
        })
    }
}

// Accepts both unsigned and signed byte values.
fn key(values: &[i32]) -> core::result::Result<Vec<u8>, FragmentError> {
    values
        .iter()
        .map(|v| match *v {
            0..=255 => Ok(*v as u8),
            -128..=-1 => Ok(*v as i8 as u8),
            _ => Err(FragmentError::InvalidKey),
        })
        .collect()
}
