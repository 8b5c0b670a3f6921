//! Splitting a packed blob into its key header and encrypted body.

use crate::error::{HeaderError, PayloadError, Result, bail};
use crate::keys::{KEY_LEN, Keys};
use base64::Engine;
use base64::alphabet;
use base64::engine::general_purpose::STANDARD;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};

/// The number of base64 characters holding the three keys.
pub(crate) const HEADER_LEN: usize = 128;

const BODY: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// Decode the header keys and the body bytes of a packed blob.
pub(crate) fn split(blob: &str) -> Result<(Keys, Vec<u8>)> {
    let data = blob.trim().as_bytes();

    if data.len() < HEADER_LEN {
        bail!(HeaderError::TooShort);
    }

    let (header, body) = data.split_at(HEADER_LEN);

    let header = STANDARD
        .decode(header)
        .map_err(|_| HeaderError::InvalidBase64)?;

    if header.len() != 3 * KEY_LEN {
        bail!(HeaderError::InvalidBase64);
    }

    let mut keys = Keys::default();
    keys.k1.copy_from_slice(&header[..KEY_LEN]);
    keys.k2.copy_from_slice(&header[KEY_LEN..2 * KEY_LEN]);
    keys.k3.copy_from_slice(&header[2 * KEY_LEN..]);

    let body: Vec<u8> = body
        .iter()
        .copied()
        .filter(|b| !b.is_ascii_whitespace())
        .collect();

    let payload = BODY
        .decode(&body)
        .map_err(|_| PayloadError::InvalidBase64)?;

    if payload.is_empty() {
        bail!(PayloadError::Empty);
    }

    Ok((keys, payload))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DecodeError;

    fn header() -> String {
        let mut raw = [0_u8; 96];
        for (i, b) in raw.iter_mut().enumerate() {
            *b = i as u8;
        }

        STANDARD.encode(raw)
    }

    #[test]
    fn keys_are_sequential() {
        let blob = format!("{}AQID", header());
        let (keys, payload) = split(&blob).unwrap();

        assert_eq!(keys.k1[0], 0);
        assert_eq!(keys.k1[31], 31);
        assert_eq!(keys.k2[0], 32);
        assert_eq!(keys.k3[0], 64);
        assert_eq!(keys.k3[31], 95);
        assert_eq!(payload, vec![1, 2, 3]);
    }

    #[test]
    fn body_whitespace_and_padding() {
        let blob = format!("{}AQI\nD BA", header());
        let (_, payload) = split(&blob).unwrap();
        assert_eq!(payload, vec![1, 2, 3, 4]);

        let blob = format!("{}AQIDBA==", header());
        let (_, payload) = split(&blob).unwrap();
        assert_eq!(payload, vec![1, 2, 3, 4]);
    }

    #[test]
    fn short_blob() {
        assert_eq!(
            split("AAAA").unwrap_err(),
            DecodeError::Header(HeaderError::TooShort)
        );
    }

    #[test]
    fn bad_header() {
        let mut blob = header();
        blob.replace_range(10..11, "*");
        blob.push_str("AQID");

        assert_eq!(
            split(&blob).unwrap_err(),
            DecodeError::Header(HeaderError::InvalidBase64)
        );
    }

    #[test]
    fn bad_and_empty_body() {
        assert_eq!(
            split(&format!("{}A*ID", header())).unwrap_err(),
            DecodeError::Payload(PayloadError::InvalidBase64)
        );
        assert_eq!(
            split(&header()).unwrap_err(),
            DecodeError::Payload(PayloadError::Empty)
        );
    }
}
