//! A keyed bit-permutation transform over byte blocks.
//!
//! The transform works on chunks of up to 32 bytes. Every byte first goes
//! through up to three bit-swap steps selected by the key weight. The chunk
//! is then reordered by a butterfly network and finally rotated, possibly
//! with a bit shift that carries bits across neighbouring bytes.

use crate::keys::KEY_LEN;

/// The maximum number of bytes transformed as one unit.
pub const CHUNK_LEN: usize = 32;

/// Which buffer a mixing pass targets, and which keys it reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MixMode {
    /// Mix the payload, keyed by all three keys.
    Payload,
    /// Mix the third key, keyed by the first two.
    Key3,
    /// Mix the second key, keyed by the first and third.
    Key2,
    /// Mix the first key, keyed by the second and third.
    Key1,
}

#[derive(Debug, Clone, Copy)]
struct MixParams {
    weight: u8,
    parity: u8,
    swap_bits: bool,
    swap_pairs: bool,
    swap_nibbles: bool,
    shift: u32,
}

impl MixParams {
    fn new(refs: &[&[u8; KEY_LEN]]) -> Self {
        let mut weight = 0_u8;
        let mut parity = 0_u8;

        for b in refs.iter().flat_map(|r| r.iter()) {
            weight = weight.wrapping_add(*b);
            parity ^= *b;
        }

        Self {
            weight,
            parity,
            swap_bits: weight & 2 == 0,
            swap_pairs: weight & 4 == 0,
            swap_nibbles: weight & 8 == 0,
            shift: u32::from(parity >> 5) & 7,
        }
    }

    fn swap(&self, mut x: u8) -> u8 {
        if self.swap_bits {
            x = ((x & 0x55) << 1) | ((x >> 1) & 0x55);
        }

        if self.swap_pairs {
            x = ((x & 0x33) << 2) | ((x >> 2) & 0x33);
        }

        if self.swap_nibbles {
            x = ((x & 0x0F) << 4) | ((x >> 4) & 0x0F);
        }

        x
    }
}

/// Mix `block` in place, keyed by `refs`.
pub fn mix(block: &mut [u8], refs: &[&[u8; KEY_LEN]]) {
    let params = MixParams::new(refs);
    let mut buf = [0_u8; CHUNK_LEN];

    for chunk in block.chunks_mut(CHUNK_LEN) {
        let len = chunk.len();
        let swapped = &mut buf[..len];
        let mut sum = params.weight;
        let mut parity = params.parity;

        for (out, b) in swapped.iter_mut().zip(chunk.iter()) {
            *out = params.swap(*b);
            sum = sum.wrapping_add(*out);
            parity ^= *out;
        }

        butterfly(swapped, sum);

        let offset = (parity >> 3) as usize % len;

        if params.shift == 0 {
            let start = (len - offset) % len;

            for (r, out) in chunk.iter_mut().enumerate() {
                *out = swapped[(start + r) % len];
            }
        } else {
            let start = len - offset - 1;
            let carry = 8 - params.shift;

            for (r, out) in chunk.iter_mut().enumerate() {
                let hi = swapped[(start + r) % len] << carry;
                let lo = swapped[(start + r + 1) % len] >> params.shift;
                *out = hi | lo;
            }
        }
    }
}

// At every index that closes an aligned run of 2^r bytes, the two halves of
// the run are exchanged unless bit r of `sum` is set.
fn butterfly(block: &mut [u8], sum: u8) {
    for k in 0..block.len() {
        for r in 1..=6 {
            let run = 1_usize << r;

            if k & (run - 1) != run - 1 {
                break;
            }

            if usize::from(sum) & run == 0 {
                let half = run / 2;
                let start = k + 1 - run;

                for i in 0..half {
                    block.swap(start + i, start + half + i);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reverse_bits(x: u8) -> u8 {
        MixParams {
            weight: 0,
            parity: 0,
            swap_bits: true,
            swap_pairs: true,
            swap_nibbles: true,
            shift: 0,
        }
        .swap(x)
    }

    #[test]
    fn full_swap_reverses_bits() {
        for x in 0..=255_u8 {
            assert_eq!(reverse_bits(x), x.reverse_bits());
        }
    }

    #[test]
    fn params_from_refs() {
        let a = [1_u8; KEY_LEN];
        let b = [0_u8; KEY_LEN];
        let params = MixParams::new(&[&a, &b]);

        // 32 ones sum to 0x20 and XOR to zero.
        assert_eq!(params.weight, 0x20);
        assert_eq!(params.parity, 0);
        assert!(params.swap_bits && params.swap_pairs && params.swap_nibbles);
        assert_eq!(params.shift, 0);
    }

    #[test]
    fn butterfly_swaps_halves() {
        let mut block = [0, 1, 2, 3];
        // Only bit 1 clear: the pairs swap, the quad does not.
        butterfly(&mut block, 0b100);
        assert_eq!(block, [1, 0, 3, 2]);

        let mut block = [0, 1, 2, 3];
        // Only bit 2 clear: the quad halves swap.
        butterfly(&mut block, 0b010);
        assert_eq!(block, [2, 3, 0, 1]);
    }

    #[test]
    fn single_byte() {
        let refs = [0_u8; KEY_LEN];
        let mut block = [0b1000_0001];
        mix(&mut block, &[&refs, &refs]);
        // All swaps reverse the bits; a palindrome stays put.
        assert_eq!(block, [0b1000_0001]);
    }
}
