//! The obfuscated remote filename of a page image.

use publus_pack::Keys;

const NAME: &str = "0";
const PREFIX: &str = "10";
const EXTENSION: &str = "jpeg";

/// The remote path of the image for `page_id`, in the form
/// `{page_id}/10{16 hex digits}.jpeg`.
pub fn generate_filename(page_id: &str, keys: &Keys) -> String {
    let folder = format!("{page_id}/");
    let path: Vec<u16> = folder.encode_utf16().chain(NAME.encode_utf16()).collect();

    let mut input = Vec::with_capacity((path.len() + 1) * 2);
    input.extend_from_slice(&[0, 59]);
    for unit in &path {
        input.extend_from_slice(&unit.to_be_bytes());
    }

    let len = input.len();
    let mut rounds = 3;
    let mut covered = 2 * NAME.encode_utf16().count() + 2 * len;
    while covered < 256 {
        rounds += 1;
        covered += len;
    }

    let mask = keys.combined();
    let mut state = Accumulator::default();
    let mut i = (1 + folder.encode_utf16().count()) * 2;
    let mut j = 0;

    for _ in 0..rounds {
        while i < len {
            state.step(input[i] ^ mask[j]);
            i += 1;
            j = (j + 1) % mask.len();
        }

        i = 0;
    }

    let mut name = format!("{page_id}/{PREFIX}");
    for (b, m) in state.digest().iter().zip(mask) {
        name.push_str(&format!("{:02x}", b ^ m));
    }
    name.push('.');
    name.push_str(EXTENSION);

    name
}

// Three chained accumulators of 21, 21 and 22 bits.
struct Accumulator {
    j: u32,
    k: u32,
    l: u32,
}

impl Default for Accumulator {
    fn default() -> Self {
        Self {
            j: 1_670_739,
            k: 1_282_576,
            l: 2_237_221,
        }
    }
}

impl Accumulator {
    const MULTIPLIER: u32 = 435;

    fn step(&mut self, byte: u8) {
        let l = self.l ^ u32::from(byte);
        let i = Self::MULTIPLIER * l;
        let h = Self::MULTIPLIER * self.k + ((l & 7) << 18) + (i >> 22);
        let g = Self::MULTIPLIER * self.j + ((self.k & 3) << 19) + ((l & 0x3F_FFF8) >> 3) + (h >> 21);

        self.l = i & 0x3F_FFFF;
        self.k = h & 0x1F_FFFF;
        self.j = g & 0x1F_FFFF;
    }

    fn digest(&self) -> [u8; 8] {
        let (j, k, l) = (self.j, self.k, self.l);

        [
            (j >> 13) as u8,
            (j >> 5) as u8,
            (((j & 31) << 3) | (k >> 18)) as u8,
            (k >> 10) as u8,
            (k >> 2) as u8,
            (((k & 3) << 6) | (l >> 16)) as u8,
            (l >> 8) as u8,
            l as u8,
        ]
    }
}
