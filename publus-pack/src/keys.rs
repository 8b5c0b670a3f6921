/// The length of a single key in bytes.
pub const KEY_LEN: usize = 32;

/// The three keys recovered from a configuration pack.
///
/// The same keys drive both the remote filename of each page and the
/// unscrambling of its image.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Keys {
    /// The first key.
    pub k1: [u8; KEY_LEN],
    /// The second key.
    pub k2: [u8; KEY_LEN],
    /// The third key.
    pub k3: [u8; KEY_LEN],
}

impl Keys {
    /// Create a new key set.
    pub fn new(k1: [u8; KEY_LEN], k2: [u8; KEY_LEN], k3: [u8; KEY_LEN]) -> Self {
        Self { k1, k2, k3 }
    }

    /// Build a key set from three slices, returning `None` unless each one is
    /// exactly [`KEY_LEN`] bytes long.
    pub fn from_slices(k1: &[u8], k2: &[u8], k3: &[u8]) -> Option<Self> {
        Some(Self {
            k1: k1.try_into().ok()?,
            k2: k2.try_into().ok()?,
            k3: k3.try_into().ok()?,
        })
    }

    /// The keys in order.
    pub fn iter(&self) -> impl Iterator<Item = &[u8; KEY_LEN]> {
        [&self.k1, &self.k2, &self.k3].into_iter()
    }

    /// The element-wise XOR of all three keys.
    pub fn combined(&self) -> [u8; KEY_LEN] {
        let mut out = [0; KEY_LEN];

        for (i, b) in out.iter_mut().enumerate() {
            *b = self.k1[i] ^ self.k2[i] ^ self.k3[i];
        }

        out
    }

    /// The sum of every byte of all three keys.
    pub fn byte_sum(&self) -> u32 {
        self.iter().flatten().map(|b| u32::from(*b)).sum()
    }
}
