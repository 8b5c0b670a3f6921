//! RC4-style key scheduling and keystream extraction.
//!
//! The decoder uses the scheduled table in two ways: directly as a 256-byte
//! mask, and as the state of a keystream generator.

/// A 256-byte permutation scheduled from a key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeySchedule([u8; 256]);

impl KeySchedule {
    /// Schedule a permutation from the concatenation of `parts`.
    pub fn new(parts: &[&[u8]]) -> Self {
        let key = parts.concat();
        let mut state = [0_u8; 256];

        for (i, s) in state.iter_mut().enumerate() {
            *s = i as u8;
        }

        let mut j = 0_u8;

        for i in 0..256 {
            let k = if key.is_empty() { 0 } else { key[i % key.len()] };
            j = j.wrapping_add(state[i]).wrapping_add(k);
            state.swap(i, j as usize);
        }

        Self(state)
    }

    /// Return the table byte at `index`, wrapping around every 256 entries.
    pub fn get(&self, index: usize) -> u8 {
        self.0[index % 256]
    }

    /// Return the scheduled table.
    pub fn table(&self) -> &[u8; 256] {
        &self.0
    }

    /// Turn the schedule into a keystream generator.
    pub fn keystream(self) -> Keystream {
        Keystream {
            state: self.0,
            i: 0,
            j: 0,
        }
    }
}

/// An endless keystream.
#[derive(Debug, Clone)]
pub struct Keystream {
    state: [u8; 256],
    i: u8,
    j: u8,
}

impl Iterator for Keystream {
    type Item = u8;

    fn next(&mut self) -> Option<u8> {
        self.i = self.i.wrapping_add(1);
        self.j = self.j.wrapping_add(self.state[self.i as usize]);
        self.state.swap(self.i as usize, self.j as usize);

        let idx = self.state[self.i as usize].wrapping_add(self.state[self.j as usize]);

        Some(self.state[idx as usize])
    }
}

/// XOR `data` with the keystream scheduled from the concatenation of `parts`.
pub fn xor_stream(data: &mut [u8], parts: &[&[u8]]) {
    for (b, k) in data.iter_mut().zip(KeySchedule::new(parts).keystream()) {
        *b ^= k;
    }
}
