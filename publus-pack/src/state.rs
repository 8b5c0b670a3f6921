use crate::keys::Keys;
use crate::mixer::{MixMode, mix};

/// One of the four byte buffers the cross-mix stage can exchange between.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Lane {
    Key1,
    Key2,
    Key3,
    Payload,
}

impl Lane {
    /// Pick a lane from the lowest two bits of `bits`.
    pub(crate) fn from_bits(bits: u8) -> Self {
        match bits & 3 {
            0 => Self::Key1,
            1 => Self::Key2,
            2 => Self::Key3,
            _ => Self::Payload,
        }
    }
}

/// The mutable state threaded through every decoding stage.
#[derive(Debug, Clone)]
pub(crate) struct DecodeState {
    pub(crate) payload: Vec<u8>,
    pub(crate) keys: Keys,
}

impl DecodeState {
    pub(crate) fn new(keys: Keys, payload: Vec<u8>) -> Self {
        Self { payload, keys }
    }

    fn lane_mut(&mut self, lane: Lane) -> &mut [u8] {
        match lane {
            Lane::Key1 => &mut self.keys.k1,
            Lane::Key2 => &mut self.keys.k2,
            Lane::Key3 => &mut self.keys.k3,
            Lane::Payload => &mut self.payload,
        }
    }

    /// Exchange the byte at `index` between two lanes.
    pub(crate) fn swap_lanes(&mut self, index: usize, a: Lane, b: Lane) {
        if a == b {
            return;
        }

        let first = self.lane_mut(a)[index];
        let second = self.lane_mut(b)[index];
        self.lane_mut(a)[index] = second;
        self.lane_mut(b)[index] = first;
    }

    pub(crate) fn mix(&mut self, mode: MixMode) {
        let keys = &mut self.keys;

        match mode {
            MixMode::Payload => mix(&mut self.payload, &[&keys.k1, &keys.k2, &keys.k3]),
            MixMode::Key3 => mix(&mut keys.k3, &[&keys.k1, &keys.k2]),
            MixMode::Key2 => mix(&mut keys.k2, &[&keys.k1, &keys.k3]),
            MixMode::Key1 => mix(&mut keys.k1, &[&keys.k2, &keys.k3]),
        }
    }
}
