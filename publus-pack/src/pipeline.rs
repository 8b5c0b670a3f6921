//! The fixed sequence of decoding stages.

use crate::keystream::{KeySchedule, xor_stream};
use crate::mixer::MixMode;
use crate::state::{DecodeState, Lane};

/// The number of leading positions touched by the cross-mix stage.
const CROSS_MIX_LEN: usize = 32;

/// A single decoding stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Stage {
    /// Run the bit mixer over one buffer.
    Mix(MixMode),
    /// XOR the payload with a scheduled table.
    Mask,
    /// XOR the odd payload indices with a keystream, highest index first.
    ShuffleOdd,
    /// XOR the even payload indices with a keystream, highest index first.
    ShuffleEven,
    /// Exchange bytes between keys and payload over the first 32 positions.
    CrossMix,
    /// Re-derive all three keys from each other.
    UpdateKeys,
    /// XOR the payload with the final keystream.
    Unmask,
}

/// All stages after the header split, in the order they run.
pub(crate) const PIPELINE: [Stage; 10] = [
    Stage::Mix(MixMode::Payload),
    Stage::Mask,
    Stage::ShuffleOdd,
    Stage::ShuffleEven,
    Stage::CrossMix,
    Stage::UpdateKeys,
    Stage::Mix(MixMode::Key3),
    Stage::Mix(MixMode::Key2),
    Stage::Mix(MixMode::Key1),
    Stage::Unmask,
];

impl Stage {
    pub(crate) fn apply(self, state: &mut DecodeState, filename: &[u8]) {
        match self {
            Self::Mix(mode) => state.mix(mode),
            Self::Mask => mask(state, filename),
            Self::ShuffleOdd => {
                let keys = state.keys;
                let indices = (1..state.payload.len()).step_by(2).rev();
                strided_xor(&mut state.payload, indices, &[filename, &keys.k1, &keys.k2]);
            }
            Self::ShuffleEven => {
                let keys = state.keys;
                let indices = (0..state.payload.len()).step_by(2).rev();
                strided_xor(&mut state.payload, indices, &[&keys.k3, filename, &keys.k1]);
            }
            Self::CrossMix => cross_mix(state),
            Self::UpdateKeys => update_keys(state, filename),
            Self::Unmask => {
                let keys = state.keys;
                xor_stream(&mut state.payload, &[&keys.k3, &keys.k2, filename]);
            }
        }
    }
}

fn mask(state: &mut DecodeState, filename: &[u8]) {
    let keys = &state.keys;
    let schedule = KeySchedule::new(&[&keys.k2, filename, &keys.k3]);

    for (i, b) in state.payload.iter_mut().enumerate() {
        *b ^= schedule.get(i);
    }
}

fn strided_xor(payload: &mut [u8], indices: impl Iterator<Item = usize>, parts: &[&[u8]]) {
    let stream = KeySchedule::new(parts).keystream();

    for (i, k) in indices.zip(stream) {
        payload[i] ^= k;
    }
}

fn cross_mix(state: &mut DecodeState) {
    let len = state.payload.len().min(CROSS_MIX_LEN);

    for i in 0..len {
        let keys = &state.keys;
        let c = state.payload[i] ^ keys.k1[i] ^ keys.k2[i] ^ keys.k3[i];

        state.swap_lanes(i, Lane::from_bits(c >> 2), Lane::from_bits(c));
        state.swap_lanes(i, Lane::from_bits(c >> 6), Lane::from_bits(c >> 4));
    }
}

// Each key is updated from the already-updated ones.
fn update_keys(state: &mut DecodeState, filename: &[u8]) {
    let keys = &mut state.keys;

    let (k1, k2) = (keys.k1, keys.k2);
    xor_stream(&mut keys.k3, &[&k2, &k1, filename]);

    let k3 = keys.k3;
    xor_stream(&mut keys.k2, &[&k1, filename, &k3]);

    let (k2, k3) = (keys.k2, keys.k3);
    xor_stream(&mut keys.k1, &[filename, &k3, &k2]);
}
