//! Encode State (ES): per-direction carry buffer plus host-mbstate
//! equivalent for the narrow codec.

use crate::carry::Carry;
use crate::narrowconv::NarrowState;

/// Holds everything a decoder or encoder needs to remember between calls.
///
/// Created zero-initialized (equivalent to all-zero bytes). Two distinct
/// `EncodeState`s are required when transcoding: one for the decoder, one
/// for the encoder. A single `EncodeState` must not be used concurrently,
/// but two distinct ones may be used on two distinct threads without
/// coordination.
pub struct EncodeState {
    pub(crate) carry: Carry,
    pub(crate) narrow: NarrowState,
}

impl EncodeState {
    /// Creates a fresh, empty state.
    pub fn new() -> Self {
        Self {
            carry: Carry::new(),
            narrow: NarrowState::new(),
        }
    }

    /// Number of bytes currently buffered in the carry.
    pub fn carry_len(&self) -> usize {
        self.carry.len()
    }

    /// Discards any buffered partial character / pending output. The caller
    /// accepts that those bytes are lost.
    pub fn reset(&mut self) {
        self.carry.clear();
    }
}

impl Default for EncodeState {
    fn default() -> Self {
        Self::new()
    }
}
