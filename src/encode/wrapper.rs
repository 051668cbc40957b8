//! Bounds-checked encoder wrapper (C7).
//!
//! Wraps a fast encoder (C6) so it can be driven against an arbitrarily
//! small destination slice. Two-step contract: drain any bytes a previous
//! call spilled into `es`'s carry first (by invoking the fast encoder's own
//! flush path with the `NO_CHAR` sentinel); then, if the destination still
//! has the 16-byte headroom a fast encoder assumes, call it directly —
//! otherwise encode into scratch and copy out what fits, spilling the rest
//! back into carry for the caller to drain on a later call.
//!
//! Grounded on `ZLUtfPutChar_callfast`: a too-small destination still gets
//! whatever prefix fits (never all-or-nothing), and any leftover sets both
//! `BUFFER` (carry is non-empty) and `ERROUT` (the caller must retry).

use crate::carry::CARRY_CAP;
use crate::cpv::CodePointValue;
use crate::encode::FastEncodeFn;
use crate::putresult::PutResult;
use crate::state::EncodeState;

/// Minimum destination headroom below which the wrapper routes through
/// scratch instead of calling the fast encoder directly.
const FAST_PATH_HEADROOM: usize = 16;

/// Encodes one code point into `dst`, bounds-checking against `dst.len()`.
///
/// Returns the number of bytes written to `dst`. When `PutResult::BUFFER`
/// comes back set, `dst` was too small to hold everything produced; call
/// again with the same `cp` (a fresh call drains the carry first).
pub fn encode(
    es: &mut EncodeState,
    fast: FastEncodeFn,
    dst: &mut [u8],
    cp: CodePointValue,
    pr: &mut PutResult,
) -> usize {
    let mut written = 0;

    if !es.carry.is_empty() {
        let mut scratch = [0u8; 16];
        let mut drain_pr = PutResult::new();
        let produced = fast(es, &mut scratch, CodePointValue::NO_CHAR, &mut drain_pr);
        let n = produced.min(dst.len());
        dst[..n].copy_from_slice(&scratch[..n]);
        if produced > n {
            spill(es, &scratch[n..produced], pr);
            return n;
        }
        written = n;
    }

    if dst.len() - written >= FAST_PATH_HEADROOM {
        let region: &mut [u8; 16] = (&mut dst[written..written + 16]).try_into().unwrap();
        return written + fast(es, region, cp, pr);
    }

    let mut scratch = [0u8; 16];
    let produced = fast(es, &mut scratch, cp, pr);
    let room = dst.len() - written;
    let n = produced.min(room);
    dst[written..written + n].copy_from_slice(&scratch[..n]);
    if produced > n {
        spill(es, &scratch[n..produced], pr);
    }
    written + n
}

fn spill(es: &mut EncodeState, overflow: &[u8], pr: &mut PutResult) {
    let cap = overflow.len().min(CARRY_CAP);
    es.carry.set(&overflow[..cap]);
    pr.set(PutResult::BUFFER);
    pr.set(PutResult::ERROUT);
}
