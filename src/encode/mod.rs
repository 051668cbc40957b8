//! Encoders (C6): the "put-character-to-byte-stream" family, fast form.
//!
//! Fast encoders write unconditionally into a fixed 16-byte scratch
//! destination without checking capacity against the caller's real
//! destination — that bounds-checking and spill/drain behavior lives in
//! the wrapper ([`wrapper`], C7), which is the only place a real `[pd,
//! pdend)` region is ever touched directly.

use crate::cpv::CodePointValue;
use crate::putresult::PutResult;
use crate::state::EncodeState;

pub mod narrow;
pub mod utf16;
pub mod utf32;
pub mod utf8;
pub mod wrapper;

/// A fast encoder function, dispatched by [`crate::encoding::Encoding`].
///
/// Writes into `dst` (always exactly 16 bytes of scratch room) and returns
/// the number of bytes written.
pub type FastEncodeFn = fn(&mut EncodeState, &mut [u8; 16], CodePointValue, &mut PutResult) -> usize;

/// Default fallback character, U+003F '?'.
pub const FALLBACK_CHAR: u32 = 0x3F;

/// Handles the two cases common to every fast encoder: the flush protocol
/// (`cp == NO_CHAR`, drains carry) and the decode-error sentinel
/// (`cp == ERROR`, substitutes '?' under `ALLOW_FALLBACK` or reports
/// `ERRCODE`).
///
/// Returns `Ok(code)` — the plain 31-bit scalar to encode — when the
/// per-encoding logic should proceed normally, or `Err(n)` when the call is
/// already complete (`n` bytes written, possibly zero).
pub(crate) fn common_prelude(
    es: &mut EncodeState,
    dst: &mut [u8; 16],
    cp: CodePointValue,
    pr: &mut PutResult,
) -> Result<u32, usize> {
    if cp.is_no_char() {
        let n = es.carry.drain_into(dst);
        if !es.carry.is_empty() {
            pr.set(PutResult::BUFFER);
        }
        return Err(n);
    }
    if cp.is_error() {
        if pr.contains(PutResult::ALLOW_FALLBACK) {
            pr.set(PutResult::FALLBACK);
            return Ok(FALLBACK_CHAR);
        }
        pr.set(PutResult::ERRCODE);
        return Err(0);
    }
    Ok(cp.code())
}

/// Applies the shared out-of-range-code-point fallback: substitute '?'
/// under `ALLOW_FALLBACK` (setting `FALLBACK`), else report `ERRCODE`.
/// Used by encoders whose target encoding has a representable range
/// narrower than the full 31-bit code-point space (UTF-16).
pub(crate) fn range_fallback(pr: &mut PutResult) -> Option<u32> {
    if pr.contains(PutResult::ALLOW_FALLBACK) {
        pr.set(PutResult::FALLBACK);
        Some(FALLBACK_CHAR)
    } else {
        pr.set(PutResult::ERRCODE);
        None
    }
}
