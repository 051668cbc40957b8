//! Narrow (host multibyte locale) fast encoder (C6).
//!
//! Pivots through `UTF-32LE` via [`crate::narrowconv`], the encode-side
//! counterpart of [`crate::decode::narrow`]. Applies the host-unencodable
//! two-step fallback: U+FFFD is silently downgraded to '?' (no `FALLBACK`
//! bit, it is not considered a real substitution), while any other
//! unencodable scalar only falls back to '?' under `ALLOW_FALLBACK`.

use super::{common_prelude, FALLBACK_CHAR};
use crate::cpv::CodePointValue;
use crate::narrowconv::Direction;
use crate::putresult::PutResult;
use crate::state::EncodeState;

const REPLACEMENT_CHARACTER: u32 = 0xFFFD;

/// Encodes one code point into the host narrow-locale multibyte encoding.
pub fn encode(es: &mut EncodeState, dst: &mut [u8; 16], cp: CodePointValue, pr: &mut PutResult) -> usize {
    let code = match common_prelude(es, dst, cp, pr) {
        Ok(c) => c,
        Err(n) => return n,
    };
    try_encode(es, dst, code, pr)
}

fn try_encode(es: &mut EncodeState, dst: &mut [u8; 16], code: u32, pr: &mut PutResult) -> usize {
    if let Some(n) = attempt(es, dst, code) {
        pr.set(PutResult::ACCEPT);
        return n;
    }
    if code == REPLACEMENT_CHARACTER {
        // Not a fallback in the ALLOW_FALLBACK sense: U+FFFD simply has no
        // better host-locale representation than '?'.
        return match attempt(es, dst, FALLBACK_CHAR) {
            Some(n) => {
                pr.set(PutResult::ACCEPT);
                n
            }
            None => {
                pr.set(PutResult::ERRCODE);
                0
            }
        };
    }
    if pr.contains(PutResult::ALLOW_FALLBACK) {
        return match attempt(es, dst, FALLBACK_CHAR) {
            Some(n) => {
                pr.set(PutResult::ACCEPT);
                pr.set(PutResult::FALLBACK);
                n
            }
            None => {
                pr.set(PutResult::ERRCODE);
                0
            }
        };
    }
    pr.set(PutResult::ERRCODE);
    0
}

fn attempt(es: &mut EncodeState, dst: &mut [u8; 16], code: u32) -> Option<usize> {
    let src = code.to_le_bytes();
    match es.narrow.convert(Direction::Encode, &src, dst) {
        Ok((_conv, consumed, produced)) if produced > 0 && consumed == 4 => Some(produced),
        _ => None,
    }
}
