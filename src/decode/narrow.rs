//! Narrow (host multibyte locale) decoder (C5).
//!
//! Delegates to the host's stateful multibyte-to-wide primitive, realized
//! here as an `iconv` pivot to UTF-32LE (see [`crate::narrowconv`]) rather
//! than `mbrtowc`, but preserving the same carry/error/progress contract.

use super::{DecodeInput, Decoded};
use crate::byteorder::rd_u32le;
use crate::carry::CARRY_CAP;
use crate::cpv::CodePointValue;
use crate::narrowconv::{ConvResult, Direction};
use crate::state::EncodeState;

/// Decodes one code point from the host narrow locale's multibyte encoding.
pub fn decode(es: &mut EncodeState, input: DecodeInput) -> Decoded {
    match input {
        DecodeInput::Flush => flush(es),
        DecodeInput::Bytes(b) => decode_region(es, b, false),
        DecodeInput::NullTerminated(b) => decode_region(es, b, true),
    }
}

fn flush(es: &mut EncodeState) -> Decoded {
    if es.carry.is_empty() {
        Decoded {
            cp: CodePointValue::NO_CHAR,
            consumed: 0,
            terminated: true,
        }
    } else {
        es.carry.clear();
        Decoded {
            cp: CodePointValue::ERROR,
            consumed: 0,
            terminated: true,
        }
    }
}

fn end_of_region(es: &mut EncodeState) -> Decoded {
    if es.carry.is_empty() {
        Decoded {
            cp: CodePointValue::NO_CHAR,
            consumed: 0,
            terminated: false,
        }
    } else {
        es.carry.clear();
        Decoded {
            cp: CodePointValue::ERROR,
            consumed: 0,
            terminated: false,
        }
    }
}

fn decode_region(es: &mut EncodeState, b: &[u8], null_terminated: bool) -> Decoded {
    if b.is_empty() {
        return end_of_region(es);
    }

    // No host multibyte character needs more than CARRY_CAP bytes (the same
    // bound the carry itself enforces below), so a fixed-size scratch array
    // is enough here: no per-call allocation, no copy of the caller's whole
    // remaining buffer the way a `Vec` sized to `carry_len + b.len()` would
    // require.
    let carry_len = es.carry.len();
    let take = b.len().min(CARRY_CAP - carry_len);
    let mut scratch = [0u8; CARRY_CAP];
    scratch[..carry_len].copy_from_slice(es.carry.as_slice());
    scratch[carry_len..carry_len + take].copy_from_slice(&b[..take]);
    let combined = &scratch[..carry_len + take];

    let mut dst = [0u8; 4];
    let result = es.narrow.convert(Direction::Decode, combined, &mut dst);
    let (conv, consumed, produced) = match result {
        Ok(v) => v,
        Err(_) => {
            // No usable iconv descriptor for the host charset: treat as a
            // hard decode error but still guarantee forward progress.
            es.carry.clear();
            let advance = if carry_len > 0 { 0 } else { 1.min(b.len()) };
            return Decoded {
                cp: CodePointValue::ERROR,
                consumed: advance,
                terminated: false,
            };
        }
    };

    if produced == 4 {
        es.carry.clear();
        let consumed_from_b = consumed.saturating_sub(carry_len);
        let code = rd_u32le(&dst);
        let terminated = null_terminated && code == 0;
        return Decoded {
            cp: CodePointValue::new(code, false),
            consumed: consumed_from_b,
            terminated,
        };
    }

    match conv {
        ConvResult::IncompleteSeq => {
            // `take` (not `b.len()`) is what was actually fed to iconv this
            // call: `b` itself may be far longer than the scratch bound.
            if null_terminated {
                es.carry.clear();
                return Decoded {
                    cp: CodePointValue::ERROR,
                    consumed: take,
                    terminated: true,
                };
            }
            es.carry.set(combined);
            Decoded {
                cp: CodePointValue::NO_CHAR,
                consumed: take,
                terminated: false,
            }
        }
        _ => {
            // Invalid sequence (or an otherwise-unexpected stop with no
            // output): discard the carry and advance by exactly one byte.
            es.carry.clear();
            let advance = if carry_len > 0 { 0 } else { 1.min(b.len()) };
            Decoded {
                cp: CodePointValue::ERROR,
                consumed: advance,
                terminated: false,
            }
        }
    }
}
