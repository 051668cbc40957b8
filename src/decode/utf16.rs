//! UTF-16BE / UTF-16LE decoders (C5).

use super::{DecodeInput, Decoded};
use crate::byteorder::{rd_u16be, rd_u16le};
use crate::cpv::CodePointValue;
use crate::state::EncodeState;

const HIGH_SURROGATE: std::ops::RangeInclusive<u16> = 0xD800..=0xDBFF;
const LOW_SURROGATE: std::ops::RangeInclusive<u16> = 0xDC00..=0xDFFF;

fn is_high_surrogate(w: u16) -> bool {
    HIGH_SURROGATE.contains(&w)
}

fn is_low_surrogate(w: u16) -> bool {
    LOW_SURROGATE.contains(&w)
}

/// Decodes one UTF-16BE code point.
pub fn decode_be(es: &mut EncodeState, input: DecodeInput) -> Decoded {
    decode(es, input, rd_u16be)
}

/// Decodes one UTF-16LE code point.
pub fn decode_le(es: &mut EncodeState, input: DecodeInput) -> Decoded {
    decode(es, input, rd_u16le)
}

fn decode(
    es: &mut EncodeState,
    input: DecodeInput,
    rd16: fn(&[u8]) -> u16,
) -> Decoded {
    match input {
        DecodeInput::Flush => flush(es),
        DecodeInput::Bytes(b) => decode_region(es, b, false, rd16),
        DecodeInput::NullTerminated(b) => decode_region(es, b, true, rd16),
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

fn decode_region(
    es: &mut EncodeState,
    b: &[u8],
    null_terminated: bool,
    rd16: fn(&[u8]) -> u16,
) -> Decoded {
    if b.is_empty() {
        return end_of_region(es);
    }

    let carry_len = es.carry.len();
    let need = 2usize.saturating_sub(carry_len);
    if need > b.len() {
        if null_terminated {
            // A partial final unit at the end of a null-terminated region
            // can never be completed (no `pend` to bound further reads):
            // never buffer across this boundary.
            es.carry.clear();
            return Decoded {
                cp: CodePointValue::ERROR,
                consumed: b.len(),
                terminated: true,
            };
        }
        es.carry.extend(b);
        return Decoded {
            cp: CodePointValue::NO_CHAR,
            consumed: b.len(),
            terminated: false,
        };
    }

    let mut unit = [0u8; 2];
    if carry_len > 0 {
        unit[..carry_len].copy_from_slice(es.carry.as_slice());
    }
    unit[carry_len..2].copy_from_slice(&b[..need]);
    let mut consumed = need;
    es.carry.clear();
    let w0 = rd16(&unit);

    if is_high_surrogate(w0) {
        let avail = b.len() - consumed;
        if avail < 2 {
            if null_terminated {
                // Never buffer across the null-terminated boundary (see
                // DESIGN.md open-question decision): a truncated pairing
                // at the end of a null-terminated region is an error.
                return Decoded {
                    cp: CodePointValue::ERROR,
                    consumed,
                    terminated: false,
                };
            }
            es.carry.set(&unit);
            return Decoded {
                cp: CodePointValue::NO_CHAR,
                consumed,
                terminated: false,
            };
        }
        let w1 = rd16(&b[consumed..consumed + 2]);
        if is_low_surrogate(w1) {
            consumed += 2;
            let code = 0x10000u32 + (((w0 as u32) - 0xD800) << 10) + ((w1 as u32) - 0xDC00);
            return Decoded {
                cp: CodePointValue::new(code, false),
                consumed,
                terminated: false,
            };
        }
        // w1 does not pair: emit the lone high surrogate and leave w1's
        // bytes unconsumed for the next call.
        return Decoded {
            cp: CodePointValue::new(w0 as u32, false),
            consumed,
            terminated: false,
        };
    }

    let terminated = null_terminated && w0 == 0;
    Decoded {
        cp: CodePointValue::new(w0 as u32, false),
        consumed,
        terminated,
    }
}
