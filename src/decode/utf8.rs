//! UTF-8 decoder (C5).

use super::{DecodeInput, Decoded};
use crate::cpv::CodePointValue;
use crate::state::EncodeState;
use crate::utf8classify::{classify_lead, is_continuation};

/// Decodes one UTF-8 code point, buffering a partial sequence across calls.
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

    let carry_len = es.carry.len();
    let (lead, total_len, non_norm, data_mask) = if carry_len > 0 {
        let lead = es.carry.as_slice()[0];
        let info = classify_lead(lead);
        (lead, info.len as usize, info.non_norm, info.data_mask)
    } else {
        let info = classify_lead(b[0]);
        if info.len == 0 {
            // Orphan continuation byte where a lead byte was expected.
            return Decoded {
                cp: CodePointValue::ERROR,
                consumed: 1,
                terminated: false,
            };
        }
        (b[0], info.len as usize, info.non_norm, info.data_mask)
    };

    let mut idx = if carry_len > 0 { 0 } else { 1 };
    let mut pos = if carry_len > 0 { carry_len } else { 1 };
    while pos < total_len {
        if idx >= b.len() {
            if idx > 0 {
                es.carry.extend(&b[..idx]);
            }
            return Decoded {
                cp: CodePointValue::NO_CHAR,
                consumed: idx,
                terminated: false,
            };
        }
        let nb = b[idx];
        if !is_continuation(nb) {
            es.carry.clear();
            return Decoded {
                cp: CodePointValue::ERROR,
                consumed: idx + 1,
                terminated: false,
            };
        }
        idx += 1;
        pos += 1;
    }

    let mut code = (lead as u32) & (data_mask as u32);
    if carry_len > 0 {
        for &cb in &es.carry.as_slice()[1..carry_len] {
            code = (code << 6) | (cb as u32 & 0x3F);
        }
        for &cb in &b[..idx] {
            code = (code << 6) | (cb as u32 & 0x3F);
        }
    } else {
        for &cb in &b[1..idx] {
            code = (code << 6) | (cb as u32 & 0x3F);
        }
    }
    es.carry.clear();

    let cp = CodePointValue::new(code, non_norm);
    let terminated = null_terminated && cp.code() == 0 && !cp.non_norm();
    Decoded {
        cp,
        consumed: idx,
        terminated,
    }
}
