//! UTF-32BE / UTF-32LE decoders (C5).

use super::{DecodeInput, Decoded};
use crate::byteorder::{rd_u32be, rd_u32le};
use crate::cpv::CodePointValue;
use crate::state::EncodeState;

/// Decodes one UTF-32BE code point.
pub fn decode_be(es: &mut EncodeState, input: DecodeInput) -> Decoded {
    decode(es, input, rd_u32be)
}

/// Decodes one UTF-32LE code point.
pub fn decode_le(es: &mut EncodeState, input: DecodeInput) -> Decoded {
    decode(es, input, rd_u32le)
}

fn decode(es: &mut EncodeState, input: DecodeInput, rd32: fn(&[u8]) -> u32) -> Decoded {
    match input {
        DecodeInput::Flush => flush(es),
        DecodeInput::Bytes(b) => decode_region(es, b, false, rd32),
        DecodeInput::NullTerminated(b) => decode_region(es, b, true, rd32),
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
    rd32: fn(&[u8]) -> u32,
) -> Decoded {
    if b.is_empty() {
        return end_of_region(es);
    }

    let carry_len = es.carry.len();
    let need = 4usize.saturating_sub(carry_len);
    if need > b.len() {
        if null_terminated {
            // Never buffer across a null-terminated region's end: unlike
            // bounded mode, there is no `pend` to bound a later retry.
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

    let mut unit = [0u8; 4];
    if carry_len > 0 {
        unit[..carry_len].copy_from_slice(es.carry.as_slice());
    }
    unit[carry_len..4].copy_from_slice(&b[..need]);
    es.carry.clear();
    let code = rd32(&unit);

    let terminated = null_terminated && code == 0;
    Decoded {
        cp: CodePointValue::new(code, false),
        consumed: need,
        terminated,
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn plain_char_le() {
        let mut es = EncodeState::new();
        let d = decode_le(&mut es, DecodeInput::Bytes(&[0x00, 0x00, 0x02, 0x00]));
        assert_eq!(d.cp.code(), 0x0002_0000);
        assert_eq!(d.consumed, 4);
    }

    #[test]
    fn fragmented_across_calls() {
        let mut es = EncodeState::new();
        let d1 = decode_be(&mut es, DecodeInput::Bytes(&[0x00, 0x00]));
        assert!(d1.cp.is_no_char());
        assert_eq!(es.carry_len(), 2);
        let d2 = decode_be(&mut es, DecodeInput::Bytes(&[0x00, 0x55]));
        assert_eq!(d2.cp.code(), 0x55);
        assert_eq!(es.carry_len(), 0);
    }

    #[test]
    fn null_terminated_stops_at_zero() {
        let mut es = EncodeState::new();
        let input: [u8; 12] = [
            0x55, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x41, 0x00, 0x00, 0x00,
        ];
        let d1 = decode_le(&mut es, DecodeInput::NullTerminated(&input));
        assert_eq!(d1.cp.code(), 0x55);
        assert!(!d1.terminated);
        assert_eq!(d1.consumed, 4);

        let d2 = decode_le(&mut es, DecodeInput::NullTerminated(&input[4..]));
        assert_eq!(d2.cp.code(), 0);
        assert!(d2.terminated);
        assert_eq!(d2.consumed, 4);
        // The trailing 0x41 is never consumed.
    }

    #[test]
    fn null_terminated_truncated_tail_errors_and_terminates() {
        let mut es = EncodeState::new();
        let d = decode_le(&mut es, DecodeInput::NullTerminated(&[0x01, 0x02]));
        assert!(d.cp.is_error());
        assert!(d.terminated);
    }
}
