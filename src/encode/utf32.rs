//! UTF-32BE / UTF-32LE fast encoders (C6).
//!
//! The full 31-bit [`CodePointValue`] range always fits in four bytes, so
//! these encoders never need the range fallback the UTF-16 pair does.

use super::common_prelude;
use crate::byteorder::{wr_u32be, wr_u32le};
use crate::cpv::CodePointValue;
use crate::putresult::PutResult;
use crate::state::EncodeState;

/// Encodes one code point as UTF-32BE.
pub fn encode_be(es: &mut EncodeState, dst: &mut [u8; 16], cp: CodePointValue, pr: &mut PutResult) -> usize {
    encode(es, dst, cp, pr, wr_u32be)
}

/// Encodes one code point as UTF-32LE.
pub fn encode_le(es: &mut EncodeState, dst: &mut [u8; 16], cp: CodePointValue, pr: &mut PutResult) -> usize {
    encode(es, dst, cp, pr, wr_u32le)
}

fn encode(
    es: &mut EncodeState,
    dst: &mut [u8; 16],
    cp: CodePointValue,
    pr: &mut PutResult,
    wr32: fn(&mut [u8], u32),
) -> usize {
    let code = match common_prelude(es, dst, cp, pr) {
        Ok(c) => c,
        Err(n) => return n,
    };
    wr32(&mut dst[0..4], code);
    pr.set(PutResult::ACCEPT);
    4
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::decode::{self, DecodeInput};

    #[test]
    fn roundtrips_le() {
        let mut es = EncodeState::new();
        let mut dst = [0u8; 16];
        let mut pr = PutResult::new();
        let n = encode_le(&mut es, &mut dst, CodePointValue::new(0x1F600, false), &mut pr);
        assert_eq!(n, 4);

        let mut des = EncodeState::new();
        let d = decode::utf32::decode_le(&mut des, DecodeInput::Bytes(&dst[..n]));
        assert_eq!(d.cp.code(), 0x1F600);
    }

    #[test]
    fn flush_drains_nothing_when_carry_empty() {
        let mut es = EncodeState::new();
        let mut dst = [0u8; 16];
        let mut pr = PutResult::new();
        let n = encode_be(&mut es, &mut dst, CodePointValue::NO_CHAR, &mut pr);
        assert_eq!(n, 0);
    }
}
