//! UTF-16BE / UTF-16LE fast encoders (C6).

use super::{common_prelude, range_fallback};
use crate::byteorder::{wr_u16be, wr_u16le};
use crate::cpv::CodePointValue;
use crate::putresult::PutResult;
use crate::state::EncodeState;

/// Encodes one code point as UTF-16BE.
pub fn encode_be(es: &mut EncodeState, dst: &mut [u8; 16], cp: CodePointValue, pr: &mut PutResult) -> usize {
    encode(es, dst, cp, pr, wr_u16be)
}

/// Encodes one code point as UTF-16LE.
pub fn encode_le(es: &mut EncodeState, dst: &mut [u8; 16], cp: CodePointValue, pr: &mut PutResult) -> usize {
    encode(es, dst, cp, pr, wr_u16le)
}

fn encode(
    es: &mut EncodeState,
    dst: &mut [u8; 16],
    cp: CodePointValue,
    pr: &mut PutResult,
    wr16: fn(&mut [u8], u16),
) -> usize {
    let code = match common_prelude(es, dst, cp, pr) {
        Ok(c) => c,
        Err(n) => return n,
    };

    // UTF-16 can represent U+0000..U+10FFFF minus the surrogate range; a
    // scalar outside that falls back the same way an unencodable host
    // character does.
    let representable = code <= 0x10FFFF && !(0xD800..=0xDFFF).contains(&code);
    if !representable {
        return match range_fallback(pr) {
            Some(fb) => {
                let n = write(dst, fb, wr16);
                pr.set(PutResult::ACCEPT);
                n
            }
            None => 0,
        };
    }

    let n = write(dst, code, wr16);
    pr.set(PutResult::ACCEPT);
    n
}

fn write(dst: &mut [u8; 16], code: u32, wr16: fn(&mut [u8], u16)) -> usize {
    if code <= 0xFFFF {
        wr16(&mut dst[0..2], code as u16);
        2
    } else {
        let c = code - 0x10000;
        let hi = 0xD800 + ((c >> 10) as u16);
        let lo = 0xDC00 + ((c & 0x3FF) as u16);
        wr16(&mut dst[0..2], hi);
        wr16(&mut dst[2..4], lo);
        4
    }
}
