//! Testable properties 1 (round-trip identity) and 2 (cross-encoding
//! equivalence) against representative code points across the full
//! transcoder loop.

use utfxlate_rs::{Encoding, Transcoder};

const SAMPLE: &[u32] = &[
    0x00, 0x41, 0x7F,       // ASCII boundary
    0x80, 0xFF,             // Latin-1 supplement
    0x7FF, 0x800, 0x4E00,   // two-byte / three-byte UTF-8 boundaries
    0xD7FF, 0xE000,         // either side of the surrogate gap
    0xFFFF, 0x10000,        // BMP/supplementary boundary
    0x10FFFF,               // max scalar value
];

const UNICODE_ENCODINGS: &[Encoding] = &[
    Encoding::Utf8,
    Encoding::Utf16Be,
    Encoding::Utf16Le,
    Encoding::Utf32Be,
    Encoding::Utf32Le,
];

fn transcode_one(from: Encoding, to: Encoding, code: u32) -> Vec<u8> {
    // Build a single-code-point source stream in `from` by round-tripping
    // through a UTF-32LE literal, then transcode it end-to-end.
    let mut enc = Transcoder::new(Encoding::Utf32Le, from);
    let mut mid = [0u8; 64];
    let step = enc.transcode(&code.to_le_bytes(), &mut mid);
    let flush = enc.flush(&mut mid[step.written..]);
    let mid_len = step.written + flush.written;

    let mut dec = Transcoder::new(from, to);
    let mut out = [0u8; 64];
    let step = dec.transcode(&mid[..mid_len], &mut out);
    let flush = dec.flush(&mut out[step.written..]);
    out[..step.written + flush.written].to_vec()
}

#[test]
fn round_trip_identity_through_every_encoding() {
    for &enc in UNICODE_ENCODINGS {
        for &code in SAMPLE {
            let there = transcode_one(Encoding::Utf32Le, enc, code);
            let mut back_t = Transcoder::new(enc, Encoding::Utf32Le);
            let mut out = [0u8; 16];
            let step = back_t.transcode(&there, &mut out);
            let flush = back_t.flush(&mut out[step.written..]);
            let total = step.written + flush.written;
            assert_eq!(total, 4, "encoding {:?} code U+{:04X}", enc, code);
            let got = u32::from_le_bytes(out[..4].try_into().unwrap());
            assert_eq!(got, code, "encoding {:?} code U+{:04X}", enc, code);
        }
    }
}

#[test]
fn cross_encoding_equivalence() {
    // Transcoding A -> B -> C must match transcoding A -> C directly, for
    // every pair drawn from the Unicode-native encodings.
    for &a in UNICODE_ENCODINGS {
        for &b in UNICODE_ENCODINGS {
            for &code in SAMPLE {
                let via_a_to_b = transcode_one(Encoding::Utf32Le, a, code);

                let mut through_b = Transcoder::new(a, b);
                let mut mid = [0u8; 64];
                let step = through_b.transcode(&via_a_to_b, &mut mid);
                let flush = through_b.flush(&mut mid[step.written..]);
                let b_bytes = &mid[..step.written + flush.written];

                let direct = transcode_one(Encoding::Utf32Le, b, code);
                assert_eq!(b_bytes, &direct[..], "{:?} -> {:?} code U+{:04X}", a, b, code);
            }
        }
    }
}
