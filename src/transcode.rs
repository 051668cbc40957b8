//! The transcoder loop (C8): decode from one encoding, encode into another,
//! one code point at a time, with explicit flush and backpressure.
//!
//! The original's general-purpose `zlutfconv` combined this with sink
//! plumbing and was never finished; there was nothing to lift directly, so
//! this is built from the lower-level decode/encode primitives in the style
//! `[crate::decode]`/`[crate::encode]` already establish.

use crate::cpv::CodePointValue;
use crate::decode::DecodeInput;
use crate::encode::wrapper;
use crate::encoding::Encoding;
use crate::putresult::PutResult;
use crate::state::EncodeState;

/// Outcome of one [`Transcoder::transcode`] / [`Transcoder::flush`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TranscodeStep {
    /// Bytes consumed from the input this call.
    pub consumed: usize,
    /// Bytes written to the output this call.
    pub written: usize,
    /// Whether the decoder reported the stream as terminated (null
    /// terminator hit, or this was a flush call).
    pub terminated: bool,
}

/// Converts a byte stream from one encoding to another, one code point at a
/// time, tolerating input and output fragmentation across calls.
///
/// A code point is never re-decoded or re-encoded across calls: once the
/// encoder accepts it, any bytes that didn't fit in `out` sit in the
/// encoder's own carry and are drained automatically at the start of the
/// next [`Transcoder::transcode`]/[`Transcoder::flush`] call, whatever new
/// code point (if any) that call goes on to process.
pub struct Transcoder {
    from: Encoding,
    to: Encoding,
    decode_state: EncodeState,
    encode_state: EncodeState,
    allow_fallback: bool,
    errors: u64,
}

impl Transcoder {
    /// Creates a transcoder from `from` to `to` with fallback substitution
    /// disabled (unencodable/undecodable data reports `ERRCODE` and halts
    /// progress on that code point).
    pub fn new(from: Encoding, to: Encoding) -> Self {
        Self {
            from,
            to,
            decode_state: EncodeState::new(),
            encode_state: EncodeState::new(),
            allow_fallback: false,
            errors: 0,
        }
    }

    /// Enables or disables `'?'` fallback substitution for undecodable
    /// input and unencodable code points.
    pub fn set_allow_fallback(&mut self, allow: bool) {
        self.allow_fallback = allow;
    }

    /// Number of code points that hit a terminal error (`ERRCODE`, or an
    /// undecodable input sequence) since construction.
    pub fn error_count(&self) -> u64 {
        self.errors
    }

    fn put_result(&self) -> PutResult {
        if self.allow_fallback {
            PutResult::allow_fallback()
        } else {
            PutResult::new()
        }
    }

    /// Encodes one code point (or, with `cp == NO_CHAR`, just drains
    /// whatever the encoder previously spilled). Returns `(bytes_written,
    /// destination_ran_dry)`.
    fn drive_encode(&mut self, cp: CodePointValue, out: &mut [u8], out_off: &mut usize) -> bool {
        let mut pr = self.put_result();
        let n = wrapper::encode(&mut self.encode_state, self.to.encode_fn(), &mut out[*out_off..], cp, &mut pr);
        *out_off += n;
        if pr.intersects(PutResult::ERROR_MARKS) {
            self.errors += 1;
        }
        pr.contains(PutResult::BUFFER)
    }

    /// Transcodes as much of `input` into `out` as fits.
    ///
    /// If `written` comes back equal to `out.len()` while `consumed` is
    /// less than `input.len()`, the destination ran dry mid-stream
    /// (backpressure): call again with a fresh `out` and `input[consumed..]`.
    pub fn transcode(&mut self, input: &[u8], out: &mut [u8]) -> TranscodeStep {
        self.run(input, out, false)
    }

    /// Like [`Transcoder::transcode`], but treats `input` as null-terminated:
    /// stops at the first decoded zero code unit and reports `terminated`.
    pub fn transcode_null_terminated(&mut self, input: &[u8], out: &mut [u8]) -> TranscodeStep {
        self.run(input, out, true)
    }

    fn run(&mut self, input: &[u8], out: &mut [u8], null_terminated: bool) -> TranscodeStep {
        let mut in_off = 0;
        let mut out_off = 0;
        let mut terminated = false;

        loop {
            if out_off >= out.len() || in_off >= input.len() {
                break;
            }
            let region = &input[in_off..];
            let d = if null_terminated {
                (self.from.decode_fn())(&mut self.decode_state, DecodeInput::NullTerminated(region))
            } else {
                (self.from.decode_fn())(&mut self.decode_state, DecodeInput::Bytes(region))
            };
            in_off += d.consumed;

            if d.cp.is_error() {
                self.errors += 1;
            }
            if d.terminated {
                terminated = true;
            }

            if d.cp.is_no_char() {
                if d.consumed == 0 || terminated {
                    break;
                }
                continue;
            }

            if terminated && !d.cp.is_error() {
                // This call's code point is the null terminator itself
                // (always code 0): it ends the stream but is not part of
                // its content, so it is never re-encoded into `out`.
                break;
            }

            let ran_dry = self.drive_encode(d.cp, out, &mut out_off);
            if ran_dry || terminated {
                break;
            }
        }

        TranscodeStep { consumed: in_off, written: out_off, terminated }
    }

    /// Flushes any buffered partial input and any encoder output spilled by
    /// the last code point of the stream. Call once after the final
    /// [`Transcoder::transcode`] call.
    pub fn flush(&mut self, out: &mut [u8]) -> TranscodeStep {
        let mut out_off = 0;

        // Drain whatever the previous call's last code point spilled before
        // processing the flush-produced code point (if any), preserving
        // stream order.
        self.drive_encode(CodePointValue::NO_CHAR, out, &mut out_off);

        let d = (self.from.decode_fn())(&mut self.decode_state, DecodeInput::Flush);
        if d.cp.is_error() {
            self.errors += 1;
        }
        if !d.cp.is_no_char() {
            self.drive_encode(d.cp, out, &mut out_off);
        }
        self.drive_encode(CodePointValue::NO_CHAR, out, &mut out_off);

        TranscodeStep { consumed: 0, written: out_off, terminated: true }
    }
}
