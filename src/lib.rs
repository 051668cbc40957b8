//! Streaming, stateful Unicode transcoding between a host narrow locale,
//! UTF-8, UTF-16 (BE/LE) and UTF-32 (BE/LE), one code point at a time.
//!
//! The crate is organized bottom-up:
//!
//! - [`cpv`] — the [`cpv::CodePointValue`] wire value shared by every
//!   decoder/encoder.
//! - [`carry`] / [`state`] — the small buffer and per-direction state that
//!   let decoders and encoders tolerate input/output fragmented across
//!   calls.
//! - [`decode`] / [`encode`] — the six decoders and six encoders, dispatched
//!   through [`encoding::Encoding`].
//! - [`transcode`] — the code-point-at-a-time decode/encode loop with
//!   explicit flush and backpressure.
//! - [`sink`] — `std::io::Write`/`Read` adapters built on [`transcode`].

#![warn(missing_docs)]

pub mod byteorder;
pub mod carry;
pub mod cpv;
pub mod decode;
pub mod encode;
pub mod encoding;
pub mod error;
mod ffi;
mod narrowconv;
pub mod putresult;
pub mod sink;
pub mod state;
pub mod transcode;
pub mod utf8classify;

pub use cpv::CodePointValue;
pub use encoding::Encoding;
pub use error::TranscodeError;
pub use sink::{TranscodingReader, TranscodingWriter};
pub use state::EncodeState;
pub use transcode::{TranscodeStep, Transcoder};
