//! Encoding identifiers and the decode/encode dispatch tables.
//!
//! Grounded on the original's `zlutfgetprocs[]` / `zlutfputprocs[]` /
//! `zlutffastputprocs[]`: a dense array of function pointers indexed by a
//! small integer encoding id, rather than a dynamic-dispatch trait object
//! per call. `Encoding` keeps that shape but as a closed Rust enum.

use crate::decode::{self, DecodeFn};
use crate::encode::{self, FastEncodeFn};
use crate::error::TranscodeError;

/// One of the six encodings this crate transcodes between.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Encoding {
    /// The host locale's narrow multibyte encoding.
    Narrow,
    /// UTF-8.
    Utf8,
    /// UTF-16, big-endian code units.
    Utf16Be,
    /// UTF-16, little-endian code units.
    Utf16Le,
    /// UTF-32, big-endian code units.
    Utf32Be,
    /// UTF-32, little-endian code units.
    Utf32Le,
}

/// Id reserved for an as-yet-unresolved encoding (never a valid [`Encoding`]).
pub const ENCODING_ID_UNKNOWN: i32 = 0;
/// Id reserved for an encoding resolution error (never a valid [`Encoding`]).
pub const ENCODING_ID_ERROR: i32 = 1;
/// Id reserved for the flush pseudo-encoding (never a valid [`Encoding`]).
pub const ENCODING_ID_FLUSH: i32 = -1;

impl Encoding {
    /// All encodings, in the same order as their numeric ids (which start
    /// at 2: ids 0, 1 and -1 are reserved for `UNKNOWN`, `ERROR` and `FLUSH`
    /// respectively and never name a real [`Encoding`]).
    pub const ALL: [Encoding; 6] = [
        Encoding::Narrow,
        Encoding::Utf8,
        Encoding::Utf16Be,
        Encoding::Utf16Le,
        Encoding::Utf32Be,
        Encoding::Utf32Le,
    ];

    /// Lowest numeric id assigned to a real encoding.
    const ID_BASE: i32 = 2;

    /// Resolves a dense numeric encoding id, as used by the original's
    /// table-index convention. `0`, `1` and `-1` are reserved sentinels
    /// (`UNKNOWN`, `ERROR`, `FLUSH`) and never resolve to an `Encoding`.
    pub fn from_id(id: i32) -> Result<Self, TranscodeError> {
        let index = id
            .checked_sub(Self::ID_BASE)
            .and_then(|i| usize::try_from(i).ok())
            .ok_or(TranscodeError::InvalidEncoding(id))?;
        Self::ALL.get(index).copied().ok_or(TranscodeError::InvalidEncoding(id))
    }

    /// The numeric id for this encoding (inverse of [`Encoding::from_id`]),
    /// starting at [`Encoding::ID_BASE`].
    pub fn id(self) -> i32 {
        Self::ID_BASE + Self::ALL.iter().position(|e| *e == self).unwrap() as i32
    }

    /// The decoder function for this encoding.
    pub fn decode_fn(self) -> DecodeFn {
        match self {
            Encoding::Narrow => decode::narrow::decode,
            Encoding::Utf8 => decode::utf8::decode,
            Encoding::Utf16Be => decode::utf16::decode_be,
            Encoding::Utf16Le => decode::utf16::decode_le,
            Encoding::Utf32Be => decode::utf32::decode_be,
            Encoding::Utf32Le => decode::utf32::decode_le,
        }
    }

    /// The fast encoder function for this encoding.
    pub fn encode_fn(self) -> FastEncodeFn {
        match self {
            Encoding::Narrow => encode::narrow::encode,
            Encoding::Utf8 => encode::utf8::encode,
            Encoding::Utf16Be => encode::utf16::encode_be,
            Encoding::Utf16Le => encode::utf16::encode_le,
            Encoding::Utf32Be => encode::utf32::encode_be,
            Encoding::Utf32Le => encode::utf32::encode_le,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn id_roundtrips_through_all_members() {
        for e in Encoding::ALL {
            assert_eq!(Encoding::from_id(e.id()).unwrap(), e);
        }
    }

    #[test]
    fn out_of_range_id_is_an_error() {
        assert!(Encoding::from_id(99).is_err());
    }

    #[test]
    fn reserved_sentinel_ids_never_resolve() {
        assert!(Encoding::from_id(ENCODING_ID_UNKNOWN).is_err());
        assert!(Encoding::from_id(ENCODING_ID_ERROR).is_err());
        assert!(Encoding::from_id(ENCODING_ID_FLUSH).is_err());
        for e in Encoding::ALL {
            assert_ne!(e.id(), ENCODING_ID_UNKNOWN);
            assert_ne!(e.id(), ENCODING_ID_ERROR);
            assert_ne!(e.id(), ENCODING_ID_FLUSH);
        }
    }
}
