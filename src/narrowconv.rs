//! Narrow (host multibyte locale) codec support, built atop [`iconv(3)`].
//!
//! Generalized from [`utf8dec-rs`]'s one-shot, whole-string, UTF-8-target
//! decoder: here the destination is sized to hold exactly one UTF-32LE code
//! unit (4 bytes), so `iconv` necessarily stops after producing at most one
//! code point — giving the one-code-point-per-call contract the rest of
//! this crate requires, without reimplementing `mbrtowc`/`wcrtomb` state
//! tracking by hand.

use crate::ffi;
use std::sync::OnceLock;
use tracing::warn;

const UTF32LE: &str = "UTF-32LE";

/// Result of one `iconv` call: why it stopped.
pub(crate) enum ConvResult {
    /// Input is fully consumed.
    InputEmpty,
    /// Output buffer is full.
    OutputFull,
    /// Invalid input sequence encountered.
    InvalidSeq,
    /// The input contains only a fragment of a character.
    IncompleteSeq,
}

impl From<usize> for ConvResult {
    fn from(val: usize) -> Self {
        if val as isize != -1 {
            ConvResult::InputEmpty
        } else {
            let errno = std::io::Error::last_os_error().raw_os_error().unwrap();
            match errno {
                libc::E2BIG => ConvResult::OutputFull,
                libc::EILSEQ => ConvResult::InvalidSeq,
                libc::EINVAL => ConvResult::IncompleteSeq,
                _ => unreachable!(),
            }
        }
    }
}

/// Wrapper due to `*mut c_void` not being `Send`; a given `iconv_t`
/// descriptor is only ever touched by the single `EncodeState` that owns it.
struct IconvWrap(ffi::iconv_t);
unsafe impl Send for IconvWrap {}

impl Drop for IconvWrap {
    fn drop(&mut self) {
        if unsafe { ffi::iconv_close(self.0) } != 0 {
            warn!("iconv_close failed");
        }
    }
}

fn iconv_conv(conv: ffi::iconv_t, src: &[u8], dst: &mut [u8]) -> (ConvResult, usize, usize) {
    let mut src_ptr = src.as_ptr() as *const std::os::raw::c_char;
    let mut src_size = src.len();
    let mut dst_ptr = dst.as_mut_ptr() as *mut std::os::raw::c_char;
    let mut dst_size = dst.len();
    let res = unsafe {
        ffi::iconv(
            conv,
            &mut src_ptr,
            &mut src_size,
            &mut dst_ptr,
            &mut dst_size,
        )
    };
    let consumed = src.len() - src_size;
    let produced = dst.len() - dst_size;
    (res.into(), consumed, produced)
}

/// Which way a [`NarrowConv`] pivots bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Direction {
    /// host charset -> UTF-32LE (for the narrow decoder)
    Decode,
    /// UTF-32LE -> host charset (for the narrow encoder)
    Encode,
}

/// A single-direction iconv descriptor bound to the process's locale
/// charset, opened lazily on first use.
pub(crate) struct NarrowConv {
    cd: IconvWrap,
    direction: Direction,
}

impl NarrowConv {
    fn open(direction: Direction) -> std::io::Result<Self> {
        let charset = host_charset();
        let host = std::ffi::CString::new(charset.as_str())
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidInput, e))?;
        let pivot = std::ffi::CString::new(UTF32LE).unwrap();
        let cd = match direction {
            Direction::Decode => unsafe { ffi::iconv_open(pivot.as_ptr(), host.as_ptr()) },
            Direction::Encode => unsafe { ffi::iconv_open(host.as_ptr(), pivot.as_ptr()) },
        };
        if cd as isize == -1 {
            return Err(std::io::Error::last_os_error());
        }
        Ok(Self {
            cd: IconvWrap(cd),
            direction,
        })
    }

    pub(crate) fn direction(&self) -> Direction {
        self.direction
    }

    /// Feeds `src` in, producing at most one code point into `dst`.
    /// `dst` must be at least 4 bytes.
    pub(crate) fn convert(&self, src: &[u8], dst: &mut [u8]) -> (ConvResult, usize, usize) {
        iconv_conv(self.cd.0, src, dst)
    }
}

/// Resolves the process's narrow-locale codeset via `nl_langinfo(CODESET)`,
/// caching the result for the process lifetime (the core assumes the
/// locale does not change mid-stream, per the concurrency model).
pub(crate) fn host_charset() -> &'static str {
    static CHARSET: OnceLock<String> = OnceLock::new();
    CHARSET.get_or_init(|| {
        let ptr = unsafe { libc::nl_langinfo(libc::CODESET) };
        if ptr.is_null() {
            "UTF-8".to_string()
        } else {
            unsafe { std::ffi::CStr::from_ptr(ptr) }
                .to_string_lossy()
                .into_owned()
        }
    })
}

/// Lazily-opened pair of narrow<->UTF-32LE conversion descriptors, one per
/// direction actually used by a given `EncodeState`.
#[derive(Default)]
pub(crate) struct NarrowState {
    conv: Option<NarrowConv>,
}

impl NarrowState {
    pub(crate) fn new() -> Self {
        Self { conv: None }
    }

    /// Returns the descriptor for `direction`, opening (or reopening, if the
    /// previously-bound direction differs) as needed.
    pub(crate) fn get(&mut self, direction: Direction) -> std::io::Result<&NarrowConv> {
        let needs_open = match &self.conv {
            Some(c) => c.direction() != direction,
            None => true,
        };
        if needs_open {
            self.conv = Some(NarrowConv::open(direction)?);
        }
        Ok(self.conv.as_ref().unwrap())
    }

    /// Opens (if needed) the descriptor for `direction` and runs one
    /// conversion, without leaving a borrow on `self` behind.
    pub(crate) fn convert(
        &mut self,
        direction: Direction,
        src: &[u8],
        dst: &mut [u8],
    ) -> std::io::Result<(ConvResult, usize, usize)> {
        let conv = self.get(direction)?;
        Ok(conv.convert(src, dst))
    }
}
