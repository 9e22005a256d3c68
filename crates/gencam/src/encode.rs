//! Boundary text encoding.
//!
//! Names, string values, and enum tokens cross the native boundary as
//! single-byte, NUL-terminated ASCII. Encoding and decoding each happen
//! in exactly one place so every accessor follows the same rules.

use std::ffi::{CStr, CString};
use std::os::raw::c_char;

use crate::error::{Error, Result};

/// Encode text for the native side.
///
/// Contract: the text must be ASCII. Non-ASCII input is a caller
/// precondition violation, asserted only in debug builds; an embedded
/// NUL byte cannot be represented at the boundary at all and is
/// rejected with [`Error::EmbeddedNul`].
pub(crate) fn to_native(text: &str) -> Result<CString> {
    debug_assert!(text.is_ascii(), "boundary text must be ASCII: {text:?}");
    CString::new(text).map_err(|_| Error::EmbeddedNul)
}

/// Decode a NUL-terminated native string, copying it immediately.
///
/// The copy is mandatory: reference-style results are only valid until
/// the next call on the same handle.
///
/// # Safety
///
/// `ptr` must be non-null and point to a NUL-terminated buffer that
/// stays valid for the duration of this call.
pub(crate) unsafe fn from_native(ptr: *const c_char) -> String {
    CStr::from_ptr(ptr).to_string_lossy().into_owned()
}

/// Decode a fixed receive buffer filled by the native side.
///
/// Reads up to `filled` bytes (capped at the buffer length) and stops
/// at the first NUL terminator if one occurs earlier, so an embedded
/// terminator wins over the reported length and trailing buffer
/// padding never reaches the caller.
pub(crate) fn from_buffer(buf: &[u8], filled: usize) -> String {
    let filled = filled.min(buf.len());
    let end = buf[..filled]
        .iter()
        .position(|&b| b == 0)
        .unwrap_or(filled);
    String::from_utf8_lossy(&buf[..end]).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_native_appends_terminator() {
        let c = to_native("Gain").unwrap();
        assert_eq!(c.as_bytes_with_nul(), b"Gain\0");
    }

    #[test]
    fn test_to_native_rejects_embedded_nul() {
        assert_eq!(to_native("Ga\0in"), Err(Error::EmbeddedNul));
    }

    #[test]
    fn test_from_buffer_trims_padding() {
        let mut buf = vec![0u8; 256];
        buf[..7].copy_from_slice(b"CAM-001");
        // Vendor reports 8 bytes filled: the content plus its terminator.
        assert_eq!(from_buffer(&buf, 8), "CAM-001");
    }

    #[test]
    fn test_from_buffer_embedded_terminator_wins() {
        let buf = *b"abc\0def\0";
        assert_eq!(from_buffer(&buf, buf.len()), "abc");
    }

    #[test]
    fn test_from_buffer_filled_caps_at_capacity() {
        let buf = *b"abcdef";
        assert_eq!(from_buffer(&buf, 100), "abcdef");
    }

    #[test]
    fn test_from_buffer_no_terminator_uses_filled() {
        let buf = *b"abcdef";
        assert_eq!(from_buffer(&buf, 4), "abcd");
    }
}
