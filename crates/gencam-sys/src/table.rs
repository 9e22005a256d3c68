//! The native function table.
//!
//! A fixed catalog of status-returning functions operating on
//! (handle, feature name) pairs. The engine treats a [`CallTable`] as a
//! capability: it invokes the pointers but never implements or replaces
//! them. Names and values cross the boundary as NUL-terminated ASCII.

use std::os::raw::c_char;

use crate::status::StatusCode;
use crate::types::{FeatureInfo, RawHandle};

/// Queries type and metadata for a named feature.
///
/// `info_size` must be the caller's `size_of::<FeatureInfo>()`; the
/// native side rejects a mismatch with a struct size status.
pub type InfoQueryFn = unsafe extern "C" fn(
    handle: RawHandle,
    name: *const c_char,
    info: *mut FeatureInfo,
    info_size: u32,
) -> StatusCode;

/// Reads a 64-bit integer feature into `out`.
pub type IntGetFn =
    unsafe extern "C" fn(handle: RawHandle, name: *const c_char, out: *mut i64) -> StatusCode;

/// Writes a 64-bit integer feature by value.
pub type IntSetFn =
    unsafe extern "C" fn(handle: RawHandle, name: *const c_char, value: i64) -> StatusCode;

/// Reads a double-precision float feature into `out`.
pub type FloatGetFn =
    unsafe extern "C" fn(handle: RawHandle, name: *const c_char, out: *mut f64) -> StatusCode;

/// Writes a double-precision float feature by value.
pub type FloatSetFn =
    unsafe extern "C" fn(handle: RawHandle, name: *const c_char, value: f64) -> StatusCode;

/// Reads a boolean feature into `out` (nonzero = true).
pub type BoolGetFn =
    unsafe extern "C" fn(handle: RawHandle, name: *const c_char, out: *mut u8) -> StatusCode;

/// Writes a boolean feature by value (nonzero = true).
pub type BoolSetFn =
    unsafe extern "C" fn(handle: RawHandle, name: *const c_char, value: u8) -> StatusCode;

/// Reads a string feature into a caller-owned buffer.
///
/// At most `capacity` bytes are written; `out_filled` receives the
/// number of bytes the native side placed in the buffer, including the
/// NUL terminator.
pub type StringGetFn = unsafe extern "C" fn(
    handle: RawHandle,
    name: *const c_char,
    buffer: *mut c_char,
    capacity: u32,
    out_filled: *mut u32,
) -> StatusCode;

/// Writes a string feature from a NUL-terminated ASCII value.
pub type StringSetFn =
    unsafe extern "C" fn(handle: RawHandle, name: *const c_char, value: *const c_char) -> StatusCode;

/// Reads the current token of an enum feature.
///
/// `out_token` receives a pointer to a NUL-terminated token owned by
/// the native side, valid only until the next call on the same handle.
pub type EnumGetFn = unsafe extern "C" fn(
    handle: RawHandle,
    name: *const c_char,
    out_token: *mut *const c_char,
) -> StatusCode;

/// Writes an enum feature from a NUL-terminated ASCII token.
pub type EnumSetFn =
    unsafe extern "C" fn(handle: RawHandle, name: *const c_char, token: *const c_char) -> StatusCode;

/// Queries the inclusive bounds of an integer feature.
pub type IntRangeQueryFn = unsafe extern "C" fn(
    handle: RawHandle,
    name: *const c_char,
    out_min: *mut i64,
    out_max: *mut i64,
) -> StatusCode;

/// Queries the inclusive bounds of a float feature.
pub type FloatRangeQueryFn = unsafe extern "C" fn(
    handle: RawHandle,
    name: *const c_char,
    out_min: *mut f64,
    out_max: *mut f64,
) -> StatusCode;

/// Queries the valid tokens of an enum feature.
///
/// With a null `dest` and zero `capacity`, only `out_count` is filled —
/// the discovery phase of the two-phase protocol. With a non-null
/// `dest`, up to `capacity` token pointers are written; `out_count` may
/// be null when the caller already knows the count. Token pointers are
/// owned by the native side, valid only until the next call on the
/// same handle.
pub type EnumRangeQueryFn = unsafe extern "C" fn(
    handle: RawHandle,
    name: *const c_char,
    dest: *mut *const c_char,
    capacity: u32,
    out_count: *mut u32,
) -> StatusCode;

/// Resolved native function table for feature access.
///
/// Obtained from [`crate::VendorLibrary::call_table`]. The table copies
/// raw pointers out of the vendor library, so it is only valid while
/// that library remains loaded.
#[derive(Clone, Copy)]
pub struct CallTable {
    /// Feature type and metadata query.
    pub info_query: InfoQueryFn,
    /// Integer feature read.
    pub int_get: IntGetFn,
    /// Integer feature write.
    pub int_set: IntSetFn,
    /// Float feature read.
    pub float_get: FloatGetFn,
    /// Float feature write.
    pub float_set: FloatSetFn,
    /// Boolean feature read.
    pub bool_get: BoolGetFn,
    /// Boolean feature write.
    pub bool_set: BoolSetFn,
    /// String feature read into a bounded buffer.
    pub string_get: StringGetFn,
    /// String feature write.
    pub string_set: StringSetFn,
    /// Enum feature read (borrowed token).
    pub enum_get: EnumGetFn,
    /// Enum feature write.
    pub enum_set: EnumSetFn,
    /// Integer bounds query.
    pub int_range_query: IntRangeQueryFn,
    /// Float bounds query.
    pub float_range_query: FloatRangeQueryFn,
    /// Enum token-set query (two-phase capable).
    pub enum_range_query: EnumRangeQueryFn,
}
