//! Name-addressed feature access.
//!
//! A [`Feature`] binds a name to a session handle and a native call
//! table. Its data type is discovered from the device on every
//! operation and selects the marshalling path through the dispatch
//! table; see the crate docs for the overall flow.

use std::ffi::CString;
use std::os::raw::c_char;
use std::ptr;

use gencam_sys::{CallTable, FeatureInfo, RawHandle};

use crate::descriptor::{self, FeatureDataType};
use crate::dispatch;
use crate::encode;
use crate::error::{check, Error, Result};
use crate::range::RangeResult;
use crate::twophase;
use crate::value::FeatureValue;

/// Capacity in bytes of the receive buffer for string feature reads.
///
/// Matches the bound used by the vendor examples. A longer native value
/// is truncated at this size; the engine does not retry with a larger
/// buffer (documented limitation).
pub const STRING_BUFFER_CAPACITY: usize = 256;

/// A named, typed feature of an open device or module.
///
/// Borrows the call table and the session handle; the session layer
/// owns both, must keep them valid while the feature is in use, and
/// must serialize concurrent operations against the same handle.
///
/// The descriptor is resolved from the device on every operation, so
/// accessor selection never acts on a stale type code.
pub struct Feature<'a> {
    api: &'a CallTable,
    handle: RawHandle,
    name: String,
    c_name: CString,
}

impl<'a> Feature<'a> {
    /// Bind a feature by name on the given session handle.
    ///
    /// The name is encoded to ASCII eagerly (see [`crate::error::Error::EmbeddedNul`]
    /// for the one rejected input); no native call is made, so an
    /// unknown name only surfaces as [`Error::Native`] from the first
    /// operation.
    pub fn new(api: &'a CallTable, handle: RawHandle, name: &str) -> Result<Self> {
        Ok(Feature {
            api,
            handle,
            name: name.to_string(),
            c_name: encode::to_native(name)?,
        })
    }

    /// Feature name as given at construction.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The session handle this feature is bound to.
    pub fn handle(&self) -> RawHandle {
        self.handle
    }

    /// Fetch the feature's current descriptor from the device.
    pub fn info(&self) -> Result<FeatureInfo> {
        descriptor::resolve(self.api, self.handle, &self.c_name)
    }

    /// Data type discovered from the current descriptor.
    pub fn data_type(&self) -> Result<FeatureDataType> {
        Ok(FeatureDataType::from_code(self.info()?.data_type))
    }

    /// Read the feature's current value.
    ///
    /// Resolves the descriptor first and dispatches on its type code;
    /// types without an implemented accessor fail with
    /// [`Error::NotSupported`] before any value call is attempted.
    pub fn value(&self) -> Result<FeatureValue> {
        let ty = self.data_type()?;
        (dispatch::accessors(ty).get)(self)
    }

    /// Write the feature's value.
    ///
    /// The value's variant must match the discovered data type (the
    /// float path additionally accepts an integer). Unimplemented types
    /// fail with [`Error::NotSupported`] without touching the device.
    pub fn set(&self, value: impl Into<FeatureValue>) -> Result<()> {
        let ty = self.data_type()?;
        (dispatch::accessors(ty).set)(self, value.into())
    }

    /// Query the feature's range.
    ///
    /// Numeric types yield min/max bounds and enums the ordered token
    /// set; every other type yields [`RangeResult::None`] — a
    /// successful "no range exists", never an error.
    pub fn range(&self) -> Result<RangeResult> {
        let ty = self.data_type()?;
        (dispatch::range_query(ty))(self)
    }
}

fn type_mismatch(expected: &'static str, got: &FeatureValue) -> Error {
    Error::TypeMismatch {
        expected,
        got: got.kind(),
    }
}

// ============================================================================
// Scalar accessors
// ============================================================================

// These define the baseline marshalling pattern every other accessor
// reuses: a zero-initialized out slot of the correct width, one native
// call, one verbatim status translation.

pub(crate) fn get_int(f: &Feature<'_>) -> Result<FeatureValue> {
    let mut out: i64 = 0;
    check(unsafe { (f.api.int_get)(f.handle, f.c_name.as_ptr(), &mut out) })?;
    Ok(FeatureValue::Int(out))
}

pub(crate) fn set_int(f: &Feature<'_>, value: FeatureValue) -> Result<()> {
    let v = match value {
        FeatureValue::Int(v) => v,
        other => return Err(type_mismatch("int", &other)),
    };
    check(unsafe { (f.api.int_set)(f.handle, f.c_name.as_ptr(), v) })
}

pub(crate) fn get_float(f: &Feature<'_>) -> Result<FeatureValue> {
    let mut out: f64 = 0.0;
    check(unsafe { (f.api.float_get)(f.handle, f.c_name.as_ptr(), &mut out) })?;
    Ok(FeatureValue::Float(out))
}

pub(crate) fn set_float(f: &Feature<'_>, value: FeatureValue) -> Result<()> {
    let v = match value {
        FeatureValue::Float(v) => v,
        // Lossless widening; integer literals are common for float features.
        FeatureValue::Int(v) => v as f64,
        other => return Err(type_mismatch("float", &other)),
    };
    check(unsafe { (f.api.float_set)(f.handle, f.c_name.as_ptr(), v) })
}

pub(crate) fn get_bool(f: &Feature<'_>) -> Result<FeatureValue> {
    let mut out: u8 = 0;
    check(unsafe { (f.api.bool_get)(f.handle, f.c_name.as_ptr(), &mut out) })?;
    Ok(FeatureValue::Bool(out != 0))
}

pub(crate) fn set_bool(f: &Feature<'_>, value: FeatureValue) -> Result<()> {
    let v = match value {
        FeatureValue::Bool(v) => v,
        other => return Err(type_mismatch("bool", &other)),
    };
    check(unsafe { (f.api.bool_set)(f.handle, f.c_name.as_ptr(), u8::from(v)) })
}

// ============================================================================
// String accessor
// ============================================================================

pub(crate) fn get_string(f: &Feature<'_>) -> Result<FeatureValue> {
    let mut buf = vec![0u8; STRING_BUFFER_CAPACITY];
    let mut filled: u32 = 0;
    check(unsafe {
        (f.api.string_get)(
            f.handle,
            f.c_name.as_ptr(),
            buf.as_mut_ptr() as *mut c_char,
            buf.len() as u32,
            &mut filled,
        )
    })?;
    Ok(FeatureValue::Str(encode::from_buffer(&buf, filled as usize)))
}

pub(crate) fn set_string(f: &Feature<'_>, value: FeatureValue) -> Result<()> {
    let text = match &value {
        FeatureValue::Str(s) | FeatureValue::Enum(s) => encode::to_native(s)?,
        other => return Err(type_mismatch("string", other)),
    };
    check(unsafe { (f.api.string_set)(f.handle, f.c_name.as_ptr(), text.as_ptr()) })
}

// ============================================================================
// Enum accessor
// ============================================================================

pub(crate) fn get_enum(f: &Feature<'_>) -> Result<FeatureValue> {
    let mut token: *const c_char = ptr::null();
    check(unsafe { (f.api.enum_get)(f.handle, f.c_name.as_ptr(), &mut token) })?;
    if token.is_null() {
        return Err(Error::Inconsistent(
            "enum get reported success with a null token".to_string(),
        ));
    }
    // The token is borrowed from the native side and only valid until
    // the next call on this handle; copy it before returning.
    Ok(FeatureValue::Enum(unsafe { encode::from_native(token) }))
}

pub(crate) fn set_enum(f: &Feature<'_>, value: FeatureValue) -> Result<()> {
    let token = match &value {
        FeatureValue::Enum(s) | FeatureValue::Str(s) => encode::to_native(s)?,
        other => return Err(type_mismatch("enum", other)),
    };
    check(unsafe { (f.api.enum_set)(f.handle, f.c_name.as_ptr(), token.as_ptr()) })
}

// ============================================================================
// Range queries
// ============================================================================

pub(crate) fn range_int(f: &Feature<'_>) -> Result<RangeResult> {
    let mut min: i64 = 0;
    let mut max: i64 = 0;
    check(unsafe { (f.api.int_range_query)(f.handle, f.c_name.as_ptr(), &mut min, &mut max) })?;
    Ok(RangeResult::Int { min, max })
}

pub(crate) fn range_float(f: &Feature<'_>) -> Result<RangeResult> {
    let mut min: f64 = 0.0;
    let mut max: f64 = 0.0;
    check(unsafe { (f.api.float_range_query)(f.handle, f.c_name.as_ptr(), &mut min, &mut max) })?;
    Ok(RangeResult::Float { min, max })
}

/// Two-phase token-set query: probe the count with a null destination,
/// allocate exactly that many slots, fetch, and copy every token before
/// the next call can invalidate it. Token order is the vendor's
/// canonical order and is preserved as-is.
pub(crate) fn range_enum(f: &Feature<'_>) -> Result<RangeResult> {
    let tokens = twophase::fetch_counted(
        ptr::null::<c_char>(),
        |dest, capacity, count| unsafe {
            (f.api.enum_range_query)(f.handle, f.c_name.as_ptr(), dest, capacity, count)
        },
        |index, slot| {
            if slot.is_null() {
                return Err(Error::Inconsistent(format!(
                    "enum range slot {index} left unfilled"
                )));
            }
            Ok(unsafe { encode::from_native(slot) })
        },
    )?;
    Ok(RangeResult::Enum(tokens))
}
