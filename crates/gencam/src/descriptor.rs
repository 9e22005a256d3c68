//! Feature descriptor resolution.

use std::ffi::CStr;
use std::mem;

use gencam_sys::{data_type, CallTable, FeatureInfo, RawHandle};

use crate::error::{check, Result};

/// Closed set of feature data types understood by the engine.
///
/// Every code the native side can report maps onto a variant; codes the
/// engine has no accessor for are kept explicit so dispatch fails
/// deterministically instead of silently doing nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FeatureDataType {
    /// Type unknown to the control library, or a code outside the
    /// vendor catalog.
    Unknown,
    /// 64-bit signed integer.
    Int,
    /// Double-precision float.
    Float,
    /// Enumeration, addressed by text token.
    Enum,
    /// ASCII string.
    Str,
    /// Boolean.
    Bool,
    /// Command (execute-only), no value accessor implemented.
    Command,
    /// Raw byte block, no value accessor implemented.
    Raw,
    /// Carries no data, no value accessor implemented.
    None,
}

impl FeatureDataType {
    /// Map a raw type code onto the closed set.
    ///
    /// Codes outside the vendor catalog fold into `Unknown`, which
    /// dispatches the same way: always `NotSupported`.
    pub fn from_code(code: u32) -> Self {
        match code {
            data_type::INT => FeatureDataType::Int,
            data_type::FLOAT => FeatureDataType::Float,
            data_type::ENUM => FeatureDataType::Enum,
            data_type::STRING => FeatureDataType::Str,
            data_type::BOOL => FeatureDataType::Bool,
            data_type::COMMAND => FeatureDataType::Command,
            data_type::RAW => FeatureDataType::Raw,
            data_type::NONE => FeatureDataType::None,
            _ => FeatureDataType::Unknown,
        }
    }
}

/// Query type and metadata for `name` on `handle`.
///
/// Invoked once per accessor operation — never cached — so accessor
/// selection cannot act on a stale descriptor if the feature set
/// changes between calls. No retries; a non-zero status is surfaced
/// verbatim and synchronously.
pub(crate) fn resolve(api: &CallTable, handle: RawHandle, name: &CStr) -> Result<FeatureInfo> {
    let mut info = FeatureInfo::default();
    let status = unsafe {
        (api.info_query)(
            handle,
            name.as_ptr(),
            &mut info,
            mem::size_of::<FeatureInfo>() as u32,
        )
    };
    check(status)?;
    Ok(info)
}
