//! Boundary data layouts: handles, type codes, flags, and the feature
//! descriptor filled in by the native info query.

use std::os::raw::c_void;

/// Opaque handle to an open device or module session.
///
/// Created and destroyed by the session layer; the feature engine only
/// borrows it for the duration of a call and never inspects it.
pub type RawHandle = *mut c_void;

/// Feature data type codes reported in [`FeatureInfo::data_type`].
pub mod data_type {
    /// Type unknown to the control library.
    pub const UNKNOWN: u32 = 0;
    /// 64-bit signed integer.
    pub const INT: u32 = 1;
    /// Double-precision float.
    pub const FLOAT: u32 = 2;
    /// Enumeration, addressed by text token.
    pub const ENUM: u32 = 3;
    /// ASCII string.
    pub const STRING: u32 = 4;
    /// Boolean.
    pub const BOOL: u32 = 5;
    /// Command (execute-only), reserved.
    pub const COMMAND: u32 = 6;
    /// Raw byte block, reserved.
    pub const RAW: u32 = 7;
    /// Carries no data, reserved.
    pub const NONE: u32 = 8;
}

/// Feature flag bits reported in [`FeatureInfo::flags`].
pub mod flags {
    /// The feature value can be read.
    pub const READ: u32 = 1;
    /// The feature value can be written.
    pub const WRITE: u32 = 2;
    /// The value may change at any time without a write.
    pub const VOLATILE: u32 = 8;
    /// The value may change as a side effect of writing another feature.
    pub const MODIFY_WRITE: u32 = 16;
}

/// Feature metadata filled in by the native info query.
///
/// The layout is fixed by the vendor ABI; the query takes the caller's
/// idea of the struct size so a mismatched binding fails with a struct
/// size status instead of corrupting memory.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FeatureInfo {
    /// Data type code, see [`data_type`].
    pub data_type: u32,
    /// Vendor-defined flag bits, see [`flags`].
    pub flags: u32,
    /// Suggested polling interval in milliseconds for volatile features.
    pub polling_time: u32,
}

impl FeatureInfo {
    /// Whether the feature value can currently be read.
    pub fn is_readable(&self) -> bool {
        self.flags & flags::READ != 0
    }

    /// Whether the feature value can currently be written.
    pub fn is_writable(&self) -> bool {
        self.flags & flags::WRITE != 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flag_helpers() {
        let info = FeatureInfo {
            data_type: data_type::INT,
            flags: flags::READ | flags::WRITE,
            polling_time: 0,
        };
        assert!(info.is_readable());
        assert!(info.is_writable());

        let read_only = FeatureInfo {
            flags: flags::READ | flags::VOLATILE,
            ..info
        };
        assert!(read_only.is_readable());
        assert!(!read_only.is_writable());
    }
}
