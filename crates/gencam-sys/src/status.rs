//! Native status codes.
//!
//! Every function in the call surface returns a [`StatusCode`]; zero is
//! success and any other value is a vendor-reported failure. Codes are
//! preserved verbatim when translated into engine errors so callers can
//! inspect and log the original value.

/// Status code returned by every native call. Zero denotes success.
pub type StatusCode = i32;

/// The call completed successfully.
pub const SUCCESS: StatusCode = 0;

/// Unexpected fault inside the control library.
pub const ERR_INTERNAL_FAULT: StatusCode = -1;
/// The control library has not been initialized.
pub const ERR_NOT_STARTED: StatusCode = -2;
/// The named entity (device or feature) was not found.
pub const ERR_NOT_FOUND: StatusCode = -3;
/// The given handle is not valid.
pub const ERR_BAD_HANDLE: StatusCode = -4;
/// The device is not open.
pub const ERR_DEVICE_NOT_OPEN: StatusCode = -5;
/// The operation is not permitted with the current access mode.
pub const ERR_INVALID_ACCESS: StatusCode = -6;
/// A supplied parameter was invalid.
pub const ERR_BAD_PARAMETER: StatusCode = -7;
/// The given struct size does not match the expected layout.
pub const ERR_STRUCT_SIZE: StatusCode = -8;
/// The supplied buffer was too small for the full result.
pub const ERR_MORE_DATA: StatusCode = -9;
/// The feature's data type does not match the accessor used.
pub const ERR_WRONG_TYPE: StatusCode = -10;
/// The value is out of range or otherwise rejected by the device.
pub const ERR_INVALID_VALUE: StatusCode = -11;
/// The operation timed out.
pub const ERR_TIMEOUT: StatusCode = -12;

/// Sentinel used by the binding itself for "no accessor implemented for
/// this feature type". Never produced by the native side; reserved so
/// callers can tell local dispatch failures apart from device errors.
pub const ERR_NOT_SUPPORTED: StatusCode = -1001;

/// Human-readable description of a known status code.
pub fn status_message(code: StatusCode) -> &'static str {
    match code {
        SUCCESS => "success",
        ERR_INTERNAL_FAULT => "internal fault in the control library",
        ERR_NOT_STARTED => "control library not initialized",
        ERR_NOT_FOUND => "device or feature not found",
        ERR_BAD_HANDLE => "invalid handle",
        ERR_DEVICE_NOT_OPEN => "device not open",
        ERR_INVALID_ACCESS => "operation not permitted with current access mode",
        ERR_BAD_PARAMETER => "invalid parameter",
        ERR_STRUCT_SIZE => "struct size mismatch",
        ERR_MORE_DATA => "buffer too small for result",
        ERR_WRONG_TYPE => "feature data type mismatch",
        ERR_INVALID_VALUE => "value rejected by device",
        ERR_TIMEOUT => "operation timed out",
        ERR_NOT_SUPPORTED => "operation not supported for this feature type",
        _ => "unknown status code",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_codes_have_messages() {
        for code in [
            SUCCESS,
            ERR_INTERNAL_FAULT,
            ERR_NOT_FOUND,
            ERR_BAD_HANDLE,
            ERR_WRONG_TYPE,
            ERR_NOT_SUPPORTED,
        ] {
            assert_ne!(status_message(code), "unknown status code");
        }
    }

    #[test]
    fn test_unknown_code_falls_through() {
        assert_eq!(status_message(-9999), "unknown status code");
    }
}
