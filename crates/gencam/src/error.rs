//! Error types for feature operations.

use gencam_sys::status::{self, StatusCode};

/// Result type for feature operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced by the feature engine.
///
/// [`Error::Native`] preserves the vendor status code verbatim for
/// caller inspection and logging. [`Error::NotSupported`] is raised
/// purely by local dispatch before any native call is attempted.
/// Propagation is fail-fast: the first failure aborts the operation
/// with no retries and no partial results.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    /// A native call returned a non-zero status code.
    #[error("native call failed with status {0}: {msg}", msg = status::status_message(*.0))]
    Native(StatusCode),

    /// No accessor is implemented for the feature's data type.
    #[error("operation not supported for this feature type")]
    NotSupported,

    /// The supplied value's variant does not match the feature's type.
    #[error("type mismatch: feature expects {expected}, got {got}")]
    TypeMismatch {
        /// Kind required by the feature's descriptor
        expected: &'static str,
        /// Kind of the value actually supplied
        got: &'static str,
    },

    /// Text with an embedded NUL byte cannot cross the boundary.
    #[error("text contains an embedded NUL byte")]
    EmbeddedNul,

    /// The native side reported success but returned inconsistent data,
    /// such as a null token or fewer range tokens than it counted.
    #[error("inconsistent native result: {0}")]
    Inconsistent(String),
}

impl Error {
    /// Status code for this error.
    ///
    /// `Native` yields the verbatim vendor code; the locally raised
    /// variants map onto reserved or closest-matching codes so callers
    /// that only see numbers can still tell dispatch failures
    /// ([`status::ERR_NOT_SUPPORTED`]) apart from device errors.
    pub fn status(&self) -> StatusCode {
        match self {
            Error::Native(code) => *code,
            Error::NotSupported => status::ERR_NOT_SUPPORTED,
            Error::TypeMismatch { .. } => status::ERR_WRONG_TYPE,
            Error::EmbeddedNul => status::ERR_BAD_PARAMETER,
            Error::Inconsistent(_) => status::ERR_INTERNAL_FAULT,
        }
    }
}

/// Translate a native status code: zero becomes `Ok`, anything else a
/// verbatim [`Error::Native`]. Every accessor funnels its native calls
/// through here.
pub(crate) fn check(code: StatusCode) -> Result<()> {
    if code == status::SUCCESS {
        Ok(())
    } else {
        Err(Error::Native(code))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_preserves_code() {
        assert_eq!(check(status::SUCCESS), Ok(()));
        assert_eq!(check(status::ERR_TIMEOUT), Err(Error::Native(status::ERR_TIMEOUT)));
        assert_eq!(check(-42), Err(Error::Native(-42)));
    }

    #[test]
    fn test_status_sentinel_is_local() {
        // The sentinel must be distinguishable from genuine native codes.
        assert_eq!(Error::NotSupported.status(), status::ERR_NOT_SUPPORTED);
        assert_ne!(Error::Native(status::ERR_TIMEOUT).status(), status::ERR_NOT_SUPPORTED);
    }

    #[test]
    fn test_native_display_includes_code() {
        let msg = Error::Native(status::ERR_NOT_FOUND).to_string();
        assert!(msg.contains("-3"), "message was: {msg}");
    }
}
