//! Dynamic loading of the vendor control library.
//!
//! The vendor ships its control API as a shared library (.so, .dylib,
//! .dll). [`VendorLibrary`] opens it and resolves the feature-access
//! catalog from its exported symbols into a [`CallTable`].

use std::ffi::{CStr, CString};
use std::path::Path;

use thiserror::Error;

use crate::table::CallTable;

/// Errors that can occur while loading the vendor library.
#[derive(Debug, Error)]
pub enum LoadError {
    /// Library file not found or could not be loaded
    #[error("library not found: {path}")]
    NotFound {
        /// Path that was attempted
        path: String,
    },

    /// Symbol not found in the library
    #[error("symbol not found: {symbol} in {library}")]
    SymbolNotFound {
        /// Symbol name that was not found
        symbol: String,
        /// Library path
        library: String,
    },

    /// Platform-specific error
    #[error("platform error: {0}")]
    PlatformError(String),

    /// Invalid path encoding
    #[error("invalid UTF-8 in path: {0}")]
    InvalidPath(String),
}

/// Handle to a loaded vendor control library.
///
/// The library stays loaded for the lifetime of this value; any
/// [`CallTable`] resolved from it must not outlive it.
#[derive(Debug)]
pub struct VendorLibrary {
    handle: PlatformHandle,
    path: String,
}

impl VendorLibrary {
    /// Load the vendor library from the given path.
    ///
    /// On unix this is `dlopen` with `RTLD_NOW | RTLD_LOCAL`: every
    /// catalog symbol is bound up front, and the vendor's symbols are
    /// not leaked into lookups by later-loaded libraries. On windows it
    /// is `LoadLibraryW`.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, LoadError> {
        let path_ref = path.as_ref();
        let path_str = path_ref
            .to_str()
            .ok_or_else(|| LoadError::InvalidPath(format!("{:?}", path_ref)))?;

        let handle = PlatformHandle::load(path_str)?;

        Ok(VendorLibrary {
            handle,
            path: path_str.to_string(),
        })
    }

    /// Get a function pointer by exported symbol name.
    ///
    /// # Safety
    ///
    /// The caller must ensure:
    /// - the symbol name is correct
    /// - the function signature matches the type T
    /// - the library remains loaded while the function is in use
    pub unsafe fn get<T>(&self, symbol: &str) -> Result<T, LoadError> {
        self.handle.symbol(symbol, &self.path)
    }

    /// Resolve the complete feature-access function table.
    ///
    /// Fails with [`LoadError::SymbolNotFound`] if the library does not
    /// export the full catalog. The returned table copies the raw
    /// pointers; it is only valid while this library stays loaded.
    pub fn call_table(&self) -> Result<CallTable, LoadError> {
        unsafe {
            Ok(CallTable {
                info_query: self.get("GcFeatureInfoQuery")?,
                int_get: self.get("GcFeatureIntGet")?,
                int_set: self.get("GcFeatureIntSet")?,
                float_get: self.get("GcFeatureFloatGet")?,
                float_set: self.get("GcFeatureFloatSet")?,
                bool_get: self.get("GcFeatureBoolGet")?,
                bool_set: self.get("GcFeatureBoolSet")?,
                string_get: self.get("GcFeatureStringGet")?,
                string_set: self.get("GcFeatureStringSet")?,
                enum_get: self.get("GcFeatureEnumGet")?,
                enum_set: self.get("GcFeatureEnumSet")?,
                int_range_query: self.get("GcFeatureIntRangeQuery")?,
                float_range_query: self.get("GcFeatureFloatRangeQuery")?,
                enum_range_query: self.get("GcFeatureEnumRangeQuery")?,
            })
        }
    }

    /// Get the path this library was loaded from
    pub fn path(&self) -> &str {
        &self.path
    }
}

#[cfg(unix)]
type PlatformHandle = DlHandle;

#[cfg(windows)]
type PlatformHandle = Win32Handle;

// ---- unix (Linux, macOS, BSD) --------------------------------------------

#[cfg(unix)]
#[derive(Debug)]
struct DlHandle {
    raw: *mut std::ffi::c_void,
}

#[cfg(unix)]
impl DlHandle {
    fn load(path: &str) -> Result<Self, LoadError> {
        let c_path = CString::new(path)
            .map_err(|e| LoadError::PlatformError(format!("invalid path: {}", e)))?;

        let raw = unsafe { libc::dlopen(c_path.as_ptr(), libc::RTLD_NOW | libc::RTLD_LOCAL) };
        if raw.is_null() {
            let detail = last_dl_error().unwrap_or_else(|| "unknown error".to_string());
            return Err(LoadError::NotFound {
                path: format!("{}: {}", path, detail),
            });
        }

        Ok(DlHandle { raw })
    }

    unsafe fn symbol<T>(&self, name: &str, lib_path: &str) -> Result<T, LoadError> {
        let c_name = CString::new(name)
            .map_err(|e| LoadError::PlatformError(format!("invalid symbol name: {}", e)))?;

        // dlsym can legitimately return null, so the stale-error state
        // must be drained first and dlerror consulted afterwards.
        last_dl_error();
        let addr = libc::dlsym(self.raw, c_name.as_ptr());

        if let Some(detail) = last_dl_error() {
            return Err(LoadError::SymbolNotFound {
                symbol: name.to_string(),
                library: format!("{}: {}", lib_path, detail),
            });
        }
        if addr.is_null() {
            return Err(LoadError::SymbolNotFound {
                symbol: name.to_string(),
                library: lib_path.to_string(),
            });
        }

        Ok(std::mem::transmute_copy(&addr))
    }
}

/// Take and clear the thread's pending `dlerror` message, if any.
#[cfg(unix)]
fn last_dl_error() -> Option<String> {
    unsafe {
        let msg = libc::dlerror();
        if msg.is_null() {
            None
        } else {
            Some(CStr::from_ptr(msg).to_string_lossy().into_owned())
        }
    }
}

#[cfg(unix)]
impl Drop for DlHandle {
    fn drop(&mut self) {
        unsafe {
            libc::dlclose(self.raw);
        }
    }
}

#[cfg(unix)]
unsafe impl Send for DlHandle {}
#[cfg(unix)]
unsafe impl Sync for DlHandle {}

// ---- windows -------------------------------------------------------------

#[cfg(windows)]
#[derive(Debug)]
struct Win32Handle {
    raw: *mut std::ffi::c_void,
}

#[cfg(windows)]
impl Win32Handle {
    fn load(path: &str) -> Result<Self, LoadError> {
        use std::ffi::OsStr;
        use std::os::windows::ffi::OsStrExt;

        // LoadLibraryW wants a NUL-terminated UTF-16 path.
        let wide: Vec<u16> = OsStr::new(path)
            .encode_wide()
            .chain(std::iter::once(0))
            .collect();

        let raw = unsafe { LoadLibraryW(wide.as_ptr()) };
        if raw.is_null() {
            let code = unsafe { GetLastError() };
            return Err(LoadError::NotFound {
                path: format!("{} (error code: {})", path, code),
            });
        }

        Ok(Win32Handle { raw })
    }

    unsafe fn symbol<T>(&self, name: &str, lib_path: &str) -> Result<T, LoadError> {
        let c_name = CString::new(name)
            .map_err(|e| LoadError::PlatformError(format!("invalid symbol name: {}", e)))?;

        let addr = GetProcAddress(self.raw, c_name.as_ptr());
        if addr.is_null() {
            let code = GetLastError();
            return Err(LoadError::SymbolNotFound {
                symbol: name.to_string(),
                library: format!("{} (error code: {})", lib_path, code),
            });
        }

        Ok(std::mem::transmute_copy(&addr))
    }
}

#[cfg(windows)]
impl Drop for Win32Handle {
    fn drop(&mut self) {
        unsafe {
            FreeLibrary(self.raw);
        }
    }
}

#[cfg(windows)]
unsafe impl Send for Win32Handle {}
#[cfg(windows)]
unsafe impl Sync for Win32Handle {}

#[cfg(windows)]
extern "system" {
    fn LoadLibraryW(filename: *const u16) -> *mut std::ffi::c_void;
    fn GetProcAddress(
        module: *mut std::ffi::c_void,
        procname: *const i8,
    ) -> *mut std::ffi::c_void;
    fn FreeLibrary(module: *mut std::ffi::c_void) -> i32;
    fn GetLastError() -> u32;
}
