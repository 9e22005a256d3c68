//! Raw native call surface for GenICam-style camera control libraries.
//!
//! This crate describes the C ABI consumed by the `gencam` feature engine:
//! - status codes returned by every native call ([`status`])
//! - boundary data layouts: handles, descriptors, type codes ([`types`])
//! - the fixed function-pointer catalog for feature access ([`table`])
//! - a loader that resolves the catalog from a vendor shared library
//!   at runtime ([`loader`])
//!
//! Nothing here performs device I/O on its own; the types describe the
//! boundary, and the loader produces a [`CallTable`] for the engine to
//! invoke.

#![warn(missing_docs)]

pub mod loader;
pub mod status;
pub mod table;
pub mod types;

pub use loader::{LoadError, VendorLibrary};
pub use status::{StatusCode, SUCCESS};
pub use table::CallTable;
pub use types::{data_type, flags, FeatureInfo, RawHandle};
