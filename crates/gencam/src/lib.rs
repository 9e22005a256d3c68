//! Typed, name-addressed feature access for camera control libraries.
//!
//! A feature's data type is not known statically; it is discovered at
//! runtime from the device and then selects the marshalling path for
//! get, set, and range operations across the native boundary.
//!
//! # Example
//!
//! ```ignore
//! use gencam::{Feature, FeatureValue};
//!
//! let lib = gencam_sys::VendorLibrary::open("./libvendorcam.so")?;
//! let api = lib.call_table()?;
//! // `handle` comes from the session layer that opened the camera.
//! let gain = Feature::new(&api, handle, "Gain")?;
//! gain.set(10i64)?;
//! assert_eq!(gain.value()?, FeatureValue::Int(10));
//! ```
//!
//! All operations are synchronous, blocking foreign calls with no
//! retries, caching, or internal locking; callers must serialize
//! operations against the same handle, since the underlying session is
//! not documented as thread-safe.

#![warn(missing_docs)]

mod descriptor;
mod dispatch;
mod encode;
mod twophase;

pub mod error;
pub mod feature;
pub mod range;
pub mod value;

pub use descriptor::FeatureDataType;
pub use error::{Error, Result};
pub use feature::{Feature, STRING_BUFFER_CAPACITY};
pub use range::RangeResult;
pub use value::FeatureValue;
