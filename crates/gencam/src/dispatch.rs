//! Typed accessor dispatch.
//!
//! Pure selection logic: maps a discovered data type onto the accessor
//! pair and range query that marshal it. No I/O happens here. Every
//! type without an implemented accessor gets one that deterministically
//! fails with `NotSupported` — independent of handle and name — and a
//! range query that reports the no-range sentinel instead of failing.

use crate::descriptor::FeatureDataType;
use crate::error::{Error, Result};
use crate::feature::{self, Feature};
use crate::range::RangeResult;
use crate::value::FeatureValue;

pub(crate) type GetFn = fn(&Feature<'_>) -> Result<FeatureValue>;
pub(crate) type SetFn = fn(&Feature<'_>, FeatureValue) -> Result<()>;
pub(crate) type RangeFn = fn(&Feature<'_>) -> Result<RangeResult>;

/// Value accessor pair for one data type.
pub(crate) struct Accessors {
    pub get: GetFn,
    pub set: SetFn,
}

/// Select the value accessors for a data type.
pub(crate) fn accessors(ty: FeatureDataType) -> Accessors {
    match ty {
        FeatureDataType::Int => Accessors {
            get: feature::get_int,
            set: feature::set_int,
        },
        FeatureDataType::Float => Accessors {
            get: feature::get_float,
            set: feature::set_float,
        },
        FeatureDataType::Enum => Accessors {
            get: feature::get_enum,
            set: feature::set_enum,
        },
        FeatureDataType::Str => Accessors {
            get: feature::get_string,
            set: feature::set_string,
        },
        FeatureDataType::Bool => Accessors {
            get: feature::get_bool,
            set: feature::set_bool,
        },
        FeatureDataType::Unknown
        | FeatureDataType::Command
        | FeatureDataType::Raw
        | FeatureDataType::None => Accessors {
            get: not_implemented_get,
            set: not_implemented_set,
        },
    }
}

/// Select the range query for a data type.
pub(crate) fn range_query(ty: FeatureDataType) -> RangeFn {
    match ty {
        FeatureDataType::Int => feature::range_int,
        FeatureDataType::Float => feature::range_float,
        FeatureDataType::Enum => feature::range_enum,
        FeatureDataType::Str
        | FeatureDataType::Bool
        | FeatureDataType::Unknown
        | FeatureDataType::Command
        | FeatureDataType::Raw
        | FeatureDataType::None => no_range,
    }
}

fn not_implemented_get(_feature: &Feature<'_>) -> Result<FeatureValue> {
    Err(Error::NotSupported)
}

fn not_implemented_set(_feature: &Feature<'_>, _value: FeatureValue) -> Result<()> {
    Err(Error::NotSupported)
}

fn no_range(_feature: &Feature<'_>) -> Result<RangeResult> {
    Ok(RangeResult::None)
}
