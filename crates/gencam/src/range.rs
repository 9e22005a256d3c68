//! Range query results.

/// Result of a range query, tagged by the feature's data type.
///
/// The active variant is chosen by the feature's type code, not by the
/// caller. Types with no meaningful range yield [`RangeResult::None`] —
/// a successful "no range exists", deliberately distinct from an error.
#[derive(Debug, Clone, PartialEq)]
pub enum RangeResult {
    /// Inclusive bounds of an integer feature.
    Int {
        /// Smallest accepted value
        min: i64,
        /// Largest accepted value
        max: i64,
    },
    /// Inclusive bounds of a float feature.
    Float {
        /// Smallest accepted value
        min: f64,
        /// Largest accepted value
        max: f64,
    },
    /// Valid tokens of an enum feature, in the vendor's canonical order.
    Enum(Vec<String>),
    /// The feature's type has no meaningful range.
    None,
}

impl RangeResult {
    /// Whether this is the no-range sentinel.
    pub fn is_none(&self) -> bool {
        matches!(self, RangeResult::None)
    }
}
