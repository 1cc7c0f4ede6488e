//! Category identifiers

use serde::{Deserialize, Serialize};
use std::fmt;

/// The fixed set of measurement categories.
///
/// The catalog is keyed by these ids; the variant order is the display
/// order a presentation layer iterates in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CategoryId {
    Pressure,
    Volume,
    Speed,
    Temperature,
    Length,
    Mass,
}

impl CategoryId {
    /// All categories, in display order
    pub const ALL: [CategoryId; 6] = [
        CategoryId::Pressure,
        CategoryId::Volume,
        CategoryId::Speed,
        CategoryId::Temperature,
        CategoryId::Length,
        CategoryId::Mass,
    ];

    /// Stable lowercase key, matching the serialized form
    pub fn as_str(&self) -> &'static str {
        match self {
            CategoryId::Pressure => "pressure",
            CategoryId::Volume => "volume",
            CategoryId::Speed => "speed",
            CategoryId::Temperature => "temperature",
            CategoryId::Length => "length",
            CategoryId::Mass => "mass",
        }
    }

    /// Parse a stable key back into an id
    pub fn from_str(s: &str) -> Option<CategoryId> {
        CategoryId::ALL.into_iter().find(|id| id.as_str() == s)
    }
}

impl fmt::Display for CategoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
