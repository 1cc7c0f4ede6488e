//! Unit representation

use crate::Scale;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A unit of measurement within one category.
///
/// Immutable after construction. The id is unique within its category and
/// is the key used by the lookup API; name and symbol are display strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Unit {
    /// Stable key (e.g. "kpa", "ft")
    pub id: String,
    /// Display name (e.g. "Kilopascal", "Foot")
    pub name: String,
    /// Display symbol (e.g. "kPa", "ft")
    pub symbol: String,
    /// Transform to/from the category's base unit
    pub scale: Scale,
}

impl Unit {
    /// Create a proportional unit: 1 unit = `factor` base-units
    pub fn linear(id: &str, name: &str, symbol: &str, factor: f64) -> Self {
        Unit {
            id: id.to_string(),
            name: name.to_string(),
            symbol: symbol.to_string(),
            scale: Scale::Linear { factor },
        }
    }

    /// Create an offset unit (temperature scales)
    pub fn affine(id: &str, name: &str, symbol: &str, factor: f64, offset: f64) -> Self {
        Unit {
            id: id.to_string(),
            name: name.to_string(),
            symbol: symbol.to_string(),
            scale: Scale::Affine { factor, offset },
        }
    }

    /// Check if this is the category's base unit
    pub fn is_base(&self) -> bool {
        self.scale.is_base()
    }

    /// Convert a value in this unit to the category's base unit
    pub fn to_base(&self, value: f64) -> f64 {
        self.scale.to_base(value)
    }

    /// Convert a value in the category's base unit to this unit
    pub fn from_base(&self, base: f64) -> f64 {
        self.scale.from_base(base)
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol)
    }
}
