//! The unit catalog - all categories and their built-in unit tables

use crate::{Category, Unit};
use mensura_core::CategoryId;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Lookup failure. Well-formed ids originate from the catalog's own
/// listings, so hitting this signals a programming or configuration defect
/// rather than a recoverable runtime condition.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LookupError {
    #[error("unknown category: {id}")]
    CategoryNotFound { id: CategoryId },

    #[error("unknown unit '{unit}' in category {category}")]
    UnitNotFound { category: CategoryId, unit: String },
}

/// The full ordered list of categories, fixed at construction and
/// read-only for the lifetime of the program.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    categories: Vec<Category>,
}

impl Catalog {
    /// Build a catalog from an explicit category table. Used by tests to
    /// drive the engine with substitute catalogs.
    pub fn new(categories: Vec<Category>) -> Self {
        Catalog { categories }
    }

    /// The built-in catalog
    pub fn builtin() -> Self {
        Catalog::new(vec![
            pressure(),
            volume(),
            speed(),
            temperature(),
            length(),
            mass(),
        ])
    }

    /// All categories, in display order
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Get a category by id
    pub fn category(&self, id: CategoryId) -> Result<&Category, LookupError> {
        self.categories
            .iter()
            .find(|c| c.id == id)
            .ok_or(LookupError::CategoryNotFound { id })
    }

    /// Get a unit by category and unit id
    pub fn unit(&self, category: CategoryId, unit: &str) -> Result<&Unit, LookupError> {
        self.category(category)?
            .unit(unit)
            .ok_or_else(|| LookupError::UnitNotFound {
                category,
                unit: unit.to_string(),
            })
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

fn pressure() -> Category {
    Category::new(
        CategoryId::Pressure,
        "Pressure",
        "compress",
        "101325",
        vec![
            Unit::linear("pa", "Pascal", "Pa", 1.0),
            Unit::linear("kpa", "Kilopascal", "kPa", 1000.0),
            Unit::linear("mpa", "Megapascal", "MPa", 1_000_000.0),
            Unit::linear("bar", "Bar", "bar", 100_000.0),
            // 1 psi = 6894.757 Pa
            Unit::linear("psi", "PSI", "psi", 6894.757),
            // kgf/cm² is standard gravity 9.80665 × 10000, exact
            Unit::linear("kgf", "Kilogram-force/cm²", "kgf/cm²", 98066.5),
            Unit::linear("atm", "Atmosphere", "atm", 101_325.0),
            Unit::linear("torr", "Torr", "Torr", 133.322368),
            Unit::linear("mmhg", "mmHg", "mmHg", 133.322387),
        ],
    )
}

fn volume() -> Category {
    Category::new(
        CategoryId::Volume,
        "Volume",
        "square",
        "1",
        vec![
            Unit::linear("l", "Liter", "L", 1.0),
            Unit::linear("ml", "Milliliter", "mL", 0.001),
            // US gallon = 3.785411784 L
            Unit::linear("gal", "Gallon (US)", "gal", 3.785412),
            // US fluid ounce = 29.5735296 mL
            Unit::linear("floz", "Fluid Ounce", "fl oz", 0.02957353),
            Unit::linear("m3", "Cubic Meter", "m³", 1000.0),
        ],
    )
}

fn speed() -> Category {
    Category::new(
        CategoryId::Speed,
        "Speed",
        "speed",
        "100",
        vec![
            Unit::linear("mps", "Meter per second", "m/s", 1.0),
            // 1 km/h = 1/3.6 m/s
            Unit::linear("kmh", "Kilometer per hour", "km/h", 0.27777778),
            Unit::linear("mph", "Miles per hour", "mph", 0.44704),
            Unit::linear("kn", "Knot", "kn", 0.514444),
            Unit::linear("ft", "Foot per second", "ft/s", 0.3048),
        ],
    )
}

fn temperature() -> Category {
    Category::new(
        CategoryId::Temperature,
        "Temp",
        "thermometer",
        "25",
        vec![
            // Celsius is the base: identity both directions
            Unit::linear("c", "Celsius", "°C", 1.0),
            // °C = (°F - 32) × 5/9
            Unit::affine("f", "Fahrenheit", "°F", 5.0 / 9.0, 32.0),
            // °C = K - 273.15
            Unit::affine("k", "Kelvin", "K", 1.0, 273.15),
        ],
    )
}

fn length() -> Category {
    Category::new(
        CategoryId::Length,
        "Length",
        "straighten",
        "1",
        vec![
            Unit::linear("m", "Meter", "m", 1.0),
            Unit::linear("km", "Kilometer", "km", 1000.0),
            Unit::linear("cm", "Centimeter", "cm", 0.01),
            Unit::linear("mm", "Millimeter", "mm", 0.001),
            // International mile is exactly 1609.344 m
            Unit::linear("mi", "Mile", "mi", 1609.344),
            // International foot is exactly 0.3048 m
            Unit::linear("ft", "Foot", "ft", 0.3048),
            // International inch is exactly 0.0254 m
            Unit::linear("in", "Inch", "in", 0.0254),
        ],
    )
}

fn mass() -> Category {
    Category::new(
        CategoryId::Mass,
        "Mass",
        "scale",
        "1",
        vec![
            Unit::linear("kg", "Kilogram", "kg", 1.0),
            Unit::linear("g", "Gram", "g", 0.001),
            // Avoirdupois pound is exactly 0.45359237 kg
            Unit::linear("lb", "Pound", "lb", 0.45359237),
            Unit::linear("oz", "Ounce", "oz", 0.0283495231),
            Unit::linear("t", "Metric Ton", "t", 1000.0),
        ],
    )
}
