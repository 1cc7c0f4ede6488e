//! Mensura Units - Measurement categories and unit conversion scales
//!
//! Provides the catalog of measurement categories, each holding an ordered
//! list of units that convert to and from the category's base unit.
//!
//! Categories and base units:
//! - Pressure (Pa)
//! - Volume (L)
//! - Speed (m/s)
//! - Temperature (°C)
//! - Length (m)
//! - Mass (kg)
//!
//! The catalog is constructed once ([`Catalog::builtin`]) and read-only
//! afterwards; a substitute catalog can be built from any category table
//! ([`Catalog::new`]) for testing the engine in isolation.

mod catalog;
mod category;
mod scale;
mod unit;

pub use catalog::{Catalog, LookupError};
pub use category::Category;
pub use scale::Scale;
pub use unit::Unit;

pub use mensura_core::CategoryId;
