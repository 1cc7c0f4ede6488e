//! Mensura - Unit conversion for presentation layers
//!
//! Converts a numeric quantity between units within a fixed set of
//! measurement categories and formats the result for display. The engine
//! is pure and synchronous: the catalog is read-only after construction,
//! every operation is a function of its inputs, and nothing here blocks,
//! retries, or mutates shared state.
//!
//! The [`Converter`] facade is the in-process API a front end consumes:
//! category/unit listings, [`Converter::convert`], and the
//! [`Converter::ratio`] footer line. The catalog is passed in explicitly
//! so tests can substitute their own tables.

mod engine;

pub use engine::{convert_amount, unit_ratio, NO_RESULT};
pub use mensura_core::CategoryId;
pub use mensura_units::{Catalog, Category, LookupError, Scale, Unit};

use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Listing row for the category navigation
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryListing {
    pub id: CategoryId,
    pub name: String,
    pub icon: String,
}

/// Listing row for the unit selectors
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UnitListing {
    pub id: String,
    pub name: String,
    pub symbol: String,
}

/// The current from/to unit pair within one category.
///
/// Swapping is a pure relabeling of the two ids - no conversion state is
/// recomputed, so converting after a swap is identical to converting with
/// the roles exchanged from the start.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Selection {
    pub category: CategoryId,
    pub from: String,
    pub to: String,
}

impl Selection {
    /// The default selection for a category: first unit converts to the
    /// second, or to itself if the category has a single unit
    pub fn for_category(category: &Category) -> Self {
        Selection {
            category: category.id,
            from: category.default_from().id.clone(),
            to: category.default_to().id.clone(),
        }
    }

    /// Exchange the "from" and "to" roles
    pub fn swapped(&self) -> Self {
        Selection {
            category: self.category,
            from: self.to.clone(),
            to: self.from.clone(),
        }
    }
}

/// Main conversion engine
pub struct Converter {
    catalog: Arc<Catalog>,
}

impl Converter {
    /// Create an engine over an explicit catalog
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog: Arc::new(catalog),
        }
    }

    /// Create an engine over the built-in catalog
    pub fn builtin() -> Self {
        Self::new(Catalog::builtin())
    }

    /// Read access to the underlying catalog
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Ordered category rows for the navigation strip
    pub fn categories(&self) -> Vec<CategoryListing> {
        self.catalog
            .categories()
            .iter()
            .map(|c| CategoryListing {
                id: c.id,
                name: c.name.clone(),
                icon: c.icon.clone(),
            })
            .collect()
    }

    /// Ordered unit rows for a category's selectors
    pub fn units(&self, category: CategoryId) -> Result<Vec<UnitListing>, LookupError> {
        Ok(self
            .catalog
            .category(category)?
            .units
            .iter()
            .map(|u| UnitListing {
                id: u.id.clone(),
                name: u.name.clone(),
                symbol: u.symbol.clone(),
            })
            .collect())
    }

    /// The default selection for a freshly activated category
    pub fn selection(&self, category: CategoryId) -> Result<Selection, LookupError> {
        Ok(Selection::for_category(self.catalog.category(category)?))
    }

    /// Convert a textual amount between two units of a category.
    ///
    /// Unknown ids are a precondition violation reported as
    /// [`LookupError`]; an unparseable amount is not an error and yields
    /// the [`NO_RESULT`] sentinel.
    pub fn convert(
        &self,
        amount: &str,
        category: CategoryId,
        from: &str,
        to: &str,
    ) -> Result<String, LookupError> {
        let from = self.catalog.unit(category, from)?;
        let to = self.catalog.unit(category, to)?;
        Ok(convert_amount(amount, from, to))
    }

    /// Convert using a [`Selection`]
    pub fn convert_selected(
        &self,
        amount: &str,
        selection: &Selection,
    ) -> Result<String, LookupError> {
        self.convert(amount, selection.category, &selection.from, &selection.to)
    }

    /// The normalized "1 X = Y Z" ratio line for a unit pair
    pub fn ratio(
        &self,
        category: CategoryId,
        from: &str,
        to: &str,
    ) -> Result<String, LookupError> {
        let from = self.catalog.unit(category, from)?;
        let to = self.catalog.unit(category, to)?;
        Ok(unit_ratio(from, to, category))
    }
}

impl Default for Converter {
    fn default() -> Self {
        Self::builtin()
    }
}
