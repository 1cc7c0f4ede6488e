//! Measurement categories

use crate::Unit;
use mensura_core::CategoryId;
use serde::{Deserialize, Serialize};

/// A measurement category: an ordered, non-empty list of units sharing one
/// base unit.
///
/// Unit order matters: it is the order a presentation layer lists units in,
/// and it determines the default selection when the category is activated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    /// Display name (e.g. "Pressure")
    pub name: String,
    /// Icon reference for the presentation layer (Material Symbol name)
    pub icon: String,
    /// Suggested starting amount when this category is selected
    pub sample_amount: String,
    /// Ordered, non-empty unit list; the base unit leads
    pub units: Vec<Unit>,
}

impl Category {
    pub fn new(
        id: CategoryId,
        name: &str,
        icon: &str,
        sample_amount: &str,
        units: Vec<Unit>,
    ) -> Self {
        Category {
            id,
            name: name.to_string(),
            icon: icon.to_string(),
            sample_amount: sample_amount.to_string(),
            units,
        }
    }

    /// Find a unit by id within this category
    pub fn unit(&self, id: &str) -> Option<&Unit> {
        self.units.iter().find(|u| u.id == id)
    }

    /// Default "from" unit: the first in the list
    pub fn default_from(&self) -> &Unit {
        &self.units[0]
    }

    /// Default "to" unit: the second in the list, or the first if the
    /// category has a single unit
    pub fn default_to(&self) -> &Unit {
        self.units.get(1).unwrap_or(&self.units[0])
    }
}
