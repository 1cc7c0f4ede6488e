//! Mensura Core - Fundamental types
//!
//! This crate provides the types shared across Mensura:
//! - `CategoryId`: the fixed set of measurement categories
//! - display formatting for converted `f64` values
//! - float comparison helpers for tests

mod format;
mod ids;
mod numeric;

pub use format::{display_value, sig_digits, trimmed_fixed};
pub use ids::CategoryId;
pub use numeric::{nearly_equal, Tolerances};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{display_value, CategoryId};
}
