//! Conversion scales - how a unit maps to its category's base unit

use serde::{Deserialize, Serialize};

/// The transform between a unit and its category's base unit.
///
/// Kept as data rather than function values so a catalog stays
/// serializable and inspectable. Both directions are total over the reals;
/// `from_base(to_base(x))` reproduces `x` for all finite `x` within
/// floating-point tolerance.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Scale {
    /// Proportional: 1 unit = `factor` base-units. `factor` is a fixed
    /// positive constant; the base unit itself has factor 1.
    Linear { factor: f64 },
    /// Offset + scaling (temperature): `to_base(v) = (v - offset) * factor`
    Affine { factor: f64, offset: f64 },
}

impl Scale {
    /// The identity scale used by base units
    pub const BASE: Scale = Scale::Linear { factor: 1.0 };

    /// Convert a value in this unit to the category's base unit
    pub fn to_base(&self, value: f64) -> f64 {
        match self {
            Scale::Linear { factor } => value * factor,
            Scale::Affine { factor, offset } => (value - offset) * factor,
        }
    }

    /// Convert a value in the category's base unit back to this unit
    pub fn from_base(&self, base: f64) -> f64 {
        match self {
            Scale::Linear { factor } => base / factor,
            Scale::Affine { factor, offset } => base / factor + offset,
        }
    }

    /// Check if this is the identity scale of a base unit
    pub fn is_base(&self) -> bool {
        matches!(self, Scale::Linear { factor } if *factor == 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mensura_core::{nearly_equal, Tolerances};

    #[test]
    fn test_linear_both_directions() {
        let km = Scale::Linear { factor: 1000.0 };
        assert_eq!(km.to_base(5.0), 5000.0);
        assert_eq!(km.from_base(5000.0), 5.0);
    }

    #[test]
    fn test_affine_fahrenheit() {
        let f = Scale::Affine {
            factor: 5.0 / 9.0,
            offset: 32.0,
        };
        let tol = Tolerances::default();

        assert!(nearly_equal(f.to_base(32.0), 0.0, tol));
        assert!(nearly_equal(f.to_base(212.0), 100.0, tol));
        assert!(nearly_equal(f.from_base(100.0), 212.0, tol));
        // Total over the reals, negative temperatures included
        assert!(nearly_equal(f.to_base(-40.0), -40.0, tol));
    }

    #[test]
    fn test_affine_kelvin() {
        let k = Scale::Affine {
            factor: 1.0,
            offset: 273.15,
        };
        assert_eq!(k.to_base(273.15), 0.0);
        assert_eq!(k.from_base(0.0), 273.15);
    }

    #[test]
    fn test_round_trip() {
        let tol = Tolerances::default();
        let scales = [
            Scale::BASE,
            Scale::Linear { factor: 0.45359237 },
            Scale::Affine {
                factor: 5.0 / 9.0,
                offset: 32.0,
            },
        ];
        for scale in scales {
            for x in [-273.15, -1.0, 0.0, 0.5, 1.0, 101_325.0, 1e9] {
                assert!(
                    nearly_equal(scale.from_base(scale.to_base(x)), x, tol),
                    "round trip failed for {:?} at {}",
                    scale,
                    x
                );
            }
        }
    }

    #[test]
    fn test_is_base() {
        assert!(Scale::BASE.is_base());
        assert!(!Scale::Linear { factor: 1000.0 }.is_base());
        assert!(!Scale::Affine {
            factor: 1.0,
            offset: 273.15
        }
        .is_base());
    }

    #[test]
    fn test_serde_tagged_form() {
        let json = serde_json::to_string(&Scale::Linear { factor: 1000.0 }).unwrap();
        assert_eq!(json, r#"{"kind":"linear","factor":1000.0}"#);

        let back: Scale = serde_json::from_str(r#"{"kind":"affine","factor":1.0,"offset":273.15}"#)
            .unwrap();
        assert_eq!(
            back,
            Scale::Affine {
                factor: 1.0,
                offset: 273.15
            }
        );
    }
}
