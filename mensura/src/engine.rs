//! Conversion and ratio computation

use mensura_core::{display_value, trimmed_fixed, CategoryId};
use mensura_units::Unit;

/// Sentinel display string for an amount with no valid result
pub const NO_RESULT: &str = "---";

/// Convert a textual amount from one unit to another within a category.
///
/// An amount that does not parse — empty, non-numeric, or NaN — yields the
/// [`NO_RESULT`] sentinel rather than an error; this is the recoverable
/// "nothing to show" state a front end renders as-is. Overflow to infinity
/// and underflow to zero are accepted floating-point outcomes and are
/// formatted, not rejected.
pub fn convert_amount(amount: &str, from: &Unit, to: &Unit) -> String {
    let value = match amount.trim().parse::<f64>() {
        Ok(v) if !v.is_nan() => v,
        _ => return NO_RESULT.to_string(),
    };

    // Two steps through the category's base unit: any unit reaches any
    // other with N conversion pairs instead of N² pairwise functions
    let base = from.to_base(value);
    let target = to.from_base(base);

    display_value(target)
}

/// Render the normalized ratio line: `1 {from} = {value} {to}`.
///
/// Temperature ratios are rarely clean integers, so that category renders
/// the value fixed to 2 decimals; every other category gets the 6-decimal
/// cleanup with trailing zeros stripped.
pub fn unit_ratio(from: &Unit, to: &Unit, category: CategoryId) -> String {
    let one = to.from_base(from.to_base(1.0));

    let value = if category == CategoryId::Temperature {
        format!("{:.2}", one)
    } else {
        trimmed_fixed(one, 6)
    };

    format!("1 {} = {} {}", from.symbol, value, to.symbol)
}

#[cfg(test)]
mod tests {
    use super::*;
    use mensura_units::Catalog;

    fn unit(category: CategoryId, id: &str) -> Unit {
        Catalog::builtin().unit(category, id).unwrap().clone()
    }

    #[test]
    fn test_atmosphere_from_pascal() {
        let pa = unit(CategoryId::Pressure, "pa");
        let atm = unit(CategoryId::Pressure, "atm");
        assert_eq!(convert_amount("101325", &pa, &atm), "1");
    }

    #[test]
    fn test_freezing_point() {
        let c = unit(CategoryId::Temperature, "c");
        let f = unit(CategoryId::Temperature, "f");
        assert_eq!(convert_amount("0", &c, &f), "32");
    }

    #[test]
    fn test_fahrenheit_to_celsius_cut_to_sig_digits() {
        // (100 - 32) × 5/9 = 37.77777777777778; the plain decimal exceeds
        // 10 characters, so the 6-significant-digit rule fires
        let f = unit(CategoryId::Temperature, "f");
        let c = unit(CategoryId::Temperature, "c");
        assert_eq!(convert_amount("100", &f, &c), "37.7778");
    }

    #[test]
    fn test_grams_to_kilograms() {
        let g = unit(CategoryId::Mass, "g");
        let kg = unit(CategoryId::Mass, "kg");
        assert_eq!(convert_amount("1000", &g, &kg), "1");
    }

    #[test]
    fn test_unparseable_amount_is_sentinel() {
        let m = unit(CategoryId::Length, "m");
        let ft = unit(CategoryId::Length, "ft");

        assert_eq!(convert_amount("abc", &m, &ft), NO_RESULT);
        assert_eq!(convert_amount("", &m, &ft), NO_RESULT);
        assert_eq!(convert_amount("12abc", &m, &ft), NO_RESULT);
        assert_eq!(convert_amount("NaN", &m, &ft), NO_RESULT);
    }

    #[test]
    fn test_whitespace_around_amount_is_accepted() {
        let m = unit(CategoryId::Length, "m");
        let km = unit(CategoryId::Length, "km");
        assert_eq!(convert_amount(" 2500 ", &m, &km), "2.5");
    }

    #[test]
    fn test_overflow_formats_as_infinity() {
        let km = unit(CategoryId::Length, "km");
        let mm = unit(CategoryId::Length, "mm");

        // Parses to infinity; conversion and formatting carry it through
        assert_eq!(convert_amount("1e999", &km, &mm), "Infinity");
        assert_eq!(convert_amount("-1e999", &km, &mm), "-Infinity");
    }

    #[test]
    fn test_negative_temperature() {
        let c = unit(CategoryId::Temperature, "c");
        let f = unit(CategoryId::Temperature, "f");
        assert_eq!(convert_amount("-40", &c, &f), "-40");
    }

    #[test]
    fn test_tiny_result_uses_exponential() {
        let mm = unit(CategoryId::Length, "mm");
        let km = unit(CategoryId::Length, "km");
        // 0.0001 mm = 1e-10 km
        assert_eq!(convert_amount("0.0001", &mm, &km), "1.0000e-10");
    }

    #[test]
    fn test_ratio_meter_to_foot() {
        let m = unit(CategoryId::Length, "m");
        let ft = unit(CategoryId::Length, "ft");
        assert_eq!(
            unit_ratio(&m, &ft, CategoryId::Length),
            "1 m = 3.28084 ft"
        );
    }

    #[test]
    fn test_ratio_temperature_keeps_two_decimals() {
        let c = unit(CategoryId::Temperature, "c");
        let f = unit(CategoryId::Temperature, "f");
        assert_eq!(
            unit_ratio(&c, &f, CategoryId::Temperature),
            "1 °C = 33.80 °F"
        );
    }

    #[test]
    fn test_ratio_strips_trailing_zeros() {
        let mpa = unit(CategoryId::Pressure, "mpa");
        let pa = unit(CategoryId::Pressure, "pa");
        assert_eq!(
            unit_ratio(&mpa, &pa, CategoryId::Pressure),
            "1 MPa = 1000000 Pa"
        );
    }

    #[test]
    fn test_ratio_to_same_unit() {
        let kn = unit(CategoryId::Speed, "kn");
        assert_eq!(unit_ratio(&kn, &kn, CategoryId::Speed), "1 kn = 1 kn");
    }
}
