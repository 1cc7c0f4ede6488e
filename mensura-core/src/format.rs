//! Display formatting for converted values
//!
//! Converted amounts are shown as strings under a fixed precision policy.
//! The policy favors short, clean decimals: tiny magnitudes switch to
//! exponential notation, unwieldy decimals are cut to significant digits,
//! and everything else is rounded to 6 places with trailing zeros removed
//! so representation noise (`0.1 + 0.2`-class artifacts in short decimals)
//! never reaches the display.

/// Magnitudes strictly below this render in exponential notation
const EXP_THRESHOLD: f64 = 1e-6;

/// Plain decimal strings longer than this fall back to significant digits
const MAX_PLAIN_LEN: usize = 10;

/// Format a converted value for display.
///
/// Rules, first match wins:
/// 1. Non-finite values render literally: `NaN`, `Infinity`, `-Infinity`.
/// 2. Nonzero values with magnitude strictly below 1e-6 use exponential
///    notation with 4 digits after the decimal point (`1.2345e-7`).
/// 3. Values whose plain decimal string runs past 10 characters are cut
///    to 6 significant digits.
/// 4. Everything else is rounded to 6 decimal places and trailing zeros
///    are stripped (`1.500000` → `1.5`, `2.000000` → `2`).
pub fn display_value(v: f64) -> String {
    if v.is_nan() {
        return "NaN".to_string();
    }
    if v.is_infinite() {
        return if v.is_sign_positive() {
            "Infinity".to_string()
        } else {
            "-Infinity".to_string()
        };
    }

    if v != 0.0 && v.abs() < EXP_THRESHOLD {
        return format!("{:.4e}", v);
    }

    // Shortest round-trip decimal; length decides between significant-digit
    // and fixed-decimal rendering
    let plain = format!("{}", v);
    if plain.len() > MAX_PLAIN_LEN {
        return sig_digits(v, 6);
    }

    trimmed_fixed(v, 6)
}

/// Render `v` with the given number of significant digits.
///
/// Fixed-point while the decimal exponent lies in (-7, sigfigs), otherwise
/// mantissa-exponent notation (`1.23457e7`). The exponent carries no sign
/// when positive.
pub fn sig_digits(v: f64, sigfigs: u32) -> String {
    if v == 0.0 {
        return "0".to_string();
    }

    let sigfigs = sigfigs.max(1);
    let exp = v.abs().log10().floor() as i32;

    if exp > -7 && exp < sigfigs as i32 {
        let places = (sigfigs as i32 - 1 - exp).max(0) as usize;
        format!("{:.prec$}", v, prec = places)
    } else {
        let mantissa = v / 10_f64.powi(exp);
        format!("{:.prec$}e{}", mantissa, exp, prec = (sigfigs - 1) as usize)
    }
}

/// Round `v` to `places` decimals and strip trailing zeros and a trailing
/// decimal point. A result that rounds to negative zero is normalized to
/// `0`.
pub fn trimmed_fixed(v: f64, places: usize) -> String {
    let fixed = format!("{:.prec$}", v, prec = places);

    let trimmed = if fixed.contains('.') {
        fixed.trim_end_matches('0').trim_end_matches('.')
    } else {
        fixed.as_str()
    };

    if trimmed == "-0" {
        return "0".to_string();
    }
    trimmed.to_string()
}
