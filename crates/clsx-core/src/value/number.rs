//! Number spelling compatible with ECMAScript `Number::prototype::toString`.
//!
//! Class strings built in a browser spell numbers this way, so `1e21`
//! becomes `"1e+21"` while `0.000001` stays plain.

// Decimal point positions spelled without exponential notation.
const PLAIN_MIN: i32 = -5;
const PLAIN_MAX: i32 = 21;

/// Spell a number the way JavaScript's `String(number)` does.
#[must_use]
#[allow(clippy::float_cmp)]
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    // covers -0 as well
    if value == 0.0 {
        return "0".to_string();
    }

    let sign = if value < 0.0 { "-" } else { "" };

    // `{:e}` yields the shortest round-trip digits, e.g. "1.2345e-7".
    let scientific = format!("{:e}", value.abs());
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return format!("{sign}{scientific}");
    };
    let Ok(exponent) = exponent.parse::<i32>() else {
        return format!("{sign}{scientific}");
    };

    let digits: String = mantissa.chars().filter(|c| *c != '.').collect();
    let body = spell_digits(&digits, exponent + 1);

    format!("{sign}{body}")
}

// Lay out significant `digits` with the decimal point after position `n`.
#[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
fn spell_digits(digits: &str, n: i32) -> String {
    let k = digits.len() as i32;

    if k <= n && n <= PLAIN_MAX {
        return format!("{digits}{}", "0".repeat((n - k) as usize));
    }

    if 0 < n && n <= PLAIN_MAX {
        let (int, frac) = digits.split_at(n as usize);
        return format!("{int}.{frac}");
    }

    if PLAIN_MIN <= n && n <= 0 {
        return format!("0.{}{digits}", "0".repeat((-n) as usize));
    }

    let e = n - 1;
    let e_sign = if e >= 0 { '+' } else { '-' };
    let (head, tail) = digits.split_at(1);
    if tail.is_empty() {
        format!("{head}e{e_sign}{}", e.abs())
    } else {
        format!("{head}.{tail}e{e_sign}{}", e.abs())
    }
}

///
/// TESTS
///
