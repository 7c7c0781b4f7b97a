/// Converts an `i64` to the nearest `f64`.
///
/// Every `i64` has a finite nearest `f64`, so the conversion cannot fail; it
/// rounds for magnitudes above `2^53`, as promotion of an integer to a real
/// does.
///
/// ## Example
/// ```
/// use reckon::util::num::i64_to_f64;
///
/// assert_eq!(i64_to_f64(42), 42.0);
/// assert_eq!(i64_to_f64(i64::MAX), 9_223_372_036_854_775_807.0);
/// ```
#[allow(clippy::cast_precision_loss)]
#[must_use]
pub const fn i64_to_f64(value: i64) -> f64 {
    value as f64
}

/// Converts an `f64` to `i64` if the value is finite, integral and within
/// range.
///
/// # Returns
/// - `Some(i64)`: The exact integer value.
/// - `None`: For fractional, non-finite or out-of-range input.
///
/// # Example
/// ```
/// use reckon::util::num::f64_to_i64_exact;
///
/// assert_eq!(f64_to_i64_exact(1000.0), Some(1000));
/// assert_eq!(f64_to_i64_exact(1.5), None);
/// assert_eq!(f64_to_i64_exact(1e20), None);
/// assert_eq!(f64_to_i64_exact(f64::NAN), None);
/// ```
#[allow(clippy::cast_possible_truncation, clippy::float_cmp)]
#[must_use]
pub fn f64_to_i64_exact(value: f64) -> Option<i64> {
    // 2^63 is exactly representable; i64::MAX is not.
    const LIMIT: f64 = 9_223_372_036_854_775_808.0;

    if !value.is_finite() || value.trunc() != value || value >= LIMIT || value < -LIMIT {
        return None;
    }
    Some(value as i64)
}

/// Integer floor division, rounding towards negative infinity.
///
/// Returns `None` if `rhs` is zero or the quotient overflows
/// (`i64::MIN // -1`).
///
/// # Example
/// ```
/// use reckon::util::num::floor_div_i64;
///
/// assert_eq!(floor_div_i64(7, 2), Some(3));
/// assert_eq!(floor_div_i64(-7, 2), Some(-4));
/// assert_eq!(floor_div_i64(7, 0), None);
/// ```
#[must_use]
pub const fn floor_div_i64(lhs: i64, rhs: i64) -> Option<i64> {
    let Some(quotient) = lhs.checked_div(rhs) else {
        return None;
    };
    if lhs % rhs != 0 && ((lhs < 0) != (rhs < 0)) {
        return Some(quotient - 1);
    }
    Some(quotient)
}

/// Integer modulo whose result carries the sign of the divisor.
///
/// Returns `None` if `rhs` is zero.
///
/// # Example
/// ```
/// use reckon::util::num::floor_mod_i64;
///
/// assert_eq!(floor_mod_i64(-7, 3), Some(2));
/// assert_eq!(floor_mod_i64(7, -3), Some(-2));
/// assert_eq!(floor_mod_i64(i64::MIN, -1), Some(0));
/// ```
#[must_use]
pub const fn floor_mod_i64(lhs: i64, rhs: i64) -> Option<i64> {
    if rhs == 0 {
        return None;
    }
    let Some(remainder) = lhs.checked_rem(rhs) else {
        return Some(0);
    };
    if remainder != 0 && ((remainder < 0) != (rhs < 0)) {
        return Some(remainder + rhs);
    }
    Some(remainder)
}

/// Real floor division and modulo, computed together.
///
/// The modulo carries the sign of the divisor and the quotient is the floor
/// of the exact quotient, corrected for rounding in `lhs - modulo`. The
/// divisor must not be zero.
///
/// # Returns
/// `(quotient, modulo)`
///
/// # Example
/// ```
/// use reckon::util::num::floor_divmod_f64;
///
/// assert_eq!(floor_divmod_f64(7.5, 2.0), (3.0, 1.5));
/// assert_eq!(floor_divmod_f64(-7.5, 2.0), (-4.0, 0.5));
/// assert_eq!(floor_divmod_f64(7.5, -2.0), (-4.0, -0.5));
/// ```
#[must_use]
pub fn floor_divmod_f64(lhs: f64, rhs: f64) -> (f64, f64) {
    let mut modulo = lhs % rhs;
    let mut div = (lhs - modulo) / rhs;

    if modulo == 0.0 {
        modulo = 0.0_f64.copysign(rhs);
    } else if (rhs < 0.0) != (modulo < 0.0) {
        modulo += rhs;
        div -= 1.0;
    }

    let quotient = if div == 0.0 {
        0.0_f64.copysign(lhs / rhs)
    } else {
        let floored = div.floor();
        if div - floored > 0.5 { floored + 1.0 } else { floored }
    };

    (quotient, modulo)
}

#[cfg(test)]
mod tests {
    use super::{f64_to_i64_exact, floor_div_i64, floor_divmod_f64, floor_mod_i64};

    #[test]
    fn integer_floor_division_matches_modulo() {
        for (a, b) in [(7, 2), (-7, 2), (7, -2), (-7, -2), (0, 5), (6, 3), (-6, 3)] {
            let q = floor_div_i64(a, b).unwrap();
            let r = floor_mod_i64(a, b).unwrap();
            assert_eq!(q * b + r, a, "{a} // {b}");
        }
    }

    #[test]
    fn integer_floor_division_overflow() {
        assert_eq!(floor_div_i64(i64::MIN, -1), None);
    }

    #[test]
    fn real_modulo_of_negative_zero_divisor_sign() {
        let (q, r) = floor_divmod_f64(4.0, -2.0);
        assert_eq!(q, -2.0);
        assert!(r == 0.0 && r.is_sign_negative());
    }

    #[test]
    fn real_division_correction() {
        assert_eq!(floor_divmod_f64(1.0, 0.1).0, 9.0);
    }

    #[test]
    fn exact_conversion_bounds() {
        assert_eq!(f64_to_i64_exact(-9_223_372_036_854_775_808.0), Some(i64::MIN));
        assert_eq!(f64_to_i64_exact(9_223_372_036_854_775_808.0), None);
        assert_eq!(f64_to_i64_exact(-0.0), Some(0));
    }
}
