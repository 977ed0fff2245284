use crate::TcError;

/// Floating point type used throughout system
pub type Real = f64;

/// √3, the line/phase factor of a balanced three-phase system.
pub const SQRT_3: Real = 1.732_050_807_568_877_2;

/// One tolerance for everything
#[derive(Clone, Copy, Debug)]
pub struct Tolerances {
    pub abs: Real,
    pub rel: Real,
}

impl Default for Tolerances {
    fn default() -> Self {
        Self {
            abs: 1e-12,
            rel: 1e-9,
        }
    }
}

pub fn nearly_equal(a: Real, b: Real, tol: Tolerances) -> bool {
    let diff = (a - b).abs();
    if diff <= tol.abs {
        return true;
    }
    diff <= tol.rel * a.abs().max(b.abs())
}

pub fn ensure_finite(v: Real, what: &'static str) -> Result<Real, TcError> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(TcError::NonFinite { what, value: v })
    }
}

/// Finite and strictly greater than zero.
pub fn ensure_positive(v: Real, what: &'static str) -> Result<Real, TcError> {
    let v = ensure_finite(v, what)?;
    if v > 0.0 {
        Ok(v)
    } else {
        Err(TcError::InvalidArg { what })
    }
}

/// Round to `decimals` places, halves away from zero.
#[inline]
pub fn round_to(v: Real, decimals: i32) -> Real {
    let scale = 10f64.powi(decimals);
    (v * scale).round() / scale
}

#[inline]
pub fn round1(v: Real) -> Real {
    round_to(v, 1)
}

#[inline]
pub fn round2(v: Real) -> Real {
    round_to(v, 2)
}

/// Round to the nearest integer count. Negative or non-finite values clamp to 0.
#[inline]
pub fn round_count(v: Real) -> u32 {
    if v.is_finite() && v > 0.0 {
        v.round() as u32
    } else {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nearly_equal_basic() {
        let tol = Tolerances {
            abs: 1e-12,
            rel: 1e-9,
        };
        assert!(nearly_equal(1.0, 1.0 + 1e-12, tol));
        assert!(nearly_equal(0.0, 1e-13, tol));
        assert!(!nearly_equal(1.0, 1.0 + 1e-6, tol));
    }

    #[test]
    fn ensure_finite_detects_nan() {
        let err = ensure_finite(Real::NAN, "test").unwrap_err();
        let msg = format!("{err}");
        assert!(msg.contains("Non-finite"));
    }

    #[test]
    fn ensure_positive_rejects_zero_and_negative() {
        assert!(ensure_positive(0.0, "power").is_err());
        assert!(ensure_positive(-1.0, "power").is_err());
        assert!(ensure_positive(Real::INFINITY, "power").is_err());
        assert_eq!(ensure_positive(2.5, "power").unwrap(), 2.5);
    }

    #[test]
    fn rounding_helpers() {
        assert_eq!(round2(5.256), 5.26);
        assert_eq!(round2(98.8), 98.8);
        assert_eq!(round1(45.04), 45.0);
        assert_eq!(round1(8.849), 8.8);
        assert_eq!(round_count(25.5), 26);
        assert_eq!(round_count(-3.0), 0);
        assert_eq!(round_count(Real::NAN), 0);
    }

    #[test]
    fn sqrt3_matches_std() {
        assert!(nearly_equal(SQRT_3, 3f64.sqrt(), Tolerances::default()));
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn round2_stays_within_half_cent(v in 0.0_f64..1.0e6) {
            prop_assert!((round2(v) - v).abs() <= 0.005 + 1e-9);
        }
    }
}
