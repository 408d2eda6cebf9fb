use crate::CoreError;

/// Floating point type used throughout the system
pub type Real = f64;

/// Denominator magnitude at or below which `guarded_div` returns the fallback
pub const DIV_EPSILON: Real = 1e-9;

/// Reject NaN/Inf with a descriptive error naming the offending quantity.
pub fn ensure_finite(v: Real, what: &'static str) -> Result<Real, CoreError> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(CoreError::NonFinite { what, value: v })
    }
}

/// Division that never produces NaN/Inf from a vanishing denominator.
///
/// Returns `num / den` when `|den| > DIV_EPSILON`, and 0.0 otherwise.
/// Zero is the domain-appropriate fallback here: a torque at zero shaft
/// speed or an SFC at zero net thrust reads as "no contribution" rather
/// than an unbounded value the outer solver would choke on.
pub fn guarded_div(num: Real, den: Real) -> Real {
    if den.abs() <= DIV_EPSILON {
        0.0
    } else {
        num / den
    }
}

/// Clamp a value between min and max.
pub fn clamp(value: Real, min: Real, max: Real) -> Real {
    if value < min {
        min
    } else if value > max {
        max
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn ensure_finite_detects_nan() {
        let err = ensure_finite(Real::NAN, "test").unwrap_err();
        let msg = format!("{err}");
        assert!(msg.contains("Non-finite"));
    }

    #[test]
    fn guarded_div_at_and_below_threshold() {
        assert_eq!(guarded_div(5.0, 0.0), 0.0);
        assert_eq!(guarded_div(5.0, DIV_EPSILON), 0.0);
        assert_eq!(guarded_div(5.0, -DIV_EPSILON), 0.0);
        assert_eq!(guarded_div(-3.0, 1e-12), 0.0);
    }

    #[test]
    fn guarded_div_reduces_to_division() {
        assert_eq!(guarded_div(6.0, 2.0), 3.0);
        assert_eq!(guarded_div(1.0, -4.0), -0.25);
    }

    proptest! {
        #[test]
        fn guarded_div_always_finite(num in -1e12f64..1e12, den in -1e12f64..1e12) {
            prop_assert!(guarded_div(num, den).is_finite());
        }
    }
}
