//! Atomic form factors.

use super::macros::{any_values, tabulated_quantity};

tabulated_quantity! {
    /// Form factor as a function of inverse length (momentum transfer).
    FormFactor {
        x: inverse_lengths,
        y: values,
        check: any_values,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tabulated_core::math::interpolators::InterpolationLaw;

    #[test]
    fn test_inverse_lengths() {
        let ff = FormFactor::with_law(
            vec![0.0, 1.0, 10.0],
            vec![8.0, 6.0, 1.0],
            InterpolationLaw::LinearLinear,
        )
        .unwrap();

        assert_eq!(ff.inverse_lengths(), &[0.0, 1.0, 10.0]);
        assert_eq!(ff.values(), &[8.0, 6.0, 1.0]);
        assert_eq!(ff.evaluate(0.5), 7.0);
    }

    #[test]
    fn test_log_x_rejects_zero_momentum() {
        assert!(FormFactor::with_law(
            vec![0.0, 1.0],
            vec![8.0, 6.0],
            InterpolationLaw::LogLinear,
        )
        .is_err());
    }
}
