use crate::error::Result;
use crate::math::vector;

/// Quadratic cost, C = ½‖a − y‖².
///
/// The ½ makes the gradient with respect to the output activation exactly
/// `a − y`, which is what backpropagation seeds its output-layer error with.
pub struct MseLoss;

impl MseLoss {
    pub fn cost(predicted: &[f64], expected: &[f64]) -> Result<f64> {
        let diff = vector::sub(predicted, expected)?;
        Ok(0.5 * diff.iter().map(|d| d * d).sum::<f64>())
    }

    /// Per-output gradient: predicted - expected
    pub fn derivative(predicted: &[f64], expected: &[f64]) -> Result<Vec<f64>> {
        vector::sub(predicted, expected)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn cost_and_derivative() {
        let a = [0.8, 0.1];
        let y = [1.0, 0.0];
        assert_relative_eq!(MseLoss::cost(&a, &y).unwrap(), 0.5 * (0.04 + 0.01), epsilon = 1e-12);

        let d = MseLoss::derivative(&a, &y).unwrap();
        assert_relative_eq!(d[0], -0.2, epsilon = 1e-12);
        assert_relative_eq!(d[1], 0.1, epsilon = 1e-12);
    }

    #[test]
    fn mismatched_lengths_fail() {
        assert!(MseLoss::cost(&[0.1, 0.2], &[1.0]).is_err());
        assert!(MseLoss::derivative(&[0.1], &[1.0, 0.0]).is_err());
    }
}
