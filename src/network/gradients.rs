use crate::error::{NetworkError, Result};
use crate::math::{vector, Matrix};
use crate::network::network::Network;

/// Partial derivatives of the cost with respect to every bias and weight,
/// laid out exactly like the network's `biases` and `weights`.
#[derive(Debug, Clone, PartialEq)]
pub struct Gradients {
    pub nabla_b: Vec<Vec<f64>>,
    pub nabla_w: Vec<Matrix>,
}

impl Gradients {
    /// Zero gradients shaped like `network`'s parameters.
    pub fn zeros_like(network: &Network) -> Gradients {
        Gradients {
            nabla_b: network.biases.iter().map(|b| vec![0.0; b.len()]).collect(),
            nabla_w: network
                .weights
                .iter()
                .map(|w| Matrix::zeros(w.rows, w.cols))
                .collect(),
        }
    }

    /// Adds `other` into `self`, layer by layer.
    pub fn accumulate(&mut self, other: &Gradients) -> Result<()> {
        if self.nabla_b.len() != other.nabla_b.len() || self.nabla_w.len() != other.nabla_w.len() {
            return Err(NetworkError::DimensionMismatch {
                context: "gradient layer count",
                expected: self.nabla_b.len(),
                actual: other.nabla_b.len(),
            });
        }

        for (acc, delta) in self.nabla_b.iter_mut().zip(&other.nabla_b) {
            vector::add_scaled(acc, delta, 1.0)?;
        }
        for (acc, delta) in self.nabla_w.iter_mut().zip(&other.nabla_w) {
            acc.add_scaled(delta, 1.0)?;
        }
        Ok(())
    }
}
