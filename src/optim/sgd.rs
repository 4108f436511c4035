use crate::error::{NetworkError, Result};
use crate::math::vector;
use crate::network::{Gradients, Network};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sgd {
    pub learning_rate: f64,
}

impl Sgd {
    pub fn new(learning_rate: f64) -> Sgd {
        Sgd { learning_rate }
    }

    /// Applies one gradient-descent step from gradients summed over `batch_len`
    /// examples: `p -= (η / batch_len) * ∇p` for every bias and weight.
    pub fn step(&self, network: &mut Network, gradients: &Gradients, batch_len: usize) -> Result<()> {
        if batch_len == 0 {
            return Err(NetworkError::EmptyDataset(
                "cannot apply a step for an empty mini-batch".to_owned(),
            ));
        }
        if gradients.nabla_b.len() != network.biases.len()
            || gradients.nabla_w.len() != network.weights.len()
        {
            return Err(NetworkError::DimensionMismatch {
                context: "gradient layer count",
                expected: network.weights.len(),
                actual: gradients.nabla_w.len(),
            });
        }

        let factor = -self.learning_rate / batch_len as f64;
        for (b, nb) in network.biases.iter_mut().zip(&gradients.nabla_b) {
            vector::add_scaled(b, nb, factor)?;
        }
        for (w, nw) in network.weights.iter_mut().zip(&gradients.nabla_w) {
            w.add_scaled(nw, factor)?;
        }
        Ok(())
    }
}
