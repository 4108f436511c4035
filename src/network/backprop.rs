use crate::activation::{sigmoid_prime_vec, sigmoid_vec};
use crate::error::{NetworkError, Result};
use crate::loss::MseLoss;
use crate::math::{vector, Matrix};
use crate::network::gradients::Gradients;
use crate::network::network::Network;

impl Network {
    /// Gradient of the quadratic cost for one `(x, y)` pair.
    ///
    /// Returns one bias gradient and one weight gradient per layer, shaped
    /// exactly like `biases` and `weights`. The network is not modified.
    pub fn backprop(&self, x: &[f64], y: &[f64]) -> Result<Gradients> {
        self.backprop_with_cost(x, y).map(|(gradients, _)| gradients)
    }

    /// Like [`backprop`](Network::backprop), also returning the example's cost
    /// under the current parameters.
    pub(crate) fn backprop_with_cost(&self, x: &[f64], y: &[f64]) -> Result<(Gradients, f64)> {
        if x.len() != self.input_size() {
            return Err(NetworkError::DimensionMismatch {
                context: "backprop input",
                expected: self.input_size(),
                actual: x.len(),
            });
        }
        if y.len() != self.output_size() {
            return Err(NetworkError::DimensionMismatch {
                context: "backprop target",
                expected: self.output_size(),
                actual: y.len(),
            });
        }

        let n = self.weights.len();

        // Forward pass, keeping every activation (input included) and every z.
        let mut activations: Vec<Vec<f64>> = Vec::with_capacity(n + 1);
        let mut zs: Vec<Vec<f64>> = Vec::with_capacity(n);
        activations.push(x.to_vec());
        for i in 0..n {
            let mut z = self.weights[i].mul_vec(&activations[i])?;
            vector::add_scaled(&mut z, &self.biases[i], 1.0)?;
            activations.push(sigmoid_vec(&z));
            zs.push(z);
        }

        let mut nabla_b = vec![Vec::new(); n];
        let mut nabla_w = vec![Matrix::default(); n];

        // Output layer: δ = ∂C/∂a ⊙ σ'(z)
        let last = n - 1;
        let mut delta = vector::hadamard(
            &self.cost_derivative(&activations[n], y)?,
            &sigmoid_prime_vec(&zs[last]),
        )?;
        nabla_w[last] = Matrix::outer(&delta, &activations[last]);
        nabla_b[last] = delta.clone();

        // Hidden layers, walking back towards the input.
        for i in (0..last).rev() {
            let propagated = self.weights[i + 1].transpose_mul_vec(&delta)?;
            delta = vector::hadamard(&propagated, &sigmoid_prime_vec(&zs[i]))?;
            nabla_w[i] = Matrix::outer(&delta, &activations[i]);
            nabla_b[i] = delta.clone();
        }

        let cost = MseLoss::cost(&activations[n], y)?;
        Ok((Gradients { nabla_b, nabla_w }, cost))
    }
}
