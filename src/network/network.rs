use rand::Rng;
use tracing::debug;

use crate::activation::sigmoid_vec;
use crate::data::TrainingExample;
use crate::error::{NetworkError, Result};
use crate::loss::MseLoss;
use crate::math::{vector, Matrix, Randomize};

/// A fully-connected sigmoid network.
///
/// For `L = layer_sizes.len()` layers there are `L - 1` weight matrices and
/// bias vectors. `weights[i]` has shape `(layer_sizes[i + 1], layer_sizes[i])`
/// and maps the activations of layer `i` onto the pre-activation of layer
/// `i + 1`; `biases[i]` has length `layer_sizes[i + 1]`.
#[derive(Debug, Clone)]
pub struct Network {
    pub(crate) layer_sizes: Vec<usize>,
    pub(crate) weights: Vec<Matrix>,
    pub(crate) biases: Vec<Vec<f64>>,
}

impl Network {
    /// Builds a network with every weight and bias drawn from N(0, 1).
    pub fn new<R: Rng + ?Sized>(layer_sizes: &[usize], rng: &mut R) -> Result<Network> {
        validate_layer_sizes(layer_sizes)?;

        let mut network = Network::zeros(layer_sizes);
        for b in network.biases.iter_mut() {
            b.randomize(rng);
        }
        for w in network.weights.iter_mut() {
            w.randomize(rng);
        }

        debug!(?layer_sizes, "constructed network");
        Ok(network)
    }

    /// Builds a network from explicit parameters, checking every shape.
    ///
    /// Layer sizes are inferred: `weights[0].cols` is the input size and
    /// `weights[i].rows` the size of layer `i + 1`.
    pub fn from_parameters(weights: Vec<Matrix>, biases: Vec<Vec<f64>>) -> Result<Network> {
        if weights.is_empty() {
            return Err(NetworkError::Construction(
                "at least one weight matrix is required".to_owned(),
            ));
        }
        if weights.len() != biases.len() {
            return Err(NetworkError::Construction(format!(
                "{} weight matrices but {} bias vectors",
                weights.len(),
                biases.len()
            )));
        }

        let mut layer_sizes = vec![weights[0].cols];
        layer_sizes.extend(weights.iter().map(|w| w.rows));
        validate_layer_sizes(&layer_sizes)?;

        for (i, (w, b)) in weights.iter().zip(&biases).enumerate() {
            w.check_data().map_err(|e| {
                NetworkError::Construction(format!("weights[{i}] data does not match its shape: {e}"))
            })?;
            if w.cols != layer_sizes[i] {
                return Err(NetworkError::Construction(format!(
                    "weights[{i}] has {} columns, previous layer has {} neurons",
                    w.cols, layer_sizes[i]
                )));
            }
            if b.len() != w.rows {
                return Err(NetworkError::Construction(format!(
                    "biases[{i}] has length {}, weights[{i}] has {} rows",
                    b.len(),
                    w.rows
                )));
            }
        }

        Ok(Network { layer_sizes, weights, biases })
    }

    /// Zero-valued network of the given (already validated) shape.
    fn zeros(layer_sizes: &[usize]) -> Network {
        let (weights, biases) = layer_sizes
            .windows(2)
            .map(|pair| (Matrix::zeros(pair[1], pair[0]), vec![0.0; pair[1]]))
            .unzip();
        Network {
            layer_sizes: layer_sizes.to_vec(),
            weights,
            biases,
        }
    }

    pub fn layer_sizes(&self) -> &[usize] {
        &self.layer_sizes
    }

    /// Number of layers, including the input layer.
    pub fn num_layers(&self) -> usize {
        self.layer_sizes.len()
    }

    pub fn input_size(&self) -> usize {
        self.layer_sizes[0]
    }

    pub fn output_size(&self) -> usize {
        self.layer_sizes[self.layer_sizes.len() - 1]
    }

    pub fn weights(&self) -> &[Matrix] {
        &self.weights
    }

    pub fn biases(&self) -> &[Vec<f64>] {
        &self.biases
    }

    /// Runs the input through every layer: `a = σ(W·a + b)`.
    pub fn feedforward(&self, input: &[f64]) -> Result<Vec<f64>> {
        if input.len() != self.input_size() {
            return Err(NetworkError::DimensionMismatch {
                context: "feedforward input",
                expected: self.input_size(),
                actual: input.len(),
            });
        }

        let mut a = input.to_vec();
        for (w, b) in self.weights.iter().zip(&self.biases) {
            let mut z = w.mul_vec(&a)?;
            vector::add_scaled(&mut z, b, 1.0)?;
            a = sigmoid_vec(&z);
        }
        Ok(a)
    }

    /// ∂C/∂a for the output layer under the quadratic cost.
    pub fn cost_derivative(&self, output_activations: &[f64], target: &[f64]) -> Result<Vec<f64>> {
        MseLoss::derivative(output_activations, target)
    }

    /// Quadratic cost of a single example.
    pub fn cost(&self, input: &[f64], target: &[f64]) -> Result<f64> {
        let output = self.feedforward(input)?;
        MseLoss::cost(&output, target)
    }

    /// Checks that an example's vectors fit this network's input and output layers.
    pub fn check_example(&self, index: usize, example: &TrainingExample) -> Result<()> {
        if example.input.len() != self.input_size() || example.target.len() != self.output_size() {
            return Err(NetworkError::InvalidExample {
                index,
                input_len: example.input.len(),
                target_len: example.target.len(),
                expected_input: self.input_size(),
                expected_output: self.output_size(),
            });
        }
        Ok(())
    }
}

pub(crate) fn validate_layer_sizes(layer_sizes: &[usize]) -> Result<()> {
    if layer_sizes.len() < 2 {
        return Err(NetworkError::Construction(format!(
            "need at least an input and an output layer, got {} layer(s)",
            layer_sizes.len()
        )));
    }
    if let Some(i) = layer_sizes.iter().position(|&n| n == 0) {
        return Err(NetworkError::Construction(format!("layer {i} has zero neurons")));
    }
    Ok(())
}
