use tracing::debug;

use crate::data::TrainingExample;
use crate::error::{NetworkError, Result};
use crate::network::{Gradients, Network};
use crate::optim::Sgd;

impl Network {
    /// One gradient-descent step over a mini-batch.
    ///
    /// Gradients from every example are summed first; the parameters are only
    /// touched once the whole batch has been processed, so a failing example
    /// leaves the network unchanged. The step divides by `batch.len()`, which
    /// makes a short trailing batch an honest average.
    ///
    /// Returns the summed cost of the batch under the pre-update parameters.
    pub fn update_mini_batch(&mut self, batch: &[TrainingExample], learning_rate: f64) -> Result<f64> {
        if batch.is_empty() {
            return Err(NetworkError::EmptyDataset("mini-batch has no examples".to_owned()));
        }

        let mut nabla = Gradients::zeros_like(self);
        let mut batch_cost = 0.0;
        for example in batch {
            let (delta_nabla, cost) = self.backprop_with_cost(&example.input, &example.target)?;
            nabla.accumulate(&delta_nabla)?;
            batch_cost += cost;
        }

        Sgd::new(learning_rate).step(self, &nabla, batch.len())?;
        debug!(size = batch.len(), cost = batch_cost, "applied mini-batch");
        Ok(batch_cost)
    }
}
