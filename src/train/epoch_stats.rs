use std::fmt;

use serde::{Serialize, Deserialize};

/// Per-epoch training statistics produced by `train_loop`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EpochStats {
    /// 0-based epoch index.
    pub epoch: usize,
    /// Total epochs requested for this run.
    pub total_epochs: usize,
    /// Number of parameter updates made during the epoch.
    pub mini_batches: usize,
    /// Mean quadratic cost over the training examples, each measured just
    /// before the update of its mini-batch.
    pub train_cost: f64,
    /// Correctly classified test examples, when test data was supplied.
    pub score: Option<usize>,
    /// Size of the test set, when test data was supplied.
    pub total: Option<usize>,
    /// Wall-clock duration of the epoch in milliseconds.
    pub elapsed_ms: u64,
}

impl fmt::Display for EpochStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.score, self.total) {
            (Some(score), Some(total)) => write!(f, "epoch={} score={}/{}", self.epoch, score, total),
            _ => write!(f, "epoch={} complete", self.epoch),
        }
    }
}
