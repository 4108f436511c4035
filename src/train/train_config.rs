use std::sync::mpsc;

use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Serialize, Deserialize};

use crate::error::{NetworkError, Result};
use crate::train::epoch_stats::EpochStats;

/// Hyperparameters for a `train_loop` run.
///
/// # Fields
/// - `epochs`          — number of full passes over the training data
/// - `mini_batch_size` — examples per parameter update
/// - `learning_rate`   — step size η
/// - `seed`            — when set, shuffling is reproducible
/// - `progress_tx`     — optional channel; one `EpochStats` is sent per
///                       completed epoch. Not serialized.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainConfig {
    pub epochs: usize,
    pub mini_batch_size: usize,
    pub learning_rate: f64,
    #[serde(default)]
    pub seed: Option<u64>,
    #[serde(skip)]
    pub progress_tx: Option<mpsc::Sender<EpochStats>>,
}

impl TrainConfig {
    pub fn new(epochs: usize, mini_batch_size: usize, learning_rate: f64) -> Self {
        TrainConfig {
            epochs,
            mini_batch_size,
            learning_rate,
            seed: None,
            progress_tx: None,
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_progress(mut self, tx: mpsc::Sender<EpochStats>) -> Self {
        self.progress_tx = Some(tx);
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.epochs == 0 {
            return Err(NetworkError::InvalidConfig("epochs must be at least 1".to_owned()));
        }
        if self.mini_batch_size == 0 {
            return Err(NetworkError::InvalidConfig(
                "mini_batch_size must be at least 1".to_owned(),
            ));
        }
        if !(self.learning_rate.is_finite() && self.learning_rate > 0.0) {
            return Err(NetworkError::InvalidConfig(format!(
                "learning_rate must be a positive number, got {}",
                self.learning_rate
            )));
        }
        Ok(())
    }

    /// Shuffling generator: seeded from `seed`, or from OS entropy.
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_without_optional_fields() {
        let cfg: TrainConfig = serde_json::from_str(
            r#"{ "epochs": 30, "mini_batch_size": 10, "learning_rate": 3.0 }"#,
        )
        .unwrap();
        assert_eq!(cfg.epochs, 30);
        assert_eq!(cfg.mini_batch_size, 10);
        assert_eq!(cfg.learning_rate, 3.0);
        assert!(cfg.seed.is_none());
        assert!(cfg.progress_tx.is_none());
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn rejects_non_positive_values() {
        assert!(TrainConfig::new(0, 10, 1.0).validate().is_err());
        assert!(TrainConfig::new(1, 0, 1.0).validate().is_err());
        assert!(TrainConfig::new(1, 10, 0.0).validate().is_err());
        assert!(TrainConfig::new(1, 10, -0.5).validate().is_err());
        assert!(TrainConfig::new(1, 10, f64::NAN).validate().is_err());
    }
}
