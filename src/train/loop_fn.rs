use std::time::Instant;

use rand::seq::SliceRandom;
use rand::Rng;
use tracing::{info, warn};

use crate::data::TrainingExample;
use crate::error::{NetworkError, Result};
use crate::network::Network;
use crate::train::epoch_stats::EpochStats;
use crate::train::train_config::TrainConfig;

// ---------------------------------------------------------------------------
// Public entry points
// ---------------------------------------------------------------------------

/// Trains `network` with mini-batch stochastic gradient descent.
///
/// Every epoch shuffles `training_data` in place, cuts it into consecutive
/// mini-batches of `config.mini_batch_size` (the last one may be shorter) and
/// applies one update per batch. When `test_data` is non-empty the network
/// is evaluated on it after each epoch.
///
/// All examples are checked against the network shape before the first
/// update; one malformed example aborts the run with
/// `NetworkError::InvalidExample` and the network is left untouched.
///
/// Returns the statistics of every epoch, in order.
pub fn train_loop<R: Rng + ?Sized>(
    network: &mut Network,
    training_data: &mut [TrainingExample],
    test_data: &[TrainingExample],
    config: &TrainConfig,
    rng: &mut R,
) -> Result<Vec<EpochStats>> {
    config.validate()?;
    validate_data(network, training_data, test_data, config.mini_batch_size)?;

    let n = training_data.len();
    let mut history = Vec::with_capacity(config.epochs);
    let mut receiver_gone = false;

    for epoch in 0..config.epochs {
        let t_start = Instant::now();

        training_data.shuffle(rng);

        let mut total_cost = 0.0;
        let mut mini_batches = 0;
        for batch in training_data.chunks(config.mini_batch_size) {
            total_cost += network.update_mini_batch(batch, config.learning_rate)?;
            mini_batches += 1;
        }

        let (score, total) = if test_data.is_empty() {
            (None, None)
        } else {
            (Some(network.evaluate(test_data)?), Some(test_data.len()))
        };

        let stats = EpochStats {
            epoch,
            total_epochs: config.epochs,
            mini_batches,
            train_cost: total_cost / n as f64,
            score,
            total,
            elapsed_ms: t_start.elapsed().as_millis() as u64,
        };

        info!(
            epoch,
            mini_batches,
            train_cost = stats.train_cost,
            elapsed_ms = stats.elapsed_ms,
            "{stats}"
        );

        if let Some(ref tx) = config.progress_tx {
            if !receiver_gone && tx.send(stats.clone()).is_err() {
                warn!("progress receiver dropped; continuing without progress updates");
                receiver_gone = true;
            }
        }

        history.push(stats);
    }

    Ok(history)
}

/// Same as [`train_loop`], drawing the shuffle order from `config.rng()`.
pub fn train_network(
    network: &mut Network,
    training_data: &mut [TrainingExample],
    test_data: &[TrainingExample],
    config: &TrainConfig,
) -> Result<Vec<EpochStats>> {
    let mut rng = config.rng();
    train_loop(network, training_data, test_data, config, &mut rng)
}

// ---------------------------------------------------------------------------
// Private helpers
// ---------------------------------------------------------------------------

fn validate_data(
    network: &Network,
    training_data: &[TrainingExample],
    test_data: &[TrainingExample],
    mini_batch_size: usize,
) -> Result<()> {
    if training_data.is_empty() {
        return Err(NetworkError::EmptyDataset("no training examples supplied".to_owned()));
    }
    if mini_batch_size > training_data.len() {
        return Err(NetworkError::EmptyDataset(format!(
            "mini_batch_size {} exceeds the {} available training examples",
            mini_batch_size,
            training_data.len()
        )));
    }

    for (index, example) in training_data.iter().enumerate() {
        network.check_example(index, example)?;
    }
    for (index, example) in test_data.iter().enumerate() {
        network.check_example(index, example)?;
    }
    Ok(())
}
