pub mod epoch_stats;
pub mod loop_fn;
pub mod mini_batch;
pub mod train_config;

pub use epoch_stats::EpochStats;
pub use loop_fn::{train_loop, train_network};
pub use train_config::TrainConfig;
