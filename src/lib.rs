//! A from-scratch fully-connected sigmoid network trained with mini-batch
//! stochastic gradient descent and backpropagation.

pub mod activation;
pub mod config;
pub mod data;
pub mod error;
pub mod loss;
pub mod math;
pub mod network;
pub mod optim;
pub mod train;

// Convenience re-exports
pub use activation::{sigmoid, sigmoid_prime};
pub use config::RunConfig;
pub use data::TrainingExample;
pub use error::{NetworkError, Result};
pub use loss::MseLoss;
pub use math::Matrix;
pub use network::{Gradients, Network, NetworkSpec};
pub use optim::Sgd;
pub use train::{train_loop, train_network, EpochStats, TrainConfig};
