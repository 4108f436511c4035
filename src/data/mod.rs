pub mod example;
pub mod idx;

pub use example::TrainingExample;
pub use idx::{load_idx_pair, parse_idx_pair};
