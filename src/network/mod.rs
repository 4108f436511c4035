pub mod backprop;
pub mod evaluate;
pub mod gradients;
pub mod network;
pub mod spec;

pub use gradients::Gradients;
pub use network::Network;
pub use spec::NetworkSpec;
