//! Neural network building blocks for RL algorithms

pub mod activation;
pub mod double_q;
pub mod mlp;

pub use activation::Activation;
pub use double_q::{DoubleQNetwork, DoubleQNetworkConfig};
pub use mlp::{MLP, MLPConfig};
