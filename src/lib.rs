//! Neural network building blocks for value-based reinforcement learning
//!
//! This crate defines the network architectures used by an RL agent acting
//! on discrete actions over fully observable states: a generic feedforward
//! [`MLP`](nn::MLP) and a [`DoubleQNetwork`](nn::DoubleQNetwork) holding two
//! independently-parameterized copies of it. Only architecture definition
//! and forward computation live here; training loops, replay memory and
//! environments are the caller's business.
//!
//! All modules are generic over a burn backend.
//!
//! # Usage Example
//!
//! ```rust,ignore
//! use burn::backend::NdArray;
//! use rlnet::nn::DoubleQNetworkConfig;
//!
//! let device = Default::default();
//!
//! // Q-values over 2 discrete actions for a 4-dimensional observation
//! let network = DoubleQNetworkConfig::new(4, 2, 64, 1)
//!     .init::<NdArray>(&device)?;
//!
//! let (q1, q2) = network.forward(observations); // each [batch_size, 2]
//! ```

pub mod error;
pub mod nn;
