use std::fmt;
use std::str::FromStr;

use burn::tensor::{activation, backend::Backend, Tensor};

use crate::error::ConfigError;

/// The set of activation functions supported by [`MLP`](crate::nn::MLP)
///
/// Resolved once from its textual identifier when a network is constructed;
/// the same variant is then applied at every hidden-layer boundary. All
/// variants are stateless elementwise functions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Activation {
    /// `max(0, x)`
    Relu,
    /// `x * sigmoid(x)`
    Silu,
}

impl Activation {
    /// Apply the nonlinearity elementwise, preserving the input shape
    pub fn forward<B: Backend, const D: usize>(&self, input: Tensor<B, D>) -> Tensor<B, D> {
        match self {
            Activation::Relu => activation::relu(input),
            Activation::Silu => activation::silu(input),
        }
    }
}

impl FromStr for Activation {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "relu" => Ok(Activation::Relu),
            "silu" => Ok(Activation::Silu),
            _ => Err(ConfigError::UnsupportedActivation(s.to_string())),
        }
    }
}

impl fmt::Display for Activation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Activation::Relu => write!(f, "relu"),
            Activation::Silu => write!(f, "silu"),
        }
    }
}
