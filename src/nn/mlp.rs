/// Multi-Layer Perceptron (MLP) - Generic feedforward neural network
///
/// This module provides a flexible MLP implementation that can be used
/// for policy and value networks in RL algorithms.

use burn::{
    module::Ignored,
    nn::{Linear, LinearConfig},
    prelude::*,
    tensor::backend::Backend,
};
use tracing::debug;

use crate::{error::ConfigError, nn::Activation};

/// Configuration for Multi-Layer Perceptron
#[derive(Config, Debug)]
pub struct MLPConfig {
    /// Input dimension
    pub input_dim: usize,
    /// Output dimension
    pub output_dim: usize,
    /// Width of every hidden layer
    pub hidden_dim: usize,
    /// Number of intermediate hidden-to-hidden layers
    ///
    /// The network always contains `num_hidden + 2` linear layers:
    /// input → hidden, `num_hidden` × (hidden → hidden), hidden → output.
    pub num_hidden: usize,
    /// Activation identifier, one of `"relu"` or `"silu"`
    pub activation: String,
}

/// Multi-Layer Perceptron implementation
///
/// The configured activation is applied after every linear layer except the
/// output layer, which stays linear.
#[derive(Module, Debug)]
pub struct MLP<B: Backend> {
    layers: Vec<Linear<B>>,
    activation: Ignored<Activation>,
    input_dim: usize,
    output_dim: usize,
    hidden_dim: usize,
    num_hidden: usize,
}

impl MLPConfig {
    /// Initialize the MLP with the given configuration
    ///
    /// Fails with [`ConfigError`] if the activation identifier is not
    /// supported or any dimension is zero. No layer is allocated on failure.
    pub fn init<B: Backend>(&self, device: &B::Device) -> Result<MLP<B>, ConfigError> {
        let activation: Activation = self.activation.parse()?;

        for (name, value) in [
            ("input_dim", self.input_dim),
            ("output_dim", self.output_dim),
            ("hidden_dim", self.hidden_dim),
        ] {
            if value == 0 {
                return Err(ConfigError::ZeroDimension(name));
            }
        }

        let mut layers = Vec::with_capacity(self.num_hidden + 2);

        // Input → first hidden layer
        layers.push(LinearConfig::new(self.input_dim, self.hidden_dim).init(device));

        // Hidden → hidden connections
        for _ in 0..self.num_hidden {
            layers.push(LinearConfig::new(self.hidden_dim, self.hidden_dim).init(device));
        }

        // Last hidden → output
        layers.push(LinearConfig::new(self.hidden_dim, self.output_dim).init(device));

        let mlp = MLP {
            layers,
            activation: Ignored(activation),
            input_dim: self.input_dim,
            output_dim: self.output_dim,
            hidden_dim: self.hidden_dim,
            num_hidden: self.num_hidden,
        };
        debug!("initialized {}", mlp.summary());

        Ok(mlp)
    }
}

impl<B: Backend> MLP<B> {
    /// Generic forward pass - works with any tensor dimension
    ///
    /// Applies the configured activation to all hidden layers, no activation
    /// on the output layer. The forward pass is a pure function of the input
    /// and the current layer parameters.
    ///
    /// Works with:
    /// - D=1: Single example `[features]`
    /// - D=2: Batch processing `[batch, features]` (most common)
    /// - D=3+: Sequences or multi-entity `[batch, sequence/entities, features]`
    ///
    /// The last dimension is always treated as the feature dimension.
    pub fn forward<const D: usize>(&self, input: Tensor<B, D>) -> Tensor<B, D> {
        let mut x: Tensor<B, D> = input;

        // All layers except the last one (with activation)
        for layer in &self.layers[..self.layers.len() - 1] {
            x = self.activation.forward(layer.forward(x));
        }

        // Last layer (no activation)
        self.layers.last().unwrap().forward(x)
    }

    /// One-line architecture description for logging and debugging
    pub fn summary(&self) -> String {
        format!(
            "MLP(input_dim={}, output_dim={}, hidden_dim={}, num_hidden={}, activation={})",
            self.input_dim, self.output_dim, self.hidden_dim, self.num_hidden, self.activation.0
        )
    }

    pub fn input_dim(&self) -> usize {
        self.input_dim
    }

    pub fn output_dim(&self) -> usize {
        self.output_dim
    }

    pub fn hidden_dim(&self) -> usize {
        self.hidden_dim
    }

    pub fn num_hidden(&self) -> usize {
        self.num_hidden
    }

    pub fn activation(&self) -> Activation {
        self.activation.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use burn::backend::ndarray::{NdArray, NdArrayDevice};

    #[test]
    fn test_mlp_forward_2d() {
        let device = NdArrayDevice::default();

        // 4 → 8 → 8 → 2, silu between the linear layers
        let config = MLPConfig::new(4, 2, 8, 1, "silu".to_string());
        let mlp = config.init::<NdArray>(&device).unwrap();

        // Batch of 8 states: [batch, features]
        let input = Tensor::<NdArray, 2>::random(
            [8, 4],
            burn::tensor::Distribution::Uniform(-1.0, 1.0),
            &device,
        );

        let output: Tensor<NdArray, 2> = mlp.forward(input);

        // Check output shape: [batch, output_dim]
        assert_eq!(output.shape().dims, [8, 2]);
    }

    #[test]
    fn test_mlp_output_shape_independent_of_batch_size() {
        let device = NdArrayDevice::default();

        let config = MLPConfig::new(3, 5, 16, 2, "relu".to_string());
        let mlp = config.init::<NdArray>(&device).unwrap();

        for batch_size in [1, 7, 32] {
            let input = Tensor::<NdArray, 2>::random(
                [batch_size, 3],
                burn::tensor::Distribution::Uniform(-1.0, 1.0),
                &device,
            );
            let output = mlp.forward(input);
            assert_eq!(output.shape().dims, [batch_size, 5]);
        }
    }

    #[test]
    fn test_mlp_forward_3d() {
        let device = NdArrayDevice::default();

        let config = MLPConfig::new(4, 2, 8, 1, "relu".to_string());
        let mlp = config.init::<NdArray>(&device).unwrap();

        // Sequences: [batch, sequence_length, features]
        let input = Tensor::<NdArray, 3>::random(
            [16, 10, 4],
            burn::tensor::Distribution::Uniform(-1.0, 1.0),
            &device,
        );

        let output: Tensor<NdArray, 3> = mlp.forward(input);

        // Check output shape: [batch, sequence_length, output_dim]
        assert_eq!(output.shape().dims, [16, 10, 2]);
    }

    #[test]
    fn test_mlp_layer_count() {
        let device = NdArrayDevice::default();

        for num_hidden in [0, 1, 3] {
            let config = MLPConfig::new(4, 2, 8, num_hidden, "relu".to_string());
            let mlp = config.init::<NdArray>(&device).unwrap();
            assert_eq!(mlp.layers.len(), num_hidden + 2);
        }
    }

    #[test]
    fn test_mlp_no_intermediate_hidden_layers() {
        let device = NdArrayDevice::default();

        // num_hidden = 0: input → hidden → output, one activation in between
        let config = MLPConfig::new(4, 2, 8, 0, "silu".to_string());
        let mlp = config.init::<NdArray>(&device).unwrap();

        assert_eq!(mlp.layers.len(), 2);

        let input = Tensor::<NdArray, 2>::random(
            [1, 4],
            burn::tensor::Distribution::Default,
            &device,
        );
        let output = mlp.forward(input);

        assert_eq!(output.shape().dims, [1, 2]);
    }

    #[test]
    fn test_mlp_forward_is_deterministic() {
        let device = NdArrayDevice::default();

        let config = MLPConfig::new(4, 2, 8, 1, "silu".to_string());
        let mlp = config.init::<NdArray>(&device).unwrap();

        let input = Tensor::<NdArray, 2>::random(
            [5, 4],
            burn::tensor::Distribution::Uniform(-1.0, 1.0),
            &device,
        );

        let first = mlp.forward(input.clone());
        let second = mlp.forward(input);

        assert_eq!(first.into_data(), second.into_data());
    }

    #[test]
    fn test_mlp_rejects_unsupported_activation() {
        let device = NdArrayDevice::default();

        let config = MLPConfig::new(4, 2, 8, 1, "tanh".to_string());
        let err = config.init::<NdArray>(&device).unwrap_err();

        assert_eq!(err, ConfigError::UnsupportedActivation("tanh".to_string()));
    }

    #[test]
    fn test_mlp_rejects_zero_dimensions() {
        let device = NdArrayDevice::default();

        let err = MLPConfig::new(0, 2, 8, 1, "relu".to_string())
            .init::<NdArray>(&device)
            .unwrap_err();
        assert_eq!(err, ConfigError::ZeroDimension("input_dim"));

        let err = MLPConfig::new(4, 0, 8, 1, "relu".to_string())
            .init::<NdArray>(&device)
            .unwrap_err();
        assert_eq!(err, ConfigError::ZeroDimension("output_dim"));

        let err = MLPConfig::new(4, 2, 0, 1, "relu".to_string())
            .init::<NdArray>(&device)
            .unwrap_err();
        assert_eq!(err, ConfigError::ZeroDimension("hidden_dim"));
    }

    #[test]
    fn test_mlp_summary() {
        let device = NdArrayDevice::default();

        let config = MLPConfig::new(4, 2, 8, 1, "relu".to_string());
        let mlp = config.init::<NdArray>(&device).unwrap();

        assert_eq!(
            mlp.summary(),
            "MLP(input_dim=4, output_dim=2, hidden_dim=8, num_hidden=1, activation=relu)"
        );
    }
}
