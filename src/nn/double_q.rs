/// Double Q network for discrete actions and fully observable states
///
/// Two value estimators with identical architecture but independent
/// parameters, used to reduce overestimation bias in value-based RL.

use burn::{prelude::*, tensor::backend::Backend};
use tracing::debug;

use crate::{
    error::ConfigError,
    nn::{MLPConfig, MLP},
};

/// Configuration for the [`DoubleQNetwork`]
#[derive(Config, Debug)]
pub struct DoubleQNetworkConfig {
    /// Dimension of the (fully observable) state
    pub obs_dim: usize,
    /// Number of discrete actions
    pub act_dim: usize,
    /// Width of the hidden layers of both sub-networks
    pub hidden_dim: usize,
    /// Number of intermediate hidden layers of both sub-networks
    pub num_hidden: usize,
    /// Activation identifier, one of `"relu"` or `"silu"`
    ///
    /// **Default:** `"silu"`
    #[config(default = "String::from(\"silu\")")]
    pub activation: String,
}

/// A pair of independently-parameterized Q networks
///
/// Both sub-networks map an observation batch to one value estimate per
/// discrete action. They never share parameters, so their estimates stay
/// decorrelated; combining them (e.g. taking the elementwise minimum) is
/// left to the caller.
#[derive(Module, Debug)]
pub struct DoubleQNetwork<B: Backend> {
    q1: MLP<B>,
    q2: MLP<B>,
    obs_dim: usize,
    act_dim: usize,
}

impl DoubleQNetworkConfig {
    /// Initialize both Q networks with the given configuration
    ///
    /// The two sub-networks share hyperparameters but draw independent
    /// initial parameters. Fails with [`ConfigError`] on an unsupported
    /// activation identifier or a zero dimension.
    pub fn init<B: Backend>(&self, device: &B::Device) -> Result<DoubleQNetwork<B>, ConfigError> {
        let mlp_config = MLPConfig::new(
            self.obs_dim,
            self.act_dim,
            self.hidden_dim,
            self.num_hidden,
            self.activation.clone(),
        );

        // Two separate init calls so q1 and q2 get independent parameters
        let q1 = mlp_config.init(device)?;
        let q2 = mlp_config.init(device)?;

        let network = DoubleQNetwork {
            q1,
            q2,
            obs_dim: self.obs_dim,
            act_dim: self.act_dim,
        };
        debug!("initialized {}", network.summary());

        Ok(network)
    }
}

impl<B: Backend> DoubleQNetwork<B> {
    /// Compute q1 and q2 values for a batch of observations
    ///
    /// Both sub-networks are evaluated independently on the same input; the
    /// evaluations share no state and may run in either order.
    ///
    /// Args:
    ///   - observations: [batch_size, obs_dim]
    ///
    /// Returns: (q1, q2) value tensors, each [batch_size, act_dim]
    pub fn forward(&self, observations: Tensor<B, 2>) -> (Tensor<B, 2>, Tensor<B, 2>) {
        let q1 = self.q1.forward(observations.clone());
        let q2 = self.q2.forward(observations);

        (q1, q2)
    }

    /// One-line architecture description for logging and debugging
    pub fn summary(&self) -> String {
        format!(
            "DoubleQNetwork(obs_dim={}, hidden_dim={}, num_hidden={}, activation={})",
            self.obs_dim,
            self.q1.hidden_dim(),
            self.q1.num_hidden(),
            self.q1.activation()
        )
    }

    /// The first Q network
    pub fn q1(&self) -> &MLP<B> {
        &self.q1
    }

    /// The second Q network
    pub fn q2(&self) -> &MLP<B> {
        &self.q2
    }

    pub fn obs_dim(&self) -> usize {
        self.obs_dim
    }

    pub fn act_dim(&self) -> usize {
        self.act_dim
    }
}
