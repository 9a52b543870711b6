use burn::backend::ndarray::{NdArray, NdArrayDevice};
use burn::tensor::{Distribution, Tensor};
use rlnet::nn::DoubleQNetworkConfig;

const BATCH_SIZE: usize = 8;
const OBS_DIM: usize = 4;
const ACT_DIM: usize = 2;

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let device = NdArrayDevice::default();

    // Two value heads over ACT_DIM discrete actions, silu activation (default)
    let network = DoubleQNetworkConfig::new(OBS_DIM, ACT_DIM, 64, 1)
        .init::<NdArray>(&device)
        .unwrap();

    println!("{}", network.summary());
    println!("q1: {}", network.q1().summary());
    println!("q2: {}", network.q2().summary());

    let observations = Tensor::<NdArray, 2>::random(
        [BATCH_SIZE, OBS_DIM],
        Distribution::Uniform(-1.0, 1.0),
        &device,
    );

    let (q1, q2) = network.forward(observations);

    println!(
        "q1 shape: {:?} | q2 shape: {:?}",
        q1.shape().dims,
        q2.shape().dims
    );
    println!("q1 values:\n{q1}");
    println!("q2 values:\n{q2}");
}
