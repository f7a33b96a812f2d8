use super::*;
use crate::activation::Activation;
use crate::network::{LayerSpec, Meta, Network};

/// 1 input, 1 sigmoid output unit, w = 0.5, b = 0.
fn tiny_sigmoid_network(learning_rate: f64) -> Network {
    Network {
        meta: Meta { learning_rate },
        layers: vec![LayerSpec {
            inputs: 1,
            outputs: 1,
            activation: Activation::Sigmoid,
        }],
        weights: vec![vec![vec![0.5]]],
        biases: vec![vec![0.0]],
    }
}

/// 1 input fanning out into a 4-way softmax head.
fn softmax_head_network(learning_rate: f64) -> Network {
    Network {
        meta: Meta { learning_rate },
        layers: vec![LayerSpec {
            inputs: 1,
            outputs: 4,
            activation: Activation::Softmax,
        }],
        weights: vec![vec![vec![0.1], vec![-0.2], vec![0.3], vec![0.0]]],
        biases: vec![vec![0.0; 4]],
    }
}

#[test]
fn epoch_policy_follows_dataset_size() {
    assert_eq!(epochs_for(1), 100);
    assert_eq!(epochs_for(1000), 100);
    assert_eq!(epochs_for(1001), 20);
    assert_eq!(epochs_for(50_000), 20);
}

#[test]
fn cross_entropy_is_non_negative() {
    assert!(cross_entropy(&[0.25, 0.25, 0.25, 0.25], &[0.0, 1.0, 0.0, 0.0]) >= 0.0);
    assert!(cross_entropy(&[0.9, 0.05, 0.03, 0.02], &[1.0, 0.0, 0.0, 0.0]) >= 0.0);

    // A perfect prediction costs nothing
    let perfect = cross_entropy(&[0.0, 1.0, 0.0, 0.0], &[0.0, 1.0, 0.0, 0.0]);
    assert!(perfect.abs() < 1e-12);
}

#[test]
fn cross_entropy_survives_zero_probability() {
    let loss = cross_entropy(&[0.0, 1.0], &[1.0, 0.0]);
    assert!(loss.is_finite());
    assert!((loss - (-(LOSS_EPSILON.ln()))).abs() < 1e-9);
}

#[test]
fn single_step_decreases_loss() {
    let mut network = tiny_sigmoid_network(0.5);
    let input = [1.0];
    let target = [1.0];

    let (output, cache) = forward(&network, &input).unwrap();
    let loss_before = cross_entropy(&output, &target);

    let learning_rate = network.meta.learning_rate;
    backprop(&mut network, &cache, &target, learning_rate);

    let (output, _) = forward(&network, &input).unwrap();
    let loss_after = cross_entropy(&output, &target);
    assert!(
        loss_after < loss_before,
        "loss went {loss_before} -> {loss_after}"
    );
}

#[test]
fn backprop_updates_match_hand_computation() {
    // 1 -> 1 sigmoid -> 1 identity, all chained by hand:
    //   z0 = 0.5, a0 = sigmoid(0.5), z1 = a0, delta1 = a0 - 1.
    // The error propagated to layer 0 must go through layer 1's weight as
    // it was before the update (1.0), not after.
    let mut network = Network {
        meta: Meta { learning_rate: 0.1 },
        layers: vec![
            LayerSpec {
                inputs: 1,
                outputs: 1,
                activation: Activation::Sigmoid,
            },
            LayerSpec {
                inputs: 1,
                outputs: 1,
                activation: Activation::Identity,
            },
        ],
        weights: vec![vec![vec![0.5]], vec![vec![1.0]]],
        biases: vec![vec![0.0], vec![0.0]],
    };

    let (_, cache) = forward(&network, &[1.0]).unwrap();
    backprop(&mut network, &cache, &[1.0], 0.1);

    let s = 1.0 / (1.0 + (-0.5f64).exp());
    let delta1 = s - 1.0;
    let delta0 = delta1 * 1.0 * (s * (1.0 - s));

    let w1 = 1.0 - 0.1 * delta1 * s;
    let b1 = -0.1 * delta1;
    let w0 = 0.5 - 0.1 * delta0 * 1.0;
    let b0 = -0.1 * delta0;

    assert!((network.weights[1][0][0] - w1).abs() < 1e-12);
    assert!((network.biases[1][0] - b1).abs() < 1e-12);
    assert!((network.weights[0][0][0] - w0).abs() < 1e-12);
    assert!((network.biases[0][0] - b0).abs() < 1e-12);
}

#[test]
fn repeated_training_drives_target_probability_up() {
    let mut network = softmax_head_network(0.1);
    let data = vec![(vec![1.0], vec![0.0, 0.0, 1.0, 0.0])];

    let summary = train(&mut network, &data, false).unwrap();
    assert_eq!(summary.samples, 1);
    assert_eq!(summary.epochs, 100);

    let (output, _) = forward(&network, &[1.0]).unwrap();
    assert!(
        output[2] > 0.9,
        "target probability only reached {}",
        output[2]
    );
}

#[test]
fn training_loss_trends_down() {
    let mut network = softmax_head_network(0.05);
    let data = vec![
        (vec![1.0], vec![1.0, 0.0, 0.0, 0.0]),
        (vec![-1.0], vec![0.0, 0.0, 0.0, 1.0]),
    ];

    let summary = train(&mut network, &data, false).unwrap();
    assert!(summary.final_loss() < summary.epoch_losses[0]);
}

#[test]
fn training_on_empty_dataset_is_a_no_op() {
    let mut network = tiny_sigmoid_network(0.1);
    let before = network.weights.clone();

    let summary = train(&mut network, &[], false).unwrap();
    assert_eq!(summary.samples, 0);
    assert_eq!(summary.epochs, 0);
    assert!(summary.final_loss().is_nan());
    assert_eq!(network.weights, before);
}
