//! Cross-entropy loss, backpropagation, and the epoch loop
//!
//! Training is fully online stochastic gradient descent: one forward pass,
//! one loss accumulation, and one in-place parameter update per sample, in
//! dataset order. There is no batching and no accumulation across samples.

use log::debug;

use crate::error::Result;
use crate::forward::{ForwardCache, forward};
use crate::network::Network;

/// Floor applied inside the loss logarithm, guarding against `ln(0)`.
pub const LOSS_EPSILON: f64 = 1e-15;

/// Epoch count policy: large datasets get fewer passes.
pub fn epochs_for(sample_count: usize) -> usize {
    if sample_count > 1000 { 20 } else { 100 }
}

/// Cross-entropy between a probability-like output and a one-hot target.
///
/// Meaningful when the output layer is softmax; always non-negative for
/// one-hot targets.
pub fn cross_entropy(predicted: &[f64], target: &[f64]) -> f64 {
    predicted
        .iter()
        .zip(target)
        .map(|(&p, &t)| -t * p.max(LOSS_EPSILON).ln())
        .sum()
}

/// One backpropagation step with an immediate gradient-descent update.
///
/// The output delta is `output - target`, the combined gradient of
/// cross-entropy through a softmax output layer. Walking layers from last
/// to first, the error for the previous layer is read from the weights as
/// they stand before this layer's update, then the layer takes its step:
/// `w -= lr * delta[j] * input_activation[k]`, `b -= lr * delta[j]`.
pub fn backprop(network: &mut Network, cache: &ForwardCache, target: &[f64], learning_rate: f64) {
    if network.layers.is_empty() {
        return;
    }

    let output = cache.output();
    let mut delta: Vec<f64> = output.iter().zip(target).map(|(o, t)| o - t).collect();

    for i in (0..network.layers.len()).rev() {
        let input = &cache.activations[i];

        // Error signal for layer i-1, taken through the pre-update weights
        // and scaled by that layer's activation derivative at its recorded
        // pre-activation.
        let propagated = (i > 0).then(|| {
            let mut error = vec![0.0; network.layers[i].inputs];
            for (row, &d) in network.weights[i].iter().zip(&delta) {
                for (e, &w) in error.iter_mut().zip(row) {
                    *e += w * d;
                }
            }
            let derivative = network.layers[i - 1].activation.derivative(&cache.zs[i - 1]);
            error
                .iter()
                .zip(&derivative)
                .map(|(e, d)| e * d)
                .collect::<Vec<f64>>()
        });

        for (row, &d) in network.weights[i].iter_mut().zip(&delta) {
            for (w, &a) in row.iter_mut().zip(input) {
                *w -= learning_rate * d * a;
            }
        }
        for (b, &d) in network.biases[i].iter_mut().zip(&delta) {
            *b -= learning_rate * d;
        }

        if let Some(next) = propagated {
            delta = next;
        }
    }
}

/// Summary of a completed training run.
#[derive(Debug, Clone)]
pub struct TrainingSummary {
    pub samples: usize,
    pub epochs: usize,
    /// Mean loss per epoch, in epoch order.
    pub epoch_losses: Vec<f64>,
}

impl TrainingSummary {
    /// Mean loss of the final epoch.
    pub fn final_loss(&self) -> f64 {
        self.epoch_losses.last().copied().unwrap_or(f64::NAN)
    }
}

/// Runs the full training loop over `data`, mutating the network in place.
///
/// The epoch count follows [`epochs_for`] and the learning rate comes from
/// the network's metadata. Every sample is visited once per epoch in
/// dataset order. A progress line is printed every other epoch when
/// `verbose` is set; saving the result is the caller's job, after all
/// epochs have completed.
pub fn train(
    network: &mut Network,
    data: &[(Vec<f64>, Vec<f64>)],
    verbose: bool,
) -> Result<TrainingSummary> {
    if data.is_empty() {
        debug!("training requested on an empty dataset");
        return Ok(TrainingSummary {
            samples: 0,
            epochs: 0,
            epoch_losses: Vec::new(),
        });
    }

    let epochs = epochs_for(data.len());
    let learning_rate = network.meta.learning_rate;
    let mut epoch_losses = Vec::with_capacity(epochs);

    for epoch in 0..epochs {
        let mut total_loss = 0.0;
        for (input, target) in data {
            let (output, cache) = forward(network, input)?;
            total_loss += cross_entropy(&output, target);
            backprop(network, &cache, target, learning_rate);
        }

        let mean_loss = total_loss / data.len() as f64;
        epoch_losses.push(mean_loss);
        debug!("epoch {epoch}: mean loss {mean_loss}");
        if verbose && epoch % 2 == 0 {
            println!("Epoch {}/{}, Loss: {:.4}", epoch, epochs, mean_loss);
        }
    }

    Ok(TrainingSummary {
        samples: data.len(),
        epochs,
        epoch_losses,
    })
}

#[cfg(test)]
#[path = "training_tests.rs"]
mod training_tests;
