//! Forward propagation
//!
//! One pass computes `z = W·a + b` and `a' = activation(z)` per layer,
//! retaining every intermediate value for the matching backward pass.

use crate::error::{Error, Result};
use crate::network::Network;

/// Intermediate values recorded by one forward pass.
///
/// `activations[0]` is the input vector; `zs[i]` and `activations[i + 1]`
/// belong to layer `i`. A cache is consumed by exactly one backward pass
/// and discarded.
#[derive(Debug, Clone)]
pub struct ForwardCache {
    pub zs: Vec<Vec<f64>>,
    pub activations: Vec<Vec<f64>>,
}

impl ForwardCache {
    /// The network output recorded by the pass that produced this cache.
    pub fn output(&self) -> &[f64] {
        self.activations.last().map(Vec::as_slice).unwrap_or(&[])
    }
}

/// Multiplies a `rows x cols` matrix with a `cols`-length vector. The
/// result has one entry per row: the dot product of that row with the
/// vector.
fn mat_vec(matrix: &[Vec<f64>], vector: &[f64]) -> Vec<f64> {
    matrix
        .iter()
        .map(|row| row.iter().zip(vector).map(|(w, v)| w * v).sum())
        .collect()
}

/// Runs one forward pass, returning the output vector and the cache of
/// intermediates needed by backpropagation.
///
/// The input length must match the first layer's expected width; a mismatch
/// is a caller error reported as [`Error::DimensionMismatch`].
pub fn forward(network: &Network, input: &[f64]) -> Result<(Vec<f64>, ForwardCache)> {
    let Some(first) = network.layers.first() else {
        return Err(Error::DimensionMismatch("network has no layers".to_string()));
    };
    if input.len() != first.inputs {
        return Err(Error::DimensionMismatch(format!(
            "input vector has length {}, first layer expects {}",
            input.len(),
            first.inputs
        )));
    }

    let mut cache = ForwardCache {
        zs: Vec::with_capacity(network.layers.len()),
        activations: Vec::with_capacity(network.layers.len() + 1),
    };
    cache.activations.push(input.to_vec());

    let mut current = input.to_vec();
    for (i, layer) in network.layers.iter().enumerate() {
        let mut z = mat_vec(&network.weights[i], &current);
        for (zj, b) in z.iter_mut().zip(&network.biases[i]) {
            *zj += b;
        }
        current = layer.activation.apply(&z);
        cache.zs.push(z);
        cache.activations.push(current.clone());
    }

    Ok((current, cache))
}
