//! Activation functions and their derivatives
//!
//! Activations are applied vector-wise over a whole layer. Derivatives are
//! evaluated on the recorded pre-activation values during backpropagation.

use serde::{Deserialize, Serialize};

/// Bound applied to the sigmoid argument before exponentiation, so `exp`
/// cannot overflow.
const SIGMOID_CLAMP: f64 = 500.0;

/// Logistic sigmoid with a clamped argument.
pub fn sigmoid(x: f64) -> f64 {
    let x = x.clamp(-SIGMOID_CLAMP, SIGMOID_CLAMP);
    1.0 / (1.0 + (-x).exp())
}

fn sigmoid_derivative(x: f64) -> f64 {
    let s = sigmoid(x);
    s * (1.0 - s)
}

pub fn relu(x: f64) -> f64 {
    x.max(0.0)
}

fn relu_derivative(x: f64) -> f64 {
    if x > 0.0 { 1.0 } else { 0.0 }
}

/// Numerically stable softmax over a whole layer.
///
/// The maximum entry is subtracted before exponentiation, so entries of any
/// magnitude stay finite.
pub fn softmax(z: &[f64]) -> Vec<f64> {
    let max = z.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let exps: Vec<f64> = z.iter().map(|&x| (x - max).exp()).collect();
    let sum: f64 = exps.iter().sum();
    exps.into_iter().map(|e| e / sum).collect()
}

/// Activation kind attached to a layer.
///
/// Resolved once when a layer descriptor is built; unknown names fall back
/// to `Identity`, the pass-through.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum Activation {
    Relu,
    Sigmoid,
    Softmax,
    Identity,
}

impl From<String> for Activation {
    fn from(name: String) -> Self {
        Activation::from_name(&name)
    }
}

impl Activation {
    /// Maps a name to an activation kind, defaulting to `Identity` for
    /// anything unrecognized.
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "relu" => Activation::Relu,
            "sigmoid" => Activation::Sigmoid,
            "softmax" => Activation::Softmax,
            _ => Activation::Identity,
        }
    }

    /// Applies the activation over a full pre-activation vector.
    pub fn apply(self, z: &[f64]) -> Vec<f64> {
        match self {
            Activation::Relu => z.iter().map(|&x| relu(x)).collect(),
            Activation::Sigmoid => z.iter().map(|&x| sigmoid(x)).collect(),
            Activation::Softmax => softmax(z),
            Activation::Identity => z.to_vec(),
        }
    }

    /// Elementwise derivative at the given pre-activation vector.
    ///
    /// Softmax exposes no standalone derivative: it is only ever paired
    /// with cross-entropy at the output layer, where the combined gradient
    /// is the plain `output - target` delta. Like `Identity` it contributes
    /// a factor of one here.
    pub fn derivative(self, z: &[f64]) -> Vec<f64> {
        match self {
            Activation::Relu => z.iter().map(|&x| relu_derivative(x)).collect(),
            Activation::Sigmoid => z.iter().map(|&x| sigmoid_derivative(x)).collect(),
            Activation::Softmax | Activation::Identity => vec![1.0; z.len()],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sigmoid_basic_values() {
        assert!((sigmoid(0.0) - 0.5).abs() < 1e-12);
        assert!(sigmoid(10.0) > 0.9999);
        assert!(sigmoid(-10.0) < 0.0001);
    }

    #[test]
    fn sigmoid_survives_extreme_arguments() {
        assert_eq!(sigmoid(1e9), 1.0);
        assert!(sigmoid(-1e9) >= 0.0);
        assert!(sigmoid(-1e9) < 1e-200);
    }

    #[test]
    fn relu_clips_negatives() {
        assert_eq!(relu(-3.0), 0.0);
        assert_eq!(relu(2.5), 2.5);
        assert_eq!(relu_derivative(-0.1), 0.0);
        assert_eq!(relu_derivative(0.1), 1.0);
    }

    #[test]
    fn softmax_sums_to_one() {
        for z in [
            vec![1.0, 2.0, 3.0, 4.0],
            vec![-5.0, 0.0, 5.0],
            vec![1000.0, 1000.0, 999.0],
            vec![-1e8, 1e8],
        ] {
            let out = softmax(&z);
            let sum: f64 = out.iter().sum();
            assert!((sum - 1.0).abs() < 1e-9, "sum was {sum} for {z:?}");
            assert!(out.iter().all(|&p| p.is_finite()));
        }
    }

    #[test]
    fn softmax_orders_like_input() {
        let out = softmax(&[1.0, 3.0, 2.0]);
        assert!(out[1] > out[2] && out[2] > out[0]);
    }

    #[test]
    fn unknown_names_fall_back_to_identity() {
        assert_eq!(Activation::from_name("relu"), Activation::Relu);
        assert_eq!(Activation::from_name("SoftMax"), Activation::Softmax);
        assert_eq!(Activation::from_name("tanh"), Activation::Identity);
        assert_eq!(Activation::from_name(""), Activation::Identity);
    }

    #[test]
    fn identity_passes_through() {
        let z = [0.5, -0.5, 2.0];
        assert_eq!(Activation::Identity.apply(&z), z.to_vec());
        assert_eq!(Activation::Identity.derivative(&z), vec![1.0, 1.0, 1.0]);
        assert_eq!(Activation::Softmax.derivative(&z), vec![1.0, 1.0, 1.0]);
    }
}
