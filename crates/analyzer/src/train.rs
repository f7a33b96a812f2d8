//! Training mode orchestration

use std::path::Path;

use chessnet_core::{Network, train};
use log::info;

use crate::dataset::load_training_data;

/// Loads the dataset, runs the epoch loop, and saves the updated network.
///
/// The network file is written once, after every epoch has completed.
pub fn run_train(network: &mut Network, data_file: &str, save_file: &str) -> Result<(), String> {
    let data = load_training_data(data_file)?;
    if data.is_empty() {
        return Err("No valid training data found".to_string());
    }

    println!("Training on {} samples...", data.len());

    let summary = train(network, &data, true).map_err(|e| e.to_string())?;
    info!(
        "trained {} epochs over {} samples, final loss {}",
        summary.epochs,
        summary.samples,
        summary.final_loss()
    );

    network
        .save(Path::new(save_file))
        .map_err(|e| e.to_string())?;
    println!("Training complete. Network saved to {}", save_file);
    Ok(())
}
