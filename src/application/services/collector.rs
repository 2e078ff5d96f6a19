//! Interactive input collection
//!
//! Gathers (layer, weight) pairs and the output name through the
//! `Prompter` boundary. A minimum of two layers is enforced by never
//! offering loop termination before the second entry; a non-numeric
//! weight aborts the whole run.

use std::sync::Arc;

use tracing::debug;

use crate::application::{ApplicationError, ApplicationResult};
use crate::domain::{DomainError, Layer, MIN_LAYERS};
use crate::infrastructure::traits::Prompter;

/// Service collecting the analysis inputs interactively.
pub struct CollectorService {
    prompter: Arc<dyn Prompter>,
}

impl CollectorService {
    /// Create a new collector service.
    pub fn new(prompter: Arc<dyn Prompter>) -> Self {
        Self { prompter }
    }

    /// Collect at least two (layer, weight) pairs.
    ///
    /// The continuation prompt terminates on a case-insensitive "n";
    /// any other answer continues the loop. A weight that does not
    /// parse as a number is terminal, no retry.
    pub fn collect_layers(&self) -> ApplicationResult<Vec<Layer>> {
        let mut layers: Vec<Layer> = Vec::new();

        loop {
            let message = if layers.is_empty() {
                "Enter first layer name:"
            } else {
                "Enter layer name:"
            };
            let name = self.input(message)?;
            if name.is_empty() {
                return Err(ApplicationError::EmptyLayerName);
            }
            let weight = self.input("Enter weight:")?;
            let weight = weight
                .parse::<f64>()
                .map_err(|_| DomainError::WeightNotNumeric { input: weight })?;
            layers.push(Layer::new(name, weight));
            debug!(count = layers.len(), "layer collected");

            if layers.len() < MIN_LAYERS {
                continue;
            }
            let more = self.input("Add another layer to the analysis? (Y/N):")?;
            if more.eq_ignore_ascii_case("n") {
                break;
            }
        }

        Ok(layers)
    }

    /// Ask for the name of the output dataset.
    pub fn prompt_output_name(&self) -> ApplicationResult<String> {
        let name = self.input("Enter the name of the output file:")?;
        if name.is_empty() {
            return Err(ApplicationError::EmptyOutputName);
        }
        Ok(name)
    }

    fn input(&self, message: &str) -> ApplicationResult<String> {
        self.prompter
            .input(message)
            .map_err(|source| ApplicationError::Prompt { source })
    }
}
