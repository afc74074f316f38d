use crate::error::{Result, RngbiasError};
use rand::distributions::WeightedIndex;
use rand::prelude::*;

/// Draws random sequences to feed the scorer with.
#[derive(Debug, Clone)]
pub struct SequenceGenerator {
    choices: Vec<String>,
    weights: Option<WeightedIndex<f64>>,
}

impl Default for SequenceGenerator {
    fn default() -> Self {
        Self {
            choices: (1..=6).map(|face| face.to_string()).collect(),
            weights: None,
        }
    }
}

impl SequenceGenerator {
    /// Uniform generator over `choices`, or weighted when `weights` is given
    /// (one non-negative weight per choice, not all zero).
    pub fn new(choices: Vec<String>, weights: Option<Vec<f64>>) -> Result<Self> {
        if choices.is_empty() {
            return Err(RngbiasError::Configuration("choices must not be empty".to_string()));
        }

        let weights = match weights {
            Some(weights) => {
                if weights.len() != choices.len() {
                    return Err(RngbiasError::Configuration(format!(
                        "{} weights given for {} choices",
                        weights.len(),
                        choices.len()
                    )));
                }
                let index = WeightedIndex::new(&weights)
                    .map_err(|e| RngbiasError::Configuration(format!("Invalid weights: {}", e)))?;
                Some(index)
            }
            None => None,
        };

        Ok(Self { choices, weights })
    }

    /// Concatenation of `len` randomly drawn choices
    pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R, len: usize) -> String {
        (0..len)
            .map(|_| {
                let i = match &self.weights {
                    Some(index) => index.sample(rng),
                    None => rng.gen_range(0..self.choices.len()),
                };
                self.choices[i].as_str()
            })
            .collect()
    }

    /// `len` reals drawn uniformly from [0, 1)
    pub fn generate_unit<R: Rng + ?Sized>(rng: &mut R, len: usize) -> Vec<f64> {
        (0..len).map(|_| rng.gen::<f64>()).collect()
    }
}
