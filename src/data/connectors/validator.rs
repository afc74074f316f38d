use crate::error::{Result, RngbiasError};
use crate::types::Sequence;

pub struct SequenceValidator;

impl SequenceValidator {
    /// Check length and domain of a sequence before scoring. Sequences of
    /// the wrong length are rejected rather than truncated or padded.
    pub fn validate(sequence: &Sequence, expected_len: usize) -> Result<()> {
        Self::validate_length(sequence, expected_len)?;
        Self::validate_domain(sequence)
    }

    pub fn validate_length(sequence: &Sequence, expected_len: usize) -> Result<()> {
        if sequence.is_empty() {
            return Err(RngbiasError::Input("sequence is empty".to_string()));
        }
        if sequence.len() != expected_len {
            return Err(RngbiasError::Input(format!(
                "expected {} values, got {}",
                expected_len,
                sequence.len()
            )));
        }
        Ok(())
    }

    /// Every value must be finite and inside [0, 1)
    pub fn validate_domain(sequence: &Sequence) -> Result<()> {
        match sequence
            .values()
            .iter()
            .enumerate()
            .find(|(_, v)| !(0.0..1.0).contains(*v))
        {
            Some((i, v)) => Err(RngbiasError::Input(format!(
                "value {} at position {} is outside [0, 1)",
                v, i
            ))),
            None => Ok(()),
        }
    }
}
