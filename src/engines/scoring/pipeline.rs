// src/engines/scoring/pipeline.rs
use super::constraint::{ConstraintEvaluator, ConstraintSpec};
use super::objective::{ObjectiveAggregator, ObjectiveSpec};
use super::penalty::BiasParameters;
use crate::data::SequenceValidator;
use crate::engines::features::FeatureExtractor;
use crate::error::{Result, RngbiasError};
use crate::types::{ResultRecord, Sequence};

/// Everything a scoring run needs, resolved and validated up front.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoringConfig {
    /// Expected sequence length
    pub variables: usize,
    pub objectives: ObjectiveSpec,
    pub constraints: ConstraintSpec,
    pub bias: BiasParameters,
}

pub struct ScoringPipeline<'a> {
    config: &'a ScoringConfig,
    extractor: FeatureExtractor,
}

impl<'a> ScoringPipeline<'a> {
    pub fn new(config: &'a ScoringConfig) -> Self {
        Self {
            config,
            extractor: FeatureExtractor::new(),
        }
    }

    pub fn config(&self) -> &ScoringConfig {
        self.config
    }

    /// Score a sequence. Failures never escape: they are reported in the
    /// record's `error` field with no objective and no constraints.
    pub fn score(&self, sequence: &Sequence) -> ResultRecord {
        self.try_score(sequence).unwrap_or_else(Self::failure_record)
    }

    /// Like [`score`](Self::score) for input that may already have failed
    /// to load.
    pub fn score_input(&self, input: Result<Sequence>) -> ResultRecord {
        match input {
            Ok(sequence) => self.score(&sequence),
            Err(e) => Self::failure_record(e),
        }
    }

    pub fn try_score(&self, sequence: &Sequence) -> Result<ResultRecord> {
        SequenceValidator::validate(sequence, self.config.variables)?;

        let features = self.extractor.extract(sequence);
        if let Some(id) = features.first_non_finite() {
            return Err(RngbiasError::Computation(format!(
                "{} ({}) evaluated to {}",
                id,
                id.name(),
                features.get(id)
            )));
        }
        log::debug!("Features: {:?}", features.as_array());

        let objectives =
            ObjectiveAggregator::aggregate(&features, &self.config.objectives, &self.config.bias);
        let constraint = ConstraintEvaluator::evaluate(&features, &self.config.constraints);
        log::info!(
            "Scored {} values: objectives {:?}, {} constraint(s) violated",
            sequence.len(),
            objectives,
            constraint.iter().filter(|&&c| c > 0).count()
        );

        Ok(ResultRecord::success(objectives, constraint))
    }

    fn failure_record(error: RngbiasError) -> ResultRecord {
        if error.is_recoverable() {
            log::warn!("{}", error);
        } else {
            log::error!("{}", error);
        }
        ResultRecord::failure(error.to_string())
    }
}
