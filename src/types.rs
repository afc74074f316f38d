use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of features in the bias model (F1..F15)
pub const FEATURE_COUNT: usize = 15;

/// Number of distinct symbols a sequence value is bucketed into
pub const FACES: usize = 6;

/// 1-based feature identifier, always within 1..=15
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FeatureId(u8);

impl FeatureId {
    pub fn new(number: usize) -> Option<Self> {
        if (1..=FEATURE_COUNT).contains(&number) {
            Some(Self(number as u8))
        } else {
            None
        }
    }

    /// The 1-based feature number
    pub fn number(self) -> usize {
        self.0 as usize
    }

    /// Zero-based position inside a `FeatureVector`
    pub fn index(self) -> usize {
        self.0 as usize - 1
    }

    pub fn all() -> impl Iterator<Item = FeatureId> {
        (1..=FEATURE_COUNT).map(|n| FeatureId(n as u8))
    }

    pub fn name(self) -> &'static str {
        match self.0 {
            1 => "chi_square_all",
            2 => "chi_square_q1",
            3 => "chi_square_q2",
            4 => "chi_square_q3",
            5 => "chi_square_q4",
            6 => "odd_even_pairs",
            7 => "two_streaks",
            8 => "three_streaks",
            9 => "four_streaks",
            10 => "two_pairs",
            11 => "full_houses",
            12 => "three_in_four",
            13 => "three_in_five",
            14 => "four_in_six",
            _ => "four_in_seven",
        }
    }
}

impl fmt::Display for FeatureId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "F{}", self.0)
    }
}

/// Sequence of values expected in [0, 1)
#[derive(Debug, Clone, PartialEq)]
pub struct Sequence {
    values: Vec<f64>,
}

impl Sequence {
    pub fn new(values: Vec<f64>) -> Self {
        Self { values }
    }

    /// Build a sequence from die faces 1..=6, placing each value at the
    /// centre of its bucket.
    pub fn from_faces(faces: &[u8]) -> Self {
        let values = faces
            .iter()
            .map(|&face| (f64::from(face) - 0.5) / FACES as f64)
            .collect();
        Self { values }
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Bucket every value into a face 1..=6. Values outside [0, 1) are
    /// clamped to the nearest bucket so this never fails.
    pub fn faces(&self) -> Vec<u8> {
        self.values.iter().map(|&v| face_of(v)).collect()
    }
}

fn face_of(value: f64) -> u8 {
    // `as` saturates and maps NaN to 0
    let bucket = (value * FACES as f64).floor() as i64;
    bucket.clamp(0, FACES as i64 - 1) as u8 + 1
}

/// One score per feature, indexed by `FeatureId`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeatureVector([f64; FEATURE_COUNT]);

impl FeatureVector {
    pub fn new(values: [f64; FEATURE_COUNT]) -> Self {
        Self(values)
    }

    pub fn get(&self, id: FeatureId) -> f64 {
        self.0[id.index()]
    }

    pub fn as_array(&self) -> &[f64; FEATURE_COUNT] {
        &self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = (FeatureId, f64)> + '_ {
        FeatureId::all().map(move |id| (id, self.get(id)))
    }

    /// First feature whose value is NaN or infinite
    pub fn first_non_finite(&self) -> Option<FeatureId> {
        self.iter().find(|(_, v)| !v.is_finite()).map(|(id, _)| id)
    }
}

/// Objective value(s) of a record: a bare number for a single group
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Objective {
    Single(f64),
    Multiple(Vec<f64>),
}

impl Objective {
    pub fn from_values(mut values: Vec<f64>) -> Self {
        if values.len() == 1 {
            Self::Single(values.remove(0))
        } else {
            Self::Multiple(values)
        }
    }

    pub fn values(&self) -> Vec<f64> {
        match self {
            Self::Single(v) => vec![*v],
            Self::Multiple(vs) => vs.clone(),
        }
    }
}

/// Terminal artifact of one scoring invocation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultRecord {
    pub objective: Option<Objective>,
    pub constraint: Vec<u32>,
    pub error: Option<String>,
}

impl ResultRecord {
    pub fn success(objectives: Vec<f64>, constraint: Vec<u32>) -> Self {
        Self {
            objective: Some(Objective::from_values(objectives)),
            constraint,
            error: None,
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            objective: None,
            constraint: Vec::new(),
            error: Some(message.into()),
        }
    }

    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feature_id_range() {
        assert!(FeatureId::new(0).is_none());
        assert!(FeatureId::new(16).is_none());
        assert_eq!(FeatureId::new(15).unwrap().index(), 14);
        assert_eq!(FeatureId::all().count(), FEATURE_COUNT);
    }

    #[test]
    fn test_faces_bucket_values() {
        let seq = Sequence::new(vec![0.0, 0.17, 0.5, 0.9999, 1.0, -0.3, f64::NAN]);
        assert_eq!(seq.faces(), vec![1, 2, 4, 6, 6, 1, 1]);
    }

    #[test]
    fn test_from_faces_round_trips_buckets() {
        let faces = vec![1, 2, 3, 4, 5, 6];
        assert_eq!(Sequence::from_faces(&faces).faces(), faces);
    }

    #[test]
    fn test_record_serialization_shape() {
        let record = ResultRecord::success(vec![1.5], vec![0, 1]);
        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(json, r#"{"objective":1.5,"constraint":[0,1],"error":null}"#);

        let record = ResultRecord::success(vec![1.5, 2.0], vec![]);
        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(json, r#"{"objective":[1.5,2.0],"constraint":[],"error":null}"#);

        let record = ResultRecord::failure("bad input");
        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(json, r#"{"objective":null,"constraint":[],"error":"bad input"}"#);
    }
}
