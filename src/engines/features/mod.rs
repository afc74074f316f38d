// src/engines/features/mod.rs
pub mod histogram;
pub mod patterns;

use crate::types::{FeatureId, FeatureVector, Sequence, FACES, FEATURE_COUNT};
use histogram::{count_windows, Histogram, Window};

/// How a single feature is measured.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeatureKind {
    /// Chi-square of single faces over a percent span of the sequence
    ChiSquare { begin_pct: usize, end_pct: usize },
    /// Adjacent pairs whose faces differ in parity
    OddEvenPairs,
    /// Windows of `length` identical faces
    Streak { length: usize },
    TwoPairs,
    FullHouse,
    /// Windows of `width` faces bracketed by X holding `inner` more X
    Bracketed { width: usize, inner: usize },
}

impl FeatureKind {
    pub fn of(id: FeatureId) -> Self {
        match id.number() {
            1 => Self::ChiSquare { begin_pct: 0, end_pct: 100 },
            2 => Self::ChiSquare { begin_pct: 0, end_pct: 30 },
            3 => Self::ChiSquare { begin_pct: 23, end_pct: 53 },
            4 => Self::ChiSquare { begin_pct: 47, end_pct: 77 },
            5 => Self::ChiSquare { begin_pct: 70, end_pct: 100 },
            6 => Self::OddEvenPairs,
            7 => Self::Streak { length: 2 },
            8 => Self::Streak { length: 3 },
            9 => Self::Streak { length: 4 },
            10 => Self::TwoPairs,
            11 => Self::FullHouse,
            12 => Self::Bracketed { width: 4, inner: 1 },
            13 => Self::Bracketed { width: 5, inner: 1 },
            14 => Self::Bracketed { width: 6, inner: 2 },
            _ => Self::Bracketed { width: 7, inner: 2 },
        }
    }

    /// Symbols a single window spans
    pub fn width(&self) -> usize {
        match self {
            Self::ChiSquare { .. } => 1,
            Self::OddEvenPairs => 2,
            Self::Streak { length } => *length,
            Self::TwoPairs => 4,
            Self::FullHouse => 5,
            Self::Bracketed { width, .. } => *width,
        }
    }

    pub fn measure(&self, faces: &[u8]) -> f64 {
        let whole = Window::whole(self.width());
        let count = match *self {
            Self::ChiSquare { begin_pct, end_pct } => {
                let window = Window::span(begin_pct, end_pct);
                return Histogram::collect(faces, window, |w| w[0]).chi_square(FACES);
            }
            Self::OddEvenPairs => count_windows(faces, whole, patterns::odd_even_pair),
            Self::Streak { .. } => count_windows(faces, whole, patterns::streak),
            Self::TwoPairs => count_windows(faces, whole, patterns::two_pairs),
            Self::FullHouse => count_windows(faces, whole, patterns::full_house),
            Self::Bracketed { inner, .. } => {
                count_windows(faces, whole, |w| patterns::bracketed(w, inner))
            }
        };
        count as f64
    }
}

/// Computes the fifteen bias features of a sequence.
#[derive(Debug, Default, Clone, Copy)]
pub struct FeatureExtractor;

impl FeatureExtractor {
    pub fn new() -> Self {
        Self
    }

    pub fn extract(&self, sequence: &Sequence) -> FeatureVector {
        let faces = sequence.faces();
        let mut values = [0.0; FEATURE_COUNT];

        for id in FeatureId::all() {
            values[id.index()] = FeatureKind::of(id).measure(&faces);
            log::trace!("{} ({}) = {}", id, id.name(), values[id.index()]);
        }

        FeatureVector::new(values)
    }

    /// Features of a sequence given directly as faces 1..=6.
    pub fn extract_faces(&self, faces: &[u8]) -> FeatureVector {
        self.extract(&Sequence::from_faces(faces))
    }
}
