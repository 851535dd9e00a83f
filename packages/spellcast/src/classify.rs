//! Direction classifier for a completed capture window.
//!
//! Each directional candidate gets a strong count (samples at or beyond
//! [`THRESHOLD`] in its direction) and a peak (magnitude of the axis extreme
//! on its side). The strongest count wins; when nothing crossed the
//! threshold the largest peak wins if it exceeds [`MIN_PEAK`]; otherwise the
//! window is [`GestureLabel::Other`].
//!
//! Ties resolve to the first candidate in [`GestureLabel::DIRECTIONS`]
//! order: Up, Down, Left, Right.

use super::types::{GestureLabel, Sample};

/// Saturation-adjacent magnitude on the LSM6DS3 16-bit scale.
pub const THRESHOLD: Sample = 32_764;
/// A fallback peak must be strictly above this to classify.
pub const MIN_PEAK: u32 = 10;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct CandidateScore {
    pub label: GestureLabel,
    pub strong_count: usize,
    pub peak: u32,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Basis {
    Count,
    Peak,
    Unclassified,
}

impl Basis {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Count => "count",
            Self::Peak => "peak",
            Self::Unclassified => "none",
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Assessment {
    pub label: GestureLabel,
    pub basis: Basis,
    /// Scores for Up, Down, Left, Right in that order.
    pub candidates: [CandidateScore; 4],
}

impl Assessment {
    pub fn best_by_count(&self) -> CandidateScore {
        first_max_by(&self.candidates, |candidate| candidate.strong_count as u64)
    }

    pub fn best_by_peak(&self) -> CandidateScore {
        first_max_by(&self.candidates, |candidate| candidate.peak as u64)
    }
}

pub fn classify(lateral: &[Sample], vertical: &[Sample]) -> GestureLabel {
    assess(lateral, vertical).label
}

pub fn assess(lateral: &[Sample], vertical: &[Sample]) -> Assessment {
    let candidates = [
        score_positive(GestureLabel::Up, vertical),
        score_negative(GestureLabel::Down, vertical),
        score_positive(GestureLabel::Left, lateral),
        score_negative(GestureLabel::Right, lateral),
    ];

    let mut assessment = Assessment {
        label: GestureLabel::Other,
        basis: Basis::Unclassified,
        candidates,
    };

    let by_count = assessment.best_by_count();
    let by_peak = assessment.best_by_peak();
    if by_count.strong_count > 0 {
        assessment.label = by_count.label;
        assessment.basis = Basis::Count;
    } else if by_peak.peak > MIN_PEAK {
        assessment.label = by_peak.label;
        assessment.basis = Basis::Peak;
    }
    assessment
}

fn score_positive(label: GestureLabel, samples: &[Sample]) -> CandidateScore {
    CandidateScore {
        label,
        strong_count: samples.iter().filter(|&&value| value >= THRESHOLD).count(),
        peak: samples.iter().max().map_or(0, |value| value.unsigned_abs()),
    }
}

fn score_negative(label: GestureLabel, samples: &[Sample]) -> CandidateScore {
    CandidateScore {
        label,
        strong_count: samples.iter().filter(|&&value| value <= -THRESHOLD).count(),
        peak: samples.iter().min().map_or(0, |value| value.unsigned_abs()),
    }
}

// `Iterator::max_by_key` keeps the last maximum; the tie-break needs the first.
fn first_max_by<F>(candidates: &[CandidateScore; 4], key: F) -> CandidateScore
where
    F: Fn(&CandidateScore) -> u64,
{
    let mut best = candidates[0];
    for candidate in &candidates[1..] {
        if key(candidate) > key(&best) {
            best = *candidate;
        }
    }
    best
}
