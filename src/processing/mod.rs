//! Skill extraction, scoring, stack handling and ranking

pub mod analyzer;
pub mod career_scorer;
pub mod ranker;
pub mod skill_extractor;
pub mod stack;
pub mod study_focus;
pub mod text_processor;

/// Round half away from zero to two decimals.
///
/// Half-to-even rounding would differ only on exact ties such as 1 of 32
/// skills (3.125 becomes 3.13 here, 3.12 under banker's rounding).
pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
