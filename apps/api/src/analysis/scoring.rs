//! Score composition.
//!
//! Starts from a baseline of 100, adds the technical and soft-skill
//! contributions, subtracts structure and content penalties, then rounds and
//! clamps to [0, 100]. When the job description names no recognized skills,
//! the corresponding contribution takes its full value, so a job description
//! with zero recognized keywords earns the same skill credit as a perfect match.

use crate::analysis::content::ContentQuality;
use crate::analysis::sections::SectionReport;
use crate::analysis::skills::{SkillMatchReport, SoftSkillReport};

pub const BASELINE: f64 = 100.0;
pub const TECHNICAL_WEIGHT: f64 = 40.0;
pub const SOFT_SKILL_WEIGHT: f64 = 20.0;
pub const MISSING_SECTION_PENALTY: f64 = 3.0;
pub const FAILED_CHECK_PENALTY: f64 = 4.0;

/// part / whole, or `None` when `whole` is zero.
pub fn ratio(part: u32, whole: u32) -> Option<f64> {
    (whole > 0).then(|| part as f64 / whole as f64)
}

/// round(100 × part / whole), or 0 when `whole` is zero.
pub fn percentage(part: u32, whole: u32) -> u32 {
    ratio(part, whole)
        .map(|r| (r * 100.0).round() as u32)
        .unwrap_or(0)
}

/// Weighted contribution, defaulting to the full weight when nothing was required.
fn contribution(part: u32, whole: u32, weight: f64) -> f64 {
    ratio(part, whole).map(|r| r * weight).unwrap_or(weight)
}

pub fn technical_contribution(skills: &SkillMatchReport) -> f64 {
    contribution(skills.total_matched, skills.total_required, TECHNICAL_WEIGHT)
}

pub fn soft_skill_contribution(soft: &SoftSkillReport) -> f64 {
    contribution(soft.total_matched, soft.total_required, SOFT_SKILL_WEIGHT)
}

pub fn compose_score(
    skills: &SkillMatchReport,
    soft: &SoftSkillReport,
    sections: &SectionReport,
    content: &ContentQuality,
) -> u32 {
    let raw = BASELINE + technical_contribution(skills) + soft_skill_contribution(soft)
        - sections.missing_sections.len() as f64 * MISSING_SECTION_PENALTY
        - content.failed_checks() as f64 * FAILED_CHECK_PENALTY;

    raw.round().clamp(0.0, 100.0) as u32
}
