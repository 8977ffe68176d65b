#![allow(dead_code)]

//! Hard-skill and soft-skill matching between a resume and a job description.
//!
//! A keyword is "required" when it occurs in the job description and
//! "matched" when a required keyword also occurs in the resume. Categories
//! with nothing required are left out entirely.

use crate::analysis::normalize::NormalizedText;
use crate::analysis::scoring::percentage;
use crate::analysis::taxonomy::{Category, HARD_SKILLS, SOFT_SKILLS};

// ────────────────────────────────────────────────────────────────────────────
// Hard skills
// ────────────────────────────────────────────────────────────────────────────

/// Per-category keyword match for a hard-skill category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryMatch {
    pub category: &'static str,
    /// Taxonomy keywords found in the job description, in taxonomy order.
    pub required: Vec<&'static str>,
    /// Subset of `required` also found in the resume.
    pub matched: Vec<&'static str>,
    /// round(100 × matched / required)
    pub percentage: u32,
}

impl CategoryMatch {
    /// Required keywords absent from the resume, in taxonomy order.
    pub fn missing(&self) -> Vec<&'static str> {
        self.required
            .iter()
            .filter(|k| !self.matched.contains(k))
            .copied()
            .collect()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SkillMatchReport {
    pub categories: Vec<CategoryMatch>,
    pub total_required: u32,
    pub total_matched: u32,
}

impl SkillMatchReport {
    /// Aggregate match across all categories. 0 when the job description
    /// names no recognized skill, which callers should read as "not applicable".
    pub fn job_match_percentage(&self) -> u32 {
        percentage(self.total_matched, self.total_required)
    }
}

pub fn match_hard_skills(resume: &NormalizedText, job: &NormalizedText) -> SkillMatchReport {
    match_categories(HARD_SKILLS, resume, job)
}

fn match_categories(
    taxonomy: &[Category],
    resume: &NormalizedText,
    job: &NormalizedText,
) -> SkillMatchReport {
    let mut report = SkillMatchReport::default();

    for &(category, keywords) in taxonomy {
        let required: Vec<&'static str> =
            keywords.iter().copied().filter(|k| job.contains(k)).collect();
        if required.is_empty() {
            continue;
        }

        let matched: Vec<&'static str> =
            required.iter().copied().filter(|k| resume.contains(k)).collect();

        report.total_required += required.len() as u32;
        report.total_matched += matched.len() as u32;
        report.categories.push(CategoryMatch {
            category,
            percentage: percentage(matched.len() as u32, required.len() as u32),
            required,
            matched,
        });
    }

    report
}

// ────────────────────────────────────────────────────────────────────────────
// Soft skills
// ────────────────────────────────────────────────────────────────────────────

/// Presence of a soft-skill family. Only families the job asks for are recorded,
/// so `required` is always true for recorded entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SoftSkillMatch {
    pub category: &'static str,
    pub required: bool,
    pub present: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SoftSkillReport {
    pub categories: Vec<SoftSkillMatch>,
    pub total_required: u32,
    pub total_matched: u32,
}

pub fn match_soft_skills(resume: &NormalizedText, job: &NormalizedText) -> SoftSkillReport {
    let mut report = SoftSkillReport::default();

    for &(category, keywords) in SOFT_SKILLS {
        if !job.contains_any(keywords) {
            continue;
        }
        let present = resume.contains_any(keywords);

        report.total_required += 1;
        if present {
            report.total_matched += 1;
        }
        report.categories.push(SoftSkillMatch {
            category,
            required: true,
            present,
        });
    }

    report
}
