//! Strengths, suggestions, and format issues derived from the analyzers' output.

use crate::analysis::content::{length_issue, ContentQuality, LengthIssue};
use crate::analysis::scoring::ratio;
use crate::analysis::sections::SectionReport;
use crate::analysis::skills::{SkillMatchReport, SoftSkillReport};

const STRENGTH_THRESHOLD: f64 = 0.7;
const SUGGESTION_THRESHOLD: u32 = 70;

pub const STRONG_TECHNICAL_MATCH: &str = "Strong technical skill match with job requirements";
pub const SOFT_SKILLS_ALIGNMENT: &str = "Excellent soft skills alignment";
pub const QUANTIFIABLE_ACHIEVEMENTS: &str = "Good use of quantifiable achievements";
pub const DEFAULT_STRENGTH: &str = "Good overall presentation";

pub const DEFAULT_SUGGESTION: &str = "Your resume is well-aligned with the job requirements";

pub const TOO_BRIEF: &str = "Resume is too brief - add more detailed experience";
pub const TOO_LONG: &str = "Resume is too long - aim for 1-2 pages";
pub const USE_BULLET_POINTS: &str = "Use bullet points to better structure your experience";
pub const NO_FORMAT_ISSUES: &str = "No major format issues found";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Insights {
    pub strengths: Vec<String>,
    pub suggestions: Vec<String>,
    pub format_issues: Vec<String>,
}

/// True only when there is something to compare: a zero denominator never
/// counts as exceeding the threshold.
fn exceeds(part: u32, whole: u32, threshold: f64) -> bool {
    ratio(part, whole).is_some_and(|r| r > threshold)
}

fn or_default(items: Vec<String>, default: &str) -> Vec<String> {
    if items.is_empty() {
        vec![default.to_string()]
    } else {
        items
    }
}

pub fn strengths(
    skills: &SkillMatchReport,
    soft: &SoftSkillReport,
    content: &ContentQuality,
) -> Vec<String> {
    let mut strengths = Vec::new();
    if exceeds(skills.total_matched, skills.total_required, STRENGTH_THRESHOLD) {
        strengths.push(STRONG_TECHNICAL_MATCH.to_string());
    }
    if exceeds(soft.total_matched, soft.total_required, STRENGTH_THRESHOLD) {
        strengths.push(SOFT_SKILLS_ALIGNMENT.to_string());
    }
    if content.has_quantifiable_results {
        strengths.push(QUANTIFIABLE_ACHIEVEMENTS.to_string());
    }
    or_default(strengths, DEFAULT_STRENGTH)
}

pub fn suggestions(skills: &SkillMatchReport) -> Vec<String> {
    let suggestions = skills
        .categories
        .iter()
        .filter(|c| c.percentage < SUGGESTION_THRESHOLD)
        .map(|c| format!("Strengthen {} skills: {}", c.category, c.missing().join(", ")))
        .collect();
    or_default(suggestions, DEFAULT_SUGGESTION)
}

pub fn format_issues(
    resume: &str,
    sections: &SectionReport,
    content: &ContentQuality,
) -> Vec<String> {
    let mut issues = Vec::new();
    if !content.has_proper_length {
        // `has_proper_length` is derived from `length_issue`, so one of the two applies
        let issue = match length_issue(resume) {
            Some(LengthIssue::TooLong) => TOO_LONG,
            _ => TOO_BRIEF,
        };
        issues.push(issue.to_string());
    }
    if !content.has_bullet_points {
        issues.push(USE_BULLET_POINTS.to_string());
    }
    if !sections.missing_sections.is_empty() {
        issues.push(format!(
            "Add missing sections: {}",
            sections.missing_sections.join(", ")
        ));
    }
    or_default(issues, NO_FORMAT_ISSUES)
}

pub fn generate_insights(
    resume: &str,
    skills: &SkillMatchReport,
    soft: &SoftSkillReport,
    sections: &SectionReport,
    content: &ContentQuality,
) -> Insights {
    Insights {
        strengths: strengths(skills, soft, content),
        suggestions: suggestions(skills),
        format_issues: format_issues(resume, sections, content),
    }
}
