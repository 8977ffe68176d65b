//! Resume analysis engine: composes the matchers, detectors, and insight
//! generation into a single `AnalysisResult`.
//!
//! `analyze` is a pure, synchronous function of its two inputs. It reads only
//! the immutable taxonomies and allocates per-call state, so it is safe to call
//! concurrently from any number of handlers.
//!
//! `AppState` holds an `Arc<dyn ResumeScorer>`; handlers go through the trait.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::analysis::content::analyze_content;
use crate::analysis::insights::generate_insights;
use crate::analysis::normalize::NormalizedText;
use crate::analysis::scoring::compose_score;
use crate::analysis::sections::{detect_sections, SectionPresence};
use crate::analysis::skills::{match_hard_skills, match_soft_skills};

// ────────────────────────────────────────────────────────────────────────────
// Data models
// ────────────────────────────────────────────────────────────────────────────

/// Validated engine input. Both fields are non-blank by the time one exists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisInput {
    pub resume_text: String,
    pub job_description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobMatch {
    pub percentage: u32,
    pub matched_skills: u32,
    pub total_skills: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillBreakdown {
    pub category: String,
    /// Category match percentage, 0 – 100.
    #[serde(rename = "match")]
    pub match_percentage: u32,
    pub missing: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisDetail {
    pub sections: Vec<SectionPresence>,
    pub job_match: JobMatch,
    pub skill_breakdown: Vec<SkillBreakdown>,
}

/// Full analysis returned to callers. Serialized as-is in the API response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub score: u32, // 0 – 100
    pub analysis: AnalysisDetail,
    /// "category: kw1, kw2" for every category with at least one missing keyword.
    pub missing_skills: Vec<String>,
    pub strengths: Vec<String>,
    pub suggestions: Vec<String>,
    pub format_issues: Vec<String>,
}

// ────────────────────────────────────────────────────────────────────────────
// Trait definition
// ────────────────────────────────────────────────────────────────────────────

/// A resume scoring backend. Carried in `AppState` as `Arc<dyn ResumeScorer>`.
pub trait ResumeScorer: Send + Sync {
    fn analyze(&self, resume_text: &str, job_description: &str) -> AnalysisResult;

    /// Short label for logs.
    fn backend(&self) -> &'static str;
}

/// Deterministic keyword/category scorer.
pub struct KeywordResumeScorer;

impl ResumeScorer for KeywordResumeScorer {
    fn analyze(&self, resume_text: &str, job_description: &str) -> AnalysisResult {
        analyze(resume_text, job_description)
    }

    fn backend(&self) -> &'static str {
        "keyword"
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Core analysis
// ────────────────────────────────────────────────────────────────────────────

pub fn analyze(resume_text: &str, job_description: &str) -> AnalysisResult {
    let resume = NormalizedText::new(resume_text);
    let job = NormalizedText::new(job_description);

    let skills = match_hard_skills(&resume, &job);
    let soft = match_soft_skills(&resume, &job);
    let sections = detect_sections(&resume);
    let content = analyze_content(resume_text);

    let score = compose_score(&skills, &soft, &sections, &content);
    let insights = generate_insights(resume_text, &skills, &soft, &sections, &content);

    debug!(
        score,
        required_skills = skills.total_required,
        matched_skills = skills.total_matched,
        required_soft_skills = soft.total_required,
        missing_sections = sections.missing_sections.len(),
        "Resume analyzed"
    );

    let skill_breakdown = skills
        .categories
        .iter()
        .map(|c| SkillBreakdown {
            category: c.category.to_string(),
            match_percentage: c.percentage,
            missing: c.missing().into_iter().map(String::from).collect(),
        })
        .collect();

    let missing_skills = skills
        .categories
        .iter()
        .filter(|c| c.required.len() > c.matched.len())
        .map(|c| format!("{}: {}", c.category, c.missing().join(", ")))
        .collect();

    AnalysisResult {
        score,
        analysis: AnalysisDetail {
            sections: sections.sections,
            job_match: JobMatch {
                percentage: skills.job_match_percentage(),
                matched_skills: skills.total_matched,
                total_skills: skills.total_required,
            },
            skill_breakdown,
        },
        missing_skills,
        strengths: insights.strengths,
        suggestions: insights.suggestions,
        format_issues: insights.format_issues,
    }
}
