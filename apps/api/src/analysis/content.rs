//! Content quality checks over the raw (original-case) resume text.

use std::sync::OnceLock;

use regex::Regex;

pub const MIN_RESUME_CHARS: usize = 300;
pub const MAX_RESUME_CHARS: usize = 2000;
pub const MIN_BULLET_POINTS: usize = 5;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ContentQuality {
    pub has_quantifiable_results: bool,
    pub has_action_verbs: bool,
    pub has_urls: bool,
    pub has_bullet_points: bool,
    pub has_proper_length: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LengthIssue {
    TooBrief,
    TooLong,
}

impl ContentQuality {
    /// Number of the five checks that failed.
    pub fn failed_checks(&self) -> u32 {
        [
            self.has_quantifiable_results,
            self.has_action_verbs,
            self.has_urls,
            self.has_bullet_points,
            self.has_proper_length,
        ]
        .iter()
        .filter(|passed| !**passed)
        .count() as u32
    }
}

fn quantified_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    // The trailing alternative accepts any bare number, so a single digit passes.
    RE.get_or_init(|| {
        Regex::new(r"[0-9]+%|\$[0-9]+|[0-9]+ years|[0-9]+\+?").expect("valid regex")
    })
}

fn action_verb_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    // ASCII word boundaries: a verb touching a non-ASCII letter ("éled") still counts
    RE.get_or_init(|| {
        Regex::new(
            r"(?i)(?-u:\b)(led|developed|created|implemented|managed|designed|improved)(?-u:\b)",
        )
        .expect("valid regex")
    })
}

fn url_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"https?://\S+").expect("valid regex"))
}

fn bullet_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[•·-]\s").expect("valid regex"))
}

/// Length in characters, not bytes.
pub fn resume_length(resume: &str) -> usize {
    resume.chars().count()
}

/// Which bound the resume length violates, if any.
pub fn length_issue(resume: &str) -> Option<LengthIssue> {
    let len = resume_length(resume);
    if len < MIN_RESUME_CHARS {
        Some(LengthIssue::TooBrief)
    } else if len > MAX_RESUME_CHARS {
        Some(LengthIssue::TooLong)
    } else {
        None
    }
}

pub fn analyze_content(resume: &str) -> ContentQuality {
    ContentQuality {
        has_quantifiable_results: quantified_re().is_match(resume),
        has_action_verbs: action_verb_re().is_match(resume),
        has_urls: url_re().is_match(resume),
        has_bullet_points: bullet_re().find_iter(resume).count() >= MIN_BULLET_POINTS,
        has_proper_length: length_issue(resume).is_none(),
    }
}
