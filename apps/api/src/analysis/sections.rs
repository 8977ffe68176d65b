use serde::{Deserialize, Serialize};

use crate::analysis::normalize::NormalizedText;
use crate::analysis::taxonomy::SECTIONS;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionPresence {
    pub name: String,
    pub present: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SectionReport {
    pub sections: Vec<SectionPresence>,
    pub missing_sections: Vec<&'static str>,
}

/// A section is present when any of its keywords occurs in the resume.
pub fn detect_sections(resume: &NormalizedText) -> SectionReport {
    let mut report = SectionReport::default();

    for &(section, keywords) in SECTIONS {
        let present = resume.contains_any(keywords);
        if !present {
            report.missing_sections.push(section);
        }
        report.sections.push(SectionPresence {
            name: section.to_string(),
            present,
        });
    }

    report
}
