//! Plain-text report offered as a download alongside the JSON result.

use std::fmt::Write;

use crate::analysis::engine::AnalysisResult;

pub const REPORT_FILE_NAME: &str = "resume-analysis-report.txt";

fn write_list(out: &mut String, heading: &str, items: &[String]) {
    let _ = writeln!(out, "{heading}:");
    let lines: Vec<String> = items.iter().map(|item| format!("- {item}")).collect();
    let _ = writeln!(out, "{}", lines.join("\n"));
}

pub fn render_report(result: &AnalysisResult) -> String {
    let mut out = String::new();
    out.push_str("Resume Analysis Report\n");
    out.push_str("=====================\n\n");
    let _ = writeln!(out, "Score: {:.2}/100\n", result.score as f64);

    write_list(&mut out, "Missing Skills", &result.missing_skills);
    out.push('\n');
    write_list(&mut out, "Format Issues", &result.format_issues);
    out.push('\n');
    write_list(&mut out, "Strengths", &result.strengths);
    out.push('\n');
    write_list(&mut out, "Suggestions for Improvement", &result.suggestions);

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::engine::analyze;

    #[test]
    fn test_report_layout() {
        let result = analyze("Contact: a@b.com", "kubernetes, docker, aws");
        let report = render_report(&result);

        let expected = "Resume Analysis Report\n\
=====================\n\
\n\
Score: 82.00/100\n\
\n\
Missing Skills:\n\
- cloud: aws, docker, kubernetes\n\
\n\
Format Issues:\n\
- Resume is too brief - add more detailed experience\n\
- Use bullet points to better structure your experience\n\
- Add missing sections: contact, summary, experience, education, skills, projects\n\
\n\
Strengths:\n\
- Good overall presentation\n\
\n\
Suggestions for Improvement:\n\
- Strengthen cloud skills: aws, docker, kubernetes\n";
        assert_eq!(report, expected);
    }

    #[test]
    fn test_empty_list_renders_blank_line() {
        let result = analyze(
            "I led a team and developed an app using Python and React. Achieved 20% growth.",
            "Looking for Python, React, leadership, and teamwork.",
        );
        let report = render_report(&result);
        assert!(report.contains("Missing Skills:\n\n\nFormat Issues:"));
        assert!(report.contains("Score: 100.00/100"));
    }
}
