//! Keyword taxonomies: hard skills, soft skills, and resume sections.
//!
//! Order is significant. Categories are reported, and keywords listed, in the
//! order they appear here.

/// A named category and its keywords, all lowercase.
pub type Category = (&'static str, &'static [&'static str]);

pub const HARD_SKILLS: &[Category] = &[
    (
        "programming",
        &["javascript", "python", "java", "c++", "ruby", "php", "swift", "kotlin", "go"],
    ),
    (
        "webTech",
        &["html", "css", "react", "angular", "vue", "node.js", "express", "django", "flask"],
    ),
    (
        "database",
        &["sql", "mongodb", "postgresql", "mysql", "redis", "elasticsearch"],
    ),
    (
        "cloud",
        &["aws", "azure", "gcp", "docker", "kubernetes", "terraform"],
    ),
    (
        "tools",
        &["git", "jenkins", "jira", "confluence", "bitbucket", "gitlab"],
    ),
    (
        "testing",
        &["jest", "mocha", "selenium", "cypress", "junit", "pytest"],
    ),
    (
        "concepts",
        &["agile", "scrum", "ci/cd", "tdd", "rest api", "microservices", "design patterns"],
    ),
];

pub const SOFT_SKILLS: &[Category] = &[
    (
        "leadership",
        &["leadership", "managed", "led", "supervised", "mentored", "coordinated"],
    ),
    (
        "communication",
        &["communication", "presented", "wrote", "documented", "collaborated"],
    ),
    (
        "problemSolving",
        &["solved", "improved", "optimized", "debugged", "troubleshot"],
    ),
    (
        "teamwork",
        &["team", "collaborated", "partnered", "cross-functional", "cooperation"],
    ),
    (
        "projectManagement",
        &["delivered", "planned", "organized", "scheduled", "budgeted"],
    ),
];

pub const SECTIONS: &[Category] = &[
    ("contact", &["email", "phone", "linkedin", "location"]),
    ("summary", &["summary", "objective", "profile", "about"]),
    ("experience", &["experience", "work history", "employment"]),
    ("education", &["education", "degree", "university", "certification"]),
    ("skills", &["skills", "technologies", "competencies"]),
    ("projects", &["projects", "portfolio", "works"]),
];
