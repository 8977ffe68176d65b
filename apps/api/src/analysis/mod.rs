// Resume analysis: keyword taxonomies, matchers, score composition, and insights.
// Everything below `engine` is pure and synchronous; `handlers` is the HTTP edge.

pub mod content;
pub mod engine;
pub mod handlers;
pub mod insights;
pub mod normalize;
pub mod report;
pub mod scoring;
pub mod sections;
pub mod skills;
pub mod taxonomy;
