//! Job description analysis.
//!
//! Reads a free-text job posting into required skills, experience, level,
//! employment details, likely responsibilities and advice for both sides of
//! the hire. [`JobAnalyzer`] asks the external AI service first and falls
//! back to [`keyword_analysis`] when the service is absent or fails.

mod analyzer;
mod keywords;
mod types;

pub use analyzer::{JobAnalyzer, ANALYSIS_SYSTEM_PROMPT};
pub use keywords::{keyword_analysis, text_metrics, KEYWORD_NOTE};
pub use types::{
    AnalysisError, AnalysisMethod, JobAnalysis, JobDetails, JobRequirements, Recommendations,
    TextMetrics, MIN_JOB_DESCRIPTION_LEN,
};
