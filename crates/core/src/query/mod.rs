//! Natural-language query compilation.
//!
//! Turns a free-text hiring request such as
//! "senior ML engineer, Python, SF, remote OK" into structured filters, a
//! synthesized job description and a confidence score.
//!
//! ```text
//! query ──► lower-case/trim ──► extractors (experience, skills, locations,
//!                                work arrangement, role type)
//!                                     │
//!                                     ▼
//!                 job description + confidence + suggestions ──► ParsedQuery
//! ```
//!
//! Extraction is table-driven (see [`tables`]) and never fails.

mod compiler;
mod extractors;
pub mod tables;
pub mod terms;
mod types;
mod validate;

pub use compiler::{
    parse_query, SUGGEST_EXPERIENCE, SUGGEST_LOCATION, SUGGEST_SKILLS, SUGGEST_SPECIFIC,
};
pub use extractors::{
    extract_experience, extract_locations, extract_role_type, extract_skills,
    extract_work_arrangement, ExperienceFact,
};
pub use types::{
    ExperienceLevel, ExtractedComponents, ParsedQuery, QueryFilters, QueryValidation, RoleType,
    WorkArrangement,
};
pub use validate::{query_examples, validate_query, MAX_QUERY_LEN, MIN_QUERY_LEN};
