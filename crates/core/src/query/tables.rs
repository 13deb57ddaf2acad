//! Static lookup tables driving the extractors.
//!
//! Table order is priority order wherever "first match wins".

use super::terms::{contains_any, contains_term};
use super::types::{ExperienceLevel, RoleType};

pub struct LevelEntry {
    pub level: ExperienceLevel,
    pub min_years: u32,
    pub max_years: u32,
    pub keywords: &'static [&'static str],
}

pub static EXPERIENCE_LEVELS: &[LevelEntry] = &[
    LevelEntry {
        level: ExperienceLevel::Intern,
        min_years: 0,
        max_years: 1,
        keywords: &["intern", "internship", "graduate"],
    },
    LevelEntry {
        level: ExperienceLevel::Junior,
        min_years: 0,
        max_years: 2,
        keywords: &["junior", "entry", "entry-level", "new grad", "fresh", "fresher"],
    },
    LevelEntry {
        level: ExperienceLevel::Mid,
        min_years: 2,
        max_years: 5,
        keywords: &["mid", "middle", "intermediate", "mid-level"],
    },
    LevelEntry {
        level: ExperienceLevel::Senior,
        min_years: 5,
        max_years: 10,
        keywords: &["senior", "sr", "lead", "experienced", "expert"],
    },
    LevelEntry {
        level: ExperienceLevel::Principal,
        min_years: 8,
        max_years: 15,
        keywords: &["principal", "staff", "architect", "director", "head"],
    },
    LevelEntry {
        level: ExperienceLevel::Executive,
        min_years: 10,
        max_years: 20,
        keywords: &["vp", "cto", "ceo", "executive", "c-level"],
    },
];

pub fn level_entry(level: ExperienceLevel) -> &'static LevelEntry {
    EXPERIENCE_LEVELS
        .iter()
        .find(|entry| entry.level == level)
        .unwrap_or(&EXPERIENCE_LEVELS[0])
}

/// A group of related skills pulled in together when any member appears.
///
/// `triggers` are extra spellings that only select the family; every entry
/// of `expands_to` selects it as well.
pub struct SkillFamily {
    pub key: &'static str,
    pub triggers: &'static [&'static str],
    pub expands_to: &'static [&'static str],
}

impl SkillFamily {
    /// True if lower-cased `text` names this family or any of its members.
    pub fn matches(&self, text: &str) -> bool {
        contains_any(text, self.triggers)
            || self
                .expands_to
                .iter()
                .any(|skill| contains_term(text, &skill.to_lowercase()))
    }
}

pub static SKILL_FAMILIES: &[SkillFamily] = &[
    SkillFamily {
        key: "ml",
        triggers: &["ml", "machine learning"],
        expands_to: &["Machine Learning", "ML", "TensorFlow", "PyTorch", "Scikit-learn"],
    },
    SkillFamily {
        key: "ai",
        triggers: &["ai", "artificial intelligence", "deep learning"],
        expands_to: &["Artificial Intelligence", "AI", "Machine Learning", "Deep Learning"],
    },
    SkillFamily {
        key: "python",
        triggers: &["python"],
        expands_to: &["Python", "Django", "Flask", "FastAPI", "Pandas", "NumPy"],
    },
    SkillFamily {
        key: "js",
        triggers: &["js", "javascript"],
        expands_to: &["JavaScript", "JS", "Node.js", "React", "Vue", "Angular"],
    },
    SkillFamily {
        key: "react",
        triggers: &["react", "react.js", "reactjs"],
        expands_to: &["React", "React.js", "ReactJS", "Next.js", "Redux"],
    },
    SkillFamily {
        key: "node",
        triggers: &["node", "nodejs", "node.js"],
        expands_to: &["Node.js", "NodeJS", "Express.js", "Nest.js"],
    },
    SkillFamily {
        key: "java",
        triggers: &["java"],
        expands_to: &["Java", "Spring", "Spring Boot", "Hibernate"],
    },
    SkillFamily {
        key: "dotnet",
        triggers: &[".net", "dotnet", "c#", "asp.net"],
        expands_to: &[".NET", "C#", "ASP.NET", "Entity Framework"],
    },
    SkillFamily {
        key: "devops",
        triggers: &["devops"],
        expands_to: &["DevOps", "Docker", "Kubernetes", "AWS", "Azure", "GCP"],
    },
    SkillFamily {
        key: "cloud",
        triggers: &["cloud"],
        expands_to: &["AWS", "Azure", "GCP", "Cloud", "Kubernetes", "Docker"],
    },
    SkillFamily {
        key: "sql",
        triggers: &["sql"],
        expands_to: &["SQL", "MySQL", "PostgreSQL", "Oracle", "Database"],
    },
    SkillFamily {
        key: "nosql",
        triggers: &["nosql"],
        expands_to: &["MongoDB", "Redis", "Cassandra", "DynamoDB", "NoSQL"],
    },
    SkillFamily {
        key: "frontend",
        triggers: &["frontend", "front-end", "front end"],
        expands_to: &["Frontend", "React", "Vue", "Angular", "HTML", "CSS", "JavaScript"],
    },
    SkillFamily {
        key: "backend",
        triggers: &["backend", "back-end", "back end"],
        expands_to: &["Backend", "Node.js", "Python", "Java", "API", "Microservices"],
    },
    SkillFamily {
        key: "fullstack",
        triggers: &["fullstack", "full-stack", "full stack"],
        expands_to: &["Full Stack", "Fullstack", "Frontend", "Backend", "MEAN", "MERN"],
    },
];

pub fn skill_family(key: &str) -> Option<&'static SkillFamily> {
    SKILL_FAMILIES.iter().find(|family| family.key == key)
}

/// Bare technology tokens scanned for with word boundaries, and how they display.
pub static TECH_TOKENS: &[(&str, &str)] = &[
    ("python", "Python"),
    ("java", "Java"),
    ("javascript", "JavaScript"),
    ("typescript", "TypeScript"),
    ("go", "Go"),
    ("rust", "Rust"),
    ("php", "PHP"),
    ("ruby", "Ruby"),
    ("swift", "Swift"),
    ("kotlin", "Kotlin"),
    ("react", "React"),
    ("vue", "Vue"),
    ("angular", "Angular"),
    ("django", "Django"),
    ("flask", "Flask"),
    ("spring", "Spring"),
    ("express", "Express"),
    ("laravel", "Laravel"),
    ("aws", "AWS"),
    ("azure", "Azure"),
    ("gcp", "GCP"),
    ("docker", "Docker"),
    ("kubernetes", "Kubernetes"),
    ("jenkins", "Jenkins"),
    ("git", "Git"),
    ("mysql", "MySQL"),
    ("postgresql", "PostgreSQL"),
    ("mongodb", "MongoDB"),
    ("redis", "Redis"),
    ("elasticsearch", "Elasticsearch"),
];

pub fn tech_display_name(token: &str) -> Option<&'static str> {
    TECH_TOKENS
        .iter()
        .find(|(t, _)| t.eq_ignore_ascii_case(token))
        .map(|(_, display)| *display)
}

/// City or region aliases; a hit adds every spelling in `expands_to`.
pub struct LocationAlias {
    pub key: &'static str,
    pub triggers: &'static [&'static str],
    pub expands_to: &'static [&'static str],
}

pub static LOCATIONS: &[LocationAlias] = &[
    LocationAlias {
        key: "sf",
        triggers: &["sf", "san francisco", "bay area"],
        expands_to: &["San Francisco", "SF", "Bay Area"],
    },
    LocationAlias {
        key: "nyc",
        triggers: &["nyc", "new york", "manhattan"],
        expands_to: &["New York", "NYC", "New York City", "Manhattan"],
    },
    LocationAlias {
        key: "la",
        triggers: &["la", "los angeles", "california"],
        expands_to: &["Los Angeles", "LA", "California"],
    },
    LocationAlias {
        key: "seattle",
        triggers: &["seattle", "washington"],
        expands_to: &["Seattle", "Washington"],
    },
    LocationAlias {
        key: "boston",
        triggers: &["boston", "massachusetts"],
        expands_to: &["Boston", "Massachusetts"],
    },
    LocationAlias {
        key: "austin",
        triggers: &["austin", "texas"],
        expands_to: &["Austin", "Texas"],
    },
    LocationAlias {
        key: "denver",
        triggers: &["denver", "colorado"],
        expands_to: &["Denver", "Colorado"],
    },
    LocationAlias {
        key: "chicago",
        triggers: &["chicago", "illinois"],
        expands_to: &["Chicago", "Illinois"],
    },
    LocationAlias {
        key: "atlanta",
        triggers: &["atlanta", "georgia"],
        expands_to: &["Atlanta", "Georgia"],
    },
    LocationAlias {
        key: "remote",
        triggers: &["remote", "work from home", "wfh", "distributed"],
        expands_to: &["Remote", "Work from home", "WFH", "Distributed"],
    },
];

pub fn is_remote_alias(location: &str) -> bool {
    LOCATIONS
        .iter()
        .filter(|alias| alias.key == "remote")
        .flat_map(|alias| alias.expands_to.iter())
        .any(|spelling| spelling.eq_ignore_ascii_case(location))
}

pub static REMOTE_KEYWORDS: &[&str] = &[
    "remote",
    "wfh",
    "work from home",
    "distributed",
    "anywhere",
    "home",
];

pub static HYBRID_KEYWORDS: &[&str] = &["hybrid"];

pub static ONSITE_KEYWORDS: &[&str] = &["onsite", "on-site", "office"];

pub static ROLE_TYPES: &[(RoleType, &[&str])] = &[
    (RoleType::Engineer, &["engineer", "developer", "programmer", "coder"]),
    (RoleType::Manager, &["manager", "lead", "head", "director"]),
    (RoleType::Designer, &["designer", "ux", "ui", "graphic"]),
    (RoleType::Analyst, &["analyst", "data scientist", "researcher"]),
    (RoleType::Consultant, &["consultant", "advisor", "specialist"]),
];

/// Words that mark a query as a search request.
pub static INTENT_WORDS: &[&str] = &[
    "find", "show", "looking", "search", "get", "need", "want", "hire",
];

pub static QUERY_EXAMPLES: &[&str] = &[
    "Find senior Python developers in San Francisco",
    "Show me React engineers with 3+ years experience, remote OK",
    "Looking for ML engineers in NYC or remote",
    "Junior Java developers in Seattle",
    "Senior full-stack engineers with Node.js and React",
    "Data scientists with Python and SQL, any location",
    "DevOps engineers with AWS experience, remote preferred",
    "Frontend developers with Vue.js in Los Angeles",
];
