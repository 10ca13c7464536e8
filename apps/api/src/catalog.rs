//! Job Catalog — the static, in-memory set of job postings.
//!
//! Built once at startup and shared read-only behind `Arc`. The catalog never
//! filters; qualification logic lives in `engine`.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Salary band for a posting. `min <= max`, both positive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalaryRange {
    pub min: u64,
    pub max: u64,
    pub currency: String,
}

/// A single job posting. Immutable for the process lifetime.
///
/// `required_skills` is semantically a set of lowercase skill names — order
/// is presentation only, duplicates are meaningless.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobRecord {
    pub id: u32,
    pub title: String,
    pub salary_range: SalaryRange,
    pub required_skills: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub industry: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub experience_level: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub posted_date: Option<NaiveDate>,
}

/// Read-only collection of job postings, loaded once at startup.
/// A malformed bundled dataset is a build-time defect — see the tests below.
#[derive(Debug, Clone)]
pub struct JobCatalog {
    jobs: Vec<JobRecord>,
}

impl JobCatalog {
    /// Builds the bundled Rwanda digital-economy catalog.
    pub fn bundled() -> Self {
        Self {
            jobs: bundled_jobs(),
        }
    }

    /// Returns every posting, in catalog order. No filtering, no errors.
    pub fn jobs(&self) -> &[JobRecord] {
        &self.jobs
    }
}

/// Curated learning resource per catalog skill. Used by the canned analyst
/// when the external model must not be called.
const LEARNING_RESOURCES: &[(&str, &str)] = &[
    ("html", "https://www.youtube.com/watch?v=kUMe1FH4paE"),
    ("css", "https://www.youtube.com/watch?v=OEV8gHs_a38"),
    ("javascript", "https://www.youtube.com/watch?v=PkZNo7MFNFg"),
    ("react", "https://www.youtube.com/watch?v=bMknfKXIFA8"),
    ("python", "https://www.youtube.com/watch?v=rfscVS0vtbw"),
    ("fastapi", "https://www.youtube.com/watch?v=7t2alSnE2-I"),
    ("sql", "https://www.youtube.com/watch?v=HXV3zeQKqGY"),
    ("git", "https://www.youtube.com/watch?v=RGOj5yH7evk"),
    ("docker", "https://www.youtube.com/watch?v=3c-iBn73dDE"),
    ("pandas", "https://www.youtube.com/watch?v=vmEHCJofslg"),
    ("numpy", "https://www.youtube.com/watch?v=QUT1VHiLmmI"),
    ("powerbi", "https://www.youtube.com/watch?v=3u7MQz1EyPY"),
    ("seo", "https://www.youtube.com/watch?v=sSW_93qPApA"),
    ("sem", "https://www.youtube.com/watch?v=Pj2s1_yOotY"),
    ("social media marketing", "https://www.freecodecamp.org/"),
    ("google analytics", "https://www.freecodecamp.org/"),
    ("product management", "https://www.freecodecamp.org/"),
    ("fintech", "https://www.freecodecamp.org/"),
    ("agile", "https://www.freecodecamp.org/"),
    ("data analysis", "https://solvit.africa/"),
];

/// Looks up the curated learning resource for a skill (case-folded).
pub fn learning_resource(skill: &str) -> Option<&'static str> {
    let needle = skill.to_lowercase();
    LEARNING_RESOURCES
        .iter()
        .find(|(name, _)| *name == needle)
        .map(|(_, url)| *url)
}

fn bundled_jobs() -> Vec<JobRecord> {
    let job = |id: u32,
               title: &str,
               min: u64,
               max: u64,
               skills: &[&str],
               company: &str,
               experience_level: &str,
               posted: Option<NaiveDate>| JobRecord {
        id,
        title: title.to_string(),
        salary_range: SalaryRange {
            min,
            max,
            currency: "RWF".to_string(),
        },
        required_skills: skills.iter().map(|s| s.to_string()).collect(),
        company: Some(company.to_string()),
        location: Some("Kigali, Rwanda".to_string()),
        industry: Some("Technology".to_string()),
        experience_level: Some(experience_level.to_string()),
        posted_date: posted,
    };

    vec![
        job(
            1,
            "Entry-level Web Developer",
            150_000,
            300_000,
            &["html", "css", "javascript"],
            "Local Startup",
            "entry",
            NaiveDate::from_ymd_opt(2025, 5, 12),
        ),
        job(
            2,
            "Frontend Developer (React)",
            400_000,
            600_000,
            &["html", "css", "javascript", "react", "git"],
            "Fintech Co",
            "entry",
            NaiveDate::from_ymd_opt(2025, 5, 20),
        ),
        job(
            3,
            "Backend Developer (Python)",
            500_000,
            800_000,
            &["python", "fastapi", "sql", "docker", "git"],
            "Kigali Digital Services",
            "mid",
            NaiveDate::from_ymd_opt(2025, 6, 2),
        ),
        job(
            4,
            "Full-stack Developer",
            600_000,
            1_000_000,
            &[
                "html",
                "css",
                "javascript",
                "react",
                "python",
                "fastapi",
                "sql",
                "git",
            ],
            "PanAfrica Software",
            "mid",
            NaiveDate::from_ymd_opt(2025, 6, 9),
        ),
        job(
            5,
            "Data Analyst",
            400_000,
            700_000,
            &["python", "pandas", "numpy", "sql", "powerbi"],
            "Rwanda Analytics Group",
            "mid",
            NaiveDate::from_ymd_opt(2025, 6, 16),
        ),
        job(
            6,
            "Digital Marketing Specialist",
            300_000,
            500_000,
            &["seo", "sem", "social media marketing", "google analytics"],
            "Brand Reach Africa",
            "entry",
            NaiveDate::from_ymd_opt(2025, 6, 23),
        ),
        job(
            7,
            "Fintech Product Manager",
            800_000,
            1_500_000,
            &["product management", "fintech", "agile", "data analysis"],
            "Mobile Money Partners",
            "senior",
            NaiveDate::from_ymd_opt(2025, 6, 30),
        ),
    ]
}
