//! Experience signals: years, company names and education lines via fixed patterns.

use std::sync::OnceLock;

use regex::Regex;

use crate::models::ExperienceSignals;

/// Tried in order; the first pattern with any match decides `years`.
const YEARS_PATTERNS: &[&str] = &[
    r"(?i)(\d+)\s*(?:years?|yrs?)\s*(?:of\s*)?experience",
    r"(?i)experience[:\s]*(\d+)\s*(?:years?|yrs?)",
];

/// Case-sensitive: company names are expected to be capitalised.
const COMPANY_PATTERNS: &[&str] = &[
    r"(?:at|with|worked\s+at)\s+([A-Z][a-zA-Z\s&]+(?:Inc|LLC|Ltd|Corp|Company))",
    r"([A-Z][a-zA-Z\s&]+(?:Inc|LLC|Ltd|Corp|Company))",
];

const EDUCATION_PATTERNS: &[&str] = &[
    r"(?i)(?:bachelor|master|phd|b\.?s\.?|m\.?s\.?|mba)[\s\w]*?(?:university|college|institute)",
    r"(?i)(?:university|college|institute)[\s\w]*?(?:bachelor|master|phd|b\.?s\.?|m\.?s\.?|mba)",
];

struct Patterns {
    years: Vec<Regex>,
    companies: Vec<Regex>,
    education: Vec<Regex>,
}

fn patterns() -> &'static Patterns {
    static PATTERNS: OnceLock<Patterns> = OnceLock::new();
    PATTERNS.get_or_init(|| Patterns {
        years: compile(YEARS_PATTERNS),
        companies: compile(COMPANY_PATTERNS),
        education: compile(EDUCATION_PATTERNS),
    })
}

fn compile(sources: &[&str]) -> Vec<Regex> {
    sources
        .iter()
        .map(|src| Regex::new(src).expect("static experience pattern must compile"))
        .collect()
}

/// Extracts experience signals. Missing signals yield zero / empty values.
pub fn extract_experience(text: &str) -> ExperienceSignals {
    let patterns = patterns();

    let years = patterns
        .years
        .iter()
        .map(|re| {
            re.captures_iter(text)
                .filter_map(|caps| caps.get(1)?.as_str().parse::<u32>().ok())
                .max()
        })
        .find_map(|max| max)
        .unwrap_or(0);

    let companies = patterns
        .companies
        .iter()
        .flat_map(|re| {
            re.captures_iter(text)
                .filter_map(|caps| caps.get(1).map(|m| m.as_str().trim().to_string()))
                .collect::<Vec<_>>()
        })
        .collect();

    let education = patterns
        .education
        .iter()
        .flat_map(|re| {
            re.find_iter(text)
                .map(|m| m.as_str().trim().to_string())
                .collect::<Vec<_>>()
        })
        .collect();

    ExperienceSignals {
        years,
        companies,
        education,
        certifications: Vec::new(),
    }
}
