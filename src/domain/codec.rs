use serde::de::DeserializeOwned;

use crate::entities::resume::{Resume, ResumeInput, ResumeRecord};
use crate::errors::AppError;

/// The persisted shape of a save: scalars with the empty-string/NULL
/// normalization applied, and one JSON array blob per collection. This is the
/// only struct the repository writes.
#[derive(Debug, Clone, PartialEq)]
pub struct ResumeUpsert {
    pub full_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub location: Option<String>,
    pub website: Option<String>,
    pub linkedin: Option<String>,
    pub github: Option<String>,
    pub summary: Option<String>,
    pub experiences: String,
    pub education: String,
    pub skills: String,
    pub projects: String,
    pub certifications: String,
    pub languages: String,
}

/// Serializes each collection independently, preserving element order.
/// Optional scalars holding an empty string are stored as NULL.
pub fn encode(input: &ResumeInput) -> Result<ResumeUpsert, AppError> {
    Ok(ResumeUpsert {
        full_name: input.full_name.clone(),
        email: input.email.clone(),
        phone: none_if_empty(&input.phone),
        location: none_if_empty(&input.location),
        website: none_if_empty(&input.website),
        linkedin: none_if_empty(&input.linkedin),
        github: none_if_empty(&input.github),
        summary: none_if_empty(&input.summary),
        experiences: serde_json::to_string(&input.experiences)?,
        education: serde_json::to_string(&input.education)?,
        skills: serde_json::to_string(&input.skills)?,
        projects: serde_json::to_string(&input.projects)?,
        certifications: serde_json::to_string(&input.certifications)?,
        languages: serde_json::to_string(&input.languages)?,
    })
}

/// Rehydrates a stored row into the canonical aggregate. This never fails: a
/// missing or unparseable blob becomes an empty collection, so one corrupted
/// legacy column can never take down a profile read.
pub fn decode(record: ResumeRecord) -> Resume {
    Resume {
        id: record.id,
        user_id: record.user_id,
        full_name: record.full_name,
        email: record.email,
        phone: scrub_empty(record.phone),
        location: scrub_empty(record.location),
        website: scrub_empty(record.website),
        linkedin: scrub_empty(record.linkedin),
        github: scrub_empty(record.github),
        summary: scrub_empty(record.summary),
        experiences: decode_list(record.experiences.as_deref()),
        education: decode_list(record.education.as_deref()),
        skills: decode_list(record.skills.as_deref()),
        projects: decode_list(record.projects.as_deref()),
        certifications: decode_list(record.certifications.as_deref()),
        languages: decode_list(record.languages.as_deref()),
        created_at: record.created_at,
        updated_at: record.updated_at,
    }
}

/// Defensive blob parse: absent, blank, malformed or wrongly-shaped input all
/// yield an empty sequence.
pub fn decode_list<T: DeserializeOwned>(blob: Option<&str>) -> Vec<T> {
    let Some(raw) = blob else {
        return Vec::new();
    };
    if raw.trim().is_empty() {
        return Vec::new();
    }
    serde_json::from_str(raw).unwrap_or_default()
}

fn none_if_empty(value: &Option<String>) -> Option<String> {
    value.as_deref().filter(|s| !s.is_empty()).map(str::to_owned)
}

// Rows written before the normalization landed may hold "" where NULL was meant.
fn scrub_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.is_empty())
}
