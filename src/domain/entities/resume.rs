use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::entities::{
    certification::Certification, education::Education, experience::Experience,
    language::Language, project::Project, skill::Skill, user::PublicUser,
};
use crate::utils::valid_url::validate_optional_url;

// ───── Canonical aggregate ──────────────────────────────────────────

/// The decoded, canonical resume: scalars plus fully materialized collection
/// sequences. This is what the render pipeline and the API consume; the blob
/// form only exists inside the codec and the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Resume {
    pub id: Uuid,
    pub user_id: Uuid,
    pub full_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub location: Option<String>,
    pub website: Option<String>,
    pub linkedin: Option<String>,
    pub github: Option<String>,
    pub summary: Option<String>,
    pub experiences: Vec<Experience>,
    pub education: Vec<Education>,
    pub skills: Vec<Skill>,
    pub projects: Vec<Project>,
    pub certifications: Vec<Certification>,
    pub languages: Vec<Language>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// ───── Database model ───────────────────────────────────────────────

/// The stored row: one nullable TEXT blob per collection. Rows written by
/// earlier versions of the app may hold NULL, empty or malformed blobs;
/// the codec absorbs all of those.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct ResumeRecord {
    pub id: Uuid,
    pub user_id: Uuid,
    pub full_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub location: Option<String>,
    pub website: Option<String>,
    pub linkedin: Option<String>,
    pub github: Option<String>,
    pub summary: Option<String>,
    pub experiences: Option<String>,
    pub education: Option<String>,
    pub skills: Option<String>,
    pub projects: Option<String>,
    pub certifications: Option<String>,
    pub languages: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// ───── Input & Validation ───────────────────────────────────────────

/// Candidate fields for a save. Only the identity/contact scalars are
/// validated; collection entries stay loosely typed on purpose so their
/// schema can evolve without breaking existing writers.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase", default)]
pub struct ResumeInput {
    #[validate(length(min = 1, message = "Full name cannot be empty"))]
    pub full_name: String,

    #[validate(email(message = "Invalid email address"))]
    pub email: String,

    pub phone: Option<String>,
    pub location: Option<String>,

    #[validate(custom(function = "validate_optional_url"))]
    pub website: Option<String>,

    #[validate(custom(function = "validate_optional_url"))]
    pub linkedin: Option<String>,

    #[validate(custom(function = "validate_optional_url"))]
    pub github: Option<String>,

    pub summary: Option<String>,

    pub experiences: Vec<Experience>,
    pub education: Vec<Education>,
    pub skills: Vec<Skill>,
    pub projects: Vec<Project>,
    pub certifications: Vec<Certification>,
    pub languages: Vec<Language>,
}

// ───── API Response Models ──────────────────────────────────────────

/// Payload of the public by-username lookup.
#[derive(Debug, Clone, Serialize)]
pub struct PublicResumeResponse {
    pub resume: Resume,
    pub user: PublicUser,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::AppError;

    fn valid_input() -> ResumeInput {
        ResumeInput {
            full_name: "Ada Lovelace".into(),
            email: "ada@example.com".into(),
            ..ResumeInput::default()
        }
    }

    fn rejected_fields(input: &ResumeInput) -> Vec<String> {
        let err: AppError = input.validate().unwrap_err().into();
        match err {
            AppError::ValidationError(fields) => {
                fields.into_iter().map(|f| f.field).collect()
            }
            other => panic!("expected validation error, got {other}"),
        }
    }

    #[test]
    fn accepts_minimal_valid_input() {
        assert!(valid_input().validate().is_ok());
    }

    #[test]
    fn rejects_empty_full_name() {
        let mut input = valid_input();
        input.full_name = String::new();
        assert!(rejected_fields(&input).contains(&"fullName".to_string()));
    }

    #[test]
    fn rejects_malformed_email() {
        let mut input = valid_input();
        input.email = "not-an-email".into();
        assert!(rejected_fields(&input).contains(&"email".to_string()));
    }

    #[test]
    fn empty_profile_links_are_allowed() {
        let mut input = valid_input();
        input.website = Some(String::new());
        input.linkedin = Some(String::new());
        input.github = Some(String::new());
        assert!(input.validate().is_ok());
    }

    #[test]
    fn rejects_relative_website_url() {
        let mut input = valid_input();
        input.website = Some("not-a-url".into());
        assert!(rejected_fields(&input).contains(&"website".to_string()));
    }

    #[test]
    fn collection_entries_are_not_deep_validated() {
        let mut input = valid_input();
        input.experiences.push(Experience::default());
        input.skills.push(Skill { name: None, level: None });
        assert!(input.validate().is_ok());
    }
}
