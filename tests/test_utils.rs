use chrono::Utc;
use uuid::Uuid;

use resume_backend::{
    codec::ResumeUpsert,
    entities::{
        experience::Experience,
        resume::{ResumeInput, ResumeRecord},
        skill::Skill,
    },
};

pub fn valid_input() -> ResumeInput {
    ResumeInput {
        full_name: "Ada Lovelace".into(),
        email: "ada@example.com".into(),
        phone: Some("+44 20 7946 0000".into()),
        website: Some("https://ada.dev".into()),
        summary: Some("Analyst and programmer.".into()),
        experiences: vec![Experience {
            title: Some("Analyst".into()),
            company: Some("Babbage & Co".into()),
            start_date: Some("1842-01".into()),
            current: true,
            ..Experience::default()
        }],
        skills: vec![Skill { name: Some("Mathematics".into()), level: None }],
        ..ResumeInput::default()
    }
}

/// Simulates the store echoing back what was written, the way the real
/// upsert's RETURNING clause does.
pub fn record_from(user_id: Uuid, row: &ResumeUpsert) -> ResumeRecord {
    ResumeRecord {
        id: Uuid::new_v4(),
        user_id,
        full_name: row.full_name.clone(),
        email: row.email.clone(),
        phone: row.phone.clone(),
        location: row.location.clone(),
        website: row.website.clone(),
        linkedin: row.linkedin.clone(),
        github: row.github.clone(),
        summary: row.summary.clone(),
        experiences: Some(row.experiences.clone()),
        education: Some(row.education.clone()),
        skills: Some(row.skills.clone()),
        projects: Some(row.projects.clone()),
        certifications: Some(row.certifications.clone()),
        languages: Some(row.languages.clone()),
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

/// A stored row the way a much older app version might have left it:
/// empty-string scalars and broken or shorthand collection blobs.
pub fn legacy_record(user_id: Uuid) -> ResumeRecord {
    ResumeRecord {
        id: Uuid::new_v4(),
        user_id,
        full_name: "Grace Hopper".into(),
        email: "grace@example.com".into(),
        phone: Some(String::new()),
        location: None,
        website: Some("navy.mil".into()),
        linkedin: None,
        github: None,
        summary: None,
        experiences: Some("{definitely not an array".into()),
        education: None,
        skills: Some(r#"["COBOL", {"name": "FLOW-MATIC", "level": "Expert"}]"#.into()),
        projects: Some(r#"[{"title": "Compiler", "url": "https://example.com"}]"#.into()),
        certifications: Some(String::new()),
        languages: Some("null".into()),
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}
