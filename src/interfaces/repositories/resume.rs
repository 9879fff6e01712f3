use async_trait::async_trait;
use mockall::automock;
use uuid::Uuid;

use crate::{
    codec::ResumeUpsert,
    entities::{resume::ResumeRecord, user::{PublicUser, UserRecord}},
    errors::AppError,
    repositories::sqlx_repo::SqlxResumeRepo,
};

#[automock]
#[async_trait]
pub trait ResumeRepository: Send + Sync {
    /// Loads the resume row owned by `user_id`, if one exists.
    async fn find_by_user_id(&self, user_id: Uuid) -> Result<Option<ResumeRecord>, AppError>;

    /// Public lookup by username, joining the owning user's display fields.
    async fn find_by_username(&self, username: &str) -> Result<Option<(PublicUser, ResumeRecord)>, AppError>;

    /// Create-or-update the single row owned by `user_id`; the store's unique
    /// constraint on the owner enforces the 1:1 relation.
    async fn upsert(&self, user_id: Uuid, row: &ResumeUpsert) -> Result<ResumeRecord, AppError>;

    /// Liveness probe for the health endpoint.
    async fn check_connection(&self) -> Result<(), AppError>;
}

impl SqlxResumeRepo {
    pub fn new(pool: sqlx::PgPool) -> Self {
        SqlxResumeRepo { pool }
    }
}

#[async_trait]
impl ResumeRepository for SqlxResumeRepo {
    async fn find_by_user_id(&self, user_id: Uuid) -> Result<Option<ResumeRecord>, AppError> {
        let record = sqlx::query_as::<_, ResumeRecord>(
            r#"SELECT * FROM resumes WHERE user_id = $1"#,
        )
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(record)
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<(PublicUser, ResumeRecord)>, AppError> {
        let user = sqlx::query_as::<_, UserRecord>(
            r#"SELECT id, username, name FROM users WHERE username = $1"#,
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await?;

        let Some(user) = user else {
            return Ok(None);
        };

        let Some(record) = self.find_by_user_id(user.id).await? else {
            return Ok(None);
        };

        Ok(Some((user.into(), record)))
    }

    async fn upsert(&self, user_id: Uuid, row: &ResumeUpsert) -> Result<ResumeRecord, AppError> {
        let record = sqlx::query_as::<_, ResumeRecord>(
            r#"
            INSERT INTO resumes (
                user_id, full_name, email, phone, location, website, linkedin,
                github, summary, experiences, education, skills, projects,
                certifications, languages
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15)
            ON CONFLICT (user_id) DO UPDATE SET
                full_name = EXCLUDED.full_name,
                email = EXCLUDED.email,
                phone = EXCLUDED.phone,
                location = EXCLUDED.location,
                website = EXCLUDED.website,
                linkedin = EXCLUDED.linkedin,
                github = EXCLUDED.github,
                summary = EXCLUDED.summary,
                experiences = EXCLUDED.experiences,
                education = EXCLUDED.education,
                skills = EXCLUDED.skills,
                projects = EXCLUDED.projects,
                certifications = EXCLUDED.certifications,
                languages = EXCLUDED.languages,
                updated_at = NOW()
            RETURNING *
            "#,
        )
        .bind(user_id)
        .bind(&row.full_name)
        .bind(&row.email)
        .bind(&row.phone)
        .bind(&row.location)
        .bind(&row.website)
        .bind(&row.linkedin)
        .bind(&row.github)
        .bind(&row.summary)
        .bind(&row.experiences)
        .bind(&row.education)
        .bind(&row.skills)
        .bind(&row.projects)
        .bind(&row.certifications)
        .bind(&row.languages)
        .fetch_one(&self.pool)
        .await?;

        Ok(record)
    }

    async fn check_connection(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
