use uuid::Uuid;
use validator::Validate;

use crate::{
    codec,
    entities::resume::{PublicResumeResponse, Resume, ResumeInput},
    errors::AppError,
    repositories::resume::ResumeRepository,
    use_cases::editor::DraftResume,
};

pub struct ResumeHandler<R>
where
    R: ResumeRepository,
{
    pub resume_repo: R,
}

impl<R> ResumeHandler<R>
where
    R: ResumeRepository,
{
    pub fn new(resume_repo: R) -> Self {
        ResumeHandler { resume_repo }
    }

    /// Loads the caller's own resume in canonical form.
    pub async fn get_resume(&self, user_id: Uuid) -> Result<Resume, AppError> {
        let record = self
            .resume_repo
            .find_by_user_id(user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Resume not found".to_string()))?;

        Ok(codec::decode(record))
    }

    /// Public lookup by username, bundling the owner's display fields.
    pub async fn get_public_resume(&self, username: &str) -> Result<PublicResumeResponse, AppError> {
        let (user, record) = self
            .resume_repo
            .find_by_username(username)
            .await?
            .ok_or_else(|| AppError::NotFound("Resume not found".to_string()))?;

        Ok(PublicResumeResponse {
            resume: codec::decode(record),
            user,
        })
    }

    /// Validates a candidate, then create-or-updates the caller's single
    /// resume row. The whole write is rejected on the first validation
    /// failure; nothing reaches the store. The returned resume is the decoded
    /// confirmation of what was actually persisted.
    pub async fn put_resume(&self, user_id: Uuid, input: ResumeInput) -> Result<Resume, AppError> {
        input.validate()?;

        let row = codec::encode(&input)?;
        let record = self.resume_repo.upsert(user_id, &row).await?;

        Ok(codec::decode(record))
    }

    /// Full editor save flow: draft -> candidate -> gate -> store -> decoded
    /// confirmation -> reconciled draft. On any error the draft is untouched.
    pub async fn save_draft(&self, user_id: Uuid, draft: &mut DraftResume) -> Result<(), AppError> {
        let saved = self.put_resume(user_id, draft.candidate()).await?;
        draft.reconcile(&saved);
        Ok(())
    }
}
