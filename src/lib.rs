mod domain;
mod interfaces;
mod infrastructure;

pub mod errors;
pub mod settings;
pub mod constants;
pub mod graceful_shutdown;

pub use domain::{codec, entities, format, render, use_cases};
pub use interfaces::{handlers, repositories, routes};
pub use infrastructure::{db, utils};

use repositories::sqlx_repo::SqlxResumeRepo;
use use_cases::resume::ResumeHandler;

pub struct AppState {
    pub resume_handler: AppResumeHandler,
}

pub type AppResumeHandler = ResumeHandler<SqlxResumeRepo>;

impl AppState {
    pub fn new(pool: sqlx::PgPool) -> Self {
        let resume_repo = SqlxResumeRepo::new(pool);
        let resume_handler = ResumeHandler::new(resume_repo);

        AppState { resume_handler }
    }
}
