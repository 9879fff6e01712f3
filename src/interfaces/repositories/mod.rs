pub mod resume;
pub mod sqlx_repo;
