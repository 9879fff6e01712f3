use sqlx::PgPool;

#[derive(Clone)]
pub struct SqlxResumeRepo {
    pub pool: PgPool,
}
