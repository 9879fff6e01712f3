use actix_web::{get, web, HttpResponse, Responder};
use chrono::Utc;
use humantime::format_duration;
use serde::Serialize;
use std::time::Duration;

use crate::{constants::START_TIME, repositories::resume::ResumeRepository, AppState};

#[derive(Serialize)]
struct HealthCheckResponse {
    status: String,
    uptime: String,
    timestamp: String,
    database: String,
    version: String,
}

#[get("/healthz")]
pub async fn health_check(state: web::Data<AppState>) -> impl Responder {
    let now = Utc::now();
    let uptime = now.signed_duration_since(*START_TIME);
    let human_uptime = format_duration(Duration::from_secs(uptime.num_seconds().max(0) as u64));

    let database = match state.resume_handler.resume_repo.check_connection().await {
        Ok(_) => "ok",
        Err(_) => "unavailable",
    };

    let response = HealthCheckResponse {
        status: if database == "ok" { "ok" } else { "degraded" }.to_string(),
        uptime: human_uptime.to_string(),
        timestamp: now.to_rfc3339(),
        database: database.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    };

    HttpResponse::Ok().json(response)
}
