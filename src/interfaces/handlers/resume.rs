use actix_web::{get, put, web, HttpResponse, Responder};

use crate::{
    entities::resume::ResumeInput,
    use_cases::extractors::AuthenticatedUser,
    AppState,
};

/// The caller's own resume, decoded to canonical form.
#[get("/resume")]
pub async fn get_own_resume(
    state: web::Data<AppState>,
    user: AuthenticatedUser,
) -> impl Responder {
    match state.resume_handler.get_resume(user.0).await {
        Ok(resume) => HttpResponse::Ok().json(resume),
        Err(e) => e.to_http_response(),
    }
}

/// Validate-then-upsert of the caller's resume. Responds with the decoded
/// canonical copy so the editor can reconcile against exactly what was
/// stored, or with the itemized field errors and no write at all.
#[put("/resume")]
pub async fn put_own_resume(
    state: web::Data<AppState>,
    user: AuthenticatedUser,
    payload: web::Json<ResumeInput>,
) -> impl Responder {
    match state.resume_handler.put_resume(user.0, payload.into_inner()).await {
        Ok(resume) => HttpResponse::Ok().json(resume),
        Err(e) => e.to_http_response(),
    }
}

/// Public JSON view of a resume by username.
#[get("/resume/{username}")]
pub async fn get_public_resume(
    state: web::Data<AppState>,
    username: web::Path<String>,
) -> impl Responder {
    match state.resume_handler.get_public_resume(&username).await {
        Ok(public) => HttpResponse::Ok().json(public),
        Err(e) => e.to_http_response(),
    }
}
