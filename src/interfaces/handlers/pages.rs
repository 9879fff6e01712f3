use actix_web::{get, http::header::ContentType, web, HttpResponse, Responder};
use serde::Deserialize;

use crate::{
    errors::AppError,
    render::{build_document, render_export, render_interactive, RenderContext},
    AppState,
};

#[derive(Debug, Deserialize)]
pub struct PageQuery {
    theme: Option<String>,
}

/// Interactive public resume page. The theme comes in explicitly through the
/// query string; unknown values fall back to light.
#[get("/u/{username}/resume")]
pub async fn resume_page(
    state: web::Data<AppState>,
    username: web::Path<String>,
    query: web::Query<PageQuery>,
) -> impl Responder {
    let username = username.into_inner();
    match state.resume_handler.get_public_resume(&username).await {
        Ok(public) => {
            let doc = build_document(&public.resume);
            let ctx = RenderContext {
                theme: query
                    .theme
                    .as_deref()
                    .and_then(|t| t.parse().ok())
                    .unwrap_or_default(),
                export_href: Some(format!("/api/resume/{username}/export")),
            };
            HttpResponse::Ok()
                .content_type(ContentType::html())
                .body(render_interactive(&doc, &ctx))
        }
        Err(AppError::NotFound(_)) => HttpResponse::NotFound()
            .content_type(ContentType::html())
            .body(not_found_page()),
        Err(e) => e.to_http_response(),
    }
}

/// Self-contained export document, served inline for downstream print/PDF
/// conversion.
#[get("/resume/{username}/export")]
pub async fn export_resume(
    state: web::Data<AppState>,
    username: web::Path<String>,
) -> impl Responder {
    let username = username.into_inner();
    match state.resume_handler.get_public_resume(&username).await {
        Ok(public) => {
            let doc = build_document(&public.resume);
            HttpResponse::Ok()
                .content_type(ContentType::html())
                .insert_header((
                    "Content-Disposition",
                    format!("inline; filename=\"{username}-resume.html\""),
                ))
                .body(render_export(&doc))
        }
        Err(e) => e.to_http_response(),
    }
}

fn not_found_page() -> String {
    "<!DOCTYPE html>\n<html lang=\"en\">\n<head><meta charset=\"UTF-8\"><title>Resume not found</title></head>\n\
     <body>\n<h1>Resume not found</h1>\n<p>This user has not published a resume yet.</p>\n<a href=\"/\">Back to Live Resume</a>\n</body>\n</html>\n"
        .to_string()
}
