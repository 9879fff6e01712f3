use actix_web::{error::JsonPayloadError, http::StatusCode, web, HttpRequest, HttpResponse};

pub fn json_error(status: StatusCode, error: &str, details: &str) -> HttpResponse {
    HttpResponse::build(status).json(serde_json::json!({
        "error": error,
        "details": details
    }))
}

/// Turns actix's default text/plain JSON extractor failures into the same
/// structured error bodies the rest of the API speaks.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err: JsonPayloadError, _req: &HttpRequest| {
        let details = err.to_string();
        actix_web::error::InternalError::from_response(
            err,
            json_error(StatusCode::BAD_REQUEST, "Invalid JSON payload", &details),
        )
        .into()
    })
}
