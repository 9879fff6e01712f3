use actix_web::{FromRequest, HttpRequest};
use futures_util::future::{ready, Ready};
use uuid::Uuid;

use crate::errors::AppError;

/// Extractor for the verified caller identity. Session handling lives in the
/// upstream gateway, which injects the authenticated user id as an
/// `x-user-id` header; a missing or malformed header is a 401.
/// Usage: add `user: AuthenticatedUser` as a parameter to your handler function.
#[derive(Debug, Clone, Copy)]
pub struct AuthenticatedUser(pub Uuid);

impl FromRequest for AuthenticatedUser {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut actix_web::dev::Payload) -> Self::Future {
        let user_id = req
            .headers()
            .get("x-user-id")
            .and_then(|value| value.to_str().ok())
            .and_then(|value| Uuid::parse_str(value).ok());

        match user_id {
            Some(id) => ready(Ok(AuthenticatedUser(id))),
            None => ready(Err(AppError::UnauthorizedAccess.into())),
        }
    }
}
