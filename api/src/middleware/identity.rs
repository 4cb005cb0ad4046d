//! Caller identity extraction.
//!
//! Authentication happens upstream; the gateway forwards the signed-in
//! user's id in the `X-User-Id` header. Handlers take an
//! [`AuthenticatedUser`] argument to require it.

use actix_web::{dev::Payload, FromRequest, HttpRequest};
use std::future::{ready, Ready};
use uuid::Uuid;

use crate::handlers::ApiError;

/// Header carrying the authenticated user's id
pub const USER_ID_HEADER: &str = "X-User-Id";

/// The user on whose behalf the request is made
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthenticatedUser {
    pub user_id: Uuid,
}

fn extract_user_id(req: &HttpRequest) -> Result<Uuid, ApiError> {
    let value = req
        .headers()
        .get(USER_ID_HEADER)
        .ok_or_else(|| ApiError::Unauthorized("Authentication required".to_string()))?;

    value
        .to_str()
        .ok()
        .and_then(|raw| Uuid::parse_str(raw.trim()).ok())
        .ok_or_else(|| ApiError::Unauthorized("Invalid user identity".to_string()))
}

impl FromRequest for AuthenticatedUser {
    type Error = ApiError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        ready(extract_user_id(req).map(|user_id| AuthenticatedUser { user_id }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test::TestRequest;

    #[test]
    fn test_extract_user_id() {
        let id = Uuid::new_v4();
        let req = TestRequest::default()
            .insert_header((USER_ID_HEADER, id.to_string()))
            .to_http_request();

        assert_eq!(extract_user_id(&req).unwrap(), id);
    }

    #[test]
    fn test_missing_or_malformed_header() {
        let req = TestRequest::default().to_http_request();
        assert!(matches!(extract_user_id(&req), Err(ApiError::Unauthorized(_))));

        let req = TestRequest::default()
            .insert_header((USER_ID_HEADER, "not-a-uuid"))
            .to_http_request();
        assert!(matches!(extract_user_id(&req), Err(ApiError::Unauthorized(_))));
    }
}
