use actix_web::{web, HttpResponse};
use validator::Validate;

use crate::app::AppState;
use crate::dto::{VerificationStatusResponse, VerifyCodeRequest};
use crate::handlers::ApiError;
use crate::middleware::AuthenticatedUser;

/// Handler for POST /api/v1/phone-verification/verify
///
/// # Request Body
///
/// ```json
/// { "code": "123456" }
/// ```
///
/// ## Errors
/// - 401 Unauthorized: Missing or invalid `X-User-Id`
/// - 404 Not Found: Unknown user
/// - 422 Unprocessable Entity: Code is not 6 characters, or does not match
///   a live code. Both carry a field error on `code`.
pub async fn verify_code(
    user: AuthenticatedUser,
    state: web::Data<AppState>,
    request: web::Json<VerifyCodeRequest>,
) -> Result<HttpResponse, ApiError> {
    request.validate()?;

    let outcome = state
        .verification
        .verify(user.user_id, &request.code)
        .await?;

    Ok(HttpResponse::Ok().json(VerificationStatusResponse::from(outcome)))
}
