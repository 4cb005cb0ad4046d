use actix_web::{web, HttpResponse};

use crate::app::AppState;
use crate::dto::VerificationStatusResponse;
use crate::handlers::ApiError;
use crate::middleware::AuthenticatedUser;

/// Handler for GET /api/v1/phone-verification
///
/// Sends a code the first time the prompt is shown. While that code is
/// live, further visits report `code_pending` without sending again.
///
/// # Response
///
/// ## Success (200 OK)
/// ```json
/// {
///     "status": "code_sent",
///     "message": "A verification code has been sent to your phone.",
///     "phone_verified": false,
///     "delivered": true,
///     "expires_at": "2024-01-01T12:10:00Z"
/// }
/// ```
///
/// A failed send still answers 200, with `"status": "code_not_delivered"`.
///
/// ## Errors
/// - 401 Unauthorized: Missing or invalid `X-User-Id`
/// - 404 Not Found: Unknown user
/// - 422 Unprocessable Entity: No phone number on file
pub async fn show_prompt(
    user: AuthenticatedUser,
    state: web::Data<AppState>,
) -> Result<HttpResponse, ApiError> {
    let outcome = state.verification.show_prompt(user.user_id).await?;
    Ok(HttpResponse::Ok().json(VerificationStatusResponse::from(outcome)))
}
