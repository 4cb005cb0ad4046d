use actix_web::{web, HttpResponse};

use tutora_core::{AuthError, ResendOutcome};

use crate::app::AppState;
use crate::dto::VerificationStatusResponse;
use crate::handlers::ApiError;
use crate::middleware::AuthenticatedUser;

/// Handler for POST /api/v1/phone-verification/resend
///
/// Always issues a new code, replacing any live one.
///
/// ## Errors
/// - 401 Unauthorized: Missing or invalid `X-User-Id`
/// - 404 Not Found: Unknown user
/// - 422 Unprocessable Entity: No phone number on file
/// - 503 Service Unavailable: The code could not be sent
pub async fn resend_code(
    user: AuthenticatedUser,
    state: web::Data<AppState>,
) -> Result<HttpResponse, ApiError> {
    match state.verification.resend_code(user.user_id).await? {
        ResendOutcome::DeliveryFailed => Err(AuthError::SmsDeliveryFailed.into()),
        outcome => Ok(HttpResponse::Ok().json(VerificationStatusResponse::from(outcome))),
    }
}
