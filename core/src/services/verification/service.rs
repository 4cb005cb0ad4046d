//! Phone verification service implementation

use chrono::Utc;
use std::sync::Arc;
use uuid::Uuid;

use tutora_shared::phone::mask_phone_number;
use tutora_shared::VerificationConfig;

use crate::domain::entities::user::User;
use crate::domain::entities::verification_code::VerificationCode;
use crate::domain::events::{EventPublisher, PhoneVerified};
use crate::errors::{AuthError, DomainError, DomainResult};
use crate::repositories::user::UserRepository;

use super::generator::generate_code;
use super::traits::{CodeStore, VerificationNotifier};
use super::types::{IssueResult, PromptOutcome, ResendOutcome, VerifyOutcome};

/// Verification service for phone numbers
///
/// Type parameters may be trait objects, so the outer layers can hold a
/// `PhoneVerificationService<dyn VerificationNotifier, dyn CodeStore, dyn UserRepository>`.
pub struct PhoneVerificationService<N, S, R>
where
    N: VerificationNotifier + ?Sized,
    S: CodeStore + ?Sized,
    R: UserRepository + ?Sized,
{
    notifier: Arc<N>,
    store: Arc<S>,
    users: Arc<R>,
    events: Arc<dyn EventPublisher>,
    config: VerificationConfig,
}

impl<N, S, R> PhoneVerificationService<N, S, R>
where
    N: VerificationNotifier + ?Sized,
    S: CodeStore + ?Sized,
    R: UserRepository + ?Sized,
{
    /// Create a new verification service
    ///
    /// # Arguments
    ///
    /// * `notifier` - Delivery channel for codes
    /// * `store` - Code storage with expiry
    /// * `users` - User directory
    /// * `events` - Sink for `PhoneVerified` events
    /// * `config` - Verification settings
    pub fn new(
        notifier: Arc<N>,
        store: Arc<S>,
        users: Arc<R>,
        events: Arc<dyn EventPublisher>,
        config: VerificationConfig,
    ) -> Self {
        Self {
            notifier,
            store,
            users,
            events,
            config,
        }
    }

    pub fn config(&self) -> &VerificationConfig {
        &self.config
    }

    /// Generate, store and send a code for a phone number
    ///
    /// A delivery failure does not remove the stored code.
    ///
    /// # Returns
    ///
    /// * `Ok(IssueResult)` - The issued code and whether it was delivered
    /// * `Err(DomainError::Internal)` - If the store rejected the code
    pub async fn issue_code(&self, phone: &str) -> DomainResult<IssueResult> {
        let masked = mask_phone_number(phone);
        let code = VerificationCode::issue(phone, generate_code(), self.config.expiry_minutes);

        self.store.store_code(phone, &code.code).await.map_err(|e| {
            tracing::error!(
                phone = %masked,
                error = %e,
                event = "code_storage_failed",
                "Failed to store verification code"
            );
            DomainError::internal(format!("Failed to store verification code: {}", e))
        })?;

        tracing::info!(
            phone = %masked,
            event = "code_issued",
            expires_at = %code.expires_at,
            "Issued new verification code"
        );

        let delivered = self.notifier.send_verification_code(phone, &code.code).await;
        if !delivered {
            tracing::warn!(
                phone = %masked,
                event = "code_delivery_failed",
                "Verification code stored but not delivered"
            );
        }

        Ok(IssueResult { code, delivered })
    }

    /// Compare a submitted code with the stored one
    pub async fn check_code(&self, phone: &str, submitted: &str) -> DomainResult<bool> {
        self.store
            .verify_code(phone, submitted)
            .await
            .map_err(|e| DomainError::internal(format!("Failed to verify code: {}", e)))
    }

    /// Remove the stored code for a phone number
    pub async fn consume_code(&self, phone: &str) -> DomainResult<()> {
        self.store
            .remove_code(phone)
            .await
            .map_err(|e| DomainError::internal(format!("Failed to remove code: {}", e)))
    }

    /// Handle a visit to the verification prompt
    ///
    /// Sends a code only when none is live for the user's phone. A code
    /// left behind by a failed delivery therefore keeps the prompt in
    /// `CodePending` until it expires.
    pub async fn show_prompt(&self, user_id: Uuid) -> DomainResult<PromptOutcome> {
        let user = self.load_user(user_id).await?;
        if user.phone_verified() {
            return Ok(PromptOutcome::AlreadyVerified);
        }

        let phone = Self::phone_of(&user)?;
        let pending = self
            .store
            .has_code(phone)
            .await
            .map_err(|e| DomainError::internal(format!("Failed to look up code: {}", e)))?;

        if pending {
            tracing::debug!(
                phone = %mask_phone_number(phone),
                event = "code_pending",
                "Verification code already pending, not sending"
            );
            return Ok(PromptOutcome::CodePending);
        }

        let issued = self.issue_code(phone).await?;
        Ok(PromptOutcome::CodeSent {
            delivered: issued.delivered,
            expires_at: issued.code.expires_at,
        })
    }

    /// Handle an explicit request for a new code
    ///
    /// Always replaces any live code.
    pub async fn resend_code(&self, user_id: Uuid) -> DomainResult<ResendOutcome> {
        let user = self.load_user(user_id).await?;
        if user.phone_verified() {
            return Ok(ResendOutcome::AlreadyVerified);
        }

        let phone = Self::phone_of(&user)?;
        let issued = self.issue_code(phone).await?;

        if issued.delivered {
            Ok(ResendOutcome::Sent {
                expires_at: issued.code.expires_at,
            })
        } else {
            Ok(ResendOutcome::DeliveryFailed)
        }
    }

    /// Handle a code submission
    ///
    /// A user whose phone is already verified succeeds without the store
    /// being consulted. Wrong, expired and missing codes all yield
    /// `AuthError::InvalidVerificationCode`; the stored code is left intact.
    pub async fn verify(&self, user_id: Uuid, submitted: &str) -> DomainResult<VerifyOutcome> {
        let user = self.load_user(user_id).await?;
        if user.phone_verified() {
            return Ok(VerifyOutcome::AlreadyVerified);
        }

        let phone = Self::phone_of(&user)?.to_string();
        let masked = mask_phone_number(&phone);

        if !self.check_code(&phone, submitted).await? {
            tracing::warn!(
                phone = %masked,
                event = "code_mismatch",
                "Submitted verification code did not match"
            );
            return Err(AuthError::InvalidVerificationCode.into());
        }

        let verified_at = Utc::now();
        let newly_verified = self.users.mark_phone_verified(user.id, verified_at).await?;

        if let Err(e) = self.consume_code(&phone).await {
            tracing::warn!(
                phone = %masked,
                error = %e,
                event = "code_removal_failed",
                "Phone verified but code could not be removed; it will expire"
            );
        }

        // Another request verified the phone between our read and write
        if !newly_verified {
            tracing::info!(
                phone = %masked,
                user_id = %user.id,
                event = "already_verified",
                "Phone number was verified by a concurrent request"
            );
            return Ok(VerifyOutcome::AlreadyVerified);
        }

        tracing::info!(
            phone = %masked,
            user_id = %user.id,
            event = "phone_verified",
            "Phone number verified"
        );

        let event = PhoneVerified {
            user_id: user.id,
            phone,
            verified_at,
        };
        if let Err(e) = self.events.publish(event.into()).await {
            tracing::warn!(
                user_id = %user.id,
                error = %e,
                event = "event_publish_failed",
                "Failed to publish phone verified event"
            );
        }

        Ok(VerifyOutcome::Verified { verified_at })
    }

    async fn load_user(&self, user_id: Uuid) -> DomainResult<User> {
        self.users
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| AuthError::UserNotFound.into())
    }

    fn phone_of(user: &User) -> DomainResult<&str> {
        user.phone
            .as_deref()
            .filter(|p| !p.trim().is_empty())
            .ok_or_else(|| AuthError::PhoneNumberMissing.into())
    }
}
