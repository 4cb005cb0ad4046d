//! SMS delivery of verification codes
//!
//! One transport per channel, chosen once from `SmsConfig` when the
//! notifier is built. Every transport failure is logged and reported to the
//! verification flow as an undelivered code; nothing is retried.

#[cfg(feature = "aws-sns")]
pub mod aws_sns;
pub mod log_channel;
pub mod twilio;

#[cfg(test)]
mod tests;

use async_trait::async_trait;
use tracing::{error, info};

use tutora_core::VerificationNotifier;
use tutora_shared::phone::mask_phone_number;
use tutora_shared::{SmsChannel, SmsConfig};

#[cfg(feature = "aws-sns")]
pub use aws_sns::AwsSnsChannel;
pub use log_channel::LogChannel;
pub use twilio::TwilioChannel;

use crate::InfrastructureError;

/// Text of the verification SMS
pub fn verification_message(code: &str, expiry_minutes: i64) -> String {
    format!(
        "Your Tutora verification code is {}. It expires in {} minutes.",
        code, expiry_minutes
    )
}

/// Channel-specific transport
pub enum SmsTransport {
    Log(LogChannel),
    Twilio(TwilioChannel),
    #[cfg(feature = "aws-sns")]
    AwsSns(AwsSnsChannel),
}

impl SmsTransport {
    pub fn channel(&self) -> SmsChannel {
        match self {
            SmsTransport::Log(_) => SmsChannel::Log,
            SmsTransport::Twilio(_) => SmsChannel::Twilio,
            #[cfg(feature = "aws-sns")]
            SmsTransport::AwsSns(_) => SmsChannel::AwsSns,
        }
    }

    async fn send(&self, phone: &str, message: &str) -> Result<(), InfrastructureError> {
        match self {
            SmsTransport::Log(channel) => channel.send(phone, message),
            SmsTransport::Twilio(channel) => channel.send(phone, message).await,
            #[cfg(feature = "aws-sns")]
            SmsTransport::AwsSns(channel) => channel.send(phone, message).await,
        }
    }
}

/// Verification notifier sending codes by SMS
pub struct SmsNotifier {
    transport: SmsTransport,
    expiry_minutes: i64,
}

impl SmsNotifier {
    pub fn new(transport: SmsTransport, expiry_minutes: i64) -> Self {
        Self {
            transport,
            expiry_minutes,
        }
    }

    /// Notifier that only logs outgoing messages
    pub fn log_only(expiry_minutes: i64) -> Self {
        Self::new(SmsTransport::Log(LogChannel), expiry_minutes)
    }

    /// Build the notifier for the configured channel
    ///
    /// # Arguments
    /// * `config` - Channel selection and provider credentials
    /// * `expiry_minutes` - Code lifetime quoted in the message text
    ///
    /// # Returns
    /// * `Err(InfrastructureError::Config)` - Missing credentials, or a channel
    ///   compiled out of this build
    pub async fn from_config(
        config: &SmsConfig,
        expiry_minutes: i64,
    ) -> Result<Self, InfrastructureError> {
        let transport = match config.channel {
            SmsChannel::Log => SmsTransport::Log(LogChannel),
            SmsChannel::Twilio => SmsTransport::Twilio(TwilioChannel::new(config.twilio.clone())?),
            #[cfg(feature = "aws-sns")]
            SmsChannel::AwsSns => {
                SmsTransport::AwsSns(AwsSnsChannel::new(config.aws_sns.clone()).await?)
            }
            #[cfg(not(feature = "aws-sns"))]
            SmsChannel::AwsSns => {
                return Err(InfrastructureError::Config(
                    "The aws_sns channel requires the `aws-sns` feature".to_string(),
                ))
            }
        };

        info!(channel = %transport.channel(), "SMS notifier initialized");
        Ok(Self::new(transport, expiry_minutes))
    }

    pub fn channel(&self) -> SmsChannel {
        self.transport.channel()
    }
}

#[async_trait]
impl VerificationNotifier for SmsNotifier {
    async fn send_verification_code(&self, phone: &str, code: &str) -> bool {
        let message = verification_message(code, self.expiry_minutes);

        match self.transport.send(phone, &message).await {
            Ok(()) => true,
            Err(e) => {
                error!(
                    phone = %mask_phone_number(phone),
                    channel = %self.transport.channel(),
                    error = %e,
                    event = "sms_send_failed",
                    "Failed to send verification code"
                );
                false
            }
        }
    }
}
