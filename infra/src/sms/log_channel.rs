//! Log-only SMS channel
//!
//! Writes the outgoing message to the application log instead of sending
//! it. This is the default channel and the one used in development.

use tracing::info;
use tutora_shared::phone::mask_phone_number;

use crate::InfrastructureError;

#[derive(Debug, Clone, Copy, Default)]
pub struct LogChannel;

impl LogChannel {
    /// Log the message; never fails
    pub fn send(&self, phone: &str, message: &str) -> Result<(), InfrastructureError> {
        info!(
            channel = "log",
            to = %mask_phone_number(phone),
            body = %message,
            "SMS message (not sent)"
        );
        Ok(())
    }
}
