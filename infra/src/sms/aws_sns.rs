//! AWS SNS SMS channel

use aws_config::BehaviorVersion;
use aws_sdk_sns::{config::Region, types::MessageAttributeValue, Client as SnsClient};
use std::collections::HashMap;
use tracing::{debug, info};

use tutora_shared::config::AwsSnsConfig;
use tutora_shared::phone::mask_phone_number;

use crate::InfrastructureError;

pub struct AwsSnsChannel {
    client: SnsClient,
    config: AwsSnsConfig,
}

impl AwsSnsChannel {
    /// Create the SNS client
    ///
    /// Static credentials are used when both keys are configured; otherwise
    /// the SDK's default provider chain resolves them.
    pub async fn new(config: AwsSnsConfig) -> Result<Self, InfrastructureError> {
        validate_sms_type(&config.sms_type)?;

        let mut loader =
            aws_config::defaults(BehaviorVersion::latest()).region(Region::new(config.region.clone()));

        match (&config.access_key_id, &config.secret_access_key) {
            (Some(access_key_id), Some(secret_access_key)) => {
                loader = loader.credentials_provider(aws_credential_types::Credentials::new(
                    access_key_id,
                    secret_access_key,
                    None,
                    None,
                    "tutora_sms",
                ));
            }
            (None, None) => {}
            _ => {
                return Err(InfrastructureError::Config(
                    "AWS SNS access_key_id and secret_access_key must be set together".to_string(),
                ))
            }
        }

        let client = SnsClient::new(&loader.load().await);
        info!(region = %config.region, "AWS SNS client initialized");

        Ok(Self { client, config })
    }

    fn message_attributes(&self) -> Result<HashMap<String, MessageAttributeValue>, InfrastructureError> {
        let mut attributes = HashMap::new();
        attributes.insert(
            "AWS.SNS.SMS.SMSType".to_string(),
            string_attribute(&self.config.sms_type)?,
        );
        if let Some(sender_id) = &self.config.sender_id {
            attributes.insert("AWS.SNS.SMS.SenderID".to_string(), string_attribute(sender_id)?);
        }
        Ok(attributes)
    }

    /// Publish one message
    pub async fn send(&self, phone: &str, message: &str) -> Result<(), InfrastructureError> {
        debug!(phone = %mask_phone_number(phone), "Sending SMS via AWS SNS");

        let response = self
            .client
            .publish()
            .phone_number(phone)
            .message(message)
            .set_message_attributes(Some(self.message_attributes()?))
            .send()
            .await
            .map_err(|e| InfrastructureError::Sms(format!("AWS SNS publish failed: {}", e)))?;

        info!(
            phone = %mask_phone_number(phone),
            message_id = response.message_id().unwrap_or("unknown"),
            "SMS sent via AWS SNS"
        );
        Ok(())
    }
}

fn string_attribute(value: &str) -> Result<MessageAttributeValue, InfrastructureError> {
    MessageAttributeValue::builder()
        .data_type("String")
        .string_value(value)
        .build()
        .map_err(|e| InfrastructureError::Sms(format!("Invalid SNS message attribute: {}", e)))
}

pub(crate) fn validate_sms_type(sms_type: &str) -> Result<(), InfrastructureError> {
    match sms_type {
        "Transactional" | "Promotional" => Ok(()),
        other => Err(InfrastructureError::Config(format!(
            "AWS SNS sms_type must be Transactional or Promotional, got {}",
            other
        ))),
    }
}
