//! SMS configuration module
//!
//! The channel is selected once, when the notifier is built from this
//! configuration. Provider credentials for channels that are not selected
//! may be left empty.

use serde::{Deserialize, Serialize};

/// SMS delivery channel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SmsChannel {
    /// Write the message to the application log only
    #[default]
    Log,
    /// Twilio Programmable Messaging
    Twilio,
    /// Amazon SNS direct publish
    AwsSns,
}

impl std::fmt::Display for SmsChannel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SmsChannel::Log => write!(f, "log"),
            SmsChannel::Twilio => write!(f, "twilio"),
            SmsChannel::AwsSns => write!(f, "aws_sns"),
        }
    }
}

/// SMS service configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct SmsConfig {
    /// Channel used for every outgoing verification code
    pub channel: SmsChannel,
    /// Twilio credentials
    pub twilio: TwilioConfig,
    /// AWS SNS credentials
    pub aws_sns: AwsSnsConfig,
}

impl SmsConfig {
    /// Configuration for the given channel with empty credentials
    pub fn with_channel(channel: SmsChannel) -> Self {
        Self {
            channel,
            ..Default::default()
        }
    }
}

/// Twilio SMS service configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TwilioConfig {
    /// Twilio Account SID
    pub account_sid: String,
    /// Twilio Auth Token
    pub auth_token: String,
    /// From phone number (must be a Twilio phone number)
    pub from_number: String,
    /// Base URL of the Twilio REST API
    pub api_base_url: String,
    /// Timeout for API requests in seconds
    pub request_timeout_secs: u64,
}

impl Default for TwilioConfig {
    fn default() -> Self {
        Self {
            account_sid: String::new(),
            auth_token: String::new(),
            from_number: String::new(),
            api_base_url: String::from("https://api.twilio.com"),
            request_timeout_secs: 30,
        }
    }
}

/// AWS SNS SMS service configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct AwsSnsConfig {
    /// AWS Region (e.g., "eu-west-3")
    pub region: String,
    /// Static access key; the default AWS credential chain is used when absent
    pub access_key_id: Option<String>,
    /// Static secret key paired with `access_key_id`
    pub secret_access_key: Option<String>,
    /// SMS sender ID (optional, may not be supported in all regions)
    pub sender_id: Option<String>,
    /// SMS type: "Transactional" or "Promotional"
    pub sms_type: String,
}

impl Default for AwsSnsConfig {
    fn default() -> Self {
        Self {
            region: String::from("us-east-1"),
            access_key_id: None,
            secret_access_key: None,
            sender_id: None,
            sms_type: String::from("Transactional"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_is_default_channel() {
        let config = SmsConfig::default();
        assert_eq!(config.channel, SmsChannel::Log);
        assert_eq!(config.twilio.api_base_url, "https://api.twilio.com");
        assert_eq!(config.aws_sns.sms_type, "Transactional");
    }

    #[test]
    fn test_channel_names() {
        let channel: SmsChannel = serde_json::from_str("\"aws_sns\"").unwrap();
        assert_eq!(channel, SmsChannel::AwsSns);
        assert_eq!(SmsChannel::Twilio.to_string(), "twilio");
        assert!(serde_json::from_str::<SmsChannel>("\"carrier_pigeon\"").is_err());
    }
}
