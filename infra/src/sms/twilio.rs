//! Twilio SMS channel over the Messages REST API

use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, info};

use tutora_shared::config::TwilioConfig;
use tutora_shared::phone::mask_phone_number;

use crate::InfrastructureError;

#[derive(Debug, Deserialize)]
struct MessageResponse {
    sid: String,
    status: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ErrorResponse {
    code: Option<i64>,
    message: Option<String>,
}

pub struct TwilioChannel {
    client: Client,
    config: TwilioConfig,
}

impl TwilioChannel {
    /// Create the channel, rejecting incomplete credentials
    pub fn new(config: TwilioConfig) -> Result<Self, InfrastructureError> {
        for (name, value) in [
            ("account_sid", &config.account_sid),
            ("auth_token", &config.auth_token),
            ("from_number", &config.from_number),
        ] {
            if value.trim().is_empty() {
                return Err(InfrastructureError::Config(format!(
                    "Twilio {} is not configured",
                    name
                )));
            }
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;

        Ok(Self { client, config })
    }

    pub(crate) fn messages_url(&self) -> String {
        format!(
            "{}/2010-04-01/Accounts/{}/Messages.json",
            self.config.api_base_url.trim_end_matches('/'),
            self.config.account_sid
        )
    }

    /// Send one message
    pub async fn send(&self, phone: &str, message: &str) -> Result<(), InfrastructureError> {
        debug!(phone = %mask_phone_number(phone), "Sending SMS via Twilio");

        let params = [
            ("To", phone),
            ("From", self.config.from_number.as_str()),
            ("Body", message),
        ];

        let response = self
            .client
            .post(self.messages_url())
            .basic_auth(&self.config.account_sid, Some(&self.config.auth_token))
            .form(&params)
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            let body: MessageResponse = response.json().await?;
            info!(
                phone = %mask_phone_number(phone),
                message_sid = %body.sid,
                status = body.status.as_deref().unwrap_or("unknown"),
                "SMS sent via Twilio"
            );
            return Ok(());
        }

        let detail = match response.json::<ErrorResponse>().await {
            Ok(ErrorResponse {
                code: Some(code),
                message: Some(message),
            }) => format!("{} (code {})", message, code),
            Ok(ErrorResponse {
                message: Some(message),
                ..
            }) => message,
            _ => "no error detail".to_string(),
        };

        Err(InfrastructureError::Sms(format!(
            "Twilio responded with {}: {}",
            status, detail
        )))
    }
}
