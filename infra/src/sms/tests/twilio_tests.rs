//! Tests for the Twilio channel

use tutora_core::VerificationNotifier;
use tutora_shared::config::TwilioConfig;

use crate::sms::{SmsNotifier, SmsTransport, TwilioChannel};
use crate::InfrastructureError;

fn config(base_url: &str) -> TwilioConfig {
    TwilioConfig {
        account_sid: "AC00000000000000000000000000000000".to_string(),
        auth_token: "token".to_string(),
        from_number: "+15005550006".to_string(),
        api_base_url: base_url.to_string(),
        request_timeout_secs: 2,
    }
}

#[test]
fn test_missing_credentials_rejected() {
    let mut incomplete = config("https://api.twilio.com");
    incomplete.auth_token = String::new();

    let result = TwilioChannel::new(incomplete);

    assert!(matches!(result, Err(InfrastructureError::Config(msg)) if msg.contains("auth_token")));
}

#[test]
fn test_messages_url() {
    let channel = TwilioChannel::new(config("https://api.twilio.com/")).unwrap();

    assert_eq!(
        channel.messages_url(),
        "https://api.twilio.com/2010-04-01/Accounts/AC00000000000000000000000000000000/Messages.json"
    );
}

#[tokio::test]
async fn test_unreachable_provider_reports_failure() {
    // nothing listens on port 9 locally
    let channel = TwilioChannel::new(config("http://127.0.0.1:9")).unwrap();
    let notifier = SmsNotifier::new(SmsTransport::Twilio(channel), 10);

    assert!(!notifier.send_verification_code("+224600000000", "123456").await);
}
