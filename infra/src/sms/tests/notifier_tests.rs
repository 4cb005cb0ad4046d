//! Tests for notifier construction and message text

use tutora_shared::{SmsChannel, SmsConfig};

use crate::sms::{verification_message, SmsNotifier};

#[test]
fn test_verification_message() {
    assert_eq!(
        verification_message("042917", 10),
        "Your Tutora verification code is 042917. It expires in 10 minutes."
    );
}

#[tokio::test]
async fn test_default_config_builds_log_channel() {
    let notifier = SmsNotifier::from_config(&SmsConfig::default(), 10)
        .await
        .unwrap();

    assert_eq!(notifier.channel(), SmsChannel::Log);
}

#[tokio::test]
async fn test_twilio_without_credentials_fails_at_build() {
    let config = SmsConfig::with_channel(SmsChannel::Twilio);

    assert!(SmsNotifier::from_config(&config, 10).await.is_err());
}

#[tokio::test]
async fn test_twilio_with_credentials_builds() {
    let mut config = SmsConfig::with_channel(SmsChannel::Twilio);
    config.twilio.account_sid = "AC123".to_string();
    config.twilio.auth_token = "secret".to_string();
    config.twilio.from_number = "+15005550006".to_string();

    let notifier = SmsNotifier::from_config(&config, 10).await.unwrap();

    assert_eq!(notifier.channel(), SmsChannel::Twilio);
}

#[cfg(feature = "aws-sns")]
mod aws_sns {
    use tutora_shared::{SmsChannel, SmsConfig};

    use crate::sms::aws_sns::validate_sms_type;
    use crate::sms::SmsNotifier;

    #[test]
    fn test_sms_type_validation() {
        assert!(validate_sms_type("Transactional").is_ok());
        assert!(validate_sms_type("Promotional").is_ok());
        assert!(validate_sms_type("transactional").is_err());
    }

    #[tokio::test]
    async fn test_half_configured_keys_rejected() {
        let mut config = SmsConfig::with_channel(SmsChannel::AwsSns);
        config.aws_sns.access_key_id = Some("AKIAEXAMPLE".to_string());

        assert!(SmsNotifier::from_config(&config, 10).await.is_err());
    }

    #[tokio::test]
    async fn test_invalid_sms_type_rejected() {
        let mut config = SmsConfig::with_channel(SmsChannel::AwsSns);
        config.aws_sns.sms_type = "Bulk".to_string();

        assert!(SmsNotifier::from_config(&config, 10).await.is_err());
    }
}
