use aws_sdk_cognitoidentityprovider::Client;
use aws_sdk_cognitoidentityprovider::config::Credentials;

use crate::config::{CognitoConfig, CredentialSource};

/// Build a Cognito Identity Provider client for the configured pool.
pub async fn build_client(config: &CognitoConfig) -> Client {
    let mut builder = aws_config::defaults(aws_config::BehaviorVersion::latest())
        .region(aws_config::Region::new(config.region.clone()));

    if let CredentialSource::Inline {
        access_key_id,
        secret_access_key,
    } = &config.credentials
    {
        builder = builder.credentials_provider(Credentials::new(
            access_key_id,
            secret_access_key,
            None,
            None,
            "gatekeep-config",
        ));
    }

    Client::new(&builder.load().await)
}
