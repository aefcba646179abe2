use std::collections::HashMap;

use aws_sdk_cognitoidentityprovider::Client;
use aws_sdk_cognitoidentityprovider::error::ProvideErrorMetadata;
use aws_sdk_cognitoidentityprovider::types::{
    AttributeType, AuthFlowType, ChallengeNameType, DeliveryMediumType,
};
use tracing::info;
use uuid::Uuid;

use crate::attributes::{EMAIL_VERIFIED, attribute, to_attribute_list};
use crate::client::build_client;
use crate::config::CognitoConfig;
use crate::error::AuthError;
use crate::secret::secret_hash;
use crate::status::{ConfirmStatus, PasswordStatus, reset_status};

/// Pool status for users created by invitation who have not yet set
/// their own password.
pub const FORCE_PASSWORD_STATUS: &str = "FORCE_CHANGE_PASSWORD";

/// Tokens issued by a completed authentication.
#[derive(Debug, Clone)]
pub struct AuthTokens {
    pub access_token: String,
    pub id_token: String,
    pub refresh_token: String,
    pub expires_in: i32,
}

/// Result of a credential check against the pool.
#[derive(Debug, Clone)]
pub enum AuthAttempt {
    /// Credentials accepted, tokens issued.
    Authenticated(AuthTokens),
    /// Credentials accepted, but the pool requires a new password
    /// before a session may exist. Carries the session token
    /// [`CognitoGate::confirm_password`] needs to answer the challenge.
    NewPasswordRequired { session: String },
}

/// A pool user as returned by the administrative lookup.
#[derive(Debug, Clone)]
pub struct PoolUser {
    pub username: String,
    pub status: String,
    pub enabled: bool,
    pub attributes: HashMap<String, String>,
}

impl PoolUser {
    /// Whether the pool will force a password change on next login.
    pub fn must_change_password(&self) -> bool {
        self.status == FORCE_PASSWORD_STATUS
    }
}

/// Credential adapter over one Cognito user pool.
///
/// Holds only immutable configuration set at construction. Every
/// operation performs a single outbound call (no retries, no backoff)
/// and maps provider failures into the closed error/token vocabulary;
/// SDK error types never cross this boundary.
pub struct CognitoGate {
    client: Client,
    client_id: String,
    client_secret: String,
    pool_id: String,
}

impl CognitoGate {
    pub fn new(
        client: Client,
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
        pool_id: impl Into<String>,
    ) -> Self {
        Self {
            client,
            client_id: client_id.into(),
            client_secret: client_secret.into(),
            pool_id: pool_id.into(),
        }
    }

    pub async fn from_config(config: &CognitoConfig) -> Self {
        Self::new(
            build_client(config).await,
            &config.client_id,
            &config.client_secret,
            &config.pool_id,
        )
    }

    fn secret_hash(&self, username: &str) -> String {
        secret_hash(username, &self.client_id, &self.client_secret)
    }

    /// Check credentials with the administrative non-SRP flow.
    ///
    /// An unconfirmed account surfaces as
    /// [`AuthError::UserNotConfirmed`]; every other provider failure
    /// collapses into [`AuthError::CredentialsRejected`]. A
    /// NEW_PASSWORD_REQUIRED challenge is a successful attempt, not a
    /// completed login.
    pub async fn authenticate(
        &self,
        username: &str,
        password: &str,
    ) -> Result<AuthAttempt, AuthError> {
        info!(username = username, "authenticating against user pool");

        let mut params = HashMap::new();
        params.insert("USERNAME".to_string(), username.to_string());
        params.insert("PASSWORD".to_string(), password.to_string());
        params.insert("SECRET_HASH".to_string(), self.secret_hash(username));

        let resp = match self
            .client
            .admin_initiate_auth()
            .auth_flow(AuthFlowType::AdminNoSrpAuth)
            .client_id(&self.client_id)
            .user_pool_id(&self.pool_id)
            .set_auth_parameters(Some(params))
            .send()
            .await
        {
            Ok(resp) => resp,
            Err(e) => {
                let not_confirmed = e
                    .as_service_error()
                    .map(|se| se.is_user_not_confirmed_exception())
                    .unwrap_or(false);
                if not_confirmed {
                    return Err(AuthError::UserNotConfirmed);
                }
                info!(
                    username = username,
                    error_code = e.as_service_error().and_then(ProvideErrorMetadata::code),
                    "credential check failed"
                );
                return Err(AuthError::CredentialsRejected);
            }
        };

        if resp.challenge_name() == Some(&ChallengeNameType::NewPasswordRequired) {
            let session = resp.session().unwrap_or_default().to_string();
            return Ok(AuthAttempt::NewPasswordRequired { session });
        }

        match resp.authentication_result() {
            Some(result) => Ok(AuthAttempt::Authenticated(AuthTokens {
                access_token: result.access_token().unwrap_or_default().to_string(),
                id_token: result.id_token().unwrap_or_default().to_string(),
                refresh_token: result.refresh_token().unwrap_or_default().to_string(),
                expires_in: result.expires_in(),
            })),
            None => Err(AuthError::CredentialsRejected),
        }
    }

    /// Create the account, then mark its email verified.
    ///
    /// The verified mark is applied after every successful sign-up,
    /// whatever attributes were supplied. Returns whether the pool
    /// already considers the account confirmed.
    pub async fn register(
        &self,
        username: &str,
        password: &str,
        attributes: &HashMap<String, String>,
    ) -> Result<bool, AuthError> {
        info!(username = username, "registering user");

        let resp = self
            .client
            .sign_up()
            .client_id(&self.client_id)
            .secret_hash(self.secret_hash(username))
            .username(username)
            .password(password)
            .set_user_attributes(Some(to_attribute_list(attributes)?))
            .send()
            .await
            .map_err(|e| AuthError::Cognito(e.into_service_error().to_string()))?;

        self.mark_email_verified(username).await?;

        Ok(resp.user_confirmed())
    }

    async fn mark_email_verified(&self, username: &str) -> Result<(), AuthError> {
        self.client
            .admin_update_user_attributes()
            .user_pool_id(&self.pool_id)
            .username(username)
            .user_attributes(attribute(EMAIL_VERIFIED, "true")?)
            .send()
            .await
            .map_err(|e| AuthError::Cognito(e.into_service_error().to_string()))?;
        Ok(())
    }

    /// Exchange an emailed confirmation code for a confirmed account.
    pub async fn confirm_registration(&self, code: &str, username: &str) -> ConfirmStatus {
        match self
            .client
            .confirm_sign_up()
            .client_id(&self.client_id)
            .secret_hash(self.secret_hash(username))
            .username(username)
            .confirmation_code(code)
            .send()
            .await
        {
            Ok(_) => ConfirmStatus::Confirmed,
            Err(e) => {
                info!(
                    username = username,
                    error_code = e.as_service_error().and_then(ProvideErrorMetadata::code),
                    "confirmation rejected"
                );
                ConfirmStatus::InvalidCode
            }
        }
    }

    /// Ask the pool to email a password-reset code.
    pub async fn send_reset_link(&self, username: &str) -> PasswordStatus {
        match self
            .client
            .forgot_password()
            .client_id(&self.client_id)
            .secret_hash(self.secret_hash(username))
            .username(username)
            .send()
            .await
        {
            Ok(_) => PasswordStatus::LinkSent,
            Err(_) => PasswordStatus::InvalidUser,
        }
    }

    /// Exchange a reset code for a new password.
    pub async fn reset_password(
        &self,
        code: &str,
        username: &str,
        password: &str,
    ) -> PasswordStatus {
        match self
            .client
            .confirm_forgot_password()
            .client_id(&self.client_id)
            .secret_hash(self.secret_hash(username))
            .username(username)
            .confirmation_code(code)
            .password(password)
            .send()
            .await
        {
            Ok(_) => PasswordStatus::PasswordReset,
            Err(e) => reset_status(e.as_service_error().and_then(ProvideErrorMetadata::code)),
        }
    }

    /// Administratively create a user with a random temporary password
    /// and a verified email. Cognito delivers the invitation email; the
    /// adapter performs no delivery itself.
    pub async fn invite_user(
        &self,
        username: &str,
        attributes: &HashMap<String, String>,
    ) -> Result<(), AuthError> {
        let mut list = to_attribute_list(attributes)?;
        list.push(attribute(EMAIL_VERIFIED, "true")?);

        self.client
            .admin_create_user()
            .user_pool_id(&self.pool_id)
            .username(username)
            .temporary_password(temporary_password())
            .set_user_attributes(Some(list))
            .desired_delivery_mediums(DeliveryMediumType::Email)
            .send()
            .await
            .map_err(|e| AuthError::Cognito(e.into_service_error().to_string()))?;

        info!(username = username, "invited user");
        Ok(())
    }

    /// Answer the forced-password-change challenge using the session
    /// token from a prior [`authenticate`](Self::authenticate) call.
    pub async fn confirm_password(
        &self,
        username: &str,
        password: &str,
        session: &str,
    ) -> PasswordStatus {
        let mut responses = HashMap::new();
        responses.insert("USERNAME".to_string(), username.to_string());
        responses.insert("NEW_PASSWORD".to_string(), password.to_string());
        responses.insert("SECRET_HASH".to_string(), self.secret_hash(username));

        match self
            .client
            .admin_respond_to_auth_challenge()
            .user_pool_id(&self.pool_id)
            .client_id(&self.client_id)
            .challenge_name(ChallengeNameType::NewPasswordRequired)
            .set_challenge_responses(Some(responses))
            .session(session)
            .send()
            .await
        {
            Ok(_) => PasswordStatus::PasswordReset,
            Err(e) => reset_status(e.as_service_error().and_then(ProvideErrorMetadata::code)),
        }
    }

    /// Administrative lookup. `Ok(None)` when the pool has no such user.
    pub async fn get_user(&self, username: &str) -> Result<Option<PoolUser>, AuthError> {
        let resp = match self
            .client
            .admin_get_user()
            .user_pool_id(&self.pool_id)
            .username(username)
            .send()
            .await
        {
            Ok(resp) => resp,
            Err(e) => {
                let not_found = e
                    .as_service_error()
                    .map(|se| se.is_user_not_found_exception())
                    .unwrap_or(false);
                if not_found {
                    return Ok(None);
                }
                return Err(AuthError::Cognito(e.into_service_error().to_string()));
            }
        };

        let attributes = resp
            .user_attributes()
            .iter()
            .filter_map(|a: &AttributeType| {
                a.value().map(|v| (a.name().to_string(), v.to_string()))
            })
            .collect();

        Ok(Some(PoolUser {
            username: resp.username().to_string(),
            status: resp
                .user_status()
                .map(|s| s.as_str())
                .unwrap_or_default()
                .to_string(),
            enabled: resp.enabled(),
            attributes,
        }))
    }

    /// Replace attributes on an existing pool user.
    pub async fn set_user_attributes(
        &self,
        username: &str,
        attributes: &HashMap<String, String>,
    ) -> Result<(), AuthError> {
        self.client
            .admin_update_user_attributes()
            .user_pool_id(&self.pool_id)
            .username(username)
            .set_user_attributes(Some(to_attribute_list(attributes)?))
            .send()
            .await
            .map_err(|e| AuthError::Cognito(e.into_service_error().to_string()))?;
        Ok(())
    }

    /// Full reset flow: look the user up first. Invited users still on
    /// their temporary password authenticate with the "code" and answer
    /// the forced-change challenge; everyone else exchanges the emailed
    /// reset code.
    pub async fn complete_password_reset(
        &self,
        username: &str,
        code: &str,
        new_password: &str,
    ) -> Result<PasswordStatus, AuthError> {
        let Some(user) = self.get_user(username).await? else {
            return Ok(PasswordStatus::InvalidUser);
        };

        if user.must_change_password() {
            return match self.authenticate(username, code).await {
                Ok(AuthAttempt::NewPasswordRequired { session }) => {
                    Ok(self.confirm_password(username, new_password, &session).await)
                }
                // Anything else means the temporary password did not
                // open the challenge, so the "token" was no good.
                Ok(AuthAttempt::Authenticated(_)) => Ok(PasswordStatus::InvalidToken),
                Err(AuthError::UserNotConfirmed) => Err(AuthError::UserNotConfirmed),
                Err(_) => Ok(PasswordStatus::InvalidToken),
            };
        }

        Ok(self.reset_password(code, username, new_password).await)
    }
}

/// Random one-time password for invited users, shaped to satisfy the
/// default pool policy (upper, lower, digit, symbol).
fn temporary_password() -> String {
    format!("Tmp#{}", Uuid::new_v4().simple())
}
