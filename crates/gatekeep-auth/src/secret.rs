use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use ring::hmac;

/// Compute the `SECRET_HASH` Cognito requires when the app client has a
/// client secret: base64(HMAC-SHA256(client_secret, username + client_id)).
///
/// Deterministic for fixed inputs. The client secret is used only as
/// the HMAC key here.
pub fn secret_hash(username: &str, client_id: &str, client_secret: &str) -> String {
    let key = hmac::Key::new(hmac::HMAC_SHA256, client_secret.as_bytes());
    let message = format!("{username}{client_id}");
    let tag = hmac::sign(&key, message.as_bytes());
    STANDARD.encode(tag.as_ref())
}
