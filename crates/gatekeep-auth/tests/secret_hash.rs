use gatekeep_auth::secret::secret_hash;

#[test]
fn matches_known_vector() {
    assert_eq!(
        secret_hash("username@host.com", "clientId", "clientSecret"),
        "iBoYbAtSXHBdi/y0nB5iLseaWMsRY/ml+fYIqVb2yTs="
    );
}

#[test]
fn deterministic_for_fixed_inputs() {
    let first = secret_hash("user@example.com", "client", "secret");
    let second = secret_hash("user@example.com", "client", "secret");
    assert_eq!(first, second);
}

#[test]
fn differs_per_username() {
    assert_ne!(
        secret_hash("a@example.com", "client", "secret"),
        secret_hash("b@example.com", "client", "secret")
    );
}

#[test]
fn differs_per_client_secret() {
    assert_ne!(
        secret_hash("a@example.com", "client", "secret-one"),
        secret_hash("a@example.com", "client", "secret-two")
    );
}
