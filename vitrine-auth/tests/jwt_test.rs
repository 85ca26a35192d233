use vitrine_auth::JwtVerifier;
use vitrine_core::config::AuthConfig;
use vitrine_core::models::UserId;
use vitrine_core::traits::IIdentityVerifier;

fn config(secret: &str) -> AuthConfig {
    AuthConfig {
        secret: secret.to_string(),
        token_ttl_hours: 24,
    }
}

#[test]
fn issued_token_verifies_to_same_user() {
    let verifier = JwtVerifier::new(&config("test-secret"));
    let user = UserId::from("user-1");

    let token = verifier.issue(&user).unwrap();
    let resolved = verifier.verify(&token).unwrap();

    assert_eq!(resolved, user);
}

#[test]
fn garbage_token_is_rejected() {
    let verifier = JwtVerifier::new(&config("test-secret"));
    assert!(verifier.verify("not-a-token").is_err());
}

#[test]
fn token_signed_with_other_secret_is_rejected() {
    let issuer = JwtVerifier::new(&config("secret-a"));
    let verifier = JwtVerifier::new(&config("secret-b"));

    let token = issuer.issue(&UserId::from("user-1")).unwrap();
    assert!(verifier.verify(&token).is_err());
}

#[test]
fn expired_token_is_rejected() {
    let verifier = JwtVerifier::new(&AuthConfig {
        secret: "test-secret".to_string(),
        // Negative TTL backdates the expiry past jsonwebtoken's default leeway.
        token_ttl_hours: -1,
    });

    let token = verifier.issue(&UserId::from("user-1")).unwrap();
    assert!(verifier.verify(&token).is_err());
}
