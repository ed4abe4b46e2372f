use crate::common::set_test_secret;
use pretty_assertions::assert_eq;
use server::auth::jwt;

#[test]
fn token_round_trips_identity_and_role() {
    set_test_secret();
    let token = jwt::create_session_token(17, "staff@school.example", "staff").unwrap();
    let claims = jwt::validate_session_token(&token).unwrap();
    assert_eq!(claims.sub, 17);
    assert_eq!(claims.email, "staff@school.example");
    assert_eq!(claims.role, "staff");
    assert!(!claims.jti.is_empty());
}

#[test]
fn tampered_token_is_rejected() {
    set_test_secret();
    let token = jwt::create_session_token(1, "a@b.com", "parent").unwrap();

    // Flip a character in the signature segment
    let mut tampered = token.clone();
    let last = tampered.pop().unwrap();
    tampered.push(if last == 'A' { 'B' } else { 'A' });

    assert!(jwt::validate_session_token(&tampered).is_err());
}

#[test]
fn expiry_tracks_configured_minutes() {
    set_test_secret();
    std::env::set_var("JWT_SESSION_EXPIRY_MINUTES", "60");
    let token = jwt::create_session_token(2, "c@d.com", "driver").unwrap();
    let claims = jwt::validate_session_token(&token).unwrap();
    assert_eq!(claims.exp - claims.iat, 3600);
    std::env::remove_var("JWT_SESSION_EXPIRY_MINUTES");
}
