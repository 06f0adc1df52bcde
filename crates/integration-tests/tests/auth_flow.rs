//! Signup and login flows against a migrated database.

#![allow(clippy::unwrap_used)]

use soycart_integration_tests::TestContext;
use soycart_server::services::auth::{AuthError, SignUpRequest};

fn request(username: &str, contact: &str) -> SignUpRequest {
    SignUpRequest {
        username: username.to_owned(),
        password: "soymilk-forever".to_owned(),
        contact: contact.to_owned(),
        facebook: None,
        campus: "CAS Department".to_owned(),
    }
}

#[tokio::test]
async fn signup_then_login_roundtrip() {
    let ctx = TestContext::new().await;

    let created = ctx.sign_up("aling_nena").await;
    let logged_in = ctx
        .auth()
        .login("aling_nena", "soymilk-forever")
        .await
        .unwrap();

    assert_eq!(logged_in.id, created.id);
    assert_eq!(logged_in.username.as_str(), "aling_nena");
    assert_eq!(logged_in.contact.as_str(), "09171234567");
}

#[tokio::test]
async fn duplicate_username_any_case_is_rejected() {
    let ctx = TestContext::new().await;
    ctx.sign_up("AlingNena").await;

    let result = ctx.auth().sign_up(request("alingnena", "09171234567")).await;
    assert!(matches!(result, Err(AuthError::UsernameTaken)));

    let result = ctx.auth().sign_up(request("ALINGNENA", "09171234567")).await;
    assert!(matches!(result, Err(AuthError::UsernameTaken)));
}

#[tokio::test]
async fn short_contact_number_is_rejected() {
    let ctx = TestContext::new().await;

    let result = ctx.auth().sign_up(request("aling_nena", "12345")).await;
    assert!(matches!(result, Err(AuthError::InvalidContact(_))));
}

#[tokio::test]
async fn eleven_digit_contact_number_is_accepted() {
    let ctx = TestContext::new().await;

    let user = ctx
        .auth()
        .sign_up(request("aling_nena", "09171234567"))
        .await
        .unwrap();
    assert_eq!(user.contact.as_str(), "09171234567");
}

#[tokio::test]
async fn weak_password_is_rejected() {
    let ctx = TestContext::new().await;

    let result = ctx
        .auth()
        .sign_up(SignUpRequest {
            password: "short".to_owned(),
            ..request("aling_nena", "09171234567")
        })
        .await;
    assert!(matches!(result, Err(AuthError::WeakPassword(_))));
}

#[tokio::test]
async fn login_distinguishes_missing_user_from_bad_password() {
    let ctx = TestContext::new().await;
    ctx.sign_up("aling_nena").await;

    let result = ctx.auth().login("nobody_here", "soymilk-forever").await;
    assert!(matches!(result, Err(AuthError::UserNotFound)));

    let result = ctx.auth().login("aling_nena", "wrong-password").await;
    assert!(matches!(result, Err(AuthError::InvalidCredentials)));
}

#[tokio::test]
async fn login_is_case_insensitive_on_username() {
    let ctx = TestContext::new().await;
    ctx.sign_up("aling_nena").await;

    let user = ctx
        .auth()
        .login("ALING_NENA", "soymilk-forever")
        .await
        .unwrap();
    assert_eq!(user.username.as_str(), "aling_nena");
}

#[tokio::test]
async fn admin_flag_derives_from_reserved_username() {
    let ctx = TestContext::new().await;

    let shopper = ctx.sign_up("aling_nena").await;
    let admin = ctx.sign_up("technoAdmin").await;

    let auth = ctx.auth();
    assert!(!auth.identity(&shopper).is_admin);
    assert!(auth.identity(&admin).is_admin);
}
