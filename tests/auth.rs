//! Session-token round trips and the HTTP session gate.

// Alias so actix's `test` attribute macro does not shadow `#[test]` for
// the synchronous cases below.
use actix_web::test as actix_test;
use actix_web::{web, App, HttpResponse};
use codenames_server::http::auth::{issue_token, login, verify_token, AdminSession};

const SECRET: &str = "test-secret";

#[test]
fn issued_token_verifies() {
    let token = issue_token(SECRET, 15).unwrap();
    assert!(verify_token(SECRET, &token));
}

#[test]
fn wrong_secret_is_rejected() {
    let token = issue_token(SECRET, 15).unwrap();
    assert!(!verify_token("other-secret", &token));
}

#[test]
fn garbage_is_rejected() {
    assert!(!verify_token(SECRET, "not.a.jwt"));
    assert!(!verify_token(SECRET, ""));
}

#[test]
fn tampered_token_is_rejected() {
    let token = issue_token(SECRET, 15).unwrap();
    let mut tampered = token.into_bytes();
    let last = tampered.len() - 1;
    tampered[last] = if tampered[last] == b'A' { b'B' } else { b'A' };
    assert!(!verify_token(SECRET, &String::from_utf8(tampered).unwrap()));
}

#[test]
fn expired_token_is_rejected() {
    // Expired 10 minutes ago, well past the default leeway.
    let token = issue_token(SECRET, -10).unwrap();
    assert!(!verify_token(SECRET, &token));
}

/// Full gate flow: unauthenticated and wrong-password calls bounce with
/// 401, a correct login yields a token that opens guarded routes.
#[actix_web::test]
async fn login_gates_guarded_routes() {
    std::env::set_var("ADMIN_PASSWORD", "hunter2");
    std::env::set_var("JWT_SECRET", SECRET);

    let app = actix_test::init_service(
        App::new().service(login).route(
            "/guarded",
            web::get().to(|_session: AdminSession| async move { HttpResponse::Ok().body("ok") }),
        ),
    )
    .await;

    // No token at all.
    let req = actix_test::TestRequest::get().uri("/guarded").to_request();
    let resp = actix_test::call_service(&app, req).await;
    assert_eq!(resp.status(), 401);

    // Wrong password.
    let req = actix_test::TestRequest::post()
        .uri("/auth/login")
        .set_json(serde_json::json!({ "password": "wrong" }))
        .to_request();
    let resp = actix_test::call_service(&app, req).await;
    assert_eq!(resp.status(), 401);

    // Correct password issues a working token.
    let req = actix_test::TestRequest::post()
        .uri("/auth/login")
        .set_json(serde_json::json!({ "password": "hunter2" }))
        .to_request();
    let body: serde_json::Value = actix_test::call_and_read_body_json(&app, req).await;
    let token = body["accessToken"].as_str().unwrap().to_string();
    assert!(body["expiresIn"].as_i64().unwrap() > 0);

    let req = actix_test::TestRequest::get()
        .uri("/guarded")
        .insert_header(("Authorization", format!("Bearer {token}")))
        .to_request();
    let resp = actix_test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);

    // A malformed Authorization header is still a 401.
    let req = actix_test::TestRequest::get()
        .uri("/guarded")
        .insert_header(("Authorization", token))
        .to_request();
    let resp = actix_test::call_service(&app, req).await;
    assert_eq!(resp.status(), 401);
}
