//! Account endpoint tests (/api/signup, /api/login, /api/forgot)

use crate::support::{assert_message, assert_status, sample_user, with_test_app};
use axum::http::{Method, StatusCode};
use serde_json::json;

#[tokio::test]
async fn signup_then_login() -> anyhow::Result<()> {
    with_test_app(|app| {
        Box::pin(async move {
            let (status, body) = app.json(Method::POST, "/api/signup", Some(&sample_user())).await?;
            assert_status(status, StatusCode::OK, "signup");
            assert_message(&body, "User signed up successfully");

            let (status, body) = app
                .json(
                    Method::POST,
                    "/api/login",
                    Some(&json!({ "username": "ada", "password": "lovelace" })),
                )
                .await?;
            assert_status(status, StatusCode::OK, "login");
            assert_message(&body, "Login successful");
            Ok(())
        })
    })
    .await
}

#[tokio::test]
async fn login_with_wrong_password_is_unauthorized() -> anyhow::Result<()> {
    with_test_app(|app| {
        Box::pin(async move {
            app.json(Method::POST, "/api/signup", Some(&sample_user())).await?;

            for credentials in [
                json!({ "username": "ada", "password": "babbage" }),
                json!({ "username": "charles", "password": "lovelace" }),
                json!({}),
            ] {
                let (status, body) = app
                    .json(Method::POST, "/api/login", Some(&credentials))
                    .await?;
                assert_status(status, StatusCode::UNAUTHORIZED, "bad credentials");
                assert_message(&body, "Invalid credentials");
            }
            Ok(())
        })
    })
    .await
}

#[tokio::test]
async fn duplicate_or_incomplete_signup_fails() -> anyhow::Result<()> {
    with_test_app(|app| {
        Box::pin(async move {
            app.json(Method::POST, "/api/signup", Some(&sample_user())).await?;

            let (status, body) = app.json(Method::POST, "/api/signup", Some(&sample_user())).await?;
            assert_status(status, StatusCode::INTERNAL_SERVER_ERROR, "duplicate username");
            assert_message(&body, "Error signing up");

            let (status, body) = app
                .json(Method::POST, "/api/signup", Some(&json!({ "username": "grace" })))
                .await?;
            assert_status(status, StatusCode::INTERNAL_SERVER_ERROR, "missing password");
            assert_message(&body, "Error signing up");
            Ok(())
        })
    })
    .await
}

#[tokio::test]
async fn forgot_password_resets_on_matching_answer() -> anyhow::Result<()> {
    with_test_app(|app| {
        Box::pin(async move {
            app.json(Method::POST, "/api/signup", Some(&sample_user())).await?;

            let (status, body) = app
                .json(
                    Method::POST,
                    "/api/forgot",
                    Some(&json!({
                        "username": "ada",
                        "security_answer": "analytical",
                        "new_password": "engine"
                    })),
                )
                .await?;
            assert_status(status, StatusCode::OK, "reset");
            assert_message(&body, "Password updated successfully");

            let (status, _) = app
                .json(
                    Method::POST,
                    "/api/login",
                    Some(&json!({ "username": "ada", "password": "lovelace" })),
                )
                .await?;
            assert_status(status, StatusCode::UNAUTHORIZED, "old password");

            let (status, _) = app
                .json(
                    Method::POST,
                    "/api/login",
                    Some(&json!({ "username": "ada", "password": "engine" })),
                )
                .await?;
            assert_status(status, StatusCode::OK, "new password");
            Ok(())
        })
    })
    .await
}

#[tokio::test]
async fn forgot_password_with_wrong_answer_is_rejected() -> anyhow::Result<()> {
    with_test_app(|app| {
        Box::pin(async move {
            app.json(Method::POST, "/api/signup", Some(&sample_user())).await?;

            let (status, body) = app
                .json(
                    Method::POST,
                    "/api/forgot",
                    Some(&json!({
                        "username": "ada",
                        "security_answer": "difference",
                        "new_password": "engine"
                    })),
                )
                .await?;
            assert_status(status, StatusCode::BAD_REQUEST, "wrong answer");
            assert_message(&body, "Invalid details");

            let (status, _) = app
                .json(
                    Method::POST,
                    "/api/login",
                    Some(&json!({ "username": "ada", "password": "lovelace" })),
                )
                .await?;
            assert_status(status, StatusCode::OK, "password unchanged");
            Ok(())
        })
    })
    .await
}

#[tokio::test]
async fn numeric_credentials_are_stored_as_text() -> anyhow::Result<()> {
    with_test_app(|app| {
        Box::pin(async move {
            let (status, body) = app
                .json(
                    Method::POST,
                    "/api/signup",
                    Some(&json!({ "username": "linus", "password": 1234, "security_question": 7 })),
                )
                .await?;
            assert_status(status, StatusCode::OK, "numeric password");
            assert_message(&body, "User signed up successfully");

            for password in [json!(1234), json!("1234")] {
                let (status, _) = app
                    .json(
                        Method::POST,
                        "/api/login",
                        Some(&json!({ "username": "linus", "password": password })),
                    )
                    .await?;
                assert_status(status, StatusCode::OK, "login");
            }

            let (status, body) = app
                .json(
                    Method::POST,
                    "/api/forgot",
                    Some(&json!({ "username": "linus", "security_answer": "7", "new_password": 99 })),
                )
                .await?;
            assert_status(status, StatusCode::OK, "numeric reset");
            assert_message(&body, "Password updated successfully");

            let (status, _) = app
                .json(
                    Method::POST,
                    "/api/login",
                    Some(&json!({ "username": "linus", "password": "99" })),
                )
                .await?;
            assert_status(status, StatusCode::OK, "login after reset");
            Ok(())
        })
    })
    .await
}

#[tokio::test]
async fn malformed_bodies_are_reported_under_message() -> anyhow::Result<()> {
    with_test_app(|app| {
        Box::pin(async move {
            for path in ["/api/signup", "/api/login", "/api/forgot"] {
                let (status, _headers, body) = app
                    .request(
                        Method::POST,
                        path,
                        Some(axum::body::Bytes::from_static(b"{\"username\": ")),
                    )
                    .await?;
                assert_status(status, StatusCode::BAD_REQUEST, path);

                let body: serde_json::Value = serde_json::from_slice(&body)?;
                let message = body["message"].as_str().unwrap_or_default();
                assert!(message.starts_with("Invalid JSON in request body"), "{path}: {body}");
                assert!(body.get("error").is_none(), "{path}: {body}");
            }
            Ok(())
        })
    })
    .await
}
