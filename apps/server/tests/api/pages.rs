//! Manager page tests

use crate::support::{assert_status, with_test_app};
use axum::http::{header, Method, StatusCode};

#[tokio::test]
async fn manager_pages_are_served_as_html() -> anyhow::Result<()> {
    with_test_app(|app| {
        Box::pin(async move {
            for (path, title) in [
                ("/eventmanager", "Event Manager"),
                ("/attendeemanager", "Attendee Manager"),
                ("/taskmanager", "Task Manager"),
            ] {
                let (status, headers, body) = app.request(Method::GET, path, None).await?;
                assert_status(status, StatusCode::OK, path);

                let content_type = headers
                    .get(header::CONTENT_TYPE)
                    .and_then(|v| v.to_str().ok())
                    .unwrap_or_default();
                assert!(content_type.starts_with("text/html"), "{path}: {content_type}");

                let html = String::from_utf8(body.to_vec())?;
                assert!(html.contains(&format!("<title>{title}</title>")), "{path}");
            }
            Ok(())
        })
    })
    .await
}

#[tokio::test]
async fn unknown_pages_are_not_found() -> anyhow::Result<()> {
    with_test_app(|app| {
        Box::pin(async move {
            let (status, _headers, _body) = app.request(Method::GET, "/usermanager", None).await?;
            assert_status(status, StatusCode::NOT_FOUND, "unknown page");
            Ok(())
        })
    })
    .await
}
