//! Task endpoint tests (/api/tasks)

use crate::support::{assert_status, create, id_of, list, sample_event, with_test_app};
use axum::http::{Method, StatusCode};
use serde_json::json;

#[tokio::test]
async fn task_creation_performs_no_validation() -> anyhow::Result<()> {
    with_test_app(|app| {
        Box::pin(async move {
            let (status, created) = app.json(Method::POST, "/api/tasks", Some(&json!({}))).await?;
            assert_status(status, StatusCode::CREATED, "empty task");
            let id = id_of(&created)?;
            assert_eq!(
                created,
                json!({
                    "id": id,
                    "name": null,
                    "status": null,
                    "deadline": null,
                    "event_id": null,
                    "attendee_id": null
                })
            );

            // No body at all is read the same way.
            let (status, _headers, _body) = app.request(Method::POST, "/api/tasks", None).await?;
            assert_status(status, StatusCode::CREATED, "bodiless task");
            Ok(())
        })
    })
    .await
}

#[tokio::test]
async fn create_echoes_submitted_fields() -> anyhow::Result<()> {
    with_test_app(|app| {
        Box::pin(async move {
            let event_id = create(app, "/api/events", &sample_event()).await?;
            let attendee_id = create(app, "/api/attendees", &json!({ "name": "Grace" })).await?;

            let task = json!({
                "name": "Book venue",
                "status": "Pending",
                "deadline": "2024-03-01",
                "event_id": event_id,
                "attendee_id": attendee_id
            });
            let (status, created) = app.json(Method::POST, "/api/tasks", Some(&task)).await?;
            assert_status(status, StatusCode::CREATED, "create");

            let mut expected = task.clone();
            expected["id"] = json!(id_of(&created)?);
            assert_eq!(created, expected);
            Ok(())
        })
    })
    .await
}

#[tokio::test]
async fn list_returns_only_tasks_of_the_event() -> anyhow::Result<()> {
    with_test_app(|app| {
        Box::pin(async move {
            let first = create(app, "/api/events", &sample_event()).await?;
            let second = create(app, "/api/events", &sample_event()).await?;

            for (name, event_id) in [("a", first), ("b", second), ("c", first)] {
                create(
                    app,
                    "/api/tasks",
                    &json!({ "name": name, "status": "Pending", "event_id": event_id }),
                )
                .await?;
            }

            let tasks = list(app, &format!("/api/tasks/{first}")).await?;
            let names: Vec<_> = tasks.iter().map(|t| t["name"].clone()).collect();
            assert_eq!(names, vec![json!("a"), json!("c")]);
            assert!(tasks.iter().all(|t| t["event_id"] == json!(first)));

            assert!(list(app, "/api/tasks/9999").await?.is_empty());
            assert!(list(app, "/api/tasks/not-an-id").await?.is_empty());
            Ok(())
        })
    })
    .await
}

#[tokio::test]
async fn status_update_touches_only_status() -> anyhow::Result<()> {
    with_test_app(|app| {
        Box::pin(async move {
            let event_id = create(app, "/api/events", &sample_event()).await?;
            let task_id = create(
                app,
                "/api/tasks",
                &json!({ "name": "Print badges", "status": "Pending", "event_id": event_id }),
            )
            .await?;

            let (status, body) = app
                .json(
                    Method::PUT,
                    &format!("/api/tasks/{task_id}"),
                    Some(&json!({ "status": "Completed", "name": "ignored" })),
                )
                .await?;
            assert_status(status, StatusCode::OK, "update status");
            assert_eq!(body, json!({ "id": task_id, "status": "Completed" }));

            let tasks = list(app, &format!("/api/tasks/{event_id}")).await?;
            assert_eq!(tasks[0]["status"], "Completed");
            assert_eq!(tasks[0]["name"], "Print badges");
            Ok(())
        })
    })
    .await
}

#[tokio::test]
async fn status_update_accepts_any_value_and_unknown_ids() -> anyhow::Result<()> {
    with_test_app(|app| {
        Box::pin(async move {
            let (status, body) = app
                .json(Method::PUT, "/api/tasks/4242", Some(&json!({ "status": "" })))
                .await?;
            assert_status(status, StatusCode::OK, "unknown task");
            assert_eq!(body, json!({ "id": 4242, "status": "" }));

            let (status, body) = app
                .json(Method::PUT, "/api/tasks/xyz", Some(&json!({ "status": "Done" })))
                .await?;
            assert_status(status, StatusCode::OK, "non-numeric task");
            assert_eq!(body, json!({ "id": "xyz", "status": "Done" }));
            Ok(())
        })
    })
    .await
}

#[tokio::test]
async fn task_for_missing_event_is_a_store_error() -> anyhow::Result<()> {
    with_test_app(|app| {
        Box::pin(async move {
            let (status, body) = app
                .json(Method::POST, "/api/tasks", Some(&json!({ "event_id": 77 })))
                .await?;
            assert_status(status, StatusCode::INTERNAL_SERVER_ERROR, "dangling event");
            assert_eq!(body, json!({ "error": "Error adding task" }));
            Ok(())
        })
    })
    .await
}

#[tokio::test]
async fn create_coerces_loosely_typed_fields() -> anyhow::Result<()> {
    with_test_app(|app| {
        Box::pin(async move {
            let event_id = create(app, "/api/events", &sample_event()).await?;

            let task = json!({ "name": 42, "event_id": event_id.to_string() });
            let (status, created) = app.json(Method::POST, "/api/tasks", Some(&task)).await?;
            assert_status(status, StatusCode::CREATED, "numeric string id");
            assert_eq!(created["event_id"], json!(event_id.to_string()));
            assert_eq!(created["name"], json!(42));

            let tasks = list(app, &format!("/api/tasks/{event_id}")).await?;
            assert_eq!(tasks.len(), 1);
            assert_eq!(tasks[0]["name"], "42");
            assert_eq!(tasks[0]["event_id"], json!(event_id));
            Ok(())
        })
    })
    .await
}

#[tokio::test]
async fn create_with_unconvertible_id_is_a_store_error() -> anyhow::Result<()> {
    with_test_app(|app| {
        Box::pin(async move {
            for task in [
                json!({ "name": "x", "event_id": "abc" }),
                json!({ "attendee_id": [1] }),
                json!({ "deadline": true }),
            ] {
                let (status, body) = app.json(Method::POST, "/api/tasks", Some(&task)).await?;
                assert_status(status, StatusCode::INTERNAL_SERVER_ERROR, "unconvertible field");
                assert_eq!(body, json!({ "error": "Error adding task" }));
            }
            Ok(())
        })
    })
    .await
}

#[tokio::test]
async fn status_update_accepts_non_string_status() -> anyhow::Result<()> {
    with_test_app(|app| {
        Box::pin(async move {
            let event_id = create(app, "/api/events", &sample_event()).await?;
            let task_id = create(
                app,
                "/api/tasks",
                &json!({ "name": "Chairs", "event_id": event_id }),
            )
            .await?;

            let (status, body) = app
                .json(
                    Method::PUT,
                    &format!("/api/tasks/{task_id}"),
                    Some(&json!({ "status": 1 })),
                )
                .await?;
            assert_status(status, StatusCode::OK, "numeric status");
            assert_eq!(body, json!({ "id": task_id, "status": 1 }));

            let tasks = list(app, &format!("/api/tasks/{event_id}")).await?;
            assert_eq!(tasks[0]["status"], "1");
            Ok(())
        })
    })
    .await
}
