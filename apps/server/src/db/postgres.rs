//! PostgreSQL store backed by a shared sqlx pool

use super::{Store, StoreResult};
use crate::config::DatabaseConfig;
use crate::models::{
    Attendee, Event, EventAssignment, ForgotPasswordRequest, LoginRequest, NewEvent, NewTask,
    NewUser, Task, TaskAssignment, User,
};
use async_trait::async_trait;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use std::time::Duration;

#[derive(Clone)]
pub struct PostgresStore {
    pool: PgPool,
}

impl PostgresStore {
    /// Open the connection pool and verify the database answers.
    pub async fn connect(config: &DatabaseConfig) -> StoreResult<Self> {
        let pool = PgPoolOptions::new()
            .min_connections(config.pool_min_size)
            .max_connections(config.pool_max_size)
            .acquire_timeout(Duration::from_secs(config.pool_timeout_seconds))
            .connect(&config.url)
            .await?;

        sqlx::query("SELECT 1").execute(&pool).await?;

        tracing::info!(
            max_connections = config.pool_max_size,
            "Database connection pool created"
        );
        Ok(Self { pool })
    }

    pub async fn run_migrations(&self) -> StoreResult<()> {
        tracing::info!("Running database migrations");
        sqlx::migrate!("./migrations").run(&self.pool).await?;
        tracing::info!("Database migrations completed");
        Ok(())
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl Store for PostgresStore {
    async fn ping(&self) -> StoreResult<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    async fn list_events(&self) -> StoreResult<Vec<Event>> {
        let events = sqlx::query_as::<_, Event>(
            r#"
            SELECT id, name, description, location, date::text AS date
            FROM events
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(events)
    }

    async fn insert_event(&self, event: &NewEvent) -> StoreResult<i32> {
        let id: i32 = sqlx::query_scalar(
            r#"
            INSERT INTO events (name, description, location, date)
            VALUES ($1, $2, $3, CAST($4 AS DATE))
            RETURNING id
            "#,
        )
        .bind(&event.name)
        .bind(&event.description)
        .bind(&event.location)
        .bind(&event.date)
        .fetch_one(&self.pool)
        .await?;

        Ok(id)
    }

    async fn update_event(&self, id: i32, event: &NewEvent) -> StoreResult<u64> {
        let result = sqlx::query(
            r#"
            UPDATE events
            SET name = $1, description = $2, location = $3, date = CAST($4 AS DATE)
            WHERE id = $5
            "#,
        )
        .bind(&event.name)
        .bind(&event.description)
        .bind(&event.location)
        .bind(&event.date)
        .bind(id)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected())
    }

    async fn delete_event(&self, id: i32) -> StoreResult<u64> {
        let result = sqlx::query("DELETE FROM events WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }

    async fn list_attendees(&self) -> StoreResult<Vec<Attendee>> {
        let attendees =
            sqlx::query_as::<_, Attendee>("SELECT id, name FROM attendees ORDER BY id")
                .fetch_all(&self.pool)
                .await?;

        Ok(attendees)
    }

    async fn insert_attendee(&self, name: &str) -> StoreResult<i32> {
        let id: i32 = sqlx::query_scalar("INSERT INTO attendees (name) VALUES ($1) RETURNING id")
            .bind(name)
            .fetch_one(&self.pool)
            .await?;

        Ok(id)
    }

    async fn delete_attendee(&self, id: i32) -> StoreResult<u64> {
        let result = sqlx::query("DELETE FROM attendees WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }

    async fn insert_task(&self, task: &NewTask) -> StoreResult<i32> {
        let id: i32 = sqlx::query_scalar(
            r#"
            INSERT INTO tasks (name, status, deadline, event_id, attendee_id)
            VALUES ($1, $2, CAST($3 AS DATE), CAST($4 AS INTEGER), CAST($5 AS INTEGER))
            RETURNING id
            "#,
        )
        .bind(task.name.as_text())
        .bind(task.status.as_text())
        .bind(task.deadline.as_text())
        .bind(task.event_id.as_text())
        .bind(task.attendee_id.as_text())
        .fetch_one(&self.pool)
        .await?;

        Ok(id)
    }

    async fn list_tasks_for_event(&self, event_id: i32) -> StoreResult<Vec<Task>> {
        let tasks = sqlx::query_as::<_, Task>(
            r#"
            SELECT id, name, status, deadline::text AS deadline, event_id, attendee_id
            FROM tasks
            WHERE event_id = $1
            ORDER BY id
            "#,
        )
        .bind(event_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(tasks)
    }

    async fn update_task_status(&self, id: i32, status: Option<&str>) -> StoreResult<u64> {
        let result = sqlx::query("UPDATE tasks SET status = $1 WHERE id = $2")
            .bind(status)
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }

    async fn assign_attendee_to_event(&self, assignment: &EventAssignment) -> StoreResult<()> {
        sqlx::query(
            r#"
            INSERT INTO event_attendees (attendee_id, event_id)
            VALUES (CAST($1 AS INTEGER), CAST($2 AS INTEGER))
            "#,
        )
        .bind(assignment.attendee_id.as_text())
        .bind(assignment.event_id.as_text())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn assign_attendee_to_task(&self, assignment: &TaskAssignment) -> StoreResult<()> {
        sqlx::query(
            r#"
            INSERT INTO attendee_tasks (attendee_id, task_id)
            VALUES (CAST($1 AS INTEGER), CAST($2 AS INTEGER))
            "#,
        )
        .bind(assignment.attendee_id.as_text())
        .bind(assignment.task_id.as_text())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn insert_user(&self, user: &NewUser) -> StoreResult<()> {
        sqlx::query(
            "INSERT INTO users (username, password, security_question) VALUES ($1, $2, $3)",
        )
        .bind(user.username.as_text())
        .bind(user.password.as_text())
        .bind(user.security_question.as_text())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn find_user_by_credentials(
        &self,
        credentials: &LoginRequest,
    ) -> StoreResult<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, username, password, security_question, security_answer
            FROM users
            WHERE username = $1 AND password = $2
            "#,
        )
        .bind(credentials.username.as_text())
        .bind(credentials.password.as_text())
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    async fn reset_password(&self, request: &ForgotPasswordRequest) -> StoreResult<u64> {
        let result = sqlx::query(
            "UPDATE users SET password = $1 WHERE username = $2 AND security_question = $3",
        )
        .bind(request.new_password.as_text())
        .bind(request.username.as_text())
        .bind(request.security_answer.as_text())
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected())
    }
}
