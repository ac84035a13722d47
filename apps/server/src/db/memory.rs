//! In-process store with the same schema rules as the PostgreSQL backend
//!
//! Tables live behind a single lock, so each operation is atomic just as a
//! single autocommitted statement is. Declared constraints are enforced:
//! NOT NULL columns, the unique username, foreign keys (cascading on join
//! tables, nulling on tasks) and date parsing. Dates are accepted in
//! ISO `YYYY-MM-DD` form only.

use super::{Store, StoreError, StoreResult};
use crate::models::{
    Attendee, Event, EventAssignment, ForgotPasswordRequest, LoginRequest, NewEvent, NewTask,
    NewUser, Param, Task, TaskAssignment, User,
};
use async_trait::async_trait;
use chrono::NaiveDate;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;

#[derive(Debug, Default)]
struct Tables {
    events: BTreeMap<i32, Event>,
    attendees: BTreeMap<i32, Attendee>,
    tasks: BTreeMap<i32, Task>,
    /// (attendee_id, event_id)
    event_attendees: Vec<(i32, i32)>,
    /// (attendee_id, task_id)
    attendee_tasks: Vec<(i32, i32)>,
    users: BTreeMap<i32, User>,
    sequences: Sequences,
}

#[derive(Debug, Default)]
struct Sequences {
    events: i32,
    attendees: i32,
    tasks: i32,
    users: i32,
}

fn next(seq: &mut i32) -> i32 {
    *seq += 1;
    *seq
}

fn parse_date(column: &str, value: &str) -> StoreResult<String> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map(|date| date.format("%Y-%m-%d").to_string())
        .map_err(|_| {
            StoreError::Constraint(format!(
                "invalid input syntax for type date in column \"{column}\": \"{value}\""
            ))
        })
}

fn int_column(column: &str, value: &Param) -> StoreResult<Option<i32>> {
    value.as_int().map_err(|raw| {
        StoreError::Constraint(format!(
            "invalid input syntax for type integer in column \"{column}\": \"{raw}\""
        ))
    })
}

fn not_null<T>(table: &str, column: &str, value: Option<T>) -> StoreResult<T> {
    value.ok_or_else(|| {
        StoreError::Constraint(format!(
            "null value in column \"{column}\" of relation \"{table}\" violates not-null constraint"
        ))
    })
}

fn foreign_key(present: bool, table: &str, column: &str, id: i32) -> StoreResult<()> {
    if present {
        Ok(())
    } else {
        Err(StoreError::Constraint(format!(
            "insert on table \"{table}\" violates foreign key constraint: {column}={id} is not present"
        )))
    }
}

/// Store used by tests and by the `memory` backend.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    tables: Arc<RwLock<Tables>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of rows in `event_attendees`
    pub async fn event_attendee_count(&self) -> usize {
        self.tables.read().await.event_attendees.len()
    }

    /// Number of rows in `attendee_tasks`
    pub async fn attendee_task_count(&self) -> usize {
        self.tables.read().await.attendee_tasks.len()
    }
}

#[async_trait]
impl Store for InMemoryStore {
    async fn ping(&self) -> StoreResult<()> {
        Ok(())
    }

    async fn list_events(&self) -> StoreResult<Vec<Event>> {
        Ok(self.tables.read().await.events.values().cloned().collect())
    }

    async fn insert_event(&self, event: &NewEvent) -> StoreResult<i32> {
        let date = parse_date("date", &event.date)?;
        let mut tables = self.tables.write().await;
        let id = next(&mut tables.sequences.events);
        let mut row = event.clone();
        row.date = date;
        tables.events.insert(id, row.with_id(id));
        Ok(id)
    }

    async fn update_event(&self, id: i32, event: &NewEvent) -> StoreResult<u64> {
        // Parameters are converted before any row is looked at.
        let date = parse_date("date", &event.date)?;
        let mut tables = self.tables.write().await;
        let Some(row) = tables.events.get_mut(&id) else {
            return Ok(0);
        };
        row.name = event.name.clone();
        row.description = event.description.clone();
        row.location = event.location.clone();
        row.date = date;
        Ok(1)
    }

    async fn delete_event(&self, id: i32) -> StoreResult<u64> {
        let mut tables = self.tables.write().await;
        if tables.events.remove(&id).is_none() {
            return Ok(0);
        }
        tables.event_attendees.retain(|(_, event_id)| *event_id != id);
        for task in tables.tasks.values_mut() {
            if task.event_id == Some(id) {
                task.event_id = None;
            }
        }
        Ok(1)
    }

    async fn list_attendees(&self) -> StoreResult<Vec<Attendee>> {
        Ok(self.tables.read().await.attendees.values().cloned().collect())
    }

    async fn insert_attendee(&self, name: &str) -> StoreResult<i32> {
        let mut tables = self.tables.write().await;
        let id = next(&mut tables.sequences.attendees);
        tables.attendees.insert(
            id,
            Attendee {
                id,
                name: name.to_string(),
            },
        );
        Ok(id)
    }

    async fn delete_attendee(&self, id: i32) -> StoreResult<u64> {
        let mut tables = self.tables.write().await;
        if tables.attendees.remove(&id).is_none() {
            return Ok(0);
        }
        tables.event_attendees.retain(|(attendee_id, _)| *attendee_id != id);
        tables.attendee_tasks.retain(|(attendee_id, _)| *attendee_id != id);
        for task in tables.tasks.values_mut() {
            if task.attendee_id == Some(id) {
                task.attendee_id = None;
            }
        }
        Ok(1)
    }

    async fn insert_task(&self, task: &NewTask) -> StoreResult<i32> {
        let deadline = task
            .deadline
            .as_text()
            .map(|d| parse_date("deadline", &d))
            .transpose()?;
        let event_id = int_column("event_id", &task.event_id)?;
        let attendee_id = int_column("attendee_id", &task.attendee_id)?;

        let mut tables = self.tables.write().await;
        if let Some(event_id) = event_id {
            foreign_key(
                tables.events.contains_key(&event_id),
                "tasks",
                "event_id",
                event_id,
            )?;
        }
        if let Some(attendee_id) = attendee_id {
            foreign_key(
                tables.attendees.contains_key(&attendee_id),
                "tasks",
                "attendee_id",
                attendee_id,
            )?;
        }

        let id = next(&mut tables.sequences.tasks);
        tables.tasks.insert(
            id,
            Task {
                id,
                name: task.name.as_text(),
                status: task.status.as_text(),
                deadline,
                event_id,
                attendee_id,
            },
        );
        Ok(id)
    }

    async fn list_tasks_for_event(&self, event_id: i32) -> StoreResult<Vec<Task>> {
        Ok(self
            .tables
            .read()
            .await
            .tasks
            .values()
            .filter(|task| task.event_id == Some(event_id))
            .cloned()
            .collect())
    }

    async fn update_task_status(&self, id: i32, status: Option<&str>) -> StoreResult<u64> {
        let mut tables = self.tables.write().await;
        match tables.tasks.get_mut(&id) {
            Some(task) => {
                task.status = status.map(str::to_string);
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn assign_attendee_to_event(&self, assignment: &EventAssignment) -> StoreResult<()> {
        let attendee_id = not_null(
            "event_attendees",
            "attendee_id",
            int_column("attendee_id", &assignment.attendee_id)?,
        )?;
        let event_id = not_null(
            "event_attendees",
            "event_id",
            int_column("event_id", &assignment.event_id)?,
        )?;

        let mut tables = self.tables.write().await;
        foreign_key(
            tables.attendees.contains_key(&attendee_id),
            "event_attendees",
            "attendee_id",
            attendee_id,
        )?;
        foreign_key(
            tables.events.contains_key(&event_id),
            "event_attendees",
            "event_id",
            event_id,
        )?;
        tables.event_attendees.push((attendee_id, event_id));
        Ok(())
    }

    async fn assign_attendee_to_task(&self, assignment: &TaskAssignment) -> StoreResult<()> {
        let attendee_id = not_null(
            "attendee_tasks",
            "attendee_id",
            int_column("attendee_id", &assignment.attendee_id)?,
        )?;
        let task_id = not_null(
            "attendee_tasks",
            "task_id",
            int_column("task_id", &assignment.task_id)?,
        )?;

        let mut tables = self.tables.write().await;
        foreign_key(
            tables.attendees.contains_key(&attendee_id),
            "attendee_tasks",
            "attendee_id",
            attendee_id,
        )?;
        foreign_key(
            tables.tasks.contains_key(&task_id),
            "attendee_tasks",
            "task_id",
            task_id,
        )?;
        tables.attendee_tasks.push((attendee_id, task_id));
        Ok(())
    }

    async fn insert_user(&self, user: &NewUser) -> StoreResult<()> {
        let username = not_null("users", "username", user.username.as_text())?;
        let password = not_null("users", "password", user.password.as_text())?;

        let mut tables = self.tables.write().await;
        if tables.users.values().any(|u| u.username == username) {
            return Err(StoreError::Constraint(format!(
                "duplicate key value violates unique constraint \"users_username_key\": {username}"
            )));
        }

        let id = next(&mut tables.sequences.users);
        tables.users.insert(
            id,
            User {
                id,
                username,
                password,
                security_question: user.security_question.as_text(),
                security_answer: None,
            },
        );
        Ok(())
    }

    async fn find_user_by_credentials(
        &self,
        credentials: &LoginRequest,
    ) -> StoreResult<Option<User>> {
        let (Some(username), Some(password)) =
            (credentials.username.as_text(), credentials.password.as_text())
        else {
            return Ok(None);
        };

        Ok(self
            .tables
            .read()
            .await
            .users
            .values()
            .find(|u| u.username == username && u.password == password)
            .cloned())
    }

    async fn reset_password(&self, request: &ForgotPasswordRequest) -> StoreResult<u64> {
        let (Some(username), Some(answer)) =
            (request.username.as_text(), request.security_answer.as_text())
        else {
            return Ok(0);
        };

        let mut tables = self.tables.write().await;
        let matching: Vec<i32> = tables
            .users
            .values()
            .filter(|u| {
                u.username == username && u.security_question.as_deref() == Some(answer.as_str())
            })
            .map(|u| u.id)
            .collect();
        if matching.is_empty() {
            return Ok(0);
        }

        let new_password = not_null("users", "password", request.new_password.as_text())?;
        for id in &matching {
            if let Some(user) = tables.users.get_mut(id) {
                user.password = new_password.clone();
            }
        }
        Ok(matching.len() as u64)
    }
}
