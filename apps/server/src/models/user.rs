//! Accounts. Passwords are stored and compared as given.

use super::Param;
use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct User {
    pub id: i32,
    pub username: String,
    pub password: String,
    pub security_question: Option<String>,
    pub security_answer: Option<String>,
}

/// Body of `POST /api/signup`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct NewUser {
    pub username: Param,
    pub password: Param,
    pub security_question: Param,
}

/// Body of `POST /api/login`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct LoginRequest {
    pub username: Param,
    pub password: Param,
}

/// Body of `POST /api/forgot`.
///
/// `security_answer` is compared against the stored `security_question`
/// column; the `security_answer` column is never consulted.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ForgotPasswordRequest {
    pub username: Param,
    pub security_answer: Param,
    pub new_password: Param,
}
