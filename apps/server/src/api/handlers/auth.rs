//! Account handlers: signup, login, password reset.
//!
//! Credentials are stored and compared verbatim. Responses carry a
//! `message` field on success and failure alike, including a rejected body.

use crate::{
    api::extractors::MessageJson,
    error::{MessageError, PersistenceContext},
    models::{ForgotPasswordRequest, LoginRequest, MessageResponse, NewUser},
    state::AppState,
    Error,
};
use axum::{extract::State, Json};

type AuthResult = std::result::Result<Json<MessageResponse>, MessageError>;

/// POST /api/signup
pub async fn signup(
    State(state): State<AppState>,
    MessageJson(user): MessageJson<NewUser>,
) -> AuthResult {
    state
        .store
        .insert_user(&user)
        .await
        .persistence("Error signing up")?;

    tracing::info!(username = ?user.username, "User signed up");
    Ok(Json(MessageResponse::new("User signed up successfully")))
}

/// POST /api/login
pub async fn login(
    State(state): State<AppState>,
    MessageJson(credentials): MessageJson<LoginRequest>,
) -> AuthResult {
    let user = state
        .store
        .find_user_by_credentials(&credentials)
        .await
        .persistence("Error logging in")?;

    match user {
        Some(user) => {
            tracing::info!(user_id = user.id, "Login succeeded");
            Ok(Json(MessageResponse::new("Login successful")))
        }
        None => {
            tracing::info!(username = ?credentials.username, "Login rejected");
            Err(Error::Unauthorized("Invalid credentials".to_string()).into())
        }
    }
}

/// POST /api/forgot
///
/// The submitted `security_answer` is matched against the stored
/// `security_question`.
pub async fn forgot_password(
    State(state): State<AppState>,
    MessageJson(request): MessageJson<ForgotPasswordRequest>,
) -> AuthResult {
    let affected = state
        .store
        .reset_password(&request)
        .await
        .persistence("Error resetting password")?;

    if affected == 0 {
        return Err(Error::Validation("Invalid details".to_string()).into());
    }

    tracing::info!(username = ?request.username, "Password reset");
    Ok(Json(MessageResponse::new("Password updated successfully")))
}
