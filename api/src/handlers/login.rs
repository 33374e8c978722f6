//! Login handlers
//!
//! A stub login flow: validates the credential shape, compares against
//! configured credentials when present, and returns a session token that
//! nothing else enforces.

use axum::{extract::State, Json};
use rand::Rng;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::error::{AppError, DomainError};
use crate::AppState;

/// Request body for login
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Response body for a successful login
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub message: String,
    /// Fresh random token per login
    pub token: String,
}

/// POST /login
///
/// Reject malformed credentials; when credentials are configured, compare
/// the email and the SHA-256 password digest against them. Without
/// configured credentials any well-formed login succeeds.
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, AppError> {
    if !request.email.contains('@') {
        return Err(DomainError::Validation("Enter a valid email".to_string()).into());
    }
    if request.password.chars().count() < 6 {
        return Err(DomainError::Validation(
            "Password must be at least 6 characters".to_string(),
        )
        .into());
    }

    if let Some(credentials) = &state.config.login {
        if request.email != credentials.email
            || hash_password(&request.password) != credentials.password_sha256
        {
            return Err(AppError::Unauthorized);
        }
    }

    Ok(Json(LoginResponse {
        message: "Login successful".to_string(),
        token: generate_session_token(),
    }))
}

/// Generate a random session token
fn generate_session_token() -> String {
    let mut rng = rand::thread_rng();
    let bytes: Vec<u8> = (0..32).map(|_| rng.gen()).collect();
    hex::encode(bytes)
}

/// Hash a password for comparison with the configured digest
pub fn hash_password(password: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(password.as_bytes());
    hex::encode(hasher.finalize())
}
