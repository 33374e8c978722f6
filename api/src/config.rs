use std::env;

#[derive(Clone)]
pub struct Config {
    /// Directory holding the JSON collection files
    pub data_dir: String,
    /// Login credentials; when unset, any well-formed login succeeds
    pub login: Option<LoginCredentials>,
}

#[derive(Clone)]
pub struct LoginCredentials {
    pub email: String,
    /// Hex-encoded SHA-256 digest of the password
    pub password_sha256: String,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let login = match (
            env::var("LOGIN_EMAIL").ok(),
            env::var("LOGIN_PASSWORD_SHA256").ok(),
        ) {
            (Some(email), Some(password_sha256)) => Some(LoginCredentials {
                email,
                password_sha256,
            }),
            _ => None,
        };

        Self {
            data_dir: env::var("DATA_DIR").unwrap_or_else(|_| "data".to_string()),
            login,
        }
    }
}
