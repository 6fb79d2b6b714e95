use serde::{Deserialize, Serialize};

/// Body of `POST /login`.
///
/// A missing password is left out of the JSON entirely; the service answers
/// `400 {"error": "Missing password"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginRequest {
    /// Account email.
    pub email: String,
    /// Account password.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

impl LoginRequest {
    /// Credentials with both fields set.
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: Some(password.into()),
        }
    }

    /// Credentials without a password.
    pub fn without_password(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: None,
        }
    }
}

/// Successful `POST /login` body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginResponse {
    /// Session token.
    pub token: String,
}

/// Body of `POST /register`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterRequest {
    /// Account email.
    pub email: String,
    /// Account password.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

impl RegisterRequest {
    /// Credentials with both fields set.
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: Some(password.into()),
        }
    }

    /// Credentials without a password.
    pub fn without_password(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: None,
        }
    }
}

/// Successful `POST /register` body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterResponse {
    /// Id of the registered user.
    pub id: u32,
    /// Session token.
    pub token: String,
}
