use serde::{Deserialize, Serialize};

/// A user resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Identity of the user.
    pub id: u32,
    /// Email address.
    pub email: String,
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Avatar image URL.
    pub avatar: String,
}

/// Body of `POST /users`, `PUT /users/{id}` and `PATCH /users/{id}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRequest {
    /// Display name.
    pub name: String,
    /// Job title.
    pub job: String,
}

impl UserRequest {
    /// Creates a request body.
    pub fn new(name: impl Into<String>, job: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            job: job.into(),
        }
    }
}

/// `201` body of `POST /users`: the request echoed back with server fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatedUser {
    /// Echoed display name.
    pub name: String,
    /// Echoed job title.
    pub job: String,
    /// Server-assigned id, a short numeric string such as `"123"`.
    pub id: String,
    /// Creation timestamp, ISO-8601 with milliseconds in UTC.
    #[serde(rename = "createdAt")]
    pub created_at: String,
}

/// `200` body of `PUT` and `PATCH /users/{id}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdatedUser {
    /// Echoed display name.
    pub name: String,
    /// Echoed job title.
    pub job: String,
    /// Update timestamp, ISO-8601 with milliseconds in UTC.
    #[serde(rename = "updatedAt")]
    pub updated_at: String,
}
