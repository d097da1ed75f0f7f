//! Wire DTOs for the auth REST endpoints.
//!
//! DESIGN
//! ======
//! Field names follow the backend's camelCase JSON. `UserType` is a closed
//! enum: any role other than `personal` decodes as `Student`, so a new
//! backend role still signs in and lands on the student dashboard.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Account role. Decides which dashboard variant a signed-in user sees.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserType {
    /// Personal trainer.
    Personal,
    /// Also catches unrecognized roles.
    #[serde(other)]
    Student,
}

impl UserType {
    /// Wire value, also used for form `<select>` options.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Personal => "personal",
            Self::Student => "student",
        }
    }

    /// Parse a wire/form value.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "personal" => Some(Self::Personal),
            "student" => Some(Self::Student),
            _ => None,
        }
    }
}

/// The signed-in account as returned by the auth endpoints.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub id: String,
    pub name: String,
    pub email: String,
    pub user_type: UserType,
    #[serde(default)]
    pub must_change_password_on_first_login: bool,
    /// Role-specific fields (bio, specialties, goals, ...) kept as sent.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// `POST /api/auth/login` body.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// `POST /api/auth/register` body.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub user_type: UserType,
}

/// Successful login/register response.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct AuthResponse {
    pub token: String,
    pub user: UserProfile,
}

/// Successful `GET /api/auth/me` response.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct MeResponse {
    pub user: UserProfile,
}

/// Error body on non-2xx responses. Every field is optional.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
}
