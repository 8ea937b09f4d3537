//! Wire types shared with the clinic backend.
//!
//! Field names follow the backend's JSON (camelCase); everything here is
//! owned by the backend and cached read-only on this side.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Role of a console operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Admin,
    Doctor,
    Nurse,
    Receptionist,
}

/// A backend user record, cached by the session store after login.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    pub id: String,
    pub username: String,
    pub email: String,
    pub role: UserRole,
    pub first_name: String,
    pub last_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Login form contents. Transient: the password is forwarded to the
/// backend and discarded, never persisted.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Credentials {
    pub username: String,
    pub password: String,
    pub remember_me: bool,
}

/// Successful login payload.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionPayload {
    pub user: UserRecord,
    pub token: String,
    pub refresh_token: String,
    /// When set, the session must not be committed until the two-factor
    /// challenge completes.
    #[serde(default)]
    pub two_factor_required: bool,
}

/// Token pair returned by `POST /auth/refresh`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RefreshPayload {
    pub token: String,
    pub refresh_token: String,
}

/// Standard response envelope for every backend endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(default = "Option::default")]
    pub data: Option<T>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub errors: Option<Vec<String>>,
}

/// Partial update for `PUT /users/profile`. Absent fields are left
/// untouched by the backend.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn user_record_parses_backend_json() {
        let value = json!({
            "id": "u-1",
            "username": "dr.ahmed",
            "email": "ahmed@clinic.example",
            "role": "doctor",
            "firstName": "Ahmed",
            "lastName": "Hassan",
            "isActive": true,
            "createdAt": "2024-01-10T08:00:00Z",
            "updatedAt": "2024-06-01T12:30:00Z"
        });

        let user: UserRecord = serde_json::from_value(value).unwrap();
        assert_eq!(user.role, UserRole::Doctor);
        assert_eq!(user.first_name, "Ahmed");
        assert_eq!(user.avatar, None);
    }

    #[test]
    fn session_payload_defaults_two_factor_off() {
        let value = json!({
            "user": {
                "id": "u-1",
                "username": "dr.ahmed",
                "email": "ahmed@clinic.example",
                "role": "admin",
                "firstName": "Ahmed",
                "lastName": "Hassan",
                "isActive": true,
                "createdAt": "2024-01-10T08:00:00Z",
                "updatedAt": "2024-06-01T12:30:00Z"
            },
            "token": "t1",
            "refreshToken": "r1"
        });

        let payload: SessionPayload = serde_json::from_value(value).unwrap();
        assert!(!payload.two_factor_required);
        assert_eq!(payload.token, "t1");
    }

    #[test]
    fn envelope_tolerates_missing_fields() {
        let value = json!({ "success": false, "message": "بيانات خاطئة" });
        let env: ApiResponse<SessionPayload> = serde_json::from_value(value).unwrap();
        assert!(!env.success);
        assert!(env.data.is_none());
        assert_eq!(env.message.as_deref(), Some("بيانات خاطئة"));
    }

    #[test]
    fn profile_update_skips_absent_fields() {
        let update = ProfileUpdate {
            first_name: Some("Ali".to_string()),
            ..Default::default()
        };
        let json = serde_json::to_value(&update).unwrap();
        assert_eq!(json, json!({ "firstName": "Ali" }));
    }
}
