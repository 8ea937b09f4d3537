//! Backend collaborator for authentication calls.
//!
//! The flow talks to the clinic backend through the [`AuthBackend`]
//! trait; [`HttpAuthBackend`] is the production implementation over
//! reqwest. Tests substitute stub implementations.
//!
//! Every endpoint answers with the standard envelope
//! `{success, data, message, errors}`; `success: false` or a non-2xx
//! status is a backend rejection whose `message` is surfaced verbatim.

use anyhow::Result;
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::json;
use std::time::Duration;

use super::error::AuthError;
use super::models::{
    ApiResponse, Credentials, ProfileUpdate, RefreshPayload, SessionPayload, UserRecord,
};
use crate::config::AppConfig;

/// Backend endpoint paths, relative to the configured base URL.
pub mod endpoints {
    pub const LOGIN: &str = "/auth/login";
    pub const LOGOUT: &str = "/auth/logout";
    pub const REFRESH: &str = "/auth/refresh";
    pub const FORGOT_PASSWORD: &str = "/auth/forgot-password";
    pub const RESET_PASSWORD: &str = "/auth/reset-password";
    pub const USER_PROFILE: &str = "/users/profile";
}

/// The opaque clinic backend, as seen by the authentication flow.
#[async_trait]
pub trait AuthBackend: Send + Sync {
    async fn login(&self, credentials: &Credentials) -> Result<SessionPayload, AuthError>;

    /// Best-effort server-side logout. The caller clears local state
    /// regardless of the outcome.
    async fn logout(&self, access_token: Option<&str>) -> Result<(), AuthError>;

    async fn refresh(&self, refresh_token: &str) -> Result<RefreshPayload, AuthError>;

    async fn forgot_password(&self, email: &str) -> Result<(), AuthError>;

    async fn reset_password(&self, token: &str, new_password: &str) -> Result<(), AuthError>;

    async fn update_profile(
        &self,
        access_token: &str,
        update: &ProfileUpdate,
    ) -> Result<UserRecord, AuthError>;
}

/// REST client for the clinic backend.
pub struct HttpAuthBackend {
    client: reqwest::Client,
    base_url: String,
}

impl HttpAuthBackend {
    /// Build a client from the application config.
    pub fn new(config: &AppConfig) -> Result<Self> {
        Self::with_base_url(config.api_base_url.clone(), config.api_timeout())
    }

    /// Build a client against an explicit base URL (used by tests).
    pub fn with_base_url(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    fn request(
        &self,
        method: reqwest::Method,
        path: &str,
        token: Option<&str>,
    ) -> reqwest::RequestBuilder {
        let mut builder = self.client.request(method, format!("{}{path}", self.base_url));
        if let Some(token) = token {
            builder = builder.bearer_auth(token);
        }
        builder
    }

    /// Send a request and unwrap the response envelope's `data` field.
    async fn execute<T: DeserializeOwned>(
        &self,
        builder: reqwest::RequestBuilder,
    ) -> Result<T, AuthError> {
        let response = builder.send().await.map_err(|err| AuthError::Network {
            message: err.to_string(),
        })?;
        let status = response.status();

        let envelope: ApiResponse<T> = match response.json().await {
            Ok(envelope) => envelope,
            Err(err) if status.is_success() => {
                return Err(AuthError::Network {
                    message: err.to_string(),
                })
            }
            Err(_) => {
                return Err(AuthError::Backend {
                    message: format!("request failed with status {status}"),
                })
            }
        };

        if !status.is_success() || !envelope.success {
            let message = envelope
                .message
                .unwrap_or_else(|| format!("request failed with status {status}"));
            tracing::debug!(status = %status, "backend rejected request");
            return Err(AuthError::Backend { message });
        }

        envelope.data.ok_or_else(|| AuthError::Backend {
            message: "response payload missing".to_string(),
        })
    }

    /// Like [`execute`](Self::execute) but for endpoints whose `data` is
    /// empty or irrelevant; only the envelope's `success` matters.
    async fn execute_unit(&self, builder: reqwest::RequestBuilder) -> Result<(), AuthError> {
        let response = builder.send().await.map_err(|err| AuthError::Network {
            message: err.to_string(),
        })?;
        let status = response.status();

        let envelope: ApiResponse<serde_json::Value> = match response.json().await {
            Ok(envelope) => envelope,
            Err(err) if status.is_success() => {
                return Err(AuthError::Network {
                    message: err.to_string(),
                })
            }
            Err(_) => {
                return Err(AuthError::Backend {
                    message: format!("request failed with status {status}"),
                })
            }
        };

        if !status.is_success() || !envelope.success {
            let message = envelope
                .message
                .unwrap_or_else(|| format!("request failed with status {status}"));
            return Err(AuthError::Backend { message });
        }
        Ok(())
    }

    fn post_json(&self, path: &str, body: &impl Serialize) -> reqwest::RequestBuilder {
        self.request(reqwest::Method::POST, path, None).json(body)
    }
}

#[async_trait]
impl AuthBackend for HttpAuthBackend {
    async fn login(&self, credentials: &Credentials) -> Result<SessionPayload, AuthError> {
        self.execute(self.post_json(endpoints::LOGIN, credentials))
            .await
    }

    async fn logout(&self, access_token: Option<&str>) -> Result<(), AuthError> {
        self.execute_unit(self.request(reqwest::Method::POST, endpoints::LOGOUT, access_token))
            .await
    }

    async fn refresh(&self, refresh_token: &str) -> Result<RefreshPayload, AuthError> {
        let body = json!({ "refreshToken": refresh_token });
        self.execute(self.post_json(endpoints::REFRESH, &body))
            .await
    }

    async fn forgot_password(&self, email: &str) -> Result<(), AuthError> {
        let body = json!({ "email": email });
        self.execute_unit(self.post_json(endpoints::FORGOT_PASSWORD, &body))
            .await
    }

    async fn reset_password(&self, token: &str, new_password: &str) -> Result<(), AuthError> {
        let body = json!({ "token": token, "password": new_password });
        self.execute_unit(self.post_json(endpoints::RESET_PASSWORD, &body))
            .await
    }

    async fn update_profile(
        &self,
        access_token: &str,
        update: &ProfileUpdate,
    ) -> Result<UserRecord, AuthError> {
        self.execute(
            self.request(reqwest::Method::PUT, endpoints::USER_PROFILE, Some(access_token))
                .json(update),
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn credentials() -> Credentials {
        Credentials {
            username: "dr.ahmed".to_string(),
            password: "secret123".to_string(),
            remember_me: true,
        }
    }

    fn user_json() -> serde_json::Value {
        json!({
            "id": "u-1",
            "username": "dr.ahmed",
            "email": "ahmed@clinic.example",
            "role": "doctor",
            "firstName": "Ahmed",
            "lastName": "Hassan",
            "isActive": true,
            "createdAt": "2024-01-10T08:00:00Z",
            "updatedAt": "2024-06-01T12:30:00Z"
        })
    }

    async fn backend(server: &MockServer) -> HttpAuthBackend {
        HttpAuthBackend::with_base_url(server.uri(), Duration::from_secs(5)).unwrap()
    }

    #[tokio::test]
    async fn login_unwraps_session_payload() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(endpoints::LOGIN))
            .and(body_json(json!({
                "username": "dr.ahmed",
                "password": "secret123",
                "rememberMe": true
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "success": true,
                "data": { "user": user_json(), "token": "t1", "refreshToken": "r1" },
                "message": "ok"
            })))
            .mount(&server)
            .await;

        let payload = backend(&server).await.login(&credentials()).await.unwrap();
        assert_eq!(payload.token, "t1");
        assert_eq!(payload.user.username, "dr.ahmed");
        assert!(!payload.two_factor_required);
    }

    #[tokio::test]
    async fn rejection_surfaces_backend_message() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(endpoints::LOGIN))
            .respond_with(ResponseTemplate::new(401).set_body_json(json!({
                "success": false,
                "message": "بيانات خاطئة"
            })))
            .mount(&server)
            .await;

        let err = backend(&server).await.login(&credentials()).await.unwrap_err();
        assert_eq!(err.to_string(), "بيانات خاطئة");
    }

    #[tokio::test]
    async fn success_false_with_ok_status_is_a_rejection() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(endpoints::REFRESH))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "success": false,
                "message": "refresh token revoked"
            })))
            .mount(&server)
            .await;

        let err = backend(&server).await.refresh("r1").await.unwrap_err();
        assert!(matches!(err, AuthError::Backend { .. }));
        assert_eq!(err.to_string(), "refresh token revoked");
    }

    #[tokio::test]
    async fn logout_sends_bearer_token() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(endpoints::LOGOUT))
            .and(header("authorization", "Bearer t1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "success": true,
                "data": null,
                "message": "ok"
            })))
            .mount(&server)
            .await;

        backend(&server).await.logout(Some("t1")).await.unwrap();
    }

    #[tokio::test]
    async fn unit_endpoints_tolerate_missing_data() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(endpoints::FORGOT_PASSWORD))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "success": true,
                "message": "sent"
            })))
            .mount(&server)
            .await;

        backend(&server)
            .await
            .forgot_password("ahmed@clinic.example")
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn connection_failure_is_a_network_error() {
        // Port 9 (discard) is not listening.
        let backend =
            HttpAuthBackend::with_base_url("http://127.0.0.1:9", Duration::from_millis(200))
                .unwrap();
        let err = backend.login(&credentials()).await.unwrap_err();
        assert!(matches!(err, AuthError::Network { .. }));
    }

    #[tokio::test]
    async fn profile_update_uses_put_with_bearer() {
        let server = MockServer::start().await;
        Mock::given(method("PUT"))
            .and(path(endpoints::USER_PROFILE))
            .and(header("authorization", "Bearer t1"))
            .and(body_json(json!({ "firstName": "Ali" })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "success": true,
                "data": user_json(),
                "message": "ok"
            })))
            .mount(&server)
            .await;

        let update = ProfileUpdate {
            first_name: Some("Ali".to_string()),
            ..Default::default()
        };
        let user = backend(&server)
            .await
            .update_profile("t1", &update)
            .await
            .unwrap();
        assert_eq!(user.id, "u-1");
    }
}
