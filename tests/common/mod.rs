//! Shared test helpers for integration tests.

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use serde_json::Value;
use tower::ServiceExt;

use authgate_api::AppState;
use authgate_core::config::AppConfig;

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// Application state, for direct store access
    pub state: AppState,
}

impl TestApp {
    /// Create a new test application with the demo accounts seeded.
    pub async fn new() -> Self {
        let mut config = AppConfig::default();
        config.auth.jwt_secret = "integration-test-secret".to_string();

        let state = authgate_api::build_state(config).expect("Failed to build state");
        authgate_api::app::seed_demo_users(&state)
            .await
            .expect("Failed to seed demo users");

        let router = authgate_api::build_app(state.clone());

        Self { router, state }
    }

    /// Login and return the full token response body.
    pub async fn login(&self, email: &str, password: &str) -> Value {
        let response = self
            .request(
                "POST",
                "/api/v1/auth/authenticate",
                Some(serde_json::json!({
                    "email": email,
                    "password": password,
                })),
                None,
            )
            .await;

        assert_eq!(
            response.status,
            StatusCode::OK,
            "Login failed: {:?}",
            response.body
        );
        response.body
    }

    /// Login and return just the access token.
    pub async fn access_token(&self, email: &str, password: &str) -> String {
        self.login(email, password)
            .await
            .get("access_token")
            .and_then(|v| v.as_str())
            .expect("No access_token in login response")
            .to_string()
    }

    /// Make an HTTP request to the test app
    pub async fn request(
        &self,
        method: &str,
        path: &str,
        body: Option<Value>,
        token: Option<&str>,
    ) -> TestResponse {
        let body_str = body
            .map(|b| serde_json::to_string(&b).expect("Failed to serialize body"))
            .unwrap_or_default();

        let mut req = Request::builder()
            .method(method)
            .uri(path)
            .header("Content-Type", "application/json");

        if let Some(token) = token {
            req = req.header("Authorization", format!("Bearer {token}"));
        }

        let req = req
            .body(Body::from(body_str))
            .expect("Failed to build request");

        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let body_bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("Failed to read body");

        let text = String::from_utf8_lossy(&body_bytes).to_string();
        let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);

        TestResponse { status, body, text }
    }
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Parsed JSON body (Null when the body is not JSON)
    pub body: Value,
    /// Raw body text
    pub text: String,
}

impl TestResponse {
    /// Asserts the body is the standard error envelope with the given code.
    pub fn assert_error_envelope(&self, expected_code: &str) {
        assert!(self.body.get("timestamp").is_some(), "missing timestamp");
        assert_eq!(
            self.body.get("status").and_then(|v| v.as_u64()),
            Some(self.status.as_u16() as u64),
            "status field does not match HTTP status"
        );
        assert_eq!(
            self.body.get("error").and_then(|v| v.as_str()),
            Some(expected_code)
        );
        assert!(self.body.get("message").is_some(), "missing message");
    }
}
