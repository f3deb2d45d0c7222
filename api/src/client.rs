//! # ApiClient — single point of outbound HTTP
//!
//! Every request the app makes goes through [`ApiClient`]. It normalizes
//! transport failures, non-2xx statuses, and unparseable bodies into
//! [`ApiError`] values so that no failure mode ever crosses the public
//! boundary as a panic.
//!
//! ## Generic helpers
//!
//! | Method | Description |
//! |--------|-------------|
//! | [`get`](ApiClient::get) | JSON GET, optionally authenticated. With `requires_auth` and an empty token store it returns [`ApiError::MissingToken`] **without touching the network**. |
//! | [`post`](ApiClient::post) | JSON POST. |
//! | [`post_form`](ApiClient::post_form) | form-urlencoded POST, kept for legacy endpoints that predate the JSON contract. |
//!
//! ## Typed endpoints
//!
//! | Method | Route | Auth |
//! |--------|-------|------|
//! | [`health`](ApiClient::health) | `GET /health` | no |
//! | [`login`](ApiClient::login) | `POST /auth/login` | no — stores the returned token |
//! | [`register`](ApiClient::register) | `POST /users/register` | no |
//! | [`check_email`](ApiClient::check_email) | `POST /users/check-email` | no |
//! | [`fetch_user`](ApiClient::fetch_user) | `GET /auth/users/{id}` | bearer |
//! | [`update_user`](ApiClient::update_user) | `PATCH /auth/users/{id}` | bearer |
//! | [`delete_user`](ApiClient::delete_user) | `DELETE /auth/users/{id}` | bearer |
//! | [`logout`](ApiClient::logout) | — (clears the token store) | — |

use std::time::Duration;

use reqwest::{Method, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, warn};

use store::TokenStore;

use crate::error::ApiError;
use crate::models::{
    EmailCheck, HealthStatus, LoginResponse, MessageResponse, ProfileUpdate, RegistrationData,
    UserProfile,
};

#[derive(Serialize)]
struct LoginRequest {
    username: String,
    password: String,
}

#[derive(Serialize)]
struct CheckEmailRequest {
    email: String,
}

/// HTTP client bound to a base URL and a token store.
///
/// Cheap to clone when `S` is (both bundled stores are). The token store is
/// only ever *read* here, except for [`login`](ApiClient::login) which writes
/// the freshly issued credential and [`logout`](ApiClient::logout) which
/// clears it.
#[derive(Clone, Debug)]
pub struct ApiClient<S> {
    http: reqwest::Client,
    base_url: String,
    store: S,
}

impl<S: TokenStore> ApiClient<S> {
    /// Build a client for `base_url` (trailing slashes stripped) with a
    /// 30-second request timeout.
    pub fn new(base_url: &str, store: S) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            store,
        })
    }

    /// The injected token store.
    pub fn token_store(&self) -> &S {
        &self.store
    }

    /// Build a request, attaching the bearer credential when required.
    /// Short-circuits with [`ApiError::MissingToken`] before any network I/O
    /// when authentication is required but no credential is stored.
    async fn request(
        &self,
        method: Method,
        path: &str,
        requires_auth: bool,
    ) -> Result<RequestBuilder, ApiError> {
        let url = format!("{}{}", self.base_url, path);
        debug!(%url, %method, "dispatching request");

        let mut request = self.http.request(method, &url);
        if requires_auth {
            match self.store.get_token().await? {
                Some(token) => request = request.bearer_auth(token),
                None => {
                    warn!(%url, "authenticated request with no stored credential");
                    return Err(ApiError::MissingToken);
                }
            }
        }
        Ok(request)
    }

    /// Read the body once, then branch on status: non-2xx carries the status
    /// and raw body, 2xx must parse as `T`.
    async fn read_json<T: DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, ApiError> {
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            warn!(status = status.as_u16(), "server returned an error");
            return Err(ApiError::Server {
                status: status.as_u16(),
                body,
            });
        }

        serde_json::from_str(&body).map_err(|e| ApiError::Parse {
            detail: e.to_string(),
        })
    }

    /// JSON GET against `base_url + path`.
    pub async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        requires_auth: bool,
    ) -> Result<T, ApiError> {
        let response = self
            .request(Method::GET, path, requires_auth)
            .await?
            .send()
            .await?;
        Self::read_json(response).await
    }

    /// JSON POST against `base_url + path`.
    pub async fn post<T, B>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let response = self
            .request(Method::POST, path, false)
            .await?
            .json(body)
            .send()
            .await?;
        Self::read_json(response).await
    }

    /// Form-urlencoded POST for endpoints that predate the JSON contract.
    /// `None` fields of `body` are omitted; empty strings are transmitted.
    pub async fn post_form<T, B>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let response = self
            .request(Method::POST, path, false)
            .await?
            .form(body)
            .send()
            .await?;
        Self::read_json(response).await
    }

    /// `GET /health` — server reachability probe.
    pub async fn health(&self) -> Result<HealthStatus, ApiError> {
        self.get("/health", false).await
    }

    /// Exchange credentials for a bearer token and persist it.
    ///
    /// The username (an email address on the login screen) is trimmed and
    /// lowercased, the password trimmed, before transmission.
    pub async fn login(&self, username: &str, password: &str) -> Result<LoginResponse, ApiError> {
        let request = LoginRequest {
            username: username.trim().to_lowercase(),
            password: password.trim().to_string(),
        };
        let response: LoginResponse = self.post("/auth/login", &request).await?;
        self.store.save_token(&response.access_token).await?;
        debug!("login succeeded, credential stored");
        Ok(response)
    }

    /// Create an account. Absent optional name components are transmitted as
    /// empty strings; the password is trimmed.
    pub async fn register(&self, data: RegistrationData) -> Result<MessageResponse, ApiError> {
        self.post("/users/register", &data.normalized()).await
    }

    /// Ask whether an account already exists for `email`.
    pub async fn check_email(&self, email: &str) -> Result<EmailCheck, ApiError> {
        let request = CheckEmailRequest {
            email: email.to_string(),
        };
        self.post("/users/check-email", &request).await
    }

    /// Fetch the profile for `user_id`. Requires a stored credential.
    pub async fn fetch_user(&self, user_id: &str) -> Result<UserProfile, ApiError> {
        self.get(&format!("/auth/users/{user_id}"), true).await
    }

    /// Apply a partial profile edit and return the updated profile.
    pub async fn update_user(
        &self,
        user_id: &str,
        update: &ProfileUpdate,
    ) -> Result<UserProfile, ApiError> {
        let response = self
            .request(Method::PATCH, &format!("/auth/users/{user_id}"), true)
            .await?
            .json(update)
            .send()
            .await?;
        Self::read_json(response).await
    }

    /// Delete the account. Status-only response.
    pub async fn delete_user(&self, user_id: &str) -> Result<(), ApiError> {
        let response = self
            .request(Method::DELETE, &format!("/auth/users/{user_id}"), true)
            .await?
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::Server {
                status: status.as_u16(),
                body,
            });
        }
        Ok(())
    }

    /// Discard the stored credential.
    pub async fn logout(&self) -> Result<(), ApiError> {
        self.store.clear_token().await?;
        Ok(())
    }
}
