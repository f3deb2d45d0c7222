//! # Data shapes crossing the wire
//!
//! ## [`UserProfile`]
//!
//! The authenticated principal as the server reports it: identifier,
//! username, email, and the four name components used in the region the app
//! serves (first / middle / last / extension, e.g. "Jr.", "III"). The display
//! name is **derived on demand** by [`UserProfile::display_name`] rather than
//! stored, so editing any name part can never leave a stale composite behind.
//!
//! ## Requests
//!
//! - [`RegistrationData`] — signup form payload. Optional name components are
//!   `Option` here; [`RegistrationData::normalized`] produces the wire body,
//!   substituting `""` for absent optionals and trimming the password.
//! - [`ProfileUpdate`] — partial profile edit. Every field is `Option` with
//!   `skip_serializing_if`, so unset fields are omitted from the serialized
//!   body while explicitly-set empty strings are preserved.

use serde::{Deserialize, Serialize};

/// The authenticated user's profile, as returned by `/auth/users/{id}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: String,
    pub username: String,
    pub email: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub middle_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub extension_name: String,
}

impl UserProfile {
    /// Full display name assembled from the non-empty name components,
    /// falling back to the username when no name parts are set.
    pub fn display_name(&self) -> String {
        let parts: Vec<&str> = [
            self.first_name.as_str(),
            self.middle_name.as_str(),
            self.last_name.as_str(),
            self.extension_name.as_str(),
        ]
        .into_iter()
        .filter(|p| !p.is_empty())
        .collect();

        if parts.is_empty() {
            self.username.clone()
        } else {
            parts.join(" ")
        }
    }
}

/// Signup form data collected by the registration screens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistrationData {
    pub email: String,
    pub username: String,
    pub first_name: String,
    pub middle_name: Option<String>,
    pub last_name: String,
    pub extension_name: Option<String>,
    pub password: String,
}

/// Wire body for `/users/register`: optionals squashed to `""`, password
/// trimmed.
#[derive(Debug, Serialize)]
pub(crate) struct RegisterBody {
    pub email: String,
    pub username: String,
    pub first_name: String,
    pub middle_name: String,
    pub last_name: String,
    pub extension_name: String,
    pub password: String,
}

impl RegistrationData {
    pub(crate) fn normalized(self) -> RegisterBody {
        RegisterBody {
            email: self.email,
            username: self.username,
            first_name: self.first_name,
            middle_name: self.middle_name.unwrap_or_default(),
            last_name: self.last_name,
            extension_name: self.extension_name.unwrap_or_default(),
            password: self.password.trim().to_string(),
        }
    }
}

/// Partial profile edit. Unset fields are omitted from the request body.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ProfileUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub middle_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension_name: Option<String>,
}

/// Successful `/auth/login` exchange.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    pub access_token: String,
    pub token_type: String,
}

/// `/health` response.
#[derive(Debug, Clone, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    pub message: String,
}

/// Generic `{message}` acknowledgement (registration, deletes).
#[derive(Debug, Clone, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

/// `/users/check-email` response.
#[derive(Debug, Clone, Deserialize)]
pub struct EmailCheck {
    pub exists: bool,
}
