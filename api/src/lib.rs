//! # API crate — session, credentials, and HTTP access for the Atlas app
//!
//! This crate is everything network-facing in the Atlas client. The frontends
//! (screens, navigation, form rendering) live elsewhere and call into this
//! crate; nothing here renders UI.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`client`] | [`ApiClient`] — the single point of outbound HTTP, with bearer auth and typed endpoint wrappers |
//! | [`claims`] | Unverified decoding of the bearer credential's payload (subject id, expiry) |
//! | [`session`] | [`Session`] — process-wide holder of the authenticated user's profile |
//! | [`models`] | Data shapes crossing the wire (`UserProfile`, registration, login response, ...) |
//! | [`error`] | [`ApiError`] — every expected failure as a value, never a panic across the boundary |
//!
//! ## Failure contract
//!
//! Every public `async fn` returns `Result`. Transport failures, non-2xx
//! statuses, unparseable bodies, a missing stored credential, and storage
//! medium failures all surface as [`ApiError`] variants with human-readable
//! `Display` messages. No exceptions escape to callers.

pub mod claims;
pub mod client;
pub mod error;
pub mod models;
pub mod session;

pub use claims::Claims;
pub use client::ApiClient;
pub use error::{ApiError, ClaimsError};
pub use models::{
    EmailCheck, HealthStatus, LoginResponse, MessageResponse, ProfileUpdate, RegistrationData,
    UserProfile,
};
pub use session::{Session, SessionState};
