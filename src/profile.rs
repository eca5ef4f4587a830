use std::sync::Arc;
use std::sync::atomic::{AtomicU32, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use reqwest::StatusCode;
use thiserror::Error;

use crate::auth::AuthTokens;
use crate::endpoints::Endpoints;
use crate::models::Profile;

/// ProfileError
///
/// Failure modes of a profile fetch. The session layer degrades every one of
/// these to "no profile"; they exist so the degrade path can log what happened.
#[derive(Debug, Error)]
pub enum ProfileError {
    #[error("profile request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("profile endpoint returned unexpected status {0}")]
    Status(u16),
}

// 1. ProfileService Contract
/// ProfileService
///
/// Defines the abstract contract for resolving the current session's identity.
/// The trait lets the navigator run against the real HTTP client in the
/// application and against `MockProfileService` in tests without either side
/// knowing the difference.
///
/// `Ok(None)` is a meaningful success: the backend answered and said there is
/// no session. Only transport-level trouble is an `Err`.
#[async_trait]
pub trait ProfileService: Send + Sync {
    async fn fetch_profile(&self) -> Result<Option<Profile>, ProfileError>;
}

/// ProfileServiceHandle
///
/// The concrete type used to share the profile accessor across the navigator
/// and the bootstrap code.
pub type ProfileServiceHandle = Arc<dyn ProfileService>;

// 2. The Real Implementation (HTTP)
/// HttpProfileClient
///
/// Fetches `GET /v1/users/me` with the persisted bearer token. Holding no token
/// short-circuits to "no session" without a network round trip.
pub struct HttpProfileClient {
    http: reqwest::Client,
    me_url: String,
    access_token: Option<String>,
}

impl HttpProfileClient {
    pub fn new(endpoints: &Endpoints, tokens: Option<AuthTokens>) -> Self {
        Self {
            http: reqwest::Client::new(),
            me_url: endpoints.users.me.index.clone(),
            access_token: tokens.map(|t| t.access_token),
        }
    }
}

#[async_trait]
impl ProfileService for HttpProfileClient {
    async fn fetch_profile(&self) -> Result<Option<Profile>, ProfileError> {
        let Some(token) = &self.access_token else {
            return Ok(None);
        };

        let response = self
            .http
            .get(&self.me_url)
            .bearer_auth(token)
            .send()
            .await?;

        match response.status() {
            StatusCode::OK => Ok(Some(response.json::<Profile>().await?)),
            // A dead or revoked token is an anonymous session, not an error.
            StatusCode::UNAUTHORIZED => Ok(None),
            status => Err(ProfileError::Status(status.as_u16())),
        }
    }
}

// 3. The Mock Implementation (For Unit Tests)
/// MockProfileService
///
/// A scripted implementation of `ProfileService` used exclusively for testing
/// the guard and navigator without a backend. The call counter exposes how
/// many fetches actually happened, which the once-per-session tests assert on.
pub struct MockProfileService {
    profile: Option<Profile>,
    should_fail: bool,
    delay: Option<Duration>,
    calls: AtomicU32,
}

impl MockProfileService {
    /// A service that resolves to the given profile (or to "no session").
    pub fn returning(profile: Option<Profile>) -> Self {
        Self {
            profile,
            should_fail: false,
            delay: None,
            calls: AtomicU32::new(0),
        }
    }

    /// A service whose every fetch fails at the transport level.
    pub fn new_failing() -> Self {
        Self {
            profile: None,
            should_fail: true,
            delay: None,
            calls: AtomicU32::new(0),
        }
    }

    /// Adds an artificial settle time to each fetch, for racing navigations.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// How many times `fetch_profile` has been invoked.
    pub fn calls(&self) -> u32 {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ProfileService for MockProfileService {
    async fn fetch_profile(&self) -> Result<Option<Profile>, ProfileError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        if self.should_fail {
            return Err(ProfileError::Status(500));
        }
        Ok(self.profile.clone())
    }
}
