use chrono::{DateTime, Duration, TimeZone, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};
use serde::{Deserialize, Serialize};

/// Claims
///
/// The payload the backend signs into its access tokens. The client never
/// verifies the signature (only the server holds the secret), but it does read
/// the claims to know who is logged in locally and when the token dies.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// The numeric ID of the user, matching `Profile::id`.
    pub user_id: i64,
    pub email: String,
    /// The role string baked into the token at login time. The guard never
    /// trusts this; authorization always reads the fetched profile.
    pub role: String,
    /// Expiration Time (exp): timestamp after which the token must be refreshed.
    pub exp: usize,
    /// Issued At (iat): timestamp when the token was issued.
    pub iat: usize,
}

/// AuthTokens
///
/// The access/refresh pair returned by `POST /v1/auth/login` and rotated by
/// `POST /v1/auth/refresh`. Part of the persisted session state so a restart
/// does not log the user out.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct AuthTokens {
    pub access_token: String,
    pub refresh_token: String,
}

impl AuthTokens {
    pub fn new(access_token: impl Into<String>, refresh_token: impl Into<String>) -> Self {
        Self {
            access_token: access_token.into(),
            refresh_token: refresh_token.into(),
        }
    }

    /// claims
    ///
    /// Decodes the access token payload without verifying the signature.
    /// Returns `None` for anything malformed: a garbled persisted token is
    /// treated as an expired one, which forces a refresh or a fresh login.
    pub fn claims(&self) -> Option<Claims> {
        let mut validation = Validation::new(Algorithm::HS256);
        // Client side: no secret, no expiry enforcement. Expiry is read, not
        // enforced, so callers can distinguish "refresh me" from "log in again".
        validation.insecure_disable_signature_validation();
        validation.validate_exp = false;
        validation.validate_aud = false;
        validation.required_spec_claims.clear();

        decode::<Claims>(
            &self.access_token,
            &DecodingKey::from_secret(&[]),
            &validation,
        )
        .map(|data| data.claims)
        .ok()
    }

    /// The instant the access token expires, if the token is readable.
    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        let claims = self.claims()?;
        Utc.timestamp_opt(claims.exp as i64, 0).single()
    }

    /// needs_refresh
    ///
    /// True when the access token is within `leeway` of expiring (or already
    /// unreadable). The host schedules a call to the refresh endpoint off this.
    pub fn needs_refresh(&self, now: DateTime<Utc>, leeway: Duration) -> bool {
        match self.expires_at() {
            Some(expires_at) => now + leeway >= expires_at,
            None => true,
        }
    }
}
