use std::fs;
use std::io;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::auth::AuthTokens;
use crate::i18n::Locale;
use crate::models::Profile;
use crate::profile::ProfileService;

/// Session
///
/// The session context passed explicitly into the navigation guard. It holds
/// the fetched profile (if any) and the once-per-session fetch latch. There is
/// deliberately no global instance; whoever owns the navigator owns the session.
#[derive(Debug, Default)]
pub struct Session {
    profile: Option<Profile>,
    has_fetched: bool,
    fetch_count: u32,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn profile(&self) -> Option<&Profile> {
        self.profile.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.profile.is_some()
    }

    /// False for anonymous sessions as well as authenticated non-admins.
    pub fn is_admin(&self) -> bool {
        self.profile.as_ref().is_some_and(Profile::is_admin)
    }

    /// Whether a profile fetch has been attempted this session, successful or not.
    pub fn has_fetched(&self) -> bool {
        self.has_fetched
    }

    /// How many fetches this session has actually performed. Stays at one for
    /// the whole session unless `reset` intervenes.
    pub fn fetch_count(&self) -> u32 {
        self.fetch_count
    }

    /// ensure_fetched
    ///
    /// Performs the one profile fetch this session is allowed, if it has not
    /// happened yet. This is the guard's suspension point.
    ///
    /// Invariant: `has_fetched` is true after this returns, whatever the fetch
    /// did. A failed fetch leaves the profile absent and must NOT re-arm the
    /// latch, or every subsequent navigation would retry the backend.
    pub async fn ensure_fetched(&mut self, profiles: &dyn ProfileService) {
        if self.has_fetched {
            return;
        }
        self.fetch_count += 1;
        match profiles.fetch_profile().await {
            Ok(profile) => self.profile = profile,
            Err(error) => {
                tracing::warn!(%error, "profile fetch failed; continuing unauthenticated");
                self.profile = None;
            }
        }
        self.has_fetched = true;
    }

    /// set_profile
    ///
    /// Installs an identity obtained outside the fetch path (the login flow
    /// already has the profile in hand). Marks the session as fetched so the
    /// guard does not overwrite it with a stale backend read.
    pub fn set_profile(&mut self, profile: Profile) {
        self.profile = Some(profile);
        self.has_fetched = true;
    }

    /// clear
    ///
    /// Logout. The session is now known to be anonymous, not unknown, so the
    /// fetch latch stays set and the guard will not refetch.
    pub fn clear(&mut self) {
        self.profile = None;
        self.has_fetched = true;
    }

    /// reset
    ///
    /// Back to cold start: no profile, fetch not yet attempted. Used when the
    /// persisted tokens change under the session (a different account logged in).
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// PersistError
///
/// Failure writing the persisted state file. Reads never fail loudly; see
/// [`PersistedState::load`].
#[derive(Debug, Error)]
pub enum PersistError {
    #[error("could not write session state: {0}")]
    Io(#[from] io::Error),
    #[error("could not encode session state: {0}")]
    Encode(#[from] serde_json::Error),
}

/// PersistedState
///
/// The slice of client state that survives restarts: the token pair and the
/// locale preference. Stored as JSON at `AppConfig::session_file`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct PersistedState {
    pub tokens: Option<AuthTokens>,
    pub locale: Locale,
}

impl PersistedState {
    /// load
    ///
    /// Reads the persisted state from disk. A missing, unreadable, or corrupt
    /// file degrades to the default state with a warning; a broken session
    /// file must never stop the application from starting.
    pub fn load(path: &Path) -> Self {
        let raw = match fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(error) if error.kind() == io::ErrorKind::NotFound => return Self::default(),
            Err(error) => {
                tracing::warn!(%error, path = %path.display(), "unreadable session state; starting fresh");
                return Self::default();
            }
        };
        match serde_json::from_str(&raw) {
            Ok(state) => state,
            Err(error) => {
                tracing::warn!(%error, path = %path.display(), "corrupt session state; starting fresh");
                Self::default()
            }
        }
    }

    /// save
    ///
    /// Writes the state as pretty JSON, creating the parent directory on first
    /// run.
    pub fn save(&self, path: &Path) -> Result<(), PersistError> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let encoded = serde_json::to_string_pretty(self)?;
        fs::write(path, encoded)?;
        Ok(())
    }
}
