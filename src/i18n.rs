use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Locale
///
/// The two locales the marketplace ships with. The enum doubles as the persisted
/// locale preference, so it serializes as its BCP-47 tag.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Locale {
    /// English (United States). Also the fallback for any unrecognized request.
    #[default]
    #[serde(rename = "en-US")]
    EnUs,
    /// Japanese (Japan).
    #[serde(rename = "ja-JP")]
    JaJp,
}

/// UnknownLocale
///
/// Returned by the strict parser when a tag is not one of the shipped locales.
/// Callers that want the lenient behavior use [`Locale::negotiate`] instead.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown locale tag `{0}`")]
pub struct UnknownLocale(pub String);

impl Locale {
    /// The canonical BCP-47 tag for this locale.
    pub const fn tag(self) -> &'static str {
        match self {
            Locale::EnUs => "en-US",
            Locale::JaJp => "ja-JP",
        }
    }

    /// Every locale the application ships messages and formats for.
    pub const fn available() -> [Locale; 2] {
        [Locale::EnUs, Locale::JaJp]
    }

    /// negotiate
    ///
    /// Lenient resolution of a requested tag: exact match first, then a match on
    /// the primary subtag ("ja" resolves to ja-JP), then the en-US fallback.
    /// Never fails; a bad preference degrades to the fallback locale.
    pub fn negotiate(requested: &str) -> Locale {
        if let Ok(locale) = requested.parse::<Locale>() {
            return locale;
        }
        let primary = requested
            .split(['-', '_'])
            .next()
            .unwrap_or("")
            .to_ascii_lowercase();
        Locale::available()
            .into_iter()
            .find(|locale| locale.tag().starts_with(primary.as_str()) && !primary.is_empty())
            .unwrap_or_default()
    }

    /// format_date
    ///
    /// Locale-aware calendar date formatting for listing timestamps
    /// (e.g. "Sep 4, 2026" / "2026年9月4日").
    pub fn format_date(self, at: DateTime<Utc>) -> String {
        match self {
            Locale::EnUs => at.format("%b %-d, %Y").to_string(),
            Locale::JaJp => at.format("%Y年%-m月%-d日").to_string(),
        }
    }

    /// format_datetime
    ///
    /// Date plus wall-clock time, used for auction expiry displays.
    pub fn format_datetime(self, at: DateTime<Utc>) -> String {
        match self {
            Locale::EnUs => at.format("%b %-d, %Y %H:%M").to_string(),
            Locale::JaJp => at.format("%Y年%-m月%-d日 %H:%M").to_string(),
        }
    }
}

impl FromStr for Locale {
    type Err = UnknownLocale;

    /// Strict, case-insensitive parse of a canonical tag. Accepts "_" as the
    /// subtag separator since persisted preferences from older builds used it.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.replace('_', "-");
        Locale::available()
            .into_iter()
            .find(|locale| locale.tag().eq_ignore_ascii_case(&normalized))
            .ok_or_else(|| UnknownLocale(s.to_string()))
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}
