//! Environment-sourced settings for the client handles.
//!
//! All settings share the `SUPABASE_` prefix:
//! - `SUPABASE_KEY`: service-role key, required. The service key bypasses
//!   row-level security and is only safe on backend hosts; never ship it
//!   in a browser or client build.
//! - `SUPABASE_TIMEOUT_SECS`: request timeout for the constructed HTTP
//!   client, default 15.
//! - `SUPABASE_PROXY`: optional proxy URL for the constructed HTTP client.
//!
//! A `.env` file in the working directory is honored in development.

use std::fmt;
use std::sync::LazyLock;

use figment::{Figment, providers::Env};
use serde::Deserialize;
use url::Url;

use crate::error::SupabaseError;

/// Prefix stripped from environment variables before extraction.
pub const ENV_PREFIX: &str = "SUPABASE_";

const DEFAULT_TIMEOUT_SECS: u64 = 15;

/// Project URL of the grading backend's Supabase deployment.
pub static GRADING_PROJECT_URL: LazyLock<Url> = LazyLock::new(|| {
    Url::parse("https://dfmdnpsnkxwgxjjgxhid.supabase.co")
        .expect("grading project URL literal must parse")
});

/// Project URL of the scanning backend's Supabase deployment.
pub static SCANNING_PROJECT_URL: LazyLock<Url> = LazyLock::new(|| {
    Url::parse("https://ztqvcmlhwpeaxnbkrsfj.supabase.co")
        .expect("scanning project URL literal must parse")
});

#[derive(Deserialize)]
struct RawSettings {
    key: Option<String>,
    #[serde(default = "default_timeout_secs")]
    timeout_secs: u64,
    proxy: Option<Url>,
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

/// Validated settings for constructing a [`Supabase`](crate::Supabase) handle.
#[derive(Clone)]
pub struct Settings {
    pub service_key: String,
    pub timeout_secs: u64,
    pub proxy: Option<Url>,
}

impl Settings {
    /// Read settings from the process environment, loading `.env` first
    /// when one is present.
    pub fn from_env() -> Result<Self, SupabaseError> {
        dotenvy::dotenv().ok();
        Self::extract(&Figment::new().merge(Env::prefixed(ENV_PREFIX)))
    }

    /// Extract settings from a caller-composed figment.
    pub fn extract(figment: &Figment) -> Result<Self, SupabaseError> {
        let raw: RawSettings = figment.extract()?;
        let Some(service_key) = raw.key else {
            return Err(SupabaseError::MissingServiceKey);
        };
        if service_key.trim().is_empty() {
            return Err(SupabaseError::EmptyServiceKey);
        }
        tracing::debug!(timeout_secs = raw.timeout_secs, "supabase settings loaded");
        Ok(Self {
            service_key,
            timeout_secs: raw.timeout_secs,
            proxy: raw.proxy,
        })
    }

    /// Settings with an explicit key and defaults for everything else.
    pub fn with_key(service_key: impl Into<String>) -> Result<Self, SupabaseError> {
        let service_key = service_key.into();
        if service_key.trim().is_empty() {
            return Err(SupabaseError::EmptyServiceKey);
        }
        Ok(Self {
            service_key,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            proxy: None,
        })
    }
}

impl fmt::Debug for Settings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Settings")
            .field("service_key", &"<redacted>")
            .field("timeout_secs", &self.timeout_secs)
            .field("proxy", &self.proxy)
            .finish()
    }
}
