//! Pre-configured Supabase client handles.
//!
//! A handle owns the project endpoint, the service key, and a reqwest
//! client whose default headers already carry the key. It performs no
//! requests of its own; request composition belongs to the services
//! built on top of it.

use std::fmt;
use std::time::Duration;

use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue};
use tracing::info;
use url::Url;

use crate::config::Settings;
use crate::deploy::Deployment;
use crate::error::SupabaseError;

const USER_AGENT: &str = "comicvault-supabase/1.0";
const CONNECT_TIMEOUT: Duration = Duration::from_secs(5);

/// Header carrying the project key on every Supabase request.
const APIKEY_HEADER: &str = "apikey";

/// A long-lived client handle bound to one Supabase project.
pub struct Supabase {
    project_url: Url,
    rest_url: Url,
    auth_url: Url,
    storage_url: Url,
    service_key: String,
    http: reqwest::Client,
}

impl Supabase {
    /// Build a handle for a project URL and service key with default
    /// settings. No network traffic happens here; the first request is
    /// the caller's.
    pub fn new(project_url: Url, service_key: impl Into<String>) -> Result<Self, SupabaseError> {
        Self::with_settings(project_url, &Settings::with_key(service_key)?)
    }

    /// Build a handle honoring explicit settings.
    pub fn with_settings(project_url: Url, settings: &Settings) -> Result<Self, SupabaseError> {
        if settings.service_key.trim().is_empty() {
            return Err(SupabaseError::EmptyServiceKey);
        }

        let mut api_key = HeaderValue::from_str(&settings.service_key)?;
        api_key.set_sensitive(true);
        let mut bearer = HeaderValue::from_str(&format!("Bearer {}", settings.service_key))?;
        bearer.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(APIKEY_HEADER, api_key);
        headers.insert(AUTHORIZATION, bearer);

        let mut builder = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .connect_timeout(CONNECT_TIMEOUT)
            .timeout(Duration::from_secs(settings.timeout_secs))
            .default_headers(headers);
        if let Some(proxy) = &settings.proxy {
            builder = builder.proxy(reqwest::Proxy::all(proxy.as_str())?);
        }
        let http = builder.build()?;

        let rest_url = project_url.join("rest/v1/")?;
        let auth_url = project_url.join("auth/v1/")?;
        let storage_url = project_url.join("storage/v1/")?;

        info!(project = %project_url, "supabase client handle constructed");

        Ok(Self {
            project_url,
            rest_url,
            auth_url,
            storage_url,
            service_key: settings.service_key.clone(),
            http,
        })
    }

    /// Read settings from the environment and build a handle for one
    /// deployment. Fails fast when `SUPABASE_KEY` is missing or empty.
    pub fn from_env(deployment: Deployment) -> Result<Self, SupabaseError> {
        let settings = Settings::from_env()?;
        Self::with_settings(deployment.project_url().clone(), &settings)
    }

    /// Process-wide handle for one deployment, constructed on first
    /// access. Every later call returns the identical instance. A failed
    /// construction leaves the cell empty so a later access can retry
    /// once the environment is fixed.
    pub fn shared(deployment: Deployment) -> Result<&'static Supabase, SupabaseError> {
        let cell = deployment.cell();
        if let Some(handle) = cell.get() {
            return Ok(handle);
        }
        let built = Self::from_env(deployment)?;
        // First writer wins; a racing builder's handle is dropped unobserved.
        Ok(cell.get_or_init(|| built))
    }

    /// Project URL this handle is bound to.
    pub fn project_url(&self) -> &Url {
        &self.project_url
    }

    /// Service key this handle authenticates with.
    pub fn service_key(&self) -> &str {
        &self.service_key
    }

    /// PostgREST root (`rest/v1/`) under the project URL.
    pub fn rest_url(&self) -> &Url {
        &self.rest_url
    }

    /// GoTrue root (`auth/v1/`) under the project URL.
    pub fn auth_url(&self) -> &Url {
        &self.auth_url
    }

    /// Storage root (`storage/v1/`) under the project URL.
    pub fn storage_url(&self) -> &Url {
        &self.storage_url
    }

    /// The pre-configured HTTP client. Every request sent through it
    /// already carries the `apikey` and `Authorization` headers.
    pub fn http(&self) -> &reqwest::Client {
        &self.http
    }
}

impl fmt::Debug for Supabase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Supabase")
            .field("project_url", &self.project_url.as_str())
            .field("service_key", &"<redacted>")
            .finish()
    }
}

/// Shared handle for the grading backend's project.
pub fn grading() -> Result<&'static Supabase, SupabaseError> {
    Supabase::shared(Deployment::Grading)
}

/// Shared handle for the scanning backend's project.
pub fn scanning() -> Result<&'static Supabase, SupabaseError> {
    Supabase::shared(Deployment::Scanning)
}
