use thiserror::Error as ThisError;

#[derive(Debug, ThisError)]
pub enum SupabaseError {
    #[error("SUPABASE_KEY is not set; export the service key before startup")]
    MissingServiceKey,

    #[error("SUPABASE_KEY is set but empty")]
    EmptyServiceKey,

    #[error("Configuration error: {0}")]
    Config(#[from] figment::Error),

    #[error("URL parse error: {0}")]
    UrlParse(#[from] url::ParseError),

    #[error("Service key is not a valid header value: {0}")]
    KeyHeader(#[from] reqwest::header::InvalidHeaderValue),

    #[error("HTTP client build error: {0}")]
    Reqwest(#[from] reqwest::Error),
}

impl SupabaseError {
    /// True when the fix is an environment change rather than a code change.
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            SupabaseError::MissingServiceKey
                | SupabaseError::EmptyServiceKey
                | SupabaseError::Config(_)
        )
    }
}
