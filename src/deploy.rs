use std::fmt;
use std::sync::OnceLock;

use url::Url;

use crate::client::Supabase;
use crate::config;

/// ComicVault backend deployments, each bound to its own Supabase project.
///
/// The deployments never share endpoint or handle state; misconfiguring
/// one leaves the other untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Deployment {
    /// Platinum grading backend.
    Grading,
    /// Scanning backend.
    Scanning,
}

impl Deployment {
    pub const ALL: [Deployment; 2] = [Deployment::Grading, Deployment::Scanning];

    /// Fixed project URL this deployment connects to.
    pub fn project_url(self) -> &'static Url {
        match self {
            Deployment::Grading => &config::GRADING_PROJECT_URL,
            Deployment::Scanning => &config::SCANNING_PROJECT_URL,
        }
    }

    /// Once-cell backing this deployment's shared handle.
    pub(crate) fn cell(self) -> &'static OnceLock<Supabase> {
        static GRADING: OnceLock<Supabase> = OnceLock::new();
        static SCANNING: OnceLock<Supabase> = OnceLock::new();
        match self {
            Deployment::Grading => &GRADING,
            Deployment::Scanning => &SCANNING,
        }
    }
}

impl fmt::Display for Deployment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Deployment::Grading => write!(f, "grading"),
            Deployment::Scanning => write!(f, "scanning"),
        }
    }
}
