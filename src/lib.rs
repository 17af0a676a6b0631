pub mod client;
pub mod config;
pub mod deploy;
pub mod error;

pub use client::{Supabase, grading, scanning};
pub use config::Settings;
pub use deploy::Deployment;
pub use error::SupabaseError;
