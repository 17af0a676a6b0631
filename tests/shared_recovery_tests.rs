use comicvault_supabase::{Deployment, Supabase, SupabaseError};
use figment::Jail;

#[test]
fn failed_shared_access_is_not_cached_and_recovers() {
    Jail::expect_with(|jail| {
        jail.set_env("SUPABASE_KEY", "");
        let err = Supabase::shared(Deployment::Scanning).unwrap_err();
        assert!(matches!(err, SupabaseError::EmptyServiceKey));
        assert!(err.is_configuration());

        // The cell stays empty, so the same failure is reported again.
        let err = Supabase::shared(Deployment::Scanning).unwrap_err();
        assert!(matches!(err, SupabaseError::EmptyServiceKey));

        jail.set_env("SUPABASE_KEY", "recovered-key");
        let handle = Supabase::shared(Deployment::Scanning)
            .expect("access after fixing the environment failed");
        assert_eq!(handle.project_url(), Deployment::Scanning.project_url());
        assert_eq!(handle.service_key(), "recovered-key");

        let again = Supabase::shared(Deployment::Scanning).expect("repeated access failed");
        assert!(std::ptr::eq(handle, again));
        Ok(())
    });
}
