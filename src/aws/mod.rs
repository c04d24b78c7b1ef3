use std::fmt;

pub mod console;
pub mod credentials;
pub mod federation;

/// Temporary credentials and region resolved for a profile
#[derive(Clone)]
pub struct ResolvedCredentials {
    pub access_key_id: String,
    pub secret_access_key: String,
    /// Empty when the profile holds long-lived keys
    pub session_token: String,
    pub region: String,
}

impl ResolvedCredentials {
    pub fn has_session_token(&self) -> bool {
        !self.session_token.is_empty()
    }
}

impl fmt::Debug for ResolvedCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResolvedCredentials")
            .field("access_key_id", &self.access_key_id)
            .field("secret_access_key", &"** redacted **")
            .field("session_token", &"** redacted **")
            .field("region", &self.region)
            .finish()
    }
}

// Re-export commonly used types (functions should be accessed via module path)
pub use credentials::{CredentialResolver, ProfileCredentialResolver};
pub use federation::{FederationClient, FederationTransport, HttpTransport};
