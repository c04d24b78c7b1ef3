use async_trait::async_trait;
use aws_config::BehaviorVersion;
use aws_credential_types::provider::ProvideCredentials;
use std::time::SystemTime;
use tracing::{debug, info};

use super::ResolvedCredentials;
use crate::{config, constants::DEFAULT_AWS_REGION, error::ConsoleError};

/// Source of credentials for a named profile
#[async_trait]
pub trait CredentialResolver: Send + Sync {
    async fn resolve(&self, profile: &str) -> Result<ResolvedCredentials, ConsoleError>;
}

/// Resolves credentials through the AWS SDK default provider chain
#[derive(Debug, Clone, Default)]
pub struct ProfileCredentialResolver;

impl ProfileCredentialResolver {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl CredentialResolver for ProfileCredentialResolver {
    async fn resolve(&self, profile: &str) -> Result<ResolvedCredentials, ConsoleError> {
        info!("Resolving credentials for profile: {}", profile);

        config::check_profile(profile)?;

        // Priority: ENV vars -> Config file -> container/instance metadata
        let sdk_config = aws_config::defaults(BehaviorVersion::latest())
            .profile_name(profile)
            .load()
            .await;

        let region = match sdk_config.region() {
            Some(region) => region.as_ref().to_string(),
            None => {
                info!(
                    "No region configured, using default {} for federation",
                    DEFAULT_AWS_REGION
                );
                DEFAULT_AWS_REGION.to_string()
            }
        };

        let provider = sdk_config.credentials_provider().ok_or_else(|| {
            ConsoleError::Credentials(format!("no credentials provider for profile '{profile}'"))
        })?;

        let creds = provider
            .provide_credentials()
            .await
            .map_err(|e| ConsoleError::Credentials(e.to_string()))?;

        if let Some(expiry) = creds.expiry() {
            let remaining = expiry
                .duration_since(SystemTime::now())
                .map(|d| d.as_secs())
                .unwrap_or(0);
            debug!("Credentials expire in {} seconds", remaining);
        }
        debug!("Using region: {}", region);

        Ok(ResolvedCredentials {
            access_key_id: creds.access_key_id().to_string(),
            secret_access_key: creds.secret_access_key().to_string(),
            session_token: creds.session_token().unwrap_or_default().to_string(),
            region,
        })
    }
}
