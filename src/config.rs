use crate::{
    constants::{self, DEFAULT_PROFILE, SESSION_DURATION},
    error::ConsoleError,
};
use ini::Ini;
use std::{path::Path, time::Duration};
use tracing::debug;

/// Settings for one console sign-in, built once from the command line and
/// passed down through every step.
#[derive(Debug, Clone)]
pub struct ConsoleConfig {
    pub profile: String,
    pub session_duration: Duration,
    /// Replaces `https://<region>.signin.aws.amazon.com` when set.
    pub signin_base_url: Option<String>,
}

impl ConsoleConfig {
    pub fn new(profile: impl Into<String>) -> Self {
        Self {
            profile: profile.into(),
            session_duration: SESSION_DURATION,
            signin_base_url: None,
        }
    }

    pub fn with_signin_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.signin_base_url = Some(base_url.into());
        self
    }

    /// Federation endpoint for `region`
    pub fn federation_url(&self, region: &str) -> String {
        let base = self
            .signin_base_url
            .clone()
            .unwrap_or_else(|| constants::signin_base_url(region));
        format!(
            "{}{}",
            base.trim_end_matches('/'),
            constants::FEDERATION_PATH
        )
    }
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self::new(DEFAULT_PROFILE)
    }
}

/// Verify that `profile` can be read from the shared AWS config files.
///
/// Files that exist must parse. A named profile must appear in at least one of
/// them; `default` may come from the environment alone.
pub fn check_profile(profile: &str) -> Result<(), ConsoleError> {
    check_profile_in(
        profile,
        constants::get_aws_config_path().as_deref(),
        constants::get_aws_credentials_path().as_deref(),
    )
}

fn check_profile_in(
    profile: &str,
    config_path: Option<&Path>,
    credentials_path: Option<&Path>,
) -> Result<(), ConsoleError> {
    let config = load_if_present(config_path)?;
    let credentials = load_if_present(credentials_path)?;

    if profile == DEFAULT_PROFILE {
        return Ok(());
    }

    let in_config = config.as_ref().is_some_and(|ini| {
        ini.section(Some(config_section_name(profile))).is_some()
            || ini.section(Some(profile)).is_some()
    });
    let in_credentials = credentials
        .as_ref()
        .is_some_and(|ini| ini.section(Some(profile)).is_some());

    if in_config || in_credentials {
        debug!(
            "Profile '{}' found (config: {}, credentials: {})",
            profile, in_config, in_credentials
        );
        Ok(())
    } else {
        Err(ConsoleError::Config(format!(
            "profile '{profile}' not found in AWS config or credentials file"
        )))
    }
}

fn load_if_present(path: Option<&Path>) -> Result<Option<Ini>, ConsoleError> {
    let Some(path) = path.filter(|p| p.exists()) else {
        return Ok(None);
    };

    Ini::load_from_file_noescape(path)
        .map(Some)
        .map_err(|e| ConsoleError::Config(format!("failed to read {}: {e}", path.display())))
}

fn config_section_name(profile: &str) -> String {
    if profile == DEFAULT_PROFILE {
        profile.to_string()
    } else {
        format!("profile {profile}")
    }
}
