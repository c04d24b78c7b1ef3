use std::{env, path::PathBuf, time::Duration};

use dirs;

/// Profile used when none is given on the command line
pub const DEFAULT_PROFILE: &str = "default";

/// Region used for the federation endpoint when the provider chain has none
pub const DEFAULT_AWS_REGION: &str = "us-east-1";

/// Lifetime requested for the console session (12 hours)
pub const SESSION_DURATION: Duration = Duration::from_secs(12 * 60 * 60);

/// Console page the signin token lands on
pub const CONSOLE_DESTINATION: &str = "https://console.aws.amazon.com/";

/// Issuer reported to the federation endpoint on login
pub const CONSOLE_ISSUER: &str = "https://felt.com";

/// Path of the federation API below the signin host
pub const FEDERATION_PATH: &str = "/federation";

/// AWS configuration directory name
pub const AWS_CONFIG_DIR_NAME: &str = ".aws";

/// AWS configuration file name
pub const AWS_CONFIG_FILE_NAME: &str = "config";

/// AWS shared credentials file name
pub const AWS_CREDENTIALS_FILE_NAME: &str = "credentials";

/// Base URL of the regional signin host, e.g. `https://us-east-1.signin.aws.amazon.com`
pub fn signin_base_url(region: &str) -> String {
    format!("https://{region}.signin.aws.amazon.com")
}

/// Get the AWS config file path
/// Respects AWS_CONFIG_FILE environment variable if set
pub fn get_aws_config_path() -> Option<PathBuf> {
    if let Ok(path) = env::var("AWS_CONFIG_FILE") {
        return Some(PathBuf::from(path));
    }

    dirs::home_dir().map(|home| home.join(AWS_CONFIG_DIR_NAME).join(AWS_CONFIG_FILE_NAME))
}

/// Get the AWS credentials file path
/// Respects AWS_SHARED_CREDENTIALS_FILE environment variable if set
pub fn get_aws_credentials_path() -> Option<PathBuf> {
    if let Ok(path) = env::var("AWS_SHARED_CREDENTIALS_FILE") {
        return Some(PathBuf::from(path));
    }

    dirs::home_dir().map(|home| {
        home.join(AWS_CONFIG_DIR_NAME)
            .join(AWS_CREDENTIALS_FILE_NAME)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn test_session_duration_is_twelve_hours() {
        assert_eq!(SESSION_DURATION.as_secs(), 43200);
    }

    #[test]
    fn test_signin_base_url() {
        assert_eq!(
            signin_base_url("eu-west-1"),
            "https://eu-west-1.signin.aws.amazon.com"
        );
    }

    #[test]
    #[serial]
    fn test_get_aws_config_path_with_env() {
        let original = env::var("AWS_CONFIG_FILE").ok();

        unsafe {
            env::set_var("AWS_CONFIG_FILE", "/custom/aws/config");
        }
        let path = get_aws_config_path();
        assert_eq!(path, Some(PathBuf::from("/custom/aws/config")));

        unsafe {
            match original {
                Some(val) => env::set_var("AWS_CONFIG_FILE", val),
                None => env::remove_var("AWS_CONFIG_FILE"),
            }
        }
    }

    #[test]
    #[serial]
    fn test_get_aws_credentials_path_default() {
        let original = env::var("AWS_SHARED_CREDENTIALS_FILE").ok();

        unsafe {
            env::remove_var("AWS_SHARED_CREDENTIALS_FILE");
        }
        let path = get_aws_credentials_path();

        if let Some(p) = path {
            let path_str = p.to_string_lossy();
            assert!(path_str.contains(AWS_CONFIG_DIR_NAME));
            assert!(path_str.contains(AWS_CREDENTIALS_FILE_NAME));
        }

        unsafe {
            if let Some(val) = original {
                env::set_var("AWS_SHARED_CREDENTIALS_FILE", val);
            }
        }
    }
}
