use thiserror::Error;

/// Every way a console sign-in can fail.
///
/// Each step of the pipeline produces at most one of these and the first one
/// ends the run; nothing is retried.
#[derive(Debug, Error)]
pub enum ConsoleError {
    /// Profile configuration is unreadable, malformed, or missing.
    #[error("failed to load config: {0}")]
    Config(String),

    /// The credential provider chain could not produce credentials.
    #[error("failed to retrieve credentials: {0}")]
    Credentials(String),

    /// Resolved credentials are long-lived keys without a session token.
    #[error(
        "profile '{profile}' does not use temporary credentials; select a profile with a session token"
    )]
    Precondition { profile: String },

    /// Session credentials could not be written as JSON.
    #[error("failed to encode session credentials: {0}")]
    Encode(#[source] serde_json::Error),

    /// The federation request never produced an HTTP response.
    #[error("federation request failed: {0}")]
    Request(#[source] reqwest::Error),

    /// The federation endpoint answered with a non-success status.
    #[error("failed to get signin token: [{status}] {body}")]
    Federation { status: u16, body: String },

    /// The federation endpoint answered 2xx with a body that is not a signin token.
    #[error("failed to decode federation response body: {0}")]
    Decode(String),

    /// The platform URL opener could not be started.
    #[error("failed to open browser with `{program}`: {source}")]
    Launch {
        program: String,
        #[source]
        source: std::io::Error,
    },
}

impl ConsoleError {
    pub fn is_precondition(&self) -> bool {
        matches!(self, Self::Precondition { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_federation_error_carries_status_and_body() {
        let err = ConsoleError::Federation {
            status: 403,
            body: "access denied".to_string(),
        };
        let message = err.to_string();
        assert!(message.contains("403"));
        assert!(message.contains("access denied"));
    }

    #[test]
    fn test_precondition_names_profile() {
        let err = ConsoleError::Precondition {
            profile: "iam-user".to_string(),
        };
        assert!(err.is_precondition());
        assert!(err.to_string().contains("iam-user"));
        assert!(err.to_string().contains("temporary credentials"));
    }

    #[test]
    fn test_launch_error_names_program() {
        let err = ConsoleError::Launch {
            program: "xdg-open".to_string(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        };
        assert!(err.to_string().contains("xdg-open"));
        assert!(!err.is_precondition());
    }
}
