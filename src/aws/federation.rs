use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use url::Url;

use super::ResolvedCredentials;
use crate::{
    config::ConsoleConfig,
    constants::{CONSOLE_DESTINATION, CONSOLE_ISSUER},
    error::ConsoleError,
};

// AWS Federation API types
// These match the exact JSON format of the federation endpoint

/// Session credentials in the shape `getSigninToken` expects
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionCredentials {
    #[serde(rename = "sessionId")]
    pub session_id: String,
    #[serde(rename = "sessionKey")]
    pub session_key: String,
    #[serde(rename = "sessionToken")]
    pub session_token: String,
}

impl SessionCredentials {
    pub fn to_json(&self) -> Result<String, ConsoleError> {
        serde_json::to_string(self).map_err(ConsoleError::Encode)
    }
}

impl From<&ResolvedCredentials> for SessionCredentials {
    fn from(creds: &ResolvedCredentials) -> Self {
        Self {
            session_id: creds.access_key_id.clone(),
            session_key: creds.secret_access_key.clone(),
            session_token: creds.session_token.clone(),
        }
    }
}

/// Response from the federation getSigninToken API
#[derive(Debug, Deserialize)]
pub struct SigninResponse {
    #[serde(rename = "SigninToken")]
    pub signin_token: String,
}

/// Status and raw body of a federation HTTP response
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FederationReply {
    pub status: u16,
    pub body: String,
}

impl FederationReply {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// HTTP seam in front of the federation endpoint
#[async_trait]
pub trait FederationTransport: Send + Sync {
    async fn get(&self, url: &Url) -> Result<FederationReply, ConsoleError>;
}

/// `FederationTransport` over reqwest
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    pub fn new() -> Result<Self, ConsoleError> {
        let client = Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(ConsoleError::Request)?;

        Ok(Self { client })
    }
}

#[async_trait]
impl FederationTransport for HttpTransport {
    async fn get(&self, url: &Url) -> Result<FederationReply, ConsoleError> {
        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(ConsoleError::Request)?;

        let status = response.status().as_u16();
        let body = response.text().await.map_err(ConsoleError::Request)?;

        Ok(FederationReply { status, body })
    }
}

/// Exchanges session credentials for signin tokens and builds login URLs
#[derive(Debug, Clone)]
pub struct FederationClient<T> {
    transport: T,
    config: ConsoleConfig,
}

impl<T: FederationTransport> FederationClient<T> {
    pub fn new(transport: T, config: ConsoleConfig) -> Self {
        Self { transport, config }
    }

    #[cfg(test)]
    pub(crate) fn transport(&self) -> &T {
        &self.transport
    }

    /// URL of the `getSigninToken` call for `creds`
    pub fn signin_token_url(&self, creds: &ResolvedCredentials) -> Result<Url, ConsoleError> {
        let session = SessionCredentials::from(creds).to_json()?;
        let duration = self.config.session_duration.as_secs().to_string();

        let mut url = self.endpoint(&creds.region)?;
        url.query_pairs_mut()
            .append_pair("Action", "getSigninToken")
            .append_pair("Session", &session)
            .append_pair("SessionDuration", &duration);

        Ok(url)
    }

    /// Exchange `creds` for a signin token
    pub async fn get_signin_token(
        &self,
        creds: &ResolvedCredentials,
    ) -> Result<String, ConsoleError> {
        let url = self.signin_token_url(creds)?;

        info!("Requesting signin token from federation endpoint");
        debug!(
            "Federation host: {}, session duration: {} seconds",
            url.host_str().unwrap_or_default(),
            self.config.session_duration.as_secs()
        );

        let reply = self.transport.get(&url).await?;

        if !reply.is_success() {
            return Err(ConsoleError::Federation {
                status: reply.status,
                body: reply.body,
            });
        }

        parse_signin_token(&reply.body)
    }

    /// Console login URL carrying `signin_token`
    pub fn login_url(&self, region: &str, signin_token: &str) -> Result<Url, ConsoleError> {
        let mut url = self.endpoint(region)?;
        url.query_pairs_mut()
            .append_pair("Action", "login")
            .append_pair("Destination", CONSOLE_DESTINATION)
            .append_pair("Issuer", CONSOLE_ISSUER)
            .append_pair("SigninToken", signin_token);

        Ok(url)
    }

    fn endpoint(&self, region: &str) -> Result<Url, ConsoleError> {
        let endpoint = self.config.federation_url(region);
        Url::parse(&endpoint).map_err(|e| {
            ConsoleError::Config(format!("invalid federation endpoint {endpoint}: {e}"))
        })
    }
}

fn parse_signin_token(body: &str) -> Result<String, ConsoleError> {
    let response: SigninResponse =
        serde_json::from_str(body).map_err(|e| ConsoleError::Decode(e.to_string()))?;

    if response.signin_token.is_empty() {
        return Err(ConsoleError::Decode("empty SigninToken".to_string()));
    }

    Ok(response.signin_token)
}
