use tracing::info;
use url::Url;

use super::{CredentialResolver, FederationClient, FederationTransport};
use crate::{browser::BrowserLauncher, config::ConsoleConfig, error::ConsoleError};

/// Open the AWS Management Console for `config.profile`.
///
/// Resolves credentials, exchanges them for a signin token and hands the login
/// URL to `launcher`. The first failing step ends the run; nothing is launched
/// unless every earlier step succeeded. Returns the URL that was opened.
pub async fn open_console<T: FederationTransport>(
    config: &ConsoleConfig,
    resolver: &dyn CredentialResolver,
    federation: &FederationClient<T>,
    launcher: &dyn BrowserLauncher,
) -> Result<Url, ConsoleError> {
    let creds = resolver.resolve(&config.profile).await?;

    if !creds.has_session_token() {
        return Err(ConsoleError::Precondition {
            profile: config.profile.clone(),
        });
    }

    let signin_token = federation.get_signin_token(&creds).await?;
    let url = federation.login_url(&creds.region, &signin_token)?;

    launcher.open(url.as_str())?;

    info!("Opened AWS Management Console in browser");
    Ok(url)
}
