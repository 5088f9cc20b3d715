use chrono::Utc;

use crate::{
    config, spotify,
    types::{Credentials, Error, Token},
};

/// Owns the application's access token for the lifetime of the process.
///
/// The manager is constructed once in `main` and passed by reference to
/// whatever needs an authenticated request, keeping token state explicit
/// instead of global. Client credentials tokens cannot be refreshed, so an
/// expired token is replaced by requesting a fresh grant with the same
/// credentials. Nothing is persisted between runs.
#[derive(Debug)]
pub struct TokenManager {
    credentials: Credentials,
    token: Token,
}

impl TokenManager {
    /// Reads credentials from the environment and obtains the initial token.
    ///
    /// Credential lookup happens before any network traffic: a missing
    /// `CLIENT_ID` or `CLIENT_SECRET` fails with [`Error::Configuration`]
    /// without contacting Spotify. Credentials rejected by the token endpoint
    /// surface as [`Error::RemoteService`].
    pub async fn bootstrap() -> Result<Self, Error> {
        let credentials = Credentials {
            client_id: config::client_id()?,
            client_secret: config::client_secret()?,
        };

        let token = spotify::auth::request_token(&credentials).await?;
        Ok(TokenManager { credentials, token })
    }

    /// Returns a valid access token, requesting a new grant when needed.
    ///
    /// A token within 60 seconds of its expiry is considered expired and
    /// replaced before being handed out.
    pub async fn get_valid_token(&mut self) -> Result<String, Error> {
        if self.is_expired() {
            self.token = spotify::auth::request_token(&self.credentials).await?;
        }

        Ok(self.token.access_token.clone())
    }

    fn is_expired(&self) -> bool {
        let now = Utc::now().timestamp() as u64;
        now + 60 >= self.token.obtained_at + self.token.expires_in
    }
}
