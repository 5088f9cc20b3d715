use chrono::Utc;
use reqwest::Client;
use serde_json::Value;

use crate::{
    config,
    types::{Credentials, Error, Token},
};

/// Requests an access token using the OAuth 2.0 client credentials grant.
///
/// Sends a single form-encoded POST to Spotify's token endpoint with
/// `grant_type=client_credentials`, authenticating the application via HTTP
/// basic auth. This is the only authentication step the application performs;
/// no user interaction or refresh token is involved.
///
/// # Arguments
///
/// * `credentials` - Client ID and secret registered with Spotify
///
/// # Returns
///
/// Returns a `Result` containing:
/// - `Ok(Token)` - Bearer token with expiry metadata and a local timestamp
/// - `Err(Error::RemoteService)` - Network error or rejected credentials
///
/// # Token Contents
///
/// The returned token includes:
/// - Access token for API authentication
/// - Token type (always "Bearer")
/// - Expiration time in seconds (Spotify issues 3600)
/// - Timestamp when the token was obtained
///
/// # Error Conditions
///
/// Common failures include:
/// - Network connectivity issues
/// - Invalid client ID or secret (401 from the token endpoint)
/// - Spotify API service errors
///
/// # Example
///
/// ```
/// let credentials = Credentials {
///     client_id: "abc123".to_string(),
///     client_secret: "def456".to_string(),
/// };
/// let token = request_token(&credentials).await?;
/// println!("Token expires in {} seconds", token.expires_in);
/// ```
pub async fn request_token(credentials: &Credentials) -> Result<Token, Error> {
    let client = Client::new();
    let res = client
        .post(&config::spotify_apitoken_url())
        .basic_auth(&credentials.client_id, Some(&credentials.client_secret))
        .form(&[("grant_type", "client_credentials")])
        .send()
        .await?
        .error_for_status()?;

    let json: Value = res.json().await?;

    Ok(Token {
        access_token: json["access_token"]
            .as_str()
            .unwrap_or_default()
            .to_string(),
        token_type: json["token_type"].as_str().unwrap_or_default().to_string(),
        expires_in: json["expires_in"].as_i64().unwrap_or(3600) as u64,
        obtained_at: Utc::now().timestamp() as u64,
    })
}
