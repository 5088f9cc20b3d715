use serde::{Deserialize, Serialize};
use tabled::Tabled;
use thiserror::Error;

/// Error taxonomy for the application.
///
/// Two failure classes exist: configuration problems detected before any
/// network traffic (missing credentials), and failures of the remote service
/// (network errors, non-success HTTP statuses, malformed payloads). There is
/// no retry or recovery; errors propagate to the caller unchanged.
#[derive(Debug, Error)]
pub enum Error {
    /// A required configuration value is absent.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// The Spotify Web API call failed at the network or HTTP level.
    #[error("remote service error: {0}")]
    RemoteService(#[from] reqwest::Error),
}

/// Spotify application credentials, read once at startup.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub client_id: String,
    pub client_secret: String,
}

/// Bearer token obtained through the client credentials grant.
///
/// `obtained_at` is a local unix timestamp recorded when the grant response
/// arrived; together with `expires_in` it drives expiry checks. Tokens are
/// held in memory only and never persisted.
#[derive(Debug, Clone)]
pub struct Token {
    pub access_token: String,
    pub token_type: String,
    pub expires_in: u64,
    pub obtained_at: u64,
}

/// A track object as returned by the artist top tracks endpoint.
///
/// Only the fields this application reads are deserialized; the remote
/// payload carries many more.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawTrack {
    pub name: String,
    pub popularity: u32,
    pub duration_ms: u64,
}

/// Response envelope of `GET /artists/{id}/top-tracks`.
///
/// `tracks` is optional so that a `null` value and a missing key both decode
/// to `None`; callers treat either as an empty result rather than an error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TopTracksResponse {
    #[serde(default)]
    pub tracks: Option<Vec<RawTrack>>,
}

/// The internal projection of a remote track object.
///
/// `duration_minutes` is `duration_ms / 60000` with no rounding beyond
/// floating-point representation. `formatted_duration`, when requested,
/// is `M:SS` with floored minutes and zero-padded floored seconds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackRecord {
    pub name: String,
    pub popularity: u32,
    pub duration_minutes: f64,
    pub formatted_duration: Option<String>,
}

#[derive(Tabled)]
pub struct TrackTableRow {
    pub name: String,
    pub popularity: u32,
    pub duration: String,
}
