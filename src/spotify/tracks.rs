use reqwest::Client;

use crate::{
    config,
    types::{Error, RawTrack, TopTracksResponse},
};

/// Retrieves an artist's top tracks from the Spotify Web API.
///
/// Issues exactly one GET request to the artist top tracks endpoint. The
/// artist identifier is passed through without local validation; a malformed
/// or unknown identifier surfaces as a remote 400/404 error, not a local one.
/// The endpoint returns at most 10 tracks (a Spotify-imposed limit) and their
/// order is preserved exactly as returned.
///
/// # Arguments
///
/// * `token` - Valid access token for Spotify API authentication
/// * `artist_id` - Spotify artist identifier (e.g., "788HzQOFhN3mcDo0InBqbJ")
///
/// # Returns
///
/// Returns a `Result` containing:
/// - `Ok(Vec<RawTrack>)` - The artist's top tracks, possibly empty
/// - `Err(Error::RemoteService)` - Network error, API error, or other
///   HTTP-related error
///
/// # Empty Results
///
/// A response whose `tracks` field is `null`, missing, or an empty array is
/// treated as a valid empty result, not a failure. Callers decide how to
/// present "no data".
///
/// # Market Parameter
///
/// The endpoint requires a market (country code) when called with a client
/// credentials token; it comes from [`config::spotify_market`].
///
/// # Example
///
/// ```
/// let token = "BQC..."; // Valid access token
/// let tracks = get_top_tracks(token, "788HzQOFhN3mcDo0InBqbJ").await?;
/// println!("Got {} tracks", tracks.len());
/// ```
pub async fn get_top_tracks(token: &str, artist_id: &str) -> Result<Vec<RawTrack>, Error> {
    let api_url = format!(
        "{uri}/artists/{id}/top-tracks?market={market}",
        uri = &config::spotify_apiurl(),
        id = artist_id,
        market = &config::spotify_market()
    );

    let client = Client::new();
    let response = client
        .get(&api_url)
        .bearer_auth(token)
        .send()
        .await?
        .error_for_status()?;

    let res = response.json::<TopTracksResponse>().await?;

    Ok(res.tracks.unwrap_or_default())
}
