//! Configuration management for the Spotify Top Tracks CLI.
//!
//! This module handles loading and accessing configuration values from environment
//! variables and `.env` files. It provides a centralized way to manage application
//! configuration including Spotify API credentials and endpoint URLs.
//!
//! The configuration system follows a hierarchical approach:
//! 1. Environment variables (highest priority)
//! 2. `.env` file in the local data directory
//! 3. `.env` file in the working directory
//! 4. Application defaults (endpoint URLs only)

use dotenv;
use std::{env, path::PathBuf};

use crate::types::Error;

const SPOTIFY_API_URL_DEFAULT: &str = "https://api.spotify.com/v1";
const SPOTIFY_API_TOKEN_URL_DEFAULT: &str = "https://accounts.spotify.com/api/token";
const SPOTIFY_MARKET_DEFAULT: &str = "US";

/// Loads environment variables from `.env` files.
///
/// Looks for a `.env` file in the platform-specific local data directory under
/// `trackpop/.env` first, then in the current working directory. Both files
/// are optional; values already present in the process environment always win.
///
/// # Directory Structure
///
/// The function looks for the data-directory `.env` file in:
/// - Linux: `~/.local/share/trackpop/.env`
/// - macOS: `~/Library/Application Support/trackpop/.env`
/// - Windows: `%LOCALAPPDATA%/trackpop/.env`
///
/// # Returns
///
/// Returns `Ok(())` on success, or an error string if an existing `.env`
/// file cannot be read or parsed.
///
/// # Example
///
/// ```
/// use trackpop::config;
///
/// fn main() {
///     if let Err(e) = config::load_env() {
///         eprintln!("Configuration error: {}", e);
///     }
/// }
/// ```
pub fn load_env() -> Result<(), String> {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("trackpop/.env");
    if path.is_file() {
        dotenv::from_path(&path).map_err(|e| e.to_string())?;
    }

    // a .env next to the invocation is optional
    let _ = dotenv::dotenv();
    Ok(())
}

/// Returns the Spotify API client ID for authentication.
///
/// Retrieves the `CLIENT_ID` environment variable which contains the client ID
/// obtained when registering the application with Spotify's developer platform.
///
/// # Errors
///
/// Returns [`Error::Configuration`] if the `CLIENT_ID` environment variable
/// is not set.
pub fn client_id() -> Result<String, Error> {
    env::var("CLIENT_ID").map_err(|_| Error::Configuration("CLIENT_ID must be set".to_string()))
}

/// Returns the Spotify API client secret for authentication.
///
/// Retrieves the `CLIENT_SECRET` environment variable which contains the
/// client secret obtained when registering the application with Spotify's
/// developer platform.
///
/// # Errors
///
/// Returns [`Error::Configuration`] if the `CLIENT_SECRET` environment
/// variable is not set.
///
/// # Security Note
///
/// The client secret should be kept confidential and never exposed in logs
/// or version control.
pub fn client_secret() -> Result<String, Error> {
    env::var("CLIENT_SECRET")
        .map_err(|_| Error::Configuration("CLIENT_SECRET must be set".to_string()))
}

/// Returns the Spotify Web API base URL.
///
/// Retrieves the `SPOTIFY_API_URL` environment variable, falling back to the
/// production endpoint `https://api.spotify.com/v1` when unset. The override
/// exists so tests can point the client at a local server.
pub fn spotify_apiurl() -> String {
    env::var("SPOTIFY_API_URL").unwrap_or_else(|_| SPOTIFY_API_URL_DEFAULT.to_string())
}

/// Returns the Spotify OAuth token URL.
///
/// Retrieves the `SPOTIFY_API_TOKEN_URL` environment variable, falling back to
/// the production endpoint `https://accounts.spotify.com/api/token` when unset.
pub fn spotify_apitoken_url() -> String {
    env::var("SPOTIFY_API_TOKEN_URL").unwrap_or_else(|_| SPOTIFY_API_TOKEN_URL_DEFAULT.to_string())
}

/// Returns the market (country code) for top tracks queries.
///
/// The top tracks endpoint requires a market when called with a client
/// credentials token. Retrieves the `SPOTIFY_MARKET` environment variable,
/// falling back to `US` when unset.
pub fn spotify_market() -> String {
    env::var("SPOTIFY_MARKET").unwrap_or_else(|_| SPOTIFY_MARKET_DEFAULT.to_string())
}
