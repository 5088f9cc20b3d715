//! # CLI Module
//!
//! This module provides the command-line interface layer for trackpop, a
//! Spotify API client for inspecting an artist's top tracks. It implements
//! the user-facing commands and coordinates between configuration, the
//! Spotify integration layer, and report generation.
//!
//! ## Commands
//!
//! - [`tracks`] - Fetches an artist's top tracks and prints them as a table
//!   in the order the API returned them
//! - [`report`] - Fetches top tracks, prints a preview of the lowest
//!   popularity rows, and renders a popularity vs. duration scatter plot
//!
//! ## Data Flow
//!
//! 1. **Bootstrap**: Read credentials and obtain an access token
//! 2. **Fetch**: One request to the artist top tracks endpoint
//! 3. **Shape**: Project each track to name, popularity and duration
//! 4. **Present**: Table output, and for `report` a PNG scatter plot
//!
//! ## Error Presentation
//!
//! Fatal errors (missing credentials, rejected credentials, failed requests)
//! are printed through the `error!` macro and terminate the process with exit
//! code 1. An empty result is not an error; it produces a warning and an
//! empty table or plot.
//!
//! ## Progress Feedback
//!
//! The network call is wrapped in an indicatif spinner so interactive use
//! does not appear to hang while Spotify responds.

mod report;
mod tracks;

pub use report::report;
pub use tracks::tracks;

use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

use crate::{error, management::TokenManager, spotify, types::RawTrack};

/// Bootstraps authentication and fetches an artist's top tracks.
///
/// Shared by the `tracks` and `report` commands. Shows a spinner while the
/// network calls are in flight and terminates the process through `error!`
/// on configuration or remote failures.
pub(crate) async fn fetch_top_tracks(artist_id: &str) -> Vec<RawTrack> {
    let mut token_mgr = match TokenManager::bootstrap().await {
        Ok(mgr) => mgr,
        Err(e) => error!("Failed to authenticate with Spotify: {}", e),
    };

    let pb = ProgressBar::new_spinner();
    pb.set_message("Fetching top tracks...");
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_style(
        ProgressStyle::with_template("{spinner:.blue} {msg}")
            .unwrap()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
    );

    let token = match token_mgr.get_valid_token().await {
        Ok(token) => token,
        Err(e) => {
            pb.finish_and_clear();
            error!("Failed to obtain access token: {}", e);
        }
    };

    let result = spotify::tracks::get_top_tracks(&token, artist_id).await;
    pb.finish_and_clear();

    match result {
        Ok(tracks) => tracks,
        Err(e) => error!("Failed to fetch top tracks: {}", e),
    }
}
