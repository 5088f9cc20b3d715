//! # Spotify Integration Module
//!
//! This module provides the interface to the Spotify Web API used by trackpop,
//! implementing authentication and top tracks retrieval. It is the integration
//! layer between the application and Spotify's services, handling HTTP
//! communication, the OAuth token grant, and error propagation.
//!
//! ## Architecture
//!
//! ```text
//! Application Layer (CLI)
//!          ↓
//! Spotify Integration Layer
//!     ├── Authentication (OAuth 2.0 Client Credentials)
//!     └── Track Operations (Artist Top Tracks)
//!          ↓
//! HTTP Layer (reqwest, JSON)
//!          ↓
//! Spotify Web API
//! ```
//!
//! ## Authentication Strategy
//!
//! The module uses the OAuth 2.0 client credentials grant: the application
//! exchanges its client ID and secret for a short-lived bearer token. No user
//! authorization is involved since only public catalog data is read. Token
//! lifecycle (expiry tracking, re-grant) is owned by
//! [`crate::management::TokenManager`]; the functions here perform single
//! requests and nothing else.
//!
//! ## Error Handling
//!
//! There are deliberately no retries and no backoff. Network failures and
//! non-success HTTP statuses surface as [`crate::types::Error::RemoteService`]
//! and terminate the run. The one exception is an absent or empty `tracks`
//! payload, which is treated as a valid empty result rather than a failure.
//!
//! ## API Coverage
//!
//! - `POST /api/token` - client credentials token grant
//! - `GET /artists/{id}/top-tracks` - an artist's top tracks for a market
//!
//! ## Endpoint Configuration
//!
//! Base URLs come from [`crate::config`] so tests can substitute a local mock
//! server for the real API.

pub mod auth;
pub mod tracks;
