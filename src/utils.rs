use crate::types::{RawTrack, TrackRecord};

/// Converts a millisecond duration to fractional minutes.
///
/// The value is `duration_ms / 60000` with no rounding beyond what f64
/// representation imposes.
pub fn duration_minutes(duration_ms: u64) -> f64 {
    duration_ms as f64 / 60_000.0
}

/// Formats a millisecond duration as `M:SS` display text.
///
/// Minutes are floored whole minutes, seconds are the floored remainder
/// zero-padded to two digits (e.g. 125000 ms -> "2:05", 180000 ms -> "3:00").
pub fn format_duration(duration_ms: u64) -> String {
    let minutes = duration_ms / 60_000;
    let seconds = (duration_ms / 1000) % 60;
    format!("{}:{:02}", minutes, seconds)
}

/// Projects raw track objects down to the internal track records.
///
/// Order-preserving: the output has exactly one record per input track, in
/// the same order the remote service returned them. `formatted` controls
/// whether the `M:SS` display text is computed; callers that only need the
/// numeric duration skip it.
pub fn shape_tracks(raw: Vec<RawTrack>, formatted: bool) -> Vec<TrackRecord> {
    raw.into_iter()
        .map(|track| TrackRecord {
            duration_minutes: duration_minutes(track.duration_ms),
            formatted_duration: formatted.then(|| format_duration(track.duration_ms)),
            name: track.name,
            popularity: track.popularity,
        })
        .collect()
}

/// Sorts track records ascending by popularity.
///
/// Stable: records with equal popularity keep their fetch order. Used by the
/// reporting path only; the fetch path never re-sorts.
pub fn sort_by_popularity(tracks: &mut [TrackRecord]) {
    tracks.sort_by_key(|track| track.popularity);
}
