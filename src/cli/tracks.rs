use tabled::Table;

use crate::{
    cli, types::TrackTableRow, utils, warning,
};

/// Fetches an artist's top tracks and prints them as a table.
///
/// Tracks are shown in the order the API returned them, which is Spotify's
/// own top tracks ranking. The duration column shows fractional minutes by
/// default, or `M:SS` display text when `formatted` is set.
pub async fn tracks(artist_id: String, formatted: bool) {
    let raw = cli::fetch_top_tracks(&artist_id).await;

    if raw.is_empty() {
        warning!("No top tracks returned for artist {}.", artist_id);
        return;
    }

    let shaped = utils::shape_tracks(raw, formatted);

    let table_rows: Vec<TrackTableRow> = shaped
        .into_iter()
        .map(|track| TrackTableRow {
            duration: match track.formatted_duration {
                Some(display) => display,
                None => format!("{:.2}", track.duration_minutes),
            },
            name: track.name,
            popularity: track.popularity,
        })
        .collect();

    let table = Table::new(table_rows);
    println!("{}", table);
}
