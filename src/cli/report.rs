use std::path::PathBuf;

use tabled::Table;

use crate::{
    cli, error, info, report, success, types::TrackTableRow, utils, warning,
};

/// Number of rows shown in the textual preview before the plot.
const PREVIEW_ROWS: usize = 5;

/// Fetches an artist's top tracks and produces a popularity report.
///
/// Sorts the shaped tracks ascending by popularity (stable, so equal scores
/// keep their fetch order), prints the lowest popularity rows as a preview
/// table, and renders a popularity vs. duration scatter plot to `output`,
/// overwriting any previous file at that path.
pub async fn report(artist_id: String, output: PathBuf) {
    let raw = cli::fetch_top_tracks(&artist_id).await;

    if raw.is_empty() {
        warning!("No top tracks returned for artist {}.", artist_id);
    }

    let mut shaped = utils::shape_tracks(raw, true);
    utils::sort_by_popularity(&mut shaped);

    let table_rows: Vec<TrackTableRow> = shaped
        .iter()
        .take(PREVIEW_ROWS)
        .map(|track| TrackTableRow {
            name: track.name.clone(),
            popularity: track.popularity,
            duration: track.formatted_duration.clone().unwrap_or_default(),
        })
        .collect();

    info!("Least popular of {} top tracks:", shaped.len());
    let table = Table::new(table_rows);
    println!("{}", table);

    if let Err(e) = report::render_scatter(&shaped, &output) {
        error!("Failed to render scatter plot: {}", e);
    }

    success!("Saved scatter plot to {}.", output.display());
}
