//! Scatter plot rendering for track reports.
//!
//! Renders a popularity vs. duration scatter plot to a PNG file using the
//! `plotters` bitmap backend. Chart cosmetics are fixed; the only variable
//! inputs are the track records and the output path. The output file is
//! overwritten unconditionally on each run.

use std::path::Path;

use plotters::prelude::*;

use crate::types::TrackRecord;

const PLOT_WIDTH: u32 = 1000;
const PLOT_HEIGHT: u32 = 600;

/// Renders a scatter plot of track popularity against duration.
///
/// Each record becomes one red filled circle at
/// (`popularity`, `duration_minutes`). The popularity axis is the fixed
/// 0-100 range Spotify documents; the duration axis scales to the data with
/// a little headroom, falling back to 0-6 minutes for an empty collection.
///
/// # Arguments
///
/// * `tracks` - Shaped track records to plot; may be empty
/// * `path` - Output PNG path, overwritten if it exists
///
/// # Errors
///
/// Returns an error string when the backend cannot create or write the
/// output file, or when chart construction fails.
pub fn render_scatter(tracks: &[TrackRecord], path: &Path) -> Result<(), String> {
    let root = BitMapBackend::new(path, (PLOT_WIDTH, PLOT_HEIGHT)).into_drawing_area();
    root.fill(&WHITE).map_err(|e| e.to_string())?;

    let max_minutes = tracks
        .iter()
        .map(|track| track.duration_minutes)
        .fold(0.0_f64, f64::max);
    let y_max = if max_minutes > 0.0 {
        max_minutes * 1.1
    } else {
        6.0
    };

    let mut chart = ChartBuilder::on(&root)
        .caption("Duration vs. Popularity", ("sans-serif", 28))
        .margin(20)
        .x_label_area_size(40)
        .y_label_area_size(50)
        .build_cartesian_2d(0.0_f64..100.0_f64, 0.0_f64..y_max)
        .map_err(|e| e.to_string())?;

    chart
        .configure_mesh()
        .x_desc("Popularity")
        .y_desc("Duration (minutes)")
        .draw()
        .map_err(|e| e.to_string())?;

    chart
        .draw_series(tracks.iter().map(|track| {
            Circle::new(
                (track.popularity as f64, track.duration_minutes),
                5,
                RED.filled(),
            )
        }))
        .map_err(|e| e.to_string())?;

    root.present().map_err(|e| e.to_string())?;
    Ok(())
}
