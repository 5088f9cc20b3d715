use tempfile::tempdir;
use trackpop::report::render_scatter;
use trackpop::types::TrackRecord;

const PNG_MAGIC: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

fn create_test_record(name: &str, popularity: u32, duration_minutes: f64) -> TrackRecord {
    TrackRecord {
        name: name.to_string(),
        popularity,
        duration_minutes,
        formatted_duration: None,
    }
}

#[test]
fn test_render_scatter_writes_png() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("scatter_plot.png");

    let tracks = vec![
        create_test_record("Song A", 42, 3.5),
        create_test_record("Song B", 87, 2.1),
        create_test_record("Song C", 13, 4.75),
    ];

    render_scatter(&tracks, &path).unwrap();

    let bytes = std::fs::read(&path).unwrap();
    assert!(!bytes.is_empty());
    assert_eq!(&bytes[..8], &PNG_MAGIC);
}

#[test]
fn test_render_scatter_empty_collection() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("scatter_plot.png");

    // An empty collection still produces a valid (empty) chart
    render_scatter(&[], &path).unwrap();
    assert!(path.is_file());
}

#[test]
fn test_render_scatter_overwrites_existing_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("scatter_plot.png");

    std::fs::write(&path, b"not a png").unwrap();
    render_scatter(&[create_test_record("Song A", 42, 3.5)], &path).unwrap();

    let bytes = std::fs::read(&path).unwrap();
    assert_eq!(&bytes[..8], &PNG_MAGIC);
}
