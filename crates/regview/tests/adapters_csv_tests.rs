//! Tests for two-column point files.
//!
//! These tests verify:
//! - Record parsing (separators, malformed records, extra fields)
//! - Save then load round trips through a real file
//! - Missing files (empty store versus explicit error)
//! - Session-level load and save
//!
//! ## Test Organization
//!
//! 1. **Record Parsing** - Single lines
//! 2. **Reader/Writer** - In-memory buffers
//! 3. **Files** - Temporary directories

use std::fs;
use std::io::Cursor;

use approx::assert_relative_eq;
use tempfile::tempdir;

use regview::internals::adapters::csv::{parse_record, read_points, write_points};
use regview::internals::api::{Outcome, RegressionError, RegressionViewBuilder};
use regview::internals::primitives::point::Point;
use regview::internals::primitives::store::PointStore;

// ============================================================================
// Record Parsing Tests
// ============================================================================

/// Test comma, semicolon and whitespace separators.
#[test]
fn test_parse_separators() {
    assert_eq!(parse_record::<f64>("1.5,2"), Some(Point::new(1.5, 2.0)));
    assert_eq!(parse_record::<f64>("1.5;2"), Some(Point::new(1.5, 2.0)));
    assert_eq!(parse_record::<f64>("  -3 \t 4e1 "), Some(Point::new(-3.0, 40.0)));
    assert_eq!(parse_record::<f64>("1.5, 2"), Some(Point::new(1.5, 2.0)));
}

/// Test that malformed records are rejected.
#[test]
fn test_parse_malformed() {
    assert_eq!(parse_record::<f64>("x,y"), None);
    assert_eq!(parse_record::<f64>("1.0"), None);
    assert_eq!(parse_record::<f64>("1.0,abc"), None);
    assert_eq!(parse_record::<f64>("NaN,1"), None);
    assert_eq!(parse_record::<f64>("1,inf"), None);
    assert_eq!(parse_record::<f64>(""), None);
}

/// Test that an empty field between separators rejects the record.
#[test]
fn test_parse_empty_field() {
    assert_eq!(parse_record::<f64>("1,,2"), None);
    assert_eq!(parse_record::<f64>("1;;2"), None);
    assert_eq!(parse_record::<f64>(",1,2"), None);
    assert_eq!(parse_record::<f64>("1 , 2\r"), Some(Point::new(1.0, 2.0)));
}

/// Test that extra trailing fields are ignored.
#[test]
fn test_parse_extra_fields() {
    assert_eq!(parse_record::<f64>("1,2,3"), Some(Point::new(1.0, 2.0)));
}

// ============================================================================
// Reader/Writer Tests
// ============================================================================

/// Test that malformed lines are skipped and the rest kept in order.
#[test]
fn test_read_skips_malformed() {
    let input = "x,y\n1,2\n\ngarbage\n3;4\n5 6\n";
    let points: Vec<Point<f64>> = read_points(Cursor::new(input));

    assert_eq!(
        points,
        vec![Point::new(1.0, 2.0), Point::new(3.0, 4.0), Point::new(5.0, 6.0)]
    );
}

/// Test the writer format.
#[test]
fn test_write_format() {
    let mut buf = Vec::new();
    write_points(&mut buf, &[Point::new(1.0, 2.5), Point::new(-0.125, 3.0)]).expect("write");

    assert_eq!(String::from_utf8(buf).expect("utf8"), "1,2.5\n-0.125,3\n");
}

// ============================================================================
// File Tests
// ============================================================================

/// Test that save then load reproduces the point set.
#[test]
fn test_file_round_trip() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("points.csv");

    let points = vec![
        Point::new(0.1, 0.2),
        Point::new(1.0 / 3.0, -2.0 / 7.0),
        Point::new(1e-9, 12345.678),
    ];
    PointStore::from_points(points.clone()).save(&path).expect("save");

    let loaded = PointStore::<f64>::load(&path);
    assert_eq!(loaded.len(), points.len());
    for (a, b) in loaded.iter().zip(&points) {
        assert_relative_eq!(a.x, b.x, max_relative = 1e-12);
        assert_relative_eq!(a.y, b.y, max_relative = 1e-12);
    }
}

/// Test that saving truncates an existing file.
#[test]
fn test_save_overwrites() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("points.csv");
    fs::write(&path, "9,9\n8,8\n7,7\n").expect("seed file");

    PointStore::from_points(vec![Point::new(1.0, 1.0)])
        .save(&path)
        .expect("save");

    assert_eq!(fs::read_to_string(&path).expect("read"), "1,1\n");
}

/// Test that a missing file loads as an empty store.
#[test]
fn test_missing_file_is_empty() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("does-not-exist.csv");

    assert!(PointStore::<f64>::load(&path).is_empty());
    assert!(matches!(
        PointStore::<f64>::try_load(&path),
        Err(RegressionError::Io { .. })
    ));
}

/// Test that saving into a missing directory fails.
#[test]
fn test_save_error() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("missing").join("points.csv");

    let res = PointStore::from_points(vec![Point::new(1.0, 1.0)]).save(&path);
    assert!(matches!(res, Err(RegressionError::Io { .. })));
}

/// Test session load and save.
///
/// Verifies loading replaces the points and refits the model.
#[test]
fn test_session_load_and_save() {
    let dir = tempdir().expect("tempdir");
    let input = dir.path().join("in.csv");
    let output = dir.path().join("out.csv");
    fs::write(&input, "0,1\n1,3\n2,5\n").expect("seed file");

    let mut session = RegressionViewBuilder::<f64>::new()
        .points([(10.0, 10.0)])
        .build()
        .expect("session");

    let outcome = session.load(&input).expect("load");
    assert_eq!(outcome, Outcome::Replaced(3));
    assert_relative_eq!(session.evaluate(3.0), 7.0, epsilon = 1e-12);

    session.save(&output).expect("save");
    assert_eq!(fs::read_to_string(&output).expect("read"), "0,1\n1,3\n2,5\n");
}
