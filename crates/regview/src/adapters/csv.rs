//! Two-column point files.
//!
//! ## Purpose
//!
//! This module reads and writes point sets as plain text, one `x,y` record
//! per line. It is the only part of the crate that touches the filesystem.
//!
//! ## Design notes
//!
//! * **Lenient reader**: Fields are separated by a single `,` or `;`, with
//!   optional surrounding whitespace. A record with neither separator is
//!   split on whitespace instead. Records that do not start with two finite
//!   numbers (headers, blank lines, empty fields, garbage) are skipped and
//!   counted, never fatal. Extra trailing fields are ignored.
//! * **Strict writer**: Always `x,y` with `,` and the shortest
//!   representation that reads back to the same value.
//! * **Truncate and rewrite**: Saving replaces the destination file.
//!
//! ## Non-goals
//!
//! * No quoting, escaping, headers or extra columns.

// External dependencies
use std::fmt::Display;
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use log::{info, warn};
use num_traits::Float;

// Internal dependencies
use crate::engine::session::{Action, Outcome, RegressionSession};
use crate::primitives::errors::RegressionError;
use crate::primitives::point::Point;
use crate::primitives::store::PointStore;

// ============================================================================
// Record Parsing
// ============================================================================

/// Parse one record into a point.
///
/// Returns `None` for records that do not begin with two finite numbers.
pub fn parse_record<T: Float>(line: &str) -> Option<Point<T>> {
    let (x, y) = if line.contains([',', ';']) {
        let mut fields = line.split([',', ';']);
        (fields.next()?, fields.next()?)
    } else {
        let mut fields = line.split_whitespace();
        (fields.next()?, fields.next()?)
    };

    Some(Point::new(parse_field::<T>(x)?, parse_field::<T>(y)?))
}

fn parse_field<T: Float>(field: &str) -> Option<T> {
    let v: f64 = field.trim().parse().ok()?;
    if !v.is_finite() {
        return None;
    }
    T::from(v).filter(|t| t.is_finite())
}

/// Read every parsable record from `reader`.
///
/// Reading stops quietly at the first I/O error; the points read so far are
/// kept.
pub fn read_points<T: Float, R: BufRead>(reader: R) -> Vec<Point<T>> {
    let mut points = Vec::new();
    let mut skipped = 0usize;

    for (lineno, line) in reader.lines().enumerate() {
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                warn!("stopped reading points at line {}: {e}", lineno + 1);
                break;
            }
        };
        if line.trim().is_empty() {
            continue;
        }
        match parse_record(&line) {
            Some(p) => points.push(p),
            None => skipped += 1,
        }
    }

    if skipped > 0 {
        warn!("skipped {skipped} malformed record(s)");
    }
    points
}

/// Write `points` as `x,y` records.
pub fn write_points<T: Display, W: Write>(mut writer: W, points: &[Point<T>]) -> io::Result<()> {
    for p in points {
        writeln!(writer, "{},{}", p.x, p.y)?;
    }
    writer.flush()
}

// ============================================================================
// Point Store File I/O
// ============================================================================

fn io_error(path: &Path, e: io::Error) -> RegressionError {
    RegressionError::Io {
        path: path.display().to_string(),
        message: e.to_string(),
    }
}

impl<T: Float> PointStore<T> {
    /// Load a point file, failing if it cannot be opened.
    pub fn try_load<P: AsRef<Path>>(path: P) -> Result<Self, RegressionError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| io_error(path, e))?;
        let points = read_points(BufReader::new(file));
        info!("loaded {} points from {}", points.len(), path.display());
        Ok(Self::from_points(points))
    }

    /// Load a point file; an unreadable file gives an empty store.
    pub fn load<P: AsRef<Path>>(path: P) -> Self {
        match Self::try_load(path) {
            Ok(store) => store,
            Err(e) => {
                warn!("{e}");
                Self::new()
            }
        }
    }
}

impl<T: Float + Display> PointStore<T> {
    /// Write all points to `path`, replacing any existing file.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), RegressionError> {
        let path = path.as_ref();
        let file = File::create(path).map_err(|e| io_error(path, e))?;
        write_points(BufWriter::new(file), self.points()).map_err(|e| io_error(path, e))?;
        info!("saved {} points to {}", self.len(), path.display());
        Ok(())
    }
}

// ============================================================================
// Session File I/O
// ============================================================================

impl<T: Float + Display> RegressionSession<T> {
    /// Replace the points with the contents of a point file.
    ///
    /// An unreadable file yields an empty point set, as with
    /// [`PointStore::load`].
    pub fn load<P: AsRef<Path>>(&mut self, path: P) -> Result<Outcome<T>, RegressionError> {
        let store = PointStore::load(path);
        self.dispatch(Action::ReplacePoints(store.into_points()))
    }

    /// Write the points to a point file, overwriting it.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), RegressionError> {
        self.store().save(path)
    }
}
