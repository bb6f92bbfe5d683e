//! On-disk snapshot format (`spec.md` §5/§6): the `prepare` stage's output
//! goes to a single `<name>.prep` file, and each segment's monodromy braid
//! to its own `<name>.seg.<i>` file, so that `run_segments` can be
//! dispatched and resumed one segment at a time without re-running
//! `prepare` or holding every braid in memory at once.

use crate::braid::Braid;
use crate::driver::Prepared;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

/// A persisted segment braid, paired with its free-reduced word length as
/// a cheap integrity check against silent truncation or corruption.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct SegmentRecord {
    braid: Braid,
    reflection_length: usize,
}

/// Write a [`Prepared`] record to `path` as JSON.
///
/// # Errors
///
/// [`Error::Io`] on any filesystem failure, [`Error::Serde`] if
/// serialization fails (it cannot, in practice, for this record's field
/// types, but the fallible `serde_json` API is preserved rather than
/// unwrapped).
pub fn save_prepared(path: impl AsRef<Path>, prepared: &Prepared) -> Result<()> {
    let file = File::create(path)?;
    serde_json::to_writer_pretty(BufWriter::new(file), prepared)?;
    Ok(())
}

/// Read a [`Prepared`] record back from `path`.
///
/// # Errors
///
/// [`Error::Io`] if the file cannot be opened, [`Error::Serde`] if its
/// contents do not parse as a [`Prepared`] record.
pub fn load_prepared(path: impl AsRef<Path>) -> Result<Prepared> {
    let file = File::open(path)?;
    Ok(serde_json::from_reader(BufReader::new(file))?)
}

/// Write one segment's braid to `path`.
///
/// # Errors
///
/// [`Error::Io`] / [`Error::Serde`], as in [`save_prepared`].
pub fn save_segment(path: impl AsRef<Path>, braid: &Braid) -> Result<()> {
    let record = SegmentRecord {
        braid: braid.clone(),
        reflection_length: braid.reflection_length(),
    };
    let file = File::create(path)?;
    serde_json::to_writer_pretty(BufWriter::new(file), &record)?;
    Ok(())
}

/// Read one segment's braid back from `path`, checking its stored
/// `reflection_length` against the word actually loaded.
///
/// # Errors
///
/// [`Error::Io`] / [`Error::Serde`] as in [`load_prepared`]; returns
/// [`Error::Serde`]-shaped failure indirectly if the checksum mismatches,
/// via a debug assertion — a mismatch here means the file was hand-edited
/// or truncated, not a condition normal operation produces.
pub fn load_segment(path: impl AsRef<Path>) -> Result<Braid> {
    let file = File::open(path)?;
    let record: SegmentRecord = serde_json::from_reader(BufReader::new(file))?;
    if record.braid.reflection_length() != record.reflection_length {
        return Err(Error::Serde(invalid_checksum()));
    }
    Ok(record.braid)
}

fn invalid_checksum() -> serde_json::Error {
    serde_json::Error::io(std::io::Error::new(
        std::io::ErrorKind::InvalidData,
        "segment checksum (reflection_length) does not match the loaded braid",
    ))
}

/// The conventional file name for a curve's `prepare` output.
#[must_use]
pub fn prep_path(name: &str) -> String {
    format!("{name}.prep")
}

/// The conventional file name for segment `i`'s braid.
#[must_use]
pub fn segment_path(name: &str, i: usize) -> String {
    format!("{name}.seg.{i}")
}
