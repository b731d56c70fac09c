//! Aggregation of both sources and the dated output file.

use crate::error::{CollectorError, Result};
use crate::models::asn::AsnSet;
use chrono::NaiveDate;
use std::{
    fs::{self, File},
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

/// Merges two ASN sets; duplicates collapse.
pub fn union(mut left: AsnSet, mut right: AsnSet) -> AsnSet {
    if left.len() < right.len() {
        std::mem::swap(&mut left, &mut right);
    }
    left.append(&mut right);
    left
}

/// Name of the output file for a given day.
///
/// # Examples
/// ```text
/// 2017-12-30 -> "RouteServerASNs_20171230.txt"
/// ```
pub fn output_file_name(date: NaiveDate) -> String {
    format!("RouteServerASNs_{}.txt", date.format("%Y%m%d"))
}

/// Writes one decimal ASN per line into `dir`, replacing any file of the same day.
///
/// The content is written to a temporary file first and renamed into place
/// once it is fully flushed, so a failed run never leaves a truncated list.
///
/// # Returns
/// The path of the written file.
pub fn write_asns(dir: &Path, date: NaiveDate, asns: &AsnSet) -> Result<PathBuf> {
    let path = dir.join(output_file_name(date));
    let tmp_path = path.with_extension("txt.tmp");

    if let Err(e) = write_lines(&tmp_path, asns) {
        let _ = fs::remove_file(&tmp_path);
        return Err(CollectorError::write(&tmp_path, e));
    }

    if let Err(e) = fs::rename(&tmp_path, &path) {
        let _ = fs::remove_file(&tmp_path);
        return Err(CollectorError::write(&path, e));
    }

    log::info!("Wrote {} ASNs to '{}'", asns.len(), path.display());
    Ok(path)
}

fn write_lines(path: &Path, asns: &AsnSet) -> std::io::Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    for asn in asns {
        writeln!(writer, "{}", asn)?;
    }
    let file = writer.into_inner().map_err(|e| e.into_error())?;
    file.sync_all()
}
