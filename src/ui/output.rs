//! Console output and reporting for a collection run.
//!
//! This module handles everything printed to stdout:
//! - Download summary
//! - Per-source extraction reports, with skips grouped by reason
//! - Final summary with the output file

use crate::models::{asn::AsnSet, extraction::Extraction};
use std::{collections::BTreeMap, path::Path};

const SKIP_EXAMPLES: usize = 3;

/// Prints how many lines were downloaded from each source.
pub fn print_download_summary(peeringdb_lines: usize, euroix_lines: usize) {
    println!(
        "⏬ Datasets downloaded!\n\t📄 PeeringDB: {} lines\n\t📄 Euro-IX: {} lines",
        peeringdb_lines, euroix_lines
    );
}

/// Counts skipped candidates per reason label.
pub fn skip_breakdown(extraction: &Extraction) -> BTreeMap<&'static str, usize> {
    let mut breakdown = BTreeMap::new();
    for skipped in &extraction.skipped {
        *breakdown.entry(skipped.reason.label()).or_insert(0) += 1;
    }
    breakdown
}

/// Prints the ASNs found in one source and what was skipped.
///
/// # Arguments
/// * `source` - Human readable name of the dataset
/// * `extraction` - Result of the extractor for that dataset
pub fn print_source_report(source: &str, extraction: &Extraction) {
    println!(
        "🔎 {}: {} route server ASNs found",
        source,
        extraction.asns.len()
    );

    let breakdown = skip_breakdown(extraction);
    if breakdown.is_empty() {
        return;
    }

    println!(
        "\t⚠️  {} candidates skipped",
        extraction.skipped.len()
    );
    for (reason, count) in breakdown {
        println!("\t- {}: {}", reason, count);
    }
    for skipped in extraction.skipped.iter().take(SKIP_EXAMPLES) {
        println!("\t  e.g. {}: {}", skipped.location, skipped.reason);
    }
}

/// Prints the final summary of the run.
pub fn print_final_report(asns: &AsnSet, output: &Path) {
    println!("\n🔚 Collection completed!");
    if asns.is_empty() {
        println!("⚠️  No route server ASNs found, the output file is empty");
    } else {
        println!("✅ {} unique route server ASNs", asns.len());
    }
    println!("💾 Written to '{}'", output.display());
}
