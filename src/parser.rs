//! Extraction of route server ASNs from the downloaded datasets.
//!
//! - PeeringDB: a JSON object whose `data` array holds network records with an
//!   integer `asn` field.
//! - Euro-IX: comma separated lines where the third and fourth columns may
//!   hold an ASN, optionally written as `AS<number>`.

use crate::error::{CollectorError, Result};
use crate::models::{
    asn::Asn,
    extraction::{Extraction, SkipReason},
    peeringdb::NetworkList,
};
use serde_json::Value;

/// Zero-indexed Euro-IX columns that may carry an ASN.
const EUROIX_ASN_COLUMNS: [usize; 2] = [2, 3];

/// What to do when the PeeringDB body is not valid JSON.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonPolicy {
    /// Log the failure and let the source contribute no ASNs.
    #[default]
    Lenient,
    /// Abort the run with [`CollectorError::Json`].
    Strict,
}

/// Collects the `asn` of every network record in a PeeringDB response.
///
/// A top level value that isn't an object, or a missing/non-array `data`
/// field, yields an empty extraction. Records that are not objects or have no
/// usable `asn` are skipped individually.
///
/// # Errors
/// Only with [`JsonPolicy::Strict`], when `text` is not valid JSON.
pub fn extract_peeringdb(text: &str, policy: JsonPolicy) -> Result<Extraction> {
    let mut extraction = Extraction::new();

    let document: Value = match serde_json::from_str(text) {
        Ok(document) => document,
        Err(e) => {
            let error = CollectorError::from(e);
            if policy == JsonPolicy::Strict {
                return Err(error);
            }
            log::error!("PeeringDB response ignored: {}", error);
            extraction.skip("PeeringDB response", SkipReason::MalformedDocument(error.to_string()));
            return Ok(extraction);
        }
    };

    if !document.is_object() {
        log::warn!("PeeringDB response is not a JSON object, no ASNs extracted");
        return Ok(extraction);
    }

    let networks: NetworkList = serde_json::from_value(document)?;
    for (index, record) in networks.data.iter().enumerate() {
        extraction.record(format!("data[{}]", index), network_asn(record));
    }

    Ok(extraction)
}

fn network_asn(record: &Value) -> std::result::Result<Asn, SkipReason> {
    let record = record.as_object().ok_or(SkipReason::NotAnObject)?;
    match record.get("asn") {
        None | Some(Value::Null) => Err(SkipReason::MissingAsn),
        Some(asn) => match (asn.as_i64(), asn.as_u64()) {
            (Some(value), _) => Asn::from_wide(value),
            (None, Some(wide)) => Err(SkipReason::OutOfRange(wide)),
            (None, None) => Err(SkipReason::NotNumeric(asn.to_string())),
        },
    }
}

/// Collects the ASNs found in the third and fourth column of each Euro-IX line.
///
/// Lines are split on commas only: there is no header row and quotes have no
/// special meaning. Rows with fewer than four columns contribute nothing.
pub fn extract_euroix(lines: &[String]) -> Extraction {
    let mut extraction = Extraction::new();
    let text = lines.join("\n");

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .from_reader(text.as_bytes());

    for record in reader.records() {
        let record = match record {
            Ok(r) => r,
            Err(e) => {
                let location = match e.position() {
                    Some(p) => format!("line {}", p.line()),
                    None => String::from("Euro-IX matrix"),
                };
                extraction.skip(location, SkipReason::MalformedDocument(e.to_string()));
                continue;
            }
        };
        let line = record.position().map_or(0, |p| p.line());

        if record.len() <= EUROIX_ASN_COLUMNS[1] {
            extraction.skip(
                format!("line {}", line),
                SkipReason::ShortRow {
                    columns: record.len(),
                },
            );
            continue;
        }

        for column in EUROIX_ASN_COLUMNS {
            let field = &record[column];
            let outcome = matrix_asn(field);
            if let Ok(asn) = outcome {
                log::debug!("Euro-IX line {}: found {}", line, asn);
            }
            extraction.record(format!("line {} column {}", line, column + 1), outcome);
        }
    }

    extraction
}

fn matrix_asn(field: &str) -> std::result::Result<Asn, SkipReason> {
    let field = field.trim();
    if field.is_empty() {
        return Err(SkipReason::Blank);
    }

    let digits = field.strip_prefix("AS").unwrap_or(field);
    let value: i64 = digits
        .parse()
        .map_err(|_| SkipReason::NotNumeric(field.to_string()))?;

    Asn::from_wide(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values(extraction: &Extraction) -> Vec<u32> {
        extraction.asns.iter().map(|a| a.value()).collect()
    }

    fn lines(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|l| l.to_string()).collect()
    }

    #[test]
    fn peeringdb_collects_every_distinct_asn() {
        let json = r#"{"data":[{"asn":64500,"name":"a"},{"asn":64501},{"asn":4200000000}]}"#;
        let extraction = extract_peeringdb(json, JsonPolicy::Lenient).unwrap();
        assert_eq!(values(&extraction), vec![64500, 64501, 4200000000]);
        assert!(extraction.skipped.is_empty());
    }

    #[test]
    fn peeringdb_duplicates_collapse() {
        let json = r#"{"data":[{"asn":64500},{"asn":64501},{"asn":64500}]}"#;
        let extraction = extract_peeringdb(json, JsonPolicy::Lenient).unwrap();
        assert_eq!(values(&extraction), vec![64500, 64501]);
    }

    #[test]
    fn peeringdb_missing_data_is_empty() {
        for json in [r#"{}"#, r#"{"data":{}}"#, r#"[{"asn":1}]"#, "42"] {
            let extraction = extract_peeringdb(json, JsonPolicy::Strict).unwrap();
            assert!(extraction.asns.is_empty(), "{}", json);
        }
    }

    #[test]
    fn peeringdb_skips_odd_records() {
        let json = r#"{"data":[{"name":"no asn"},7,{"asn":"64500"},{"asn":null},{"asn":0},{"asn":64502}]}"#;
        let extraction = extract_peeringdb(json, JsonPolicy::Lenient).unwrap();
        assert_eq!(values(&extraction), vec![64502]);

        let reasons: Vec<_> = extraction.skipped.iter().map(|s| s.reason.clone()).collect();
        assert_eq!(
            reasons,
            vec![
                SkipReason::MissingAsn,
                SkipReason::NotAnObject,
                SkipReason::NotNumeric("\"64500\"".to_string()),
                SkipReason::MissingAsn,
                SkipReason::NonPositive(0),
            ]
        );
        assert_eq!(extraction.skipped[1].location, "data[1]");
    }

    #[test]
    fn peeringdb_huge_asn_is_out_of_range() {
        let json = r#"{"data":[{"asn":18446744073709551615},{"asn":4294967296},{"asn":1.5}]}"#;
        let extraction = extract_peeringdb(json, JsonPolicy::Lenient).unwrap();
        assert!(extraction.asns.is_empty());

        let reasons: Vec<_> = extraction.skipped.iter().map(|s| s.reason.clone()).collect();
        assert_eq!(
            reasons,
            vec![
                SkipReason::OutOfRange(u64::MAX),
                SkipReason::OutOfRange(4294967296),
                SkipReason::NotNumeric("1.5".to_string()),
            ]
        );
    }

    #[test]
    fn malformed_json_degrades_when_lenient() {
        let extraction = extract_peeringdb(r#"{"data":[{"asn":1}"#, JsonPolicy::Lenient).unwrap();
        assert!(extraction.asns.is_empty());
        assert_eq!(extraction.skipped.len(), 1);
        assert!(matches!(
            extraction.skipped[0].reason,
            SkipReason::MalformedDocument(_)
        ));
    }

    #[test]
    fn malformed_json_aborts_when_strict() {
        match extract_peeringdb("{\n\"data\": [oops]}", JsonPolicy::Strict) {
            Err(CollectorError::Json { line, column, .. }) => {
                assert_eq!(line, 2);
                assert!(column > 0);
            }
            other => panic!("unexpected result {:?}", other),
        }
    }

    #[test]
    fn euroix_prefixed_asn_with_blank_neighbour() {
        let extraction = extract_euroix(&lines(&["x,y,AS64500,"]));
        assert_eq!(values(&extraction), vec![64500]);
        assert_eq!(extraction.skipped[0].reason, SkipReason::Blank);
    }

    #[test]
    fn euroix_reads_both_columns() {
        let extraction = extract_euroix(&lines(&["ixp,country, 6695 ,AS 1", "a,b,c,43252"]));
        assert_eq!(values(&extraction), vec![6695, 43252]);
        assert_eq!(
            extraction.skipped.iter().map(|s| s.reason.label()).collect::<Vec<_>>(),
            vec!["not numeric", "not numeric"]
        );
    }

    #[test]
    fn euroix_short_rows_are_skipped() {
        let extraction = extract_euroix(&lines(&["a,b,AS64500", "only", "x,y,,AS64501"]));
        assert_eq!(values(&extraction), vec![64501]);
        assert_eq!(
            extraction.skipped[0],
            crate::models::extraction::Skipped {
                location: "line 1".to_string(),
                reason: SkipReason::ShortRow { columns: 3 },
            }
        );
        assert_eq!(extraction.skipped[1].reason, SkipReason::ShortRow { columns: 1 });
    }

    #[test]
    fn euroix_rejects_non_positive_values() {
        let extraction = extract_euroix(&lines(&["x,y,,AS0", "x,y,-5,AS-1"]));
        assert!(extraction.asns.is_empty());
        assert!(extraction.skipped.contains(&crate::models::extraction::Skipped {
            location: "line 1 column 4".to_string(),
            reason: SkipReason::NonPositive(0),
        }));
        assert!(extraction.skipped.iter().any(|s| s.reason == SkipReason::NonPositive(-5)));
    }

    #[test]
    fn euroix_quotes_are_plain_characters() {
        let extraction = extract_euroix(&lines(&["\"IX, Inc\",y,AS1,AS2"]));
        assert_eq!(values(&extraction), vec![1]);
        assert_eq!(extraction.skipped.len(), 1);
        assert_eq!(extraction.skipped[0].reason, SkipReason::NotNumeric("y".to_string()));
    }

    #[test]
    fn both_sources_combine_and_reject_zero() {
        let pdb = extract_peeringdb(
            r#"{"data":[{"asn":64500},{"asn":64501},{"asn":64500}]}"#,
            JsonPolicy::Lenient,
        )
        .unwrap();
        let euroix = extract_euroix(&lines(&["x,y,AS64502,", "x,y,,AS0"]));
        let all = crate::writer::union(pdb.asns, euroix.asns);
        assert_eq!(all.iter().map(|a| a.value()).collect::<Vec<_>>(), vec![64500, 64501, 64502]);
    }
}
