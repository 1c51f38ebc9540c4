/// Classification of raw SteamSpy records into catalog entries.
///
/// Every raw count field is inspected exactly once, here. Scoring downstream
/// works on the closed `AudienceEstimate` enum and never sees raw JSON
/// shapes. Malformed interval text is a hard error that aborts the run, not
/// a silent discard.
use gemrank_core::{AudienceEstimate, CatalogEntry};
use std::collections::BTreeMap;

use crate::steamspy::{RawAppRecord, RawCount};

/// Parse a textual interval like `"10,000 .. 20,000"` into its bounds.
///
/// Exactly one `".."` separator; bounds may contain thousands-separator
/// commas and surrounding spaces.
fn parse_interval(text: &str) -> Result<(f64, f64), String> {
    let bounds: Vec<&str> = text.split("..").collect();
    if bounds.len() != 2 {
        return Err(format!(
            "expected exactly one \"..\" in interval \"{text}\", found {}",
            bounds.len().saturating_sub(1)
        ));
    }

    let parse_bound = |raw: &str| -> Result<f64, String> {
        let cleaned: String = raw.chars().filter(|c| *c != ',' && *c != ' ').collect();
        cleaned
            .parse::<f64>()
            .map_err(|_| format!("unparseable bound \"{}\" in interval \"{text}\"", raw.trim()))
    };

    Ok((parse_bound(bounds[0])?, parse_bound(bounds[1])?))
}

/// Classify one raw count field plus its adjacent variance field.
///
/// Absent field is a valid state, not an error. A numeric field keeps the
/// variance; interval text carries no variance by construction.
fn classify_count(
    field: Option<&RawCount>,
    variance: Option<f64>,
) -> Result<AudienceEstimate, String> {
    match field {
        None => Ok(AudienceEstimate::Unavailable),
        Some(RawCount::Number(count)) => Ok(AudienceEstimate::Point {
            count: *count,
            variance,
        }),
        Some(RawCount::Text(text)) => {
            let (low, high) = parse_interval(text)?;
            Ok(AudienceEstimate::Range { low, high })
        }
    }
}

/// Build the catalog from raw records, in key order.
///
/// Key order is what makes tie-breaking in the ranking deterministic across
/// runs. The first malformed record aborts the whole build.
pub fn build_catalog(records: &BTreeMap<String, RawAppRecord>) -> Result<Vec<CatalogEntry>, String> {
    let mut catalog = Vec::with_capacity(records.len());

    for (appid, record) in records {
        let players = classify_count(record.players_forever.as_ref(), record.players_forever_variance)
            .map_err(|e| format!("appid {appid}: players_forever: {e}"))?;
        let owners = classify_count(record.owners.as_ref(), record.owners_variance)
            .map_err(|e| format!("appid {appid}: owners: {e}"))?;

        catalog.push(CatalogEntry {
            appid: appid.clone(),
            name: record.name.clone(),
            positive_reviews: record.positive,
            negative_reviews: record.negative,
            players,
            owners,
        });
    }

    Ok(catalog)
}
