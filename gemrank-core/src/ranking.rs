/// Catalog ranking: score every entry once, sort descending.
use crate::scoring::hidden_gem_score;
use crate::types::{CatalogEntry, RankedEntry, RankingOptions};

/// Rank a catalog by descending hidden-gem score.
///
/// Each entry is scored exactly once per call. The sort is stable, so entries
/// with equal scores (including all the discarded ones) keep their relative
/// order from `catalog`. An empty catalog yields an empty ranking.
///
/// Scores are finite non-negatives or the -1.0 discard marker, never NaN, so
/// `total_cmp` gives the same order as a plain numeric comparison.
pub fn rank_catalog(catalog: &[CatalogEntry], options: &RankingOptions) -> Vec<RankedEntry> {
    let mut scored: Vec<(f64, &CatalogEntry)> = catalog
        .iter()
        .map(|entry| (hidden_gem_score(entry, options), entry))
        .collect();

    scored.sort_by(|a, b| b.0.total_cmp(&a.0));

    scored
        .into_iter()
        .map(|(_, entry)| RankedEntry {
            appid: entry.appid.clone(),
            name: entry.name.clone(),
        })
        .collect()
}
