/// Per-game hidden-gem scoring.
///
/// One function, one options struct. Pure, no IO, no state.
use crate::types::{AudienceEstimate, CatalogEntry, RankingOptions};

/// Score assigned to games the ratio cannot rank: missing estimates, zero
/// reviews, or data that fails the sanity gates. Real scores are always
/// non-negative, so discarded games sort below every ranked one, but the
/// value itself carries no comparative meaning.
pub const DISCARDED: f64 = -1.0;

/// Compute the hidden-gem score for one catalog entry.
///
/// The score is `(audience / reviews) ^ ratio_exponent`, where the audience
/// is the estimate selected by `options.audience_source` (interval estimates
/// contribute their midpoint). A game is discarded, scored [`DISCARDED`],
/// when any of these hold, checked in order:
///
/// - the selected estimate is unavailable,
/// - a reported variance is at least the audience count (noise drowns the
///   signal; an exactly-equal variance means no confident signal either),
/// - the audience count is below the review count (more reviewers than
///   plausible audience, so the data is spurious),
/// - the game has no reviews at all.
pub fn hidden_gem_score(entry: &CatalogEntry, options: &RankingOptions) -> f64 {
    let (audience, variance) = match entry.audience(options.audience_source) {
        AudienceEstimate::Unavailable => return DISCARDED,
        AudienceEstimate::Point { count, variance } => (count, variance),
        AudienceEstimate::Range { low, high } => ((low + high) / 2.0, None),
    };

    let num_reviews = entry.num_reviews();

    if let Some(variance) = variance {
        if audience <= variance {
            return DISCARDED;
        }
    }
    if audience < num_reviews as f64 {
        return DISCARDED;
    }
    if num_reviews == 0 {
        return DISCARDED;
    }

    // The gates above only let through audience >= num_reviews >= 1. Anything
    // else reaching the ratio means the discard policy itself is broken.
    assert!(
        audience > 0.0 && num_reviews > 0,
        "discard gates passed a non-positive ratio for appid {}: audience {}, reviews {}",
        entry.appid,
        audience,
        num_reviews
    );

    (audience / num_reviews as f64).powf(options.ratio_exponent)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::AudienceSource;

    fn entry(positive: u64, negative: u64, players: AudienceEstimate) -> CatalogEntry {
        CatalogEntry {
            appid: "570".to_string(),
            name: "Dota 2".to_string(),
            positive_reviews: positive,
            negative_reviews: negative,
            players,
            owners: AudienceEstimate::Unavailable,
        }
    }

    fn players_options(ratio_exponent: f64) -> RankingOptions {
        RankingOptions {
            ratio_exponent,
            audience_source: AudienceSource::Players,
        }
    }

    #[test]
    fn test_zero_reviews_discarded() {
        let e = entry(0, 0, AudienceEstimate::Point { count: 50_000.0, variance: None });
        assert_eq!(hidden_gem_score(&e, &players_options(1.0)), DISCARDED);
    }

    #[test]
    fn test_zero_reviews_discarded_regardless_of_variance() {
        let e = entry(0, 0, AudienceEstimate::Point { count: 50_000.0, variance: Some(100.0) });
        assert_eq!(hidden_gem_score(&e, &players_options(-1.0)), DISCARDED);
    }

    #[test]
    fn test_unavailable_estimate_discarded() {
        let e = entry(40, 10, AudienceEstimate::Unavailable);
        assert_eq!(hidden_gem_score(&e, &players_options(1.0)), DISCARDED);
    }

    #[test]
    fn test_plain_ratio() {
        let e = entry(40, 10, AudienceEstimate::Point { count: 5_000.0, variance: None });
        let score = hidden_gem_score(&e, &players_options(1.0));
        assert!((score - 100.0).abs() < 1e-9, "expected 5000/50 = 100, got {score}");
    }

    #[test]
    fn test_negative_exponent_inverts_ratio() {
        let e = entry(40, 10, AudienceEstimate::Point { count: 5_000.0, variance: None });
        let score = hidden_gem_score(&e, &players_options(-1.0));
        assert!((score - 0.01).abs() < 1e-12, "expected (5000/50)^-1 = 0.01, got {score}");
    }

    #[test]
    fn test_variance_at_or_above_audience_discarded() {
        let below = entry(10, 0, AudienceEstimate::Point { count: 1_000.0, variance: Some(2_000.0) });
        assert_eq!(hidden_gem_score(&below, &players_options(1.0)), DISCARDED);

        // Exactly-equal variance means no confident signal either.
        let equal = entry(10, 0, AudienceEstimate::Point { count: 1_000.0, variance: Some(1_000.0) });
        assert_eq!(hidden_gem_score(&equal, &players_options(1.0)), DISCARDED);
    }

    #[test]
    fn test_variance_below_audience_scores() {
        let e = entry(10, 0, AudienceEstimate::Point { count: 1_000.0, variance: Some(999.0) });
        let score = hidden_gem_score(&e, &players_options(1.0));
        assert!((score - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_zero_variance_is_not_absent_variance() {
        // A zero variance passes the gate; only variance >= audience discards.
        let e = entry(10, 10, AudienceEstimate::Point { count: 200.0, variance: Some(0.0) });
        let score = hidden_gem_score(&e, &players_options(1.0));
        assert!((score - 10.0).abs() < 1e-9);
    }

    #[test]
    fn test_audience_below_reviews_discarded() {
        let e = entry(60, 40, AudienceEstimate::Point { count: 99.0, variance: None });
        assert_eq!(hidden_gem_score(&e, &players_options(1.0)), DISCARDED);
    }

    #[test]
    fn test_audience_equal_to_reviews_scores_one() {
        let e = entry(60, 40, AudienceEstimate::Point { count: 100.0, variance: None });
        let score = hidden_gem_score(&e, &players_options(1.0));
        assert!((score - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_range_estimate_uses_midpoint() {
        let e = CatalogEntry {
            appid: "620".to_string(),
            name: "Portal 2".to_string(),
            positive_reviews: 90,
            negative_reviews: 10,
            players: AudienceEstimate::Unavailable,
            owners: AudienceEstimate::Range { low: 1_000.0, high: 3_000.0 },
        };
        let options = RankingOptions {
            ratio_exponent: 1.0,
            audience_source: AudienceSource::Owners,
        };
        let score = hidden_gem_score(&e, &options);
        assert!((score - 20.0).abs() < 1e-9, "expected midpoint 2000 / 100 reviews = 20, got {score}");
    }

    #[test]
    fn test_source_selects_field() {
        let e = CatalogEntry {
            appid: "440".to_string(),
            name: "Team Fortress 2".to_string(),
            positive_reviews: 50,
            negative_reviews: 50,
            players: AudienceEstimate::Point { count: 10_000.0, variance: None },
            owners: AudienceEstimate::Range { low: 30_000.0, high: 50_000.0 },
        };

        let players = hidden_gem_score(&e, &RankingOptions {
            ratio_exponent: 1.0,
            audience_source: AudienceSource::Players,
        });
        let owners = hidden_gem_score(&e, &RankingOptions {
            ratio_exponent: 1.0,
            audience_source: AudienceSource::Owners,
        });

        assert!((players - 100.0).abs() < 1e-9);
        assert!((owners - 400.0).abs() < 1e-9);
    }
}
