/// gemrank-core: Pure-computation hidden-gem ranking.
///
/// Game catalog → audience-to-review ratio per entry → ranked list →
/// fixed-width markdown report lines. No IO, no HTTP, no filesystem.
/// Bring your own catalog.
///
/// Entries carry their audience estimates as a closed [`types::AudienceEstimate`]
/// enum, built once by the caller's ingestion step. The scoring code matches
/// it exhaustively and never probes raw provider fields.
///
/// # Quick start
///
/// ```rust
/// use gemrank_core::{
///     rank_catalog, render_ranking, AudienceEstimate, AudienceSource,
///     CatalogEntry, RankingOptions, ReportLayout,
/// };
///
/// let catalog = vec![
///     CatalogEntry {
///         appid: "100".to_string(),
///         name: "Alpha".to_string(),
///         positive_reviews: 40,
///         negative_reviews: 10,
///         players: AudienceEstimate::Point { count: 50_000.0, variance: None },
///         owners: AudienceEstimate::Range { low: 20_000.0, high: 50_000.0 },
///     },
///     CatalogEntry {
///         appid: "200".to_string(),
///         name: "Beta".to_string(),
///         positive_reviews: 900,
///         negative_reviews: 100,
///         players: AudienceEstimate::Point { count: 60_000.0, variance: None },
///         owners: AudienceEstimate::Unavailable,
///     },
/// ];
///
/// // Negative exponent: few reviews relative to audience ranks first.
/// let options = RankingOptions {
///     ratio_exponent: -1.0,
///     audience_source: AudienceSource::Players,
/// };
///
/// let ranking = rank_catalog(&catalog, &options);
/// assert_eq!(ranking[0].name, "Beta");
///
/// for line in render_ranking(&ranking, Some(10), &ReportLayout::default()) {
///     println!("{line}");
/// }
/// ```
pub mod ranking;
pub mod render;
pub mod scoring;
pub mod types;

// Re-export primary public API at crate root.
pub use ranking::rank_catalog;
pub use render::{render_ranking, ReportLayout, DEFAULT_LINK_WIDTH, STEAM_STORE_URL};
pub use scoring::{hidden_gem_score, DISCARDED};
pub use types::{AudienceEstimate, AudienceSource, CatalogEntry, RankedEntry, RankingOptions};
