/// Report rendering: markdown lines for a ranking prefix.
///
/// Output is deterministic and fixed-width so successive runs diff cleanly:
/// rank numbers are zero-padded to a common width and the link field is
/// padded with trailing spaces. The format is parsable by GitHub Gist.
use crate::types::RankedEntry;

/// Store page prefix prepended to each appid.
pub const STEAM_STORE_URL: &str = "http://store.steampowered.com/app/";

/// Default minimum width of the link field.
pub const DEFAULT_LINK_WIDTH: usize = 40;

/// Layout for rendered ranking lines.
#[derive(Debug, Clone)]
pub struct ReportLayout {
    /// Prepended to each appid to form the store link.
    pub url_prefix: String,
    /// Minimum width of the link field. Shorter links are padded with
    /// trailing spaces; longer ones are never truncated.
    pub link_width: usize,
}

impl Default for ReportLayout {
    fn default() -> Self {
        ReportLayout {
            url_prefix: STEAM_STORE_URL.to_string(),
            link_width: DEFAULT_LINK_WIDTH,
        }
    }
}

/// Render the top of a ranking as markdown list lines.
///
/// Renders `min(ranking.len(), limit)` entries; the limit is inclusive, and
/// `None` renders everything. Ranks are 1-based and zero-padded to
/// `ceil(log10(rendered_count))` digits. With a single rendered entry that
/// width is 0, which pads nothing; formatting widths never truncate, so every
/// rank still prints in full at exact powers of ten.
pub fn render_ranking(
    ranking: &[RankedEntry],
    limit: Option<usize>,
    layout: &ReportLayout,
) -> Vec<String> {
    let count = match limit {
        Some(limit) => ranking.len().min(limit),
        None => ranking.len(),
    };
    // log10(0) is undefined; an empty report has no width to compute.
    if count == 0 {
        return Vec::new();
    }

    let digits = (count as f64).log10().ceil() as usize;

    ranking[..count]
        .iter()
        .enumerate()
        .map(|(idx, entry)| {
            let rank = idx + 1;
            let url = format!("{}{}", layout.url_prefix, entry.appid);
            format!(
                "{rank:0digits$}.\t[{name}]({url:<width$})",
                name = entry.name,
                width = layout.link_width,
            )
        })
        .collect()
}
