/// SteamSpy API client and snapshot loading.
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// Bulk endpoint returning every tracked app as one JSON object keyed by appid.
pub const DEFAULT_API_URL: &str = "https://steamspy.com/api.php?request=all";

/// A count field as SteamSpy serializes it: a number on older dumps, a
/// textual interval like `"10,000 .. 20,000"` on current ones.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawCount {
    Number(f64),
    Text(String),
}

/// One SteamSpy record, keeping only the fields the ranking reads plus
/// everything else verbatim for the `--verbose` metadata dump.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawAppRecord {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub positive: u64,
    #[serde(default)]
    pub negative: u64,
    #[serde(default)]
    pub owners: Option<RawCount>,
    #[serde(default)]
    pub owners_variance: Option<f64>,
    #[serde(default)]
    pub players_forever: Option<RawCount>,
    #[serde(default)]
    pub players_forever_variance: Option<f64>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// The full catalog, keyed by appid. A BTreeMap keeps iteration order
/// deterministic across runs, which fixes the tie order in the ranking.
pub type RawCatalog = BTreeMap<String, RawAppRecord>;

/// First characters of an error body, for readable failure messages.
fn truncate_body(body: &str) -> String {
    body.chars().take(200).collect()
}

/// Send one GET to the SteamSpy API and deserialize the catalog.
async fn fetch_once(client: &Client, api_url: &str) -> Result<RawCatalog, String> {
    let resp = client
        .get(api_url)
        .send()
        .await
        .map_err(|e| format!("HTTP request failed: {e}"))?;

    if !resp.status().is_success() {
        let status = resp.status();
        let body = resp.text().await.unwrap_or_default();
        return Err(format!("SteamSpy API returned {status}: {}", truncate_body(&body)));
    }

    resp.json::<RawCatalog>()
        .await
        .map_err(|e| format!("Failed to parse SteamSpy response JSON: {e}"))
}

/// Fetch the full catalog, with retries on HTTP/network errors.
///
/// Retries up to `max_retries` times with a 1-second delay between attempts.
pub async fn fetch_catalog(
    client: &Client,
    api_url: &str,
    max_retries: usize,
    verbose: bool,
) -> Result<RawCatalog, String> {
    let mut last_err = String::new();
    for attempt in 0..=max_retries {
        match fetch_once(client, api_url).await {
            Ok(catalog) => return Ok(catalog),
            Err(e) => {
                last_err = e;
                if attempt < max_retries {
                    if verbose {
                        eprintln!("  Retry {}/{}: {}", attempt + 1, max_retries, last_err);
                    }
                    tokio::time::sleep(std::time::Duration::from_secs(1)).await;
                }
            }
        }
    }
    Err(last_err)
}

/// Load a catalog from a local snapshot file with the same shape as the bulk
/// API response.
pub fn load_snapshot(path: &Path) -> Result<RawCatalog, String> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| format!("Failed to read snapshot {}: {e}", path.display()))?;
    serde_json::from_str(&content)
        .map_err(|e| format!("Failed to parse snapshot {}: {e}", path.display()))
}
