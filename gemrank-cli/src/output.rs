/// Report sinks: stdout, atomic file writes, and the verbose metadata dump.
use gemrank_core::RankedEntry;
use std::path::{Path, PathBuf};

use crate::steamspy::RawCatalog;

/// Print report lines to stdout.
pub fn print_report(lines: &[String]) {
    for line in lines {
        println!("{line}");
    }
}

/// Write report lines to a file.
///
/// Writes a sibling `<path>.tmp` first and renames it into place, so a failed
/// run never leaves a truncated report at the target path.
pub fn write_report(path: &Path, lines: &[String]) -> Result<(), String> {
    let mut content = lines.join("\n");
    if !lines.is_empty() {
        content.push('\n');
    }

    let mut tmp = path.as_os_str().to_owned();
    tmp.push(".tmp");
    let tmp = PathBuf::from(tmp);

    std::fs::write(&tmp, content)
        .map_err(|e| format!("Failed to write {}: {e}", tmp.display()))?;
    std::fs::rename(&tmp, path)
        .map_err(|e| format!("Failed to move report into place at {}: {e}", path.display()))
}

/// Dump the raw records behind the top entries to stderr, one JSON object per
/// line. A debugging aid for eyeballing what the ranking actually ranked.
pub fn print_top_metadata(ranking: &[RankedEntry], records: &RawCatalog, count: usize) {
    for entry in ranking.iter().take(count) {
        if let Some(record) = records.get(&entry.appid) {
            match serde_json::to_string(record) {
                Ok(json) => eprintln!("{json}"),
                Err(e) => eprintln!("<unserializable record for appid {}: {e}>", entry.appid),
            }
        }
    }
}
