//! Test configuration helpers: temp output directories and JSON config files

use proxy_list_updater::Config;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tempfile::TempDir;

/// Build a default config that fetches from `base_url` and writes into `output_dir`
pub fn config_for(base_url: &str, output_dir: &Path, timeout: Duration) -> Config {
    let mut config = Config::default();
    config.source.base_url = base_url.to_string();
    config.source.timeout = timeout;
    config.output.output_dir = output_dir.to_path_buf();
    config
}

/// Write a JSON config file pointing at `base_url` into `dir`, returning its path
///
/// The output directory is left at its default so callers can pass `--output-dir`.
pub fn write_config_file(dir: &TempDir, base_url: &str, timeout_secs: u64) -> PathBuf {
    let path = dir.path().join("updater.json");
    let json = serde_json::json!({
        "source": { "base_url": base_url, "timeout": timeout_secs },
    });
    std::fs::write(&path, serde_json::to_vec_pretty(&json).unwrap()).unwrap();
    path
}
