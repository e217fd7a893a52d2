//! Configuration types for proxy-list-updater

use crate::error::{Error, Result};
use crate::types::Target;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::{Component, Path, PathBuf};
use std::time::Duration;
use url::Url;

/// Raw file root of the TheSpeedX/PROXY-List repository
pub const DEFAULT_BASE_URL: &str = "https://raw.githubusercontent.com/TheSpeedX/PROXY-List/master";

/// Remote source settings (where lists come from and how they are requested)
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SourceConfig {
    /// Display name of the upstream source, used in the report attribution
    #[serde(default = "default_source_name")]
    pub name: String,

    /// Homepage of the upstream source, linked from the report
    #[serde(default = "default_source_homepage")]
    pub homepage: String,

    /// Base URL that targets without an explicit `url` are resolved against
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Timeout for each HTTP request (default: 30 seconds)
    #[serde(default = "default_timeout", with = "duration_serde")]
    pub timeout: Duration,

    /// User-Agent header sent with each request
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            name: default_source_name(),
            homepage: default_source_homepage(),
            base_url: default_base_url(),
            timeout: default_timeout(),
            user_agent: default_user_agent(),
        }
    }
}

/// A single list to fetch, as written in the configuration file
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TargetConfig {
    /// Local filename, also used as the path segment when `url` is not set
    pub filename: String,

    /// Full URL of the list (default: `<base_url>/<filename>`)
    #[serde(default)]
    pub url: Option<String>,

    /// Protocol label shown in the report usage section
    pub label: String,

    /// Description shown in the report file list
    pub description: String,
}

impl TargetConfig {
    fn new(filename: &str, label: &str, description: &str) -> Self {
        Self {
            filename: filename.to_string(),
            url: None,
            label: label.to_string(),
            description: description.to_string(),
        }
    }
}

/// Where lists are written
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Directory that receives the list files and the report (default: current directory)
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            output_dir: default_output_dir(),
        }
    }
}

/// Report document settings
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Report filename, relative to the output directory (default: "README.md")
    #[serde(default = "default_report_file")]
    pub file: PathBuf,

    /// Top-level heading of the report (default: "Proxy Lists")
    #[serde(default = "default_report_title")]
    pub title: String,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            file: default_report_file(),
            title: default_report_title(),
        }
    }
}

/// Main configuration for [`ProxyListUpdater`](crate::ProxyListUpdater)
///
/// `Config::default()` reproduces the stock behavior: the HTTP, SOCKS4 and SOCKS5
/// lists from TheSpeedX/PROXY-List written to the current directory alongside a `README.md`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Config {
    /// Remote source settings
    #[serde(default)]
    pub source: SourceConfig,

    /// Lists to fetch, processed in order
    #[serde(default = "default_targets")]
    pub targets: Vec<TargetConfig>,

    /// Output location
    #[serde(default)]
    pub output: OutputConfig,

    /// Report document settings
    #[serde(default)]
    pub report: ReportConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source: SourceConfig::default(),
            targets: default_targets(),
            output: OutputConfig::default(),
            report: ReportConfig::default(),
        }
    }
}

impl Config {
    /// Load and validate a configuration from a JSON file
    ///
    /// Missing fields fall back to their defaults, so `{}` is a valid configuration.
    pub async fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = tokio::fs::read_to_string(path).await.map_err(|e| {
            Error::Io(std::io::Error::new(
                e.kind(),
                format!("Failed to read config file '{}': {}", path.display(), e),
            ))
        })?;

        let config: Config = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Check the configuration for values that would make a run meaningless or unsafe
    pub fn validate(&self) -> Result<()> {
        if self.source.timeout.is_zero() {
            return Err(Error::config(
                "timeout must be greater than zero",
                "source.timeout",
            ));
        }
        self.resolve_targets().map(|_| ())
    }

    /// Resolve the configured targets into their final (filename, URL) form
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if the list is empty, a filename is not a plain file name,
    /// filenames repeat, a target would overwrite the report, or a URL is not http(s).
    pub fn resolve_targets(&self) -> Result<Vec<Target>> {
        if self.targets.is_empty() {
            return Err(Error::config("at least one target is required", "targets"));
        }

        let report_name = self.report.file.as_os_str();
        let mut seen = HashSet::new();
        let mut targets = Vec::with_capacity(self.targets.len());

        for (i, target) in self.targets.iter().enumerate() {
            let key = format!("targets[{i}]");

            if !is_plain_file_name(&target.filename) {
                return Err(Error::config(
                    format!("'{}' is not a plain file name", target.filename),
                    format!("{key}.filename"),
                ));
            }
            if !seen.insert(target.filename.as_str()) {
                return Err(Error::config(
                    format!("duplicate target filename '{}'", target.filename),
                    format!("{key}.filename"),
                ));
            }
            if target.filename.as_str() == report_name {
                return Err(Error::config(
                    format!("'{}' collides with the report file", target.filename),
                    format!("{key}.filename"),
                ));
            }

            let raw = match &target.url {
                Some(url) => url.clone(),
                None => format!(
                    "{}/{}",
                    self.source.base_url.trim_end_matches('/'),
                    target.filename
                ),
            };
            let url = Url::parse(&raw)
                .map_err(|e| Error::config(format!("invalid URL '{raw}': {e}"), format!("{key}.url")))?;
            if !matches!(url.scheme(), "http" | "https") {
                return Err(Error::config(
                    format!("unsupported URL scheme '{}'", url.scheme()),
                    format!("{key}.url"),
                ));
            }

            targets.push(Target {
                filename: target.filename.clone(),
                url,
                label: target.label.clone(),
                description: target.description.clone(),
            });
        }

        Ok(targets)
    }

    /// Local path of a target file
    pub fn target_path(&self, filename: &str) -> PathBuf {
        self.output.output_dir.join(filename)
    }

    /// Local path of the report document
    pub fn report_path(&self) -> PathBuf {
        self.output.output_dir.join(&self.report.file)
    }
}

/// True for a single normal path component ("http.txt"), false for "", "..", "a/b", "/x"
fn is_plain_file_name(name: &str) -> bool {
    let mut components = Path::new(name).components();
    matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(c)), None) if c == name
    )
}

// Default value functions
fn default_source_name() -> String {
    "TheSpeedX/PROXY-List".to_string()
}

fn default_source_homepage() -> String {
    "https://github.com/TheSpeedX/PROXY-List".to_string()
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_timeout() -> Duration {
    Duration::from_secs(30)
}

fn default_user_agent() -> String {
    concat!("proxy-list-updater/", env!("CARGO_PKG_VERSION")).to_string()
}

fn default_targets() -> Vec<TargetConfig> {
    vec![
        TargetConfig::new("http.txt", "HTTP", "HTTP/HTTPS proxies"),
        TargetConfig::new("socks4.txt", "SOCKS4", "SOCKS4 proxies"),
        TargetConfig::new("socks5.txt", "SOCKS5", "SOCKS5 proxies"),
    ]
}

fn default_output_dir() -> PathBuf {
    PathBuf::from(".")
}

fn default_report_file() -> PathBuf {
    PathBuf::from("README.md")
}

fn default_report_title() -> String {
    "Proxy Lists".to_string()
}

// Duration serialization helper
mod duration_serde {
    use serde::{Deserialize, Deserializer, Serializer};
    use std::time::Duration;

    pub fn serialize<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u64(duration.as_secs())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        let secs = u64::deserialize(deserializer)?;
        Ok(Duration::from_secs(secs))
    }
}

// unwrap/expect are acceptable in tests for concise failure-on-error assertions
#[allow(clippy::unwrap_used, clippy::expect_used)]
#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write as _;

    fn config_error_key(err: Error) -> String {
        match err {
            Error::Config { key, .. } => key.unwrap_or_default(),
            other => panic!("expected Config error, got {other:?}"),
        }
    }

    #[test]
    fn default_targets_point_at_upstream_raw_files() {
        let targets = Config::default().resolve_targets().unwrap();
        let urls: Vec<_> = targets.iter().map(|t| t.url.as_str()).collect();
        assert_eq!(
            urls,
            vec![
                "https://raw.githubusercontent.com/TheSpeedX/PROXY-List/master/http.txt",
                "https://raw.githubusercontent.com/TheSpeedX/PROXY-List/master/socks4.txt",
                "https://raw.githubusercontent.com/TheSpeedX/PROXY-List/master/socks5.txt",
            ]
        );
        assert_eq!(Config::default().source.timeout, Duration::from_secs(30));
    }

    #[test]
    fn empty_json_uses_defaults() {
        let config: Config = serde_json::from_str("{}").unwrap();
        assert_eq!(config.targets.len(), 3);
        assert_eq!(config.report_path(), PathBuf::from("./README.md"));
        assert_eq!(config.target_path("http.txt"), PathBuf::from("./http.txt"));
        config.validate().unwrap();
    }

    #[test]
    fn timeout_is_read_as_seconds() {
        let config: Config =
            serde_json::from_str(r#"{ "source": { "timeout": 5 } }"#).unwrap();
        assert_eq!(config.source.timeout, Duration::from_secs(5));
        assert_eq!(config.source.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn explicit_url_overrides_base_url() {
        let mut config = Config::default();
        config.targets[0].url = Some("http://mirror.local/lists/h.txt".into());
        let targets = config.resolve_targets().unwrap();
        assert_eq!(targets[0].url.as_str(), "http://mirror.local/lists/h.txt");
        assert_eq!(targets[0].filename, "http.txt");
    }

    #[test]
    fn base_url_trailing_slash_is_tolerated() {
        let mut config = Config::default();
        config.source.base_url = "http://mirror.local/lists/".into();
        let targets = config.resolve_targets().unwrap();
        assert_eq!(targets[1].url.as_str(), "http://mirror.local/lists/socks4.txt");
    }

    #[test]
    fn rejects_empty_target_list() {
        let mut config = Config::default();
        config.targets.clear();
        assert_eq!(config_error_key(config.validate().unwrap_err()), "targets");
    }

    #[test]
    fn rejects_path_like_filenames() {
        for bad in ["", "..", "lists/http.txt", "/etc/passwd", "./http.txt"] {
            let mut config = Config::default();
            config.targets[0].filename = bad.into();
            let err = config.validate().unwrap_err();
            assert_eq!(config_error_key(err), "targets[0].filename", "accepted {bad:?}");
        }
    }

    #[test]
    fn rejects_duplicate_filenames() {
        let mut config = Config::default();
        config.targets[2].filename = "http.txt".into();
        assert_eq!(
            config_error_key(config.validate().unwrap_err()),
            "targets[2].filename"
        );
    }

    #[test]
    fn rejects_target_named_like_report() {
        let mut config = Config::default();
        config.targets[1].filename = "README.md".into();
        assert_eq!(
            config_error_key(config.validate().unwrap_err()),
            "targets[1].filename"
        );
    }

    #[test]
    fn rejects_non_http_urls_and_zero_timeout() {
        let mut config = Config::default();
        config.targets[0].url = Some("ftp://example.com/http.txt".into());
        assert_eq!(config_error_key(config.validate().unwrap_err()), "targets[0].url");

        let mut config = Config::default();
        config.targets[0].url = Some("not a url".into());
        assert_eq!(config_error_key(config.validate().unwrap_err()), "targets[0].url");

        let mut config = Config::default();
        config.source.timeout = Duration::ZERO;
        assert_eq!(config_error_key(config.validate().unwrap_err()), "source.timeout");
    }

    #[tokio::test]
    async fn load_reads_json_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(
            br#"{
                "source": { "timeout": 10, "base_url": "http://127.0.0.1:9/raw" },
                "targets": [
                    { "filename": "http.txt", "label": "HTTP", "description": "HTTP proxies" }
                ],
                "output": { "output_dir": "lists" },
                "report": { "title": "Mirror" }
            }"#,
        )
        .unwrap();

        let config = Config::load(file.path()).await.unwrap();
        assert_eq!(config.source.timeout, Duration::from_secs(10));
        assert_eq!(config.targets.len(), 1);
        assert_eq!(config.target_path("http.txt"), PathBuf::from("lists/http.txt"));
        assert_eq!(config.report.title, "Mirror");
        assert_eq!(config.report.file, PathBuf::from("README.md"));
    }

    #[tokio::test]
    async fn load_reports_missing_file_as_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = Config::load(dir.path().join("absent.json")).await.unwrap_err();
        match err {
            Error::Io(e) => {
                assert_eq!(e.kind(), std::io::ErrorKind::NotFound);
                assert!(e.to_string().contains("absent.json"));
            }
            other => panic!("expected Io error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn load_rejects_invalid_json_and_invalid_values() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"{ not json").unwrap();
        assert!(matches!(
            Config::load(file.path()).await.unwrap_err(),
            Error::Serialization(_)
        ));

        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(br#"{ "targets": [] }"#).unwrap();
        assert!(matches!(
            Config::load(file.path()).await.unwrap_err(),
            Error::Config { .. }
        ));
    }
}
