use anyhow::{Context, Result};
use log::warn;
use serde::Deserialize;
use std::path::{Path, PathBuf};

fn default_labels() -> bool {
    true
}
fn default_simplify_buildings() -> bool {
    true
}
fn default_overpass_url() -> String {
    "https://overpass-api.de/api/interpreter".to_string()
}
fn default_timeout_secs() -> u64 {
    25
}

/// Optional TOML configuration file
#[derive(Debug, Deserialize)]
pub struct FileConfig {
    #[serde(default)]
    pub district: Option<String>,
    #[serde(default = "default_labels")]
    pub labels: bool,
    #[serde(default = "default_simplify_buildings")]
    pub simplify_buildings: bool,
    #[serde(default)]
    pub overpass: Option<OverpassConfig>,
}

impl Default for FileConfig {
    fn default() -> Self {
        Self {
            district: None,
            labels: default_labels(),
            simplify_buildings: default_simplify_buildings(),
            overpass: None,
        }
    }
}

/// Overpass endpoint settings
#[derive(Debug, Deserialize, Clone)]
pub struct OverpassConfig {
    #[serde(default = "default_overpass_url")]
    pub url: String,
    /// Server-side query timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for OverpassConfig {
    fn default() -> Self {
        Self {
            url: default_overpass_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

/// Resolved runtime settings handed to the app
#[derive(Debug, Clone)]
pub struct Settings {
    pub show_labels: bool,
    pub simplify_buildings: bool,
    pub overpass: OverpassConfig,
}

impl FileConfig {
    /// Load from an explicit path, failing on read or parse errors
    pub fn from_path(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {:?}", path))?;
        toml::from_str(&contents)
            .with_context(|| format!("failed to parse config file {:?}", path))
    }

    /// Search the usual locations, taking the first file that parses
    pub fn load() -> Option<Self> {
        for path in get_config_paths() {
            if path.exists()
                && let Ok(contents) = std::fs::read_to_string(&path)
            {
                match toml::from_str(&contents) {
                    Ok(config) => return Some(config),
                    Err(e) => {
                        warn!("failed to parse config file {:?}: {}", path, e);
                    }
                }
            }
        }
        None
    }
}

fn get_config_paths() -> Vec<PathBuf> {
    let mut paths = Vec::new();

    paths.push(PathBuf::from("duskmap.toml"));
    paths.push(PathBuf::from(".duskmap.toml"));

    if let Some(config_dir) = dirs::config_dir() {
        paths.push(config_dir.join("duskmap").join("config.toml"));
        paths.push(config_dir.join("duskmap.toml"));
    }

    if let Some(home) = dirs::home_dir() {
        paths.push(home.join(".duskmap.toml"));
        paths.push(home.join(".config").join("duskmap").join("config.toml"));
    }

    paths
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config: FileConfig = toml::from_str("").unwrap();
        assert!(config.district.is_none());
        assert!(config.labels);
        assert!(config.simplify_buildings);
        assert!(config.overpass.is_none());
    }

    #[test]
    fn test_overpass_table_partial() {
        let config: FileConfig = toml::from_str(
            r#"
            [overpass]
            timeout_secs = 40
            "#,
        )
        .unwrap();

        let overpass = config.overpass.unwrap();
        assert_eq!(overpass.timeout_secs, 40);
        assert_eq!(overpass.url, default_overpass_url());
    }

    #[test]
    fn test_from_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            "district = \"chinatown\"\nlabels = false\n\n[overpass]\nurl = \"http://localhost:8000/api/interpreter\"\n"
        )
        .unwrap();

        let config = FileConfig::from_path(file.path()).unwrap();
        assert_eq!(config.district.as_deref(), Some("chinatown"));
        assert!(!config.labels);
        assert!(config.simplify_buildings);
        assert_eq!(
            config.overpass.unwrap().url,
            "http://localhost:8000/api/interpreter"
        );
    }

    #[test]
    fn test_from_path_missing_file() {
        assert!(FileConfig::from_path(Path::new("/nonexistent/duskmap.toml")).is_err());
    }

    #[test]
    fn test_from_path_rejects_bad_toml() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "district = [not toml").unwrap();
        assert!(FileConfig::from_path(file.path()).is_err());
    }
}
