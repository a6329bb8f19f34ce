//! Environment-driven settings for a generation run

use crate::error::{GenerationError, Result};
use std::path::PathBuf;
use url::Url;

/// Environment variables that may point at an Android SDK, in order of preference
const ANDROID_SDK_VARS: &[&str] = &["ANDROID_SDK_ROOT", "ANDROID_HOME"];

pub const OUTPUT_DIR_ENV: &str = "LIFTOFF_OUTPUT_DIR";
pub const REPOSITORY_URL_ENV: &str = "LIFTOFF_REPOSITORY_URL";
pub const OFFLINE_ENV: &str = "LIFTOFF_OFFLINE";
pub const RESOURCES_DIR_ENV: &str = "LIFTOFF_RESOURCES_DIR";
pub const GRADLE_TASKS_ENV: &str = "LIFTOFF_GRADLE_TASKS";

const DEFAULT_REPOSITORY_URL: &str = "https://search.maven.org/solrsearch/select";
const DEFAULT_OUTPUT_DIR: &str = "liftoff-sample";

/// Detect the Android SDK location from the environment
pub fn detect_android_sdk() -> Option<PathBuf> {
    ANDROID_SDK_VARS
        .iter()
        .filter_map(|var| std::env::var(var).ok())
        .find(|value| !value.trim().is_empty())
        .map(PathBuf::from)
}

/// Settings shared by every generation in one process
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Directory under which presets are generated
    pub output_root: PathBuf,

    /// Default SDK path written to `local.properties`
    pub android_sdk: Option<PathBuf>,

    /// Package index search endpoint
    pub repository_url: Url,

    /// Skip the version prefetch and use built-in versions
    pub offline: bool,

    /// Directory holding the bundled skin and logo
    pub resources_dir: PathBuf,

    /// Gradle tasks to run after generation, overriding the selection
    pub gradle_tasks: Option<Vec<String>>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            output_root: PathBuf::from(DEFAULT_OUTPUT_DIR),
            android_sdk: None,
            repository_url: Url::parse(DEFAULT_REPOSITORY_URL).expect("default repository URL is valid"),
            offline: false,
            resources_dir: bundled_resources_dir(),
            gradle_tasks: None,
        }
    }
}

impl GeneratorConfig {
    /// Build the configuration from environment variables
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();

        if let Ok(dir) = std::env::var(OUTPUT_DIR_ENV) {
            config.output_root = PathBuf::from(dir);
        }
        config.android_sdk = detect_android_sdk();

        if let Ok(url_str) = std::env::var(REPOSITORY_URL_ENV) {
            config.repository_url = Url::parse(&url_str).map_err(|e| {
                GenerationError::Config(format!("invalid {REPOSITORY_URL_ENV} '{url_str}': {e}"))
            })?;
        }

        config.offline = std::env::var(OFFLINE_ENV)
            .map(|v| matches!(v.to_ascii_lowercase().as_str(), "1" | "true" | "yes"))
            .unwrap_or(false);

        if let Ok(dir) = std::env::var(RESOURCES_DIR_ENV) {
            config.resources_dir = PathBuf::from(dir);
        }

        if let Ok(tasks) = std::env::var(GRADLE_TASKS_ENV) {
            config.gradle_tasks = Some(parse_task_list(&tasks));
        }

        Ok(config)
    }

    /// User agent string for HTTP requests
    pub fn user_agent(&self) -> &'static str {
        concat!("gdx-liftoff/", env!("CARGO_PKG_VERSION"))
    }
}

/// Resources shipped next to this crate's sources
pub fn bundled_resources_dir() -> PathBuf {
    PathBuf::from(concat!(env!("CARGO_MANIFEST_DIR"), "/resources"))
}

fn parse_task_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(String::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_task_list_skips_blanks() {
        assert_eq!(
            parse_task_list("idea, lwjgl3:run,,"),
            vec!["idea".to_string(), "lwjgl3:run".to_string()]
        );
        assert!(parse_task_list("").is_empty());
    }

    #[test]
    fn test_default_config_points_at_maven_central() {
        let config = GeneratorConfig::default();
        assert_eq!(config.repository_url.host_str(), Some("search.maven.org"));
        assert!(!config.offline);
        assert!(config.resources_dir.ends_with("resources"));
    }
}
