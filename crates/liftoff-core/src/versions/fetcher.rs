//! Latest-version lookup against the Maven Central search index

use super::compare::{compare_versions, is_stable};
use super::Artifact;
use crate::config::GeneratorConfig;
use crate::error::VersionError;
use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;
use url::Url;

/// Request timeout for a single lookup
pub const FETCH_TIMEOUT: Duration = Duration::from_secs(30);

/// Anything that can answer "what is the newest release of this artifact"
#[async_trait]
pub trait VersionSource: Send + Sync {
    async fn latest_version(&self, artifact: &Artifact) -> Result<String, VersionError>;
}

/// Queries the Solr search API that backs search.maven.org
pub struct MavenCentralSource {
    base: Url,
    client: reqwest::Client,
}

impl MavenCentralSource {
    pub fn new(base: Url, user_agent: &str) -> Self {
        Self {
            base,
            client: reqwest::Client::builder()
                .user_agent(user_agent)
                .timeout(FETCH_TIMEOUT)
                .build()
                .unwrap_or_else(|_| reqwest::Client::new()),
        }
    }

    pub fn from_config(config: &GeneratorConfig) -> Self {
        Self::new(config.repository_url.clone(), config.user_agent())
    }

    /// Build the search URL for every published version of an artifact
    fn build_url(&self, artifact: &Artifact) -> Url {
        let mut url = self.base.clone();
        url.query_pairs_mut()
            .append_pair(
                "q",
                &format!("g:\"{}\" AND a:\"{}\"", artifact.group, artifact.name),
            )
            .append_pair("core", "gav")
            .append_pair("rows", "100")
            .append_pair("wt", "json");
        url
    }
}

#[async_trait]
impl VersionSource for MavenCentralSource {
    async fn latest_version(&self, artifact: &Artifact) -> Result<String, VersionError> {
        if !artifact.is_searchable() {
            return Err(VersionError::Unsupported(artifact.key()));
        }

        let url = self.build_url(artifact);
        tracing::debug!(%url, "querying package index");
        let response = self.client.get(url).send().await?;
        if !response.status().is_success() {
            return Err(VersionError::Status(response.status().as_u16()));
        }

        let body = response.bytes().await?;
        parse_latest_stable(&body, artifact)
    }
}

#[derive(Deserialize)]
struct SolrResponse {
    response: SolrBody,
}

#[derive(Deserialize)]
struct SolrBody {
    #[serde(default)]
    docs: Vec<VersionDoc>,
}

#[derive(Deserialize)]
struct VersionDoc {
    #[serde(rename = "v")]
    version: String,
}

/// Pick the newest stable version out of a search response
fn parse_latest_stable(data: &[u8], artifact: &Artifact) -> Result<String, VersionError> {
    let response: SolrResponse = serde_json::from_slice(data)?;
    response
        .response
        .docs
        .into_iter()
        .map(|d| d.version)
        .filter(|v| is_stable(v))
        .max_by(|a, b| compare_versions(a, b))
        .ok_or_else(|| VersionError::NotFound(artifact.key()))
}

#[cfg(test)]
mod tests {
    use super::*;

    const SHAPE_DRAWER: Artifact = Artifact::maven("space.earlygrey", "shapedrawer");

    #[test]
    fn test_parse_picks_newest_stable() {
        let json = r#"{
            "response": {
                "numFound": 4,
                "docs": [
                    {"g": "space.earlygrey", "a": "shapedrawer", "v": "2.5.0"},
                    {"g": "space.earlygrey", "a": "shapedrawer", "v": "2.7.0-SNAPSHOT"},
                    {"g": "space.earlygrey", "a": "shapedrawer", "v": "2.6.0"},
                    {"g": "space.earlygrey", "a": "shapedrawer", "v": "2.10.0-rc1"}
                ]
            }
        }"#;

        let version = parse_latest_stable(json.as_bytes(), &SHAPE_DRAWER).unwrap();
        assert_eq!(version, "2.6.0");
    }

    #[test]
    fn test_parse_picks_highest_ktx_revision() {
        let json = r#"{
            "response": {
                "numFound": 3,
                "docs": [
                    {"g": "io.github.libktx", "a": "ktx-app", "v": "1.12.1-rev2"},
                    {"g": "io.github.libktx", "a": "ktx-app", "v": "1.12.1-rev10"},
                    {"g": "io.github.libktx", "a": "ktx-app", "v": "1.12.1"}
                ]
            }
        }"#;

        let ktx = Artifact::maven("io.github.libktx", "ktx-app");
        let version = parse_latest_stable(json.as_bytes(), &ktx).unwrap();
        assert_eq!(version, "1.12.1-rev10");
    }

    #[test]
    fn test_parse_empty_is_not_found() {
        let json = r#"{"response": {"numFound": 0, "docs": []}}"#;
        let err = parse_latest_stable(json.as_bytes(), &SHAPE_DRAWER).unwrap_err();
        assert!(matches!(err, VersionError::NotFound(_)));
    }

    #[test]
    fn test_parse_garbage_is_parse_error() {
        let err = parse_latest_stable(b"<html>", &SHAPE_DRAWER).unwrap_err();
        assert!(matches!(err, VersionError::Parse(_)));
    }

    #[test]
    fn test_build_url_preserves_base_and_adds_query() {
        let base = Url::parse("https://search.maven.org/solrsearch/select").unwrap();
        let source = MavenCentralSource::new(base, "liftoff-test");
        let url = source.build_url(&SHAPE_DRAWER);

        assert_eq!(url.path(), "/solrsearch/select");
        let query: Vec<(String, String)> = url.query_pairs().into_owned().collect();
        assert!(query.contains(&(
            "q".to_string(),
            "g:\"space.earlygrey\" AND a:\"shapedrawer\"".to_string()
        )));
        assert!(query.contains(&("core".to_string(), "gav".to_string())));
    }

    #[tokio::test]
    async fn test_jitpack_artifacts_are_unsupported() {
        let base = Url::parse("https://search.maven.org/solrsearch/select").unwrap();
        let source = MavenCentralSource::new(base, "liftoff-test");
        let artifact = Artifact::jitpack("com.github.payne911", "PieMenu");

        let err = source.latest_version(&artifact).await.unwrap_err();
        assert!(matches!(err, VersionError::Unsupported(_)));
    }
}
