use reqwest::Client;

use crate::api::client::contents;
use crate::config::RemoteConfig;
use crate::constants::TIMELINE_CONFIG_FILENAME;
use crate::error::TimelineError;
use crate::model::{RepoReference, TimelineConfig};
use crate::view::timeline::TimelineConfigFile;

/// Resolves the per-repository configuration from `timeline.json` at the
/// given revision. A repository without the file is a normal, supported
/// case and yields the built-in defaults; a file that exists but does not
/// parse halts the pipeline for this repository.
pub async fn resolve_timeline(
    client: &Client,
    config: &RemoteConfig,
    reference: &RepoReference,
    revision: Option<&str>,
) -> Result<TimelineConfig, TimelineError> {
    let raw = match contents::get_file_content(
        client,
        config,
        reference,
        TIMELINE_CONFIG_FILENAME,
        revision,
    )
    .await
    {
        Ok(raw) => raw,
        Err(err) if err.is_not_found() => {
            log::debug!(
                "no {} in {}, using built-in defaults",
                TIMELINE_CONFIG_FILENAME,
                reference.slug()
            );
            return Ok(TimelineConfig::default());
        }
        Err(err) => return Err(err),
    };

    let file: Result<TimelineConfigFile, serde_json::Error> = serde_json::from_str(&raw);
    match file {
        Ok(file) => Ok(TimelineConfig::from_file(file)),
        Err(err) => Err(TimelineError::api_msg(format!(
            "resolve_timeline() Malformed {TIMELINE_CONFIG_FILENAME} [{err}]\n{raw}"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::client;
    use base64::{engine::general_purpose, Engine as _};

    fn content_body(text: &str) -> String {
        serde_json::json!({
            "path": "timeline.json",
            "content": general_purpose::STANDARD.encode(text),
            "encoding": "base64"
        })
        .to_string()
    }

    fn test_config(server: &mockito::Server) -> RemoteConfig {
        RemoteConfig {
            api_url: server.url(),
            ..RemoteConfig::default()
        }
    }

    #[tokio::test]
    async fn test_resolve_timeline_missing_file_is_defaults() -> Result<(), TimelineError> {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/repos/acme/shapes/contents/timeline.json")
            .with_status(404)
            .create_async()
            .await;

        let config = test_config(&server);
        let reference = RepoReference::parse("https://github.com/acme/shapes")?;
        let client = client::new_for_config(None)?;

        let timeline = resolve_timeline(&client, &config, &reference, None).await?;
        assert_eq!(
            timeline.model_extensions,
            TimelineConfig::builtin_extensions()
        );
        assert!(timeline.schema_files.is_empty());
        mock.assert_async().await;
        Ok(())
    }

    #[tokio::test]
    async fn test_resolve_timeline_merges_config() -> Result<(), TimelineError> {
        let mut server = mockito::Server::new_async().await;
        let file = serde_json::json!({
            "model_extensions": ["rel"],
            "metamodels": ["metamodels/families.ecore"]
        })
        .to_string();
        let mock = server
            .mock("GET", "/repos/acme/shapes/contents/timeline.json")
            .match_query(mockito::Matcher::UrlEncoded("ref".into(), "c2".into()))
            .with_body(content_body(&file))
            .create_async()
            .await;

        let config = test_config(&server);
        let reference = RepoReference::parse("https://github.com/acme/shapes")?;
        let client = client::new_for_config(None)?;

        let timeline = resolve_timeline(&client, &config, &reference, Some("c2")).await?;
        assert!(timeline.model_extensions.contains("rel"));
        assert!(timeline.model_extensions.contains("ecore"));
        assert_eq!(timeline.schema_files, vec!["metamodels/families.ecore"]);
        mock.assert_async().await;
        Ok(())
    }

    #[tokio::test]
    async fn test_resolve_timeline_malformed_is_api_error() -> Result<(), TimelineError> {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/repos/acme/shapes/contents/timeline.json")
            .with_body(content_body("{ not json"))
            .create_async()
            .await;

        let config = test_config(&server);
        let reference = RepoReference::parse("https://github.com/acme/shapes")?;
        let client = client::new_for_config(None)?;

        let err = resolve_timeline(&client, &config, &reference, None)
            .await
            .unwrap_err();
        assert!(matches!(err, TimelineError::Api(_)));
        mock.assert_async().await;
        Ok(())
    }
}
