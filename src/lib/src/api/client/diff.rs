use reqwest::Client;

use crate::config::RemoteConfig;
use crate::error::TimelineError;
use crate::model::{DiffRequest, DiffResult};
use crate::view::diff::{DiffRequestBody, DiffResponse};

/// Posts one assembled request to the diff service. Stateless: any non-2xx
/// or network failure is an `Api` error, reported to the caller and never
/// retried. A 404 from this service is a service failure, not a missing
/// resource.
pub async fn request_diff(
    client: &Client,
    config: &RemoteConfig,
    request: &DiffRequest,
) -> Result<DiffResult, TimelineError> {
    let url = &config.diff_url;
    log::debug!(
        "api::client::diff::request_diff {} model {}",
        url,
        request.model_name
    );

    let body = DiffRequestBody::from(request);
    let res = client.post(url).json(&body).send().await?;
    let status = res.status();
    let body = res.text().await?;
    if !status.is_success() {
        log::debug!("request_diff err status {status} body {body}");
        return Err(TimelineError::api_error(status, url));
    }

    let response: Result<DiffResponse, serde_json::Error> = serde_json::from_str(&body);
    match response {
        Ok(diff) => Ok(DiffResult::from(diff)),
        Err(err) => Err(TimelineError::basic_str(format!(
            "request_diff() Could not deserialize response [{err}]\n{body}"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::client;

    fn request() -> DiffRequest {
        DiffRequest {
            model_name: "models/m.ecore".to_string(),
            from_model_content: "<old/>".to_string(),
            to_model_content: "<new/>".to_string(),
            schema_contents: vec!["<schema/>".to_string()],
        }
    }

    #[tokio::test]
    async fn test_request_diff() -> Result<(), TimelineError> {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/api/diff")
            .match_body(mockito::Matcher::Json(serde_json::json!({
                "modelName": "models/m.ecore",
                "fromModel": "<old/>",
                "toModel": "<new/>",
                "metamodels": ["<schema/>"]
            })))
            .with_body(
                serde_json::json!({
                    "diff": "-<old/>\n+<new/>",
                    "textual-munidiff": "replaced old with new",
                    "graphical-munidiff": "<svg/>"
                })
                .to_string(),
            )
            .create_async()
            .await;

        let config = RemoteConfig {
            diff_url: format!("{}/api/diff", server.url()),
            ..RemoteConfig::default()
        };
        let client = client::new_for_config(None)?;

        let result = request_diff(&client, &config, &request()).await?;
        assert_eq!(result.textual_diff, "-<old/>\n+<new/>");
        assert_eq!(result.structured_textual_diff, "replaced old with new");
        assert_eq!(result.graphical_diff_markup, "<svg/>");
        mock.assert_async().await;
        Ok(())
    }

    #[tokio::test]
    async fn test_request_diff_failure_is_api_error() -> Result<(), TimelineError> {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/api/diff")
            .with_status(500)
            .create_async()
            .await;

        let config = RemoteConfig {
            diff_url: format!("{}/api/diff", server.url()),
            ..RemoteConfig::default()
        };
        let client = client::new_for_config(None)?;

        let err = request_diff(&client, &config, &request()).await.unwrap_err();
        assert!(matches!(err, TimelineError::Api(_)));
        mock.assert_async().await;
        Ok(())
    }
}
