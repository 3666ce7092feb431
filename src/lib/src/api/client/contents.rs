use base64::{engine::general_purpose, Engine as _};
use reqwest::Client;

use crate::api::client;
use crate::api::endpoint;
use crate::config::RemoteConfig;
use crate::error::TimelineError;
use crate::model::RepoReference;
use crate::view::contents::ContentEntryResponse;

/// Raw decoded text of a file at a revision. `ResourceNotFound` when the
/// file does not exist at that revision; whether that is an error is the
/// caller's call.
pub async fn get_file_content(
    client: &Client,
    config: &RemoteConfig,
    reference: &RepoReference,
    path: &str,
    revision: Option<&str>,
) -> Result<String, TimelineError> {
    let url = endpoint::contents_url(config, reference, path, revision);
    log::debug!("api::client::contents::get_file_content {}", url);

    let res = client.get(&url).send().await?;
    let body = client::body_for_url(&url, res).await?;
    let response: Result<ContentEntryResponse, serde_json::Error> = serde_json::from_str(&body);
    match response {
        Ok(entry) => decode_content(&entry),
        Err(err) => Err(TimelineError::basic_str(format!(
            "get_file_content() Could not deserialize response [{err}]\n{body}"
        ))),
    }
}

fn decode_content(entry: &ContentEntryResponse) -> Result<String, TimelineError> {
    if entry.encoding != "base64" {
        return Err(TimelineError::basic_str(format!(
            "Unsupported content encoding [{}] for {}",
            entry.encoding, entry.path
        )));
    }
    // the host wraps the payload in newlines
    let compact: String = entry
        .content
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect();
    let bytes = general_purpose::STANDARD.decode(compact)?;
    Ok(std::str::from_utf8(&bytes)?.to_string())
}
