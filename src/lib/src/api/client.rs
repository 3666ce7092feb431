//! # API Client - For interacting with repositories on a remote host
//!

use reqwest::{header, Client, ClientBuilder};
use std::time;

use crate::constants;
use crate::error::TimelineError;

pub mod auth;
pub mod commits;
pub mod contents;
pub mod diff;
pub mod timeline;

const USER_AGENT: &str = "munitime";

/// Builds the one HTTP client a session uses for every call. When a bearer
/// token is supplied it is installed as a sensitive default header, so the
/// token service is consulted once per session rather than once per request.
pub fn new_for_config(bearer_token: Option<&str>) -> Result<Client, TimelineError> {
    let mut builder = builder();

    if let Some(token) = bearer_token {
        let auth_header = format!("Bearer {token}");
        let mut auth_value = match header::HeaderValue::from_str(auth_header.as_str()) {
            Ok(header) => header,
            Err(err) => {
                log::debug!("api::client::new_for_config invalid header value: {}", err);
                return Err(TimelineError::basic_str(
                    "Error setting request auth. Please check your token service response.",
                ));
            }
        };
        auth_value.set_sensitive(true);
        let mut headers = header::HeaderMap::new();
        headers.insert(header::AUTHORIZATION, auth_value);
        builder = builder.default_headers(headers);
    } else {
        log::trace!("No bearer token, running anonymously");
    }

    match builder
        .timeout(time::Duration::from_secs(constants::DEFAULT_TIMEOUT_SECS))
        .build()
    {
        Ok(client) => Ok(client),
        Err(reqwest_err) => Err(TimelineError::HTTP(reqwest_err)),
    }
}

fn builder() -> ClientBuilder {
    Client::builder().user_agent(format!(
        "{USER_AGENT}/{}",
        constants::MUNITIME_VERSION
    ))
}

/// Maps the response status into the error taxonomy and returns the body
/// text on success. 404 becomes `ResourceNotFound` so call sites with domain
/// knowledge of whether absence is meaningful can absorb it; any other
/// non-2xx (including rate limiting) is an `Api` error with its status.
pub async fn body_for_url(url: &str, res: reqwest::Response) -> Result<String, TimelineError> {
    let status = res.status();
    let body = res.text().await?;
    log::debug!("url: {url}\nstatus: {status}\nbody: {body}");

    if status == reqwest::StatusCode::NOT_FOUND {
        return Err(TimelineError::resource_not_found(url));
    }
    if !status.is_success() {
        return Err(TimelineError::api_error(status, url));
    }
    Ok(body)
}
