use reqwest::Client;

use crate::api::client;
use crate::config::RemoteConfig;
use crate::error::TimelineError;

/// Builds the session's HTTP client, consulting the token service once.
/// Token acquisition failures are absorbed: the session proceeds with
/// anonymous access and whatever rate limits that implies.
pub async fn acquire_client(config: &RemoteConfig) -> Result<Client, TimelineError> {
    let token = fetch_token(config).await;
    client::new_for_config(token.as_deref())
}

/// One GET against the configured token service. Any failure (network,
/// non-2xx, empty body) yields `None`.
pub async fn fetch_token(config: &RemoteConfig) -> Option<String> {
    let token_url = config.token_url.as_ref()?;
    match try_fetch_token(token_url).await {
        Ok(token) if !token.is_empty() => Some(token),
        Ok(_) => {
            log::debug!("token service returned an empty token, continuing anonymously");
            None
        }
        Err(err) => {
            log::debug!("token service unavailable, continuing anonymously: {err}");
            None
        }
    }
}

async fn try_fetch_token(token_url: &str) -> Result<String, TimelineError> {
    let client = client::new_for_config(None)?;
    let res = client.get(token_url).send().await?;
    let status = res.status();
    if !status.is_success() {
        return Err(TimelineError::auth_failure(format!(
            "token service returned status [{status}]"
        )));
    }
    Ok(res.text().await?.trim().to_string())
}
