use crate::config::RemoteConfig;
use crate::model::RepoReference;

pub fn url_from_repo(
    config: &RemoteConfig,
    reference: &RepoReference,
    uri: impl AsRef<str>,
) -> String {
    format!(
        "{}/repos/{}/{}{}",
        config.api_url.trim_end_matches('/'),
        reference.owner,
        reference.name,
        uri.as_ref()
    )
}

/// Contents endpoint for a repository-relative path, pinned to a revision
/// when one is given (otherwise the host serves the default branch head).
pub fn contents_url(
    config: &RemoteConfig,
    reference: &RepoReference,
    path: &str,
    revision: Option<&str>,
) -> String {
    let uri = match revision {
        Some(revision) => format!("/contents/{path}?ref={revision}"),
        None => format!("/contents/{path}"),
    };
    url_from_repo(config, reference, uri)
}
