use reqwest::Client;

use crate::api::client;
use crate::api::endpoint;
use crate::config::RemoteConfig;
use crate::error::TimelineError;
use crate::model::{Commit, CommitDetail, RepoReference};
use crate::view::commits::{CommitDetailResponse, CommitEntryResponse};

/// Lists one page of commits, newest first, as returned by the host.
pub async fn list_commits(
    client: &Client,
    config: &RemoteConfig,
    reference: &RepoReference,
) -> Result<Vec<Commit>, TimelineError> {
    let uri = format!("/commits?per_page={}", config.page_size);
    let url = endpoint::url_from_repo(config, reference, &uri);
    log::debug!("api::client::commits::list_commits {}", url);

    let res = client.get(&url).send().await?;
    let body = client::body_for_url(&url, res).await?;
    let response: Result<Vec<CommitEntryResponse>, serde_json::Error> =
        serde_json::from_str(&body);
    match response {
        Ok(entries) => Ok(entries.into_iter().map(Commit::from).collect()),
        Err(err) => Err(TimelineError::basic_str(format!(
            "list_commits() Could not deserialize response [{err}]\n{body}"
        ))),
    }
}

/// One commit with its parent links and changed-file list.
pub async fn get_commit(
    client: &Client,
    config: &RemoteConfig,
    reference: &RepoReference,
    sha: &str,
) -> Result<CommitDetail, TimelineError> {
    let uri = format!("/commits/{sha}");
    let url = endpoint::url_from_repo(config, reference, &uri);
    log::debug!("api::client::commits::get_commit {}", url);

    let res = client.get(&url).send().await?;
    let body = client::body_for_url(&url, res).await?;
    let response: Result<CommitDetailResponse, serde_json::Error> = serde_json::from_str(&body);
    match response {
        Ok(detail) => Ok(CommitDetail::from(detail)),
        Err(err) => Err(TimelineError::basic_str(format!(
            "get_commit() Could not deserialize response [{err}]\n{body}"
        ))),
    }
}

/// The single logical predecessor to diff against, or `None` for a root
/// commit. Merge commits always resolve to the first parent: the mainline
/// ancestor. Diff results for merges depend on this policy.
pub async fn first_parent(
    client: &Client,
    config: &RemoteConfig,
    reference: &RepoReference,
    sha: &str,
) -> Result<Option<String>, TimelineError> {
    let detail = get_commit(client, config, reference, sha).await?;
    Ok(detail.commit.parent_shas.first().cloned())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn commit_json(sha: &str, parents: &[&str]) -> serde_json::Value {
        serde_json::json!({
            "sha": sha,
            "html_url": format!("https://github.com/acme/shapes/commit/{sha}"),
            "commit": {
                "message": format!("commit {sha}"),
                "author": { "name": "Ada", "date": "2024-05-06T10:00:00Z" }
            },
            "author": { "login": "ada", "avatar_url": "https://avatars.example/ada" },
            "parents": parents.iter().map(|p| serde_json::json!({ "sha": p })).collect::<Vec<_>>()
        })
    }

    fn test_config(server: &mockito::Server) -> RemoteConfig {
        RemoteConfig {
            api_url: server.url(),
            ..RemoteConfig::default()
        }
    }

    #[tokio::test]
    async fn test_list_commits() -> Result<(), TimelineError> {
        let mut server = mockito::Server::new_async().await;
        let body = serde_json::json!([commit_json("c2", &["c1"]), commit_json("c1", &[])]);
        let mock = server
            .mock("GET", "/repos/acme/shapes/commits")
            .match_query(mockito::Matcher::UrlEncoded(
                "per_page".into(),
                "100".into(),
            ))
            .with_body(body.to_string())
            .create_async()
            .await;

        let config = test_config(&server);
        let reference = RepoReference::parse("https://github.com/acme/shapes")?;
        let client = client::new_for_config(None)?;

        let commits = list_commits(&client, &config, &reference).await?;
        assert_eq!(commits.len(), 2);
        assert_eq!(commits[0].sha, "c2");
        assert_eq!(commits[0].parent_shas, vec!["c1"]);
        assert_eq!(commits[1].sha, "c1");
        mock.assert_async().await;
        Ok(())
    }

    #[tokio::test]
    async fn test_get_commit_changed_files() -> Result<(), TimelineError> {
        let mut server = mockito::Server::new_async().await;
        let mut body = commit_json("c2", &["c1"]);
        body["files"] = serde_json::json!([
            { "filename": "models/m.ecore", "status": "modified" },
            { "filename": "README.md", "status": "modified" }
        ]);
        let mock = server
            .mock("GET", "/repos/acme/shapes/commits/c2")
            .with_body(body.to_string())
            .create_async()
            .await;

        let config = test_config(&server);
        let reference = RepoReference::parse("https://github.com/acme/shapes")?;
        let client = client::new_for_config(None)?;

        let detail = get_commit(&client, &config, &reference, "c2").await?;
        assert_eq!(detail.commit.sha, "c2");
        assert_eq!(detail.changed_files, vec!["models/m.ecore", "README.md"]);
        mock.assert_async().await;
        Ok(())
    }

    #[tokio::test]
    async fn test_first_parent_of_root_commit() -> Result<(), TimelineError> {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/repos/acme/shapes/commits/c1")
            .with_body(commit_json("c1", &[]).to_string())
            .create_async()
            .await;

        let config = test_config(&server);
        let reference = RepoReference::parse("https://github.com/acme/shapes")?;
        let client = client::new_for_config(None)?;

        assert_eq!(first_parent(&client, &config, &reference, "c1").await?, None);
        mock.assert_async().await;
        Ok(())
    }

    #[tokio::test]
    async fn test_first_parent_of_merge_commit() -> Result<(), TimelineError> {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/repos/acme/shapes/commits/m1")
            .with_body(commit_json("m1", &["mainline", "feature"]).to_string())
            .create_async()
            .await;

        let config = test_config(&server);
        let reference = RepoReference::parse("https://github.com/acme/shapes")?;
        let client = client::new_for_config(None)?;

        // first parent unconditionally, the branch that received the merge
        assert_eq!(
            first_parent(&client, &config, &reference, "m1").await?,
            Some("mainline".to_string())
        );
        mock.assert_async().await;
        Ok(())
    }

    #[tokio::test]
    async fn test_get_commit_not_found() -> Result<(), TimelineError> {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/repos/acme/shapes/commits/nope")
            .with_status(404)
            .create_async()
            .await;

        let config = test_config(&server);
        let reference = RepoReference::parse("https://github.com/acme/shapes")?;
        let client = client::new_for_config(None)?;

        let err = get_commit(&client, &config, &reference, "nope")
            .await
            .unwrap_err();
        assert!(err.is_not_found());
        mock.assert_async().await;
        Ok(())
    }
}
