use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::model::{Commit, CommitDetail};

/// One entry of `GET /repos/{owner}/{repo}/commits`.
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct CommitEntryResponse {
    pub sha: String,
    pub html_url: String,
    pub commit: GitCommitInfo,
    pub author: Option<AccountInfo>,
    #[serde(default)]
    pub parents: Vec<ParentRef>,
}

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct GitCommitInfo {
    pub message: String,
    pub author: GitAuthorInfo,
}

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct GitAuthorInfo {
    pub name: String,
    #[serde(with = "time::serde::rfc3339")]
    pub date: OffsetDateTime,
}

/// The hosting account behind a commit; absent when the author has no
/// account on the host.
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct AccountInfo {
    pub login: String,
    pub avatar_url: String,
}

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct ParentRef {
    pub sha: String,
}

/// `GET /repos/{owner}/{repo}/commits/{sha}`: a commit entry plus the list
/// of files it changed.
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct CommitDetailResponse {
    #[serde(flatten)]
    pub entry: CommitEntryResponse,
    #[serde(default)]
    pub files: Vec<ChangedFileEntry>,
}

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct ChangedFileEntry {
    pub filename: String,
    pub status: Option<String>,
}

impl From<CommitEntryResponse> for Commit {
    fn from(entry: CommitEntryResponse) -> Commit {
        Commit {
            sha: entry.sha,
            parent_shas: entry.parents.into_iter().map(|parent| parent.sha).collect(),
            author_name: entry.commit.author.name,
            author_avatar_url: entry.author.map(|account| account.avatar_url),
            authored_at: entry.commit.author.date,
            message: entry.commit.message,
            html_url: entry.html_url,
        }
    }
}

impl From<CommitDetailResponse> for CommitDetail {
    fn from(response: CommitDetailResponse) -> CommitDetail {
        CommitDetail {
            changed_files: response
                .files
                .into_iter()
                .map(|file| file.filename)
                .collect(),
            commit: Commit::from(response.entry),
        }
    }
}
