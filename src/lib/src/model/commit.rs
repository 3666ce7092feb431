use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};
use time::OffsetDateTime;

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Commit {
    pub sha: String,
    pub parent_shas: Vec<String>,
    pub author_name: String,
    pub author_avatar_url: Option<String>,
    #[serde(with = "time::serde::rfc3339")]
    pub authored_at: OffsetDateTime,
    pub message: String,
    pub html_url: String,
}

// Hash on the sha field so we can quickly look up
impl PartialEq for Commit {
    fn eq(&self, other: &Commit) -> bool {
        self.sha == other.sha
    }
}
impl Eq for Commit {}
impl Hash for Commit {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.sha.hash(state);
    }
}

impl Commit {
    pub fn short_sha(&self) -> &str {
        let len = self.sha.len().min(7);
        &self.sha[..len]
    }

    pub fn is_root(&self) -> bool {
        self.parent_shas.is_empty()
    }

    pub fn is_merge(&self) -> bool {
        self.parent_shas.len() > 1
    }
}

/// A commit plus the paths it changed, as reported by the repository API.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct CommitDetail {
    pub commit: Commit,
    pub changed_files: Vec<String>,
}
