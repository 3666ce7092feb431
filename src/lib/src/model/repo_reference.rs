use serde::{Deserialize, Serialize};
use url::Url;

use crate::constants::DEFAULT_REPO_HOST;
use crate::error::TimelineError;

/// A validated reference to a hosted repository, optionally pinned to a
/// starting commit. Immutable once parsed.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct RepoReference {
    pub owner: String,
    pub name: String,
    pub start_commit: Option<String>,
}

impl RepoReference {
    /// Parses `https://<host>/<owner>/<repo>[/commit/<sha>][...]`.
    ///
    /// Anything that does not match yields `InvalidReference`, never a
    /// partially-filled value. The starting commit is extracted only when
    /// the path carries a `commit/<sha>` segment; otherwise callers diff
    /// against the default branch head.
    pub fn parse(raw: impl AsRef<str>) -> Result<RepoReference, TimelineError> {
        let raw = raw.as_ref().trim();
        let url = Url::parse(raw).map_err(|_| TimelineError::invalid_reference(raw))?;

        if url.scheme() != "https" && url.scheme() != "http" {
            return Err(TimelineError::invalid_reference(raw));
        }

        let host = url.host_str().unwrap_or_default();
        if host != DEFAULT_REPO_HOST && host != format!("www.{DEFAULT_REPO_HOST}") {
            return Err(TimelineError::invalid_reference(raw));
        }

        let segments: Vec<&str> = url
            .path_segments()
            .map(|segments| segments.filter(|s| !s.is_empty()).collect())
            .unwrap_or_default();

        let (Some(owner), Some(name)) = (segments.first(), segments.get(1)) else {
            return Err(TimelineError::invalid_reference(raw));
        };

        let start_commit = match (segments.get(2), segments.get(3)) {
            (Some(&"commit"), Some(sha)) => Some(sha.to_string()),
            _ => None,
        };

        Ok(RepoReference {
            owner: owner.to_string(),
            name: name.trim_end_matches(".git").to_string(),
            start_commit,
        })
    }

    pub fn slug(&self) -> String {
        format!("{}/{}", self.owner, self.name)
    }
}
