use serde::{Deserialize, Serialize};

/// Fully resolved input for one diff computation. Both model contents are
/// resolved before this value exists; `from_model_content` is empty when the
/// file did not exist at the predecessor commit.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct DiffRequest {
    pub model_name: String,
    pub from_model_content: String,
    pub to_model_content: String,
    pub schema_contents: Vec<String>,
}

/// The three representations produced by the diff service.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct DiffResult {
    pub textual_diff: String,
    pub structured_textual_diff: String,
    pub graphical_diff_markup: String,
}

/// Identity of one diffed file within a session: the de-duplication key.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash)]
pub struct FileIdentity {
    pub path: String,
    pub commit_sha: String,
}

impl FileIdentity {
    pub fn new(path: impl AsRef<str>, commit_sha: impl AsRef<str>) -> FileIdentity {
        FileIdentity {
            path: path.as_ref().to_string(),
            commit_sha: commit_sha.as_ref().to_string(),
        }
    }
}
