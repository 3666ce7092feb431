use serde::{Deserialize, Serialize};

/// `GET /repos/{owner}/{repo}/contents/{path}?ref={sha}`. The content field
/// arrives base64-encoded (with embedded newlines) and must be decoded
/// before use.
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct ContentEntryResponse {
    pub path: String,
    pub content: String,
    pub encoding: String,
}
