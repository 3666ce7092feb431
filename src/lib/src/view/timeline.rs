use serde::{Deserialize, Serialize};

/// Shape of the repository-hosted `timeline.json`. Both fields are optional
/// in the file; missing fields fall back to empty lists before the built-in
/// defaults are merged in.
#[derive(Deserialize, Serialize, Debug, Clone, Default)]
pub struct TimelineConfigFile {
    #[serde(default)]
    pub model_extensions: Vec<String>,
    #[serde(default)]
    pub metamodels: Vec<String>,
}
