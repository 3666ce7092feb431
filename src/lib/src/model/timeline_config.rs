use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

use crate::constants::DEFAULT_MODEL_EXTENSIONS;
use crate::view::timeline::TimelineConfigFile;

/// Per-repository configuration describing which files are models and which
/// metamodel files must accompany a diff request.
///
/// Built by merging the repository's `timeline.json` with the built-in
/// default extensions. The built-ins are always present regardless of what
/// the repository configures.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct TimelineConfig {
    pub model_extensions: HashSet<String>,
    pub schema_files: Vec<String>,
}

impl Default for TimelineConfig {
    fn default() -> TimelineConfig {
        TimelineConfig {
            model_extensions: TimelineConfig::builtin_extensions(),
            schema_files: vec![],
        }
    }
}

impl TimelineConfig {
    pub fn builtin_extensions() -> HashSet<String> {
        DEFAULT_MODEL_EXTENSIONS
            .iter()
            .map(|ext| ext.to_string())
            .collect()
    }

    pub fn from_file(file: TimelineConfigFile) -> TimelineConfig {
        let mut model_extensions = TimelineConfig::builtin_extensions();
        model_extensions.extend(file.model_extensions.iter().map(|ext| normalize(ext)));
        TimelineConfig {
            model_extensions,
            schema_files: file.metamodels,
        }
    }

    pub fn is_model_file(&self, path: impl AsRef<Path>) -> bool {
        match path.as_ref().extension().and_then(|ext| ext.to_str()) {
            Some(ext) => self.model_extensions.contains(&normalize(ext)),
            None => false,
        }
    }
}

fn normalize(ext: &str) -> String {
    ext.trim_start_matches('.').to_lowercase()
}
