// Hosted repository API
pub const DEFAULT_REPO_HOST: &str = "github.com";
pub const DEFAULT_API_URL: &str = "https://api.github.com";
pub const DEFAULT_PAGE_SIZE: usize = 100;

// Diff computation service
pub const DEFAULT_DIFF_URL: &str = "https://munidiff.modelum.es/api/diff";
pub const DEFAULT_LOCAL_DIFF_URL: &str = "http://localhost:8080/api/diff";

// Per-repository configuration, read at the revision being viewed
pub const TIMELINE_CONFIG_FILENAME: &str = "timeline.json";

// Extensions that identify model files even when a repository carries no
// timeline.json of its own
pub const DEFAULT_MODEL_EXTENSIONS: &[&str] = &["ecore", "xmi", "uml"];

pub const DEFAULT_TIMEOUT_SECS: u64 = 120;

pub const MUNITIME_VERSION: &str = env!("CARGO_PKG_VERSION");
