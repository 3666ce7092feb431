//! Domain types for the commit/file resolution and differencing pipeline
//!

pub mod commit;
pub mod diff;
pub mod repo_reference;
pub mod timeline_config;

pub use crate::model::commit::{Commit, CommitDetail};
pub use crate::model::diff::{DiffRequest, DiffResult, FileIdentity};
pub use crate::model::repo_reference::RepoReference;
pub use crate::model::timeline_config::TimelineConfig;
