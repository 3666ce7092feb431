//! Wire types for the external collaborators: the hosted repository API,
//! the repository's `timeline.json`, and the munidiff service.
//!

pub mod commits;
pub mod contents;
pub mod diff;
pub mod timeline;

pub use crate::view::commits::{CommitDetailResponse, CommitEntryResponse};
pub use crate::view::contents::ContentEntryResponse;
pub use crate::view::diff::{DiffRequestBody, DiffResponse};
pub use crate::view::timeline::TimelineConfigFile;
