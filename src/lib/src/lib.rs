//! # libmunitime
//!
//! Inspect the evolution of versioned model files in a hosted repository,
//! and request structural/textual/graphical differences between two
//! revisions of a model from a remote munidiff service.
//!
//! The library does no diffing itself. It resolves which two revisions of a
//! file should be compared (first-parent semantics for merge commits), which
//! metamodel files must accompany the request, and guarantees a given
//! (file, commit) pair is computed at most once per viewing session.
//!
//! # Example
//!
//! ```no_run
//! use libmunitime::config::RemoteConfig;
//! use libmunitime::model::RepoReference;
//! use libmunitime::session::Session;
//!
//! # async fn run() -> Result<(), libmunitime::error::TimelineError> {
//! let reference = RepoReference::parse("https://github.com/acme/shapes")?;
//! let session = Session::open(RemoteConfig::from_env(), reference).await?;
//! for commit in session.commits() {
//!     println!("{} {}", commit.sha, commit.message);
//! }
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod config;
pub mod constants;
pub mod error;
pub mod model;
pub mod session;
pub mod view;
