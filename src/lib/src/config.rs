//! Explicit configuration values threaded into the pipeline
//!

pub mod remote_config;

pub use crate::config::remote_config::RemoteConfig;
