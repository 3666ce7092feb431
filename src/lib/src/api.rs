//! # API - typed accessors over the hosted repository API, the token
//! service, and the munidiff computation service
//!

pub mod client;
pub mod endpoint;
