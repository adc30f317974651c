//! Werksite configuration core.
//!
//! This library is the runtime site-configuration system of a marketing
//! website generator for local trade businesses: the versioned
//! configuration schema, a dependency-injected store with persistence and
//! change notification, one-time migration of pre-versioning storage, pure
//! style resolvers, and the compiled-in preset catalog.

pub mod cli;
pub mod config;
pub mod constants;
pub mod storage;
pub mod styles;
