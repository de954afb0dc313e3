//! `roster-client` - Typed client for the roster data service
//!
//! This library wraps the roster HTTP API in typed async accessors for the
//! presentation layer: member listings (flat, filtered, grouped), sub-team
//! lookups, asset-URL resolution, and health probing. When the grouped
//! listing cannot be served live, a bundled snapshot of the same shape is
//! substituted with explicit provenance.

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

mod client;
mod error;
pub mod fallback;
pub mod types;

pub use client::{
    resolve_asset_url, Fetched, RosterClient, BASE_URL_ENV, DEFAULT_BASE_URL,
};
pub use error::{ClientError, Result};
