//! Cached plan usage written by the usage fetcher

mod cache;
mod types;

pub(crate) use cache::{DEFAULT_TTL, load_if_fresh};
pub(crate) use types::{UsageSnapshot, UsageWindow};
