//! Git branch lookup and display compaction

mod compact;
mod locator;

pub(crate) use compact::compact_branch;
pub(crate) use locator::{BranchLocator, GitLocator, get_branch};
