#[macro_use]
pub(crate) mod debug;

pub(crate) use debug::{debug_enabled, set_debug};
