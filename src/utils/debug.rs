use std::sync::atomic::{AtomicBool, Ordering};

static DEBUG: AtomicBool = AtomicBool::new(false);

pub(crate) fn set_debug(enabled: bool) {
    DEBUG.store(enabled, Ordering::Relaxed);
}

pub(crate) fn debug_enabled() -> bool {
    DEBUG.load(Ordering::Relaxed)
}

/// Write a `[debug]` line to stderr when `--debug` is on.
/// Stdout carries the status line and is never touched.
macro_rules! debug_log {
    ($($arg:tt)*) => {
        if $crate::utils::debug_enabled() {
            eprintln!("[debug] {}", format_args!($($arg)*));
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggles() {
        set_debug(true);
        assert!(debug_enabled());
        debug_log!("visible in test output: {}", 42);
        set_debug(false);
        assert!(!debug_enabled());
    }
}
