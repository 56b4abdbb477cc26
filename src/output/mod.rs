mod format;
mod statusline;

pub(crate) use statusline::{StatusLine, print_statusline, statusline_json};
