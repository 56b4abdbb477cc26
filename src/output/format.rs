use chrono::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Color {
    Red,
    Yellow,
    Green,
    Cyan,
}

impl Color {
    fn code(self) -> &'static str {
        match self {
            Color::Red => "31",
            Color::Yellow => "33",
            Color::Green => "32",
            Color::Cyan => "36",
        }
    }
}

/// Wrap `text` in an ANSI color sequence when `use_color` is set
pub(super) fn paint(text: &str, color: Color, use_color: bool) -> String {
    if use_color {
        format!("\x1b[{}m{text}\x1b[0m", color.code())
    } else {
        text.to_string()
    }
}

/// Traffic-light color for a utilization percentage
pub(super) fn usage_color(utilization: f64) -> Color {
    if utilization >= 80.0 {
        Color::Red
    } else if utilization >= 50.0 {
        Color::Yellow
    } else {
        Color::Green
    }
}

pub(super) fn format_percent(utilization: f64) -> String {
    format!("{:.0}%", utilization.clamp(0.0, 100.0))
}

pub(super) fn format_cost(usd: f64) -> String {
    format!("${usd:.2}")
}

/// Two most significant units of a countdown: "3d4h", "2h13m", "45m"
pub(super) fn format_countdown(left: Duration) -> String {
    let minutes = left.num_minutes().max(0);
    let (days, hours, mins) = (minutes / 1440, minutes / 60 % 24, minutes % 60);
    if days > 0 {
        format!("{days}d{hours}h")
    } else if hours > 0 {
        format!("{hours}h{mins}m")
    } else {
        format!("{mins}m")
    }
}
