//! Duration formatting.

use std::time::Duration;

/// Format a duration as seconds with millisecond precision, e.g. `1.234s`.
pub fn format_duration(d: Duration) -> String {
    format!("{:.3}s", d.as_secs_f64())
}
