//! Seconds → `m:ss` display strings for timeline labels

use crate::core::interval::round2;

/// Format seconds for display
///
/// Values of a minute or more render as `m:ss` (fractional seconds kept to
/// two decimals), shorter values render as plain seconds.
pub fn format_time(seconds: f64) -> String {
    let minutes = (seconds / 60.0).floor();
    let rest = round2(seconds - minutes * 60.0);

    if minutes > 0.0 {
        if rest < 10.0 {
            format!("{}:0{}", minutes as u64, rest)
        } else {
            format!("{}:{}", minutes as u64, rest)
        }
    } else {
        format!("{}", round2(seconds))
    }
}
