// Text formatters
//
// Shared formatting utilities for the TUI panels.

use std::time::Duration;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Truncate to a display width, ending in an ellipsis when cut
///
/// Uses unicode display width (not byte length) so wide glyphs in mission
/// names don't overflow the card border.
pub fn truncate_to_width(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }

    // Target width leaves room for ellipsis (1 column)
    let target_width = max_width.saturating_sub(1);
    let mut current_width = 0;
    let mut truncated = String::new();
    for c in text.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > target_width {
            break;
        }
        current_width += char_width;
        truncated.push(c);
    }

    truncated.push('…');
    truncated
}

/// Format elapsed time as `1h02m`, `3m05s` or `42s`
pub fn format_uptime(elapsed: Duration) -> String {
    let secs = elapsed.as_secs();
    let (hours, minutes, seconds) = (secs / 3600, (secs % 3600) / 60, secs % 60);

    if hours > 0 {
        format!("{}h{:02}m", hours, minutes)
    } else if minutes > 0 {
        format!("{}m{:02}s", minutes, seconds)
    } else {
        format!("{}s", seconds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_keeps_short_text() {
        assert_eq!(truncate_to_width("FalconSat", 20), "FalconSat");
        assert_eq!(truncate_to_width("FalconSat", 9), "FalconSat");
    }

    #[test]
    fn truncate_counts_display_columns() {
        assert_eq!(truncate_to_width("FalconSat-2", 6), "Falco…");
        // Each CJK glyph is two columns wide
        assert_eq!(truncate_to_width("火星火星", 5), "火星…");
    }

    #[test]
    fn uptime_formats() {
        assert_eq!(format_uptime(Duration::from_secs(42)), "42s");
        assert_eq!(format_uptime(Duration::from_secs(185)), "3m05s");
        assert_eq!(format_uptime(Duration::from_secs(3720)), "1h02m");
    }
}
