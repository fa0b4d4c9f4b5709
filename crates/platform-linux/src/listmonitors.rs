//! Parser for `xrandr --listmonitors` output.
//!
//! The tool prints a header followed by one line per monitor:
//!
//! ```text
//! Monitors: 2
//!  0: +*eDP-1 1920/340x1080/190+0+0  eDP-1
//!  1: +HDMI-1 2560/600x1440/340+1920+0  HDMI-1
//! ```
//!
//! Each monitor line carries `width_px/width_mm x height_px/height_mm`
//! followed by the `+x+y` origin, with or without a separating space.
//! Numbers are ASCII digits only. Anything that does not fit that shape, or
//! whose numbers overflow an `f64`, is skipped.

use std::sync::LazyLock;

use regex::Regex;

static MONITOR_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r" ([0-9]+): \+(\S+) ([0-9]+)/([0-9]+)x([0-9]+)/([0-9]+) ?\+([0-9]+)\+([0-9]+)")
        .expect("monitor line pattern is valid")
});

/// One monitor line as printed by xrandr.
#[derive(Debug, Clone, PartialEq)]
pub struct MonitorEntry {
    /// xrandr's own monitor number; `None` if it does not fit in a `u32`.
    pub tool_index: Option<u32>,
    /// Output name without the `*` primary marker.
    pub name: String,
    /// Whether xrandr flagged this monitor as primary.
    pub primary: bool,
    pub width_px: f64,
    pub width_mm: f64,
    pub height_px: f64,
    pub height_mm: f64,
    pub origin_x: f64,
    pub origin_y: f64,
}

/// Extract every monitor entry from `text`, top to bottom.
pub fn parse_listmonitors(text: &str) -> Vec<MonitorEntry> {
    MONITOR_LINE
        .captures_iter(text)
        .filter_map(|caps| {
            let raw_name = &caps[2];
            let (primary, name) = match raw_name.strip_prefix('*') {
                Some(rest) => (true, rest),
                None => (false, raw_name),
            };
            Some(MonitorEntry {
                tool_index: caps[1].parse().ok(),
                name: name.to_string(),
                primary,
                width_px: number(&caps[3])?,
                width_mm: number(&caps[4])?,
                height_px: number(&caps[5])?,
                height_mm: number(&caps[6])?,
                origin_x: number(&caps[7])?,
                origin_y: number(&caps[8])?,
            })
        })
        .collect()
}

/// Whether `line` would yield a monitor entry.
pub fn is_monitor_line(line: &str) -> bool {
    !parse_listmonitors(line).is_empty()
}

/// Parse a run of ASCII digits; `None` once it no longer fits a finite `f64`.
fn number(digits: &str) -> Option<f64> {
    digits.parse::<f64>().ok().filter(|n| n.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_all_fields() {
        let entries = parse_listmonitors(" 0: +*eDP-1 1920/340x1080/190+0+0  eDP-1\n");
        assert_eq!(
            entries,
            vec![MonitorEntry {
                tool_index: Some(0),
                name: "eDP-1".to_string(),
                primary: true,
                width_px: 1920.0,
                width_mm: 340.0,
                height_px: 1080.0,
                height_mm: 190.0,
                origin_x: 0.0,
                origin_y: 0.0,
            }]
        );
    }

    #[test]
    fn test_header_is_not_a_monitor_line() {
        assert!(!is_monitor_line("Monitors: 2"));
        assert!(parse_listmonitors("Monitors: 2\n").is_empty());
    }

    #[test]
    fn test_missing_offset_is_skipped() {
        assert!(parse_listmonitors(" 0: +eDP-1 1920/340x1080/190  eDP-1\n").is_empty());
    }

    #[test]
    fn test_missing_size_is_skipped() {
        assert!(parse_listmonitors(" 0: +eDP-1 1920x1080+0+0  eDP-1\n").is_empty());
    }

    #[test]
    fn test_negative_origin_is_skipped() {
        // xrandr writes negative offsets as `+-1920`, outside the accepted shape.
        assert!(parse_listmonitors(" 0: +DP-2 1920/530x1080/300+-1920+0  DP-2\n").is_empty());
    }

    #[test]
    fn test_oversized_tool_index() {
        let entries = parse_listmonitors(" 99999999999: +X 1/1x1/1+0+0\n");
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].tool_index, None);
    }

    #[test]
    fn test_non_ascii_digits_are_skipped() {
        // Arabic-Indic digits for 1920 and 1080.
        let line = " 0: +X \u{661}\u{669}\u{662}\u{660}/1x\u{661}\u{660}\u{668}\u{660}/1+0+0\n";
        assert!(!is_monitor_line(line));
        assert!(parse_listmonitors(line).is_empty());
    }

    #[test]
    fn test_overflowing_number_is_skipped() {
        let huge = "9".repeat(400);
        let line = format!(" 0: +X {huge}/1x1080/1+0+0\n 1: +Y 800/1x600/1+0+0\n");
        let entries = parse_listmonitors(&line);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].name, "Y");
    }

    #[test]
    fn test_spaced_origin_is_accepted() {
        let entries = parse_listmonitors(" 0: +VIRTUAL1 1024/271x768/203 +0+768\n");
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].origin_y, 768.0);
    }

    #[test]
    fn test_unmarked_name_is_not_primary() {
        let entries = parse_listmonitors(" 1: +HDMI-1 2560/600x1440/340+1920+0  HDMI-1\n");
        assert_eq!(entries[0].name, "HDMI-1");
        assert!(!entries[0].primary);
        assert_eq!(entries[0].origin_x, 1920.0);
    }
}
