//! Display/monitor detection.

use screenmap_common::error::{ScreenmapError, ScreenmapResult};
use screenmap_platform_core::{virtual_desktop_bounds, DisplayRecord, DisplayServer};

use crate::listmonitors::{is_monitor_line, parse_listmonitors, MonitorEntry};
use crate::source::{MonitorSource, ShellCommandSource};

/// Detect connected monitors by running `xrandr --listmonitors`.
pub fn list_displays() -> ScreenmapResult<Vec<DisplayRecord>> {
    list_displays_from(&ShellCommandSource::xrandr())
}

/// Detect connected monitors from an arbitrary listing source.
pub fn list_displays_from(source: &dyn MonitorSource) -> ScreenmapResult<Vec<DisplayRecord>> {
    let bytes = source.capture()?;
    let text =
        String::from_utf8(bytes).map_err(|e| ScreenmapError::encoding(source.describe(), e))?;

    let displays = parse_displays(&text);
    tracing::debug!(
        source = source.describe(),
        count = displays.len(),
        bounds = ?virtual_desktop_bounds(&displays),
        "Detected monitors"
    );
    Ok(displays)
}

/// Parse listing text straight into display records.
pub fn parse_displays(text: &str) -> Vec<DisplayRecord> {
    for line in text.lines() {
        if !line.trim().is_empty() && !is_monitor_line(line) {
            tracing::trace!(line, "Skipping non-monitor line");
        }
    }
    records_from_entries(&parse_listmonitors(text))
}

/// Number the entries in listing order. Millimeter sizes and xrandr's own
/// monitor index are dropped here.
pub fn records_from_entries(entries: &[MonitorEntry]) -> Vec<DisplayRecord> {
    entries
        .iter()
        .enumerate()
        .map(|(index, entry)| {
            DisplayRecord::new(
                index,
                entry.width_px,
                entry.height_px,
                entry.origin_x,
                entry.origin_y,
            )
        })
        .collect()
}

/// Detect the current display server.
pub fn detect_display_server() -> DisplayServer {
    if std::env::var("WAYLAND_DISPLAY").is_ok() {
        DisplayServer::Wayland
    } else if std::env::var("DISPLAY").is_ok() {
        DisplayServer::X11
    } else {
        DisplayServer::Unknown
    }
}
