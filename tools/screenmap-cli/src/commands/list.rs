//! Print the monitor listing as JSON.

use std::io::Write;

use anyhow::Context;
use screenmap_platform_core::{find_by_screen_id, DisplayRecord};
use screenmap_platform_linux::list_displays_from;
use screenmap_platform_linux::source::MonitorSource;

/// Write the listing to `out` as a single JSON line. Nothing is written
/// unless the whole listing succeeded.
pub fn run(
    source: &dyn MonitorSource,
    pretty: bool,
    screen: Option<usize>,
    out: &mut dyn Write,
) -> anyhow::Result<()> {
    let displays = list_displays_from(source).context("Failed to list displays")?;

    let selected = select(displays, screen)?;
    let json = if pretty {
        serde_json::to_string_pretty(&selected)?
    } else {
        serde_json::to_string(&selected)?
    };
    writeln!(out, "{json}")?;
    out.flush()?;

    Ok(())
}

fn select(
    displays: Vec<DisplayRecord>,
    screen: Option<usize>,
) -> anyhow::Result<Vec<DisplayRecord>> {
    let Some(screen_id) = screen else {
        return Ok(displays);
    };
    let display = find_by_screen_id(&displays, screen_id)
        .cloned()
        .with_context(|| {
            format!(
                "No display with screen id {screen_id} ({} detected)",
                displays.len()
            )
        })?;
    Ok(vec![display])
}
