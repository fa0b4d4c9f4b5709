//! Check the display setup.

use screenmap_platform_core::{virtual_desktop_bounds, DisplayServer};
use screenmap_platform_linux::source::MonitorSource;
use screenmap_platform_linux::{detect_display_server, list_displays_from};

pub fn run(source: &dyn MonitorSource) -> anyhow::Result<()> {
    println!("screenmap System Check");
    println!("{}", "=".repeat(50));

    match detect_display_server() {
        DisplayServer::X11 => println!("[OK] Display server: X11"),
        DisplayServer::Wayland => {
            println!("[WARN] Display server: Wayland (xrandr only sees XWayland outputs)")
        }
        DisplayServer::Unknown => {
            tracing::warn!("Neither WAYLAND_DISPLAY nor DISPLAY is set");
            println!("[WARN] Display server: Unknown")
        }
    }

    println!("     Source: {}", source.describe());

    let displays = list_displays_from(source)?;
    println!("[OK] Monitors detected: {}", displays.len());
    for d in &displays {
        println!(
            "     #{} {}x{} at +{}+{}",
            d.screen_id, d.width, d.height, d.origin_x, d.origin_y
        );
    }

    if let Some(bounds) = virtual_desktop_bounds(&displays) {
        println!(
            "     Virtual desktop: {}x{} at +{}+{}",
            bounds.width, bounds.height, bounds.x, bounds.y
        );
    }

    Ok(())
}
