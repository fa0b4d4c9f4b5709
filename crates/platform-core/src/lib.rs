//! Screenmap platform core contracts.
//!
//! This crate contains the display record emitted by every monitor source,
//! plus geometry helpers over a list of records, without coupling to a
//! concrete OS backend.

use serde::{Deserialize, Serialize};

/// One physical or virtual monitor as reported by the system.
///
/// Field order is the serialized key order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DisplayRecord {
    /// 1-based id, assigned in encounter order.
    pub screen_id: usize,
    /// Resolution in pixels.
    pub width: f64,
    pub height: f64,
    /// Top-left offset in the virtual screen space (pixels).
    pub origin_x: f64,
    pub origin_y: f64,
    /// 0-based position in the listing.
    pub index: usize,
}

impl DisplayRecord {
    /// Build the record at `index`; `screen_id` is always `index + 1`.
    pub fn new(index: usize, width: f64, height: f64, origin_x: f64, origin_y: f64) -> Self {
        Self {
            screen_id: index + 1,
            width,
            height,
            origin_x,
            origin_y,
            index,
        }
    }
}

/// Axis-aligned rectangle in virtual-desktop pixels.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Bounds {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Display server / platform family the listing came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum DisplayServer {
    Wayland,
    X11,
    #[default]
    Unknown,
}

/// Look up a display by its 1-based `screen_id`.
pub fn find_by_screen_id(displays: &[DisplayRecord], screen_id: usize) -> Option<&DisplayRecord> {
    displays.iter().find(|d| d.screen_id == screen_id)
}

/// Compute the virtual desktop rectangle that covers every display.
/// Returns `None` for an empty layout.
pub fn virtual_desktop_bounds(displays: &[DisplayRecord]) -> Option<Bounds> {
    let first = displays.first()?;

    let (mut min_x, mut min_y) = (first.origin_x, first.origin_y);
    let (mut max_x, mut max_y) = (first.origin_x + first.width, first.origin_y + first.height);
    for d in &displays[1..] {
        min_x = min_x.min(d.origin_x);
        min_y = min_y.min(d.origin_y);
        max_x = max_x.max(d.origin_x + d.width);
        max_y = max_y.max(d.origin_y + d.height);
    }

    Some(Bounds {
        x: min_x,
        y: min_y,
        width: max_x - min_x,
        height: max_y - min_y,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn side_by_side() -> Vec<DisplayRecord> {
        vec![
            DisplayRecord::new(0, 1920.0, 1080.0, 0.0, 0.0),
            DisplayRecord::new(1, 2560.0, 1440.0, 1920.0, 0.0),
        ]
    }

    #[test]
    fn screen_id_follows_index() {
        let record = DisplayRecord::new(4, 800.0, 600.0, 0.0, 0.0);
        assert_eq!(record.index, 4);
        assert_eq!(record.screen_id, 5);
    }

    #[test]
    #[cfg(target_pointer_width = "64")]
    fn screen_id_does_not_wrap_past_u32() {
        let index = u32::MAX as usize;
        let record = DisplayRecord::new(index, 1.0, 1.0, 0.0, 0.0);
        assert_eq!(record.screen_id, index + 1);
        assert!(record.screen_id > u32::MAX as usize);
    }

    #[test]
    fn serializes_keys_in_listing_order() {
        let record = DisplayRecord::new(0, 1920.0, 1080.0, 0.0, 0.0);
        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(
            json,
            r#"{"screen_id":1,"width":1920.0,"height":1080.0,"origin_x":0.0,"origin_y":0.0,"index":0}"#
        );
    }

    #[test]
    fn virtual_bounds_cover_side_by_side_layout() {
        let bounds = virtual_desktop_bounds(&side_by_side()).unwrap();
        assert_eq!(
            bounds,
            Bounds {
                x: 0.0,
                y: 0.0,
                width: 4480.0,
                height: 1440.0
            }
        );
    }

    #[test]
    fn virtual_bounds_empty_layout() {
        assert_eq!(virtual_desktop_bounds(&[]), None);
    }

    #[test]
    fn lookup_by_screen_id() {
        let displays = side_by_side();
        assert_eq!(find_by_screen_id(&displays, 2).unwrap().origin_x, 1920.0);
        assert!(find_by_screen_id(&displays, 0).is_none());
        assert!(find_by_screen_id(&displays, 3).is_none());
    }
}
