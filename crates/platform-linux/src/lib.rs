//! Screenmap Linux Platform Integration
//!
//! Platform-specific implementations for Linux:
//! - **Monitor Sources:** Capturing the raw `xrandr --listmonitors` text
//! - **Listing Parser:** Extracting monitor geometry from that text
//! - **Display Detection:** Building ordered display records

pub mod display;
pub mod listmonitors;
pub mod source;

pub use display::*;
