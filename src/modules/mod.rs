//! UI Modules
//!
//! Each module implements the Module trait and handles its own key input
//! and rendering:
//! - pages: executive summary and per-route analytics placeholders
//! - palette: Ctrl+K search over the menu entries
//! - location: outlet selector shown in the header

pub mod location;
pub mod pages;
pub mod palette;
