//! Terminal frontend for the wilayah region browser.
//!
//! The browser is one top-level controller over in-memory state: the user
//! picks how many provinces to display, then walks the province → regency
//! → district hierarchy, each level fetched on demand from the directory
//! service and rendered as a selectable list.

pub mod actions;
pub mod app;
pub mod keymap;
pub mod model;
pub mod views;
