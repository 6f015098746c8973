//! showroom - component library showcase.
//!
//! The table core (`dataset` and `table`) is UI-agnostic: a
//! [`table::TableController`] owns the records, sort state and selections and
//! pushes changes to any [`table::RenderSurface`]. The `tui` module is the
//! terminal surface and application shell.

pub mod config;
pub mod dataset;
pub mod input_field;
pub mod table;
pub mod tui;
pub mod util;
