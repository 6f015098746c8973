//! Sortable, selectable table core.
//!
//! [`TableController`] owns the [`DatasetStore`](crate::dataset::DatasetStore),
//! a [`SortEngine`] and a [`SelectionTracker`]. Surfaces raise
//! [`TableEvent`]s and receive redraw requests through [`RenderSurface`].

mod controller;
mod selection;
mod sort;
mod surface;

pub use controller::TableController;
pub use selection::{SelectState, SelectionSet, SelectionSummary, SelectionTracker};
pub use sort::{SortDirection, SortEngine, SortState, compare_values};
pub use surface::{RawTableEvent, RenderSurface, TableEvent};
