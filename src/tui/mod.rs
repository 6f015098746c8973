//! Terminal user interface for showroom.
//!
//! Three pages share one header and footer: an overview, the input field
//! playground and the data table demos. The table views are the rendering
//! surface driven by [`crate::table::TableController`].

mod app;
mod event;
mod input;
mod render;
mod state;
mod style;
mod table;
mod widgets;

pub use app::App;
pub use input::{KeyAction, handle_key};
pub use state::{AppState, InputMode, Page, Playground, PlaygroundControl};
pub use style::{Palette, StatusTone, Styles, ThemeMode};
pub use table::{RowView, TableView, TableViews, format_cell};
