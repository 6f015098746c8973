//! Application state management.

use std::fmt;
use std::str::FromStr;

use crate::config::AppConfig;
use crate::dataset::TableName;
use crate::input_field::InputField;

use super::style::ThemeMode;
use super::table::{TableView, TableViews};

/// Top-level pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Page {
    #[default]
    Overview,
    InputField,
    DataTable,
}

impl Page {
    pub fn all() -> &'static [Page] {
        &[Page::Overview, Page::InputField, Page::DataTable]
    }

    /// Returns the display name of the page.
    pub fn name(&self) -> &'static str {
        match self {
            Page::Overview => "Overview",
            Page::InputField => "Input Field",
            Page::DataTable => "Data Table",
        }
    }

    pub fn next(&self) -> Page {
        match self {
            Page::Overview => Page::InputField,
            Page::InputField => Page::DataTable,
            Page::DataTable => Page::Overview,
        }
    }

    pub fn prev(&self) -> Page {
        match self {
            Page::Overview => Page::DataTable,
            Page::InputField => Page::Overview,
            Page::DataTable => Page::InputField,
        }
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Page::Overview => "overview",
            Page::InputField => "input",
            Page::DataTable => "tables",
        })
    }
}

impl FromStr for Page {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "overview" => Ok(Page::Overview),
            "input" | "inputfield" | "input-field" => Ok(Page::InputField),
            "tables" | "table" | "datatable" | "data-table" => Ok(Page::DataTable),
            other => Err(format!(
                "invalid page '{}' (expected overview, input or tables)",
                other
            )),
        }
    }
}

/// Input mode for the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    #[default]
    Normal,
    /// Keystrokes go into the playground input field.
    Editing,
}

/// Controls of the input field playground, in panel order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaygroundControl {
    Variant,
    Size,
    Kind,
    Disabled,
    Invalid,
    Loading,
    ClearButton,
}

impl PlaygroundControl {
    pub fn all() -> &'static [PlaygroundControl] {
        &[
            PlaygroundControl::Variant,
            PlaygroundControl::Size,
            PlaygroundControl::Kind,
            PlaygroundControl::Disabled,
            PlaygroundControl::Invalid,
            PlaygroundControl::Loading,
            PlaygroundControl::ClearButton,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            PlaygroundControl::Variant => "Variant",
            PlaygroundControl::Size => "Size",
            PlaygroundControl::Kind => "Type",
            PlaygroundControl::Disabled => "Disabled",
            PlaygroundControl::Invalid => "Invalid",
            PlaygroundControl::Loading => "Loading",
            PlaygroundControl::ClearButton => "Clear button",
        }
    }
}

/// Input field plus the control panel cursor.
#[derive(Debug, Clone, Default)]
pub struct Playground {
    pub field: InputField,
    /// Index into [`PlaygroundControl::all`].
    pub focused: usize,
}

impl Playground {
    pub fn focused_control(&self) -> PlaygroundControl {
        let controls = PlaygroundControl::all();
        controls[self.focused.min(controls.len() - 1)]
    }

    pub fn focus_up(&mut self) {
        self.focused = self.focused.saturating_sub(1);
    }

    pub fn focus_down(&mut self) {
        self.focused = (self.focused + 1).min(PlaygroundControl::all().len() - 1);
    }

    /// Cycles a select control or flips a checkbox control.
    pub fn activate(&mut self) {
        let control = self.focused_control();
        let f = &mut self.field;
        match control {
            PlaygroundControl::Variant => f.variant = f.variant.next(),
            PlaygroundControl::Size => f.size = f.size.next(),
            PlaygroundControl::Kind => f.kind = f.kind.next(),
            PlaygroundControl::Disabled => f.disabled = !f.disabled,
            PlaygroundControl::Invalid => f.invalid = !f.invalid,
            PlaygroundControl::Loading => f.loading = !f.loading,
            PlaygroundControl::ClearButton => f.clear_button = !f.clear_button,
        }
    }

    /// Current setting of `control` as shown in the panel.
    pub fn setting(&self, control: PlaygroundControl) -> String {
        let f = &self.field;
        let flag = |on: bool| (if on { "[x]" } else { "[ ]" }).to_string();
        match control {
            PlaygroundControl::Variant => f.variant.as_str().to_string(),
            PlaygroundControl::Size => f.size.as_str().to_string(),
            PlaygroundControl::Kind => f.kind.as_str().to_string(),
            PlaygroundControl::Disabled => flag(f.disabled),
            PlaygroundControl::Invalid => flag(f.invalid),
            PlaygroundControl::Loading => flag(f.loading),
            PlaygroundControl::ClearButton => flag(f.clear_button),
        }
    }
}

/// Main application state.
#[derive(Debug)]
pub struct AppState {
    pub page: Page,
    pub theme: ThemeMode,
    pub input_mode: InputMode,

    /// Demo tab shown on the data table page.
    pub demo_table: TableName,
    pub tables: TableViews,

    pub playground: Playground,

    pub show_help: bool,
    pub help_scroll: usize,
    pub show_quit_confirm: bool,

    /// One-shot message shown in the status bar.
    pub status_message: Option<String>,

    /// Last applied (debounced) terminal size.
    pub terminal_size: (u16, u16),
}

impl AppState {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            page: config.start_page,
            theme: config.theme,
            input_mode: InputMode::Normal,
            demo_table: config.start_table,
            tables: TableViews::default(),
            playground: Playground::default(),
            show_help: false,
            help_scroll: 0,
            show_quit_confirm: false,
            status_message: None,
            terminal_size: (0, 0),
        }
    }

    /// Switches page. Leaving the playground stops editing.
    pub fn switch_page(&mut self, page: Page) {
        if self.page != page {
            self.page = page;
            self.input_mode = InputMode::Normal;
            self.help_scroll = 0;
        }
    }

    pub fn toggle_theme(&mut self) {
        self.theme = self.theme.toggle();
    }

    pub fn current_view(&self) -> &TableView {
        self.tables.view(self.demo_table)
    }

    pub fn current_view_mut(&mut self) -> &mut TableView {
        self.tables.view_mut(self.demo_table)
    }
}
