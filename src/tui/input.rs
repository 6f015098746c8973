//! Input handling and keybindings.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::dataset::TableName;
use crate::table::{SelectState, TableEvent};

use super::state::{AppState, InputMode, Page};

/// Rows moved by PageUp/PageDown.
const PAGE_ROWS: isize = 10;

/// Result of handling a key event.
#[derive(Debug, PartialEq)]
pub enum KeyAction {
    /// No action, continue.
    None,
    /// Quit the application.
    Quit,
    /// Forward to the table controller.
    Table(TableEvent),
}

/// Handles key input and updates state.
pub fn handle_key(state: &mut AppState, key: KeyEvent) -> KeyAction {
    if key.kind != KeyEventKind::Press {
        return KeyAction::None;
    }
    if state.show_quit_confirm {
        return handle_quit_confirm(state, key);
    }
    if state.show_help {
        return handle_help(state, key);
    }
    match state.input_mode {
        InputMode::Normal => handle_normal_mode(state, key),
        InputMode::Editing => handle_editing_mode(state, key),
    }
}

fn handle_quit_confirm(state: &mut AppState, key: KeyEvent) -> KeyAction {
    match key.code {
        KeyCode::Enter | KeyCode::Char('q') | KeyCode::Char('Q') => {
            state.show_quit_confirm = false;
            KeyAction::Quit
        }
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            state.show_quit_confirm = false;
            KeyAction::Quit
        }
        KeyCode::Esc | KeyCode::Char('n') | KeyCode::Char('N') => {
            state.show_quit_confirm = false;
            KeyAction::None
        }
        _ => KeyAction::None,
    }
}

fn handle_help(state: &mut AppState, key: KeyEvent) -> KeyAction {
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            return KeyAction::Quit;
        }
        KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q') => {
            state.show_help = false;
            state.help_scroll = 0;
        }
        KeyCode::Up | KeyCode::Char('k') => {
            state.help_scroll = state.help_scroll.saturating_sub(1);
        }
        KeyCode::Down | KeyCode::Char('j') => {
            // Clamped during render
            state.help_scroll = state.help_scroll.saturating_add(1);
        }
        KeyCode::PageUp => state.help_scroll = state.help_scroll.saturating_sub(10),
        KeyCode::PageDown => state.help_scroll = state.help_scroll.saturating_add(10),
        _ => {}
    }
    KeyAction::None
}

/// Handles keys in normal mode.
fn handle_normal_mode(state: &mut AppState, key: KeyEvent) -> KeyAction {
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') => {
            state.show_quit_confirm = true;
            return KeyAction::None;
        }
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            return KeyAction::Quit;
        }
        KeyCode::Char('?') => {
            state.show_help = true;
            return KeyAction::None;
        }
        KeyCode::Char('t') => {
            state.toggle_theme();
            return KeyAction::None;
        }
        KeyCode::Esc => {
            state.status_message = None;
            return KeyAction::None;
        }
        KeyCode::Tab => {
            state.switch_page(state.page.next());
            return KeyAction::None;
        }
        KeyCode::BackTab => {
            state.switch_page(state.page.prev());
            return KeyAction::None;
        }
        KeyCode::Char('1') => {
            state.switch_page(Page::Overview);
            return KeyAction::None;
        }
        KeyCode::Char('2') => {
            state.switch_page(Page::InputField);
            return KeyAction::None;
        }
        KeyCode::Char('3') => {
            state.switch_page(Page::DataTable);
            return KeyAction::None;
        }
        _ => {}
    }

    match state.page {
        Page::Overview => KeyAction::None,
        Page::InputField => handle_playground(state, key),
        Page::DataTable => handle_data_table(state, key),
    }
}

fn handle_playground(state: &mut AppState, key: KeyEvent) -> KeyAction {
    let playground = &mut state.playground;
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => playground.focus_up(),
        KeyCode::Down | KeyCode::Char('j') => playground.focus_down(),
        KeyCode::Left | KeyCode::Right | KeyCode::Char(' ') => playground.activate(),
        KeyCode::Enter | KeyCode::Char('e') | KeyCode::Char('i') => {
            if playground.field.is_editable() {
                state.input_mode = InputMode::Editing;
            } else {
                state.status_message = Some("Input is disabled".to_string());
            }
        }
        KeyCode::Char('x') => {
            if playground.field.clear() {
                // Clearing refocuses the field.
                state.input_mode = InputMode::Editing;
            }
        }
        _ => {}
    }
    KeyAction::None
}

fn handle_editing_mode(state: &mut AppState, key: KeyEvent) -> KeyAction {
    let field = &mut state.playground.field;
    match key.code {
        KeyCode::Esc | KeyCode::Enter => state.input_mode = InputMode::Normal,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            return KeyAction::Quit;
        }
        KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            while field.backspace() {}
        }
        KeyCode::Backspace => {
            field.backspace();
        }
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            field.insert_char(c);
        }
        _ => {}
    }
    KeyAction::None
}

fn handle_data_table(state: &mut AppState, key: KeyEvent) -> KeyAction {
    let table = state.demo_table;
    let columns = table.columns();
    match key.code {
        KeyCode::Char(']') => state.demo_table = table.next(),
        KeyCode::Char('[') => state.demo_table = table.prev(),
        KeyCode::Char('u') => state.demo_table = TableName::Users,
        KeyCode::Char('p') => state.demo_table = TableName::Products,
        KeyCode::Char('o') => state.demo_table = TableName::Orders,

        KeyCode::Left | KeyCode::Char('h') => state.current_view_mut().focus_prev_column(columns.len()),
        KeyCode::Right | KeyCode::Char('l') => {
            state.current_view_mut().focus_next_column(columns.len())
        }
        KeyCode::Enter | KeyCode::Char('s') => {
            let focused = state.current_view().focused_column;
            if let Some(column) = columns.get(focused) {
                return KeyAction::Table(TableEvent::SortRequested {
                    table,
                    column: *column,
                });
            }
        }

        KeyCode::Up | KeyCode::Char('k') => state.current_view_mut().move_cursor(-1),
        KeyCode::Down | KeyCode::Char('j') => state.current_view_mut().move_cursor(1),
        KeyCode::PageUp => state.current_view_mut().move_cursor(-PAGE_ROWS),
        KeyCode::PageDown => state.current_view_mut().move_cursor(PAGE_ROWS),
        KeyCode::Home => state.current_view_mut().cursor_to_first(),
        KeyCode::End => state.current_view_mut().cursor_to_last(),

        KeyCode::Char(' ') => {
            // The checkbox flips itself, the controller is told the new value.
            if let Some(row) = state.current_view_mut().current_row_mut() {
                row.checked = !row.checked;
                return KeyAction::Table(TableEvent::RowToggled {
                    table,
                    id: row.record.id().clone(),
                    checked: row.checked,
                });
            }
        }
        KeyCode::Char('a') => {
            let checked = state.current_view().select_all != SelectState::All;
            return KeyAction::Table(TableEvent::AllToggled { table, checked });
        }
        _ => {}
    }
    KeyAction::None
}
