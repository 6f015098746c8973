//! Main TUI application.

use std::io;
use std::panic;
use std::time::{Duration, Instant};

use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use tracing::{debug, error, info};

use crate::config::AppConfig;
use crate::dataset::DatasetStore;
use crate::table::TableController;
use crate::util::Debouncer;

use super::event::{Event, EventHandler};
use super::input::{KeyAction, handle_key};
use super::render::render;
use super::state::AppState;

/// Main TUI application.
pub struct App {
    controller: TableController,
    state: AppState,
    resize: Debouncer<(u16, u16)>,
    tick_rate: Duration,
    should_quit: bool,
}

impl App {
    /// Creates the application and draws every table once.
    pub fn new(config: &AppConfig, store: DatasetStore) -> Self {
        let controller = TableController::new(store);
        let mut state = AppState::new(config);
        controller.render_all(&mut state.tables);
        Self {
            controller,
            state,
            resize: Debouncer::new(config.resize_debounce),
            tick_rate: config.tick_rate,
            should_quit: false,
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Runs the TUI application.
    pub fn run(mut self) -> io::Result<()> {
        install_panic_hook();

        // Setup terminal
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        let events = EventHandler::new(self.tick_rate);

        if let Ok(size) = terminal.size() {
            self.state.terminal_size = (size.width, size.height);
        }
        info!(
            page = %self.state.page,
            table = %self.state.demo_table,
            theme = self.state.theme.name(),
            "showroom started"
        );

        loop {
            terminal.draw(|frame| render(frame, &mut self.state))?;

            match events.next() {
                Ok(Event::Tick) => self.on_tick(Instant::now()),
                Ok(Event::Key(key)) => {
                    let action = handle_key(&mut self.state, key);
                    self.dispatch(action);
                }
                Ok(Event::Resize(width, height)) => {
                    self.resize.trigger((width, height), Instant::now());
                }
                Err(_) => {
                    self.should_quit = true;
                }
            }

            if self.should_quit {
                break;
            }
        }

        // Restore terminal
        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;

        info!("showroom stopped");
        Ok(())
    }

    /// Applies the outcome of a key press.
    pub fn dispatch(&mut self, action: KeyAction) {
        match action {
            KeyAction::Quit => self.should_quit = true,
            KeyAction::Table(event) => {
                debug!(table = %event.table(), ?event, "table event");
                self.controller.handle(event, &mut self.state.tables);
            }
            KeyAction::None => {}
        }
    }

    /// Applies a debounced resize once the terminal has been quiet.
    fn on_tick(&mut self, now: Instant) {
        if let Some((width, height)) = self.resize.poll(now) {
            debug!(width, height, "terminal resized");
            self.state.terminal_size = (width, height);
        }
    }
}

/// Restores the terminal before the default panic output so the message is
/// readable.
fn install_panic_hook() {
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        error!(%info, "panic");
        original_hook(info);
    }));
}
