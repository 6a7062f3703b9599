use anyhow::Result;
use ratatui::{
    crossterm::{
        self,
        event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    },
    layout::Margin,
    prelude::*,
    widgets::Block,
};
use std::path::PathBuf;
use styled_select::{Action as SelectAction, FocusTarget, SelectStore};
use tokio::sync::mpsc;

use ::log::{debug, info, warn};

use crate::actions::Action;
use crate::config::Config;
use crate::input::{KeyEventContext, PointerContext, SelectLayout};
use crate::log_capture::LogBuffer;
use crate::session::{PersistedSession, load_session, store_session};
use crate::theme::Theme;
use crate::view_models::select::SelectViewModel;
use crate::view_models::status_bar::{CommittedValue, StatusBarViewModel};
use crate::views::event_log::EventLogState;
use crate::views::select::{HEADER_GAP, HEADER_HEIGHT, list_placement};

mod actions;
mod config;
mod input;
mod log_capture;
mod session;
mod theme;
mod view_models;
mod views;

/// Widest a select is drawn
const SELECT_WIDTH: u16 = 48;

/// One select on screen
pub struct SelectEntry {
    pub id: String,
    pub title: String,
    pub store: SelectStore,
}

pub struct App {
    pub selects: Vec<SelectEntry>,
    /// Select holding keyboard focus
    pub focused: Option<usize>,
    /// Hit areas from the last draw
    pub layouts: Vec<SelectLayout>,
    /// Pointer entered an open list and has not left it yet
    pub pointer_in_list: bool,
    /// Last committed value per select
    pub committed: Vec<Option<String>>,
    pub event_log: EventLogState,
    pub logs: LogBuffer,
    pub theme: Theme,
    pub config: Config,
    pub should_quit: bool,
}

pub fn initialize_panic_handler() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = shutdown();
        original_hook(panic_info);
    }));
}

fn startup() -> Result<()> {
    crossterm::terminal::enable_raw_mode()?;
    crossterm::execute!(
        std::io::stderr(),
        crossterm::terminal::EnterAlternateScreen,
        EnableMouseCapture
    )?;
    Ok(())
}

fn shutdown() -> Result<()> {
    crossterm::execute!(
        std::io::stderr(),
        DisableMouseCapture,
        crossterm::terminal::LeaveAlternateScreen
    )?;
    crossterm::terminal::disable_raw_mode()?;
    Ok(())
}

fn update(app: &mut App, action: Action) {
    match action {
        Action::KeyInput(key) => {
            let mapped = input::handle_key_event(key, &app.key_context());
            update(app, mapped);
        }
        Action::MouseInput(mouse) => {
            for mapped in input::handle_mouse_event(mouse, &app.layouts, &app.pointer_context()) {
                update(app, mapped);
            }
        }
        Action::Select(index, select_action) => app.dispatch_select(index, select_action),
        Action::FocusNext => {
            let count = app.selects.len();
            if count > 0 {
                let next = app.focused.map_or(0, |i| (i + 1) % count);
                app.focus_select(next);
            }
        }
        Action::FocusPrevious => {
            let count = app.selects.len();
            if count > 0 {
                let previous = app.focused.map_or(count - 1, |i| (i + count - 1) % count);
                app.focus_select(previous);
            }
        }
        Action::FocusSelect(index) => app.focus_select(index),
        Action::BlurFocused => app.blur_focused(),
        Action::SelectionCommitted(index, value) => {
            if let Some(slot) = app.committed.get_mut(index) {
                info!("Select {} committed {}", app.selects[index].id, value);
                *slot = Some(value);
            }
        }
        Action::ToggleEventLog => {
            app.event_log.is_open = !app.event_log.is_open;
            app.event_log.auto_scroll = true;
        }
        Action::ScrollEventLogUp => {
            if app.event_log.auto_scroll {
                app.event_log.scroll_offset =
                    app.log_len().saturating_sub(app.event_log.viewport_height);
                app.event_log.auto_scroll = false;
            }
            app.event_log.scroll_offset = app.event_log.scroll_offset.saturating_sub(1);
        }
        Action::ScrollEventLogDown => {
            if !app.event_log.auto_scroll {
                let bottom = app.log_len().saturating_sub(app.event_log.viewport_height);
                app.event_log.scroll_offset = (app.event_log.scroll_offset + 1).min(bottom);
                app.event_log.auto_scroll = app.event_log.scroll_offset >= bottom;
            }
        }
        Action::ClearEventLog => {
            if let Ok(mut logs) = app.logs.lock() {
                logs.clear();
            }
            app.event_log.scroll_offset = 0;
        }
        Action::Quit => app.should_quit = true,
        Action::None => {}
    }
}

fn start_event_handler(tx: mpsc::UnboundedSender<Action>) -> tokio::task::JoinHandle<()> {
    let tick_rate = std::time::Duration::from_millis(250);

    tokio::spawn(async move {
        loop {
            let action = match event::poll(tick_rate) {
                Ok(true) => match event::read() {
                    Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => Action::KeyInput(key),
                    Ok(Event::Mouse(mouse)) => Action::MouseInput(mouse),
                    Ok(_) => Action::None,
                    Err(err) => {
                        warn!("Failed to read terminal event: {}", err);
                        Action::None
                    }
                },
                Ok(false) => Action::None,
                Err(err) => {
                    warn!("Failed to poll terminal events: {}", err);
                    Action::None
                }
            };

            if tx.send(action).is_err() {
                break;
            }
        }
    })
}

async fn run_with_log_buffer(log_buffer: LogBuffer) -> Result<()> {
    let mut t = Terminal::new(CrosstermBackend::new(std::io::stderr()))?;

    let (action_tx, mut action_rx) = mpsc::unbounded_channel();

    let config = Config::load();
    let session = if config.persist_session {
        load_session(&PathBuf::from(&config.session_file)).unwrap_or_else(|err| {
            debug!("No previous session: {:#}", err);
            PersistedSession::default()
        })
    } else {
        PersistedSession::default()
    };

    let mut app = App::new(config, &session, action_tx.clone(), log_buffer);
    let event_task = start_event_handler(action_tx);

    loop {
        t.draw(|f| {
            ui(f, &mut app);
        })?;

        // Deferred focus requests run once the frame holding them is drawn
        if app.tick_selects() {
            continue;
        }

        let maybe_action =
            tokio::time::timeout(std::time::Duration::from_millis(100), action_rx.recv()).await;

        match maybe_action {
            Ok(Some(action)) => update(&mut app, action),
            Ok(None) => break, // Channel closed
            Err(_) => {}       // Timeout, redraw
        }

        if app.should_quit {
            if app.config.persist_session {
                store_session(&PathBuf::from(&app.config.session_file), &app.session())?;
            }
            break;
        }
    }

    event_task.abort();

    Ok(())
}

fn ui(f: &mut Frame, app: &mut App) {
    let theme = app.theme.clone();
    f.render_widget(
        Block::default().style(Style::default().bg(theme.bg_primary)),
        f.area(),
    );

    // Split the layout: selects on top, status line at the bottom
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Selects
            Constraint::Length(1), // Status line
        ])
        .split(f.area());

    let bounds = chunks[0].inner(Margin {
        horizontal: 2,
        vertical: 1,
    });
    let width = bounds.width.min(SELECT_WIDTH);

    let mut layouts = Vec::with_capacity(app.selects.len());
    let mut open_lists = Vec::new();

    for (i, entry) in app.selects.iter().enumerate() {
        let y = bounds.y + i as u16 * (HEADER_HEIGHT + HEADER_GAP);
        if y + HEADER_HEIGHT > bounds.bottom() {
            layouts.push(SelectLayout::default());
            continue;
        }
        let header = Rect {
            x: bounds.x,
            y,
            width,
            height: HEADER_HEIGHT,
        };

        let list_area = entry
            .store
            .state()
            .is_open()
            .then(|| list_placement(header, bounds, entry.store.visible().len()));
        let visible_height = list_area.map_or(0, |area| area.height.saturating_sub(2) as usize);

        let vm = SelectViewModel::from_store(
            &entry.store,
            &entry.title,
            app.focused == Some(i),
            visible_height,
            &theme,
        );
        crate::views::select::render_select_header(f, header, &vm, &theme);

        if let (Some(area), Some(list)) = (list_area, vm.list) {
            open_lists.push((i, area, list));
        }
        layouts.push(SelectLayout { header, list: None });
    }

    // Render open lists last so they overlay the headers below them
    for (i, area, list) in open_lists {
        let list_layout = crate::views::select::render_select_list(f, area, &list, &theme);
        layouts[i].list = Some(list_layout);
    }
    app.layouts = layouts;

    let committed: Vec<CommittedValue> = app
        .selects
        .iter()
        .zip(&app.committed)
        .map(|(entry, value)| CommittedValue {
            title: &entry.title,
            value: value.as_deref(),
        })
        .collect();
    let any_open = app.selects.iter().any(|entry| entry.store.state().is_open());
    let status = StatusBarViewModel::new(&committed, any_open, &theme);
    crate::views::status_bar::render_status_bar(f, chunks[1], &status, &theme);

    // Render event log (drop-down) if visible
    if app.event_log.is_open {
        let viewport_height = crate::views::event_log::render_event_log(
            f,
            f.area(),
            &app.logs,
            &app.event_log,
            &theme,
        );
        app.event_log.viewport_height = viewport_height;
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize event log capture before anything else
    let log_buffer = log_capture::init_logger();

    initialize_panic_handler();
    startup()?;
    let result = run_with_log_buffer(log_buffer).await;
    shutdown()?;
    result
}

impl App {
    fn new(
        config: Config,
        session: &PersistedSession,
        action_tx: mpsc::UnboundedSender<Action>,
        logs: LogBuffer,
    ) -> App {
        let selects: Vec<SelectEntry> = config
            .selects
            .iter()
            .enumerate()
            .map(|(index, select)| {
                let props = select.to_props(session.value_for(&select.id));
                let tx = action_tx.clone();
                let store = SelectStore::new(props, move |option| {
                    let action = Action::SelectionCommitted(index, option.value.clone());
                    if tx.send(action).is_err() {
                        debug!("Dropped commit of {}: action channel closed", option.value);
                    }
                });
                SelectEntry {
                    id: select.id.clone(),
                    title: select.title.clone(),
                    store,
                }
            })
            .collect();

        let committed = selects
            .iter()
            .map(|entry| entry.store.selected_option().map(|option| option.value.clone()))
            .collect();

        info!("Loaded {} selects", selects.len());

        App {
            layouts: vec![SelectLayout::default(); selects.len()],
            selects,
            focused: None,
            pointer_in_list: false,
            committed,
            event_log: EventLogState::default(),
            logs,
            theme: Theme::default(),
            config,
            should_quit: false,
        }
    }

    fn key_context(&self) -> KeyEventContext {
        let focused = self.focused.and_then(|i| self.selects.get(i));
        KeyEventContext {
            focused: self.focused,
            focused_open: focused.is_some_and(|entry| entry.store.state().is_open()),
            focused_searchable: focused.is_some_and(|entry| entry.store.is_searchable()),
            event_log_open: self.event_log.is_open,
        }
    }

    fn pointer_context(&self) -> PointerContext {
        PointerContext {
            focused: self.focused,
            open_select: self
                .selects
                .iter()
                .position(|entry| entry.store.state().is_open()),
            pointer_in_list: self.pointer_in_list,
        }
    }

    fn dispatch_select(&mut self, index: usize, action: SelectAction) {
        match action {
            SelectAction::HoverRow(_) => self.pointer_in_list = true,
            SelectAction::LeaveList => self.pointer_in_list = false,
            _ => {}
        }

        let Some(entry) = self.selects.get_mut(index) else {
            return;
        };
        entry.store.dispatch(action);

        let state = entry.store.state();
        if !state.is_open() {
            self.pointer_in_list = false;
        }
        if state.focus == FocusTarget::None && self.focused == Some(index) {
            debug!("Select {} let go of focus", entry.id);
            self.focused = None;
        }
    }

    /// Move focus to a select, blurring the previous one
    fn focus_select(&mut self, index: usize) {
        if self.focused == Some(index) || index >= self.selects.len() {
            return;
        }
        self.blur_focused();

        let target = if self.selects[index].store.is_searchable() {
            FocusTarget::SearchField
        } else {
            FocusTarget::Control
        };
        self.focused = Some(index);
        self.dispatch_select(index, SelectAction::FocusGained(target));
    }

    fn blur_focused(&mut self) {
        if let Some(index) = self.focused.take() {
            self.dispatch_select(index, SelectAction::Blur);
        }
    }

    /// Run deferred focus requests; true when any select changed
    fn tick_selects(&mut self) -> bool {
        let mut changed = false;
        for (index, entry) in self.selects.iter_mut().enumerate() {
            if entry.store.tick() {
                changed = true;
                if entry.store.state().focus != FocusTarget::None {
                    self.focused = Some(index);
                }
            }
        }
        changed
    }

    fn log_len(&self) -> usize {
        self.logs.lock().map(|logs| logs.len()).unwrap_or(0)
    }

    /// Snapshot of the committed values for persistence
    fn session(&self) -> PersistedSession {
        let selections = self
            .selects
            .iter()
            .filter_map(|entry| {
                entry
                    .store
                    .selected_option()
                    .map(|option| (entry.id.clone(), option.value.clone()))
            })
            .collect();
        PersistedSession { selections }
    }
}
