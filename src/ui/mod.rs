// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Terminal UI for the setlist editor.
//!
//! `UiState` is the owner of the song titles. Each key press is routed to an
//! `EditableSongList` built over the current titles; when the list reports a
//! new value through its callback, the state commits it and the next frame
//! renders from it.

mod song_list;

pub use song_list::SongListWidget;

use std::io::{self, Stdout};
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame, Terminal,
};
use tracing::{debug, info};

use crate::config::AppConfig;
use crate::control::{format_shortcut, ControlAction, KeyboardController};
use crate::songs::{EditableSongList, SongListLabels};

/// How long a status message stays visible
const STATUS_TIMEOUT: Duration = Duration::from_secs(3);

/// Help overlay category order
const HELP_CATEGORIES: [&str; 3] = ["Navigation", "Editing", "UI"];

/// Focused control in the song list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    /// Title input of a row
    Input(usize),
    /// Delete button of a row
    Delete(usize),
    /// The add button
    Add,
}

impl Focus {
    /// Row index, if the focus is on a row
    pub fn row(self) -> Option<usize> {
        match self {
            Focus::Input(i) | Focus::Delete(i) => Some(i),
            Focus::Add => None,
        }
    }

    /// Move one row down; past the last row is the add button
    pub fn down(self, len: usize) -> Self {
        match self {
            Focus::Input(i) if i + 1 < len => Focus::Input(i + 1),
            Focus::Delete(i) if i + 1 < len => Focus::Delete(i + 1),
            _ => Focus::Add,
        }
    }

    /// Move one row up; from the add button go to the last input
    pub fn up(self, len: usize) -> Self {
        match self {
            Focus::Input(i) if i > 0 => Focus::Input(i - 1),
            Focus::Delete(i) if i > 0 => Focus::Delete(i - 1),
            Focus::Add if len > 0 => Focus::Input(len - 1),
            other => other,
        }
    }

    /// Next control in document order, wrapping around
    pub fn next(self, len: usize) -> Self {
        match self {
            Focus::Input(i) => Focus::Delete(i),
            Focus::Delete(i) if i + 1 < len => Focus::Input(i + 1),
            Focus::Delete(_) => Focus::Add,
            Focus::Add if len > 0 => Focus::Input(0),
            Focus::Add => Focus::Add,
        }
    }

    /// Previous control in document order, wrapping around
    pub fn prev(self, len: usize) -> Self {
        match self {
            Focus::Delete(i) => Focus::Input(i),
            Focus::Input(i) if i > 0 => Focus::Delete(i - 1),
            Focus::Input(_) => Focus::Add,
            Focus::Add if len > 0 => Focus::Delete(len - 1),
            Focus::Add => Focus::Add,
        }
    }

    /// Keep the focus on an existing control after the list length changed
    pub fn clamp(self, len: usize) -> Self {
        match self {
            Focus::Input(_) | Focus::Delete(_) if len == 0 => Focus::Add,
            Focus::Input(i) if i >= len => Focus::Input(len - 1),
            Focus::Delete(i) if i >= len => Focus::Delete(len - 1),
            other => other,
        }
    }
}

/// State owned by the UI: the song titles and everything around them
#[derive(Debug, Clone)]
pub struct UiState {
    /// Song titles in display order
    pub songs: Vec<String>,
    /// Focused control
    pub focus: Focus,
    /// Help text visible
    pub show_help: bool,
    /// Status message
    pub status_message: Option<String>,
    /// Status message timestamp
    pub status_time: Option<Instant>,
}

impl Default for UiState {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl UiState {
    /// Create state around an initial list of titles
    pub fn new(songs: Vec<String>) -> Self {
        let focus = if songs.is_empty() {
            Focus::Add
        } else {
            Focus::Input(0)
        };
        Self {
            songs,
            focus,
            show_help: false,
            status_message: None,
            status_time: None,
        }
    }

    /// Set a status message that will be displayed temporarily
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
        self.status_time = Some(Instant::now());
    }

    /// Clear expired status message
    pub fn clear_expired_status(&mut self) {
        if let Some(time) = self.status_time {
            if time.elapsed() > STATUS_TIMEOUT {
                self.status_message = None;
                self.status_time = None;
            }
        }
    }

    /// Apply an action. Returns whether the song list was replaced.
    pub fn apply(&mut self, action: &ControlAction, labels: &SongListLabels) -> bool {
        let len = self.songs.len();
        // songs may have been replaced since the focus was set
        self.focus = self.focus.clamp(len);
        let focus = self.focus;

        match action {
            ControlAction::FocusUp => self.focus = focus.up(len),
            ControlAction::FocusDown => self.focus = focus.down(len),
            ControlAction::FocusNext => self.focus = focus.next(len),
            ControlAction::FocusPrev => self.focus = focus.prev(len),
            ControlAction::ToggleHelp => self.show_help = !self.show_help,
            ControlAction::Activate if matches!(focus, Focus::Input(_)) => {
                self.focus = focus.down(len);
            }
            _ => {}
        }

        if !action.is_edit() {
            return false;
        }

        let mut committed: Option<Vec<String>> = None;
        {
            let mut list = EditableSongList::new(&self.songs, |next| committed = Some(next))
                .labels(labels.clone());

            match (action, focus) {
                (ControlAction::AddSong, _) | (ControlAction::Activate, Focus::Add) => list.add(),
                (ControlAction::DeleteFocused, Focus::Input(i) | Focus::Delete(i))
                | (ControlAction::Activate, Focus::Delete(i)) => list.delete(i),
                (ControlAction::Type(c), Focus::Input(i)) => {
                    let mut text = self.songs[i].clone();
                    text.push(*c);
                    list.edit(i, text);
                }
                (ControlAction::Backspace, Focus::Input(i)) if !self.songs[i].is_empty() => {
                    let mut text = self.songs[i].clone();
                    text.pop();
                    list.edit(i, text);
                }
                (ControlAction::ClearField, Focus::Input(i)) if !self.songs[i].is_empty() => {
                    list.edit(i, String::new());
                }
                _ => {}
            }
        }

        let Some(next) = committed else {
            return false;
        };
        self.commit(action, focus, next);
        true
    }

    fn commit(&mut self, action: &ControlAction, focus: Focus, next: Vec<String>) {
        let before = self.songs.len();
        let removed = (next.len() < before)
            .then(|| focus.row().map(|i| self.songs[i].clone()))
            .flatten();

        self.songs = next;

        if self.songs.len() > before {
            self.focus = Focus::Input(self.songs.len() - 1);
            self.set_status("Added song");
        } else if let Some(title) = removed {
            self.focus = focus.clamp(self.songs.len());
            if title.is_empty() {
                self.set_status("Deleted untitled song");
            } else {
                self.set_status(format!("Deleted \"{}\"", title));
            }
        }
        debug!(?action, len = self.songs.len(), "committed song list");
    }
}

/// Terminal UI application
pub struct App {
    state: UiState,
    config: AppConfig,
    keyboard: KeyboardController,
    terminal: Terminal<CrosstermBackend<Stdout>>,
    running: bool,
}

impl App {
    /// Create a new app around an initial state
    pub fn new(state: UiState, config: AppConfig) -> io::Result<Self> {
        // Setup terminal
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;

        Ok(Self {
            state,
            config,
            keyboard: KeyboardController::with_defaults(),
            terminal,
            running: true,
        })
    }

    /// Check if running
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Stop the app
    pub fn quit(&mut self) {
        self.running = false;
    }

    /// Handle a key event
    pub fn handle_key(&mut self, code: KeyCode, modifiers: KeyModifiers) -> ControlAction {
        let action = self.keyboard.process_key(code, modifiers);
        match action {
            ControlAction::Quit => self.quit(),
            ControlAction::None => {}
            _ => {
                self.state.apply(&action, &self.config.labels());
            }
        }
        action
    }

    /// Poll for events with timeout
    pub fn poll_event(&self) -> io::Result<Option<Event>> {
        let timeout = Duration::from_millis(1000 / self.config.ui.frame_rate.max(1) as u64);
        if event::poll(timeout)? {
            Ok(Some(event::read()?))
        } else {
            Ok(None)
        }
    }

    /// Draw the UI
    pub fn draw(&mut self) -> io::Result<()> {
        let state = &self.state;
        let config = &self.config;
        let keyboard = &self.keyboard;
        self.terminal.draw(|frame| render(frame, state, config, keyboard))?;
        Ok(())
    }

    /// Run until the user quits. Returns the final titles.
    pub fn run(mut self) -> Result<Vec<String>> {
        info!(songs = self.state.songs.len(), "editor started");

        while self.is_running() {
            self.draw().context("Failed to draw frame")?;

            if let Some(Event::Key(key)) = self.poll_event().context("Failed to read input")? {
                if key.kind == KeyEventKind::Press {
                    self.handle_key(key.code, key.modifiers);
                }
            }

            self.state.clear_expired_status();
        }

        info!(songs = self.state.songs.len(), "editor closed");
        Ok(std::mem::take(&mut self.state.songs))
    }

    /// Cleanup terminal on drop
    fn cleanup(&mut self) -> io::Result<()> {
        disable_raw_mode()?;
        execute!(self.terminal.backend_mut(), LeaveAlternateScreen)?;
        self.terminal.show_cursor()?;
        Ok(())
    }
}

impl Drop for App {
    fn drop(&mut self) {
        let _ = self.cleanup();
    }
}

/// Render a full frame: song list, status bar and optional help overlay
pub fn render(
    frame: &mut Frame,
    state: &UiState,
    config: &AppConfig,
    keyboard: &KeyboardController,
) {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(3),    // Song list
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    let list = EditableSongList::new(&state.songs, |_| {}).labels(config.labels());
    let view = list.render();
    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" {} ({}) ", config.ui.title, view.len()));
    frame.render_widget(
        SongListWidget::new(&view).focus(Some(state.focus)).block(block),
        chunks[0],
    );

    render_status_bar(frame, chunks[1], state);

    if state.show_help {
        render_help_overlay(frame, area, keyboard);
    }
}

/// Render status bar
fn render_status_bar(frame: &mut Frame, area: Rect, state: &UiState) {
    let text = if let Some(ref msg) = state.status_message {
        Span::styled(msg.as_str(), Style::default().fg(Color::Yellow))
    } else {
        Span::styled(
            " ↑/↓: Row | Tab: Next | Enter: Press | Ctrl+N: Add | Ctrl+D: Delete | F1: Help | Esc: Quit",
            Style::default().fg(Color::DarkGray),
        )
    };

    frame.render_widget(Paragraph::new(text), area);
}

/// Render help overlay
fn render_help_overlay(frame: &mut Frame, area: Rect, keyboard: &KeyboardController) {
    let grouped = keyboard.bindings_by_category();

    let mut help_text = Vec::new();
    for category in HELP_CATEGORIES {
        let Some(bindings) = grouped.get(category) else {
            continue;
        };
        if !help_text.is_empty() {
            help_text.push(Line::from(""));
        }
        help_text.push(Line::from(Span::styled(
            category,
            Style::default().add_modifier(Modifier::BOLD),
        )));
        for binding in bindings {
            help_text.push(Line::from(format!(
                "  {:<12}{}",
                format_shortcut(&binding.shortcut),
                binding.description
            )));
        }
    }

    // Calculate centered area
    let width = 44.min(area.width.saturating_sub(4));
    let height = (help_text.len() as u16 + 2).min(area.height.saturating_sub(2));
    let x = area.x + (area.width - width) / 2;
    let y = area.y + (area.height - height) / 2;
    let help_area = Rect::new(x, y, width, height);

    frame.render_widget(Clear, help_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Help ")
        .style(Style::default().bg(Color::Black));

    let inner = block.inner(help_area);
    frame.render_widget(block, help_area);
    frame.render_widget(Paragraph::new(help_text), inner);
}
