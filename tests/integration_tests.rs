// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Integration tests for SETLIST
//!
//! These tests drive the song list through its public API the way a caller
//! does: render, interact, commit whatever the callback produced, render
//! again.

use std::cell::RefCell;
use std::rc::Rc;

use crossterm::event::{KeyCode, KeyModifiers};
use ratatui::{backend::TestBackend, buffer::Buffer, Terminal};
use setlist::config::AppConfig;
use setlist::control::{ControlAction, KeyboardController};
use setlist::songs::{Affordance, EditableSongList, Role};
use setlist::ui::{self, Focus, UiState};

fn titles(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

type Recorder = Box<dyn FnMut(Vec<String>)>;

/// Run one interaction against `songs` and collect every callback value
fn interact<G>(songs: &[String], gesture: G) -> Vec<Vec<String>>
where
    G: FnOnce(&mut EditableSongList<'_, Recorder>),
{
    let calls = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&calls);
    let recorder: Recorder = Box::new(move |next| sink.borrow_mut().push(next));

    let mut list = EditableSongList::new(songs, recorder);
    gesture(&mut list);
    drop(list);

    calls.take()
}

fn buffer_lines(buffer: &Buffer) -> Vec<String> {
    let width = buffer.area.width as usize;
    buffer
        .content
        .chunks(width)
        .map(|row| row.iter().map(|cell| cell.symbol()).collect())
        .collect()
}

#[test]
fn test_renders_add_button_for_empty_list() {
    let songs: Vec<String> = Vec::new();
    let view = EditableSongList::new(&songs, |_| {}).render();

    let add = view.button_matching("add song").expect("add button");
    assert_eq!(add.role, Role::Button);
    assert_eq!(add.affordance, Affordance::Add);
    assert!(view.textboxes().is_empty());
}

#[test]
fn test_renders_each_song_as_textbox() {
    let songs = titles(&["A", "B"]);
    let view = EditableSongList::new(&songs, |_| {}).render();

    let inputs = view.textboxes();
    assert_eq!(inputs.len(), 2);
    assert_eq!(inputs[0].value, "A");
    assert_eq!(inputs[1].value, "B");
    assert_eq!(view.buttons_named("❌").len(), 2);
    assert_eq!(view.buttons().len(), 3);
}

#[test]
fn test_add_song_appends_empty_title() {
    let songs = titles(&["first"]);
    let calls = interact(&songs, |list| {
        let add = list.render().add.affordance;
        list.activate(add);
    });
    assert_eq!(calls, vec![titles(&["first", ""])]);
}

#[test]
fn test_edit_updates_that_index() {
    let songs = titles(&["A"]);
    let calls = interact(&songs, |list| list.edit(0, "Updated!"));
    assert_eq!(calls, vec![titles(&["Updated!"])]);
}

#[test]
fn test_delete_removes_correct_song() {
    let songs = titles(&["A", "B", "C"]);
    let calls = interact(&songs, |list| {
        let view = list.render();
        let target = view.buttons_named("❌")[1].affordance;
        list.activate(target);
    });
    assert_eq!(calls, vec![titles(&["A", "C"])]);
}

#[test]
fn test_add_edit_delete_flow() {
    // Caller state lives here; each step commits the last callback value
    let mut songs = titles(&["start"]);

    let calls = interact(&songs, |list| list.add());
    assert_eq!(calls, vec![titles(&["start", ""])]);
    songs = calls.into_iter().last().unwrap();

    let calls = interact(&songs, |list| {
        let view = list.render();
        let Affordance::Edit(index) = view.textboxes()[1].affordance else {
            panic!("textbox without edit affordance");
        };
        list.edit(index, "New Song");
    });
    assert_eq!(calls, vec![titles(&["start", "New Song"])]);
    songs = calls.into_iter().last().unwrap();

    let calls = interact(&songs, |list| {
        let view = list.render();
        let target = view.buttons_named("❌")[0].affordance;
        list.activate(target);
    });
    assert_eq!(calls, vec![titles(&["New Song"])]);
}

#[test]
fn test_rerender_without_interaction_is_silent() {
    let songs = titles(&["A", "B"]);
    let mut count = 0;
    {
        let list = EditableSongList::new(&songs, |_| count += 1);
        let first = list.render();
        let second = list.render();
        assert_eq!(first, second);
    }
    assert_eq!(count, 0);
}

#[test]
fn test_stale_delete_after_shrink_is_ignored() {
    let songs = titles(&["A", "B", "C"]);
    let old_view = EditableSongList::new(&songs, |_| {}).render();
    let stale = old_view.buttons_named("❌")[2].affordance;

    let shrunk = titles(&["A"]);
    let calls = interact(&shrunk, |list| list.activate(stale));
    assert!(calls.is_empty());
}

#[test]
fn test_keyboard_session_commits_through_state() {
    let keyboard = KeyboardController::with_defaults();
    let labels = AppConfig::default().labels();
    let mut state = UiState::new(titles(&["start"]));

    let press = |state: &mut UiState, code: KeyCode, mods: KeyModifiers| {
        let action = keyboard.process_key(code, mods);
        state.apply(&action, &labels)
    };

    assert!(press(&mut state, KeyCode::Char('n'), KeyModifiers::CONTROL));
    assert_eq!(state.songs, titles(&["start", ""]));
    assert_eq!(state.focus, Focus::Input(1));

    for c in "Hi".chars() {
        assert!(press(&mut state, KeyCode::Char(c), KeyModifiers::NONE));
    }
    assert_eq!(state.songs, titles(&["start", "Hi"]));

    assert!(!press(&mut state, KeyCode::Up, KeyModifiers::NONE));
    assert_eq!(state.focus, Focus::Input(0));
    assert!(!press(&mut state, KeyCode::Tab, KeyModifiers::NONE));
    assert_eq!(state.focus, Focus::Delete(0));
    assert!(press(&mut state, KeyCode::Enter, KeyModifiers::NONE));
    assert_eq!(state.songs, titles(&["Hi"]));

    assert_eq!(
        keyboard.process_key(KeyCode::Esc, KeyModifiers::NONE),
        ControlAction::Quit
    );
}

#[test]
fn test_frame_shows_titles_and_buttons() {
    let config = AppConfig::default();
    let keyboard = KeyboardController::with_defaults();
    let state = UiState::new(titles(&["Opener", "Closer"]));

    let mut terminal = Terminal::new(TestBackend::new(50, 10)).unwrap();
    terminal
        .draw(|frame| ui::render(frame, &state, &config, &keyboard))
        .unwrap();

    let lines = buffer_lines(terminal.backend().buffer());
    let screen = lines.join("\n");
    assert!(screen.contains("Setlist (2)"));
    assert!(lines.iter().any(|l| l.contains("Opener")));
    assert!(lines.iter().any(|l| l.contains("Closer")));
    assert_eq!(lines.iter().filter(|l| l.contains("❌")).count(), 2);
    assert_eq!(lines.iter().filter(|l| l.contains("[ Add Song ]")).count(), 1);
}

#[test]
fn test_frame_for_empty_list() {
    let config = AppConfig::default();
    let keyboard = KeyboardController::with_defaults();
    let state = UiState::default();

    let mut terminal = Terminal::new(TestBackend::new(50, 8)).unwrap();
    terminal
        .draw(|frame| ui::render(frame, &state, &config, &keyboard))
        .unwrap();

    let screen = buffer_lines(terminal.backend().buffer()).join("\n");
    assert!(screen.contains("No songs yet"));
    assert!(screen.contains("[ Add Song ]"));
    assert!(!screen.contains("❌"));
}

#[test]
fn test_help_overlay_lists_bindings() {
    let config = AppConfig::default();
    let keyboard = KeyboardController::with_defaults();
    let mut state = UiState::default();
    state.show_help = true;

    let mut terminal = Terminal::new(TestBackend::new(60, 30)).unwrap();
    terminal
        .draw(|frame| ui::render(frame, &state, &config, &keyboard))
        .unwrap();

    let screen = buffer_lines(terminal.backend().buffer()).join("\n");
    assert!(screen.contains("Help"));
    assert!(screen.contains("Ctrl+N"));
    assert!(screen.contains("Add song"));
    assert_eq!(screen.matches("Previous control").count(), 1);
}
