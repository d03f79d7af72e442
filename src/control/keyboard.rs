// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Keyboard shortcut handling.
//!
//! Bindings map a key plus modifiers to a `ControlAction`. Printable keys
//! that are not bound fall through to text entry.

use std::collections::HashMap;

use crossterm::event::{KeyCode, KeyModifiers};

use super::ControlAction;

/// A keyboard shortcut definition
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Shortcut {
    /// Key code
    pub code: KeyCode,
    /// Required modifiers
    pub modifiers: KeyModifiers,
}

impl Shortcut {
    /// Create a new shortcut
    pub fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self { code, modifiers }
    }

    /// Create a shortcut with no modifiers
    pub fn key(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::NONE)
    }

    /// Create a shortcut with Ctrl modifier
    pub fn ctrl(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::CONTROL)
    }

    /// Create a shortcut with Shift modifier
    pub fn shift(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::SHIFT)
    }
}

/// A keyboard binding (shortcut to action)
#[derive(Debug, Clone)]
pub struct KeyBinding {
    /// The shortcut
    pub shortcut: Shortcut,
    /// The action to perform
    pub action: ControlAction,
    /// Description for help display
    pub description: String,
    /// Category for grouping in help
    pub category: String,
}

impl KeyBinding {
    /// Create a new key binding
    pub fn new(
        shortcut: Shortcut,
        action: ControlAction,
        description: impl Into<String>,
    ) -> Self {
        Self {
            shortcut,
            action,
            description: description.into(),
            category: "General".to_string(),
        }
    }

    /// Set the category
    pub fn category(mut self, cat: impl Into<String>) -> Self {
        self.category = cat.into();
        self
    }
}

/// Keyboard controller with configurable bindings
pub struct KeyboardController {
    bindings: HashMap<Shortcut, KeyBinding>,
}

impl KeyboardController {
    /// Create an empty keyboard controller
    pub fn new() -> Self {
        Self {
            bindings: HashMap::new(),
        }
    }

    /// Create a keyboard controller with default bindings
    pub fn with_defaults() -> Self {
        let mut controller = Self::new();
        controller.add_default_bindings();
        controller
    }

    fn add_default_bindings(&mut self) {
        // Navigation
        self.add(KeyBinding::new(
            Shortcut::key(KeyCode::Up),
            ControlAction::FocusUp,
            "Previous row",
        ).category("Navigation"));

        self.add(KeyBinding::new(
            Shortcut::key(KeyCode::Down),
            ControlAction::FocusDown,
            "Next row",
        ).category("Navigation"));

        self.add(KeyBinding::new(
            Shortcut::key(KeyCode::Tab),
            ControlAction::FocusNext,
            "Next control",
        ).category("Navigation"));

        // BackTab is normalized to carry SHIFT in get_action
        self.add(KeyBinding::new(
            Shortcut::shift(KeyCode::BackTab),
            ControlAction::FocusPrev,
            "Previous control",
        ).category("Navigation"));

        // Editing
        self.add(KeyBinding::new(
            Shortcut::key(KeyCode::Enter),
            ControlAction::Activate,
            "Press button",
        ).category("Editing"));

        self.add(KeyBinding::new(
            Shortcut::ctrl(KeyCode::Char('n')),
            ControlAction::AddSong,
            "Add song",
        ).category("Editing"));

        self.add(KeyBinding::new(
            Shortcut::ctrl(KeyCode::Char('d')),
            ControlAction::DeleteFocused,
            "Delete song",
        ).category("Editing"));

        self.add(KeyBinding::new(
            Shortcut::key(KeyCode::Backspace),
            ControlAction::Backspace,
            "Erase character",
        ).category("Editing"));

        self.add(KeyBinding::new(
            Shortcut::ctrl(KeyCode::Char('u')),
            ControlAction::ClearField,
            "Clear title",
        ).category("Editing"));

        // UI
        self.add(KeyBinding::new(
            Shortcut::key(KeyCode::F(1)),
            ControlAction::ToggleHelp,
            "Toggle help",
        ).category("UI"));

        self.add(KeyBinding::new(
            Shortcut::key(KeyCode::Esc),
            ControlAction::Quit,
            "Quit",
        ).category("UI"));

        self.add(KeyBinding::new(
            Shortcut::ctrl(KeyCode::Char('c')),
            ControlAction::Quit,
            "Quit",
        ).category("UI"));
    }

    /// Add a key binding
    pub fn add(&mut self, binding: KeyBinding) {
        self.bindings.insert(binding.shortcut.clone(), binding);
    }

    /// Remove a key binding
    pub fn remove(&mut self, shortcut: &Shortcut) -> Option<KeyBinding> {
        self.bindings.remove(shortcut)
    }

    /// Get the bound action for a key event
    pub fn get_action(&self, code: KeyCode, modifiers: KeyModifiers) -> Option<&ControlAction> {
        // Some terminals send BackTab without SHIFT
        let modifiers = if code == KeyCode::BackTab {
            modifiers | KeyModifiers::SHIFT
        } else {
            modifiers
        };
        let shortcut = Shortcut::new(code, modifiers);
        self.bindings.get(&shortcut).map(|b| &b.action)
    }

    /// Resolve a key event to an action.
    ///
    /// Bound shortcuts win. Otherwise a plain or shifted character is text
    /// entry, and anything else is `ControlAction::None`.
    pub fn process_key(&self, code: KeyCode, modifiers: KeyModifiers) -> ControlAction {
        if let Some(action) = self.get_action(code, modifiers) {
            return action.clone();
        }

        match code {
            KeyCode::Char(c)
                if modifiers == KeyModifiers::NONE || modifiers == KeyModifiers::SHIFT =>
            {
                ControlAction::Type(c)
            }
            _ => ControlAction::None,
        }
    }

    /// Get bindings grouped by category, sorted by description
    pub fn bindings_by_category(&self) -> HashMap<String, Vec<&KeyBinding>> {
        let mut grouped: HashMap<String, Vec<&KeyBinding>> = HashMap::new();

        for binding in self.bindings.values() {
            grouped
                .entry(binding.category.clone())
                .or_default()
                .push(binding);
        }

        for bindings in grouped.values_mut() {
            bindings.sort_by(|a, b| a.description.cmp(&b.description));
        }

        grouped
    }
}

impl Default for KeyboardController {
    fn default() -> Self {
        Self::with_defaults()
    }
}

/// Format a shortcut for display
pub fn format_shortcut(shortcut: &Shortcut) -> String {
    let mut parts = Vec::new();

    if shortcut.modifiers.contains(KeyModifiers::CONTROL) {
        parts.push("Ctrl");
    }
    if shortcut.modifiers.contains(KeyModifiers::ALT) {
        parts.push("Alt");
    }
    if shortcut.modifiers.contains(KeyModifiers::SHIFT) {
        parts.push("Shift");
    }

    let key = match shortcut.code {
        KeyCode::Char(' ') => "Space".to_string(),
        KeyCode::Char(c) => c.to_uppercase().to_string(),
        KeyCode::F(n) => format!("F{}", n),
        KeyCode::Up => "↑".to_string(),
        KeyCode::Down => "↓".to_string(),
        KeyCode::Left => "←".to_string(),
        KeyCode::Right => "→".to_string(),
        KeyCode::Enter => "Enter".to_string(),
        KeyCode::Esc => "Esc".to_string(),
        KeyCode::Tab => "Tab".to_string(),
        KeyCode::BackTab => "Tab".to_string(),
        KeyCode::Backspace => "Backspace".to_string(),
        KeyCode::Delete => "Delete".to_string(),
        _ => "?".to_string(),
    };

    parts.push(&key);
    parts.join("+")
}
