// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Keyboard control for the song list editor.

pub mod keyboard;

pub use keyboard::{format_shortcut, KeyBinding, KeyboardController, Shortcut};

/// Action that can be triggered by controls
#[derive(Debug, Clone, PartialEq)]
pub enum ControlAction {
    /// No action
    None,

    // Focus
    /// Move to the row above
    FocusUp,
    /// Move to the row below
    FocusDown,
    /// Next control in document order
    FocusNext,
    /// Previous control in document order
    FocusPrev,

    // List editing
    /// Press the focused button
    Activate,
    /// Append a new empty song
    AddSong,
    /// Delete the focused row
    DeleteFocused,
    /// Type a character into the focused title
    Type(char),
    /// Remove the last character of the focused title
    Backspace,
    /// Empty the focused title
    ClearField,

    // UI
    /// Toggle help display
    ToggleHelp,
    /// Quit application
    Quit,
}

impl ControlAction {
    /// Whether this action can change the song list
    pub fn is_edit(&self) -> bool {
        matches!(
            self,
            ControlAction::Activate
                | ControlAction::AddSong
                | ControlAction::DeleteFocused
                | ControlAction::Type(_)
                | ControlAction::Backspace
                | ControlAction::ClearField
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_edit() {
        assert!(ControlAction::AddSong.is_edit());
        assert!(ControlAction::Type('a').is_edit());
        assert!(!ControlAction::FocusDown.is_edit());
        assert!(!ControlAction::Quit.is_edit());
        assert!(!ControlAction::None.is_edit());
    }
}
