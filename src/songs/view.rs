// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Rendered control tree for the song list.
//!
//! A `SongListView` is what the list looks like after a render: the text
//! inputs, the delete buttons and the add button, each tagged with the
//! affordance it triggers. Controls are looked up by role and name.

/// Accessibility role of a rendered control
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    /// Single-line text entry
    Textbox,
    /// Clickable button
    Button,
}

/// What a control does when the user interacts with it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Affordance {
    /// Append a new empty song
    Add,
    /// Edit the song at this index
    Edit(usize),
    /// Remove the song at this index
    Delete(usize),
}

/// A single rendered control
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Control {
    /// Control role
    pub role: Role,
    /// Accessible name (button label, empty for text inputs)
    pub name: String,
    /// Current text (empty for buttons)
    pub value: String,
    /// Interaction target
    pub affordance: Affordance,
}

impl Control {
    /// Create a text input pre-filled with `value`
    pub fn textbox(index: usize, value: impl Into<String>) -> Self {
        Self {
            role: Role::Textbox,
            name: String::new(),
            value: value.into(),
            affordance: Affordance::Edit(index),
        }
    }

    /// Create a button labelled `name`
    pub fn button(name: impl Into<String>, affordance: Affordance) -> Self {
        Self {
            role: Role::Button,
            name: name.into(),
            value: String::new(),
            affordance,
        }
    }
}

/// One song row: its input and the delete button beside it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SongRow {
    pub input: Control,
    pub delete: Control,
}

/// Complete rendered output of an `EditableSongList`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SongListView {
    /// Rows in display order
    pub rows: Vec<SongRow>,
    /// The add button, present for every list length
    pub add: Control,
}

impl SongListView {
    /// Number of song rows
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether there are no song rows
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// All controls in document order
    pub fn controls(&self) -> impl Iterator<Item = &Control> {
        self.rows
            .iter()
            .flat_map(|row| [&row.input, &row.delete])
            .chain(std::iter::once(&self.add))
    }

    /// All text inputs in order
    pub fn textboxes(&self) -> Vec<&Control> {
        self.by_role(Role::Textbox)
    }

    /// All buttons in order
    pub fn buttons(&self) -> Vec<&Control> {
        self.by_role(Role::Button)
    }

    /// Buttons whose name is exactly `name`
    pub fn buttons_named(&self, name: &str) -> Vec<&Control> {
        self.controls()
            .filter(|c| c.role == Role::Button && c.name == name)
            .collect()
    }

    /// First button whose name contains `pattern`, ignoring case
    pub fn button_matching(&self, pattern: &str) -> Option<&Control> {
        let pattern = pattern.to_lowercase();
        self.controls()
            .find(|c| c.role == Role::Button && c.name.to_lowercase().contains(&pattern))
    }

    fn by_role(&self, role: Role) -> Vec<&Control> {
        self.controls().filter(|c| c.role == role).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> SongListView {
        SongListView {
            rows: vec![
                SongRow {
                    input: Control::textbox(0, "A"),
                    delete: Control::button("❌", Affordance::Delete(0)),
                },
                SongRow {
                    input: Control::textbox(1, "B"),
                    delete: Control::button("❌", Affordance::Delete(1)),
                },
            ],
            add: Control::button("Add Song", Affordance::Add),
        }
    }

    #[test]
    fn test_controls_document_order() {
        let view = sample();
        let affordances: Vec<Affordance> = view.controls().map(|c| c.affordance).collect();
        assert_eq!(
            affordances,
            vec![
                Affordance::Edit(0),
                Affordance::Delete(0),
                Affordance::Edit(1),
                Affordance::Delete(1),
                Affordance::Add,
            ]
        );
    }

    #[test]
    fn test_role_queries() {
        let view = sample();
        assert_eq!(view.textboxes().len(), 2);
        assert_eq!(view.buttons().len(), 3);
        assert_eq!(view.buttons_named("❌").len(), 2);
        assert!(view.buttons_named("add song").is_empty());
    }

    #[test]
    fn test_button_matching_ignores_case() {
        let view = sample();
        let add = view.button_matching("add song").unwrap();
        assert_eq!(add.affordance, Affordance::Add);
        assert!(view.button_matching("remove").is_none());
    }

    #[test]
    fn test_textbox_has_no_name() {
        let control = Control::textbox(3, "Title");
        assert_eq!(control.role, Role::Textbox);
        assert!(control.name.is_empty());
        assert_eq!(control.value, "Title");
        assert_eq!(control.affordance, Affordance::Edit(3));
    }
}
