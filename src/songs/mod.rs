// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Editable song list component.
//!
//! `EditableSongList` is fully controlled: it borrows the caller's titles,
//! renders one text input and one delete button per title plus a single add
//! button, and reports every change as a new `Vec<String>` through its
//! update callback. The borrowed slice is never modified.

pub mod view;

pub use view::{Affordance, Control, Role, SongListView, SongRow};

use tracing::{debug, warn};

/// Default label of the add button
pub const DEFAULT_ADD_LABEL: &str = "Add Song";
/// Default label of each delete button
pub const DEFAULT_DELETE_LABEL: &str = "❌";

/// Button labels used when rendering
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SongListLabels {
    pub add: String,
    pub delete: String,
}

impl Default for SongListLabels {
    fn default() -> Self {
        Self {
            add: DEFAULT_ADD_LABEL.to_string(),
            delete: DEFAULT_DELETE_LABEL.to_string(),
        }
    }
}

/// Controlled list of song titles
pub struct EditableSongList<'a, F>
where
    F: FnMut(Vec<String>),
{
    songs: &'a [String],
    on_change: F,
    labels: SongListLabels,
}

impl<'a, F> EditableSongList<'a, F>
where
    F: FnMut(Vec<String>),
{
    /// Create a list over `songs` reporting changes to `on_change`
    pub fn new(songs: &'a [String], on_change: F) -> Self {
        Self {
            songs,
            on_change,
            labels: SongListLabels::default(),
        }
    }

    /// Set the button labels
    pub fn labels(mut self, labels: SongListLabels) -> Self {
        self.labels = labels;
        self
    }

    /// Current titles as supplied by the caller
    pub fn songs(&self) -> &'a [String] {
        self.songs
    }

    /// Render the control tree. Never invokes the callback.
    pub fn render(&self) -> SongListView {
        let rows = self
            .songs
            .iter()
            .enumerate()
            .map(|(i, title)| SongRow {
                input: Control::textbox(i, title.as_str()),
                delete: Control::button(self.labels.delete.as_str(), Affordance::Delete(i)),
            })
            .collect();

        SongListView {
            rows,
            add: Control::button(self.labels.add.as_str(), Affordance::Add),
        }
    }

    /// Append an empty title
    pub fn add(&mut self) {
        let mut next = Vec::with_capacity(self.songs.len() + 1);
        next.extend_from_slice(self.songs);
        next.push(String::new());
        self.commit("add", next);
    }

    /// Replace the title at `index` with `text`
    pub fn edit(&mut self, index: usize, text: impl Into<String>) {
        if !self.in_range(index, "edit") {
            return;
        }
        let mut next = self.songs.to_vec();
        next[index] = text.into();
        self.commit("edit", next);
    }

    /// Remove the title at `index`
    pub fn delete(&mut self, index: usize) {
        if !self.in_range(index, "delete") {
            return;
        }
        let mut next = self.songs.to_vec();
        next.remove(index);
        self.commit("delete", next);
    }

    /// Click a rendered button. Text inputs are not activatable.
    pub fn activate(&mut self, affordance: Affordance) {
        match affordance {
            Affordance::Add => self.add(),
            Affordance::Delete(index) => self.delete(index),
            Affordance::Edit(_) => {}
        }
    }

    fn in_range(&self, index: usize, op: &str) -> bool {
        if index < self.songs.len() {
            return true;
        }
        warn!(op, index, len = self.songs.len(), "ignoring stale song index");
        false
    }

    fn commit(&mut self, op: &str, next: Vec<String>) {
        debug!(op, len = next.len(), "song list changed");
        (self.on_change)(next);
    }
}
