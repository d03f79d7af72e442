// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! SETLIST - terminal editor for an ordered list of song titles.
//!
//! The core is [`songs::EditableSongList`], a controlled component: it
//! borrows the caller's titles and reports every add, edit and delete as a
//! new `Vec<String>` through a callback. The terminal front-end in [`ui`]
//! is one such caller.

pub mod config;
pub mod control;
pub mod logging;
pub mod songs;
pub mod ui;

pub use songs::{EditableSongList, SongListLabels, SongListView};
