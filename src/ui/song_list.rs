// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Song list display widget.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph, Widget},
};

use crate::songs::SongListView;
use super::Focus;

/// Widget drawing a rendered song list
pub struct SongListWidget<'a> {
    view: &'a SongListView,
    focus: Option<Focus>,
    block: Option<Block<'a>>,
}

impl<'a> SongListWidget<'a> {
    /// Create a new song list widget
    pub fn new(view: &'a SongListView) -> Self {
        Self {
            view,
            focus: None,
            block: None,
        }
    }

    /// Set the focused control
    pub fn focus(mut self, focus: Option<Focus>) -> Self {
        self.focus = focus;
        self
    }

    /// Set the block wrapper
    pub fn block(mut self, block: Block<'a>) -> Self {
        self.block = Some(block);
        self
    }
}

impl Widget for SongListWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let area = if let Some(block) = self.block {
            let inner = block.inner(area);
            block.render(area, buf);
            inner
        } else {
            area
        };

        if area.height == 0 {
            return;
        }

        // Last line is always the add button
        let list_height = area.height.saturating_sub(1);
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(list_height), Constraint::Length(1)])
            .split(area);

        if self.view.is_empty() {
            Paragraph::new("No songs yet")
                .style(Style::default().fg(Color::DarkGray))
                .render(chunks[0], buf);
        } else {
            let visible = chunks[0].height as usize;
            let offset = scroll_offset(self.focus, visible, self.view.len());
            for (line, index) in (offset..self.view.len()).take(visible).enumerate() {
                let row_area = Rect::new(
                    chunks[0].x,
                    chunks[0].y + line as u16,
                    chunks[0].width,
                    1,
                );
                render_row(row_area, buf, self.view, index, self.focus);
            }
        }

        let add_focused = self.focus == Some(Focus::Add);
        Paragraph::new(Line::from(button_span(&self.view.add.name, add_focused)))
            .render(chunks[1], buf);
    }
}

/// First row index to draw so the focused row stays on screen
fn scroll_offset(focus: Option<Focus>, visible: usize, len: usize) -> usize {
    if visible == 0 || len <= visible {
        return 0;
    }
    let target = match focus.and_then(Focus::row) {
        Some(row) => row,
        // Add sits below the list, keep the tail in view
        None if focus == Some(Focus::Add) => len - 1,
        None => 0,
    };
    (target + 1).saturating_sub(visible).min(len - visible)
}

/// Render one input + delete row
fn render_row(area: Rect, buf: &mut Buffer, view: &SongListView, index: usize, focus: Option<Focus>) {
    let row = &view.rows[index];
    let input_focused = focus == Some(Focus::Input(index));
    let delete_focused = focus == Some(Focus::Delete(index));
    let delete_button = button_span(&row.delete.name, delete_focused);
    let delete_width = delete_button.width() as u16 + 1;

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(4),            // Index
            Constraint::Min(8),               // Title input
            Constraint::Length(delete_width), // Delete button
        ])
        .split(area);

    let idx_style = if input_focused || delete_focused {
        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let idx_text = if input_focused || delete_focused {
        format!(">{:>2}", index + 1)
    } else {
        format!(" {:>2}", index + 1)
    };
    Paragraph::new(idx_text).style(idx_style).render(chunks[0], buf);

    // Pad so the underline spans the whole field
    let width = chunks[1].width.saturating_sub(1) as usize;
    let mut text = row.input.value.clone();
    if input_focused {
        text.push('▏');
    }
    let field = format!("{:<width$}", text, width = width);
    let field_style = if input_focused {
        Style::default()
            .fg(Color::White)
            .bg(Color::DarkGray)
            .add_modifier(Modifier::UNDERLINED)
    } else {
        Style::default().fg(Color::White).add_modifier(Modifier::UNDERLINED)
    };
    Paragraph::new(field).style(field_style).render(chunks[1], buf);

    Paragraph::new(Line::from(delete_button)).render(chunks[2], buf);
}

fn button_span(label: &str, focused: bool) -> Span<'static> {
    let style = if focused {
        Style::default().fg(Color::Black).bg(Color::Yellow).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Cyan)
    };
    Span::styled(format!("[ {} ]", label), style)
}
