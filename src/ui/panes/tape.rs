//! Tape pane rendering
//!
//! One row per cell: index, value, and the character the cell would print as
//! when it is printable. The row under the cursor is marked and, unless the
//! user has scrolled the pane by hand, kept in view.

use super::{border_style, clamp_scroll};
use crate::interpreter::io::cell_to_char;
use crate::memory::{Cell, Tape};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
    Frame,
};

/// Scroll state for the tape pane
pub struct TapeScrollState {
    pub offset: usize,
    /// Follow the cursor; cleared when the user scrolls manually
    pub follow: bool,
}

impl Default for TapeScrollState {
    fn default() -> Self {
        TapeScrollState {
            offset: 0,
            follow: true,
        }
    }
}

fn printable(value: Cell) -> String {
    match cell_to_char(value) {
        '\n' => "'\\n'".to_string(),
        '\t' => "'\\t'".to_string(),
        c if c != char::REPLACEMENT_CHARACTER && !c.is_control() => format!("'{}'", c),
        _ => String::new(),
    }
}

/// Render the tape pane
pub fn render_tape_pane(
    frame: &mut Frame,
    area: Rect,
    tape: &Tape,
    cursor: usize,
    is_focused: bool,
    scroll_state: &mut TapeScrollState,
) {
    let block = Block::default()
        .title(format!(" Tape ({} cells) ", tape.len()))
        .borders(Borders::ALL)
        .border_style(border_style(is_focused));

    let visible_height = area.height.saturating_sub(2).max(1) as usize;

    if scroll_state.follow {
        if cursor < scroll_state.offset {
            scroll_state.offset = cursor;
        } else if cursor >= scroll_state.offset + visible_height {
            scroll_state.offset = cursor + 1 - visible_height;
        }
    }
    scroll_state.offset = clamp_scroll(scroll_state.offset, tape.len(), visible_height);

    let items: Vec<ListItem> = tape
        .cells()
        .iter()
        .enumerate()
        .skip(scroll_state.offset)
        .take(visible_height)
        .map(|(index, &value)| {
            let is_cursor = index == cursor;
            let marker = if is_cursor { "▶ " } else { "  " };
            let value_style = if is_cursor {
                Style::default()
                    .fg(DEFAULT_THEME.cursor)
                    .add_modifier(Modifier::BOLD)
            } else if value == 0 {
                Style::default().fg(DEFAULT_THEME.comment)
            } else {
                Style::default().fg(DEFAULT_THEME.fg)
            };

            let line = Line::from(vec![
                Span::styled(marker, Style::default().fg(DEFAULT_THEME.cursor)),
                Span::styled(
                    format!("[{:>5}]", index),
                    Style::default().fg(DEFAULT_THEME.comment),
                ),
                Span::styled(format!(" {:>12}", value), value_style),
                Span::styled(
                    format!("  {}", printable(value)),
                    Style::default().fg(DEFAULT_THEME.secondary),
                ),
            ]);
            let item = ListItem::new(line);
            if is_cursor {
                item.style(Style::default().bg(DEFAULT_THEME.current_line_bg))
            } else {
                item
            }
        })
        .collect();

    frame.render_widget(List::new(items).block(block), area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_printable() {
        assert_eq!(printable(72), "'H'");
        assert_eq!(printable(10), "'\\n'");
        assert_eq!(printable(0), "");
        assert_eq!(printable(-5), "");
    }
}
