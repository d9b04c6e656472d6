//! Program pane rendering
//!
//! Shows the canonical program text wrapped to the pane width. The
//! instruction about to execute is highlighted; at the end of a faulted run
//! the faulting instruction is drawn in the error colour instead. The pane
//! scrolls to keep that instruction in view until the user scrolls by hand.

use super::border_style;
use crate::program::{CanonicalOp, Program};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Data needed to render the program pane
pub struct ProgramRenderData<'a> {
    pub program: &'a Program,
    /// Offset of the highlighted instruction; may equal the program length
    /// after a halt, in which case nothing is highlighted
    pub pc: usize,
    pub is_fault: bool,
    pub dialect: &'a str,
}

/// Scroll state for the program pane
pub struct ProgramScrollState {
    pub offset: usize,
    /// Keep the current instruction in view; cleared on manual scroll
    pub follow: bool,
}

impl Default for ProgramScrollState {
    fn default() -> Self {
        ProgramScrollState {
            offset: 0,
            follow: true,
        }
    }
}

fn op_style(op: CanonicalOp) -> Style {
    let color = match op {
        CanonicalOp::MoveRight | CanonicalOp::MoveLeft => DEFAULT_THEME.move_op,
        CanonicalOp::Increment | CanonicalOp::Decrement => DEFAULT_THEME.cell_op,
        CanonicalOp::Output | CanonicalOp::Input => DEFAULT_THEME.io_op,
        CanonicalOp::LoopStart | CanonicalOp::LoopEnd => DEFAULT_THEME.loop_op,
    };
    let style = Style::default().fg(color);
    if op.is_loop() {
        style.add_modifier(Modifier::BOLD)
    } else {
        style
    }
}

/// Render the program pane
pub fn render_program_pane(
    frame: &mut Frame,
    area: Rect,
    data: ProgramRenderData,
    is_focused: bool,
    scroll: &mut ProgramScrollState,
) {
    let block = Block::default()
        .title(format!(" Program ({}, {} ops) ", data.dialect, data.program.len()))
        .borders(Borders::ALL)
        .border_style(border_style(is_focused));

    let width = area.width.saturating_sub(2).max(1) as usize;
    let visible_height = area.height.saturating_sub(2).max(1) as usize;

    let ops = data.program.ops();
    let total_rows = ops.len().div_ceil(width).max(1);

    if scroll.follow {
        let current_row = data.pc.min(ops.len().saturating_sub(1)) / width;
        if current_row < scroll.offset {
            scroll.offset = current_row;
        } else if current_row >= scroll.offset + visible_height {
            scroll.offset = current_row + 1 - visible_height;
        }
    }
    scroll.offset = scroll.offset.min(total_rows.saturating_sub(visible_height));

    let highlight = if data.is_fault {
        Style::default()
            .bg(DEFAULT_THEME.error)
            .fg(Color::White)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default()
            .bg(DEFAULT_THEME.current_line_bg)
            .fg(DEFAULT_THEME.secondary)
            .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
    };

    let lines: Vec<Line> = ops
        .chunks(width)
        .enumerate()
        .skip(scroll.offset)
        .take(visible_height)
        .map(|(row, chunk)| {
            let spans: Vec<Span> = chunk
                .iter()
                .enumerate()
                .map(|(col, &op)| {
                    let offset = row * width + col;
                    let style = if offset == data.pc {
                        highlight
                    } else {
                        op_style(op)
                    };
                    Span::styled(op.symbol().to_string(), style)
                })
                .collect();
            Line::from(spans)
        })
        .collect();

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
