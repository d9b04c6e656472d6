//! TUI pane rendering modules
//!
//! - [`program`]: canonical program text with the current instruction highlighted
//! - [`tape`]: tape cells with the cursor marker
//! - [`output`]: everything the program has written so far
//! - [`status`]: status bar with keybindings and replay state
//!
//! Each pane exports a `render_*` function and, where it scrolls, its scroll
//! state type.

pub mod output;
pub mod program;
pub mod status;
pub mod tape;

use crate::ui::theme::DEFAULT_THEME;
use ratatui::style::{Modifier, Style};

pub use output::render_output_pane;
pub use program::{render_program_pane, ProgramRenderData, ProgramScrollState};
pub use status::{render_status_bar, StatusRenderData};
pub use tape::{render_tape_pane, TapeScrollState};

/// Border style shared by all bordered panes
fn border_style(is_focused: bool) -> Style {
    if is_focused {
        Style::default()
            .fg(DEFAULT_THEME.border_focused)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.border_normal)
    }
}

/// Clamp `offset` so a list of `total` rows fills `visible` rows
fn clamp_scroll(offset: usize, total: usize, visible: usize) -> usize {
    if total > visible {
        offset.min(total - visible)
    } else {
        0
    }
}
