//! Status bar rendering.

use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
};

use super::theme;
use crate::app::{App, PanelFocus};

/// Key help for the focused panel.
#[must_use]
pub const fn help_text(focus: PanelFocus) -> &'static str {
    match focus {
        PanelFocus::Input => "Enter: add | ↑↓: priority | Tab: tasks | Esc: quit",
        PanelFocus::List => {
            "↑↓/jk: select | Space: toggle | e: edit | d: delete | f/1-3: filter | Tab: input | q: quit"
        }
        PanelFocus::Edit => "Enter: save | ↑↓: priority | Esc: cancel",
    }
}

/// Render the status bar at the bottom of the screen.
pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let status_line = Line::from(vec![
        Span::styled(
            concat!("TermTodo v", env!("CARGO_PKG_VERSION")),
            theme::bold(),
        ),
        Span::raw(" | "),
        Span::raw(format!(
            "{} total, {} done",
            app.store.len(),
            app.store.completed_count()
        )),
        Span::raw(" | "),
        Span::styled(help_text(app.focus), theme::dimmed()),
    ]);

    let paragraph = Paragraph::new(status_line).style(theme::status_bar_bg());
    frame.render_widget(paragraph, area);
}
