//! New-task input box rendering.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::theme;
use crate::app::{App, PanelFocus, TextInput};

/// Render the new-task input box and its priority selector.
pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(10), Constraint::Length(12)])
        .split(area);

    let is_focused = app.focus == PanelFocus::Input;

    let input_line = if app.new_task.text().is_empty() && !is_focused {
        Line::from(Span::styled("Add a new task...", theme::dimmed()))
    } else {
        input_line(&app.new_task, is_focused)
    };

    let block = Block::default()
        .title(Span::styled(
            "New task",
            theme::panel_title(theme::TASKS_TITLE),
        ))
        .borders(Borders::ALL)
        .border_style(if is_focused {
            theme::highlighted()
        } else {
            theme::normal()
        });

    frame.render_widget(Paragraph::new(input_line).block(block), chunks[0]);

    let priority = Paragraph::new(Line::from(Span::styled(
        app.new_priority.to_string(),
        theme::priority_badge(app.new_priority),
    )))
    .block(Block::default().title("Priority").borders(Borders::ALL));

    frame.render_widget(priority, chunks[1]);
}

/// Build a line showing `input`, with a block cursor when focused.
#[must_use]
pub fn input_line(input: &TextInput, is_focused: bool) -> Line<'static> {
    if !is_focused {
        return Line::from(Span::styled(input.text().to_string(), theme::normal()));
    }

    let before: String = input.text().chars().take(input.cursor()).collect();
    let after: String = input.text().chars().skip(input.cursor()).collect();

    Line::from(vec![
        Span::styled(before, theme::normal()),
        Span::styled("█", theme::input_cursor()),
        Span::styled(after, theme::normal()),
    ])
}
