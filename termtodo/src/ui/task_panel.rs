//! Task panel rendering: filter tabs, remaining counter and the task list.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Tabs},
};
use termtodo_model::{Filter, Task};

use super::{input_panel, theme};
use crate::app::{App, PanelFocus};

/// Render the task panel.
pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let is_focused = matches!(app.focus, PanelFocus::List | PanelFocus::Edit);

    let block = Block::default()
        .title(Span::styled("Tasks", theme::panel_title(theme::TASKS_TITLE)))
        .borders(Borders::ALL)
        .border_style(if is_focused {
            theme::highlighted()
        } else {
            theme::normal()
        });
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(1)])
        .split(inner);

    render_header(frame, chunks[0], app);
    render_list(frame, chunks[1], app, is_focused);
}

/// Filter tabs on the left, "N tasks left" on the right.
fn render_header(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(10), Constraint::Length(16)])
        .split(area);

    let current = app.store.filter();
    let selected = Filter::ALL.iter().position(|f| *f == current).unwrap_or(0);
    let tabs = Tabs::new(Filter::ALL.iter().map(ToString::to_string))
        .select(selected)
        .style(theme::dimmed())
        .highlight_style(theme::highlighted());
    frame.render_widget(tabs, chunks[0]);

    let counter = Paragraph::new(Span::styled(
        remaining_label(app.store.active_count()),
        theme::dimmed(),
    ))
    .alignment(Alignment::Right);
    frame.render_widget(counter, chunks[1]);
}

/// Text for the remaining-tasks counter.
#[must_use]
pub fn remaining_label(active: usize) -> String {
    if active == 1 {
        "1 task left".to_string()
    } else {
        format!("{active} tasks left")
    }
}

/// Message shown when the filtered list is empty.
#[must_use]
pub const fn empty_message(filter: Filter) -> &'static str {
    match filter {
        Filter::Completed => "No completed tasks yet!",
        Filter::All | Filter::Active => "You're all caught up!",
    }
}

fn render_list(frame: &mut Frame, area: Rect, app: &App, is_focused: bool) {
    let visible = app.store.visible_tasks();

    if visible.is_empty() {
        let message = Paragraph::new(Span::styled(
            empty_message(app.store.filter()),
            theme::dimmed(),
        ))
        .alignment(Alignment::Center);
        frame.render_widget(message, area);
        return;
    }

    let editing = app.store.editing_id();
    let items: Vec<ListItem> = visible
        .iter()
        .enumerate()
        .map(|(idx, task)| {
            let line = if editing == Some(task.id) {
                edit_line(app)
            } else {
                task_line(task)
            };

            let style = if idx == app.selected && is_focused && editing.is_none() {
                theme::selected()
            } else if idx == app.selected {
                theme::bold()
            } else {
                theme::normal()
            };

            ListItem::new(line).style(style)
        })
        .collect();

    // The edited row wins over the cursor so the editor is never scrolled away.
    let focused_row = editing
        .and_then(|id| visible.iter().position(|t| t.id == id))
        .unwrap_or(app.selected);
    let mut state = ListState::default().with_selected(Some(focused_row));
    frame.render_stateful_widget(List::new(items), area, &mut state);
}

/// A read-only task row: checkbox, text, priority badge.
fn task_line(task: &Task) -> Line<'static> {
    let (checkbox, checkbox_style, text_style) = if task.completed {
        ("[✓]", theme::normal().fg(theme::SUCCESS), theme::completed())
    } else {
        ("[ ]", theme::dimmed(), theme::normal())
    };

    Line::from(vec![
        Span::styled(checkbox, checkbox_style),
        Span::raw(" "),
        Span::styled(task.text.clone(), text_style),
        Span::raw("  "),
        Span::styled(
            format!("[{}]", task.priority),
            theme::priority_badge(task.priority),
        ),
    ])
}

/// The row of the task under edit, showing the edit buffer instead.
fn edit_line(app: &App) -> Line<'static> {
    let mut spans = vec![Span::styled("[✎] ", theme::highlighted())];
    spans.extend(input_panel::input_line(&app.edit_input, true).spans);
    spans.push(Span::raw("  "));
    spans.push(Span::styled(
        format!("[{}]", app.edit_priority),
        theme::priority_badge(app.edit_priority),
    ));
    Line::from(spans)
}
