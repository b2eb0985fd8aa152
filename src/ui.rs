use crate::app::App;
use crate::form::{Focus, ADD_LABEL, DATE_LABEL, NAME_TITLE};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Position, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

pub const EMPTY_MESSAGE: &str = "You have no todo's left";
pub const LATE_BG: Color = Color::Red;
pub const DEFAULT_BG: Color = Color::Reset;

fn border_style(focused: bool) -> Style {
    if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    }
}

pub fn draw(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![Constraint::Length(3), Constraint::Min(3)])
        .split(f.area());

    draw_form(f, app, chunks[0]);
    draw_list(f, app, chunks[1]);
}

fn draw_form(f: &mut Frame, app: &App, area: Rect) {
    let form = &app.form;
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(vec![
            Constraint::Percentage(60),
            Constraint::Percentage(28),
            Constraint::Percentage(12),
        ])
        .split(area);

    let inputs = [
        (NAME_TITLE, form.name.as_str(), Focus::Name, chunks[0]),
        (DATE_LABEL, form.due_date.as_str(), Focus::DueDate, chunks[1]),
    ];
    for (title, value, focus, rect) in inputs {
        let focused = form.focus == focus;
        let input = Paragraph::new(value).block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_style(border_style(focused)),
        );
        f.render_widget(input, rect);
        if focused {
            let typed = value.chars().count().min(rect.width as usize) as u16;
            let x = rect.x.saturating_add(1).saturating_add(typed);
            f.set_cursor_position(Position::new(x.min(rect.right().saturating_sub(2)), rect.y + 1));
        }
    }

    let button_style = if form.focus == Focus::AddButton {
        Style::default().add_modifier(Modifier::BOLD | Modifier::REVERSED)
    } else {
        Style::default()
    };
    let button = Paragraph::new(Span::styled(ADD_LABEL, button_style))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style(form.focus == Focus::AddButton)),
        );
    f.render_widget(button, chunks[2]);
}

fn draw_list(f: &mut Frame, app: &App, area: Rect) {
    let focused = app.form.focus == Focus::List;
    let block = Block::default()
        .title("Todo's")
        .borders(Borders::ALL)
        .border_style(border_style(focused));

    if app.list.is_empty() {
        let empty = Paragraph::new(EMPTY_MESSAGE)
            .alignment(Alignment::Center)
            .block(block);
        f.render_widget(empty, area);
        return;
    }

    let today = app.today();
    let items: Vec<ListItem> = app
        .list
        .iter()
        .map(|t| {
            let bg = if t.is_past_due(today) { LATE_BG } else { DEFAULT_BG };
            ListItem::new(Line::from(vec![
                Span::raw("[ ] "),
                Span::raw(&t.name),
                Span::raw(format!("  (Due: {})", t.due_date_label())),
            ]))
            .style(Style::default().bg(bg))
        })
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(Style::default().add_modifier(Modifier::BOLD))
        .highlight_symbol("> ");

    let mut state = ListState::default();
    if focused {
        state.select(Some(app.list.selected_task));
    }
    f.render_stateful_widget(list, area, &mut state);
}
