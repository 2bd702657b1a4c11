use ratatui::{
    prelude::*,
    widgets::{Paragraph, Wrap},
};

use crate::app::App;
use crate::models::Question;

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let question = app.question();
    let chunks = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(4),
        Constraint::Fill(1),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .margin(2)
    .split(area);

    render_header(frame, chunks[0], question, app.selected().len());
    render_title(frame, chunks[1], question.title());
    render_choices(frame, chunks[2], app);
    render_message(frame, chunks[3], app.message());
    render_controls(frame, chunks[4]);
}

fn render_header(frame: &mut Frame, area: Rect, question: &Question, selected: usize) {
    let header = format!(
        "#{}  ·  {} pt  ·  {}/{} selected",
        question.id(),
        question.points(),
        selected,
        question.max_selections()
    );
    let widget = Paragraph::new(header)
        .alignment(Alignment::Right)
        .fg(Color::DarkGray);
    frame.render_widget(widget, area);
}

fn render_title(frame: &mut Frame, area: Rect, title: &str) {
    let widget = Paragraph::new(title)
        .wrap(Wrap { trim: true })
        .fg(Color::White)
        .bold();
    frame.render_widget(widget, area);
}

fn render_choices(frame: &mut Frame, area: Rect, app: &App) {
    let choices = app.question().choices();
    if choices.is_empty() {
        frame.render_widget(Paragraph::new("No choices").fg(Color::DarkGray), area);
        return;
    }

    let mut lines: Vec<Line> = Vec::with_capacity(choices.len() * 2);

    for (index, choice) in choices.iter().enumerate() {
        let under_cursor = index == app.cursor();
        let style = if under_cursor {
            Style::default().fg(Color::Cyan).bold()
        } else {
            Style::default().fg(Color::Gray)
        };
        let marker = if under_cursor { ">" } else { " " };
        let check = if app.is_selected(choice) { "[x]" } else { "[ ]" };

        lines.push(Line::from(vec![
            Span::styled(format!(" {} ", marker), style),
            Span::styled(format!("{} ", check), style),
            Span::styled(format!("{}. ", choice.id()), style),
            Span::styled(choice.text(), style),
        ]));
        lines.push(Line::from(""));
    }

    frame.render_widget(Paragraph::new(lines), area);
}

fn render_message(frame: &mut Frame, area: Rect, message: Option<&str>) {
    if let Some(message) = message {
        let widget = Paragraph::new(message)
            .alignment(Alignment::Center)
            .fg(Color::Yellow);
        frame.render_widget(widget, area);
    }
}

fn render_controls(frame: &mut Frame, area: Rect) {
    let widget = Paragraph::new("j/k navigate  ·  space toggle  ·  enter submit  ·  q quit")
        .alignment(Alignment::Center)
        .fg(Color::DarkGray);
    frame.render_widget(widget, area);
}
