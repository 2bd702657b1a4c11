use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Padding, Paragraph},
};

use crate::app::App;
use crate::models::ChoiceId;

const TEXT_PREVIEW_LENGTH: usize = 55;

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(6),
        Constraint::Fill(1),
        Constraint::Length(2),
    ])
    .margin(1)
    .split(area);

    render_summary(frame, chunks[1], app.selected().len(), app.correct());
    render_choice_breakdown(frame, chunks[2], app);
    render_controls(frame, chunks[3]);
}

fn render_summary(frame: &mut Frame, area: Rect, selected: usize, correct: &[ChoiceId]) {
    let color = if selected > 0 && correct.len() == selected {
        Color::Green
    } else if correct.is_empty() {
        Color::Red
    } else {
        Color::Yellow
    };
    let ids = correct
        .iter()
        .map(|id| id.to_string())
        .collect::<Vec<_>>()
        .join(", ");

    let content = vec![
        Line::from(""),
        Line::from(Span::styled(
            "RESULT",
            Style::default().fg(Color::Cyan).bold(),
        )),
        Line::from(""),
        Line::from(Span::styled(
            format!("{} of {} selected correct  [{}]", correct.len(), selected, ids),
            Style::default().fg(color).bold(),
        )),
        Line::from(""),
    ];

    let widget = Paragraph::new(content).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Color::DarkGray),
    );
    frame.render_widget(widget, area);
}

fn render_choice_breakdown(frame: &mut Frame, area: Rect, app: &App) {
    let lines: Vec<Line> = app
        .question()
        .choices()
        .iter()
        .map(|choice| {
            let (symbol, color) = match (app.is_selected(choice), choice.is_correct()) {
                (true, true) => ("+", Color::Green),
                (true, false) => ("-", Color::Red),
                (false, true) => ("*", Color::Yellow),
                (false, false) => (" ", Color::DarkGray),
            };

            Line::from(vec![
                Span::styled(format!(" {} ", symbol), Style::default().fg(color)),
                Span::styled(
                    format!("{:2}. ", choice.id()),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::styled(truncate_text(choice.text()), Style::default().fg(Color::Gray)),
            ])
        })
        .collect();

    let widget = Paragraph::new(lines).block(Block::default().padding(Padding::horizontal(1)));
    frame.render_widget(widget, area);
}

fn truncate_text(text: &str) -> String {
    let char_count = text.chars().count();
    if char_count > TEXT_PREVIEW_LENGTH {
        let truncated: String = text.chars().take(TEXT_PREVIEW_LENGTH).collect();
        format!("{}...", truncated)
    } else {
        text.to_string()
    }
}

fn render_controls(frame: &mut Frame, area: Rect) {
    let widget = Paragraph::new("r retry  ·  q quit")
        .alignment(Alignment::Center)
        .fg(Color::DarkGray);
    frame.render_widget(widget, area);
}
