use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::Span,
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
    Frame,
};
use unicode_width::UnicodeWidthStr;
use vokab::{Mistake, Summary};

use crate::App;

const TIMED_OUT_LABEL: &str = "⏰ time-out";

/// Pure presenter for one mistake row
pub fn present_row(mistake: &Mistake) -> Row<'static> {
    let given = match mistake.given {
        Some(ref given) if !mistake.timed_out => Cell::from(format!("✗ {given}"))
            .style(Style::default().fg(Color::Red)),
        _ => Cell::from(TIMED_OUT_LABEL).style(Style::default().fg(Color::Yellow)),
    };

    Row::new(vec![
        Cell::from(mistake.prompt.clone()).style(Style::default().add_modifier(Modifier::BOLD)),
        Cell::from(format!("✓ {}", mistake.expected)).style(Style::default().fg(Color::Green)),
        given,
    ])
}

/// Display widths for the prompt / expected / given columns, header included
pub fn column_widths(mistakes: &[Mistake]) -> [u16; 3] {
    let widest = |header: &str, cells: Vec<usize>| {
        cells.into_iter().fold(header.width(), usize::max) as u16
    };

    [
        widest("Prompt", mistakes.iter().map(|m| m.prompt.width()).collect()),
        widest(
            "Expected",
            mistakes.iter().map(|m| m.expected.width() + 2).collect(),
        ),
        widest(
            "Your answer",
            mistakes
                .iter()
                .map(|m| match m.given {
                    Some(ref g) if !m.timed_out => g.width() + 2,
                    _ => TIMED_OUT_LABEL.width(),
                })
                .collect(),
        ),
    ]
}

pub fn render_summary(app: &App, f: &mut Frame) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(2)
        .constraints([
            Constraint::Length(3), // title
            Constraint::Min(0),    // mistakes
            Constraint::Length(2), // totals + status
            Constraint::Length(1), // legend
        ])
        .split(f.area());

    let title = Paragraph::new(format!("Stage {} complete", app.quiz.stage_number()))
        .block(Block::default().borders(Borders::ALL).title("Summary"))
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center);
    f.render_widget(title, chunks[0]);

    match app.last_summary {
        Some(Summary::Mistakes(ref mistakes)) => {
            let header = Row::new(vec![
                Cell::from("Prompt"),
                Cell::from("Expected"),
                Cell::from("Your answer"),
            ])
            .style(
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            );

            let [prompt_w, expected_w, given_w] = column_widths(mistakes);
            let table = Table::new(
                mistakes.iter().map(present_row),
                [
                    Constraint::Length(prompt_w),
                    Constraint::Length(expected_w),
                    Constraint::Length(given_w),
                ],
            )
            .header(header)
            .column_spacing(3)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(format!("{} mistakes", mistakes.len())),
            );
            f.render_widget(table, chunks[1]);
        }
        Some(Summary::Perfect) | None => {
            let perfect = Paragraph::new(Span::styled(
                "Perfect! No mistakes",
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ))
            .alignment(Alignment::Center);
            f.render_widget(perfect, chunks[1]);
        }
    }

    let mut totals = format!("Mistakes this run: {}", app.quiz.run_mistake_count());
    if let Some(ref status) = app.status {
        totals.push('\n');
        totals.push_str(status);
    }
    f.render_widget(Paragraph::new(totals), chunks[2]);

    let next = if app.quiz.stage().is_some_and(|s| s.stage_end_index >= app.quiz.vocab().len()) {
        "(enter) finish run  (esc)ape"
    } else {
        "(enter/n) next stage  (esc)ape"
    };
    let legend = Paragraph::new(Span::styled(
        next,
        Style::default().add_modifier(Modifier::ITALIC),
    ));
    f.render_widget(legend, chunks[3]);
}
