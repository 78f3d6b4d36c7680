pub mod screen;
pub mod summary;

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};
use unicode_width::UnicodeWidthStr;
use vokab::{celebration::Celebration, events::Outcome};

use crate::{ui::screen::current_screen, App, Feedback, SetupField};

const HORIZONTAL_MARGIN: u16 = 5;
const VERTICAL_MARGIN: u16 = 1;
const LOW_TIME_SECS: u32 = 3;

pub fn ui(app: &App, f: &mut Frame) {
    current_screen(&app.state).render(app, f);

    if app.celebration.is_active {
        let area = f.area();
        render_celebration(&app.celebration, area, f.buffer_mut());
    }
}

fn bold() -> Style {
    Style::default().add_modifier(Modifier::BOLD)
}

fn dim() -> Style {
    Style::default().add_modifier(Modifier::DIM)
}

pub fn render_setup(app: &App, f: &mut Frame) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .horizontal_margin(HORIZONTAL_MARGIN)
        .vertical_margin(VERTICAL_MARGIN)
        .constraints([
            Constraint::Length(3), // title
            Constraint::Min(0),    // settings
            Constraint::Length(1), // legend
        ])
        .split(f.area());

    let title = Paragraph::new("vokab")
        .block(Block::default().borders(Borders::ALL))
        .style(bold().fg(Color::Cyan))
        .alignment(Alignment::Center);
    f.render_widget(title, chunks[0]);

    let quiz = &app.quiz;
    let draft = &app.draft;

    let field_line = |field: SetupField, label: &str, value: String| {
        let selected = app.selected_field == field;
        let marker = if selected { "› " } else { "  " };
        let value_style = if selected {
            bold().fg(Color::Yellow)
        } else {
            Style::default()
        };
        Line::from(vec![
            Span::styled(marker, bold().fg(Color::Yellow)),
            Span::styled(format!("{label:<12}"), bold()),
            Span::styled(format!("◂ {value} ▸"), value_style),
        ])
    };

    let mut lines = vec![
        Line::from(format!("Words loaded: {}", quiz.vocab().len())),
        Line::from(""),
        field_line(SetupField::Level, "Level", draft.level.to_string()),
        field_line(SetupField::StageSize, "Stage size", draft.stage_size.to_string()),
        field_line(
            SetupField::TimeLimit,
            "Time limit",
            format!("{}s", draft.time_limit_secs),
        ),
        Line::from(""),
    ];

    let total = quiz.vocab().len();
    let start = quiz.stage_start_index();
    if quiz.is_run_finished() {
        lines.push(Line::from(Span::styled(
            format!(
                "All {} stages done with {} mistakes. Enter starts over.",
                quiz.stage_number(),
                quiz.run_mistake_count()
            ),
            bold().fg(Color::Green),
        )));
    } else {
        let stages = quiz.stage_number() + (total - start).div_ceil(draft.stage_size);
        let end = (start + draft.stage_size).min(total);
        lines.push(Line::from(format!(
            "Next: stage {} of {}, words {}-{}",
            quiz.stage_number() + 1,
            stages,
            start + 1,
            end
        )));
        if quiz.stage_number() > 0 {
            lines.push(Line::from(format!(
                "Mistakes so far: {}",
                quiz.run_mistake_count()
            )));
        }
    }

    if let Some(ref status) = app.status {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            status.clone(),
            Style::default().fg(Color::Red),
        )));
    }

    f.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), chunks[1]);

    let legend = Paragraph::new(Span::styled(
        "↑/↓ select  ←/→ change  (enter) start  (r)estart run  (esc)ape",
        Style::default().add_modifier(Modifier::ITALIC),
    ));
    f.render_widget(legend, chunks[2]);
}

pub fn render_quiz(app: &App, f: &mut Frame) {
    let Some(question) = app.quiz.question() else {
        return;
    };
    let area = f.area();

    let max_chars_per_line = area.width.saturating_sub(HORIZONTAL_MARGIN * 2).max(1);
    let prompt_lines = (question.prompt.width() as f64 / max_chars_per_line as f64)
        .ceil()
        .max(1.0) as u16;
    let option_lines = question.options.len() as u16;

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .horizontal_margin(HORIZONTAL_MARGIN)
        .vertical_margin(VERTICAL_MARGIN)
        .constraints([
            Constraint::Length(1), // stage / level header
            Constraint::Length(1), // timer
            Constraint::Min(0),
            Constraint::Length(prompt_lines),
            Constraint::Length(1),
            Constraint::Length(option_lines),
            Constraint::Length(1),
            Constraint::Length(1), // feedback
            Constraint::Min(0),
            Constraint::Length(1), // legend
        ])
        .split(area);

    let (answered, stage_len) = app
        .quiz
        .stage()
        .map_or((0, 0), |s| (s.answered(), s.len()));
    let header = Paragraph::new(Span::styled(
        format!(
            "stage {}/{}   {}   question {}/{}",
            app.quiz.stage_number(),
            app.quiz.stage_count(),
            app.quiz.config().level,
            answered,
            stage_len
        ),
        dim(),
    ))
    .alignment(Alignment::Center);
    f.render_widget(header, chunks[0]);

    if let Some(secs) = app.quiz.seconds_remaining() {
        let style = if secs <= LOW_TIME_SECS {
            bold().fg(Color::Red)
        } else {
            bold()
        };
        let timer = Paragraph::new(Span::styled(format!("⏱ {secs}s"), style))
            .alignment(Alignment::Center);
        f.render_widget(timer, chunks[1]);
    }

    let prompt = Paragraph::new(Span::styled(question.prompt.as_str(), bold().fg(Color::Cyan)))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    f.render_widget(prompt, chunks[3]);

    let options: Vec<Line> = question
        .options
        .iter()
        .enumerate()
        .map(|(i, option)| {
            Line::from(vec![
                Span::styled(format!("{}. ", i + 1), bold().fg(Color::Yellow)),
                Span::raw(option.as_str()),
            ])
        })
        .collect();
    f.render_widget(
        Paragraph::new(options).alignment(Alignment::Center),
        chunks[5],
    );

    if let Some(ref feedback) = app.feedback {
        let widget = Paragraph::new(feedback_line(feedback)).alignment(Alignment::Center);
        f.render_widget(widget, chunks[7]);
    }

    let legend = Paragraph::new(Span::styled(
        format!("(1-{}) answer  (esc)ape", question.options.len()),
        Style::default().add_modifier(Modifier::ITALIC),
    ));
    f.render_widget(legend, chunks[9]);
}

fn feedback_line(feedback: &Feedback) -> Line<'static> {
    match feedback.outcome {
        Outcome::Correct => Line::from(Span::styled("✓ Correct", bold().fg(Color::Green))),
        Outcome::Incorrect => Line::from(vec![
            Span::styled("✗ Wrong", bold().fg(Color::Red)),
            Span::raw(format!("  answer: {}", feedback.correct_answer)),
        ]),
        Outcome::TimedOut => Line::from(vec![
            Span::styled("⏰ Time up", bold().fg(Color::Red)),
            Span::raw(format!("  answer: {}", feedback.correct_answer)),
        ]),
    }
}

/// Draw confetti and the banner on top of whatever screen is showing
fn render_celebration(celebration: &Celebration, area: Rect, buf: &mut Buffer) {
    let colors = [
        Color::Yellow,
        Color::Magenta,
        Color::Cyan,
        Color::Green,
        Color::LightRed,
        Color::LightBlue,
    ];

    for piece in &celebration.pieces {
        if piece.x < 0.0 || piece.y < 0.0 {
            continue;
        }
        let (x, y) = (piece.x as u16, piece.y as u16);
        if x < area.width && y < area.height {
            let style = Style::default()
                .fg(colors[piece.color_index % colors.len()])
                .add_modifier(Modifier::BOLD);
            if let Some(cell) = buf.cell_mut((area.x + x, area.y + y)) {
                cell.set_symbol(&piece.symbol.to_string());
                cell.set_style(style);
            }
        }
    }

    let banner_width = celebration.banner.width() as u16;
    if banner_width < area.width && area.height > 2 {
        let x = area.x + (area.width - banner_width) / 2;
        let y = area.y + area.height / 3;
        buf.set_string(x, y, celebration.banner, bold().fg(Color::Yellow));
    }
}
