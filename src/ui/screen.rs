use ratatui::Frame;

use crate::{
    ui::{render_quiz, render_setup, summary::render_summary},
    App, AppState,
};

/// A UI Screen boundary: one renderer per application state
pub trait Screen {
    fn render(&self, app: &App, f: &mut Frame);
}

/// Setup screen - level, stage size and time limit pickers
pub struct SetupScreen;

impl Screen for SetupScreen {
    fn render(&self, app: &App, f: &mut Frame) {
        render_setup(app, f);
    }
}

/// Quiz screen - prompt, countdown and numbered options
pub struct QuizScreen;

impl Screen for QuizScreen {
    fn render(&self, app: &App, f: &mut Frame) {
        render_quiz(app, f);
    }
}

/// Summary screen - the stage's mistakes, or the perfect-stage message
pub struct SummaryScreen;

impl Screen for SummaryScreen {
    fn render(&self, app: &App, f: &mut Frame) {
        render_summary(app, f);
    }
}

/// Helper to construct the appropriate screen for the current state
pub fn current_screen(state: &AppState) -> Box<dyn Screen> {
    match state {
        AppState::Setup => Box::new(SetupScreen),
        AppState::Quiz => Box::new(QuizScreen),
        AppState::Summary => Box::new(SummaryScreen),
    }
}
