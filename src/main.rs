pub mod ui;

use clap::{error::ErrorKind, CommandFactory, Parser};
use crossterm::{
    event::{KeyCode, KeyEvent, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    tty::IsTty,
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use std::{
    error::Error,
    io::{self, stdin},
    path::PathBuf,
    time::Duration,
};
use vokab::{
    celebration::Celebration,
    config::{Config, ConfigStore, FileConfigStore},
    events::{Outcome, QuizEvent},
    logging,
    review::ReviewLog,
    runtime::{CrosstermInputSource, FixedTicker, InputEvent, Runner},
    session::{MAX_STAGE_SIZE, MAX_TIME_LIMIT_SECS, MIN_STAGE_SIZE, MIN_TIME_LIMIT_SECS},
    vocab::{load_vocabulary_file, BuiltinDeck, VocabError},
    Level, Phase, Quiz, SessionConfig, Summary, VocabPair,
};

use crate::ui::ui;

const TICK_RATE_MS: u64 = 100;

/// staged vocabulary quiz with countdown timers and mistake review
#[derive(Parser, Debug, Clone)]
#[clap(
    version,
    about,
    long_about = "Quiz yourself on a list of source,target word pairs in timed stages, then review every mistake before moving on to the next stage."
)]
pub struct Cli {
    /// vocabulary file with one "source,target" pair per line
    vocabulary: Option<PathBuf>,

    /// bundled deck to use when no vocabulary file is given
    #[clap(short = 'd', long, value_enum, default_value_t = BuiltinDeck::Spanish)]
    deck: BuiltinDeck,

    /// number of words per stage
    #[clap(short = 's', long)]
    stage_size: Option<usize>,

    /// quiz direction
    #[clap(short = 'l', long, value_enum)]
    level: Option<Level>,

    /// seconds allowed per question
    #[clap(short = 't', long)]
    time_limit: Option<u32>,

    /// append every stage's mistakes to this CSV file
    #[clap(long)]
    review_file: Option<PathBuf>,

    /// write diagnostics to this file (filter with RUST_LOG)
    #[clap(long)]
    log_file: Option<PathBuf>,

    /// store the effective stage size, level and time limit as new defaults
    #[clap(long)]
    save_config: bool,
}

impl Cli {
    /// Flags win over the stored defaults
    fn session_config(&self, stored: &Config) -> SessionConfig {
        let defaults = SessionConfig::from(stored);
        SessionConfig {
            stage_size: self.stage_size.unwrap_or(defaults.stage_size),
            level: self.level.unwrap_or(defaults.level),
            time_limit_secs: self.time_limit.unwrap_or(defaults.time_limit_secs),
        }
        .clamped()
    }

    fn load_vocabulary(&self) -> Result<Vec<VocabPair>, VocabError> {
        match self.vocabulary {
            Some(ref path) => load_vocabulary_file(path),
            None => self.deck.load(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppState {
    Setup,
    Quiz,
    Summary,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetupField {
    Level,
    StageSize,
    TimeLimit,
}

impl SetupField {
    fn next(self) -> Self {
        match self {
            SetupField::Level => SetupField::StageSize,
            SetupField::StageSize => SetupField::TimeLimit,
            SetupField::TimeLimit => SetupField::Level,
        }
    }

    fn prev(self) -> Self {
        match self {
            SetupField::Level => SetupField::TimeLimit,
            SetupField::StageSize => SetupField::Level,
            SetupField::TimeLimit => SetupField::StageSize,
        }
    }
}

/// What happened to the previous question, shown under the next one
#[derive(Debug, Clone, PartialEq)]
pub struct Feedback {
    pub outcome: Outcome,
    pub correct_answer: String,
}

#[derive(Debug, PartialEq)]
enum Flow {
    Continue,
    Quit,
}

#[derive(Debug)]
pub struct App {
    pub quiz: Quiz,
    pub state: AppState,
    pub draft: SessionConfig,
    pub selected_field: SetupField,
    pub feedback: Option<Feedback>,
    pub last_summary: Option<Summary>,
    pub celebration: Celebration,
    pub review_log: Option<ReviewLog>,
    pub status: Option<String>,
}

impl App {
    pub fn new(quiz: Quiz, review_log: Option<ReviewLog>) -> Self {
        Self {
            draft: *quiz.config(),
            quiz,
            state: AppState::Setup,
            selected_field: SetupField::Level,
            feedback: None,
            last_summary: None,
            celebration: Celebration::new(),
            review_log,
            status: None,
        }
    }

    fn adjust(&mut self, forward: bool) {
        let step = |v: usize| if forward { v + 1 } else { v.saturating_sub(1) };
        match self.selected_field {
            SetupField::Level => {
                self.draft.level = if forward {
                    self.draft.level.next()
                } else {
                    self.draft.level.prev()
                };
            }
            SetupField::StageSize => {
                self.draft.stage_size = step(self.draft.stage_size).clamp(MIN_STAGE_SIZE, MAX_STAGE_SIZE);
            }
            SetupField::TimeLimit => {
                self.draft.time_limit_secs = (step(self.draft.time_limit_secs as usize) as u32)
                    .clamp(MIN_TIME_LIMIT_SECS, MAX_TIME_LIMIT_SECS);
            }
        }
    }

    /// Apply the setup screen's settings and quiz the next stage. A finished
    /// run starts over from the first stage.
    fn start_stage(&mut self, width: u16, height: u16) {
        if self.quiz.is_run_finished() {
            self.quiz.restart_run();
        }

        let started = self
            .quiz
            .configure(self.draft)
            .and_then(|_| self.quiz.start_stage());

        match started {
            Ok(()) => {
                self.feedback = None;
                self.status = None;
                self.state = AppState::Quiz;
                self.process_events(width, height);
            }
            Err(e) => self.status = Some(e.to_string()),
        }
    }

    fn proceed(&mut self) {
        if self.quiz.proceed_to_next_stage().is_ok() {
            self.celebration.stop();
            self.feedback = None;
            self.state = AppState::Setup;
        }
    }

    fn process_events(&mut self, width: u16, height: u16) {
        for event in self.quiz.drain_events() {
            match event {
                QuizEvent::AnswerEvaluated {
                    outcome,
                    correct_answer,
                } => {
                    self.feedback = Some(Feedback {
                        outcome,
                        correct_answer,
                    });
                }
                QuizEvent::StageComplete { summary } => {
                    if summary.is_perfect() {
                        self.celebration.start(width, height);
                    }
                    self.export_mistakes(&summary);
                    self.last_summary = Some(summary);
                    self.state = AppState::Summary;
                }
                QuizEvent::StageStarted { .. }
                | QuizEvent::QuestionPresented { .. }
                | QuizEvent::Tick { .. } => {}
            }
        }
    }

    fn export_mistakes(&mut self, summary: &Summary) {
        if let Some(ref log) = self.review_log {
            if let Err(e) = log.append(self.quiz.stage_number(), summary.mistakes()) {
                tracing::warn!("review export to {} failed: {e}", log.path().display());
                self.status = Some(format!("could not write {}: {e}", log.path().display()));
            }
        }
    }

    /// Returns true when the screen needs redrawing
    fn on_tick(&mut self, elapsed: Duration, width: u16, height: u16) -> bool {
        let asking = self.quiz.phase() == Phase::Asking;
        let before = self.quiz.seconds_remaining();

        self.quiz.on_tick(elapsed);
        self.process_events(width, height);
        self.celebration.update(elapsed);

        let changed =
            before != self.quiz.seconds_remaining() || self.quiz.phase() != Phase::Asking;
        (asking && changed) || self.celebration.is_active
    }

    fn on_key(&mut self, key: KeyEvent, width: u16, height: u16) -> Flow {
        if key.code == KeyCode::Esc
            || (key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c'))
        {
            return Flow::Quit;
        }

        match self.state {
            AppState::Setup => match key.code {
                KeyCode::Up | KeyCode::BackTab => self.selected_field = self.selected_field.prev(),
                KeyCode::Down | KeyCode::Tab => self.selected_field = self.selected_field.next(),
                KeyCode::Left => self.adjust(false),
                KeyCode::Right => self.adjust(true),
                KeyCode::Enter => self.start_stage(width, height),
                KeyCode::Char('r') => {
                    self.quiz.restart_run();
                    self.status = None;
                }
                _ => {}
            },
            AppState::Quiz => {
                if let KeyCode::Char(c) = key.code {
                    if let Some(digit) = c.to_digit(10).filter(|d| *d >= 1) {
                        // a digit with no option behind it is ignored
                        if self.quiz.select_option_index(digit as usize - 1).is_ok() {
                            self.process_events(width, height);
                        }
                    }
                }
            }
            AppState::Summary => {
                if matches!(key.code, KeyCode::Enter | KeyCode::Char('n')) {
                    self.proceed();
                }
            }
        }

        Flow::Continue
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    if let Some(ref path) = cli.log_file {
        logging::init_file_logging(path)?;
    }

    let store = FileConfigStore::new();
    let session_config = cli.session_config(&store.load());
    if cli.save_config {
        store.save(&Config::from(&session_config))?;
    }

    let vocab = match cli.load_vocabulary() {
        Ok(vocab) => vocab,
        Err(e) => Cli::command().error(ErrorKind::Io, e).exit(),
    };
    if vocab.is_empty() {
        Cli::command()
            .error(
                ErrorKind::InvalidValue,
                "no usable \"source,target\" lines in the vocabulary",
            )
            .exit();
    }

    if !stdin().is_tty() {
        let mut cmd = Cli::command();
        cmd.error(ErrorKind::Io, "stdin must be a tty").exit();
    }

    let quiz = Quiz::new(vocab, session_config)?;
    let mut app = App::new(quiz, cli.review_file.as_ref().map(ReviewLog::new));

    enable_raw_mode()?;

    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = start_tui(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn start_tui<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<(), Box<dyn Error>> {
    let mut runner = Runner::new(
        CrosstermInputSource::new(),
        FixedTicker::new(Duration::from_millis(TICK_RATE_MS)),
    );

    terminal.draw(|f| ui(app, f))?;

    loop {
        match runner.step() {
            InputEvent::Tick(elapsed) => {
                let size = terminal.size().unwrap_or_default();
                if app.on_tick(elapsed, size.width, size.height) {
                    terminal.draw(|f| ui(app, f))?;
                }
            }
            InputEvent::Resize => {
                terminal.draw(|f| ui(app, f))?;
            }
            InputEvent::Key(key) => {
                let size = terminal.size().unwrap_or_default();
                if app.on_key(key, size.width, size.height) == Flow::Quit {
                    break;
                }
                terminal.draw(|f| ui(app, f))?;
            }
        }
    }

    Ok(())
}
