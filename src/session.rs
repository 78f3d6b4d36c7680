use std::collections::VecDeque;

use clap::ValueEnum;
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::vocab::VocabPair;

pub const MIN_STAGE_SIZE: usize = 1;
pub const MAX_STAGE_SIZE: usize = 100;
pub const MIN_TIME_LIMIT_SECS: u32 = 1;
pub const MAX_TIME_LIMIT_SECS: u32 = 120;

/// Quiz direction mode
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum, strum_macros::Display,
)]
#[serde(rename_all = "kebab-case")]
pub enum Level {
    #[strum(to_string = "Source → Target")]
    SourceToTarget,
    #[strum(to_string = "Target → Source")]
    TargetToSource,
    #[strum(to_string = "Mixed")]
    Mixed,
}

impl Level {
    pub fn next(self) -> Self {
        match self {
            Level::SourceToTarget => Level::TargetToSource,
            Level::TargetToSource => Level::Mixed,
            Level::Mixed => Level::SourceToTarget,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Level::SourceToTarget => Level::Mixed,
            Level::TargetToSource => Level::SourceToTarget,
            Level::Mixed => Level::TargetToSource,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionConfig {
    pub stage_size: usize,
    pub level: Level,
    pub time_limit_secs: u32,
}

impl SessionConfig {
    pub fn is_valid(&self) -> bool {
        self.stage_size >= MIN_STAGE_SIZE && self.time_limit_secs >= MIN_TIME_LIMIT_SECS
    }

    /// Clamp both numeric settings into the ranges the setup screen offers
    pub fn clamped(self) -> Self {
        Self {
            stage_size: self.stage_size.clamp(MIN_STAGE_SIZE, MAX_STAGE_SIZE),
            level: self.level,
            time_limit_secs: self
                .time_limit_secs
                .clamp(MIN_TIME_LIMIT_SECS, MAX_TIME_LIMIT_SECS),
        }
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            stage_size: 10,
            level: Level::SourceToTarget,
            time_limit_secs: 10,
        }
    }
}

/// Words of the stage currently being quizzed
#[derive(Debug, Clone)]
pub struct StageState {
    pub stage_start_index: usize,
    pub stage_end_index: usize,
    pub stage_words: Vec<VocabPair>,
    pub remaining_words: VecDeque<VocabPair>,
}

impl StageState {
    /// Slice `vocab[start..start + stage_size]` (capped at the vocabulary
    /// length) and shuffle it. A start past the end yields an empty stage.
    pub fn start<R: Rng + ?Sized>(
        vocab: &[VocabPair],
        config: &SessionConfig,
        stage_start_index: usize,
        rng: &mut R,
    ) -> Self {
        let start = stage_start_index.min(vocab.len());
        let end = start.saturating_add(config.stage_size).min(vocab.len());

        let mut stage_words = vocab[start..end].to_vec();
        stage_words.shuffle(rng);
        let remaining_words = stage_words.iter().cloned().collect();

        Self {
            stage_start_index: start,
            stage_end_index: end,
            stage_words,
            remaining_words,
        }
    }

    pub fn next_item(&mut self) -> Option<VocabPair> {
        self.remaining_words.pop_front()
    }

    pub fn len(&self) -> usize {
        self.stage_words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stage_words.is_empty()
    }

    pub fn answered(&self) -> usize {
        self.stage_words.len() - self.remaining_words.len()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Mistake {
    pub prompt: String,
    pub expected: String,
    pub given: Option<String>,
    pub timed_out: bool,
}

impl Mistake {
    pub fn wrong(prompt: &str, expected: &str, given: &str) -> Self {
        Self {
            prompt: prompt.to_string(),
            expected: expected.to_string(),
            given: Some(given.to_string()),
            timed_out: false,
        }
    }

    pub fn timed_out(prompt: &str, expected: &str) -> Self {
        Self {
            prompt: prompt.to_string(),
            expected: expected.to_string(),
            given: None,
            timed_out: true,
        }
    }
}

/// Result shown at the end of a stage
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Summary {
    Perfect,
    Mistakes(Vec<Mistake>),
}

impl Summary {
    pub fn is_perfect(&self) -> bool {
        matches!(self, Summary::Perfect)
    }

    pub fn mistakes(&self) -> &[Mistake] {
        match self {
            Summary::Perfect => &[],
            Summary::Mistakes(mistakes) => mistakes,
        }
    }
}

pub fn build_summary(mistakes: &[Mistake]) -> Summary {
    if mistakes.is_empty() {
        Summary::Perfect
    } else {
        Summary::Mistakes(mistakes.to_vec())
    }
}
