use itertools::Itertools;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::session::Level;
use crate::vocab::VocabPair;

/// Number of options offered per question when the vocabulary allows it
pub const OPTION_COUNT: usize = 3;

/// Upper bound on random draws before falling back to picking from the
/// remaining distinct candidates directly
const MAX_DRAWS: usize = 256;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    SourceToTarget,
    TargetToSource,
}

impl Direction {
    /// Mixed picks a direction per question with equal odds
    pub fn for_level<R: Rng + ?Sized>(level: Level, rng: &mut R) -> Self {
        match level {
            Level::SourceToTarget => Direction::SourceToTarget,
            Level::TargetToSource => Direction::TargetToSource,
            Level::Mixed => {
                if rng.gen_bool(0.5) {
                    Direction::SourceToTarget
                } else {
                    Direction::TargetToSource
                }
            }
        }
    }

    pub fn prompt_of<'a>(&self, pair: &'a VocabPair) -> &'a str {
        match self {
            Direction::SourceToTarget => &pair.source,
            Direction::TargetToSource => &pair.target,
        }
    }

    pub fn answer_of<'a>(&self, pair: &'a VocabPair) -> &'a str {
        match self {
            Direction::SourceToTarget => &pair.target,
            Direction::TargetToSource => &pair.source,
        }
    }
}

/// The question currently on screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub prompt: String,
    pub correct_answer: String,
    pub options: Vec<String>,
    pub direction: Direction,
}

impl Question {
    /// Maps a zero-based visible option index to its text
    pub fn option(&self, index: usize) -> Option<&str> {
        self.options.get(index).map(String::as_str)
    }
}

pub fn make_question<R: Rng + ?Sized>(
    item: &VocabPair,
    level: Level,
    vocab: &[VocabPair],
    rng: &mut R,
) -> Question {
    let direction = Direction::for_level(level, rng);
    let correct_answer = direction.answer_of(item);
    let pool: Vec<&str> = vocab.iter().map(|v| direction.answer_of(v)).collect();
    let options = build_options(correct_answer, &pool, rng);

    Question {
        prompt: direction.prompt_of(item).to_string(),
        correct_answer: correct_answer.to_string(),
        options,
        direction,
    }
}

/// Pick distinct options around `correct_answer` and shuffle them.
///
/// Distractors are drawn uniformly from `pool` with replacement, so values
/// that appear more often in the vocabulary are proportionally more likely.
/// With fewer than two distinct distractors available every one of them is
/// used and the question carries fewer than three options.
pub fn build_options<R: Rng + ?Sized>(correct_answer: &str, pool: &[&str], rng: &mut R) -> Vec<String> {
    let candidates: Vec<&str> = pool
        .iter()
        .copied()
        .filter(|v| *v != correct_answer)
        .unique()
        .collect();

    let wanted = OPTION_COUNT.min(candidates.len() + 1);
    if wanted < OPTION_COUNT {
        tracing::warn!(
            "only {} distinct distractors for {:?}, showing {} options",
            candidates.len(),
            correct_answer,
            wanted
        );
    }

    let mut options = vec![correct_answer.to_string()];
    let mut draws = 0;
    while options.len() < wanted && draws < MAX_DRAWS {
        draws += 1;
        if let Some(pick) = pool.choose(rng) {
            if !options.iter().any(|o| o == pick) {
                options.push(pick.to_string());
            }
        }
    }

    if options.len() < wanted {
        let rest: Vec<&str> = candidates
            .into_iter()
            .filter(|c| !options.iter().any(|o| o == c))
            .collect();
        let missing = wanted - options.len();
        options.extend(rest.choose_multiple(rng, missing).map(|c| c.to_string()));
    }

    options.shuffle(rng);
    options
}
