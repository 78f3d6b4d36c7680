use std::collections::VecDeque;
use std::time::Duration;

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::countdown::{Countdown, CountdownStatus};
use crate::error::QuizError;
use crate::events::{Outcome, QuizEvent};
use crate::question::{make_question, Question};
use crate::session::{build_summary, Mistake, SessionConfig, StageState, Summary};
use crate::vocab::VocabPair;

/// Where the engine is in the stage lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Between stages; vocabulary and settings may change
    Idle,
    /// A question is on screen and its countdown is running
    Asking,
    /// Stage finished, summary available until the next stage is requested
    Complete,
}

/// Result of answering (or failing to answer) one question
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Evaluation {
    pub outcome: Outcome,
    pub correct_answer: String,
    pub mistake_recorded: bool,
}

impl Evaluation {
    pub fn is_correct(&self) -> bool {
        self.outcome == Outcome::Correct
    }
}

/// One learner's quiz run over a vocabulary, stage by stage
#[derive(Debug)]
pub struct Quiz {
    vocab: Vec<VocabPair>,
    config: SessionConfig,
    phase: Phase,
    stage_start: usize,
    stage_number: usize,
    stage: Option<StageState>,
    question: Option<Question>,
    countdown: Option<Countdown>,
    countdowns_started: u64,
    mistakes: Vec<Mistake>,
    run_mistakes: usize,
    events: VecDeque<QuizEvent>,
    rng: StdRng,
}

impl Quiz {
    pub fn new(vocab: Vec<VocabPair>, config: SessionConfig) -> Result<Self, QuizError> {
        Self::with_rng(vocab, config, StdRng::from_entropy())
    }

    /// Deterministic shuffles and distractors, for tests and replays
    pub fn with_seed(
        vocab: Vec<VocabPair>,
        config: SessionConfig,
        seed: u64,
    ) -> Result<Self, QuizError> {
        Self::with_rng(vocab, config, StdRng::seed_from_u64(seed))
    }

    fn with_rng(
        vocab: Vec<VocabPair>,
        config: SessionConfig,
        rng: StdRng,
    ) -> Result<Self, QuizError> {
        if vocab.is_empty() {
            return Err(QuizError::EmptyVocabulary);
        }
        if !config.is_valid() {
            return Err(QuizError::InvalidConfig);
        }

        Ok(Self {
            vocab,
            config,
            phase: Phase::Idle,
            stage_start: 0,
            stage_number: 0,
            stage: None,
            question: None,
            countdown: None,
            countdowns_started: 0,
            mistakes: Vec::new(),
            run_mistakes: 0,
            events: VecDeque::new(),
            rng,
        })
    }

    /// Replace the vocabulary and start the run over
    pub fn load_vocabulary(&mut self, pairs: Vec<VocabPair>) -> Result<(), QuizError> {
        self.require_phase(Phase::Idle)?;
        if pairs.is_empty() {
            return Err(QuizError::EmptyVocabulary);
        }

        self.vocab = pairs;
        self.restart_run();
        Ok(())
    }

    pub fn configure(&mut self, config: SessionConfig) -> Result<(), QuizError> {
        self.require_phase(Phase::Idle)?;
        if !config.is_valid() {
            return Err(QuizError::InvalidConfig);
        }

        self.config = config;
        Ok(())
    }

    pub fn start_stage(&mut self) -> Result<(), QuizError> {
        self.require_phase(Phase::Idle)?;

        let stage = StageState::start(&self.vocab, &self.config, self.stage_start, &mut self.rng);
        self.stage_number += 1;
        self.mistakes.clear();
        self.phase = Phase::Asking;

        tracing::info!(
            "stage {} started: words {}..{} of {}, {}",
            self.stage_number,
            stage.stage_start_index,
            stage.stage_end_index,
            self.vocab.len(),
            self.config.level
        );

        self.events.push_back(QuizEvent::StageStarted {
            stage_number: self.stage_number,
            questions: stage.len(),
        });
        self.stage = Some(stage);
        self.next_question();
        Ok(())
    }

    /// Pop the next word off the stage queue, or finish the stage
    fn next_question(&mut self) {
        self.cancel_countdown();

        let item = self.stage.as_mut().and_then(StageState::next_item);
        let Some(item) = item else {
            self.complete_stage();
            return;
        };

        let question = make_question(&item, self.config.level, &self.vocab, &mut self.rng);
        self.countdowns_started += 1;
        self.countdown = Some(Countdown::new(
            self.countdowns_started,
            self.config.time_limit_secs,
        ));

        self.events.push_back(QuizEvent::QuestionPresented {
            prompt: question.prompt.clone(),
            options: question.options.clone(),
            seconds: self.config.time_limit_secs,
        });
        self.question = Some(question);
    }

    fn complete_stage(&mut self) {
        self.question = None;
        self.phase = Phase::Complete;
        self.run_mistakes += self.mistakes.len();

        let summary = build_summary(&self.mistakes);
        tracing::info!(
            "stage {} complete with {} mistakes",
            self.stage_number,
            self.mistakes.len()
        );
        self.events.push_back(QuizEvent::StageComplete { summary });
    }

    fn cancel_countdown(&mut self) {
        if let Some(mut countdown) = self.countdown.take() {
            countdown.cancel();
            tracing::trace!("countdown {} cancelled", countdown.id());
        }
    }

    /// Judge the current question, record a mistake if needed, and move on.
    ///
    /// A timed-out evaluation ignores `given` and always counts as a mistake.
    /// Without a timeout an answer is required.
    pub fn evaluate_answer(
        &mut self,
        given: Option<&str>,
        timed_out: bool,
    ) -> Result<Evaluation, QuizError> {
        if given.is_none() && !timed_out {
            return Err(QuizError::MissingAnswer);
        }
        let question = self.question.take().ok_or(QuizError::NoActiveQuestion)?;
        self.cancel_countdown();

        let outcome = match given {
            _ if timed_out => Outcome::TimedOut,
            Some(answer) if answer == question.correct_answer => Outcome::Correct,
            _ => Outcome::Incorrect,
        };

        let mistake = match outcome {
            Outcome::Correct => None,
            Outcome::TimedOut => Some(Mistake::timed_out(
                &question.prompt,
                &question.correct_answer,
            )),
            Outcome::Incorrect => Some(Mistake::wrong(
                &question.prompt,
                &question.correct_answer,
                given.unwrap_or_default(),
            )),
        };

        tracing::debug!(
            "{:?}: {:?} -> {:?} (expected {:?})",
            outcome,
            question.prompt,
            given,
            question.correct_answer
        );

        let mistake_recorded = mistake.is_some();
        self.mistakes.extend(mistake);

        self.events.push_back(QuizEvent::AnswerEvaluated {
            outcome,
            correct_answer: question.correct_answer.clone(),
        });
        self.next_question();

        Ok(Evaluation {
            outcome,
            correct_answer: question.correct_answer,
            mistake_recorded,
        })
    }

    pub fn select_option(&mut self, answer: &str) -> Result<Evaluation, QuizError> {
        self.evaluate_answer(Some(answer), false)
    }

    /// Zero-based index into the options as currently displayed
    pub fn select_option_index(&mut self, index: usize) -> Result<Evaluation, QuizError> {
        let question = self.question.as_ref().ok_or(QuizError::NoActiveQuestion)?;
        let answer = question
            .option(index)
            .ok_or(QuizError::NoSuchOption(index))?
            .to_string();
        self.select_option(&answer)
    }

    /// Feed elapsed wall time to the live countdown. Returns the timed-out
    /// evaluation when the countdown reaches zero on this call.
    pub fn on_tick(&mut self, elapsed: Duration) -> Option<Evaluation> {
        let status = self.countdown.as_mut()?.advance(elapsed);

        match status {
            CountdownStatus::Ticked(seconds_remaining) => {
                self.events.push_back(QuizEvent::Tick { seconds_remaining });
                None
            }
            CountdownStatus::Expired => {
                self.events.push_back(QuizEvent::Tick {
                    seconds_remaining: 0,
                });
                self.evaluate_answer(None, true).ok()
            }
            CountdownStatus::Pending | CountdownStatus::Inactive => None,
        }
    }

    /// Leave the summary and move the stage window past the finished stage
    pub fn proceed_to_next_stage(&mut self) -> Result<(), QuizError> {
        self.require_phase(Phase::Complete)?;

        if let Some(stage) = self.stage.take() {
            self.stage_start = stage.stage_end_index;
        }
        self.phase = Phase::Idle;
        Ok(())
    }

    /// Back to the first stage with a clean mistake tally
    pub fn restart_run(&mut self) {
        self.cancel_countdown();
        self.phase = Phase::Idle;
        self.stage_start = 0;
        self.stage_number = 0;
        self.stage = None;
        self.question = None;
        self.mistakes.clear();
        self.run_mistakes = 0;
    }

    pub fn summary(&self) -> Summary {
        build_summary(&self.mistakes)
    }

    pub fn drain_events(&mut self) -> Vec<QuizEvent> {
        self.events.drain(..).collect()
    }

    fn require_phase(&self, phase: Phase) -> Result<(), QuizError> {
        if self.phase == phase {
            Ok(())
        } else {
            Err(QuizError::WrongPhase(self.phase))
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn vocab(&self) -> &[VocabPair] {
        &self.vocab
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn question(&self) -> Option<&Question> {
        self.question.as_ref()
    }

    pub fn stage(&self) -> Option<&StageState> {
        self.stage.as_ref()
    }

    pub fn mistakes(&self) -> &[Mistake] {
        &self.mistakes
    }

    /// Mistakes from every finished stage since the run began
    pub fn run_mistake_count(&self) -> usize {
        self.run_mistakes
    }

    pub fn seconds_remaining(&self) -> Option<u32> {
        self.countdown
            .as_ref()
            .filter(|c| c.is_active())
            .map(Countdown::seconds_remaining)
    }

    pub fn stage_start_index(&self) -> usize {
        self.stage_start
    }

    /// Number of the current stage, or of the last one started when idle
    pub fn stage_number(&self) -> usize {
        self.stage_number
    }

    /// Stages in the whole run at the current stage size
    pub fn stage_count(&self) -> usize {
        let from = self
            .stage
            .as_ref()
            .map_or(self.stage_start, |s| s.stage_end_index);
        let remaining = self.vocab.len().saturating_sub(from);
        self.stage_number + remaining.div_ceil(self.config.stage_size)
    }

    pub fn is_run_finished(&self) -> bool {
        self.stage_start >= self.vocab.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::Level;
    use assert_matches::assert_matches;
    use std::collections::HashSet;

    fn abc() -> Vec<VocabPair> {
        vec![
            VocabPair::new("a", "1"),
            VocabPair::new("b", "2"),
            VocabPair::new("c", "3"),
        ]
    }

    fn config(stage_size: usize, level: Level, time_limit_secs: u32) -> SessionConfig {
        SessionConfig {
            stage_size,
            level,
            time_limit_secs,
        }
    }

    fn quiz(vocab: Vec<VocabPair>, stage_size: usize) -> Quiz {
        Quiz::with_seed(vocab, config(stage_size, Level::SourceToTarget, 10), 42).unwrap()
    }

    fn answer_correctly(quiz: &mut Quiz) -> Evaluation {
        let correct = quiz.question().unwrap().correct_answer.clone();
        quiz.select_option(&correct).unwrap()
    }

    fn answer_wrong(quiz: &mut Quiz) -> Evaluation {
        let question = quiz.question().unwrap();
        let wrong = question
            .options
            .iter()
            .find(|o| **o != question.correct_answer)
            .unwrap()
            .clone();
        quiz.select_option(&wrong).unwrap()
    }

    #[test]
    fn test_new_rejects_empty_vocabulary() {
        let result = Quiz::new(vec![], SessionConfig::default());
        assert_matches!(result, Err(QuizError::EmptyVocabulary));
    }

    #[test]
    fn test_new_rejects_invalid_config() {
        let result = Quiz::new(abc(), config(0, Level::Mixed, 10));
        assert_matches!(result, Err(QuizError::InvalidConfig));
        let result = Quiz::new(abc(), config(3, Level::Mixed, 0));
        assert_matches!(result, Err(QuizError::InvalidConfig));
    }

    #[test]
    fn test_starts_idle() {
        let quiz = quiz(abc(), 3);
        assert_eq!(quiz.phase(), Phase::Idle);
        assert!(quiz.question().is_none());
        assert!(quiz.seconds_remaining().is_none());
        assert_eq!(quiz.stage_count(), 1);
    }

    #[test]
    fn test_source_to_target_scenario() {
        let mut quiz = quiz(abc(), 3);
        quiz.start_stage().unwrap();
        assert_eq!(quiz.phase(), Phase::Asking);

        let mapping = [("a", "1"), ("b", "2"), ("c", "3")];
        let mut prompts = HashSet::new();

        for _ in 0..3 {
            let question = quiz.question().unwrap().clone();
            let expected = mapping
                .iter()
                .find(|(s, _)| *s == question.prompt)
                .map(|(_, t)| *t)
                .unwrap();
            assert_eq!(question.correct_answer, expected);

            let mut options = question.options.clone();
            options.sort();
            assert_eq!(options, vec!["1", "2", "3"]);

            prompts.insert(question.prompt.clone());
            answer_correctly(&mut quiz);
        }

        assert_eq!(prompts.len(), 3);
        assert_eq!(quiz.phase(), Phase::Complete);
        assert_eq!(quiz.summary(), Summary::Perfect);
    }

    #[test]
    fn test_wrong_answer_records_mistake() {
        let mut quiz = quiz(abc(), 3);
        quiz.start_stage().unwrap();

        let prompt = quiz.question().unwrap().prompt.clone();
        let eval = answer_wrong(&mut quiz);

        assert_eq!(eval.outcome, Outcome::Incorrect);
        assert!(eval.mistake_recorded);
        assert!(!eval.is_correct());

        let mistake = &quiz.mistakes()[0];
        assert_eq!(mistake.prompt, prompt);
        assert_eq!(mistake.expected, eval.correct_answer);
        assert!(mistake.given.is_some());
        assert!(!mistake.timed_out);
    }

    #[test]
    fn test_correct_answer_records_nothing() {
        let mut quiz = quiz(abc(), 3);
        quiz.start_stage().unwrap();

        let eval = answer_correctly(&mut quiz);
        assert!(eval.is_correct());
        assert!(!eval.mistake_recorded);
        assert!(quiz.mistakes().is_empty());
    }

    #[test]
    fn test_timed_out_ignores_given() {
        let mut quiz = quiz(abc(), 3);
        quiz.start_stage().unwrap();

        let correct = quiz.question().unwrap().correct_answer.clone();
        let eval = quiz.evaluate_answer(Some(&correct), true).unwrap();

        assert_eq!(eval.outcome, Outcome::TimedOut);
        assert!(eval.mistake_recorded);
        assert_eq!(quiz.mistakes()[0].given, None);
        assert!(quiz.mistakes()[0].timed_out);
    }

    #[test]
    fn test_missing_answer_without_timeout_is_rejected() {
        let mut quiz = quiz(abc(), 3);
        quiz.start_stage().unwrap();
        let prompt = quiz.question().unwrap().prompt.clone();

        assert_matches!(
            quiz.evaluate_answer(None, false),
            Err(QuizError::MissingAnswer)
        );
        assert!(quiz.mistakes().is_empty());
        assert_eq!(quiz.phase(), Phase::Asking);
        assert_eq!(quiz.question().unwrap().prompt, prompt);
        assert_eq!(quiz.seconds_remaining(), Some(10));

        let wrong = quiz
            .question()
            .unwrap()
            .options
            .iter()
            .find(|o| **o != quiz.question().unwrap().correct_answer)
            .unwrap()
            .clone();
        quiz.evaluate_answer(Some(&wrong), false).unwrap();
        let mistake = &quiz.mistakes()[0];
        assert_eq!(mistake.given.as_deref(), Some(wrong.as_str()));
        assert!(!mistake.timed_out);
    }

    #[test]
    fn test_huge_stage_size_after_first_stage() {
        let mut quiz = quiz(abc(), 2);
        quiz.start_stage().unwrap();
        while quiz.phase() == Phase::Asking {
            answer_correctly(&mut quiz);
        }
        quiz.proceed_to_next_stage().unwrap();

        quiz.configure(config(usize::MAX, Level::SourceToTarget, 10))
            .unwrap();
        quiz.start_stage().unwrap();

        let stage = quiz.stage().unwrap();
        assert_eq!(stage.stage_start_index, 2);
        assert_eq!(stage.stage_end_index, 3);
        assert_eq!(quiz.stage_count(), 2);
    }

    #[test]
    fn test_countdown_expiry_records_one_timeout() {
        let mut quiz = quiz(abc(), 3);
        quiz.start_stage().unwrap();
        quiz.drain_events();

        let mut expired = Vec::new();
        for _ in 0..100 {
            if let Some(eval) = quiz.on_tick(Duration::from_millis(100)) {
                expired.push(eval);
            }
        }

        assert_eq!(expired.len(), 1);
        assert_eq!(expired[0].outcome, Outcome::TimedOut);
        assert_eq!(quiz.seconds_remaining(), Some(10));

        let ticks = quiz
            .drain_events()
            .into_iter()
            .filter(|e| matches!(e, QuizEvent::Tick { .. }))
            .count();
        assert_eq!(ticks, 10);

        while quiz.phase() == Phase::Asking {
            answer_correctly(&mut quiz);
        }

        let summary = quiz.summary();
        assert_eq!(summary.mistakes().len(), 1);
        let mistake = &summary.mistakes()[0];
        assert!(mistake.timed_out);
        assert_eq!(mistake.given, None);
    }

    #[test]
    fn test_answer_cancels_countdown() {
        let mut quiz = quiz(abc(), 3);
        quiz.start_stage().unwrap();

        quiz.on_tick(Duration::from_secs(9));
        assert_eq!(quiz.seconds_remaining(), Some(1));

        answer_correctly(&mut quiz);
        assert_eq!(quiz.seconds_remaining(), Some(10));
        assert!(quiz.on_tick(Duration::from_millis(999)).is_none());
        assert!(quiz.mistakes().is_empty());
    }

    #[test]
    fn test_no_evaluation_after_stage_complete() {
        let mut quiz = quiz(abc(), 1);
        quiz.start_stage().unwrap();
        answer_correctly(&mut quiz);

        assert_eq!(quiz.phase(), Phase::Complete);
        assert!(quiz.on_tick(Duration::from_secs(60)).is_none());
        assert_matches!(quiz.select_option("1"), Err(QuizError::NoActiveQuestion));
        assert_matches!(
            quiz.evaluate_answer(None, true),
            Err(QuizError::NoActiveQuestion)
        );
        assert!(quiz.mistakes().is_empty());
    }

    #[test]
    fn test_select_option_by_index() {
        let mut quiz = quiz(abc(), 3);
        quiz.start_stage().unwrap();

        let question = quiz.question().unwrap().clone();
        let index = question
            .options
            .iter()
            .position(|o| *o == question.correct_answer)
            .unwrap();

        assert_matches!(quiz.select_option_index(7), Err(QuizError::NoSuchOption(7)));
        let eval = quiz.select_option_index(index).unwrap();
        assert!(eval.is_correct());
    }

    #[test]
    fn test_stages_partition_the_vocabulary() {
        let vocab: Vec<VocabPair> = (0..11)
            .map(|i| VocabPair::new(format!("w{i}"), format!("m{i}")))
            .collect();
        let mut quiz = quiz(vocab.clone(), 4);
        assert_eq!(quiz.stage_count(), 3);

        let mut seen = Vec::new();
        let mut sizes = Vec::new();
        while !quiz.is_run_finished() {
            quiz.start_stage().unwrap();
            let stage = quiz.stage().unwrap();
            sizes.push(stage.len());
            seen.extend(stage.stage_words.iter().cloned());

            while quiz.phase() == Phase::Asking {
                answer_correctly(&mut quiz);
            }
            quiz.proceed_to_next_stage().unwrap();
        }

        assert_eq!(sizes, vec![4, 4, 3]);
        assert_eq!(quiz.stage_number(), 3);
        assert_eq!(quiz.stage_start_index(), 11);

        seen.sort_by(|a, b| a.source.cmp(&b.source));
        let mut expected = vocab;
        expected.sort_by(|a, b| a.source.cmp(&b.source));
        assert_eq!(seen, expected);
    }

    #[test]
    fn test_mistakes_are_per_stage_with_run_tally() {
        let vocab: Vec<VocabPair> = (0..6)
            .map(|i| VocabPair::new(format!("w{i}"), format!("m{i}")))
            .collect();
        let mut quiz = quiz(vocab, 3);

        quiz.start_stage().unwrap();
        answer_wrong(&mut quiz);
        answer_wrong(&mut quiz);
        answer_correctly(&mut quiz);
        assert_eq!(quiz.summary().mistakes().len(), 2);
        quiz.proceed_to_next_stage().unwrap();

        quiz.start_stage().unwrap();
        assert!(quiz.mistakes().is_empty());
        answer_wrong(&mut quiz);
        answer_correctly(&mut quiz);
        answer_correctly(&mut quiz);

        assert_eq!(quiz.summary().mistakes().len(), 1);
        assert_eq!(quiz.run_mistake_count(), 3);

        quiz.proceed_to_next_stage().unwrap();
        quiz.restart_run();
        assert_eq!(quiz.run_mistake_count(), 0);
        assert_eq!(quiz.stage_start_index(), 0);
    }

    #[test]
    fn test_empty_stage_completes_immediately() {
        let mut quiz = quiz(abc(), 3);
        quiz.start_stage().unwrap();
        while quiz.phase() == Phase::Asking {
            answer_wrong(&mut quiz);
        }
        quiz.proceed_to_next_stage().unwrap();
        assert!(quiz.is_run_finished());

        quiz.drain_events();
        quiz.start_stage().unwrap();
        assert_eq!(quiz.phase(), Phase::Complete);
        assert!(quiz.summary().is_perfect());

        let events = quiz.drain_events();
        assert_matches!(
            events.as_slice(),
            [
                QuizEvent::StageStarted { questions: 0, .. },
                QuizEvent::StageComplete {
                    summary: Summary::Perfect
                }
            ]
        );
    }

    #[test]
    fn test_event_sequence_for_one_question() {
        let mut quiz = quiz(abc(), 1);
        quiz.start_stage().unwrap();
        answer_correctly(&mut quiz);

        let events = quiz.drain_events();
        assert_matches!(
            events.as_slice(),
            [
                QuizEvent::StageStarted {
                    stage_number: 1,
                    questions: 1
                },
                QuizEvent::QuestionPresented { seconds: 10, .. },
                QuizEvent::AnswerEvaluated {
                    outcome: Outcome::Correct,
                    ..
                },
                QuizEvent::StageComplete {
                    summary: Summary::Perfect
                }
            ]
        );
        assert!(quiz.drain_events().is_empty());
    }

    #[test]
    fn test_commands_rejected_in_wrong_phase() {
        let mut quiz = quiz(abc(), 3);
        assert_matches!(
            quiz.proceed_to_next_stage(),
            Err(QuizError::WrongPhase(Phase::Idle))
        );

        quiz.start_stage().unwrap();
        assert_matches!(quiz.start_stage(), Err(QuizError::WrongPhase(Phase::Asking)));
        assert_matches!(
            quiz.configure(SessionConfig::default()),
            Err(QuizError::WrongPhase(Phase::Asking))
        );
        assert_matches!(
            quiz.load_vocabulary(abc()),
            Err(QuizError::WrongPhase(Phase::Asking))
        );
    }

    #[test]
    fn test_configure_between_stages() {
        let vocab: Vec<VocabPair> = (0..10)
            .map(|i| VocabPair::new(format!("w{i}"), format!("m{i}")))
            .collect();
        let mut quiz = quiz(vocab, 2);

        quiz.start_stage().unwrap();
        while quiz.phase() == Phase::Asking {
            answer_correctly(&mut quiz);
        }
        quiz.proceed_to_next_stage().unwrap();

        assert_matches!(
            quiz.configure(config(0, Level::Mixed, 5)),
            Err(QuizError::InvalidConfig)
        );
        quiz.configure(config(5, Level::TargetToSource, 5)).unwrap();
        assert_eq!(quiz.stage_count(), 3);

        quiz.start_stage().unwrap();
        let stage = quiz.stage().unwrap();
        assert_eq!((stage.stage_start_index, stage.stage_end_index), (2, 7));
        assert_eq!(quiz.seconds_remaining(), Some(5));
        assert!(quiz.question().unwrap().prompt.starts_with('m'));
    }

    #[test]
    fn test_load_vocabulary_restarts_run() {
        let mut quiz = quiz(abc(), 2);
        quiz.start_stage().unwrap();
        while quiz.phase() == Phase::Asking {
            answer_correctly(&mut quiz);
        }
        quiz.proceed_to_next_stage().unwrap();
        assert_eq!(quiz.stage_start_index(), 2);

        assert_matches!(quiz.load_vocabulary(vec![]), Err(QuizError::EmptyVocabulary));
        quiz.load_vocabulary(vec![VocabPair::new("x", "y")]).unwrap();
        assert_eq!(quiz.stage_start_index(), 0);
        assert_eq!(quiz.vocab().len(), 1);
    }

    #[test]
    fn test_single_pair_vocabulary_still_works() {
        let mut quiz = quiz(vec![VocabPair::new("solo", "only")], 5);
        quiz.start_stage().unwrap();

        let question = quiz.question().unwrap();
        assert_eq!(question.options, vec!["only".to_string()]);
        answer_correctly(&mut quiz);
        assert!(quiz.summary().is_perfect());
    }
}
