use thiserror::Error;

use crate::quiz::Phase;

/// Commands the quiz engine refuses
#[derive(Debug, Error, PartialEq, Eq)]
pub enum QuizError {
    #[error("vocabulary has no usable pairs")]
    EmptyVocabulary,

    #[error("invalid configuration: stage size and time limit must be at least 1")]
    InvalidConfig,

    #[error("no question is waiting for an answer")]
    NoActiveQuestion,

    #[error("an answer is required unless the question timed out")]
    MissingAnswer,

    #[error("option {0} is not on screen")]
    NoSuchOption(usize),

    #[error("not allowed while {0:?}")]
    WrongPhase(Phase),
}
