use crate::session::Summary;

#[derive(Clone, Debug, Copy, PartialEq, Eq)]
pub enum Outcome {
    Correct,
    Incorrect,
    TimedOut,
}

/// Things the engine tells the UI about, in the order they happened
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum QuizEvent {
    StageStarted {
        stage_number: usize,
        questions: usize,
    },
    QuestionPresented {
        prompt: String,
        options: Vec<String>,
        seconds: u32,
    },
    Tick {
        seconds_remaining: u32,
    },
    AnswerEvaluated {
        outcome: Outcome,
        correct_answer: String,
    },
    StageComplete {
        summary: Summary,
    },
}
