// Library surface for the binary and for headless/integration tests.
// UI rendering stays in the binary.
pub mod app_dirs;
pub mod celebration;
pub mod config;
pub mod countdown;
pub mod error;
pub mod events;
pub mod logging;
pub mod question;
pub mod quiz;
pub mod review;
pub mod runtime;
pub mod session;
pub mod vocab;

pub use error::QuizError;
pub use quiz::{Evaluation, Phase, Quiz};
pub use session::{Level, Mistake, SessionConfig, Summary};
pub use vocab::VocabPair;
