mod progress;
mod service;
mod summary;
mod workflow;

// Public API of the quiz subsystem.
pub use progress::progress_percent;
pub use service::{QuizIntent, QuizPhase, QuizSession};
pub use summary::{CardResult, ScoreSummary};
pub use workflow::QuizLoopService;
