//! A game in progress and its closing report

pub mod session;
pub mod summary;

pub use session::GameSession;
pub use summary::{GameOutcome, GameSummary};
