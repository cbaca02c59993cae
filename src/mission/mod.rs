//! Secret missions: the catalog, assignment and win-condition checks

pub mod catalog;
pub mod evaluator;

pub use catalog::{assign_missions, Mission, MissionCatalog, MissionKind, PlayerMission};
pub use evaluator::{evaluate, evaluate_all, find_winner, MissionRules, MissionStatus};
