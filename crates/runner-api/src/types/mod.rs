mod match_item;
mod selector;

pub use match_item::{Match, MatchAction, MatchType};
pub use selector::RunnerSelector;
