/// 戦略を設定に従って呼び分け、合法手を保証する AI。
pub mod agent;
/// アルファベータ探索（ミニマックス）による戦略。
pub mod alphabeta;
/// 焼きなまし法による戦略。
pub mod annealing;
/// 探索設定と TOML からの読み込み。
pub mod config;
/// 1手先の局面を採点するヒューリスティック評価関数。
pub mod eval;
/// 山登り法による戦略。
pub mod hill_climb;
#[cfg(test)]
mod testing;
pub mod types;

pub use agent::Agent;

pub type Heuristic = eval::Heuristic;
pub type Score = types::Score;
pub type SearchConfig = config::SearchConfig;
pub type StrategyKind = config::StrategyKind;
