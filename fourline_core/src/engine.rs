/// 盤面の契約（トレイト）と投機的着手のスコープガード。
pub mod board;
/// 局面（ビットボード）と着手/取り消し/勝敗判定の実装。
pub mod position;
pub mod types;

pub use board::{Board, Speculation, TurnOverride};
pub type Position = position::Position;
pub type Color = types::Color;
pub type Column = types::Column;
pub type MoveError = types::MoveError;
pub type DimensionError = position::DimensionError;
